use std::collections::BTreeMap;

use tracing::info;

use super::Tasks;

/// Logs how each task is wired to the rest of the collection.
pub fn show_task_relationships(tasks: &Tasks, verbose: bool) {
    if !verbose {
        return;
    }

    let triggered = triggered_by(tasks);

    for (key, task) in tasks {
        let meta = task.metadata();
        info!(
            task = %key,
            kind = %meta.task_type,
            dependencies = ?meta.dependencies,
            triggers = ?meta.triggers,
            watch = ?meta.watch,
            "task declared"
        );

        if let Some(dependents) = triggered.get(key.as_str()) {
            info!(task = %key, "re-runs {}", dependents.join(", "));
        }
    }
}

/// Maps each trigger ID to the tasks that re-run when it completes.
pub fn triggered_by(tasks: &Tasks) -> BTreeMap<&str, Vec<&str>> {
    let mut map: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

    for (key, task) in tasks {
        for trigger in &task.metadata().triggers {
            map.entry(trigger.as_str()).or_default().push(key.as_str());
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{ScriptTask, Task, TaskMetadata};

    #[test]
    fn inverts_trigger_lists() {
        let mut tasks = Tasks::new();
        for (id, triggers) in [("gen", vec![]), ("build", vec!["gen"]), ("lint", vec!["gen"])] {
            let task: Box<dyn Task> = Box::new(ScriptTask::new(
                TaskMetadata::new(id, "short").with_triggers(triggers),
                "/work",
                "true",
            ));
            tasks.insert(id.to_string(), task);
        }

        let map = triggered_by(&tasks);
        assert_eq!(map.get("gen"), Some(&vec!["build", "lint"]));
        assert_eq!(map.get("build"), None);
    }
}
