use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, warn};

use super::{ScriptTask, Task, TaskMetadata, Tasks};
use crate::{error::Result, util::absolutize};

#[derive(Debug, Deserialize)]
struct Config {
    #[serde(rename = "task", default)]
    tasks: HashMap<String, TaskEntry>,
}

#[derive(Debug, Deserialize)]
struct TaskEntry {
    #[serde(flatten)]
    metadata: TaskMetadata,
    #[serde(default)]
    cmd: String,
}

#[derive(Debug)]
pub struct TaskConfiguration {
    /// Directory the taskfile lives in; every task runs from here.
    pub dir: PathBuf,
    pub tasks: Tasks,
}

pub fn load_tasks(config_path: impl AsRef<Path>) -> Result<TaskConfiguration> {
    let config_path = config_path.as_ref();
    let config = load_and_parse_config(config_path)?;
    let dir = taskfile_dir(config_path)?;
    Ok(process_config(config, dir))
}

fn load_and_parse_config(config_path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(config_path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

fn taskfile_dir(config_path: &Path) -> Result<PathBuf> {
    let parent = match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok(absolutize(parent)?)
}

fn process_config(config: Config, dir: PathBuf) -> TaskConfiguration {
    if config.tasks.is_empty() {
        warn!("taskfile declares no tasks");
    }

    let tasks: Tasks = config
        .tasks
        .into_iter()
        .map(|(name, mut entry)| {
            if entry.metadata.id.is_empty() {
                entry.metadata.id = name.clone();
            }
            debug!(key = %name, id = %entry.metadata.id, "loaded task");
            let task: Box<dyn Task> = Box::new(ScriptTask::new(entry.metadata, &dir, entry.cmd));
            (name, task)
        })
        .collect();

    TaskConfiguration { dir, tasks }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> TaskConfiguration {
        let config: Config = toml::from_str(contents).unwrap();
        process_config(config, PathBuf::from("/work"))
    }

    #[test]
    fn key_becomes_id_when_absent() {
        let config = parse(
            r#"
            [task.build]
            type = "short"
            cmd = "cargo build"
            dependencies = ["fmt"]
            watch = ["src"]

            [task.fmt]
            type = "short"
            cmd = "cargo fmt"
            "#,
        );

        let build = config.tasks["build"].script().unwrap();
        assert_eq!(build.metadata.id, "build");
        assert_eq!(build.metadata.task_type, "short");
        assert_eq!(build.metadata.dependencies, vec!["fmt".to_string()]);
        assert_eq!(build.metadata.watch, vec![PathBuf::from("src")]);
        assert_eq!(build.cmd, "cargo build");
        assert_eq!(build.dir, PathBuf::from("/work"));
    }

    #[test]
    fn explicit_id_is_kept_even_when_it_differs() {
        let config = parse(
            r#"
            [task.alias]
            id = "real"
            type = "short"
            cmd = "true"
            "#,
        );

        assert_eq!(config.tasks["alias"].metadata().id, "real");
    }

    #[test]
    fn missing_fields_load_as_empty() {
        let config = parse(
            r#"
            [task.bare]
            description = "nothing here"
            "#,
        );

        let bare = config.tasks["bare"].script().unwrap();
        assert_eq!(bare.metadata.task_type, "");
        assert_eq!(bare.metadata.description.as_deref(), Some("nothing here"));
        assert!(bare.cmd.is_empty());
        assert!(bare.metadata.triggers.is_empty());
    }

    #[test]
    fn empty_taskfile_has_no_tasks() {
        assert!(parse("").tasks.is_empty());
    }

    #[test]
    fn syntax_errors_surface_as_parse_errors() {
        let err = toml::from_str::<Config>("[task.build\ncmd = 1").unwrap_err();
        let err = crate::error::LintError::from(err);
        assert!(err.to_string().starts_with("Parse error:"));
    }
}
