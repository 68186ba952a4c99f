use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use super::{Problem, Task, TaskType, Tasks, ValidationReport};
use crate::{
    error::{LintError, Result},
    util::{absolutize, is_within, join_under},
};

/// IDs the runner's command line claims for its own execution modes.
pub const DEFAULT_RESERVED_IDS: [&str; 2] = ["interleaved", "run"];

/// Checks a task collection for problems before anything runs.
#[derive(Debug, Clone)]
pub struct Validator {
    cwd: Option<PathBuf>,
    reserved: BTreeSet<String>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// A validator with no working directory; watch paths are not checked for
    /// containment.
    pub fn new() -> Self {
        Self {
            cwd: None,
            reserved: DEFAULT_RESERVED_IDS.iter().map(|id| id.to_string()).collect(),
        }
    }

    /// A validator anchored at `cwd`, which must exist and be a directory.
    pub fn with_cwd(cwd: impl AsRef<Path>) -> Result<Self> {
        let cwd = cwd.as_ref();
        let abs = absolutize(cwd).map_err(|source| LintError::WorkingDirectory {
            path: cwd.to_path_buf(),
            source,
        })?;

        let metadata = fs::metadata(&abs).map_err(|source| LintError::WorkingDirectory {
            path: abs.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(LintError::NotADirectory(abs));
        }

        debug!(cwd = %abs.display(), "validator anchored");

        Ok(Self {
            cwd: Some(abs),
            ..Self::new()
        })
    }

    /// Replaces the set of IDs tasks may not use.
    pub fn with_reserved_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_reserved(&self, id: &str) -> bool {
        self.reserved.contains(id)
    }

    /// Runs every check over `tasks` and reports all problems at once.
    pub fn validate(&self, tasks: &Tasks) -> std::result::Result<(), ValidationReport> {
        let mut problems = Vec::new();

        for (key, task) in tasks {
            let id = &task.metadata().id;
            if key != id {
                problems.push(Problem::MismatchedKey {
                    task: id.clone(),
                    key: key.clone(),
                });
            }
        }

        for task in tasks.values() {
            let found = self.validate_task(tasks, task.as_ref());
            debug!(task = %task.metadata().id, problems = found.len(), "checked task");
            problems.extend(found);
        }

        if problems.is_empty() {
            info!(tasks = tasks.len(), "taskfile is valid");
            Ok(())
        } else {
            info!(
                tasks = tasks.len(),
                problems = problems.len(),
                "taskfile is invalid"
            );
            Err(ValidationReport::new(problems))
        }
    }

    /// Checks a single task against the collection it belongs to.
    pub fn validate_task(&self, tasks: &Tasks, task: &dyn Task) -> Vec<Problem> {
        let mut problems = Vec::new();
        let meta = task.metadata();
        let id = || meta.id.clone();

        if meta.id.is_empty() {
            problems.push(Problem::MissingId);
        }

        if self.is_reserved(&meta.id) {
            problems.push(Problem::ReservedId { task: id() });
        }

        for character in meta.id.chars().filter(|c| c.is_whitespace()) {
            problems.push(Problem::WhitespaceInId {
                task: id(),
                character,
            });
        }

        let kind = meta.kind();
        if kind.is_none() {
            problems.push(Problem::InvalidType {
                task: id(),
                task_type: meta.task_type.clone(),
            });
        }

        let script = task.script();
        if meta.is_group() {
            if meta.dependencies.is_empty() {
                problems.push(Problem::GroupWithoutDependencies { task: id() });
            }
            if !meta.triggers.is_empty() {
                problems.push(Problem::GroupWithTriggers { task: id() });
            }
            if !meta.watch.is_empty() {
                problems.push(Problem::GroupWithWatch { task: id() });
            }
            if script.is_some_and(|s| !s.cmd.is_empty()) {
                problems.push(Problem::GroupWithCommand { task: id() });
            }
        } else if script.is_some_and(|s| s.cmd.is_empty()) {
            problems.push(Problem::MissingCommand { task: id() });
        }

        for dependency in &meta.dependencies {
            if !tasks.contains_key(dependency) {
                problems.push(Problem::UnknownDependency {
                    task: id(),
                    dependency: dependency.clone(),
                });
            }
        }

        for trigger in &meta.triggers {
            match tasks.get(trigger) {
                None => problems.push(Problem::UnknownTrigger {
                    task: id(),
                    trigger: trigger.clone(),
                }),
                Some(source) if source.metadata().kind() == Some(TaskType::Long) => {
                    problems.push(Problem::LongTrigger {
                        task: id(),
                        trigger: trigger.clone(),
                    })
                }
                Some(_) => {}
            }
        }

        for path in &meta.watch {
            if path.has_root() {
                problems.push(Problem::AbsoluteWatchPath {
                    task: id(),
                    path: path.clone(),
                });
            }

            let Some(script) = script else {
                continue;
            };
            match absolutize(&join_under(&script.dir, path)) {
                Err(err) => problems.push(Problem::UnresolvableWatchPath {
                    task: id(),
                    path: path.clone(),
                    error: err.to_string(),
                }),
                Ok(abs) => {
                    if let Some(cwd) = &self.cwd {
                        if !is_within(&abs, cwd) {
                            problems.push(Problem::WatchOutsideWorkingDirectory {
                                task: id(),
                                path: path.clone(),
                            });
                        }
                    }
                }
            }
        }

        problems
    }
}
