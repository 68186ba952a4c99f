pub mod analysis;
pub mod config;
pub mod problem;
pub mod validator;

pub use analysis::show_task_relationships;
pub use config::{TaskConfiguration, load_tasks};
pub use problem::{Problem, ValidationReport};
pub use validator::Validator;

use serde::Deserialize;
use std::{collections::BTreeMap, fmt, path::PathBuf};

/// Task collection keyed by ID. Ordered so reports come out the same way every run.
pub type Tasks = BTreeMap<String, Box<dyn Task>>;

/// The kinds of task a runner understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskType {
    /// Never expected to exit, e.g. a dev server.
    Long,
    /// Runs to completion.
    Short,
    /// Has no command of its own, only dependencies.
    Group,
}

impl TaskType {
    pub fn parse(s: &str) -> Option<TaskType> {
        match s {
            "long" => Some(TaskType::Long),
            "short" => Some(TaskType::Short),
            "group" => Some(TaskType::Group),
            _ => None,
        }
    }
}

/// Fields every task variant carries.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct TaskMetadata {
    #[serde(default)]
    pub id: String,
    /// Raw type as written; checked by the validator rather than at load time.
    #[serde(default, rename = "type")]
    pub task_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub watch: Vec<PathBuf>,
}

impl TaskMetadata {
    pub fn new(id: impl Into<String>, task_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            task_type: task_type.into(),
            ..Default::default()
        }
    }

    pub fn with_dependencies<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_triggers<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.triggers = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_watch<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.watch = paths.into_iter().map(Into::into).collect();
        self
    }

    /// `None` when the written type is not one the runner knows.
    pub fn kind(&self) -> Option<TaskType> {
        TaskType::parse(&self.task_type)
    }

    pub fn is_group(&self) -> bool {
        self.kind() == Some(TaskType::Group)
    }
}

/// A declared unit of work.
///
/// Only script tasks own a command and a directory; other variants leave
/// [`Task::script`] at its default.
pub trait Task: fmt::Debug + Send + Sync {
    fn metadata(&self) -> &TaskMetadata;

    fn script(&self) -> Option<&ScriptTask> {
        None
    }
}

/// A task declared without a command, e.g. one registered programmatically
/// by the runner rather than read from a taskfile.
impl Task for TaskMetadata {
    fn metadata(&self) -> &TaskMetadata {
        self
    }
}

/// A task that runs a shell command from a directory.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptTask {
    pub metadata: TaskMetadata,
    pub dir: PathBuf,
    pub cmd: String,
}

impl ScriptTask {
    pub fn new(metadata: TaskMetadata, dir: impl Into<PathBuf>, cmd: impl Into<String>) -> Self {
        Self {
            metadata,
            dir: dir.into(),
            cmd: cmd.into(),
        }
    }
}

impl Task for ScriptTask {
    fn metadata(&self) -> &TaskMetadata {
        &self.metadata
    }

    fn script(&self) -> Option<&ScriptTask> {
        Some(self)
    }
}
