use std::{fmt, path::PathBuf};

use serde::Serialize;
use thiserror::Error;

/// One defect found in a taskfile.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Problem {
    #[error("task '{task}' has mismatched key '{key}'")]
    MismatchedKey { task: String, key: String },

    #[error("Task has no ID.")]
    MissingId,

    #[error("'{task}' is reserved and cannot be used as a task ID.")]
    ReservedId { task: String },

    #[error(
        "Task '{task}' contains whitespace {character:?}; task IDs cannot contain whitespace characters."
    )]
    WhitespaceInId { task: String, character: char },

    #[error("Task '{task}' has invalid type '{task_type}'; must be 'long', 'short', or 'group'.")]
    InvalidType { task: String, task_type: String },

    #[error(
        "Task '{task}' is a group, but has no dependencies. Groups must include at least one dependency."
    )]
    GroupWithoutDependencies { task: String },

    #[error("Task '{task}' is a group, but has triggers. Groups may not have triggers.")]
    GroupWithTriggers { task: String },

    #[error("Task '{task}' is a group, but has watch. Groups may not have watch.")]
    GroupWithWatch { task: String },

    #[error("Task '{task}' is a group, but has a cmd. The cmd will not be executed.")]
    GroupWithCommand { task: String },

    #[error("Task '{task}' is not a group, but has no cmd. It should be a group.")]
    MissingCommand { task: String },

    #[error("Task '{task}' lists dependency '{dependency}', which is not the ID of a task.")]
    UnknownDependency { task: String, dependency: String },

    #[error("Task '{task}' lists trigger '{trigger}', which is not the ID of a task.")]
    UnknownTrigger { task: String, trigger: String },

    #[error(
        "Task '{task}' lists trigger '{trigger}', which is long. Long tasks aren't expected to end, so using them as triggers is invalid."
    )]
    LongTrigger { task: String, trigger: String },

    #[error("Task '{task}' wants to watch path '{}', which is absolute.", .path.display())]
    AbsoluteWatchPath { task: String, path: PathBuf },

    #[error("Task '{task}' had an error resolving path '{}': {error}.", .path.display())]
    UnresolvableWatchPath {
        task: String,
        path: PathBuf,
        error: String,
    },

    #[error(
        "Task '{task}' wants to watch path '{}', which is outside of the working directory.",
        .path.display()
    )]
    WatchOutsideWorkingDirectory { task: String, path: PathBuf },
}

impl Problem {
    /// ID of the task the problem is about; empty for [`Problem::MissingId`].
    pub fn task_id(&self) -> &str {
        match self {
            Problem::MissingId => "",
            Problem::MismatchedKey { task, .. }
            | Problem::ReservedId { task }
            | Problem::WhitespaceInId { task, .. }
            | Problem::InvalidType { task, .. }
            | Problem::GroupWithoutDependencies { task }
            | Problem::GroupWithTriggers { task }
            | Problem::GroupWithWatch { task }
            | Problem::GroupWithCommand { task }
            | Problem::MissingCommand { task }
            | Problem::UnknownDependency { task, .. }
            | Problem::UnknownTrigger { task, .. }
            | Problem::LongTrigger { task, .. }
            | Problem::AbsoluteWatchPath { task, .. }
            | Problem::UnresolvableWatchPath { task, .. }
            | Problem::WatchOutsideWorkingDirectory { task, .. } => task,
        }
    }
}

/// Every problem found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    problems: Vec<Problem>,
}

impl ValidationReport {
    pub fn new(problems: Vec<Problem>) -> Self {
        Self { problems }
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn contains(&self, problem: &Problem) -> bool {
        self.problems.contains(problem)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid taskfile")?;
        for problem in &self.problems {
            write!(f, "\n- {}", problem)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// JSON shape of a problem: its fields, its `kind` and the rendered message.
#[derive(Serialize)]
pub struct ProblemRecord<'a> {
    #[serde(flatten)]
    pub problem: &'a Problem,
    pub message: String,
}

impl<'a> From<&'a Problem> for ProblemRecord<'a> {
    fn from(problem: &'a Problem) -> Self {
        Self {
            problem,
            message: problem.to_string(),
        }
    }
}
