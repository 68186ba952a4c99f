//! Static checks for task-runner taskfiles.
//!
//! A taskfile declares named tasks with a type, dependencies, triggers and
//! watched paths. [`Validator`] walks a loaded collection and reports every
//! problem in one [`ValidationReport`] instead of stopping at the first.
//!
//! ```no_run
//! use tasklint::{Validator, load_tasks};
//!
//! let config = load_tasks("tasks.toml")?;
//! let validator = Validator::with_cwd(&config.dir)?;
//! validator.validate(&config.tasks)?;
//! # Ok::<(), tasklint::LintError>(())
//! ```

pub mod cli;
pub mod error;
pub mod output;
pub mod task;
pub mod util;

pub use error::{LintError, Result};
pub use task::{
    Problem, ScriptTask, Task, TaskConfiguration, TaskMetadata, TaskType, Tasks,
    ValidationReport, Validator, load_tasks,
};
