use std::{io, path::PathBuf};

use thiserror::Error;

use crate::task::ValidationReport;

#[derive(Debug, Error)]
pub enum LintError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Working directory '{}' could not be resolved: {source}", .path.display())]
    WorkingDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Working directory '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("{0}")]
    Invalid(#[from] ValidationReport),
}

pub type Result<T> = std::result::Result<T, LintError>;
