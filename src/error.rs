use std::fmt;
use std::io;

use thiserror::Error;

/// Whether the partial project tree was removed after a failed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupOutcome {
    /// The partial project tree is gone.
    Removed,
    /// Removal failed; the partial tree may still be on disk.
    LeftBehind,
}

impl fmt::Display for CleanupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanupOutcome::Removed => write!(f, "partial project removed"),
            CleanupOutcome::LeftBehind => write!(f, "cleanup failed, partial project left behind"),
        }
    }
}

/// Library-wide error type for ovidiu operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Target project directory already exists.
    #[error("Project directory '{0}' already exists")]
    ProjectExists(String),

    /// Project path has no usable final component to name the project after.
    #[error("Project path '{0}' has no directory name")]
    InvalidProjectPath(String),

    /// Git repository initialization failed.
    #[error(transparent)]
    Git(#[from] git2::Error),

    /// An external tool invocation failed.
    #[error("Command '{command}' failed: {details}")]
    Tool { command: String, details: String },

    /// Template rendering failed.
    #[error("Failed to render template '{name}': {details}")]
    Template { name: String, details: String },

    /// A scaffolding step failed and the failure handler ran.
    #[error("Step '{step}' failed ({cleanup}): {source}")]
    StepFailed { step: &'static str, cleanup: CleanupOutcome, source: Box<AppError> },
}

impl AppError {
    /// Provide an `io::ErrorKind` view of the error for callers that branch on it.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidProjectPath(_) | AppError::Template { .. } => {
                io::ErrorKind::InvalidInput
            }
            AppError::ProjectExists(_) => io::ErrorKind::AlreadyExists,
            AppError::Git(_) | AppError::Tool { .. } => io::ErrorKind::Other,
            AppError::StepFailed { source, .. } => source.kind(),
        }
    }
}
