//! Error types for the fixity integrity checker.

use std::path::PathBuf;
use thiserror::Error;

/// Per-path failures raised while walking or hashing.
///
/// These never abort a scan on their own; the snapshot records them and the
/// report surfaces them as `ERROR` verdicts.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a regular file: {0:?}")]
    NotAFile(PathBuf),

    #[error("Failed to walk directory: {0}")]
    Walk(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors that end an invocation.
#[derive(Debug, Error)]
pub enum IntegrityError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Directory '{0}' does not exist or is not a directory")]
    InvalidDirectory(PathBuf),

    #[error("Baseline file not found: {0}. Run `fixity create` first.")]
    BaselineMissing(PathBuf),

    #[error("Baseline file {path:?} is not a valid baseline: {message}")]
    BaselineParse { path: PathBuf, message: String },

    #[error("Storage error: {0}")]
    Io(#[from] HashError),
}

impl IntegrityError {
    /// Process exit code for this error. Stable across releases.
    pub fn exit_code(&self) -> i32 {
        match self {
            IntegrityError::Io(_) => 1,
            IntegrityError::ConfigError(_) | IntegrityError::InvalidDirectory(_) => 2,
            IntegrityError::BaselineMissing(_) => 3,
            IntegrityError::BaselineParse { .. } => 4,
        }
    }
}

impl From<config::ConfigError> for IntegrityError {
    fn from(err: config::ConfigError) -> Self {
        IntegrityError::ConfigError(err.to_string())
    }
}
