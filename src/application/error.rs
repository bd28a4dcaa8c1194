//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("cannot read {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid hierarchy file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("script line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("{operation} failed: {source}")]
    OperationFailed {
        operation: String,
        #[source]
        source: DomainError,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
