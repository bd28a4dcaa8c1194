//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Domain(_)
                | ApplicationError::OperationFailed { .. }
                | ApplicationError::Parse { .. }
                | ApplicationError::Script { .. } => crate::exitcode::DATAERR,
                ApplicationError::Load { .. } => crate::exitcode::NOINPUT,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, HistoryKind};
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let no_history: CliError =
            ApplicationError::Domain(DomainError::NoHistory(HistoryKind::Undo)).into();
        assert_eq!(no_history.exit_code(), crate::exitcode::DATAERR);

        let missing: CliError = ApplicationError::Load {
            path: PathBuf::from("org.toml"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }
        .into();
        assert_eq!(missing.exit_code(), crate::exitcode::NOINPUT);

        assert_eq!(
            CliError::Usage("no hierarchy".into()).exit_code(),
            crate::exitcode::USAGE
        );
    }
}
