//! CLI-level errors

use thiserror::Error;

use crate::config::SettingsError;
use crate::CommandNotFound;

/// Top-level error type; what gets displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] SettingsError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    NotFound(#[from] CommandNotFound),

    #[error("command failed: {0}")]
    Command(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => crate::exitcode::CONFIG,
            CliError::Io { .. } => crate::exitcode::IOERR,
            CliError::NotFound(_) => crate::exitcode::USAGE,
            CliError::Command(_) => crate::exitcode::SOFTWARE,
        }
    }
}
