//! CLI error type and exit codes.

use chatrelay_axum::BootstrapError;
use thiserror::Error;

/// Errors that end the process.
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing or invalid configuration; nothing was bound.
    #[error("{0}")]
    Config(String),

    /// The listener could not be bound or the server loop failed.
    #[error("Server error: {0}")]
    Server(String),
}

impl CliError {
    /// Map error to an exit code (see sysexits.h).
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 78, // EX_CONFIG
            Self::Server(_) => 1,
        }
    }
}

impl From<BootstrapError> for CliError {
    fn from(err: BootstrapError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        Self::Server(format!("{err:#}"))
    }
}
