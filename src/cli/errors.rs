//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit status.

use std::io;

use thiserror::Error;

use crate::query::QueryError;
use crate::store::StoreError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing, malformed or invalid
    #[error("{0}")]
    Config(String),

    /// Todo data could not be loaded
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Malformed `--param` argument
    #[error("Invalid --param '{0}': expected NAME=VALUE")]
    InvalidParam(String),

    /// Query rejected or todo not found
    #[error(transparent)]
    Query(#[from] QueryError),

    /// I/O error (stdout, runtime, sockets)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "TODO_CLI_CONFIG_ERROR",
            CliError::Store(err) => err.code(),
            CliError::InvalidParam(_) => "TODO_CLI_INVALID_PARAM",
            CliError::Query(err) => err.code(),
            CliError::Io(_) => "TODO_CLI_IO_ERROR",
            CliError::Json(_) => "TODO_CLI_IO_ERROR",
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
