//! Record store errors
//!
//! All store errors surface at startup. None are raised at query time.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while building the record store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Data file could not be read
    #[error("Failed to read data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file is not a JSON array of todos
    #[error("Invalid data file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share an identifier
    #[error("Duplicate todo id: {0}")]
    DuplicateId(String),

    /// A record violates a field constraint
    #[error("Invalid todo '{id}': {reason}")]
    InvalidRecord { id: String, reason: String },
}

impl StoreError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Io { .. } => "TODO_STORE_IO",
            StoreError::Parse(_) => "TODO_STORE_PARSE",
            StoreError::DuplicateId(_) => "TODO_STORE_DUPLICATE_ID",
            StoreError::InvalidRecord { .. } => "TODO_STORE_INVALID_RECORD",
        }
    }

    pub(crate) fn invalid_record(id: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::InvalidRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
