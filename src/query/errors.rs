//! Query error taxonomy
//!
//! Both kinds are client-caused and non-retryable. The core has no
//! internal error kind: store failures surface at startup instead.

use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Query evaluation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A supplied parameter failed validation
    #[error("Invalid value '{value}' for parameter '{param}': {reason}")]
    InvalidArgument {
        param: String,
        value: String,
        reason: String,
    },

    /// No todo with the requested identifier
    #[error("Todo not found: {0}")]
    NotFound(String),
}

impl QueryError {
    /// Create an invalid argument error
    pub fn invalid_argument(
        param: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        QueryError::InvalidArgument {
            param: param.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::InvalidArgument { .. } => "TODO_INVALID_ARGUMENT",
            QueryError::NotFound(_) => "TODO_NOT_FOUND",
        }
    }

    /// Returns the offending parameter name, if any
    pub fn param(&self) -> Option<&str> {
        match self {
            QueryError::InvalidArgument { param, .. } => Some(param),
            QueryError::NotFound(_) => None,
        }
    }
}
