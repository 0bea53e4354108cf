//! # REST API Errors
//!
//! Maps query failures onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::query::QueryError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    /// Query validation or lookup failure
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::Query(QueryError::InvalidArgument { .. }) => StatusCode::BAD_REQUEST,
            RestError::Query(QueryError::NotFound(_)) => StatusCode::NOT_FOUND,
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            RestError::Query(err) => err.code(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        let param = match &err {
            RestError::Query(query_err) => query_err.param().map(str::to_string),
        };
        Self {
            status: err.status_code().as_u16(),
            code: err.code(),
            error: err.to_string(),
            param,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
