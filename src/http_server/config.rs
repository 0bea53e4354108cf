//! HTTP server settings
//!
//! Bind address, allowed CORS origins and the single-todo status code.
//! Invalid values are rejected when the config is validated, so a bad
//! setting fails startup instead of being ignored at request time.

use std::net::SocketAddr;

use axum::http::{HeaderValue, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for HTTP settings
pub type HttpConfigResult<T> = Result<T, HttpConfigError>;

/// Invalid HTTP settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpConfigError {
    /// `host:port` does not form a socket address
    #[error("Invalid listen address '{0}'")]
    InvalidAddress(String),

    /// CORS origin is not a valid header value
    #[error("Invalid CORS origin '{0}'")]
    InvalidOrigin(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// IP address to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 4567)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Answer `GET /api/todos/:id` with 201 instead of 200
    #[serde(default)]
    pub legacy_created_status: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4567
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:4200".to_string()]
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            legacy_created_status: false,
        }
    }
}

impl HttpServerConfig {
    /// Checks the address and every CORS origin
    pub fn validate(&self) -> HttpConfigResult<()> {
        self.socket_addr()?;
        self.allowed_origins()?;
        Ok(())
    }

    /// The address to bind
    pub fn socket_addr(&self) -> HttpConfigResult<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| HttpConfigError::InvalidAddress(addr))
    }

    /// Parsed CORS origins. `None` means any origin is allowed.
    pub fn allowed_origins(&self) -> HttpConfigResult<Option<Vec<HeaderValue>>> {
        if self.cors_origins.is_empty() {
            return Ok(None);
        }

        self.cors_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| HttpConfigError::InvalidOrigin(origin.clone()))
            })
            .collect::<HttpConfigResult<Vec<_>>>()
            .map(Some)
    }

    /// Status code for a successful single-todo read
    pub fn get_one_status(&self) -> StatusCode {
        if self.legacy_created_status {
            StatusCode::CREATED
        } else {
            StatusCode::OK
        }
    }
}
