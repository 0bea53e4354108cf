//! HTTP server module
//!
//! Serves the REST API over axum with CORS and request tracing.

pub mod config;
pub mod server;

pub use config::{HttpConfigError, HttpConfigResult, HttpServerConfig};
pub use server::HttpServer;
