//! CLI module for todobase
//!
//! Provides command-line interface for:
//! - serve: Load the snapshot and serve the HTTP API
//! - query: One-shot list query
//! - get: One-shot lookup by identifier

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{get, query, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliResult};
pub use io::write_response;
