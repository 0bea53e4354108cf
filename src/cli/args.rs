//! CLI argument definitions using clap
//!
//! Commands:
//! - todobase serve --config <path> [--port <n>]
//! - todobase query --config <path> [--param name=value]...
//! - todobase get --config <path> <id>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// todobase - A read-only query service over a todo snapshot
#[derive(Parser, Debug)]
#[command(name = "todobase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the todo snapshot and serve the HTTP API
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./todobase.json")]
        config: PathBuf,

        /// Override the configured HTTP port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run a single list query and print the result as JSON
    Query {
        /// Path to configuration file
        #[arg(long, default_value = "./todobase.json")]
        config: PathBuf,

        /// Query parameter, repeatable (e.g. --param orderBy=owner)
        #[arg(long = "param", short = 'p', value_name = "NAME=VALUE")]
        params: Vec<String>,
    },

    /// Print a single todo as JSON
    Get {
        /// Path to configuration file
        #[arg(long, default_value = "./todobase.json")]
        config: PathBuf,

        /// Todo identifier
        id: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
