//! Configuration file handling
//!
//! The config is a single JSON object. Only `data_file` is required.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;

use super::errors::{CliError, CliResult};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON array of todos, relative to the config file (required)
    pub data_file: PathBuf,

    /// HTTP server settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Default log filter when RUST_LOG is unset (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Directory of the config file; relative paths resolve against it
    #[serde(skip)]
    base_dir: PathBuf,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!(
                "Failed to read config {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::from_json_str(&content)?;
        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(config)
    }

    /// Parse and validate configuration JSON
    pub fn from_json_str(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(CliError::config_error(format!(
                "Invalid log_level: '{}'. Expected one of {}.",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        self.http
            .validate()
            .map_err(|e| CliError::config_error(format!("Invalid http config: {}", e)))?;

        Ok(())
    }

    /// The data file path, resolved against the config file's directory
    pub fn data_path(&self) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            self.base_dir.join(&self.data_file)
        }
    }
}
