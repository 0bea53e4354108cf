//! CLI command implementations
//!
//! Every command loads the config, then the todo snapshot, before doing
//! anything else. A bad config or data file fails the command up front.

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::http_server::HttpServer;
use crate::query::{QueryEngine, RawParams, TodoQuery};
use crate::rest_api::StoreHandler;
use crate::store::{RecordStore, TodoStore};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Query { config, params } => query(&config, &params),
        Command::Get { config, id } => get(&config, &id),
    }
}

/// Install the global tracing subscriber.
///
/// RUST_LOG wins over the configured level. Output goes to stderr so it
/// never mixes with JSON written to stdout.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load config and snapshot, with logging initialized from the config
fn boot(config_path: &Path) -> CliResult<(Config, TodoStore)> {
    let config = Config::load(config_path)?;
    init_logging(&config.log_level);

    let data_path = config.data_path();
    let store = TodoStore::load(&data_path).map_err(|e| {
        tracing::error!(path = %data_path.display(), code = e.code(), error = %e, "failed to load todos");
        e
    })?;
    tracing::info!(path = %data_path.display(), todos = store.len(), "todo snapshot loaded");

    Ok((config, store))
}

/// Serve the HTTP API until the process is stopped
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let (config, store) = boot(config_path)?;

    let mut http_config = config.http.clone();
    if let Some(port) = port {
        http_config.port = port;
    }

    let handler = Arc::new(StoreHandler::new(Arc::new(store)));
    let server = HttpServer::with_config(&http_config, handler)
        .map_err(|e| CliError::config_error(format!("Invalid http config: {}", e)))?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(server.start())?;

    Ok(())
}

/// Run one list query and print the outcome
pub fn query(config_path: &Path, params: &[String]) -> CliResult<()> {
    let (_config, store) = boot(config_path)?;

    let raw = parse_param_pairs(params)?;
    let query = TodoQuery::parse(&raw)?;
    let outcome = QueryEngine::new(&store).execute(&query);

    write_response(serde_json::to_value(outcome)?)
}

/// Print a single todo
pub fn get(config_path: &Path, id: &str) -> CliResult<()> {
    let (_config, store) = boot(config_path)?;

    let todo = QueryEngine::new(&store).get_record_by_id(id)?;

    write_response(serde_json::to_value(todo)?)
}

/// Splits `name=value` arguments into raw parameters.
///
/// Only the first `=` separates, so values may contain `=`.
fn parse_param_pairs(params: &[String]) -> CliResult<RawParams> {
    params
        .iter()
        .map(|param| {
            param
                .split_once('=')
                .filter(|(name, _)| !name.is_empty())
                .ok_or_else(|| CliError::InvalidParam(param.clone()))
        })
        .collect::<CliResult<Vec<_>>>()
        .map(|pairs| pairs.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_param_pairs() {
        let raw = parse_param_pairs(&strings(&["limit=5", "contains=a=b", "owner="])).unwrap();

        assert_eq!(raw.first("limit"), Some("5"));
        assert_eq!(raw.first("contains"), Some("a=b"));
        assert_eq!(raw.first("owner"), Some(""));
    }

    #[test]
    fn test_parse_param_pairs_rejects_malformed() {
        assert!(matches!(
            parse_param_pairs(&strings(&["limit"])),
            Err(CliError::InvalidParam(p)) if p == "limit"
        ));
        assert!(parse_param_pairs(&strings(&["=5"])).is_err());
    }

    fn write_fixture(tmp: &TempDir) -> std::path::PathBuf {
        fs::write(
            tmp.path().join("todos.json"),
            r#"[{"_id":"a","owner":"Fry","status":true,"body":"x","category":"homework"}]"#,
        )
        .unwrap();
        let config = tmp.path().join("todobase.json");
        fs::write(&config, r#"{"data_file": "todos.json", "log_level": "error"}"#).unwrap();
        config
    }

    #[test]
    fn test_query_and_get_commands() {
        let tmp = TempDir::new().unwrap();
        let config = write_fixture(&tmp);

        query(&config, &strings(&["owner=Fry"])).unwrap();
        get(&config, "a").unwrap();
    }

    #[test]
    fn test_get_unknown_id_fails() {
        let tmp = TempDir::new().unwrap();
        let config = write_fixture(&tmp);

        let err = get(&config, "missing").unwrap_err();
        assert_eq!(err.code(), "TODO_NOT_FOUND");
    }

    #[test]
    fn test_query_invalid_param_fails() {
        let tmp = TempDir::new().unwrap();
        let config = write_fixture(&tmp);

        let err = query(&config, &strings(&["limit=abc"])).unwrap_err();
        assert_eq!(err.code(), "TODO_INVALID_ARGUMENT");
    }

    #[test]
    fn test_missing_data_file_fails_boot() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("todobase.json");
        fs::write(&config, r#"{"data_file": "absent.json"}"#).unwrap();

        let err = get(&config, "a").unwrap_err();
        assert_eq!(err.code(), "TODO_STORE_IO");
    }
}
