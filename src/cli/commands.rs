//! CLI command implementations
//!
//! All commands load the configuration first, then the status snapshot,
//! then run. main.rs does nothing but dispatch here.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::executor::QueryExecutor;
use crate::http_server::{HttpServer, HttpServerConfig, QueryState};
use crate::monitor::{standard_registry, Snapshot};
use crate::observability::Logger;
use crate::query::{QueryParser, QueryPlanner};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the JSON status file to serve (required)
    pub status_file: String,

    /// HTTP server settings (optional)
    #[serde(default)]
    pub http: HttpServerConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.status_file.trim().is_empty() {
            return Err(CliError::config_error("status_file must not be empty"));
        }
        Ok(())
    }
}

/// Entry point called from main
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { config } => serve(&config),
        Command::Query { config } => query(&config),
        Command::Tables { config } => tables(&config),
    }
}

/// Loads the snapshot named by the config
fn load_snapshot(config: &Config) -> CliResult<Snapshot> {
    Snapshot::load(Path::new(&config.status_file))
        .map_err(|e| CliError::status_error(e.to_string()))
}

/// `serve`: load everything, then block on the HTTP server
fn serve(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let snapshot = load_snapshot(&config)?;

    Logger::info(
        "SERVER_START",
        &[
            ("status_file", config.status_file.as_str()),
            ("hosts", &snapshot.hosts.len().to_string()),
            ("services", &snapshot.services.len().to_string()),
        ],
    );

    let state = Arc::new(QueryState::new(standard_registry(), snapshot));
    let server = HttpServer::with_config(config.http.clone(), state);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_failed(format!("Failed to start runtime: {}", e)))?;
    runtime
        .block_on(server.start())
        .map_err(|e| CliError::server_failed(e.to_string()))
}

/// `query`: one query from stdin, JSON result to stdout
fn query(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let snapshot = load_snapshot(&config)?;

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| CliError::io_error(format!("Failed to read query: {}", e)))?;

    let registry = standard_registry();
    let parsed = QueryParser::parse(&text).map_err(|e| CliError::query_failed(e.to_string()))?;
    let plan = QueryPlanner::new(&registry)
        .plan(&parsed)
        .map_err(|e| CliError::query_failed(e.to_string()))?;
    let result = QueryExecutor::execute(&plan, &snapshot);

    let rendered = serde_json::to_string_pretty(&result.to_json())
        .map_err(|e| CliError::io_error(format!("Failed to render result: {}", e)))?;
    println!("{}", rendered);

    Ok(())
}

/// `tables`: print the registry listing
fn tables(config_path: &Path) -> CliResult<()> {
    // Config is loaded for consistency even though the listing does not
    // depend on the snapshot
    let _config = Config::load(config_path)?;

    let registry = standard_registry();
    for table in registry.tables() {
        println!("{} - {}", table.name(), table.description());
        for column in table.columns() {
            println!(
                "  {:<16} {:<8} {}",
                column.name(),
                column.column_type().type_name(),
                column.description()
            );
        }
    }

    Ok(())
}
