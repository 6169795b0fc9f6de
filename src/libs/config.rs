//! Application configuration handling.
//!
//! Configuration is read from an optional JSON file (`worklog.json` in the
//! working directory) with every section optional; missing sections fall
//! back to defaults. Environment variables override the file:
//!
//! - `WORKLOG_DB` — database file path
//! - `WORKLOG_HOST` / `WORKLOG_PORT` — listen address
//!
//! A `.env` file is honored through `dotenv`, loaded once at startup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "worklog.json";

/// HTTP listener settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Persistence settings: the single local database file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(crate::db::db::DB_FILE_NAME),
        }
    }
}

/// Root configuration object; every section is optional in the file.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

impl Config {
    /// Reads configuration from `worklog.json` (when present) and applies
    /// environment overrides.
    pub fn read() -> Result<Config> {
        let mut config = if Path::new(CONFIG_FILE_NAME).exists() {
            let config_str = fs::read_to_string(CONFIG_FILE_NAME).with_context(|| format!("failed to read {}", CONFIG_FILE_NAME))?;
            serde_json::from_str(&config_str).with_context(|| format!("failed to parse {}", CONFIG_FILE_NAME))?
        } else {
            Config::default()
        };

        if let Ok(db_path) = std::env::var("WORKLOG_DB") {
            config.database = Some(DatabaseConfig { path: PathBuf::from(db_path) });
        }
        if let Ok(host) = std::env::var("WORKLOG_HOST") {
            let mut server = config.server.unwrap_or_default();
            server.host = host;
            config.server = Some(server);
        }
        if let Ok(port) = std::env::var("WORKLOG_PORT") {
            let port = port.parse::<u16>().context("WORKLOG_PORT must be a port number")?;
            let mut server = config.server.unwrap_or_default();
            server.port = port;
            config.server = Some(server);
        }

        Ok(config)
    }

    /// A configuration with all sections filled in with defaults, suitable
    /// for writing an initial config file.
    pub fn init() -> Self {
        Config {
            server: Some(ServerConfig::default()),
            database: Some(DatabaseConfig::default()),
        }
    }

    /// Writes the configuration to `worklog.json` in the working directory.
    pub fn save(&self) -> Result<()> {
        let config_file = fs::File::create(CONFIG_FILE_NAME).with_context(|| format!("failed to create {}", CONFIG_FILE_NAME))?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    pub fn database(&self) -> DatabaseConfig {
        self.database.clone().unwrap_or_default()
    }

    /// The `host:port` string the server binds to.
    pub fn listen_addr(&self) -> String {
        let server = self.server();
        format!("{}:{}", server.host, server.port)
    }
}
