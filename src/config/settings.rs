//! Application settings loaded from `config.toml` and the environment.
//!
//! Values are layered: built-in defaults, then the optional TOML file, then
//! environment variables. A missing file is fine; a malformed one is not.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "MYWALLETS_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Settings for the HTTP service and its database.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// `SeaORM` connection URL
    pub database_url: String,
    /// Address the HTTP listener binds to
    pub bind_addr: String,
    /// Value every request must carry in the `APP-API-KEY` header
    pub api_key: String,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Upper bound on pooled database connections
    pub max_connections: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://database.db?mode=rwc".to_string(),
            bind_addr: "127.0.0.1:8000".to_string(),
            api_key: "DUMMY-KEY".to_string(),
            log_level: "info".to_string(),
            max_connections: 5,
        }
    }
}

impl AppConfig {
    /// Parses settings from TOML text; absent keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config {
            message: format!("Failed to parse config: {e}"),
        })
    }

    /// Applies `DATABASE_URL`, `BIND_ADDR` and `APP_API_KEY` when set.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database_url = url;
        }
        if let Ok(addr) = std::env::var("BIND_ADDR") {
            self.bind_addr = addr;
        }
        if let Ok(key) = std::env::var("APP_API_KEY") {
            self.api_key = key;
        }
        self
    }
}

/// Loads settings from a TOML file, falling back to defaults if it does not exist.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        tracing::debug!("No config file at {:?}, using defaults", path_ref);
        return Ok(AppConfig::default());
    }

    tracing::debug!("Loading configuration from {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;
    AppConfig::from_toml_str(&contents)
}

/// Loads the full application configuration: file (from `MYWALLETS_CONFIG` or
/// `./config.toml`) and then environment overrides.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = load_config(&path)?.with_env_overrides();
    tracing::info!(
        bind_addr = %config.bind_addr,
        database_url = %config.database_url,
        "Configuration loaded"
    );
    Ok(config)
}
