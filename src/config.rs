//! Configuration management for the item store server.
//!
//! Configuration is loaded from (in order of precedence):
//! 1. Command-line arguments (applied by the binary on top of this)
//! 2. Environment variables (ITEMSTORE_*)
//! 3. Config file (TOML, optional)
//! 4. Default values

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "ITEMSTORE_";

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level filter used when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines.
    #[serde(default)]
    pub json_logs: bool,
}

fn default_database_path() -> PathBuf {
    PathBuf::from(crate::DATABASE_FILENAME)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    crate::DEFAULT_PORT
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

impl Config {
    /// Builds the layered figment without extracting it.
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads configuration from defaults, an optional TOML file and the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source holds a value of the wrong type.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        Ok(Self::figment(config_file).extract::<Config>()?)
    }

    /// Socket address built from host and port.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host is not an IP address.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| StoreError::ConfigError(format!("invalid listen address {}:{}: {}", self.host, self.port, e)))
    }
}
