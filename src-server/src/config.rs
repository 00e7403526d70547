//! Server Configuration
//!
//! Defaults match the original save endpoint (port 3001, `data.json` next to
//! the server). An optional `planejaqui.toml` in the working directory
//! overrides any of them.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use rolling_logger::{LevelFilter, LoggerConfig};
use serde::Deserialize;

use crate::error::ServerError;

/// Name of the optional configuration file
pub const CONFIG_FILE: &str = "planejaqui.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind: SocketAddr,
    /// The single JSON file holding the collection
    pub data_file: PathBuf,
    pub log_dir: PathBuf,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Built UI to serve at `/`, if any
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3001)),
            data_file: PathBuf::from("data.json"),
            log_dir: PathBuf::from("logs"),
            log_level: "info".to_string(),
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Read the config file if present, otherwise use defaults
    pub fn load(path: &Path) -> Result<Self, ServerError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw).map_err(|source| ServerError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Rotation settings for the rolling logger; unknown levels fall back to info
    pub fn logger_config(&self) -> LoggerConfig {
        let level = self.log_level.parse().unwrap_or(LevelFilter::INFO);
        LoggerConfig {
            level,
            ..LoggerConfig::default()
        }
    }
}
