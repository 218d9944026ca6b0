//! Application configuration
//!
//! Read from `config.toml` in the data directory. Every field is optional.

use std::path::Path;

use fitfizz_core::{Error, Result};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Database file name, relative to the data directory
    pub database_file: String,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_file: "fitfizz.db".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a data directory, falling back to defaults
    /// when no config file exists
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }
}
