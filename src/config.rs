//! Application configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "TABLE_PROCESSOR_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "table_processor.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CSV file loaded at startup.
    pub source_path: PathBuf,
    pub window_width: f32,
    pub window_height: f32,
    pub title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("Table Input.csv"),
            window_width: 1000.0,
            window_height: 800.0,
            title: "Table Processing Application".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the config file: `$TABLE_PROCESSOR_CONFIG`, then
    /// `table_processor.json` if it exists, otherwise defaults.
    pub fn discover() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::from_file(path);
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::from_file(local);
        }
        Ok(Self::default())
    }

    /// Apply a source path given on the command line.
    pub fn with_source_override(mut self, source: Option<PathBuf>) -> Self {
        if let Some(path) = source {
            self.source_path = path;
        }
        self
    }
}
