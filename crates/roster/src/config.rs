//! Application configuration loaded from a JSON file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::db::default_database_path;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Location of the record store. Defaults to
    /// `~/.roster/data/employee-management.db`.
    #[serde(default)]
    pub database_path: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl RosterConfig {
    /// The configured store path, falling back to the per-user default.
    pub fn resolved_database_path(&self) -> Option<PathBuf> {
        self.database_path.clone().or_else(default_database_path)
    }
}

/// Returns the canonical config path: `~/.roster/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".roster").join("config.json"))
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RosterConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

pub fn load_config_from_str(content: &str) -> Result<RosterConfig, ConfigError> {
    let config: RosterConfig = serde_json::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

/// Loads `path` when given, otherwise the default config file if it
/// exists, otherwise built-in defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<RosterConfig, ConfigError> {
    if let Some(path) = path {
        return load_config(path);
    }
    match default_config_path() {
        Some(default) if default.exists() => load_config(default),
        _ => Ok(RosterConfig::default()),
    }
}

fn validate_config(config: &RosterConfig) -> Result<(), ConfigError> {
    if config.log_level.trim().is_empty() {
        return Err(ConfigError::Validation {
            message: "log_level must not be empty".to_string(),
        });
    }

    if let Some(path) = &config.database_path {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::Validation {
                message: "database_path must not be empty".to_string(),
            });
        }
    }

    Ok(())
}
