// This file is part of the product Profiled.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug)]
pub enum ConfigError {
    LoadError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadError(msg) => write!(f, "Configuration load error: {}", msg),
            ConfigError::ValidationError(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_workers() -> usize {
    4
}

impl ServerConfig {
    pub fn address_tuple(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_uri")]
    pub uri: String,
    #[serde(default = "default_database_name")]
    pub name: String,
    #[serde(default = "default_collection_name")]
    pub collection: String,
}

fn default_database_uri() -> String {
    "mongodb://127.0.0.1:27017".to_string()
}

fn default_database_name() -> String {
    "profiled".to_string()
}

fn default_collection_name() -> String {
    "profiles".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: default_database_uri(),
            name: default_database_name(),
            collection: default_collection_name(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration that has passed validation. Everything past bootstrap
/// works with this type, never with the raw `Config`.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Config {
    pub fn load_and_validate(root: &Path) -> Result<ValidatedConfig, ConfigError> {
        let config_path = root.join("config.yaml");
        let contents = fs::read_to_string(&config_path).map_err(|err| {
            ConfigError::LoadError(format!(
                "Failed to read {}: {}",
                config_path.display(),
                err
            ))
        })?;

        let config: Config = serde_yaml::from_str(&contents)
            .map_err(|err| ConfigError::LoadError(format!("Invalid YAML: {}", err)))?;

        config.validate()
    }

    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        validate_app(&self.app)?;
        validate_server(&self.server)?;
        validate_database(&self.database)?;
        validate_logging(&self.logging)?;

        Ok(ValidatedConfig {
            app: self.app,
            server: self.server,
            database: self.database,
            logging: self.logging,
        })
    }
}

fn validate_app(app: &AppConfig) -> Result<(), ConfigError> {
    if app.name.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "app.name must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_server(server: &ServerConfig) -> Result<(), ConfigError> {
    if server.host.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "server.host must not be empty".to_string(),
        ));
    }
    if server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port must be between 1 and 65535".to_string(),
        ));
    }
    if server.workers == 0 {
        return Err(ConfigError::ValidationError(
            "server.workers must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn validate_database(database: &DatabaseConfig) -> Result<(), ConfigError> {
    if !database.uri.starts_with("mongodb://") && !database.uri.starts_with("mongodb+srv://") {
        return Err(ConfigError::ValidationError(format!(
            "database.uri must start with mongodb:// or mongodb+srv://, got: {}",
            database.uri
        )));
    }
    if database.name.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "database.name must not be empty".to_string(),
        ));
    }
    if database.collection.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "database.collection must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.to_lowercase();
    if !VALID_LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "logging.level must be one of {}, got: {}",
            VALID_LOG_LEVELS.join(", "),
            logging.level
        )));
    }
    Ok(())
}
