use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

use crate::config::types::Config;
use crate::item::Item;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/itemdeck/config.toml` on Unix/macOS, or equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("itemdeck").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks that every explicit id parses as a UUID and that no id
    /// appears twice. An empty item list is allowed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.seed_items().map(|_| ())
    }

    /// Resolves the seed entries into domain items, preserving order.
    ///
    /// Entries without an id get a freshly generated one; explicit ids are
    /// parsed and checked for uniqueness.
    pub fn seed_items(&self) -> Result<Vec<Item>, ConfigError> {
        let mut items = Vec::with_capacity(self.items.len());
        let mut seen: Vec<Uuid> = Vec::with_capacity(self.items.len());

        for entry in &self.items {
            let id = match &entry.id {
                Some(raw) => Uuid::parse_str(raw).map_err(|_| ConfigError::ValidationError {
                    message: format!("Item '{}' has an invalid id '{}'", entry.name, raw),
                })?,
                None => Uuid::new_v4(),
            };

            if seen.contains(&id) {
                return Err(ConfigError::ValidationError {
                    message: format!("Duplicate item id '{}'", id),
                });
            }
            seen.push(id);
            items.push(Item::with_id(id, entry.name.clone()));
        }

        Ok(items)
    }
}
