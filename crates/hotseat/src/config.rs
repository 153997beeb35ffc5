//! Configuration file loading for the app.
//!
//! The one setting that matters is where the save slot lives; it comes from
//! `hotseat.toml` in the working directory and can be overridden on the
//! command line.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Application configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct AppConfig {
    /// Path of the save slot.
    /// Defaults to `hotseat_save.json` in the working directory.
    #[serde(default = "default_save_file")]
    pub save_file: PathBuf,
}

fn default_save_file() -> PathBuf {
    PathBuf::from("hotseat_save.json")
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            save_file: default_save_file(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration from disk.
    ///
    /// A missing file is not an error; it yields the defaults. A present
    /// but unreadable or invalid file is reported.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("hotseat.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config: AppConfig = toml::from_str("save_file = \"saves/slot.json\"").unwrap();
        assert_eq!(config.save_file, PathBuf::from("saves/slot.json"));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.save_file, PathBuf::from("hotseat_save.json"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(toml::from_str::<AppConfig>("save_file = [").is_err());
    }

    #[test]
    fn serialization_round_trip() {
        let config = AppConfig {
            save_file: PathBuf::from("elsewhere.json"),
        };
        let text = toml::to_string(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.save_file, config.save_file);
    }
}
