//! Configuration module for cityicons
//!
//! Manages where the dataset and icon images live, logging, and the roulette
//! odds. Settings are layered: built-in defaults, then the config file in the
//! user's config directory, then `CITYICONS_*` environment variables.

use crate::random::RouletteConfig;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CityIconsConfig {
    /// Directory holding one JSON dataset file per region
    pub data_dir: PathBuf,

    /// Directory holding the icon image files
    pub image_dir: PathBuf,

    /// Default log filter when `CITYICONS_LOG` is not set
    pub log_level: String,

    /// Suppress informational output by default
    pub quiet: bool,

    /// Quiet period before a typed query counts as settled
    pub debounce_ms: u64,

    /// Roulette outcome odds
    pub roulette: RouletteConfig,
}

impl Default for CityIconsConfig {
    fn default() -> Self {
        let base = dirs::data_local_dir()
            .map_or_else(|| PathBuf::from("."), |dir| dir.join("cityicons"));
        Self {
            data_dir: base.join("data"),
            image_dir: base.join("icons"),
            log_level: "warn".to_string(),
            quiet: false,
            debounce_ms: 500,
            roulette: RouletteConfig::default(),
        }
    }
}

impl CityIconsConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("cityicons").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing config file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or environment cannot be parsed, or
    /// the resulting values are out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration layered over the file at `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or environment cannot be parsed, or
    /// the resulting values are out of range.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_layered(path, Self::environment())
    }

    /// `CITYICONS_*` variables; `__` separates nested keys
    /// (`CITYICONS_ROULETTE__ALL_SAME`)
    fn environment() -> Environment {
        Environment::with_prefix("CITYICONS")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_layered(path: &Path, environment: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(environment)
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Check values that deserialize fine but make no sense
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.roulette
            .validate()
            .map_err(|e| ConfigError::Message(e.to_string()))
    }

    /// Debounce quiet period
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
