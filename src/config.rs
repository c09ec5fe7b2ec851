//! Global configuration management
//!
//! Provides persistent user preferences for the CLI.
//! Config is stored at `~/.oop-patterns/config.toml`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::{DEFAULT_CELSIUS, DEFAULT_FAHRENHEIT};
use crate::paths;

/// Global oop-patterns configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
    /// Initial sensor readings for the temperature demo
    #[serde(default)]
    pub sensors: SensorConfig,
    /// Settings for the configuration manager demo
    #[serde(default)]
    pub config_manager: ConfigManagerConfig,
}

/// Output preferences
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print JSON even when `--json` is not passed
    #[serde(default)]
    pub json: bool,
}

/// Initial sensor readings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SensorConfig {
    /// Starting reading of the Celsius sensor
    #[serde(default = "default_celsius")]
    pub celsius_default: f64,
    /// Starting reading of the Fahrenheit sensor
    #[serde(default = "default_fahrenheit")]
    pub fahrenheit_default: f64,
}

const fn default_celsius() -> f64 {
    DEFAULT_CELSIUS
}

const fn default_fahrenheit() -> f64 {
    DEFAULT_FAHRENHEIT
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            celsius_default: default_celsius(),
            fahrenheit_default: default_fahrenheit(),
        }
    }
}

/// Configuration manager demo settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigManagerConfig {
    /// JSON file loaded when the `config` command gets no `--file`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_file: Option<String>,
}

impl AppConfig {
    /// Load config from the global path, or defaults if it does not exist
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&paths::global_config())
    }

    /// Load config from a path, or defaults if it is missing or unparsable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path).map(|content| toml::from_str(&content)) {
            Ok(Ok(config)) => config,
            Ok(Err(err)) => {
                log::warn!("ignoring unparsable config {}: {err}", path.display());
                Self::default()
            },
            Err(err) => {
                log::warn!("ignoring unreadable config {}: {err}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to a path, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
