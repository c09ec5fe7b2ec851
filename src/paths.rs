//! Centralized path definitions for oop-patterns
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.oop-patterns/
//! └── config.toml               # User preferences for the CLI
//! ```
//!
//! Settings files read by the configuration demo are supplied by the
//! caller and never resolved here.

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".oop-patterns";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global oop-patterns directory.
///
/// Returns `~/.oop-patterns/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.oop-patterns/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
