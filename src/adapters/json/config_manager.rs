//! Process-wide configuration manager

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::{Map, Value};

use crate::core::services::singleton;
use crate::error::{PatternError, Result};

/// Settings loaded from a JSON file, shared by the whole process
///
/// Obtain it through [`ConfigManager::instance`]; every call returns the
/// same manager, so a file loaded through one handle is visible through
/// all of them. The document has no schema: any valid JSON is accepted.
#[derive(Debug)]
pub struct ConfigManager {
    data: RwLock<Value>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self {
            data: RwLock::new(Value::Object(Map::new())),
        }
    }
}

impl ConfigManager {
    /// The shared manager
    #[must_use]
    pub fn instance() -> &'static Self {
        singleton::instance::<Self>()
    }

    /// Load settings from a JSON file, replacing what was loaded before
    ///
    /// On failure the previously loaded settings are kept.
    pub fn load_config(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        log::debug!("loading configuration from {}", path.display());

        let content = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => PatternError::ConfigNotFound {
                path: path.to_path_buf(),
            },
            _ => PatternError::Io(err),
        })?;

        self.load_config_str(&content)
    }

    /// Load settings from JSON text, replacing what was loaded before
    ///
    /// On failure the previously loaded settings are kept.
    pub fn load_config_str(&self, content: &str) -> Result<()> {
        let value: Value = serde_json::from_str(content)?;
        *self.write() = value;
        Ok(())
    }

    /// Look up a setting by walking nested keys
    ///
    /// Object members are selected by name and array elements by numeric
    /// index. An empty key list returns the whole document. A missing key,
    /// or a key applied to a scalar, fails with
    /// [`PatternError::SettingNotFound`] naming the dotted path walked so far.
    pub fn get_setting<K: AsRef<str>>(&self, keys: &[K]) -> Result<Value> {
        let data = self.read();
        let mut current = &*data;
        let mut walked: Vec<&str> = Vec::with_capacity(keys.len());

        for key in keys {
            let key = key.as_ref();
            walked.push(key);

            let next = match current {
                Value::Object(members) => members.get(key),
                Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            };

            current = next.ok_or_else(|| PatternError::SettingNotFound {
                key: walked.join("."),
            })?;
        }

        Ok(current.clone())
    }

    /// Snapshot of the loaded settings
    #[must_use]
    pub fn config_data(&self) -> Value {
        self.read().clone()
    }

    /// Replace the loaded settings directly
    pub fn set_config_data(&self, value: Value) {
        *self.write() = value;
    }

    /// Forget everything loaded so far
    pub fn reset(&self) {
        self.set_config_data(Value::Object(Map::new()));
    }

    fn read(&self) -> RwLockReadGuard<'_, Value> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Value> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }
}
