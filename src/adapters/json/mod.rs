//! JSON-backed settings
//!
//! [`ConfigManager`] loads an arbitrary nested JSON document and answers
//! lookups by key path. There is one manager per process.

mod config_manager;

pub use config_manager::ConfigManager;
