//! oop-patterns - Small, self-contained demonstrations of classic object-oriented
//! design patterns
//!
//! Each pattern lives on its own and shares nothing with the others except the
//! crate-wide error type:
//!
//! - Abstract base class: [`core::ports::ElectronicDevice`] and its devices
//! - Singleton: [`core::services::singleton`] and [`adapters::json::ConfigManager`]
//! - Factory: [`core::services::VehicleFactory`]
//! - Adapter: [`adapters::temperature::TemperatureSensorAdapter`]

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;

pub use error::{PatternError, Result};
