//! Error type shared by every pattern demonstration

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the pattern demonstrations
///
/// All of them are local and immediate: nothing is retried or recovered.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A value that is not an electronic device was handed to a device function
    #[error("Parameter \"device\" must be type ElectronicDevice")]
    InvalidDevice,

    /// A device name did not match any known device
    #[error("Unknown device: {0}. Use: smartphone, laptop, smartwatch")]
    UnknownDevice(String),

    /// The factory was asked for a vehicle type it does not build
    #[error("The vehicle type : \"{0}\" is invalid.")]
    InvalidVehicleType(String),

    /// Configuration file does not exist
    #[error("configuration file not found: {}", .path.display())]
    ConfigNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// Configuration file exists but could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A setting lookup walked off the end of the loaded document
    #[error("setting not found: {key}")]
    SettingNotFound {
        /// Dotted path walked up to and including the failing key
        key: String,
    },
}

/// Result alias for the pattern demonstrations
pub type Result<T> = std::result::Result<T, PatternError>;
