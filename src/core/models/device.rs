//! Electronic devices
//!
//! Each device fills in the [`ElectronicDevice`] template with its own
//! battery life.

use serde::{Deserialize, Serialize};

use crate::core::ports::ElectronicDevice;
use crate::error::PatternError;

/// A smartphone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Smartphone;

impl ElectronicDevice for Smartphone {
    fn battery_life(&self) -> String {
        "Smartphone battery life: 10 hours.".to_string()
    }
}

/// A laptop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Laptop;

impl ElectronicDevice for Laptop {
    fn battery_life(&self) -> String {
        "Laptop battery life: 5 hours.".to_string()
    }
}

/// A smartwatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Smartwatch;

impl ElectronicDevice for Smartwatch {
    fn battery_life(&self) -> String {
        "Smartwatch battery life: 24 hours.".to_string()
    }
}

/// The known device variants, selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// [`Smartphone`]
    Smartphone,
    /// [`Laptop`]
    Laptop,
    /// [`Smartwatch`]
    Smartwatch,
}

impl DeviceKind {
    /// Every device, in display order
    pub const ALL: [Self; 3] = [Self::Smartphone, Self::Laptop, Self::Smartwatch];

    /// Build the device this variant names
    #[must_use]
    pub fn build(self) -> Box<dyn ElectronicDevice> {
        match self {
            Self::Smartphone => Box::new(Smartphone),
            Self::Laptop => Box::new(Laptop),
            Self::Smartwatch => Box::new(Smartwatch),
        }
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Smartphone => write!(f, "smartphone"),
            Self::Laptop => write!(f, "laptop"),
            Self::Smartwatch => write!(f, "smartwatch"),
        }
    }
}

impl std::str::FromStr for DeviceKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "smartphone" | "phone" => Ok(Self::Smartphone),
            "laptop" => Ok(Self::Laptop),
            "smartwatch" | "watch" => Ok(Self::Smartwatch),
            _ => Err(PatternError::UnknownDevice(s.to_string())),
        }
    }
}
