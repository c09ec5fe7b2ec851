//! Vehicle types
//!
//! The closed set of vehicles the factory knows how to build.

use serde::{Deserialize, Serialize};

use crate::error::PatternError;

/// Vehicle variants accepted by the factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    /// Four wheels
    Car,
    /// Pedal powered
    Bicycle,
    /// Two wheels with an engine
    Motorcycle,
}

impl VehicleType {
    /// Every vehicle type, in declaration order
    pub const ALL: [Self; 3] = [Self::Car, Self::Bicycle, Self::Motorcycle];
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Car => write!(f, "car"),
            Self::Bicycle => write!(f, "bicycle"),
            Self::Motorcycle => write!(f, "motorcycle"),
        }
    }
}

impl std::str::FromStr for VehicleType {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "bicycle" => Ok(Self::Bicycle),
            "motorcycle" => Ok(Self::Motorcycle),
            _ => Err(PatternError::InvalidVehicleType(s.to_string())),
        }
    }
}
