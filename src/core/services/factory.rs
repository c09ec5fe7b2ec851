//! Vehicle factory
//!
//! Picks the concrete [`Vehicle`] to build from a [`VehicleType`], so
//! callers never name `Car`, `Motorcycle`, or `Bicycle` directly.

use std::io::{self, Write};

use crate::core::models::{Bicycle, Car, Motorcycle, VehicleType};
use crate::core::ports::Vehicle;
use crate::error::Result;

/// Builds vehicles by type
#[derive(Debug, Clone, Copy, Default)]
pub struct VehicleFactory;

impl VehicleFactory {
    /// Build the vehicle for a type
    #[must_use]
    pub fn create_vehicle(vehicle_type: VehicleType) -> Box<dyn Vehicle> {
        log::debug!("factory building {vehicle_type}");
        match vehicle_type {
            VehicleType::Car => Box::new(Car),
            VehicleType::Bicycle => Box::new(Bicycle),
            VehicleType::Motorcycle => Box::new(Motorcycle),
        }
    }

    /// Build the vehicle for a type given by name
    ///
    /// Names are matched case-insensitively. Unknown names fail with
    /// [`PatternError::InvalidVehicleType`](crate::PatternError::InvalidVehicleType).
    pub fn create_vehicle_named(name: &str) -> Result<Box<dyn Vehicle>> {
        let vehicle_type: VehicleType = name.parse()?;
        Ok(Self::create_vehicle(vehicle_type))
    }
}

/// Type names requested by the factory walkthrough, in order
pub const DEMO_VEHICLE_TYPES: [&str; 3] = ["car", "motorcycle", "hj"];

/// Describe a factory result as a walkthrough line
///
/// `Vehicle Type: Car` for a built vehicle, `Error: <message>` otherwise.
#[must_use]
pub fn describe_outcome(outcome: &Result<Box<dyn Vehicle>>) -> String {
    match outcome {
        Ok(vehicle) => format!("Vehicle Type: {}", vehicle.name()),
        Err(error) => format!("Error: {error}"),
    }
}

/// Write the factory walkthrough: two vehicles, then a rejected type
pub fn factory_demo(out: &mut dyn Write) -> io::Result<()> {
    for name in DEMO_VEHICLE_TYPES {
        let outcome = VehicleFactory::create_vehicle_named(name);
        writeln!(out, "{}", describe_outcome(&outcome))?;
    }
    Ok(())
}
