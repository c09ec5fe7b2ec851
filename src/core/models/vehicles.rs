//! Concrete vehicles
//!
//! Each one fills in the [`Vehicle`] template with its own name.

use super::VehicleType;
use crate::core::ports::Vehicle;

/// A car
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Car;

impl Vehicle for Car {
    fn name(&self) -> &'static str {
        "Car"
    }

    fn vehicle_type(&self) -> VehicleType {
        VehicleType::Car
    }
}

/// A motorcycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Motorcycle;

impl Vehicle for Motorcycle {
    fn name(&self) -> &'static str {
        "Motorcycle"
    }

    fn vehicle_type(&self) -> VehicleType {
        VehicleType::Motorcycle
    }
}

/// A bicycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bicycle;

impl Vehicle for Bicycle {
    fn name(&self) -> &'static str {
        "Bicycle"
    }

    fn vehicle_type(&self) -> VehicleType {
        VehicleType::Bicycle
    }
}
