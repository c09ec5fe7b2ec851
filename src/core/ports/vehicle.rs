//! Vehicle port
//!
//! Everything the vehicle factory hands out implements this trait.

use crate::core::models::VehicleType;

/// A vehicle built by [`VehicleFactory`](crate::core::services::VehicleFactory)
pub trait Vehicle: Send + Sync + std::fmt::Debug {
    /// Display name of the vehicle (e.g., "Car")
    fn name(&self) -> &'static str;

    /// The factory variant this vehicle was built from
    fn vehicle_type(&self) -> VehicleType;
}
