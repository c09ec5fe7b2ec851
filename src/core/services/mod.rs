//! Pattern services
//!
//! Logic that operates on the models through their port traits. Output
//! goes to a caller-supplied writer, never straight to stdout.
//!
//! - [`battery`] - Display battery life of any electronic device
//! - [`factory`] - Build vehicles from a [`VehicleType`](crate::core::models::VehicleType)
//! - [`singleton`] - Process-wide, per-type instance registry
//! - [`thermometer`] - Unit conversion and temperature display

pub mod battery;
pub mod factory;
pub mod singleton;
pub mod thermometer;

pub use battery::{battery_life_of, display_battery_life, display_battery_life_of};
pub use factory::{DEMO_VEHICLE_TYPES, VehicleFactory, describe_outcome, factory_demo};
pub use thermometer::{
    celsius_to_fahrenheit, display_celsius, display_temperature, fahrenheit_to_celsius, round2,
};
