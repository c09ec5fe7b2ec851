//! Concrete pattern participants
//!
//! Plain data types with no I/O dependencies.
//!
//! - [`Smartphone`], [`Laptop`], [`Smartwatch`] - electronic devices
//! - [`DeviceKind`] - selects a device by name
//! - [`Car`], [`Motorcycle`], [`Bicycle`] - vehicles built by the factory
//! - [`VehicleType`] - the closed set of vehicles the factory knows
//! - [`CelsiusTemperatureSensor`], [`FahrenheitTemperatureSensor`] - sensors

mod device;
mod sensors;
mod vehicle_type;
mod vehicles;

pub use device::{DeviceKind, Laptop, Smartphone, Smartwatch};
pub use sensors::{
    CelsiusTemperatureSensor, DEFAULT_CELSIUS, DEFAULT_FAHRENHEIT, FahrenheitTemperatureSensor,
};
pub use vehicle_type::VehicleType;
pub use vehicles::{Bicycle, Car, Motorcycle};
