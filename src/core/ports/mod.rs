//! Port traits (abstract interfaces)
//!
//! Each trait plays the part of an abstract base class: it states the
//! operations an implementor must provide and cannot be instantiated on
//! its own. Concrete implementors live in `models` and `adapters`.

mod celsius_sensor;
mod electronic_device;
mod vehicle;

pub use celsius_sensor::CelsiusSensor;
pub use electronic_device::ElectronicDevice;
pub use vehicle::Vehicle;
