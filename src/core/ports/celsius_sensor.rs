//! Celsius sensor port
//!
//! The interface clients expect from a temperature sensor. Sensors that
//! natively speak another unit are made to fit it through an adapter.

/// A temperature sensor read and written in degrees Celsius
pub trait CelsiusSensor {
    /// Set the current reading, in degrees Celsius
    fn set_temperature(&mut self, celsius: f64);

    /// Current reading, in degrees Celsius
    fn temperature_celsius(&self) -> f64;
}
