//! Temperature sensors
//!
//! [`CelsiusTemperatureSensor`] speaks the [`CelsiusSensor`] interface
//! natively. [`FahrenheitTemperatureSensor`] does not, and is only usable
//! where Celsius is expected through
//! [`TemperatureSensorAdapter`](crate::adapters::temperature::TemperatureSensorAdapter).

use crate::core::ports::CelsiusSensor;

/// Default reading of a fresh Celsius sensor
pub const DEFAULT_CELSIUS: f64 = 25.0;

/// Default reading of a fresh Fahrenheit sensor (the same temperature)
pub const DEFAULT_FAHRENHEIT: f64 = 77.0;

/// A sensor that reports degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelsiusTemperatureSensor {
    temperature: f64,
}

impl CelsiusTemperatureSensor {
    /// Create a sensor with an initial reading
    #[must_use]
    pub const fn new(celsius: f64) -> Self {
        Self {
            temperature: celsius,
        }
    }
}

impl Default for CelsiusTemperatureSensor {
    fn default() -> Self {
        Self::new(DEFAULT_CELSIUS)
    }
}

impl CelsiusSensor for CelsiusTemperatureSensor {
    fn set_temperature(&mut self, celsius: f64) {
        self.temperature = celsius;
    }

    fn temperature_celsius(&self) -> f64 {
        self.temperature
    }
}

/// A sensor that only reports degrees Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FahrenheitTemperatureSensor {
    temperature: f64,
}

impl FahrenheitTemperatureSensor {
    /// Create a sensor with an initial reading
    #[must_use]
    pub const fn new(fahrenheit: f64) -> Self {
        Self {
            temperature: fahrenheit,
        }
    }

    /// Set the current reading, in degrees Fahrenheit
    pub const fn set_temperature(&mut self, fahrenheit: f64) {
        self.temperature = fahrenheit;
    }

    /// Current reading, in degrees Fahrenheit
    #[must_use]
    pub const fn temperature_fahrenheit(&self) -> f64 {
        self.temperature
    }
}

impl Default for FahrenheitTemperatureSensor {
    fn default() -> Self {
        Self::new(DEFAULT_FAHRENHEIT)
    }
}
