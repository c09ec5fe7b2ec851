//! Fahrenheit-to-Celsius adapter

use std::borrow::BorrowMut;

use crate::core::models::FahrenheitTemperatureSensor;
use crate::core::ports::CelsiusSensor;
use crate::core::services::{celsius_to_fahrenheit, fahrenheit_to_celsius};

/// Exposes a [`FahrenheitTemperatureSensor`] through the [`CelsiusSensor`] interface
///
/// The adapter can own its sensor or borrow one (`&mut FahrenheitTemperatureSensor`)
/// so the caller keeps using the sensor once the adapter is gone. Writes are
/// converted to Fahrenheit before they reach the sensor, reads are converted
/// back to Celsius. Both directions round to two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSensorAdapter<S = FahrenheitTemperatureSensor> {
    sensor: S,
}

impl<S> TemperatureSensorAdapter<S>
where
    S: BorrowMut<FahrenheitTemperatureSensor>,
{
    /// Wrap a Fahrenheit sensor
    #[must_use]
    pub const fn new(sensor: S) -> Self {
        Self { sensor }
    }

    /// The wrapped sensor
    #[must_use]
    pub fn inner(&self) -> &FahrenheitTemperatureSensor {
        self.sensor.borrow()
    }

    /// The wrapped sensor, mutably
    pub fn inner_mut(&mut self) -> &mut FahrenheitTemperatureSensor {
        self.sensor.borrow_mut()
    }

    /// Give the wrapped sensor back
    #[must_use]
    pub fn into_inner(self) -> S {
        self.sensor
    }
}

impl Default for TemperatureSensorAdapter {
    fn default() -> Self {
        Self::new(FahrenheitTemperatureSensor::default())
    }
}

impl<S> CelsiusSensor for TemperatureSensorAdapter<S>
where
    S: BorrowMut<FahrenheitTemperatureSensor>,
{
    fn set_temperature(&mut self, celsius: f64) {
        let fahrenheit = celsius_to_fahrenheit(celsius);
        log::debug!("adapter: {celsius} °C stored as {fahrenheit} °F");
        self.inner_mut().set_temperature(fahrenheit);
    }

    fn temperature_celsius(&self) -> f64 {
        fahrenheit_to_celsius(self.inner().temperature_fahrenheit())
    }
}
