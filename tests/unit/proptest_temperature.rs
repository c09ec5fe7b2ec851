//! Property-based tests for the temperature adapter
//!
//! Uses proptest to verify properties that should hold for all inputs.

use oop_patterns::adapters::TemperatureSensorAdapter;
use oop_patterns::core::models::FahrenheitTemperatureSensor;
use oop_patterns::core::ports::CelsiusSensor;
use oop_patterns::core::services::round2;
use proptest::prelude::*;

proptest! {
    /// Celsius -> Fahrenheit -> Celsius returns the value written, for two-decimal inputs
    #[test]
    fn round_trip_preserves_two_decimal_values(cents in -100_000_i32..100_000) {
        let celsius = f64::from(cents) / 100.0;
        let mut adapter = TemperatureSensorAdapter::new(FahrenheitTemperatureSensor::default());

        adapter.set_temperature(celsius);

        prop_assert!((adapter.temperature_celsius() - celsius).abs() < 0.0001);
    }

    /// Whatever is written, the adapter reads back a two-decimal value
    #[test]
    fn reads_are_rounded_to_two_decimals(celsius in -1000.0_f64..1000.0) {
        let mut adapter = TemperatureSensorAdapter::new(FahrenheitTemperatureSensor::default());

        adapter.set_temperature(celsius);
        let read = adapter.temperature_celsius();

        prop_assert!((round2(read) - read).abs() < 1e-9);
        prop_assert!((read - celsius).abs() < 0.01);
    }

    /// Warmer in Celsius is never colder on the wrapped Fahrenheit sensor
    #[test]
    fn conversion_is_monotonic(a in -500.0_f64..500.0, b in -500.0_f64..500.0) {
        let mut low = TemperatureSensorAdapter::new(FahrenheitTemperatureSensor::default());
        let mut high = TemperatureSensorAdapter::new(FahrenheitTemperatureSensor::default());

        low.set_temperature(a.min(b));
        high.set_temperature(a.max(b));

        prop_assert!(low.inner().temperature_fahrenheit() <= high.inner().temperature_fahrenheit());
    }
}
