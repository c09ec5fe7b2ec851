//! Temperature command - read a Fahrenheit sensor through the Celsius adapter

use oop_patterns::adapters::TemperatureSensorAdapter;
use oop_patterns::config::AppConfig;
use oop_patterns::core::models::{CelsiusTemperatureSensor, FahrenheitTemperatureSensor};
use oop_patterns::core::ports::CelsiusSensor;
use oop_patterns::output::{OutputMode, TemperatureReport};

/// Show a Celsius sensor next to an adapted Fahrenheit sensor
///
/// When `celsius` is given it is written to both sensors first; the
/// Fahrenheit sensor receives it through the adapter.
pub fn temperature(
    celsius: Option<f64>,
    app_config: &AppConfig,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let mut celsius_sensor = CelsiusTemperatureSensor::new(app_config.sensors.celsius_default);
    let mut adapter = TemperatureSensorAdapter::new(FahrenheitTemperatureSensor::new(
        app_config.sensors.fahrenheit_default,
    ));

    if let Some(value) = celsius {
        celsius_sensor.set_temperature(value);
        adapter.set_temperature(value);
    }

    let report = TemperatureReport {
        celsius_sensor: celsius_sensor.temperature_celsius(),
        adapted_celsius: adapter.temperature_celsius(),
        fahrenheit: adapter.inner().temperature_fahrenheit(),
    };
    report.render(output_mode)?;
    Ok(())
}
