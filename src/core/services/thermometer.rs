//! Unit conversion and temperature display

use std::io::{self, Write};

use crate::core::ports::CelsiusSensor;

/// Round to two decimal places
///
/// Rounds the exact binary value, with exact ties going to the even digit:
/// `2.675` is stored just below the tie and becomes `2.67`, `0.625` becomes `0.62`.
#[must_use]
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Convert Celsius to Fahrenheit, rounded to two decimals
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    round2(celsius.mul_add(1.8, 32.0))
}

/// Convert Fahrenheit to Celsius, rounded to two decimals
#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    round2((fahrenheit - 32.0) / 1.8)
}

/// Write a sensor's reading as `Temperature: 25.00 °C`
pub fn display_temperature(sensor: &dyn CelsiusSensor, out: &mut dyn Write) -> io::Result<()> {
    display_celsius(sensor.temperature_celsius(), out)
}

/// Write a Celsius reading as `Temperature: 25.00 °C`
pub fn display_celsius(celsius: f64, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Temperature: {celsius:.2} °C")
}
