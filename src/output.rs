//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::io;

use serde::Serialize;
use serde_json::Value;

use crate::core::models::DeviceKind;
use crate::core::services::{display_battery_life, display_celsius};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Battery life of one or more devices
#[derive(Debug, Serialize)]
pub struct DeviceReport {
    /// Devices in display order
    pub devices: Vec<DeviceInfo>,
}

/// Battery life of a single device
#[derive(Debug, Serialize)]
pub struct DeviceInfo {
    /// Which device (serialized as e.g. "laptop")
    pub device: DeviceKind,
    /// The device's battery life description
    pub battery_life: String,
}

/// Result of a configuration lookup through the shared manager
#[derive(Debug, Serialize)]
pub struct ConfigReport {
    /// File that was loaded
    pub file: String,
    /// Whether two lookups of the manager returned the same instance
    pub same_instance: bool,
    /// Key path that was looked up (empty for the whole document)
    pub keys: Vec<String>,
    /// The selected value
    pub value: Value,
}

/// Result of building a vehicle
#[derive(Debug, Serialize)]
pub struct VehicleReport {
    /// Requested vehicle type
    pub vehicle_type: String,
    /// Name of the built vehicle
    pub name: String,
}

/// Readings from the temperature demo
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TemperatureReport {
    /// Native Celsius sensor reading
    pub celsius_sensor: f64,
    /// Fahrenheit sensor reading, read through the adapter in Celsius
    pub adapted_celsius: f64,
    /// Raw Fahrenheit sensor reading
    pub fahrenheit: f64,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

/// Steps of the factory walkthrough
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct FactoryReport {
    /// One result per requested vehicle type
    pub steps: Vec<OperationResult>,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl DeviceReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> io::Result<()> {
        match mode {
            OutputMode::Human => {
                let mut out = io::stdout().lock();
                for d in &self.devices {
                    display_battery_life(&*d.device.build(), &mut out)?;
                }
            },
            OutputMode::Json => print_json(self),
        }
        Ok(())
    }
}

impl ConfigReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Instances are same: {}", self.same_instance);
        println!("Loaded: {}", self.file);

        let value = match &self.value {
            Value::String(s) => s.clone(),
            other => serde_json::to_string_pretty(other).unwrap_or_default(),
        };

        if self.keys.is_empty() {
            println!("{value}");
        } else {
            println!("{}: {value}", self.keys.join("."));
        }
    }
}

impl VehicleReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("Vehicle Type: {}", self.name),
            OutputMode::Json => print_json(self),
        }
    }
}

impl TemperatureReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> io::Result<()> {
        match mode {
            OutputMode::Human => {
                let mut out = io::stdout().lock();
                display_celsius(self.celsius_sensor, &mut out)?;
                display_celsius(self.adapted_celsius, &mut out)?;
            },
            OutputMode::Json => print_json(self),
        }
        Ok(())
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}

impl FactoryReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for step in &self.steps {
                    step.render(mode);
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}
