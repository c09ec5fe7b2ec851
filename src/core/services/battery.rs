//! Battery life display
//!
//! Works against the [`ElectronicDevice`] template only, so any device
//! can be displayed without the caller knowing its concrete type.

use std::any::Any;
use std::io::{self, Write};

use crate::core::models::{Laptop, Smartphone, Smartwatch};
use crate::core::ports::ElectronicDevice;
use crate::error::{PatternError, Result};

/// Write the battery life of a device, followed by a newline
pub fn display_battery_life(device: &dyn ElectronicDevice, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", device.battery_life())
}

/// Battery life of a dynamically typed value
///
/// Accepts any of the concrete devices or a boxed [`ElectronicDevice`].
/// Every other value is rejected with [`PatternError::InvalidDevice`].
pub fn battery_life_of(value: &dyn Any) -> Result<String> {
    if let Some(device) = value.downcast_ref::<Smartphone>() {
        return Ok(device.battery_life());
    }
    if let Some(device) = value.downcast_ref::<Laptop>() {
        return Ok(device.battery_life());
    }
    if let Some(device) = value.downcast_ref::<Smartwatch>() {
        return Ok(device.battery_life());
    }
    if let Some(device) = value.downcast_ref::<Box<dyn ElectronicDevice>>() {
        return Ok(device.battery_life());
    }

    log::debug!("rejected non-device value of type {:?}", value.type_id());
    Err(PatternError::InvalidDevice)
}

/// Write the battery life of a dynamically typed value
///
/// Nothing is written when the value is not an electronic device.
pub fn display_battery_life_of(value: &dyn Any, out: &mut dyn Write) -> Result<()> {
    let line = battery_life_of(value)?;
    writeln!(out, "{line}")?;
    Ok(())
}
