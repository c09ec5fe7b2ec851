//! Temperature sensor adapter
//!
//! Implements `CelsiusSensor` on top of a [`FahrenheitTemperatureSensor`].

mod adapter;

pub use adapter::TemperatureSensorAdapter;

#[doc(no_inline)]
pub use crate::core::models::FahrenheitTemperatureSensor;
