//! Adapter implementations
//!
//! Concrete types that bridge a port trait to something that does not
//! speak it natively:
//!
//! - `temperature/` - Fahrenheit sensor exposed through [`CelsiusSensor`](crate::core::ports::CelsiusSensor)
//! - `json/` - JSON file settings behind the process-wide [`ConfigManager`](json::ConfigManager)

pub mod json;
pub mod temperature;

pub use json::ConfigManager;
pub use temperature::TemperatureSensorAdapter;
