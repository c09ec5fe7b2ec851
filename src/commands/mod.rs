//! Command implementations

mod config;
mod devices;
mod temperature;
mod vehicles;

pub use config::config;
pub use devices::{device, devices};
pub use temperature::temperature;
pub use vehicles::{vehicle, vehicles};
