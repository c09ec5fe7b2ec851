//! Electronic device port
//!
//! Defines the template every electronic device has to follow.

/// An electronic device that can report its battery life
///
/// Implementors return a fixed, human-readable description such as
/// `"Laptop battery life: 5 hours."`.
pub trait ElectronicDevice: Send + Sync {
    /// Describe the battery life of this device
    fn battery_life(&self) -> String;
}
