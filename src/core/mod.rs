//! Core pattern logic for oop-patterns
//!
//! This module contains the pattern demonstrations that need no I/O beyond
//! a caller-supplied writer. File access lives in the `adapters` module.
//!
//! ## Architecture
//!
//! - `ports/` - Abstract interfaces (the "abstract base classes")
//! - `models/` - Concrete devices, vehicles, and sensors
//! - `services/` - Factory, singleton registry, and display helpers

pub mod models;
pub mod ports;
pub mod services;
