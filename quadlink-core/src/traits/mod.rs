//! Capability traits
//!
//! These traits define the interface between the coordination logic
//! and hardware-specific implementations. Each actuator, limit sensor and
//! input device is handed to the core as one of these at construction.

pub mod input;
pub mod motion;
pub mod sensor;

pub use input::DirectionSource;
pub use motion::{MotionDevice, StepDirection};
pub use sensor::SensorDevice;
