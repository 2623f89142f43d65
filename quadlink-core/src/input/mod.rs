//! Operator input
//!
//! Five-level direction values and the classification of raw joystick
//! readings into them.

pub mod direction;
pub mod joystick;

pub use direction::{Axis, AxisLevel, DirectionSample};
pub use joystick::JoystickClassifier;
