//! Configuration types
//!
//! Board-agnostic configuration structures. Defaults reproduce the
//! reference machine; the firmware overrides them from `link.toml` at
//! build time.

pub mod error;
pub mod hardware;
pub mod joystick;
pub mod link;
pub mod stepper;

pub use error::ConfigError;
pub use hardware::*;
pub use joystick::JoystickConfig;
pub use link::{LimitPolicy, LinkConfig};
pub use stepper::StepperConfig;
