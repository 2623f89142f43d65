//! Operator input devices

pub mod button;
pub mod joystick;

pub use button::DebouncedButton;
pub use joystick::AnalogJoystick;
