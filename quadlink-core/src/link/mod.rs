//! Link coordination
//!
//! The four actuator/limit-sensor pairs of the frame and the coordinator
//! that calibrates them and turns direction requests into antagonistic
//! step pairs.

pub mod coordinator;
pub mod limit;
pub mod side;

pub use coordinator::{LinkCoordinator, SENTINEL_POSITION};
pub use limit::LimitSensor;
pub use side::{PerSide, Side};
