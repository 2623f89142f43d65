//! Control loop
//!
//! The single cooperative poll that sequences calibration and operation.
//! The firmware calls [`ControlLoop::poll`] once per control tick.

pub mod runner;

pub use runner::{ControlLoop, LoopStatus};
