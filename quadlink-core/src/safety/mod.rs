//! Safety monitoring
//!
//! Detects calibration stalls that the hardware cannot report itself.

pub mod watchdog;

pub use watchdog::{CalibrationWatchdog, FaultKind, SafetyStatus};
