//! Actuator motion
//!
//! The per-actuator issuance gate and position bookkeeping.

pub mod actuator;

pub use actuator::{Actuator, TravelBounds};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Speed magnitude of a request, before the outward-position factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpeedClass {
    Slow,
    Fast,
}
