//! Stepper driver parameters

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Step/dir driver timing
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StepperConfig {
    /// Requested speeds are clamped to this (steps/s)
    pub max_speed: f32,
    /// Width of the step pulse in nanoseconds
    pub pulse_width_ns: u32,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            max_speed: 750.0,
            pulse_width_ns: 2_000,
        }
    }
}
