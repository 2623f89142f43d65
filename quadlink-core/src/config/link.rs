//! Link coordination parameters

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::link::Side;
use crate::motion::{SpeedClass, TravelBounds};

use super::ConfigError;

/// Default slow speed in steps/s
pub const DEFAULT_SLOW_SPEED: f32 = 250.0;
/// Default fast speed in steps/s
pub const DEFAULT_FAST_SPEED: f32 = 500.0;
/// Default multiplier applied at non-negative (outward) positions
pub const DEFAULT_OUTWARD_SPEED_FACTOR: f32 = 1.25;
/// Default positive travel bound in steps
pub const DEFAULT_MAX_POSITION: i32 = 1600;
/// Default number of centering rounds after the limits are found
pub const DEFAULT_CENTER_TRAVEL_TICKS: u32 = 800;
/// Default seek rounds before calibration is declared stalled
pub const DEFAULT_CALIBRATION_TIMEOUT_ROUNDS: u32 = 4000;

/// Which limit sensors must trigger before seeking ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LimitPolicy {
    /// Every sensor must report its limit
    #[default]
    AllSensors,
    /// A single designated sensor is sufficient
    Designated(Side),
}

/// Speeds, travel bounds and calibration lengths for the link
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LinkConfig {
    /// Slow speed in steps/s
    pub slow_speed: f32,
    /// Fast speed in steps/s, also used for calibration
    pub fast_speed: f32,
    /// Speed multiplier for an actuator at a non-negative position,
    /// compensating the extend/retract imbalance. Also sets the negative
    /// bound as `-max_position / factor`.
    pub outward_speed_factor: f32,
    /// Positive travel bound in steps
    pub max_position: i32,
    /// Single-step retract rounds from the limits to the center
    pub center_travel_ticks: u32,
    /// Seek rounds before reporting a calibration stall (0 = never)
    pub calibration_timeout_rounds: u32,
    /// Seek completion policy
    pub limit_policy: LimitPolicy,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            slow_speed: DEFAULT_SLOW_SPEED,
            fast_speed: DEFAULT_FAST_SPEED,
            outward_speed_factor: DEFAULT_OUTWARD_SPEED_FACTOR,
            max_position: DEFAULT_MAX_POSITION,
            center_travel_ticks: DEFAULT_CENTER_TRAVEL_TICKS,
            calibration_timeout_rounds: DEFAULT_CALIBRATION_TIMEOUT_ROUNDS,
            limit_policy: LimitPolicy::AllSensors,
        }
    }
}

impl LinkConfig {
    /// Negative travel bound, scaled down by the outward speed factor
    pub fn min_position(&self) -> i32 {
        -((self.max_position as f32 / self.outward_speed_factor) as i32)
    }

    /// Travel bounds handed to each actuator
    pub fn bounds(&self) -> TravelBounds {
        TravelBounds::new(self.min_position(), self.max_position)
    }

    /// Speed for a request of `class` from an actuator at `position`
    pub fn speed_for(&self, class: SpeedClass, position: i32) -> f32 {
        let base = match class {
            SpeedClass::Slow => self.slow_speed,
            SpeedClass::Fast => self.fast_speed,
        };

        if position >= 0 {
            base * self.outward_speed_factor
        } else {
            base
        }
    }

    /// Fastest speed the coordinator can ever request
    pub fn max_requested_speed(&self) -> f32 {
        let factor = if self.outward_speed_factor > 1.0 {
            self.outward_speed_factor
        } else {
            1.0
        };
        self.fast_speed * factor
    }

    /// Check parameters for consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Negated comparisons also reject NaN
        if !(self.slow_speed > 0.0) || !(self.fast_speed >= self.slow_speed) {
            return Err(ConfigError::InvalidSpeed);
        }
        if !(self.outward_speed_factor > 0.0) {
            return Err(ConfigError::InvalidSpeedFactor);
        }
        if self.max_position <= 0 {
            return Err(ConfigError::InvalidTravelBound);
        }

        let span = self.max_position as i64 - self.min_position() as i64;
        if self.center_travel_ticks == 0 || self.center_travel_ticks as i64 > span {
            return Err(ConfigError::InvalidCenterTravel);
        }

        Ok(())
    }
}
