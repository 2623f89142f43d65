//! Joystick classification
//!
//! Maps raw ADC readings of a two-axis analog stick to five-level
//! directions. A reading inside `center ± slow_threshold` is a dead zone;
//! beyond `center ± fast_threshold` it is a fast request.

use crate::config::JoystickConfig;

use super::direction::{AxisLevel, DirectionSample};

/// Stateless joystick classifier
#[derive(Debug, Clone)]
pub struct JoystickClassifier {
    config: JoystickConfig,
}

impl JoystickClassifier {
    pub fn new(config: JoystickConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &JoystickConfig {
        &self.config
    }

    /// Classify one raw reading, high readings being positive
    pub fn classify_raw(&self, raw: u16) -> AxisLevel {
        let center = self.config.center;
        let slow = self.config.slow_threshold;
        let fast = self.config.fast_threshold;

        // Fast bands are checked first; they lie outside the slow bands.
        if raw < center.saturating_sub(fast) {
            return AxisLevel::FastNegative;
        }
        if raw < center.saturating_sub(slow) {
            return AxisLevel::Negative;
        }
        if raw > center.saturating_add(fast) {
            return AxisLevel::FastPositive;
        }
        if raw > center.saturating_add(slow) {
            return AxisLevel::Positive;
        }

        AxisLevel::None
    }

    /// Classify the horizontal channel, honoring its inversion flag
    pub fn horizontal(&self, raw: u16) -> AxisLevel {
        let level = self.classify_raw(raw);
        if self.config.invert_horizontal {
            level.inverted()
        } else {
            level
        }
    }

    /// Classify the vertical channel, honoring its inversion flag
    pub fn vertical(&self, raw: u16) -> AxisLevel {
        let level = self.classify_raw(raw);
        if self.config.invert_vertical {
            level.inverted()
        } else {
            level
        }
    }

    /// Classify a pair of readings
    pub fn classify(&self, x_raw: u16, y_raw: u16) -> DirectionSample {
        DirectionSample::new(self.horizontal(x_raw), self.vertical(y_raw))
    }
}
