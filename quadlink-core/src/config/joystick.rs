//! Joystick classification thresholds

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Thresholds for turning raw ADC readings into direction levels
///
/// Defaults assume a 12-bit ADC and a stick resting at mid-scale.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JoystickConfig {
    /// Raw reading with the stick at rest
    pub center: u16,
    /// Offset from center beyond which slow travel is requested
    pub slow_threshold: u16,
    /// Offset from center beyond which fast travel is requested
    pub fast_threshold: u16,
    /// Low X readings mean rightward travel when set
    pub invert_horizontal: bool,
    /// Low Y readings mean upward travel when set
    pub invert_vertical: bool,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            center: 2048,
            slow_threshold: 80,
            fast_threshold: 1200,
            // The stick is mounted with X reversed relative to the frame
            invert_horizontal: true,
            invert_vertical: false,
        }
    }
}

impl JoystickConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slow_threshold >= self.fast_threshold {
            return Err(ConfigError::InvalidJoystickThresholds);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(JoystickConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_threshold_order() {
        let config = JoystickConfig {
            slow_threshold: 500,
            fast_threshold: 500,
            ..JoystickConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidJoystickThresholds)
        );
    }
}
