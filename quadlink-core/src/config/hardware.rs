//! Hardware configuration types
//!
//! Pin assignments and control-loop timing, plus the top-level
//! [`MachineConfig`] that bundles every configuration section.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::link::{PerSide, Side};

use super::{ConfigError, JoystickConfig, LinkConfig, StepperConfig};

/// Current configuration format version
pub const CONFIG_VERSION: u8 = 1;

/// Number of GPIO pins on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// ADC pin wired to the joystick X axis (board-specific)
pub const JOYSTICK_X_GPIO: u8 = 26;

/// ADC pin wired to the joystick Y axis (board-specific)
pub const JOYSTICK_Y_GPIO: u8 = 27;

/// Pins that cannot be assigned in the pin map
pub const RESERVED_PINS: [u8; 2] = [JOYSTICK_X_GPIO, JOYSTICK_Y_GPIO];

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    #[cfg_attr(feature = "serde", serde(default))]
    pub inverted: bool,
    /// Enable internal pull-up
    #[cfg_attr(feature = "serde", serde(default))]
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an active-low input with pull-up, the usual switch wiring
    pub const fn switch_to_ground(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }
}

/// Pins for one actuator and its limit switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActuatorPins {
    /// Step pulse output
    pub step: PinConfig,
    /// Direction output; `inverted` flips the forward direction
    pub dir: PinConfig,
    /// Limit switch input
    pub endstop: PinConfig,
}

impl ActuatorPins {
    const fn at(step: u8, dir: u8, endstop: u8) -> Self {
        Self {
            step: PinConfig::new(step),
            dir: PinConfig::new(dir),
            endstop: PinConfig::switch_to_ground(endstop),
        }
    }
}

/// Board pin assignment
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinMap {
    /// Step/dir/endstop pins per actuator
    pub actuators: PerSide<ActuatorPins>,
    /// Button that arms calibration
    pub arm_button: PinConfig,
    /// Optional status LED
    #[cfg_attr(feature = "serde", serde(default))]
    pub status_led: Option<PinConfig>,
}

impl Default for PinMap {
    fn default() -> Self {
        Self {
            actuators: PerSide::new(
                ActuatorPins::at(2, 3, 4),
                ActuatorPins::at(5, 6, 7),
                ActuatorPins::at(8, 9, 10),
                ActuatorPins::at(11, 12, 13),
            ),
            arm_button: PinConfig::switch_to_ground(14),
            status_led: Some(PinConfig::new(25)),
        }
    }
}

impl PinMap {
    /// Every assigned pin, in a fixed order
    pub fn assigned_pins(&self) -> Vec<u8, 16> {
        let mut pins = Vec::new();
        for side in Side::ALL {
            let a = self.actuators.get(side);
            // Capacity is 16 and at most 14 pins are pushed
            let _ = pins.push(a.step.pin);
            let _ = pins.push(a.dir.pin);
            let _ = pins.push(a.endstop.pin);
        }
        let _ = pins.push(self.arm_button.pin);
        if let Some(led) = self.status_led {
            let _ = pins.push(led.pin);
        }
        pins
    }

    /// Check every pin is in range, unreserved and used once
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pins = self.assigned_pins();

        for (i, &pin) in pins.iter().enumerate() {
            if pin >= GPIO_COUNT {
                return Err(ConfigError::InvalidPin(pin));
            }
            if RESERVED_PINS.contains(&pin) {
                return Err(ConfigError::ReservedPin(pin));
            }
            if pins[..i].contains(&pin) {
                return Err(ConfigError::DuplicatePin(pin));
            }
        }

        Ok(())
    }
}

/// Control loop timing
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControlConfig {
    /// Control ticks per second
    pub tick_hz: u32,
    /// Consecutive equal samples before the arm button changes state
    pub button_debounce_ticks: u8,
    /// Ticks between periodic status log lines (0 disables them)
    pub status_interval_ticks: u32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            tick_hz: 5_000,
            button_debounce_ticks: 50,
            status_interval_ticks: 5_000,
        }
    }
}

impl ControlConfig {
    /// Tick period in microseconds
    pub fn tick_period_us(&self) -> u64 {
        1_000_000 / self.tick_hz.max(1) as u64
    }
}

/// Complete machine configuration
///
/// This is the top-level configuration structure that contains all
/// hardware and motion configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MachineConfig {
    /// Configuration version for compatibility checks
    pub version: u8,
    pub link: LinkConfig,
    pub joystick: JoystickConfig,
    pub stepper: StepperConfig,
    pub control: ControlConfig,
    pub pins: PinMap,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            link: LinkConfig::default(),
            joystick: JoystickConfig::default(),
            stepper: StepperConfig::default(),
            control: ControlConfig::default(),
            pins: PinMap::default(),
        }
    }
}

impl MachineConfig {
    /// Validate every section and the constraints between them
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(self.version));
        }

        self.link.validate()?;
        self.joystick.validate()?;
        self.pins.validate()?;

        let fastest = self.link.max_requested_speed();
        if !(self.stepper.max_speed >= fastest) {
            return Err(ConfigError::SpeedExceedsStepperLimit);
        }
        if (self.control.tick_hz as f32) < fastest {
            return Err(ConfigError::TickRateTooLow);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_machine_is_valid() {
        assert_eq!(MachineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_assigned_pins() {
        let pins = PinMap::default().assigned_pins();
        assert_eq!(pins.len(), 14);
        assert_eq!(&pins[..3], &[2, 3, 4]);
    }

    #[test]
    fn test_duplicate_pin_rejected() {
        let mut map = PinMap::default();
        map.actuators.left.endstop.pin = 2;
        assert_eq!(map.validate(), Err(ConfigError::DuplicatePin(2)));
    }

    #[test]
    fn test_reserved_and_out_of_range_pins() {
        let mut map = PinMap::default();
        map.arm_button.pin = JOYSTICK_X_GPIO;
        assert_eq!(map.validate(), Err(ConfigError::ReservedPin(26)));

        let mut map = PinMap::default();
        map.status_led = Some(PinConfig::new(30));
        assert_eq!(map.validate(), Err(ConfigError::InvalidPin(30)));

        let mut map = PinMap::default();
        map.status_led = None;
        assert_eq!(map.validate(), Ok(()));
    }

    #[test]
    fn test_stepper_limit_cross_check() {
        let mut config = MachineConfig::default();
        config.stepper.max_speed = 600.0; // below 500 * 1.25
        assert_eq!(
            config.validate(),
            Err(ConfigError::SpeedExceedsStepperLimit)
        );
    }

    #[test]
    fn test_tick_rate_cross_check() {
        let mut config = MachineConfig::default();
        config.control.tick_hz = 100;
        assert_eq!(config.validate(), Err(ConfigError::TickRateTooLow));
    }

    #[test]
    fn test_version_check() {
        let config = MachineConfig {
            version: 9,
            ..MachineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::UnsupportedVersion(9)));
    }

    #[test]
    fn test_tick_period() {
        let control = ControlConfig::default();
        assert_eq!(control.tick_period_us(), 200);
    }
}
