//! Dynamic pin allocation for config-driven hardware setup
//!
//! Provides a way to get GPIO pins by number at runtime, so the pin map
//! from `link.toml` decides which pin drives which actuator. The joystick
//! ADC pins are split off first: they need their typed peripherals.

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::peripherals::{ADC, PIN_26, PIN_27};
use embassy_rp::{Peri, Peripherals};
use quadlink_core::config::{PinConfig, GPIO_COUNT};

use crate::gpio::{GpioInput, GpioOutput};

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Pin already taken, or reserved for the joystick
    AlreadyTaken(u8),
}

/// Peripherals the joystick needs in typed form
pub struct JoystickPeripherals {
    pub adc: Peri<'static, ADC>,
    pub x: Peri<'static, PIN_26>,
    pub y: Peri<'static, PIN_27>,
}

/// Pin bank that holds the GPIO pins and allows taking them by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT as usize],
}

impl PinBank {
    /// Split the peripherals into the pin bank and the joystick peripherals
    ///
    /// Pins 26 and 27 are never available from the bank.
    pub fn from_peripherals(p: Peripherals) -> (Self, JoystickPeripherals) {
        let bank = Self {
            pins: [
                Some(p.PIN_0.into()),
                Some(p.PIN_1.into()),
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                Some(p.PIN_15.into()),
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                Some(p.PIN_18.into()),
                Some(p.PIN_19.into()),
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                None,
                None,
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
        };

        let joystick = JoystickPeripherals {
            adc: p.ADC,
            x: p.PIN_26,
            y: p.PIN_27,
        };

        (bank, joystick)
    }

    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        if pin_num >= GPIO_COUNT {
            return Err(PinError::InvalidPin(pin_num));
        }
        self.pins[pin_num as usize]
            .take()
            .ok_or(PinError::AlreadyTaken(pin_num))
    }

    /// Check if a pin is available
    pub fn is_available(&self, pin_num: u8) -> bool {
        if pin_num >= GPIO_COUNT {
            return false;
        }
        self.pins[pin_num as usize].is_some()
    }

    /// Take a pin as an output, starting logically inactive
    ///
    /// An inverted pin idles high.
    pub fn output(&mut self, config: &PinConfig) -> Result<GpioOutput<'static>, PinError> {
        let pin = self.take(config.pin)?;
        let level = if config.inverted { Level::High } else { Level::Low };
        Ok(GpioOutput::new(Output::new(pin, level)))
    }

    /// Take a pin as an input with the configured pull
    pub fn input(&mut self, config: &PinConfig) -> Result<GpioInput<'static>, PinError> {
        let pin = self.take(config.pin)?;
        let pull = if config.pull_up { Pull::Up } else { Pull::None };
        Ok(GpioInput::new(Input::new(pin, pull)))
    }
}
