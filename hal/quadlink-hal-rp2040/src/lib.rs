//! RP2040-specific HAL implementation for Quadlink
//!
//! Implements the quadlink-hal traits on top of embassy-rp:
//!
//! - GPIO inputs and outputs ([`gpio`])
//! - Blocking ADC channels sharing one converter ([`adc`])
//! - Microsecond clock over the embassy time driver ([`clock`])
//! - Config-driven pin allocation ([`pins`])

#![no_std]

pub mod adc;
pub mod clock;
pub mod gpio;
pub mod pins;

pub use adc::{AdcChannel, SharedAdc};
pub use clock::EmbassyClock;
pub use gpio::{GpioInput, GpioOutput};
pub use pins::{JoystickPeripherals, PinBank, PinError};
