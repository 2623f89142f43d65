//! Limit switch endstop
//!
//! A mechanical or optical switch on a digital input. Most boards wire the
//! switch to ground with the internal pull-up enabled, which makes the
//! input active-low.

use quadlink_core::traits::SensorDevice;
use quadlink_hal::{InputPin, Polarity};

/// Endstop on a digital input
pub struct Endstop<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: InputPin> Endstop<P> {
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    /// Endstop that reads high when triggered
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, Polarity::ActiveHigh)
    }

    /// Endstop that reads low when triggered (switch to ground)
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, Polarity::ActiveLow)
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }
}

impl<P: InputPin> SensorDevice for Endstop<P> {
    fn is_active(&self) -> bool {
        self.polarity.is_active(self.pin.is_high())
    }
}
