//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs, plus the active-level handling shared by every
//! switch and driver input on the machine.

/// Digital output pin
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
///
/// Reads are side-effect free; implementations sample the input register.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;
}

/// Electrical level that means "active" for a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Active when the pin reads high
    #[default]
    ActiveHigh,
    /// Active when the pin reads low (switch to ground with pull-up)
    ActiveLow,
}

impl Polarity {
    /// Build from an "inverted" flag as used in pin strings (`!gpio4`)
    pub const fn from_inverted(inverted: bool) -> Self {
        if inverted {
            Polarity::ActiveLow
        } else {
            Polarity::ActiveHigh
        }
    }

    /// Translate a raw pin level into a logical active state
    pub const fn is_active(self, level_high: bool) -> bool {
        match self {
            Polarity::ActiveHigh => level_high,
            Polarity::ActiveLow => !level_high,
        }
    }

    /// Raw pin level that produces the requested logical state
    pub const fn level_for(self, active: bool) -> bool {
        self.is_active(active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_high() {
        assert!(Polarity::ActiveHigh.is_active(true));
        assert!(!Polarity::ActiveHigh.is_active(false));
        assert!(Polarity::ActiveHigh.level_for(true));
    }

    #[test]
    fn test_active_low() {
        assert!(Polarity::ActiveLow.is_active(false));
        assert!(!Polarity::ActiveLow.is_active(true));
        assert!(!Polarity::ActiveLow.level_for(true));
        assert!(Polarity::ActiveLow.level_for(false));
    }

    #[test]
    fn test_from_inverted() {
        assert_eq!(Polarity::from_inverted(true), Polarity::ActiveLow);
        assert_eq!(Polarity::from_inverted(false), Polarity::ActiveHigh);
    }

    struct MockOutput {
        high: bool,
    }

    impl OutputPin for MockOutput {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_set_state_default() {
        let mut pin = MockOutput { high: false };
        pin.set_state(true);
        assert!(pin.is_set_high());
        pin.set_state(false);
        assert!(!pin.is_set_high());
    }
}
