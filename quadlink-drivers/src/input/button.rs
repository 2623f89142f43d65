//! Debounced push button
//!
//! Sampled once per control tick. The logical state only changes after
//! `threshold` consecutive samples disagree with it, and each debounced
//! press is reported exactly once through [`DebouncedButton::take_press`].

use quadlink_hal::{InputPin, Polarity};

/// Push button with counter-based debouncing
pub struct DebouncedButton<P> {
    pin: P,
    polarity: Polarity,
    threshold: u8,
    /// Consecutive samples disagreeing with `pressed`
    count: u8,
    pressed: bool,
    press_pending: bool,
}

impl<P: InputPin> DebouncedButton<P> {
    /// Create a released button; a threshold of 0 is treated as 1
    pub fn new(pin: P, polarity: Polarity, threshold: u8) -> Self {
        Self {
            pin,
            polarity,
            threshold: threshold.max(1),
            count: 0,
            pressed: false,
            press_pending: false,
        }
    }

    /// Take one sample; call once per tick
    pub fn sample(&mut self) {
        let active = self.polarity.is_active(self.pin.is_high());
        if active == self.pressed {
            self.count = 0;
            return;
        }

        self.count += 1;
        if self.count >= self.threshold {
            self.pressed = active;
            self.count = 0;
            if active {
                self.press_pending = true;
            }
        }
    }

    /// Debounced state
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Consume a pending press
    pub fn take_press(&mut self) -> bool {
        core::mem::take(&mut self.press_pending)
    }
}
