//! Low-level motion capability
//!
//! Abstracts over whatever actually turns a linear actuator: a step/dir
//! driver, a PIO step generator, or a simulated axis in tests.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction of a single micro-step along an actuator's travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StepDirection {
    /// Toward the positive travel limit (extending)
    Forward,
    /// Toward the negative travel limit (retracting)
    Backward,
}

impl StepDirection {
    /// Position delta of one step in this direction
    pub fn delta(self) -> i32 {
        match self {
            StepDirection::Forward => 1,
            StepDirection::Backward => -1,
        }
    }
}

/// Motion capability consumed by [`crate::motion::Actuator`]
///
/// Positions are in step units. The device owns acceleration and pulse
/// timing; the core only moves the target and polls.
pub trait MotionDevice {
    /// Move the target one step in `direction` and run toward it at `speed`
    /// (steps per second).
    fn advance_one_step(&mut self, direction: StepDirection, speed: f32);

    /// Position the device believes it is at
    fn position_now(&self) -> i32;

    /// Position the device is running toward
    fn position_target(&self) -> i32;

    /// Redefine the current location as `position`, clearing any pending
    /// motion (target becomes `position` too).
    fn reset_position(&mut self, position: i32);

    /// Make whatever progress toward the target is due right now
    ///
    /// Never blocks. Called once per control tick.
    fn run(&mut self);

    /// Steps remaining until the target is reached
    fn distance_to_go(&self) -> i32 {
        self.position_target() - self.position_now()
    }
}

impl<M: MotionDevice + ?Sized> MotionDevice for &mut M {
    fn advance_one_step(&mut self, direction: StepDirection, speed: f32) {
        (**self).advance_one_step(direction, speed);
    }

    fn position_now(&self) -> i32 {
        (**self).position_now()
    }

    fn position_target(&self) -> i32 {
        (**self).position_target()
    }

    fn reset_position(&mut self, position: i32) {
        (**self).reset_position(position);
    }

    fn run(&mut self) {
        (**self).run();
    }
}
