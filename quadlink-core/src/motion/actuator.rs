//! Single actuator handle
//!
//! Wraps a [`MotionDevice`] and turns continuous motion into a sequence of
//! single-step commands: a new step is only accepted once the previous one
//! has completed, so the coordinator can tell each tick whether an axis is
//! free without queuing anything.

use crate::traits::{MotionDevice, StepDirection};

/// Inclusive travel limits in steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TravelBounds {
    pub min: i32,
    pub max: i32,
}

impl TravelBounds {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

/// One linear actuator
#[derive(Debug)]
pub struct Actuator<M> {
    device: M,
    bounds: TravelBounds,
}

impl<M: MotionDevice> Actuator<M> {
    pub fn new(device: M, bounds: TravelBounds) -> Self {
        Self { device, bounds }
    }

    /// Tracked position in steps
    pub fn current_position(&self) -> i32 {
        self.device.position_now()
    }

    /// Pending target, for inspection only
    pub fn target_position(&self) -> i32 {
        self.device.position_target()
    }

    /// A step is in flight
    pub fn is_running(&self) -> bool {
        self.current_position() != self.target_position()
    }

    pub fn bounds(&self) -> TravelBounds {
        self.bounds
    }

    /// At or beyond the positive travel bound
    pub fn at_positive_limit(&self) -> bool {
        self.current_position() >= self.bounds.max
    }

    /// At or beyond the negative travel bound
    pub fn at_negative_limit(&self) -> bool {
        self.current_position() <= self.bounds.min
    }

    /// Set both current and target position to `position`
    ///
    /// Only used at calibration phase transitions.
    pub fn reset_position(&mut self, position: i32) {
        self.device.reset_position(position);
    }

    /// Request one step toward the positive bound
    ///
    /// Returns `false` without touching the device while a step is in
    /// flight. The positive bound is the caller's to enforce, since it is
    /// combined with the limit sensor.
    pub fn request_forward(&mut self, speed: f32) -> bool {
        if self.is_running() {
            return false;
        }

        self.device.advance_one_step(StepDirection::Forward, speed);
        true
    }

    /// Request one step toward the negative bound
    ///
    /// Rejected while a step is in flight or at the negative bound.
    pub fn request_backward(&mut self, speed: f32) -> bool {
        if self.is_running() || self.at_negative_limit() {
            return false;
        }

        self.device.advance_one_step(StepDirection::Backward, speed);
        true
    }

    /// Request one backward step ignoring the negative bound
    ///
    /// Used for the centering retract, where the tracked position is
    /// relative to a limit rather than to the calibrated center. Only the
    /// issuance gate applies.
    pub fn retract(&mut self, speed: f32) -> bool {
        if self.is_running() {
            return false;
        }

        self.device.advance_one_step(StepDirection::Backward, speed);
        true
    }

    /// Let the device make progress; call every tick
    pub fn step(&mut self) {
        self.device.run();
    }

    /// Underlying device
    pub fn device(&self) -> &M {
        &self.device
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SimMotion;
    use proptest::prelude::*;

    const BOUNDS: TravelBounds = TravelBounds::new(-1280, 1600);

    fn actuator() -> Actuator<SimMotion> {
        Actuator::new(SimMotion::default(), BOUNDS)
    }

    #[test]
    fn test_idle_actuator_accepts_requests() {
        let mut a = actuator();
        assert!(!a.is_running());
        assert!(a.request_forward(500.0));
        assert_eq!(a.target_position(), 1);
        assert_eq!(a.current_position(), 0);
        assert!(a.is_running());
        assert_eq!(a.device().last_speed, 500.0);
    }

    #[test]
    fn test_gate_rejects_while_running() {
        let mut a = actuator();
        assert!(a.request_forward(500.0));

        assert!(!a.request_forward(500.0));
        assert!(!a.request_backward(250.0));
        assert_eq!(a.target_position(), 1);
        assert_eq!(a.device().requests, 1);

        a.step();
        assert!(!a.is_running());
        assert_eq!(a.current_position(), 1);

        assert!(a.request_backward(250.0));
        assert_eq!(a.target_position(), 0);
    }

    #[test]
    fn test_negative_bound() {
        let mut a = actuator();
        a.reset_position(BOUNDS.min);
        assert!(a.at_negative_limit());
        assert!(!a.request_backward(500.0));
        assert_eq!(a.target_position(), BOUNDS.min);

        // Forward is still accepted
        assert!(a.request_forward(500.0));
        assert_eq!(a.target_position(), BOUNDS.min + 1);
    }

    #[test]
    fn test_beyond_negative_bound() {
        let mut a = actuator();
        a.reset_position(BOUNDS.min - 10);
        assert!(!a.request_backward(500.0));
        assert!(a.request_forward(500.0));
    }

    #[test]
    fn test_retract_ignores_negative_bound() {
        let mut a = actuator();
        a.reset_position(BOUNDS.min);
        assert!(!a.request_backward(500.0));
        assert!(a.retract(500.0));
        assert_eq!(a.target_position(), BOUNDS.min - 1);

        // Still gated on a step in flight
        assert!(!a.retract(500.0));
        a.step();
        assert_eq!(a.current_position(), BOUNDS.min - 1);
        assert!(a.retract(500.0));
    }

    #[test]
    fn test_positive_limit_is_reported_not_enforced() {
        let mut a = actuator();
        a.reset_position(BOUNDS.max);
        assert!(a.at_positive_limit());
        assert!(a.request_forward(500.0));
    }

    #[test]
    fn test_reset_clears_pending_step() {
        let mut a = actuator();
        assert!(a.request_forward(500.0));
        a.reset_position(-1);
        assert!(!a.is_running());
        assert_eq!(a.current_position(), -1);
        assert_eq!(a.target_position(), -1);
    }

    #[test]
    fn test_step_when_idle_is_noop() {
        let mut a = actuator();
        a.reset_position(42);
        for _ in 0..5 {
            a.step();
        }
        assert_eq!(a.current_position(), 42);
        assert_eq!(a.target_position(), 42);
    }

    proptest! {
        #[test]
        fn gate_matches_running_state(
            start in -1000i32..1000,
            ops in proptest::collection::vec(0u8..3, 1..64),
        ) {
            let mut a = actuator();
            a.reset_position(start);

            for op in ops {
                let was_running = a.is_running();
                let target_before = a.target_position();
                match op {
                    0 => {
                        let accepted = a.request_forward(250.0);
                        prop_assert_eq!(accepted, !was_running);
                        if !accepted {
                            prop_assert_eq!(a.target_position(), target_before);
                        }
                    }
                    1 => {
                        let accepted = a.request_backward(250.0);
                        prop_assert_eq!(accepted, !was_running && !a.at_negative_limit());
                        if !accepted {
                            prop_assert_eq!(a.target_position(), target_before);
                        }
                    }
                    _ => a.step(),
                }
                prop_assert!((a.target_position() - a.current_position()).abs() <= 1);
            }
        }
    }
}
