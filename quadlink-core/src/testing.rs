//! Test doubles shared by the unit tests

use core::cell::Cell;

use crate::input::DirectionSample;
use crate::traits::{DirectionSource, MotionDevice, SensorDevice, StepDirection};

/// Motion device that completes a step after `run_per_step` calls to `run()`
///
/// `run_per_step` of 0 behaves like 1.
#[derive(Debug, Default)]
pub struct SimMotion {
    pub run_per_step: u32,
    pub elapsed: u32,
    pub current: i32,
    pub target: i32,
    pub last_speed: f32,
    pub last_direction: Option<StepDirection>,
    pub requests: u32,
    pub forward_requests: u32,
    pub backward_requests: u32,
    pub completed_backward: u32,
}

impl SimMotion {
    pub fn slow(run_per_step: u32) -> Self {
        Self {
            run_per_step,
            ..Self::default()
        }
    }
}

impl MotionDevice for SimMotion {
    fn advance_one_step(&mut self, direction: StepDirection, speed: f32) {
        self.target = self.current + direction.delta();
        self.last_speed = speed;
        self.last_direction = Some(direction);
        self.requests += 1;
        match direction {
            StepDirection::Forward => self.forward_requests += 1,
            StepDirection::Backward => self.backward_requests += 1,
        }
    }

    fn position_now(&self) -> i32 {
        self.current
    }

    fn position_target(&self) -> i32 {
        self.target
    }

    fn reset_position(&mut self, position: i32) {
        self.current = position;
        self.target = position;
        self.elapsed = 0;
    }

    fn run(&mut self) {
        if self.current == self.target {
            return;
        }

        self.elapsed += 1;
        if self.elapsed < self.run_per_step.max(1) {
            return;
        }

        self.elapsed = 0;
        if self.target < self.current {
            self.completed_backward += 1;
        }
        self.current += (self.target - self.current).signum();
    }
}

/// Limit switch whose state the test flips from outside
#[derive(Debug, Clone, Copy)]
pub struct SimSwitch<'a>(pub &'a Cell<bool>);

impl SensorDevice for SimSwitch<'_> {
    fn is_active(&self) -> bool {
        self.0.get()
    }
}

/// Input source replaying a fixed sample
#[derive(Debug, Default)]
pub struct FixedInput {
    pub sample: DirectionSample,
    pub reads: u32,
}

impl DirectionSource for FixedInput {
    fn current_directions(&mut self) -> DirectionSample {
        self.reads += 1;
        self.sample
    }
}
