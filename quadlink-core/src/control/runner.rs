//! Polling sequencer
//!
//! Owns the link coordinator and the operator input. Each poll does the
//! work of exactly one control tick:
//!
//! 1. Unarmed: no new motion, devices still run.
//! 2. Calibrating: advance the calibration phase.
//! 3. Ready: read one direction sample and apply it.
//! 4. Always: let every actuator make progress.

use crate::link::LinkCoordinator;
use crate::safety::FaultKind;
use crate::state::Phase;
use crate::traits::{DirectionSource, MotionDevice, SensorDevice};

/// Snapshot returned by every poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoopStatus {
    pub phase: Phase,
    /// Any actuator has a step in flight
    pub moving: bool,
    pub fault: Option<FaultKind>,
}

/// Per-tick sequencer over a coordinator and an input source
#[derive(Debug)]
pub struct ControlLoop<M, S, I> {
    link: LinkCoordinator<M, S>,
    input: I,
    armed: bool,
    ticks: u64,
}

impl<M, S, I> ControlLoop<M, S, I>
where
    M: MotionDevice,
    S: SensorDevice,
    I: DirectionSource,
{
    /// Create an unarmed loop
    pub fn new(link: LinkCoordinator<M, S>, input: I) -> Self {
        Self {
            link,
            input,
            armed: false,
            ticks: 0,
        }
    }

    /// Allow calibration to start; idempotent
    pub fn arm(&mut self) {
        self.armed = true;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Polls completed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn link(&self) -> &LinkCoordinator<M, S> {
        &self.link
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Current state without running a tick
    pub fn status(&self) -> LoopStatus {
        LoopStatus {
            phase: self.link.phase(),
            moving: self.link.is_moving(),
            fault: self.link.calibration_fault(),
        }
    }

    /// Run one control tick
    pub fn poll(&mut self) -> LoopStatus {
        if self.armed {
            if self.link.is_calibration_complete() {
                let sample = self.input.current_directions();
                self.link.apply_direction(sample);
            } else {
                self.link.advance_calibration();
            }
        }

        self.link.tick();
        self.ticks = self.ticks.wrapping_add(1);

        self.status()
    }
}
