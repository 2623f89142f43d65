//! Link coordinator
//!
//! Owns the four actuator/limit-sensor pairs. During calibration it drives
//! every actuator out to its limit sensor, retracts a fixed number of
//! single steps toward the center and zeroes the positions. Once ready it
//! resolves each axis of a [`DirectionSample`] into a pair of opposed
//! single-step requests: one actuator of the pair retracts while its
//! antagonist extends.
//!
//! All requests are fire-and-forget. A request rejected by the issuance
//! gate, a travel bound or a limit sensor produces no motion this tick and
//! is not reported.
//!
//! # Usage
//!
//! ```ignore
//! let mut link = LinkCoordinator::new(actuators, sensors, LinkConfig::default())?;
//!
//! // Every control tick:
//! if link.is_calibration_complete() {
//!     link.apply_direction(input.current_directions());
//! } else {
//!     link.advance_calibration();
//! }
//! link.tick();
//! ```

use crate::config::{ConfigError, LimitPolicy, LinkConfig};
use crate::input::{Axis, AxisLevel, DirectionSample};
use crate::motion::{Actuator, SpeedClass};
use crate::safety::{CalibrationWatchdog, FaultKind, SafetyStatus};
use crate::state::{Phase, PhaseEvent};
use crate::traits::{MotionDevice, SensorDevice};

use super::limit::LimitSensor;
use super::side::{PerSide, Side};

/// Position every actuator is reset to before a calibration round
///
/// Below any positive travel bound, so the bound check can never stop a
/// seek round on its own.
pub const SENTINEL_POSITION: i32 = -1;

/// Coordinator for the four actuators of the frame
#[derive(Debug)]
pub struct LinkCoordinator<M, S> {
    actuators: PerSide<Actuator<M>>,
    sensors: PerSide<LimitSensor<S>>,
    config: LinkConfig,
    phase: Phase,
    /// Retract rounds issued while centering
    centering_ticks: u32,
    watchdog: CalibrationWatchdog,
}

impl<M: MotionDevice, S: SensorDevice> LinkCoordinator<M, S> {
    /// Build a coordinator over one motion device and one limit sensor per
    /// side
    pub fn new(
        actuators: PerSide<M>,
        sensors: PerSide<S>,
        config: LinkConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let bounds = config.bounds();
        Ok(Self {
            actuators: actuators.map(|_, device| Actuator::new(device, bounds)),
            sensors: sensors.map(|_, device| LimitSensor::new(device)),
            watchdog: CalibrationWatchdog::new(config.calibration_timeout_rounds),
            config,
            phase: Phase::SeekingLimit,
            centering_ticks: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    pub fn actuator(&self, side: Side) -> &Actuator<M> {
        self.actuators.get(side)
    }

    pub fn sensor_triggered(&self, side: Side) -> bool {
        self.sensors.get(side).triggered()
    }

    /// Retract rounds issued so far in the centering phase
    pub fn centering_ticks(&self) -> u32 {
        self.centering_ticks
    }

    pub fn is_calibration_complete(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// Watchdog verdict for the seek phase
    pub fn calibration_status(&self) -> SafetyStatus {
        self.watchdog.check()
    }

    pub fn calibration_fault(&self) -> Option<FaultKind> {
        self.calibration_status().fault()
    }

    /// Check if the limit policy is satisfied
    pub fn limits_reached(&self) -> bool {
        match self.config.limit_policy {
            LimitPolicy::AllSensors => Side::ALL.iter().all(|&side| self.sensor_triggered(side)),
            LimitPolicy::Designated(side) => self.sensor_triggered(side),
        }
    }

    /// Check if any actuator has a step in flight
    pub fn is_moving(&self) -> bool {
        self.actuators.iter().any(|(_, a)| a.is_running())
    }

    /// Do this tick's calibration work for the current phase
    ///
    /// Safe to call every tick: new motion is only issued once every
    /// actuator has finished its previous step. No-op once ready.
    pub fn advance_calibration(&mut self) {
        match self.phase {
            Phase::SeekingLimit => self.advance_seek(),
            Phase::Centering => self.advance_centering(),
            Phase::Ready => {}
        }
    }

    /// Issue this tick's step requests for an operator direction
    ///
    /// Ignored until calibration is complete.
    pub fn apply_direction(&mut self, sample: DirectionSample) {
        if !self.phase.accepts_directions() {
            return;
        }

        for axis in [Axis::Horizontal, Axis::Vertical] {
            self.drive_axis(axis, sample.level(axis));
        }
    }

    /// Let every actuator make progress; call every tick in every phase
    pub fn tick(&mut self) {
        for side in Side::ALL {
            self.actuators.get_mut(side).step();
        }
    }

    fn advance_seek(&mut self) {
        if self.limits_reached() {
            self.enter(PhaseEvent::LimitsReached);
            return;
        }

        // A stalled seek stops issuing motion but stays in this phase.
        if self.watchdog.check().is_fault() || self.is_moving() {
            return;
        }

        self.reset_all(SENTINEL_POSITION);
        for side in Side::ALL {
            self.request_forward(side, SpeedClass::Fast);
        }
        self.watchdog.record_round();
    }

    fn advance_centering(&mut self) {
        // The last round's step must land before positions are zeroed.
        if self.is_moving() {
            return;
        }

        if self.centering_ticks >= self.config.center_travel_ticks {
            self.reset_all(0);
            self.enter(PhaseEvent::CenterReached);
            return;
        }

        // Retracting from a known limit is always safe: no sensor or
        // travel bound gating.
        self.reset_all(SENTINEL_POSITION);
        for side in Side::ALL {
            self.retract(side, SpeedClass::Fast);
        }
        self.centering_ticks += 1;
    }

    fn enter(&mut self, event: PhaseEvent) {
        self.phase = self.phase.transition(event);
    }

    fn reset_all(&mut self, position: i32) {
        for side in Side::ALL {
            self.actuators.get_mut(side).reset_position(position);
        }
    }

    fn drive_axis(&mut self, axis: Axis, level: AxisLevel) {
        let Some(class) = level.speed_class() else {
            return;
        };

        let (first, second) = axis.pair();
        let (retracting, extending) = if level.is_positive() {
            (first, second)
        } else {
            (second, first)
        };

        self.request_backward(retracting, class);
        self.request_forward(extending, class);
    }

    /// Forward request, skipped at the positive bound or a triggered sensor
    fn request_forward(&mut self, side: Side, class: SpeedClass) -> bool {
        let actuator = self.actuators.get_mut(side);
        if actuator.at_positive_limit() || self.sensors.get(side).triggered() {
            return false;
        }

        let speed = self.config.speed_for(class, actuator.current_position());
        actuator.request_forward(speed)
    }

    /// Backward request, bounded only by the actuator's negative limit
    fn request_backward(&mut self, side: Side, class: SpeedClass) -> bool {
        let actuator = self.actuators.get_mut(side);
        let speed = self.config.speed_for(class, actuator.current_position());
        actuator.request_backward(speed)
    }

    /// Centering retract, gated only on a step in flight
    fn retract(&mut self, side: Side, class: SpeedClass) -> bool {
        let actuator = self.actuators.get_mut(side);
        let speed = self.config.speed_for(class, actuator.current_position());
        actuator.retract(speed)
    }
}
