//! Step/dir stepper driver
//!
//! Constant-speed run-to-position for drivers with a step and a direction
//! input (A4988, DRV8825, TMC2209 in standalone mode). `run()` never
//! blocks for longer than one step pulse: it emits at most one step per
//! call, and only once the step interval for the current speed has
//! elapsed since the previous step.

use embedded_hal::delay::DelayNs;
use quadlink_core::config::StepperConfig;
use quadlink_core::traits::{MotionDevice, StepDirection};
use quadlink_hal::{MonotonicClock, OutputPin, Polarity};

/// Step/dir stepper
///
/// # Type Parameters
/// - `STEP`: step pulse output
/// - `DIR`: direction output
/// - `C`: microsecond clock, usually shared between all steppers
/// - `D`: delay used to hold the step pulse high
pub struct StepDirStepper<STEP, DIR, C, D> {
    step: STEP,
    dir: DIR,
    clock: C,
    delay: D,
    config: StepperConfig,
    /// Level of the step pin during a pulse
    step_polarity: Polarity,
    /// Level of the direction pin that means "forward"
    dir_polarity: Polarity,
    current: i32,
    target: i32,
    /// Clamped speed of the last request in steps/s
    speed: f32,
    /// Step interval in µs, 0 when stopped
    interval_us: u64,
    last_step_us: u64,
}

impl<STEP, DIR, C, D> StepDirStepper<STEP, DIR, C, D>
where
    STEP: OutputPin,
    DIR: OutputPin,
    C: MonotonicClock,
    D: DelayNs,
{
    /// Create a new stepper at position 0
    ///
    /// `step_polarity` is `ActiveLow` for drivers that step on a low pulse;
    /// the pin then idles high. `dir_polarity` is `ActiveLow` when the
    /// direction pin must be low to extend the actuator.
    pub fn new(
        mut step: STEP,
        dir: DIR,
        clock: C,
        delay: D,
        config: StepperConfig,
        step_polarity: Polarity,
        dir_polarity: Polarity,
    ) -> Self {
        step.set_state(step_polarity.level_for(false));
        Self {
            step,
            dir,
            clock,
            delay,
            config,
            step_polarity,
            dir_polarity,
            current: 0,
            target: 0,
            speed: 0.0,
            interval_us: 0,
            last_step_us: 0,
        }
    }

    /// Speed of the current move in steps/s, after clamping
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Step interval in microseconds (0 when stopped)
    pub fn interval_us(&self) -> u64 {
        self.interval_us
    }

    fn set_speed(&mut self, speed: f32) {
        // Negated comparison also stops on NaN
        if !(speed > 0.0) {
            self.speed = 0.0;
            self.interval_us = 0;
            return;
        }

        self.speed = speed.min(self.config.max_speed);
        self.interval_us = (1_000_000.0 / self.speed) as u64;
    }

    fn set_direction(&mut self, direction: StepDirection) {
        let forward = direction == StepDirection::Forward;
        self.dir.set_state(self.dir_polarity.level_for(forward));
    }

    fn pulse(&mut self) {
        self.step.set_state(self.step_polarity.level_for(true));
        self.delay.delay_ns(self.config.pulse_width_ns);
        self.step.set_state(self.step_polarity.level_for(false));
    }
}

impl<STEP, DIR, C, D> MotionDevice for StepDirStepper<STEP, DIR, C, D>
where
    STEP: OutputPin,
    DIR: OutputPin,
    C: MonotonicClock,
    D: DelayNs,
{
    fn advance_one_step(&mut self, direction: StepDirection, speed: f32) {
        self.target = self.current + direction.delta();
        self.set_speed(speed);
        self.set_direction(direction);
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
        self.speed = 0.0;
        self.interval_us = 0;
    }

    fn run(&mut self) {
        if self.current == self.target || self.interval_us == 0 {
            return;
        }

        let now = self.clock.now_us();
        if now.saturating_sub(self.last_step_us) < self.interval_us {
            return;
        }

        self.pulse();
        self.current += (self.target - self.current).signum();
        self.last_step_us = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use proptest::prelude::*;

    /// Mock GPIO pin counting edges
    struct MockPin {
        high: bool,
        rising_edges: u32,
        falling_edges: u32,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                high: false,
                rising_edges: 0,
                falling_edges: 0,
            }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            if !self.high {
                self.rising_edges += 1;
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            if self.high {
                self.falling_edges += 1;
            }
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    /// Mock delay summing the requested time
    struct MockDelay {
        total_ns: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
        }
    }

    type TestStepper<'a> = StepDirStepper<MockPin, MockPin, &'a Cell<u64>, MockDelay>;

    fn stepper(clock: &Cell<u64>, dir_polarity: Polarity) -> TestStepper<'_> {
        stepper_with(clock, Polarity::ActiveHigh, dir_polarity)
    }

    fn stepper_with(
        clock: &Cell<u64>,
        step_polarity: Polarity,
        dir_polarity: Polarity,
    ) -> TestStepper<'_> {
        StepDirStepper::new(
            MockPin::new(),
            MockPin::new(),
            clock,
            MockDelay { total_ns: 0 },
            StepperConfig::default(),
            step_polarity,
            dir_polarity,
        )
    }

    #[test]
    fn test_single_step_with_pulse() {
        let clock = Cell::new(10_000);
        let mut s = stepper(&clock, Polarity::ActiveHigh);

        s.advance_one_step(StepDirection::Forward, 500.0);
        assert_eq!(s.position_target(), 1);
        assert_eq!(s.distance_to_go(), 1);
        assert!(s.dir.is_set_high());

        s.run();
        assert_eq!(s.position_now(), 1);
        assert_eq!(s.step.rising_edges, 1);
        assert!(!s.step.is_set_high());
        assert_eq!(s.delay.total_ns, 2_000);

        // Target reached: further runs do nothing
        clock.set(100_000);
        s.run();
        assert_eq!(s.step.rising_edges, 1);
    }

    #[test]
    fn test_step_waits_for_interval() {
        let clock = Cell::new(10_000);
        let mut s = stepper(&clock, Polarity::ActiveHigh);

        s.advance_one_step(StepDirection::Forward, 500.0);
        s.run();
        assert_eq!(s.interval_us(), 2_000);

        s.advance_one_step(StepDirection::Forward, 500.0);
        clock.set(11_999);
        s.run();
        assert_eq!(s.position_now(), 1);

        clock.set(12_000);
        s.run();
        assert_eq!(s.position_now(), 2);
    }

    #[test]
    fn test_speed_clamped_to_max() {
        let clock = Cell::new(0);
        let mut s = stepper(&clock, Polarity::ActiveHigh);

        s.advance_one_step(StepDirection::Backward, 5_000.0);
        assert_eq!(s.speed(), 750.0);
        assert_eq!(s.interval_us(), 1_333);
    }

    #[test]
    fn test_zero_speed_never_steps() {
        let clock = Cell::new(50_000);
        let mut s = stepper(&clock, Polarity::ActiveHigh);

        s.advance_one_step(StepDirection::Forward, 0.0);
        for t in 0..10 {
            clock.set(50_000 + t * 100_000);
            s.run();
        }
        assert_eq!(s.position_now(), 0);
        assert_eq!(s.step.rising_edges, 0);

        s.advance_one_step(StepDirection::Forward, f32::NAN);
        s.run();
        assert_eq!(s.position_now(), 0);
    }

    #[test]
    fn test_direction_polarity() {
        let clock = Cell::new(0);

        let mut s = stepper(&clock, Polarity::ActiveHigh);
        s.advance_one_step(StepDirection::Backward, 250.0);
        assert!(!s.dir.is_set_high());

        let mut s = stepper(&clock, Polarity::ActiveLow);
        s.advance_one_step(StepDirection::Forward, 250.0);
        assert!(!s.dir.is_set_high());
        s.advance_one_step(StepDirection::Backward, 250.0);
        assert!(s.dir.is_set_high());
    }

    #[test]
    fn test_inverted_step_pin_pulses_low() {
        let clock = Cell::new(10_000);
        let mut s = stepper_with(&clock, Polarity::ActiveLow, Polarity::ActiveHigh);

        // Idles high from construction
        assert!(s.step.is_set_high());
        assert_eq!(s.step.rising_edges, 1);

        s.advance_one_step(StepDirection::Forward, 500.0);
        s.run();
        assert_eq!(s.position_now(), 1);
        assert_eq!(s.step.falling_edges, 1);
        assert_eq!(s.step.rising_edges, 2);
        assert!(s.step.is_set_high());
    }

    #[test]
    fn test_backward_step() {
        let clock = Cell::new(5_000);
        let mut s = stepper(&clock, Polarity::ActiveHigh);

        s.advance_one_step(StepDirection::Backward, 250.0);
        s.run();
        assert_eq!(s.position_now(), -1);
        assert_eq!(s.distance_to_go(), 0);
    }

    #[test]
    fn test_reset_cancels_pending_step() {
        let clock = Cell::new(0);
        let mut s = stepper(&clock, Polarity::ActiveHigh);

        s.advance_one_step(StepDirection::Forward, 500.0);
        s.reset_position(-1);
        assert_eq!(s.position_now(), -1);
        assert_eq!(s.position_target(), -1);

        clock.set(1_000_000);
        s.run();
        assert_eq!(s.position_now(), -1);
        assert_eq!(s.step.rising_edges, 0);
    }

    proptest! {
        #[test]
        fn prop_never_overshoots(
            forward in any::<bool>(),
            speed in 1.0f32..2_000.0,
            ticks in proptest::collection::vec(0u64..5_000, 1..50),
        ) {
            let clock = Cell::new(0);
            let mut s = stepper(&clock, Polarity::ActiveHigh);
            let direction = if forward { StepDirection::Forward } else { StepDirection::Backward };

            s.advance_one_step(direction, speed);
            for dt in ticks {
                clock.set(clock.get() + dt);
                s.run();
                prop_assert!(s.position_now().abs() <= 1);
            }
            prop_assert!(s.step.rising_edges <= 1);
        }
    }
}
