//! Limit sensor handle

use crate::traits::SensorDevice;

/// Binary sensor marking an actuator's physical travel extreme
#[derive(Debug)]
pub struct LimitSensor<S> {
    device: S,
}

impl<S: SensorDevice> LimitSensor<S> {
    pub fn new(device: S) -> Self {
        Self { device }
    }

    /// Whether the actuator has reached its physical limit
    pub fn triggered(&self) -> bool {
        self.device.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SimSwitch;
    use core::cell::Cell;

    #[test]
    fn test_reflects_device_state() {
        let state = Cell::new(false);
        let sensor = LimitSensor::new(SimSwitch(&state));
        assert!(!sensor.triggered());

        state.set(true);
        assert!(sensor.triggered());
        // Reads have no side effects
        assert!(sensor.triggered());
    }
}
