//! Limit sensor capability

/// Single-bit sensor read consumed by [`crate::link::LimitSensor`]
pub trait SensorDevice {
    /// Whether the sensor currently reports its active state
    ///
    /// Implementations must not have side effects and must always return a
    /// value; a read failure should be reported as active.
    fn is_active(&self) -> bool;
}

impl<S: SensorDevice + ?Sized> SensorDevice for &S {
    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}
