//! Configuration validation errors

/// Reason a configuration was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A speed is zero, negative or not a number, or slow exceeds fast
    InvalidSpeed,
    /// Outward speed factor is not a positive number
    InvalidSpeedFactor,
    /// Positive travel bound must be greater than zero
    InvalidTravelBound,
    /// Centering travel is zero or longer than the whole travel span
    InvalidCenterTravel,
    /// Joystick slow threshold must be below the fast threshold
    InvalidJoystickThresholds,
    /// Fastest requested speed exceeds the stepper's max speed
    SpeedExceedsStepperLimit,
    /// Control tick rate cannot sustain the fastest requested speed
    TickRateTooLow,
    /// Pin number outside the chip's GPIO range
    InvalidPin(u8),
    /// Pin is reserved for a fixed board function
    ReservedPin(u8),
    /// Pin assigned to more than one function
    DuplicatePin(u8),
    /// Configuration version not understood by this firmware
    UnsupportedVersion(u8),
}
