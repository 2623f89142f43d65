//! Analog input abstraction
//!
//! A single ADC channel. The joystick uses two of these.

/// ADC read failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Conversion did not complete or reported an error flag
    ConversionFailed,
    /// Channel is shared and currently in use
    Busy,
}

/// One analog input channel
pub trait AnalogInput {
    /// Read one raw conversion
    fn read(&mut self) -> Result<u16, AdcError>;
}
