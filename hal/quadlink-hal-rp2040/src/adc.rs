//! ADC channel adapter
//!
//! The RP2040 has one converter multiplexed over its analog pins. Each
//! [`AdcChannel`] borrows the shared converter for the duration of one
//! blocking conversion.

use core::cell::RefCell;

use embassy_rp::adc::{Adc, Blocking, Channel};
use quadlink_hal::{AdcError, AnalogInput};

/// Converter shared between channels on the same executor
pub type SharedAdc<'d> = RefCell<Adc<'d, Blocking>>;

/// One analog pin on the shared converter
pub struct AdcChannel<'a, 'd> {
    adc: &'a SharedAdc<'d>,
    channel: Channel<'d>,
}

impl<'a, 'd> AdcChannel<'a, 'd> {
    pub fn new(adc: &'a SharedAdc<'d>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogInput for AdcChannel<'_, '_> {
    fn read(&mut self) -> Result<u16, AdcError> {
        let mut adc = self.adc.try_borrow_mut().map_err(|_| AdcError::Busy)?;
        adc.blocking_read(&mut self.channel)
            .map_err(|_| AdcError::ConversionFailed)
    }
}
