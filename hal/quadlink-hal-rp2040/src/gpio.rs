//! GPIO adapters

use embassy_rp::gpio::{Input, Output};
use quadlink_hal::{InputPin, OutputPin};

/// Push-pull output
pub struct GpioOutput<'d>(Output<'d>);

impl<'d> GpioOutput<'d> {
    pub fn new(output: Output<'d>) -> Self {
        Self(output)
    }
}

impl OutputPin for GpioOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Digital input
pub struct GpioInput<'d>(Input<'d>);

impl<'d> GpioInput<'d> {
    pub fn new(input: Input<'d>) -> Self {
        Self(input)
    }
}

impl InputPin for GpioInput<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
