//! Two-axis analog joystick
//!
//! Reads one ADC channel per axis and classifies the raw values with a
//! [`JoystickClassifier`]. A failed conversion reads as "no request" for
//! that axis so a flaky channel can never produce motion.

use quadlink_core::input::{AxisLevel, DirectionSample, JoystickClassifier};
use quadlink_core::traits::DirectionSource;
use quadlink_hal::AnalogInput;

/// Analog joystick on two ADC channels
pub struct AnalogJoystick<X, Y> {
    x: X,
    y: Y,
    classifier: JoystickClassifier,
    read_errors: u32,
}

impl<X: AnalogInput, Y: AnalogInput> AnalogJoystick<X, Y> {
    pub fn new(x: X, y: Y, classifier: JoystickClassifier) -> Self {
        Self {
            x,
            y,
            classifier,
            read_errors: 0,
        }
    }

    /// Failed conversions since start-up
    pub fn read_errors(&self) -> u32 {
        self.read_errors
    }
}

impl<X: AnalogInput, Y: AnalogInput> DirectionSource for AnalogJoystick<X, Y> {
    fn current_directions(&mut self) -> DirectionSample {
        let horizontal = match self.x.read() {
            Ok(raw) => self.classifier.horizontal(raw),
            Err(_) => {
                self.read_errors = self.read_errors.saturating_add(1);
                AxisLevel::None
            }
        };

        let vertical = match self.y.read() {
            Ok(raw) => self.classifier.vertical(raw),
            Err(_) => {
                self.read_errors = self.read_errors.saturating_add(1);
                AxisLevel::None
            }
        };

        DirectionSample::new(horizontal, vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadlink_core::config::JoystickConfig;
    use quadlink_hal::AdcError;

    /// Mock ADC channel returning a fixed reading
    struct MockAdc(Result<u16, AdcError>);

    impl AnalogInput for MockAdc {
        fn read(&mut self) -> Result<u16, AdcError> {
            self.0
        }
    }

    fn joystick(x: Result<u16, AdcError>, y: Result<u16, AdcError>) -> AnalogJoystick<MockAdc, MockAdc> {
        let config = JoystickConfig {
            invert_horizontal: false,
            invert_vertical: false,
            ..JoystickConfig::default()
        };
        AnalogJoystick::new(MockAdc(x), MockAdc(y), JoystickClassifier::new(config))
    }

    #[test]
    fn test_centered_stick_is_idle() {
        let mut js = joystick(Ok(2048), Ok(2048));
        assert!(js.current_directions().is_idle());
    }

    #[test]
    fn test_deflection() {
        let mut js = joystick(Ok(4000), Ok(1900));
        let sample = js.current_directions();
        assert_eq!(sample.horizontal, AxisLevel::FastPositive);
        assert_eq!(sample.vertical, AxisLevel::Negative);
    }

    #[test]
    fn test_read_error_means_no_motion() {
        let mut js = joystick(Err(AdcError::ConversionFailed), Ok(0));
        let sample = js.current_directions();
        assert_eq!(sample.horizontal, AxisLevel::None);
        assert_eq!(sample.vertical, AxisLevel::FastNegative);
        assert_eq!(js.read_errors(), 1);
    }

    #[test]
    fn test_inverted_horizontal_default() {
        let mut js = AnalogJoystick::new(
            MockAdc(Ok(100)),
            MockAdc(Ok(2048)),
            JoystickClassifier::new(JoystickConfig::default()),
        );
        // Low X is rightward travel on the reference wiring
        assert_eq!(js.current_directions().horizontal, AxisLevel::FastPositive);
    }
}
