//! Hardware assembly
//!
//! Turns the pin map into concrete drivers: four step/dir steppers with
//! their endstops, the joystick on the shared ADC, the arm button and the
//! optional status LED.

use core::cell::RefCell;

use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::Pull;
use embassy_time::Delay;
use static_cell::StaticCell;

use quadlink_core::config::{ActuatorPins, ConfigError, MachineConfig, PinConfig};
use quadlink_core::control::ControlLoop;
use quadlink_core::input::JoystickClassifier;
use quadlink_core::link::{LinkCoordinator, PerSide};
use quadlink_drivers::input::{AnalogJoystick, DebouncedButton};
use quadlink_drivers::sensor::Endstop;
use quadlink_drivers::stepper::StepDirStepper;
use quadlink_hal::Polarity;
use quadlink_hal_rp2040::{
    AdcChannel, EmbassyClock, GpioInput, GpioOutput, JoystickPeripherals, PinBank, PinError,
    SharedAdc,
};

pub type Stepper = StepDirStepper<GpioOutput<'static>, GpioOutput<'static>, EmbassyClock, Delay>;
pub type LimitSwitch = Endstop<GpioInput<'static>>;
pub type Joystick = AnalogJoystick<AdcChannel<'static, 'static>, AdcChannel<'static, 'static>>;
pub type Controller = ControlLoop<Stepper, LimitSwitch, Joystick>;
pub type ArmButton = DebouncedButton<GpioInput<'static>>;

static ADC: StaticCell<SharedAdc<'static>> = StaticCell::new();

/// Start-up failure
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupError {
    Pin(PinError),
    Config(ConfigError),
}

impl From<PinError> for SetupError {
    fn from(e: PinError) -> Self {
        SetupError::Pin(e)
    }
}

impl From<ConfigError> for SetupError {
    fn from(e: ConfigError) -> Self {
        SetupError::Config(e)
    }
}

/// Everything the tasks need
pub struct Board {
    pub controller: Controller,
    pub arm_button: ArmButton,
    pub status_led: Option<(GpioOutput<'static>, Polarity)>,
}

impl Board {
    pub fn build(
        mut bank: PinBank,
        joystick: JoystickPeripherals,
        config: &MachineConfig,
    ) -> Result<Self, SetupError> {
        let pins = &config.pins;

        let (up, up_limit) = actuator(&mut bank, &pins.actuators.up, config)?;
        let (right, right_limit) = actuator(&mut bank, &pins.actuators.right, config)?;
        let (down, down_limit) = actuator(&mut bank, &pins.actuators.down, config)?;
        let (left, left_limit) = actuator(&mut bank, &pins.actuators.left, config)?;

        let link = LinkCoordinator::new(
            PerSide::new(up, right, down, left),
            PerSide::new(up_limit, right_limit, down_limit, left_limit),
            config.link.clone(),
        )?;

        let adc = ADC.init(RefCell::new(Adc::new_blocking(
            joystick.adc,
            AdcConfig::default(),
        )));
        let x = AdcChannel::new(adc, Channel::new_pin(joystick.x, Pull::None));
        let y = AdcChannel::new(adc, Channel::new_pin(joystick.y, Pull::None));
        let input = AnalogJoystick::new(x, y, JoystickClassifier::new(config.joystick.clone()));

        let arm_button = DebouncedButton::new(
            bank.input(&pins.arm_button)?,
            polarity(&pins.arm_button),
            config.control.button_debounce_ticks,
        );

        let status_led = match &pins.status_led {
            Some(led) => Some((bank.output(led)?, polarity(led))),
            None => None,
        };

        Ok(Self {
            controller: ControlLoop::new(link, input),
            arm_button,
            status_led,
        })
    }
}

fn polarity(pin: &PinConfig) -> Polarity {
    Polarity::from_inverted(pin.inverted)
}

fn actuator(
    bank: &mut PinBank,
    pins: &ActuatorPins,
    config: &MachineConfig,
) -> Result<(Stepper, LimitSwitch), PinError> {
    let step = bank.output(&pins.step)?;
    let dir = bank.output(&pins.dir)?;
    let stepper = StepDirStepper::new(
        step,
        dir,
        EmbassyClock,
        Delay,
        config.stepper.clone(),
        polarity(&pins.step),
        polarity(&pins.dir),
    );

    let endstop = Endstop::new(bank.input(&pins.endstop)?, polarity(&pins.endstop));

    Ok((stepper, endstop))
}
