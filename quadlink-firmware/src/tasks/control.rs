//! Control task
//!
//! Runs the control loop at the configured tick rate. All actuator work
//! happens here; no other task touches the steppers.

use defmt::*;
use embassy_time::{Duration, Ticker};

use quadlink_core::config::ControlConfig;
use quadlink_core::control::LoopStatus;
use quadlink_core::link::Side;

use crate::board::{ArmButton, Controller};
use crate::channels::LINK_STATUS;

#[embassy_executor::task]
pub async fn control_task(
    mut controller: Controller,
    mut arm_button: ArmButton,
    config: ControlConfig,
) {
    info!(
        "Control task started: {} Hz, waiting for arm button",
        config.tick_hz
    );

    let mut ticker = Ticker::every(Duration::from_micros(config.tick_period_us()));
    let mut last = controller.status();
    let mut fault_reported = false;
    LINK_STATUS.signal(last);

    loop {
        ticker.next().await;

        if !controller.is_armed() {
            arm_button.sample();
            if arm_button.take_press() {
                info!("Arm button pressed, seeking limits");
                controller.arm();
            }
        }

        let status = controller.poll();

        if status.phase != last.phase {
            info!("Phase {} -> {}", last.phase, status.phase);
            LINK_STATUS.signal(status);
        }

        if let Some(fault) = status.fault {
            if !fault_reported {
                error!("Calibration fault: {}", fault);
                for side in Side::ALL {
                    if !controller.link().sensor_triggered(side) {
                        warn!("Limit switch {} never triggered", side.name());
                    }
                }
                fault_reported = true;
                LINK_STATUS.signal(status);
            }
        }

        if config.status_interval_ticks > 0
            && controller.ticks() % config.status_interval_ticks as u64 == 0
        {
            log_status(&controller, &status);
        }

        last = status;
    }
}

fn log_status(controller: &Controller, status: &LoopStatus) {
    let link = controller.link();
    debug!(
        "{} moving={} centering={} pos up={} right={} down={} left={}",
        status.phase,
        status.moving,
        link.centering_ticks(),
        link.actuator(Side::Up).current_position(),
        link.actuator(Side::Right).current_position(),
        link.actuator(Side::Down).current_position(),
        link.actuator(Side::Left).current_position(),
    );

    let read_errors = controller.input().read_errors();
    if read_errors > 0 {
        warn!("Joystick ADC read errors: {}", read_errors);
    }
}
