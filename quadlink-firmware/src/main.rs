//! Quadlink - Four-Actuator Frame Controller Firmware
//!
//! Main firmware binary for RP2040-based boards. A frame hangs between
//! four linear actuators (up, right, down, left); after the arm button is
//! pressed the actuators find their limit switches, retract to the center
//! and then follow the joystick.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use quadlink_hal_rp2040::PinBank;

use crate::board::Board;
use crate::config::MACHINE_CONFIG;

mod board;
mod channels;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Quadlink firmware starting...");

    let p = embassy_rp::init(Default::default());
    let (bank, joystick) = PinBank::from_peripherals(p);
    info!("Peripherals initialized");

    let config = MACHINE_CONFIG;
    info!(
        "Link: slow={} fast={} factor={} bounds=[{}, {}] center={} timeout={}",
        config.link.slow_speed,
        config.link.fast_speed,
        config.link.outward_speed_factor,
        config.link.min_position(),
        config.link.max_position,
        config.link.center_travel_ticks,
        config.link.calibration_timeout_rounds,
    );

    let board = match Board::build(bank, joystick, &config) {
        Ok(board) => board,
        Err(e) => {
            error!("Hardware setup failed: {}", e);
            loop {
                cortex_m::asm::wfi();
            }
        }
    };
    info!("Actuators, endstops and joystick initialized");

    if let Some((led, polarity)) = board.status_led {
        spawner.spawn(unwrap!(tasks::status_led_task(led, polarity)));
    }

    spawner.spawn(unwrap!(tasks::control_task(
        board.controller,
        board.arm_button,
        config.control.clone(),
    )));

    info!("All tasks spawned");
}
