//! Board-agnostic core logic for the four-actuator frame controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits for motion, limit sensing and operator input
//! - Actuator issuance gate and position bookkeeping
//! - The link coordinator: calibration state machine and antagonistic pairing
//! - Joystick classification into five-level directions
//! - Calibration watchdog
//! - Configuration type definitions
//! - The polling control loop that sequences calibration and operation

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod input;
pub mod link;
pub mod motion;
pub mod safety;
pub mod state;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;
