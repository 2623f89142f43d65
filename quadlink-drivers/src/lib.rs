//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the capability traits
//! defined in quadlink-core, written against the quadlink-hal pin traits:
//!
//! - Step/dir stepper driver (`MotionDevice`)
//! - Limit switch endstop (`SensorDevice`)
//! - Two-axis analog joystick (`DirectionSource`)
//! - Debounced push button for arming

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod input;
pub mod sensor;
pub mod stepper;
