//! Quadlink Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs (RP2040 today). The drivers in `quadlink-drivers`
//! are written against these traits only, so the same driver code runs on
//! the target and inside host unit tests with mock pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  quadlink-firmware / quadlink-drivers   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  quadlink-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ quadlink-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`adc::AnalogInput`] - Single ADC channel
//! - [`time::MonotonicClock`] - Microsecond timestamps for step timing

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod time;

// Re-export key traits at crate root for convenience
pub use adc::{AdcError, AnalogInput};
pub use gpio::{InputPin, OutputPin, Polarity};
pub use time::MonotonicClock;
