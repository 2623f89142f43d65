//! Limit sensor implementations

pub mod endstop;

pub use endstop::Endstop;
