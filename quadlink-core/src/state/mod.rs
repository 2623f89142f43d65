//! Calibration state machine
//!
//! The coordinator's phase is explicit, finite and only ever moves
//! forward: SeekingLimit → Centering → Ready.

pub mod events;
pub mod machine;

pub use events::PhaseEvent;
pub use machine::Phase;
