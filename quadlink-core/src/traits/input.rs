//! Operator input capability

use crate::input::DirectionSample;

/// Pull-based provider of the operator's requested direction
pub trait DirectionSource {
    /// Sample the input device once
    ///
    /// Called at most once per tick, and only once calibration is complete.
    fn current_directions(&mut self) -> DirectionSample;
}
