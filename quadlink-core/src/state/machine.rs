//! Phase definition

use super::events::PhaseEvent;

/// Coordinator phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Driving every actuator outward until the limit sensors trigger
    #[default]
    SeekingLimit,
    /// Retracting from the limits toward the center
    Centering,
    /// Calibrated; direction requests are accepted
    Ready,
}

impl Phase {
    /// Check if direction requests are accepted
    pub fn accepts_directions(&self) -> bool {
        matches!(self, Phase::Ready)
    }

    /// Check if calibration is still in progress
    pub fn is_calibrating(&self) -> bool {
        !self.accepts_directions()
    }

    /// Process an event and return the next phase
    ///
    /// Unmatched pairs leave the phase unchanged, so `Ready` is terminal.
    pub fn transition(self, event: PhaseEvent) -> Self {
        use Phase::*;
        use PhaseEvent::*;

        match (self, event) {
            (SeekingLimit, LimitsReached) => Centering,
            (Centering, CenterReached) => Ready,
            _ => self,
        }
    }
}
