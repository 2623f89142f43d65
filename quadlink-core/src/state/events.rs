//! Events that trigger phase transitions

/// Events that can advance the calibration phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseEvent {
    /// The limit policy is satisfied while seeking
    LimitsReached,
    /// Centering travel is complete and the zero reference is set
    CenterReached,
}
