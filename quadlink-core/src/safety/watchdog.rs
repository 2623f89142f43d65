//! Calibration watchdog
//!
//! A limit switch that never triggers (jammed actuator, unplugged sensor)
//! would otherwise keep the link seeking forever. The watchdog counts seek
//! rounds and reports a fault once the configured ceiling is reached.

/// Types of faults the core can detect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultKind {
    /// Limit sensors did not trigger within the seek ceiling
    CalibrationTimeout,
}

/// Safety condition status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SafetyStatus {
    /// All conditions normal
    Ok,
    /// Safety condition violated
    Fault(FaultKind),
}

impl SafetyStatus {
    pub fn is_fault(&self) -> bool {
        matches!(self, SafetyStatus::Fault(_))
    }

    pub fn fault(&self) -> Option<FaultKind> {
        match self {
            SafetyStatus::Ok => None,
            SafetyStatus::Fault(kind) => Some(*kind),
        }
    }
}

/// Seek-round counter with a ceiling
#[derive(Debug, Clone)]
pub struct CalibrationWatchdog {
    /// Ceiling in seek rounds, 0 disables the watchdog
    limit: u32,
    /// Seek rounds issued so far
    rounds: u32,
}

impl CalibrationWatchdog {
    pub fn new(limit: u32) -> Self {
        Self { limit, rounds: 0 }
    }

    /// Record one issued seek round
    pub fn record_round(&mut self) {
        self.rounds = self.rounds.saturating_add(1);
    }

    pub fn is_enabled(&self) -> bool {
        self.limit > 0
    }

    pub fn check(&self) -> SafetyStatus {
        if self.is_enabled() && self.rounds >= self.limit {
            SafetyStatus::Fault(FaultKind::CalibrationTimeout)
        } else {
            SafetyStatus::Ok
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_at_ceiling() {
        let mut watchdog = CalibrationWatchdog::new(3);
        for _ in 0..2 {
            watchdog.record_round();
            assert_eq!(watchdog.check(), SafetyStatus::Ok);
        }

        watchdog.record_round();
        assert_eq!(
            watchdog.check(),
            SafetyStatus::Fault(FaultKind::CalibrationTimeout)
        );
        assert_eq!(watchdog.check().fault(), Some(FaultKind::CalibrationTimeout));
    }

    #[test]
    fn test_disabled_never_faults() {
        let mut watchdog = CalibrationWatchdog::new(0);
        assert!(!watchdog.is_enabled());
        for _ in 0..10_000 {
            watchdog.record_round();
        }
        assert!(!watchdog.check().is_fault());
    }
}
