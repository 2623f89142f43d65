//! Direction value types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::motion::SpeedClass;

/// One of the two independent axes of frame travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Left/right travel (positive = right)
    Horizontal,
    /// Down/up travel (positive = up)
    Vertical,
}

/// Requested travel on one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AxisLevel {
    FastNegative,
    Negative,
    #[default]
    None,
    Positive,
    FastPositive,
}

impl AxisLevel {
    /// Speed class for this level, `None` when no travel is requested
    pub fn speed_class(self) -> Option<SpeedClass> {
        match self {
            AxisLevel::FastNegative | AxisLevel::FastPositive => Some(SpeedClass::Fast),
            AxisLevel::Negative | AxisLevel::Positive => Some(SpeedClass::Slow),
            AxisLevel::None => None,
        }
    }

    /// -1, 0 or 1
    pub fn sign(self) -> i8 {
        match self {
            AxisLevel::FastNegative | AxisLevel::Negative => -1,
            AxisLevel::None => 0,
            AxisLevel::Positive | AxisLevel::FastPositive => 1,
        }
    }

    /// Check if this level requests positive travel
    pub fn is_positive(self) -> bool {
        self.sign() > 0
    }

    /// Same magnitude, opposite sign
    pub fn inverted(self) -> Self {
        match self {
            AxisLevel::FastNegative => AxisLevel::FastPositive,
            AxisLevel::Negative => AxisLevel::Positive,
            AxisLevel::None => AxisLevel::None,
            AxisLevel::Positive => AxisLevel::Negative,
            AxisLevel::FastPositive => AxisLevel::FastNegative,
        }
    }
}

/// Both axes of one input reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DirectionSample {
    pub horizontal: AxisLevel,
    pub vertical: AxisLevel,
}

impl DirectionSample {
    /// No travel requested on either axis
    pub const IDLE: Self = Self {
        horizontal: AxisLevel::None,
        vertical: AxisLevel::None,
    };

    pub const fn new(horizontal: AxisLevel, vertical: AxisLevel) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Level for the given axis
    pub fn level(&self, axis: Axis) -> AxisLevel {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    /// Check if no travel is requested at all
    pub fn is_idle(&self) -> bool {
        self.horizontal == AxisLevel::None && self.vertical == AxisLevel::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_class() {
        assert_eq!(AxisLevel::FastPositive.speed_class(), Some(SpeedClass::Fast));
        assert_eq!(AxisLevel::FastNegative.speed_class(), Some(SpeedClass::Fast));
        assert_eq!(AxisLevel::Positive.speed_class(), Some(SpeedClass::Slow));
        assert_eq!(AxisLevel::Negative.speed_class(), Some(SpeedClass::Slow));
        assert_eq!(AxisLevel::None.speed_class(), None);
    }

    #[test]
    fn test_inverted_keeps_magnitude() {
        let levels = [
            AxisLevel::FastNegative,
            AxisLevel::Negative,
            AxisLevel::None,
            AxisLevel::Positive,
            AxisLevel::FastPositive,
        ];

        for level in levels {
            let inv = level.inverted();
            assert_eq!(inv.speed_class(), level.speed_class());
            assert_eq!(inv.sign(), -level.sign());
            assert_eq!(inv.inverted(), level);
        }
    }

    #[test]
    fn test_sample_accessors() {
        let sample = DirectionSample::new(AxisLevel::Positive, AxisLevel::FastNegative);
        assert_eq!(sample.level(Axis::Horizontal), AxisLevel::Positive);
        assert_eq!(sample.level(Axis::Vertical), AxisLevel::FastNegative);
        assert!(!sample.is_idle());
        assert!(DirectionSample::IDLE.is_idle());
        assert_eq!(DirectionSample::default(), DirectionSample::IDLE);
    }
}
