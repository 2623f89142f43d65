//! Cardinal actuator positions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::input::Axis;

/// Cardinal position of an actuator/sensor pair on the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Side {
    Up,
    Right,
    Down,
    Left,
}

impl Side {
    /// All sides, in storage order
    pub const ALL: [Side; 4] = [Side::Up, Side::Right, Side::Down, Side::Left];

    /// Short lowercase name, used for config sections and logs
    pub fn name(self) -> &'static str {
        match self {
            Side::Up => "up",
            Side::Right => "right",
            Side::Down => "down",
            Side::Left => "left",
        }
    }
}

impl Axis {
    /// Antagonistic pair for this axis
    ///
    /// The first side retracts (steps backward) when positive travel is
    /// requested; the second extends.
    pub fn pair(self) -> (Side, Side) {
        match self {
            Axis::Horizontal => (Side::Right, Side::Left),
            Axis::Vertical => (Side::Up, Side::Down),
        }
    }
}

/// One value per cardinal side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerSide<T> {
    pub up: T,
    pub right: T,
    pub down: T,
    pub left: T,
}

impl<T> PerSide<T> {
    pub const fn new(up: T, right: T, down: T, left: T) -> Self {
        Self {
            up,
            right,
            down,
            left,
        }
    }

    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Up => &self.up,
            Side::Right => &self.right,
            Side::Down => &self.down,
            Side::Left => &self.left,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Up => &mut self.up,
            Side::Right => &mut self.right,
            Side::Down => &mut self.down,
            Side::Left => &mut self.left,
        }
    }

    /// Transform every value, keeping the side association
    pub fn map<U>(self, mut f: impl FnMut(Side, T) -> U) -> PerSide<U> {
        PerSide {
            up: f(Side::Up, self.up),
            right: f(Side::Right, self.right),
            down: f(Side::Down, self.down),
            left: f(Side::Left, self.left),
        }
    }

    /// Iterate `(side, value)` in [`Side::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().map(move |side| (side, self.get(side)))
    }
}

impl<T: Clone> PerSide<T> {
    /// Same value on every side
    pub fn splat(value: T) -> Self {
        Self {
            up: value.clone(),
            right: value.clone(),
            down: value.clone(),
            left: value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let names: heapless::Vec<&str, 4> = Side::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.as_slice(), &["up", "right", "down", "left"]);
    }

    #[test]
    fn test_axis_pairs() {
        assert_eq!(Axis::Horizontal.pair(), (Side::Right, Side::Left));
        assert_eq!(Axis::Vertical.pair(), (Side::Up, Side::Down));

        let (h_a, h_b) = Axis::Horizontal.pair();
        let (v_a, v_b) = Axis::Vertical.pair();
        for side in Side::ALL {
            assert_eq!(
                [h_a, h_b, v_a, v_b].iter().filter(|&&s| s == side).count(),
                1
            );
        }
    }

    #[test]
    fn test_per_side_access() {
        let mut values = PerSide::new(1, 2, 3, 4);
        assert_eq!(*values.get(Side::Down), 3);
        *values.get_mut(Side::Left) = 40;
        assert_eq!(values.left, 40);

        let doubled = values.map(|_, v| v * 2);
        assert_eq!(doubled, PerSide::new(2, 4, 6, 80));

        let sides: heapless::Vec<Side, 4> = values.iter().map(|(s, _)| s).collect();
        assert_eq!(sides.as_slice(), &Side::ALL);
    }

    #[test]
    fn test_splat() {
        assert_eq!(PerSide::splat(7), PerSide::new(7, 7, 7, 7));
    }
}
