//! Cardinal directions on the grid.

use std::fmt::{self, Display};

use crate::FlowFlags;

/// One of the four sides of a cell.
///
/// Rows grow downwards and columns grow to the right, so [`Direction::Up`]
/// points at the row with the smaller index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Towards row `row - 1`.
    Up,
    /// Towards row `row + 1`.
    Down,
    /// Towards column `col - 1`.
    Left,
    /// Towards column `col + 1`.
    Right,
}

impl Direction {
    /// All directions in `Up, Down, Left, Right` order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the direction pointing the other way.
    ///
    /// # Examples
    ///
    /// ```
    /// use conduit_core::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the single flow flag for this side.
    #[must_use]
    pub const fn flow(self) -> FlowFlags {
        match self {
            Self::Up => FlowFlags::UP,
            Self::Down => FlowFlags::DOWN,
            Self::Left => FlowFlags::LEFT,
            Self::Right => FlowFlags::RIGHT,
        }
    }

    /// Returns the `(row, col)` delta of one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_delta_cancels_with_opposite() {
        for direction in Direction::ALL {
            let (dr, dc) = direction.delta();
            let (or, oc) = direction.opposite().delta();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn test_flow_flags_are_distinct() {
        let mut all = FlowFlags::empty();
        for direction in Direction::ALL {
            assert_eq!(direction.flow().bits().count_ones(), 1);
            assert!(!all.intersects(direction.flow()));
            all |= direction.flow();
        }
        assert_eq!(all, FlowFlags::all());
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Right.to_string(), "right");
    }
}
