//! Cell coordinates.

use std::fmt::{self, Display};

use crate::Direction;

/// A cell coordinate, `row` counted from the top and `col` from the left.
///
/// A position is only meaningful relative to some [`Dimensions`](crate::Dimensions);
/// use [`Dimensions::contains`](crate::Dimensions::contains) to check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the position one step in `direction`, or `None` if that would
    /// leave the non-negative quadrant.
    ///
    /// The result is not bounds-checked against any grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use conduit_core::{Direction, Position};
    ///
    /// let pos = Position::new(0, 3);
    /// assert_eq!(pos.step(Direction::Down), Some(Position::new(1, 3)));
    /// assert_eq!(pos.step(Direction::Up), None);
    /// ```
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let Some(row) = self.row.checked_add_signed(dr) else {
            return None;
        };
        let Some(col) = self.col.checked_add_signed(dc) else {
            return None;
        };
        Some(Self { row, col })
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step() {
        let pos = Position::new(2, 2);
        assert_eq!(pos.step(Direction::Up), Some(Position::new(1, 2)));
        assert_eq!(pos.step(Direction::Down), Some(Position::new(3, 2)));
        assert_eq!(pos.step(Direction::Left), Some(Position::new(2, 1)));
        assert_eq!(pos.step(Direction::Right), Some(Position::new(2, 3)));

        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
    }

    #[test]
    fn test_display_and_from() {
        let pos: Position = (4, 1).into();
        assert_eq!(pos, Position::new(4, 1));
        assert_eq!(pos.to_string(), "(4, 1)");
    }
}
