//! Grid dimensions and row-major indexing.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

use crate::{Direction, GridError, Position};

/// Validated grid size. Both sides are at least one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    /// Default board height.
    pub const DEFAULT_ROWS: usize = 9;
    /// Default board width.
    pub const DEFAULT_COLS: usize = 7;

    /// Creates dimensions of `rows` by `cols` cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either side is zero or the
    /// cell count does not fit in `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use conduit_core::{Dimensions, GridError};
    ///
    /// let dims = Dimensions::new(9, 7)?;
    /// assert_eq!(dims.cell_count(), 63);
    ///
    /// assert!(matches!(
    ///     Dimensions::new(0, 7),
    ///     Err(GridError::InvalidDimensions { rows: 0, cols: 7 })
    /// ));
    /// # Ok::<(), GridError>(())
    /// ```
    pub const fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    /// Returns `true` if `pos` addresses a cell of this grid.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Returns the row-major index of `pos`, or `None` if it is out of range.
    #[must_use]
    pub const fn index_of(self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    /// Returns the position stored at row-major `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`cell_count`](Self::cell_count).
    #[must_use]
    pub const fn position_of(self, index: usize) -> Position {
        assert!(index < self.cell_count());
        Position::new(index / self.cols, index % self.cols)
    }

    /// Returns the in-range neighbour of `pos` in `direction`.
    #[must_use]
    pub fn neighbor(self, pos: Position, direction: Direction) -> Option<Position> {
        pos.step(direction).filter(|&next| self.contains(next))
    }

    /// Iterates every position in row-major order.
    #[must_use]
    pub const fn positions(self) -> Positions {
        Positions {
            dims: self,
            front: 0,
            back: self.cell_count(),
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            rows: Self::DEFAULT_ROWS,
            cols: Self::DEFAULT_COLS,
        }
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Row-major iterator over the positions of a grid.
///
/// Returned by [`Dimensions::positions`].
#[derive(Debug, Clone)]
pub struct Positions {
    dims: Dimensions,
    front: usize,
    back: usize,
}

impl Iterator for Positions {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let pos = self.dims.position_of(self.front);
        self.front += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Positions {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.dims.position_of(self.back))
    }
}

impl ExactSizeIterator for Positions {}

impl FusedIterator for Positions {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_default_is_nine_by_seven() {
        let dims = Dimensions::default();
        assert_eq!((dims.rows(), dims.cols()), (9, 7));
        assert_eq!(dims.to_string(), "9x7");
    }

    #[test]
    fn test_rejects_zero_sides() {
        assert!(Dimensions::new(0, 0).is_err());
        assert!(Dimensions::new(3, 0).is_err());
        assert!(Dimensions::new(1, 1).is_ok());
    }

    #[test]
    fn test_rejects_overflowing_cell_count() {
        assert_eq!(
            Dimensions::new(usize::MAX, 2),
            Err(GridError::InvalidDimensions {
                rows: usize::MAX,
                cols: 2,
            })
        );
        assert!(Dimensions::new(1 << 40, 1 << 40).is_err());

        let widest = Dimensions::new(1, usize::MAX).unwrap();
        assert_eq!(widest.cell_count(), usize::MAX);
    }

    #[test]
    fn test_positions_row_major() {
        let dims = Dimensions::new(2, 3).unwrap();
        let positions: Vec<_> = dims.positions().collect();
        assert_eq!(positions.len(), 6);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[2], Position::new(0, 2));
        assert_eq!(positions[3], Position::new(1, 0));
        assert_eq!(dims.positions().next_back(), Some(Position::new(1, 2)));
        for (i, pos) in positions.into_iter().enumerate() {
            assert_eq!(dims.index_of(pos), Some(i));
        }
    }

    #[test]
    fn test_neighbor_respects_edges() {
        let dims = Dimensions::new(3, 3).unwrap();
        let corner = Position::new(2, 2);
        assert_eq!(dims.neighbor(corner, Direction::Down), None);
        assert_eq!(dims.neighbor(corner, Direction::Right), None);
        assert_eq!(
            dims.neighbor(corner, Direction::Up),
            Some(Position::new(1, 2))
        );
    }

    proptest! {
        #[test]
        fn prop_contains_matches_ranges(
            rows in 1usize..20,
            cols in 1usize..20,
            row in 0usize..40,
            col in 0usize..40,
        ) {
            let dims = Dimensions::new(rows, cols).unwrap();
            let pos = Position::new(row, col);
            prop_assert_eq!(dims.contains(pos), row < rows && col < cols);
            prop_assert_eq!(dims.index_of(pos).is_some(), dims.contains(pos));
        }
    }
}
