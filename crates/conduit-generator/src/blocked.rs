//! Random wall placement.

use conduit_core::{Dimensions, Position};
use rand::Rng;

use crate::GenerateError;

/// The set of blocked cells of one grid.
///
/// Computed once when a grid is built and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockedCells {
    dims: Dimensions,
    cells: Vec<bool>,
    count: usize,
}

impl BlockedCells {
    /// Default per-cell blocking probability.
    pub const DEFAULT_PROBABILITY: f64 = 0.05;

    /// Creates an empty set for a grid of `dims`.
    #[must_use]
    pub fn empty(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![false; dims.cell_count()],
            count: 0,
        }
    }

    /// Creates a set holding the given positions.
    ///
    /// Positions outside `dims` are ignored.
    #[must_use]
    pub fn from_positions<I>(dims: Dimensions, positions: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut this = Self::empty(dims);
        for pos in positions {
            this.insert(pos);
        }
        this
    }

    /// Runs one independent Bernoulli trial per cell, in row-major order.
    ///
    /// The number of blocked cells is not fixed; it varies from run to run.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidBlockProbability`] if `probability` is
    /// NaN or outside `0.0..=1.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use conduit_core::Dimensions;
    /// use conduit_generator::BlockedCells;
    /// use rand::SeedableRng as _;
    /// use rand_pcg::Pcg64;
    ///
    /// let dims = Dimensions::new(9, 7)?;
    /// let mut rng = Pcg64::seed_from_u64(7);
    ///
    /// let none = BlockedCells::generate(dims, 0.0, &mut rng)?;
    /// assert!(none.is_empty());
    ///
    /// let all = BlockedCells::generate(dims, 1.0, &mut rng)?;
    /// assert_eq!(all.len(), 63);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn generate<R>(
        dims: Dimensions,
        probability: f64,
        rng: &mut R,
    ) -> Result<Self, GenerateError>
    where
        R: Rng + ?Sized,
    {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GenerateError::InvalidBlockProbability { probability });
        }
        let mut this = Self::empty(dims);
        for pos in dims.positions() {
            if rng.random_bool(probability) {
                this.insert(pos);
            }
        }
        Ok(this)
    }

    fn insert(&mut self, pos: Position) {
        if let Some(i) = self.dims.index_of(pos)
            && !self.cells[i]
        {
            self.cells[i] = true;
            self.count += 1;
        }
    }

    /// Returns the grid size this set was generated for.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Returns `true` if `pos` is blocked. Out-of-range positions are not.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.dims.index_of(pos).is_some_and(|i| self.cells[i])
    }

    /// Number of blocked cells.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if no cell is blocked.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterates blocked positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Position> {
        self.dims
            .positions()
            .zip(&self.cells)
            .filter(|&(_, &blocked)| blocked)
            .map(|(pos, _)| pos)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn dims(rows: usize, cols: usize) -> Dimensions {
        Dimensions::new(rows, cols).unwrap()
    }

    #[test]
    fn test_probability_bounds() {
        let mut rng = Pcg64::seed_from_u64(0);
        for probability in [-0.1, 1.5, f64::NAN] {
            let result = BlockedCells::generate(dims(3, 3), probability, &mut rng);
            assert!(matches!(
                result,
                Err(GenerateError::InvalidBlockProbability { .. })
            ));
        }
    }

    #[test]
    fn test_extreme_probabilities() {
        let mut rng = Pcg64::seed_from_u64(1);
        let none = BlockedCells::generate(dims(9, 7), 0.0, &mut rng).unwrap();
        assert_eq!(none.len(), 0);
        assert_eq!(none.iter().count(), 0);

        let all = BlockedCells::generate(dims(9, 7), 1.0, &mut rng).unwrap();
        assert_eq!(all.len(), 63);
        assert!(dims(9, 7).positions().all(|pos| all.contains(pos)));
    }

    #[test]
    fn test_count_varies_with_seed() {
        let counts: Vec<_> = (0..32)
            .map(|seed| {
                let mut rng = Pcg64::seed_from_u64(seed);
                BlockedCells::generate(dims(20, 20), 0.3, &mut rng)
                    .unwrap()
                    .len()
            })
            .collect();
        assert!(counts.iter().any(|&c| c != counts[0]));
        // 400 trials at 0.3: far from either extreme.
        assert!(counts.iter().all(|&c| (40..=200).contains(&c)));
    }

    #[test]
    fn test_same_seed_same_cells() {
        let generate = |seed| {
            let mut rng = Pcg64::seed_from_u64(seed);
            BlockedCells::generate(dims(9, 7), 0.2, &mut rng).unwrap()
        };
        assert_eq!(generate(5), generate(5));
    }

    #[test]
    fn test_from_positions() {
        let set = BlockedCells::from_positions(
            dims(3, 3),
            [
                Position::new(0, 1),
                Position::new(2, 2),
                Position::new(0, 1),
                Position::new(5, 5),
            ],
        );
        assert_eq!(set.len(), 2);
        assert!(set.contains(Position::new(2, 2)));
        assert!(!set.contains(Position::new(5, 5)));
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            [Position::new(0, 1), Position::new(2, 2)]
        );
    }
}
