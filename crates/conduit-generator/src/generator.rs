use conduit_core::{Dimensions, Grid, PipeVariant};

use crate::{
    BlockedCells, GenerateError, GridSeed, RngStream, StartingPoint, StartingPointSelector,
};

/// Options controlling grid generation.
///
/// # Examples
///
/// ```
/// use conduit_generator::GeneratorOptions;
///
/// let options = GeneratorOptions::default().rows(12).block_probability(0.1);
/// assert_eq!(options.rows, 12);
/// assert_eq!(options.cols, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorOptions {
    /// Grid height.
    pub rows: usize,
    /// Grid width.
    pub cols: usize,
    /// Independent per-cell blocking probability.
    pub block_probability: f64,
    /// Random draw budget for starting-point selection.
    ///
    /// `None` scales the budget with the grid size
    /// (see [`StartingPointSelector::for_dimensions`]).
    pub max_start_attempts: Option<usize>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            rows: Dimensions::DEFAULT_ROWS,
            cols: Dimensions::DEFAULT_COLS,
            block_probability: BlockedCells::DEFAULT_PROBABILITY,
            max_start_attempts: None,
        }
    }
}

impl GeneratorOptions {
    /// Sets the grid height.
    #[must_use]
    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the grid width.
    #[must_use]
    pub fn cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    /// Sets the per-cell blocking probability.
    #[must_use]
    pub fn block_probability(mut self, probability: f64) -> Self {
        self.block_probability = probability;
        self
    }

    /// Sets the starting-point draw budget.
    #[must_use]
    pub fn max_start_attempts(mut self, attempts: usize) -> Self {
        self.max_start_attempts = Some(attempts);
        self
    }
}

/// A freshly generated grid with its walls and starting point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedGrid {
    /// The board. Walls are [`PipeVariant::Blocked`]; the starting point is
    /// locked.
    pub grid: Grid,
    /// The walls placed on the board.
    pub blocked: BlockedCells,
    /// Where flow starts.
    pub starting_point: StartingPoint,
    /// The seed the grid was generated from.
    pub seed: GridSeed,
}

impl GeneratedGrid {
    /// Returns `true` if the grid, its walls and its starting point describe
    /// the same board.
    ///
    /// The grid must match `blocked` cell for cell and hold exactly one
    /// starting-point tile, locked at `starting_point` and facing its
    /// direction. Grids from [`GridGenerator`] always pass; hand-assembled
    /// ones may not.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let StartingPoint {
            position,
            direction,
        } = self.starting_point;
        self.grid.dimensions() == self.blocked.dimensions()
            && self
                .grid
                .cells()
                .all(|(pos, cell)| cell.is_blocked() == self.blocked.contains(pos))
            && self.grid.starting_points().eq([position])
            && self.grid.cell(position).is_some_and(|cell| {
                cell.is_locked() && cell.variant().starting_direction() == Some(direction)
            })
    }
}

/// Generates grids from [`GeneratorOptions`].
///
/// # Examples
///
/// ```
/// use conduit_generator::{GeneratorOptions, GridGenerator, GridSeed};
///
/// let generator = GridGenerator::new(GeneratorOptions::default());
/// let seed = GridSeed::random();
///
/// let a = generator.generate_with_seed(seed)?;
/// let b = generator.generate_with_seed(seed)?;
/// assert_eq!(a, b);
/// assert_eq!(a.grid.starting_points().count(), 1);
/// # Ok::<(), conduit_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGenerator {
    options: GeneratorOptions,
}

impl GridGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Returns the generation options.
    #[must_use]
    pub const fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generates a grid from a random seed.
    ///
    /// # Errors
    ///
    /// See [`generate_with_seed`](Self::generate_with_seed).
    pub fn generate(&self) -> Result<GeneratedGrid, GenerateError> {
        self.generate_with_seed(GridSeed::random())
    }

    /// Generates the grid determined by `seed`.
    ///
    /// Walls come from one Bernoulli trial per cell; the starting point is then
    /// chosen among the cells the walls leave legal.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::InvalidGrid`] if rows or columns is zero.
    /// - [`GenerateError::InvalidBlockProbability`] if the probability is not
    ///   within `0.0..=1.0`.
    /// - [`GenerateError::UnsatisfiableStartingPoint`] if the walls leave no
    ///   legal starting point.
    pub fn generate_with_seed(&self, seed: GridSeed) -> Result<GeneratedGrid, GenerateError> {
        let dims = Dimensions::new(self.options.rows, self.options.cols)?;

        let blocked = BlockedCells::generate(
            dims,
            self.options.block_probability,
            &mut seed.rng(RngStream::Blocked),
        )?;
        log::debug!("blocked {} of {} cells", blocked.len(), dims.cell_count());

        let selector = self.options.max_start_attempts.map_or_else(
            || StartingPointSelector::for_dimensions(dims),
            StartingPointSelector::new,
        );
        let starting_point =
            selector.select(&blocked, &mut seed.rng(RngStream::StartingPoint))?;
        log::debug!("starting point at {starting_point}");

        let grid = assemble(dims, &blocked, starting_point)?;
        Ok(GeneratedGrid {
            grid,
            blocked,
            starting_point,
            seed,
        })
    }
}

fn assemble(
    dims: Dimensions,
    blocked: &BlockedCells,
    starting_point: StartingPoint,
) -> Result<Grid, GenerateError> {
    let mut grid = Grid::new(dims);
    for pos in blocked.iter() {
        grid.set_variant(pos, PipeVariant::Blocked)?;
    }
    grid.set_variant(
        starting_point.position,
        PipeVariant::starting_point(starting_point.direction),
    )?;
    grid.lock(starting_point.position)?;
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use conduit_core::{Direction, GridError};

    use super::*;

    const SEEDS: [&str; 3] = [
        "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
        "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
        "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
    ];

    fn seeds() -> impl Iterator<Item = GridSeed> {
        SEEDS.into_iter().map(|s| s.parse().unwrap())
    }

    #[test]
    fn test_open_grid_has_one_start_and_no_walls() {
        let generator = GridGenerator::new(GeneratorOptions::default().block_probability(0.0));
        for seed in seeds() {
            let generated = generator.generate_with_seed(seed).unwrap();
            assert!(generated.blocked.is_empty());
            assert_eq!(generated.grid.count(PipeVariant::Blocked), 0);
            assert_eq!(
                generated.grid.starting_points().collect::<Vec<_>>(),
                [generated.starting_point.position]
            );
            assert!(generated.starting_point.is_legal(&generated.blocked));
            assert!(generated.is_consistent());
        }
    }

    #[test]
    fn test_tampered_grid_is_inconsistent() {
        let generator = GridGenerator::new(GeneratorOptions::default().block_probability(0.0));
        let generated = generator
            .generate_with_seed(seeds().next().unwrap())
            .unwrap();

        let mut extra_wall = generated.clone();
        let open = extra_wall
            .grid
            .positions()
            .find(|&pos| pos != generated.starting_point.position)
            .unwrap();
        extra_wall
            .grid
            .set_variant(open, PipeVariant::Blocked)
            .unwrap();
        assert!(!extra_wall.is_consistent());

        let mut moved_start = generated.clone();
        moved_start.starting_point.position = open;
        assert!(!moved_start.is_consistent());

        let mut turned_start = generated;
        turned_start.starting_point.direction = turned_start.starting_point.direction.opposite();
        assert!(!turned_start.is_consistent());
    }

    #[test]
    fn test_fully_blocked_grid_fails() {
        let generator = GridGenerator::new(
            GeneratorOptions::default()
                .rows(2)
                .cols(2)
                .block_probability(1.0),
        );
        for seed in seeds() {
            assert!(matches!(
                generator.generate_with_seed(seed),
                Err(GenerateError::UnsatisfiableStartingPoint { .. })
            ));
        }
    }

    #[test]
    fn test_invalid_options() {
        let zero = GridGenerator::new(GeneratorOptions::default().rows(0));
        assert_eq!(
            zero.generate(),
            Err(GenerateError::InvalidGrid(GridError::InvalidDimensions {
                rows: 0,
                cols: 7,
            }))
        );

        let bad_probability =
            GridGenerator::new(GeneratorOptions::default().block_probability(2.0));
        assert!(matches!(
            bad_probability.generate(),
            Err(GenerateError::InvalidBlockProbability { .. })
        ));
    }

    #[test]
    fn test_grid_reflects_walls_and_start() {
        let generator = GridGenerator::new(GeneratorOptions::default().block_probability(0.2));
        for seed in seeds() {
            let generated = generator.generate_with_seed(seed).unwrap();
            let GeneratedGrid {
                grid,
                blocked,
                starting_point,
                ..
            } = &generated;

            assert_eq!(grid.count(PipeVariant::Blocked), blocked.len());
            for (pos, cell) in grid.cells() {
                assert_eq!(cell.is_blocked(), blocked.contains(pos));
                assert_eq!(cell.is_locked(), pos == starting_point.position);
            }
            let start = grid.cell(starting_point.position).unwrap();
            assert_eq!(
                start.variant().starting_direction(),
                Some(starting_point.direction)
            );

            let below = starting_point.position.step(Direction::Down).unwrap();
            assert!(!blocked.contains(below));
            if let Some(facing) = starting_point.position.step(starting_point.direction) {
                assert!(!blocked.contains(facing));
            }
        }
    }

    #[test]
    fn test_zero_attempts_still_finds_start() {
        let generator = GridGenerator::new(
            GeneratorOptions::default()
                .block_probability(0.0)
                .max_start_attempts(0),
        );
        let generated = generator
            .generate_with_seed(SEEDS[0].parse().unwrap())
            .unwrap();
        assert!(generated.starting_point.is_legal(&generated.blocked));
        assert!(generated.starting_point.position.row < 8);
    }
}
