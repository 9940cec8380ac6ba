use std::fmt::{self, Display};

use conduit_core::{FlowFlags, Grid, PipeVariant, Position};
use conduit_generator::{
    BlockedCells, GeneratedGrid, GridGenerator, GridSeed, RngStream, StartingPoint,
};

use crate::{Conveyor, GameConfig, GameError, RandomVariants};

/// Why a placement request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum PlacementBlockReason {
    /// The position is outside the grid.
    #[display("position is outside the grid")]
    OutOfBounds,
    /// The cell is a wall.
    #[display("cell is blocked")]
    BlockedCell,
    /// The cell is the starting point.
    #[display("cell is locked")]
    LockedCell,
}

/// Outcome of [`Game::request_placement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum PlacementResult {
    /// The cell now holds `variant`, taken from the conveyor head.
    Applied {
        /// The placed tile.
        variant: PipeVariant,
    },
    /// Nothing changed.
    Ignored(PlacementBlockReason),
}

impl PlacementResult {
    /// Returns the placed tile, if any.
    #[must_use]
    pub const fn new_variant(self) -> Option<PipeVariant> {
        match self {
            Self::Applied { variant } => Some(variant),
            Self::Ignored(_) => None,
        }
    }
}

/// A read-only projection of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellView {
    /// Cell coordinates.
    pub position: Position,
    /// Current tile.
    pub variant: PipeVariant,
    /// Sides the tile carries flow through.
    pub flow: FlowFlags,
    /// Whether the cell is a wall.
    pub blocked: bool,
    /// Whether the cell refuses placements.
    pub locked: bool,
}

/// A copy of the full session state.
///
/// The [`Display`] form is a human-readable dump used by the command-line
/// driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    /// Seed that reproduces the session.
    pub seed: GridSeed,
    /// The board.
    pub grid: Grid,
    /// Where flow starts.
    pub starting_point: StartingPoint,
    /// Upcoming tiles, head first.
    pub conveyor: Vec<PipeVariant>,
    /// Number of walls.
    pub blocked_count: usize,
    /// Number of applied placements.
    pub placements: usize,
}

impl Display for GridSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "seed: {}", self.seed)?;
        writeln!(
            f,
            "size: {}, blocked: {}, placements: {}",
            self.grid.dimensions(),
            self.blocked_count,
            self.placements
        )?;
        writeln!(f, "start: {}", self.starting_point)?;
        write!(f, "conveyor:")?;
        for variant in &self.conveyor {
            write!(f, " {}", variant.symbol())?;
        }
        writeln!(f)?;
        write!(f, "{}", self.grid)
    }
}

/// A pipe puzzle session.
///
/// Owns the grid, its walls, the starting point and the conveyor. Placement
/// requests are the only way to change the board.
///
/// # Examples
///
/// ```
/// use conduit_core::Position;
/// use conduit_game::{Game, GameConfig};
///
/// let mut game = Game::build(&GameConfig::default())?;
///
/// // The starting point is locked.
/// let start = game.starting_point().position;
/// assert!(game.request_placement(start).is_ignored());
///
/// // Any other open cell takes the conveyor head.
/// let target = game
///     .grid()
///     .positions()
///     .find(|&pos| game.placement_capability(pos).is_ok())
///     .unwrap();
/// let next = game.peek_conveyor()[0];
/// assert_eq!(game.request_placement(target).new_variant(), Some(next));
/// # Ok::<(), conduit_game::GameError>(())
/// ```
#[derive(Debug)]
pub struct Game {
    grid: Grid,
    blocked: BlockedCells,
    starting_point: StartingPoint,
    conveyor: Conveyor,
    seed: GridSeed,
    placements: usize,
}

impl Game {
    /// Builds a game from a random seed.
    ///
    /// # Errors
    ///
    /// See [`build_with_seed`](Self::build_with_seed).
    pub fn build(config: &GameConfig) -> Result<Self, GameError> {
        Self::build_with_seed(config, GridSeed::random())
    }

    /// Builds the game determined by `config` and `seed`.
    ///
    /// The same seed and configuration always produce the same grid, starting
    /// point and conveyor.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidConveyorLength`] if the conveyor length is zero.
    /// - [`GameError::Generate`] if grid generation fails.
    pub fn build_with_seed(config: &GameConfig, seed: GridSeed) -> Result<Self, GameError> {
        if config.conveyor_length == 0 {
            return Err(GameError::InvalidConveyorLength);
        }
        let generator = GridGenerator::new(config.generator);
        let generated = generator.generate_with_seed(seed)?;
        let conveyor = Conveyor::new(
            config.conveyor_length,
            RandomVariants::new(seed.rng(RngStream::Conveyor)),
        )?;
        log::debug!("built {} game from seed {seed}", generated.grid.dimensions());
        Ok(Self::with_conveyor(generated, conveyor))
    }

    /// Creates a game from a generated grid and an existing conveyor.
    ///
    /// Meant for tests and tooling that need a fixed conveyor. The grid has to
    /// agree with its walls and hold exactly one starting point, as grids from
    /// [`GridGenerator`] do.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if [`GeneratedGrid::is_consistent`] is `false`.
    #[must_use]
    pub fn with_conveyor(generated: GeneratedGrid, conveyor: Conveyor) -> Self {
        debug_assert!(
            generated.is_consistent(),
            "inconsistent generated grid:\n{}",
            generated.grid
        );
        let GeneratedGrid {
            grid,
            blocked,
            starting_point,
            seed,
        } = generated;
        Self {
            grid,
            blocked,
            starting_point,
            conveyor,
            seed,
            placements: 0,
        }
    }

    /// Returns the board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the walls.
    #[must_use]
    pub fn blocked_cells(&self) -> &BlockedCells {
        &self.blocked
    }

    /// Returns the starting point.
    #[must_use]
    pub fn starting_point(&self) -> StartingPoint {
        self.starting_point
    }

    /// Returns the seed that reproduces this session.
    #[must_use]
    pub fn seed(&self) -> GridSeed {
        self.seed
    }

    /// Number of placements applied so far.
    #[must_use]
    pub fn placements(&self) -> usize {
        self.placements
    }

    /// Returns a view of the cell at `pos`, or `None` if `pos` is outside the
    /// grid.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<CellView> {
        self.grid.cell(pos).map(|cell| CellView {
            position: pos,
            variant: cell.variant(),
            flow: cell.flow(),
            blocked: cell.is_blocked(),
            locked: cell.is_locked(),
        })
    }

    /// Returns the upcoming tiles, head first.
    #[must_use]
    pub fn peek_conveyor(&self) -> Vec<PipeVariant> {
        self.conveyor.to_vec()
    }

    /// Returns the tile a placement at `pos` would put down, or why it would
    /// be ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementBlockReason::OutOfBounds`] if `pos` is outside the
    /// grid, [`PlacementBlockReason::BlockedCell`] if the cell is a wall and
    /// [`PlacementBlockReason::LockedCell`] if it is the starting point.
    pub fn placement_capability(&self, pos: Position) -> Result<PipeVariant, PlacementBlockReason> {
        let cell = self
            .grid
            .cell(pos)
            .ok_or(PlacementBlockReason::OutOfBounds)?;
        if cell.is_blocked() {
            return Err(PlacementBlockReason::BlockedCell);
        }
        if cell.is_locked() {
            return Err(PlacementBlockReason::LockedCell);
        }
        Ok(self.conveyor.peek_next())
    }

    /// Replaces the cell at `pos` with the conveyor head and advances the
    /// conveyor.
    ///
    /// Requests on walls, the starting point or positions outside the grid
    /// are ignored; neither the grid nor the conveyor changes.
    pub fn request_placement(&mut self, pos: Position) -> PlacementResult {
        let variant = match self.placement_capability(pos) {
            Ok(variant) => variant,
            Err(reason) => {
                log::trace!("placement at {pos} ignored: {reason}");
                return PlacementResult::Ignored(reason);
            }
        };
        // The capability check rules out both out-of-range and locked cells.
        if let Err(err) = self.grid.set_variant(pos, variant) {
            unreachable!("placement admitted by capability check failed: {err}");
        }
        self.conveyor.consume_and_advance();
        self.placements += 1;
        log::trace!("placed {variant:?} at {pos}");
        PlacementResult::Applied { variant }
    }

    /// Captures the full session state.
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            seed: self.seed,
            grid: self.grid.clone(),
            starting_point: self.starting_point,
            conveyor: self.peek_conveyor(),
            blocked_count: self.blocked.len(),
            placements: self.placements,
        }
    }
}
