//! Starting-point placement.
//!
//! A starting point is a cell plus the direction flow leaves it in. Which
//! cells are legal depends on the direction, so the rules are kept in a small
//! table, [`STARTING_RULES`], rather than spread over per-direction types.
//!
//! Every rule lists the neighbours that have to exist and be free of walls.
//! The cell below is required by all four directions; the facing neighbour is
//! required too, which for [`Direction::Down`] is the same cell. So:
//!
//! | Direction | Forbidden rows/columns   | Must be clear  |
//! |-----------|--------------------------|----------------|
//! | Right     | last row, last column    | below, right   |
//! | Left      | last row, first column   | below, left    |
//! | Up        | last row, first row      | below, above   |
//! | Down      | last row                 | below          |
//!
//! The starting cell itself must not be blocked either.

use std::fmt::{self, Display};

use conduit_core::{Dimensions, Direction, Position};
use rand::{Rng, seq::IndexedRandom as _};

use crate::{BlockedCells, GenerateError};

/// Legality rule for one starting direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartingRule {
    /// The facing direction this rule applies to.
    pub direction: Direction,
    /// Neighbours that must exist and must not be blocked.
    pub required_clear: &'static [Direction],
}

/// Rules for every starting direction, in draw order.
pub static STARTING_RULES: [StartingRule; 4] = [
    StartingRule {
        direction: Direction::Right,
        required_clear: &[Direction::Down, Direction::Right],
    },
    StartingRule {
        direction: Direction::Left,
        required_clear: &[Direction::Down, Direction::Left],
    },
    StartingRule {
        direction: Direction::Up,
        required_clear: &[Direction::Down, Direction::Up],
    },
    StartingRule {
        direction: Direction::Down,
        required_clear: &[Direction::Down],
    },
];

impl StartingRule {
    /// Returns the rule for `direction`.
    #[must_use]
    pub fn for_direction(direction: Direction) -> &'static Self {
        match direction {
            Direction::Right => &STARTING_RULES[0],
            Direction::Left => &STARTING_RULES[1],
            Direction::Up => &STARTING_RULES[2],
            Direction::Down => &STARTING_RULES[3],
        }
    }

    /// Returns `true` if a starting point facing this rule's direction may be
    /// placed at `pos`.
    #[must_use]
    pub fn permits(&self, blocked: &BlockedCells, pos: Position) -> bool {
        let dims = blocked.dimensions();
        dims.contains(pos)
            && !blocked.contains(pos)
            && self.required_clear.iter().all(|&side| {
                dims.neighbor(pos, side)
                    .is_some_and(|next| !blocked.contains(next))
            })
    }
}

/// The cell flow starts from and the direction it leaves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StartingPoint {
    /// Cell holding the starting point.
    pub position: Position,
    /// Facing direction.
    pub direction: Direction,
}

impl StartingPoint {
    /// Returns `true` if this starting point satisfies its direction's rule.
    #[must_use]
    pub fn is_legal(&self, blocked: &BlockedCells) -> bool {
        StartingRule::for_direction(self.direction)
            .permits(blocked, self.position)
    }
}

impl Display for StartingPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facing {}", self.position, self.direction)
    }
}

/// Chooses a random legal starting point by rejection sampling.
///
/// Each attempt draws a row, a column and a direction uniformly and keeps the
/// first triple the rule table accepts. The number of attempts is bounded;
/// once exhausted, every legal triple is enumerated and one is picked
/// uniformly, so selection always terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartingPointSelector {
    max_attempts: usize,
}

impl StartingPointSelector {
    /// Attempts per cell and direction used by [`for_dimensions`](Self::for_dimensions).
    pub const ATTEMPTS_PER_CANDIDATE: usize = 4;

    /// Creates a selector making at most `max_attempts` random draws.
    #[must_use]
    pub const fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Creates a selector whose attempt budget scales with the grid size.
    #[must_use]
    pub const fn for_dimensions(dims: Dimensions) -> Self {
        let per_cell = Direction::ALL.len() * Self::ATTEMPTS_PER_CANDIDATE;
        Self::new(dims.cell_count().saturating_mul(per_cell))
    }

    /// Returns the random draw budget.
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Selects a legal starting point for a grid with the given walls.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::UnsatisfiableStartingPoint`] if no cell and
    /// direction satisfy the rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use conduit_core::Dimensions;
    /// use conduit_generator::{BlockedCells, StartingPointSelector};
    /// use rand::SeedableRng as _;
    /// use rand_pcg::Pcg64;
    ///
    /// let dims = Dimensions::new(9, 7)?;
    /// let blocked = BlockedCells::empty(dims);
    /// let mut rng = Pcg64::seed_from_u64(3);
    ///
    /// let selector = StartingPointSelector::for_dimensions(dims);
    /// let start = selector.select(&blocked, &mut rng)?;
    /// assert!(start.is_legal(&blocked));
    /// assert!(start.position.row < 8);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn select<R>(
        &self,
        blocked: &BlockedCells,
        rng: &mut R,
    ) -> Result<StartingPoint, GenerateError>
    where
        R: Rng + ?Sized,
    {
        let dims = blocked.dimensions();
        for attempt in 0..self.max_attempts {
            let position = Position::new(
                rng.random_range(0..dims.rows()),
                rng.random_range(0..dims.cols()),
            );
            let rule = &STARTING_RULES[rng.random_range(0..STARTING_RULES.len())];
            if rule.permits(blocked, position) {
                log::trace!("starting point accepted after {} draws", attempt + 1);
                return Ok(StartingPoint {
                    position,
                    direction: rule.direction,
                });
            }
        }

        let candidates = legal_starting_points(blocked);
        log::warn!(
            "no starting point after {} draws on {dims}, falling back to {} enumerated candidates",
            self.max_attempts,
            candidates.len()
        );
        candidates
            .choose(rng)
            .copied()
            .ok_or(GenerateError::UnsatisfiableStartingPoint {
                attempts: self.max_attempts,
            })
    }
}

/// Lists every legal starting point, row-major, in [`STARTING_RULES`] order
/// within a cell.
#[must_use]
pub fn legal_starting_points(blocked: &BlockedCells) -> Vec<StartingPoint> {
    blocked
        .dimensions()
        .positions()
        .flat_map(|position| {
            STARTING_RULES
                .iter()
                .filter(move |rule| rule.permits(blocked, position))
                .map(move |rule| StartingPoint {
                    position,
                    direction: rule.direction,
                })
        })
        .collect()
}
