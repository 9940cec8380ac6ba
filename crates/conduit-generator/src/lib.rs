//! Seeded grid generation for the conduit pipe puzzle.
//!
//! # Overview
//!
//! Generation runs in two stages, each with its own random stream derived from
//! a single [`GridSeed`]:
//!
//! 1. **Walls** - [`BlockedCells::generate`] runs one Bernoulli trial per cell.
//! 2. **Starting point** - [`StartingPointSelector`] picks a cell and a facing
//!    direction that satisfy [`STARTING_RULES`] for those walls.
//!
//! [`GridGenerator`] ties both stages together and returns a [`GeneratedGrid`]
//! whose [`Grid`](conduit_core::Grid) already holds the walls and the locked
//! starting tile.
//!
//! # Examples
//!
//! ```
//! use conduit_generator::{GeneratorOptions, GridGenerator};
//!
//! let generator = GridGenerator::new(GeneratorOptions::default());
//! let generated = generator.generate()?;
//!
//! assert!(generated.starting_point.is_legal(&generated.blocked));
//! println!("seed: {}", generated.seed);
//! # Ok::<(), conduit_generator::GenerateError>(())
//! ```

pub use self::{
    blocked::BlockedCells,
    error::GenerateError,
    generator::{GeneratedGrid, GeneratorOptions, GridGenerator},
    seed::{GridSeed, ParseSeedError, RngStream},
    starting_point::{
        STARTING_RULES, StartingPoint, StartingPointSelector, StartingRule, legal_starting_points,
    },
};

pub mod blocked;
mod error;
mod generator;
mod seed;
pub mod starting_point;
