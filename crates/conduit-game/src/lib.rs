//! Game session management for the conduit pipe puzzle.
//!
//! A [`Game`] owns one generated grid and the [`Conveyor`] of upcoming tiles.
//! Players click cells; each accepted click replaces the cell with the
//! conveyor head and shifts the conveyor forward.
//!
//! # Examples
//!
//! ```
//! use conduit_core::Position;
//! use conduit_game::{Game, GameConfig, PlacementBlockReason, PlacementResult};
//! use conduit_generator::GridSeed;
//!
//! let config = GameConfig::default().block_probability(0.0);
//! let mut game = Game::build_with_seed(&config, GridSeed::random())?;
//!
//! let outside = Position::new(100, 100);
//! assert_eq!(
//!     game.request_placement(outside),
//!     PlacementResult::Ignored(PlacementBlockReason::OutOfBounds)
//! );
//! println!("{}", game.snapshot());
//! # Ok::<(), conduit_game::GameError>(())
//! ```

pub use self::{
    config::GameConfig,
    conveyor::{Conveyor, RandomVariants, VariantSource},
    error::GameError,
    game::{CellView, Game, GridSnapshot, PlacementBlockReason, PlacementResult},
};

mod config;
mod conveyor;
mod error;
mod game;
