//! Core data structures for the conduit pipe puzzle.
//!
//! This crate defines the board the rest of the workspace operates on. It has
//! no randomness and no game rules beyond what a single cell can hold.
//!
//! # Overview
//!
//! 1. **Pipe taxonomy** - which sides of a tile carry flow
//!    - [`direction`]: the four sides of a cell
//!    - [`flow`]: [`FlowFlags`], a bitset of sides
//!    - [`pipe`]: [`PipeVariant`], the tile tags and their flow table
//!
//! 2. **Grid model** - dimensions, coordinates and cell storage
//!    - [`position`]: [`Position`] coordinates
//!    - [`dimensions`]: validated [`Dimensions`] and row-major iteration
//!    - [`grid`]: the dense [`Grid`] of [`Cell`]s
//!
//! # Examples
//!
//! ```
//! use conduit_core::{Direction, Grid, PipeVariant, Position};
//!
//! let mut grid = Grid::build(9, 7)?;
//! let start = Position::new(0, 0);
//! grid.set_variant(start, PipeVariant::starting_point(Direction::Right))?;
//! grid.lock(start)?;
//!
//! // Locked cells refuse replacement.
//! assert!(grid.set_variant(start, PipeVariant::Cross).is_err());
//! # Ok::<(), conduit_core::GridError>(())
//! ```

pub mod dimensions;
pub mod direction;
mod error;
pub mod flow;
pub mod grid;
pub mod pipe;
pub mod position;

pub use self::{
    dimensions::{Dimensions, Positions},
    direction::Direction,
    error::{GridError, ParseGridError},
    flow::FlowFlags,
    grid::{Cell, Grid},
    pipe::PipeVariant,
    position::Position,
};
