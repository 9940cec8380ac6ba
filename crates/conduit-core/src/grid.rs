//! The cell grid.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Dimensions, FlowFlags, GridError, ParseGridError, PipeVariant, Position, Positions};

/// The state of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    variant: PipeVariant,
    locked: bool,
}

impl Cell {
    /// An unlocked [`PipeVariant::Basic`] cell.
    pub const BASIC: Self = Self {
        variant: PipeVariant::Basic,
        locked: false,
    };

    /// Returns the tile variant.
    #[must_use]
    pub const fn variant(&self) -> PipeVariant {
        self.variant
    }

    /// Returns the flow flags of the current variant.
    #[must_use]
    pub const fn flow(&self) -> FlowFlags {
        self.variant.flow()
    }

    /// Returns `true` if the cell is a wall.
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        matches!(self.variant, PipeVariant::Blocked)
    }

    /// Returns `true` if the cell can never be replaced.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BASIC
    }
}

/// A rectangular grid of cells stored densely in row-major order.
///
/// Lookups are bounds-checked: an out-of-range [`Position`] yields `None` or
/// [`GridError::OutOfBounds`], never a panic.
///
/// # Examples
///
/// ```
/// use conduit_core::{Grid, PipeVariant, Position};
///
/// let mut grid = Grid::build(9, 7)?;
/// let pos = Position::new(4, 3);
/// grid.set_variant(pos, PipeVariant::Cross)?;
///
/// assert_eq!(grid.cell(pos).map(|c| c.variant()), Some(PipeVariant::Cross));
/// assert!(grid.cell(Position::new(9, 0)).is_none());
/// # Ok::<(), conduit_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid where every cell is an unlocked [`PipeVariant::Basic`].
    #[must_use]
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![Cell::BASIC; dims.cell_count()],
        }
    }

    /// Creates a `rows` by `cols` grid of basic cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either side is zero.
    pub fn build(rows: usize, cols: usize) -> Result<Self, GridError> {
        Ok(Self::new(Dimensions::new(rows, cols)?))
    }

    /// Returns the grid size.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Returns the cell at `pos`, or `None` if `pos` is out of range.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.dims.index_of(pos).map(|i| &self.cells[i])
    }

    fn cell_mut(&mut self, pos: Position) -> Result<&mut Cell, GridError> {
        let index = self
            .dims
            .index_of(pos)
            .ok_or(GridError::OutOfBounds { position: pos })?;
        Ok(&mut self.cells[index])
    }

    /// Replaces the variant of the cell at `pos`.
    ///
    /// The flow flags follow from the new variant.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is out of range and
    /// [`GridError::LockedCell`] if the cell is locked. The grid is unchanged
    /// in both cases.
    pub fn set_variant(&mut self, pos: Position, variant: PipeVariant) -> Result<(), GridError> {
        let cell = self.cell_mut(pos)?;
        if cell.locked {
            return Err(GridError::LockedCell { position: pos });
        }
        cell.variant = variant;
        Ok(())
    }

    /// Locks the cell at `pos` so later [`set_variant`](Self::set_variant)
    /// calls fail.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is out of range.
    pub fn lock(&mut self, pos: Position) -> Result<(), GridError> {
        self.cell_mut(pos)?.locked = true;
        Ok(())
    }

    /// Iterates every position of the grid in row-major order.
    #[must_use]
    pub fn positions(&self) -> Positions {
        self.dims.positions()
    }

    /// Iterates `(position, cell)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.dims.positions().zip(&self.cells)
    }

    /// Counts the cells holding `variant`.
    #[must_use]
    pub fn count(&self, variant: PipeVariant) -> usize {
        self.cells.iter().filter(|c| c.variant == variant).count()
    }

    /// Returns the positions of cells holding a starting-point variant.
    pub fn starting_points(&self) -> impl Iterator<Item = Position> {
        self.cells()
            .filter(|(_, cell)| cell.variant.is_starting_point())
            .map(|(pos, _)| pos)
    }
}

/// Formats one text line per row using [`PipeVariant::symbol`].
impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.dims.cols()).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.variant.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parses the [`Display`] layout.
///
/// Blank lines and surrounding whitespace are ignored. Starting-point symbols
/// produce locked cells.
///
/// ```
/// use conduit_core::{Grid, PipeVariant, Position};
///
/// let grid: Grid = "
///     .#.
///     >..
///     ...
/// ".parse()?;
///
/// let start = grid.cell(Position::new(1, 0)).unwrap();
/// assert_eq!(start.variant(), PipeVariant::StartingPointRight);
/// assert!(start.is_locked());
/// assert_eq!(grid.count(PipeVariant::Blocked), 1);
/// # Ok::<(), conduit_core::ParseGridError>(())
/// ```
impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let expected = lines.first().ok_or(ParseGridError::Empty)?.chars().count();

        let mut cells = Vec::with_capacity(lines.len() * expected);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(ParseGridError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let position = Position::new(row, col);
                let variant = PipeVariant::from_symbol(symbol)
                    .ok_or(ParseGridError::UnknownSymbol { symbol, position })?;
                cells.push(Cell {
                    variant,
                    locked: variant.is_starting_point(),
                });
            }
        }

        let dims = Dimensions::new(lines.len(), expected)
            .map_err(|_| ParseGridError::Empty)?;
        Ok(Self { dims, cells })
    }
}
