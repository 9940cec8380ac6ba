use crate::Position;

/// Errors reported by grid construction and mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A grid needs at least one row and one column.
    #[display("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },
    /// The position lies outside the grid.
    #[display("no cell at {position}")]
    OutOfBounds {
        /// Offending position.
        position: Position,
    },
    /// The cell is locked and cannot be replaced.
    #[display("cell at {position} is locked")]
    LockedCell {
        /// Offending position.
        position: Position,
    },
}

/// Errors reported when parsing a text grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The text contains no rows.
    #[display("grid text is empty")]
    Empty,
    /// A row has a different width than the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },
    /// A character does not name any tile variant.
    #[display("unknown tile symbol {symbol:?} at {position}")]
    UnknownSymbol {
        /// The unrecognised character.
        symbol: char,
        /// Where it appeared.
        position: Position,
    },
}
