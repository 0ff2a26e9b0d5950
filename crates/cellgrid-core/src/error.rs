//! Error types for cellgrid-core

use std::fmt;

use thiserror::Error;

use crate::area::Area;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// A grid axis, used to describe which extent an operation failed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Range and argument errors raised by [`Grid`](crate::Grid) operations.
///
/// Every operation validates its arguments before touching the grid, so
/// receiving one of these means nothing was mutated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Row index out of bounds
    #[error("Row index {row} out of bounds (rows: {rows})")]
    RowOutOfBounds { row: usize, rows: usize },

    /// Column index out of bounds
    #[error("Column index {col} out of bounds (columns: {columns})")]
    ColumnOutOfBounds { col: usize, columns: usize },

    /// Insertion position past the end of the axis
    #[error("Invalid {axis} position {index} (valid: 0..={len})")]
    InvalidInsertPosition { axis: Axis, index: usize, len: usize },

    /// Area with start after end, or reaching outside the grid
    #[error("Invalid area boundaries: {0}")]
    InvalidArea(Area),

    /// Average requested over an axis with no cells
    #[error("Cannot average over an empty {0}")]
    EmptyAxis(Axis),
}

impl Error {
    /// Whether this error was caused by an index outside the grid extents
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            Error::RowOutOfBounds { .. }
                | Error::ColumnOutOfBounds { .. }
                | Error::InvalidInsertPosition { .. }
                | Error::InvalidArea(_)
        )
    }
}
