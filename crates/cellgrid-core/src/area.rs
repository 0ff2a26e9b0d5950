//! Rectangular cell areas

use std::fmt;

/// An inclusive rectangular sub-range of a grid.
///
/// Unlike a normalized range, an `Area` keeps its corners exactly as given so
/// that a reversed area (start after end) can be reported back to the caller
/// instead of being silently flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
}

impl Area {
    /// Create an area from its top-left and bottom-right corners
    pub const fn new(start_row: usize, start_col: usize, end_row: usize, end_col: usize) -> Self {
        Self {
            start_row,
            start_col,
            end_row,
            end_col,
        }
    }

    /// Create a single-cell area
    pub const fn single(row: usize, col: usize) -> Self {
        Self::new(row, col, row, col)
    }

    /// Check that start is not after end on either axis
    pub fn is_ordered(&self) -> bool {
        self.start_row <= self.end_row && self.start_col <= self.end_col
    }

    /// Check if a cell is within this area
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.start_row && row <= self.end_row && col >= self.start_col && col <= self.end_col
    }

    /// Get the number of rows in the area (0 when reversed)
    pub fn row_count(&self) -> usize {
        self.end_row
            .checked_sub(self.start_row)
            .map_or(0, |d| d.saturating_add(1))
    }

    /// Get the number of columns in the area (0 when reversed)
    pub fn column_count(&self) -> usize {
        self.end_col
            .checked_sub(self.start_col)
            .map_or(0, |d| d.saturating_add(1))
    }

    /// Get the total number of cells in the area, saturating at `usize::MAX`
    pub fn cell_count(&self) -> usize {
        self.row_count().saturating_mul(self.column_count())
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})..=({}, {})",
            self.start_row, self.start_col, self.end_row, self.end_col
        )
    }
}
