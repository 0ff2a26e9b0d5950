//! # cellgrid-core
//!
//! An in-memory grid of typed, colorable cells.
//!
//! This crate provides:
//! - [`CellValue`] and [`CellKind`] - Cell values and their type tag
//! - [`Cell`] - A value plus a [`Color`], with in-place string coercions
//! - [`Grid`] - The 2D cell collection with structural edits and aggregation
//! - [`Area`] - Inclusive rectangles used for area sums and averages
//!
//! ## Example
//!
//! ```rust
//! use cellgrid_core::{CellValue, Color, Grid};
//!
//! // 3 columns, 4 rows; cells are addressed as (row, col)
//! let mut grid = Grid::new(3, 4);
//!
//! grid.set_value_at(0, 0, "Academy").unwrap();
//! grid.set_value_at(0, 1, "123").unwrap();
//! grid.cell_at_mut(0, 1).unwrap().coerce_to_integer().unwrap();
//! grid.set_color_at(0, 0, Color::Red).unwrap();
//!
//! assert_eq!(grid.get_value_at(0, 1).unwrap(), &CellValue::Integer(123));
//! assert_eq!(grid.row_sum(0).unwrap(), 123.0);
//! ```

pub mod area;
pub mod cell;
pub mod color;
pub mod error;
pub mod grid;

// Re-exports for convenience
pub use area::Area;
pub use cell::{Cell, CellKind, CellValue, CoerceError};
pub use color::{Color, ParseColorError};
pub use error::{Axis, Error, Result};
pub use grid::Grid;
