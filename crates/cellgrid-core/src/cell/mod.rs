//! Cell-related types
//!
//! This module contains:
//! - [`CellValue`] - The value stored in a cell
//! - [`CellKind`] - The type tag derived from a value
//! - [`Cell`] - A value plus its display color, with in-place coercions

mod data;
mod value;

pub use data::{Cell, CoerceError};
pub use value::{CellKind, CellValue};
