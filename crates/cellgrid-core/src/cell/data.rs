//! A single grid cell and its in-place type coercions

use chrono::NaiveDate;
use thiserror::Error;

use super::{CellKind, CellValue};
use crate::color::Color;

/// Why a coercion left the cell unchanged.
///
/// Coercion failures are non-fatal: the cell keeps its previous value and
/// the grid is never affected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoerceError {
    /// The cell does not hold a string
    #[error("Value is not a string (found {actual})")]
    NotAString { actual: &'static str },

    /// The string could not be parsed as the target kind
    #[error("Cannot convert {value:?} to {target}")]
    Unparseable { target: CellKind, value: String },
}

/// Complete data for a single cell: its value and display color.
///
/// The cell's kind is not stored separately; it is derived from the value.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    value: CellValue,
    color: Color,
}

impl Cell {
    /// Create an empty white cell
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cell holding a value with the default color
    pub fn with_value<V: Into<CellValue>>(value: V) -> Self {
        Self {
            value: value.into(),
            color: Color::default(),
        }
    }

    pub fn value(&self) -> &CellValue {
        &self.value
    }

    /// Replace the value. No parsing is done; a string stays a string.
    pub fn set_value<V: Into<CellValue>>(&mut self, value: V) {
        self.value = value.into();
    }

    pub fn kind(&self) -> CellKind {
        self.value.kind()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Check if this cell is in its initial state (no value, default color)
    pub fn is_blank(&self) -> bool {
        self.value.is_empty() && self.color == Color::default()
    }

    /// Clear the value and restore the default color
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Parse a string value as a base-10 integer, in place.
    pub fn coerce_to_integer(&mut self) -> Result<(), CoerceError> {
        self.coerce_with(CellKind::Integer, |s| {
            s.parse::<i64>().ok().map(CellValue::Integer)
        })
    }

    /// Parse a string value as a decimal floating-point number, in place.
    ///
    /// Surrounding whitespace is ignored. Infinities and NaN (spelled out or
    /// produced by overflow) are rejected.
    pub fn coerce_to_float(&mut self) -> Result<(), CoerceError> {
        self.coerce_with(CellKind::Float, |s| {
            s.trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(CellValue::Float)
        })
    }

    /// Parse a `YYYY-MM-DD` string value as a calendar date, in place.
    pub fn coerce_to_date(&mut self) -> Result<(), CoerceError> {
        self.coerce_with(CellKind::Date, |s| parse_iso_date(s).map(CellValue::Date))
    }

    fn coerce_with<F>(&mut self, target: CellKind, parse: F) -> Result<(), CoerceError>
    where
        F: FnOnce(&str) -> Option<CellValue>,
    {
        let result = match &self.value {
            CellValue::String(s) => match parse(s) {
                Some(parsed) => {
                    self.value = parsed;
                    return Ok(());
                }
                None => Err(CoerceError::Unparseable {
                    target,
                    value: s.clone(),
                }),
            },
            other => Err(CoerceError::NotAString {
                actual: other.type_name(),
            }),
        };

        if let Err(e) = &result {
            log::warn!("coercion to {target} skipped: {e}");
        }
        result
    }
}

/// Strict `YYYY-MM-DD` parse: exact digit widths, then a calendar check.
fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 {
        return None;
    }
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
