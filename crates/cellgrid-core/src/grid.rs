//! Grid type

use crate::area::Area;
use crate::cell::{Cell, CellValue};
use crate::color::Color;
use crate::error::{Axis, Error, Result};

/// A dense two-dimensional collection of cells.
///
/// Cells are addressed by 0-based `(row, col)`. Every position inside the
/// current extents always holds a [`Cell`]; extents only change through the
/// insert/remove operations, which move existing cells rather than copying
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Row-major cell storage: `rows[row][col]`
    rows: Vec<Vec<Cell>>,
    /// Column count, tracked separately so a grid with no rows keeps its width
    columns: usize,
}

impl Grid {
    /// Create a grid of `rows × columns` fresh cells.
    ///
    /// Note the argument order: width first, then height.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            rows: (0..rows).map(|_| Self::blank_row(columns)).collect(),
            columns,
        }
    }

    fn blank_row(columns: usize) -> Vec<Cell> {
        (0..columns).map(|_| Cell::new()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Check if the grid holds no cells at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns == 0
    }

    // === Validation ===

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows.len() {
            return Err(Error::RowOutOfBounds {
                row,
                rows: self.rows.len(),
            });
        }
        Ok(())
    }

    fn check_column(&self, col: usize) -> Result<()> {
        if col >= self.columns {
            return Err(Error::ColumnOutOfBounds {
                col,
                columns: self.columns,
            });
        }
        Ok(())
    }

    fn validate_cell_position(&self, row: usize, col: usize) -> Result<()> {
        self.check_row(row)?;
        self.check_column(col)
    }

    fn validate_area(&self, area: &Area) -> Result<()> {
        let inside = area.end_row < self.rows.len() && area.end_col < self.columns;
        if !area.is_ordered() || !inside {
            return Err(Error::InvalidArea(*area));
        }
        Ok(())
    }

    // === Cell Access ===

    /// Get a cell by row and column indices
    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell> {
        self.validate_cell_position(row, col)?;
        Ok(&self.rows[row][col])
    }

    /// Get a live mutable handle to a cell.
    ///
    /// Changes made through the handle (including coercions) are changes to
    /// the grid itself.
    pub fn cell_at_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell> {
        self.validate_cell_position(row, col)?;
        Ok(&mut self.rows[row][col])
    }

    /// Get all cells of a row, in column order
    pub fn row(&self, row: usize) -> Result<&[Cell]> {
        self.check_row(row)?;
        Ok(&self.rows[row])
    }

    /// Iterate over every cell in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (row, col, cell))
        })
    }

    pub fn get_value_at(&self, row: usize, col: usize) -> Result<&CellValue> {
        self.cell_at(row, col).map(Cell::value)
    }

    pub fn set_value_at<V: Into<CellValue>>(
        &mut self,
        row: usize,
        col: usize,
        value: V,
    ) -> Result<()> {
        self.cell_at_mut(row, col)?.set_value(value);
        Ok(())
    }

    pub fn get_color_at(&self, row: usize, col: usize) -> Result<Color> {
        self.cell_at(row, col).map(Cell::color)
    }

    pub fn set_color_at(&mut self, row: usize, col: usize, color: Color) -> Result<()> {
        self.cell_at_mut(row, col)?.set_color(color);
        Ok(())
    }

    /// Reset a single cell to its initial state
    pub fn reset_cell_at(&mut self, row: usize, col: usize) -> Result<()> {
        self.cell_at_mut(row, col)?.reset();
        Ok(())
    }

    /// Reset every cell in place. Extents are unchanged.
    pub fn reset(&mut self) {
        self.rows.iter_mut().flatten().for_each(Cell::reset);
    }

    // === Structural Operations ===

    /// Insert a blank column before `index` (or append when `index` equals
    /// the column count). Existing columns from `index` onwards shift right.
    pub fn insert_column(&mut self, index: usize) -> Result<()> {
        if index > self.columns {
            return Err(Error::InvalidInsertPosition {
                axis: Axis::Column,
                index,
                len: self.columns,
            });
        }
        for cells in &mut self.rows {
            cells.insert(index, Cell::new());
        }
        self.columns += 1;
        log::debug!("inserted column at {index}, grid is now {}x{}", self.rows.len(), self.columns);
        Ok(())
    }

    /// Insert a blank row before `index` (or append when `index` equals the
    /// row count). Existing rows from `index` onwards shift down.
    pub fn insert_row(&mut self, index: usize) -> Result<()> {
        if index > self.rows.len() {
            return Err(Error::InvalidInsertPosition {
                axis: Axis::Row,
                index,
                len: self.rows.len(),
            });
        }
        self.rows.insert(index, Self::blank_row(self.columns));
        log::debug!("inserted row at {index}, grid is now {}x{}", self.rows.len(), self.columns);
        Ok(())
    }

    /// Remove a column; the columns to its right shift left.
    pub fn remove_column(&mut self, index: usize) -> Result<()> {
        self.check_column(index)?;
        for cells in &mut self.rows {
            cells.remove(index);
        }
        self.columns -= 1;
        log::debug!("removed column {index}, grid is now {}x{}", self.rows.len(), self.columns);
        Ok(())
    }

    /// Remove a row; the rows below it shift up.
    pub fn remove_row(&mut self, index: usize) -> Result<()> {
        self.check_row(index)?;
        self.rows.remove(index);
        log::debug!("removed row {index}, grid is now {}x{}", self.rows.len(), self.columns);
        Ok(())
    }

    /// Exchange two whole rows without touching the cells themselves
    pub fn swap_rows(&mut self, row1: usize, row2: usize) -> Result<()> {
        self.check_row(row1)?;
        self.check_row(row2)?;
        self.rows.swap(row1, row2);
        Ok(())
    }

    /// Exchange two columns, cell by cell across every row
    pub fn swap_columns(&mut self, col1: usize, col2: usize) -> Result<()> {
        self.check_column(col1)?;
        self.check_column(col2)?;
        for cells in &mut self.rows {
            cells.swap(col1, col2);
        }
        Ok(())
    }

    // === Aggregation ===
    //
    // Integers and floats contribute their value; strings, dates and empty
    // cells contribute zero.

    fn contribution(cell: &Cell) -> f64 {
        cell.value().as_number().unwrap_or(0.0)
    }

    /// Sum of the numeric values in a column
    pub fn column_sum(&self, col: usize) -> Result<f64> {
        self.check_column(col)?;
        Ok(self.rows.iter().map(|cells| Self::contribution(&cells[col])).sum())
    }

    /// Sum of the numeric values in a row
    pub fn row_sum(&self, row: usize) -> Result<f64> {
        self.check_row(row)?;
        Ok(self.rows[row].iter().map(Self::contribution).sum())
    }

    /// Sum over the inclusive rectangle from `(start_row, start_col)` to
    /// `(end_row, end_col)`
    pub fn area_sum(
        &self,
        start_row: usize,
        start_col: usize,
        end_row: usize,
        end_col: usize,
    ) -> Result<f64> {
        self.area_sum_of(&Area::new(start_row, start_col, end_row, end_col))
    }

    pub fn area_sum_of(&self, area: &Area) -> Result<f64> {
        self.validate_area(area)?;
        Ok(self.rows[area.start_row..=area.end_row]
            .iter()
            .flat_map(|cells| &cells[area.start_col..=area.end_col])
            .map(Self::contribution)
            .sum())
    }

    /// Column sum divided by the row count.
    ///
    /// Non-numeric cells count as zero-valued samples, not as missing ones.
    /// Fails with [`Error::EmptyAxis`] when the grid has no rows.
    pub fn column_average(&self, col: usize) -> Result<f64> {
        let sum = self.column_sum(col)?;
        if self.rows.is_empty() {
            return Err(Error::EmptyAxis(Axis::Column));
        }
        Ok(sum / self.rows.len() as f64)
    }

    /// Row sum divided by the column count.
    ///
    /// Fails with [`Error::EmptyAxis`] when the grid has no columns.
    pub fn row_average(&self, row: usize) -> Result<f64> {
        let sum = self.row_sum(row)?;
        if self.columns == 0 {
            return Err(Error::EmptyAxis(Axis::Row));
        }
        Ok(sum / self.columns as f64)
    }

    /// Area sum divided by the number of cells in the area
    pub fn area_average(
        &self,
        start_row: usize,
        start_col: usize,
        end_row: usize,
        end_col: usize,
    ) -> Result<f64> {
        self.area_average_of(&Area::new(start_row, start_col, end_row, end_col))
    }

    pub fn area_average_of(&self, area: &Area) -> Result<f64> {
        let sum = self.area_sum_of(area)?;
        Ok(sum / area.cell_count() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellKind;
    use pretty_assertions::assert_eq;

    fn numbered(columns: usize, rows: usize) -> Grid {
        let mut grid = Grid::new(columns, rows);
        for row in 0..rows {
            for col in 0..columns {
                grid.set_value_at(row, col, (row * columns + col) as i64).unwrap();
            }
        }
        grid
    }

    fn values(grid: &Grid) -> Vec<Vec<CellValue>> {
        (0..grid.row_count())
            .map(|r| grid.row(r).unwrap().iter().map(|c| c.value().clone()).collect())
            .collect()
    }

    #[test]
    fn test_new_grid() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.column_count(), 3);
        assert_eq!(grid.row_count(), 4);
        assert_eq!(grid.iter().count(), 12);
        assert!(grid.iter().all(|(_, _, cell)| cell.is_blank()));
        assert!(!grid.is_empty());
        assert!(Grid::new(0, 5).is_empty());
    }

    #[test]
    fn test_set_and_get_values() {
        let mut grid = Grid::new(3, 4);
        grid.set_value_at(0, 0, "Academy").unwrap();
        grid.set_value_at(3, 2, 9).unwrap();

        assert_eq!(grid.get_value_at(0, 0).unwrap().as_str(), Some("Academy"));
        assert_eq!(grid.get_value_at(3, 2).unwrap(), &CellValue::Integer(9));
        assert!(grid.get_value_at(1, 1).unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_access() {
        let mut grid = Grid::new(3, 4);
        assert_eq!(
            grid.get_value_at(4, 0),
            Err(Error::RowOutOfBounds { row: 4, rows: 4 })
        );
        assert_eq!(
            grid.set_value_at(0, 3, "x"),
            Err(Error::ColumnOutOfBounds { col: 3, columns: 3 })
        );
        assert!(grid.set_color_at(9, 9, Color::Red).is_err());
        assert!(grid.reset_cell_at(0, 7).is_err());
        assert_eq!(grid, Grid::new(3, 4));
    }

    #[test]
    fn test_colors() {
        let mut grid = Grid::new(2, 2);
        assert_eq!(grid.get_color_at(1, 1).unwrap(), Color::White);
        grid.set_color_at(1, 1, Color::Red).unwrap();
        assert_eq!(grid.get_color_at(1, 1).unwrap(), Color::Red);
        assert_eq!(grid.get_color_at(0, 0).unwrap(), Color::White);
    }

    #[test]
    fn test_cell_handle_mutates_grid() {
        let mut grid = Grid::new(3, 4);
        grid.set_value_at(0, 1, "123").unwrap();

        grid.cell_at_mut(0, 1).unwrap().coerce_to_integer().unwrap();

        assert_eq!(grid.get_value_at(0, 1).unwrap(), &CellValue::Integer(123));
        assert_eq!(grid.cell_at(0, 1).unwrap().kind(), CellKind::Integer);
    }

    #[test]
    fn test_reset() {
        let mut grid = numbered(3, 3);
        grid.set_color_at(2, 2, Color::Green).unwrap();

        grid.reset_cell_at(0, 0).unwrap();
        assert!(grid.cell_at(0, 0).unwrap().is_blank());
        assert_eq!(grid.get_value_at(0, 1).unwrap(), &CellValue::Integer(1));

        grid.reset();
        assert_eq!(grid, Grid::new(3, 3));
    }

    #[test]
    fn test_insert_column() {
        let mut grid = numbered(2, 2);
        grid.insert_column(1).unwrap();

        assert_eq!(grid.column_count(), 3);
        assert_eq!(
            values(&grid),
            vec![
                vec![CellValue::Integer(0), CellValue::Empty, CellValue::Integer(1)],
                vec![CellValue::Integer(2), CellValue::Empty, CellValue::Integer(3)],
            ]
        );

        grid.insert_column(3).unwrap();
        assert_eq!(grid.column_count(), 4);
        assert!(grid.get_value_at(0, 3).unwrap().is_empty());
    }

    #[test]
    fn test_insert_column_invalid() {
        let mut grid = numbered(2, 2);
        assert_eq!(
            grid.insert_column(3),
            Err(Error::InvalidInsertPosition {
                axis: Axis::Column,
                index: 3,
                len: 2
            })
        );
        assert_eq!(grid, numbered(2, 2));
    }

    #[test]
    fn test_insert_row() {
        let mut grid = numbered(2, 2);
        grid.insert_row(0).unwrap();

        assert_eq!(grid.row_count(), 3);
        assert_eq!(
            values(&grid),
            vec![
                vec![CellValue::Empty, CellValue::Empty],
                vec![CellValue::Integer(0), CellValue::Integer(1)],
                vec![CellValue::Integer(2), CellValue::Integer(3)],
            ]
        );
        assert!(grid.insert_row(4).is_err());
        assert_eq!(grid.row_count(), 3);
    }

    #[test]
    fn test_insert_row_into_rowless_grid() {
        let mut grid = Grid::new(3, 0);
        grid.insert_row(0).unwrap();
        assert_eq!(grid.row(0).unwrap().len(), 3);
    }

    #[test]
    fn test_remove_column() {
        let mut grid = numbered(3, 2);
        grid.remove_column(1).unwrap();

        assert_eq!(grid.column_count(), 2);
        assert_eq!(
            values(&grid),
            vec![
                vec![CellValue::Integer(0), CellValue::Integer(2)],
                vec![CellValue::Integer(3), CellValue::Integer(5)],
            ]
        );
        assert_eq!(
            grid.remove_column(2),
            Err(Error::ColumnOutOfBounds { col: 2, columns: 2 })
        );
    }

    #[test]
    fn test_remove_row() {
        let mut grid = numbered(2, 3);
        grid.remove_row(0).unwrap();

        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.get_value_at(0, 0).unwrap(), &CellValue::Integer(2));
        assert!(grid.remove_row(2).is_err());

        grid.remove_row(1).unwrap();
        grid.remove_row(0).unwrap();
        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.column_count(), 2);
    }

    #[test]
    fn test_swap_rows() {
        let mut grid = numbered(2, 3);
        grid.swap_rows(0, 2).unwrap();
        assert_eq!(grid.get_value_at(0, 0).unwrap(), &CellValue::Integer(4));
        assert_eq!(grid.get_value_at(2, 1).unwrap(), &CellValue::Integer(1));

        assert!(grid.swap_rows(0, 3).is_err());
    }

    #[test]
    fn test_swap_columns() {
        let mut grid = numbered(3, 2);
        grid.set_color_at(1, 0, Color::Yellow).unwrap();
        grid.swap_columns(0, 2).unwrap();

        assert_eq!(
            values(&grid),
            vec![
                vec![CellValue::Integer(2), CellValue::Integer(1), CellValue::Integer(0)],
                vec![CellValue::Integer(5), CellValue::Integer(4), CellValue::Integer(3)],
            ]
        );
        assert_eq!(grid.get_color_at(1, 2).unwrap(), Color::Yellow);
        assert!(grid.swap_columns(3, 0).is_err());
    }

    #[test]
    fn test_sums_skip_non_numeric() {
        let mut grid = Grid::new(3, 1);
        grid.set_value_at(0, 0, "Academy").unwrap();
        grid.set_value_at(0, 1, 2).unwrap();

        assert_eq!(grid.row_sum(0).unwrap(), 2.0);
        assert_eq!(grid.column_sum(0).unwrap(), 0.0);
        assert_eq!(grid.column_sum(1).unwrap(), 2.0);
    }

    #[test]
    fn test_dates_contribute_nothing() {
        let mut grid = Grid::new(2, 1);
        grid.set_value_at(0, 0, "2020-01-01").unwrap();
        grid.cell_at_mut(0, 0).unwrap().coerce_to_date().unwrap();
        grid.set_value_at(0, 1, 1.5).unwrap();

        assert_eq!(grid.row_sum(0).unwrap(), 1.5);
    }

    #[test]
    fn test_area_sum_and_average() {
        let mut grid = Grid::new(3, 3);
        grid.set_value_at(0, 0, 1).unwrap();
        grid.set_value_at(0, 1, 2).unwrap();
        grid.set_value_at(1, 0, 3).unwrap();
        grid.set_value_at(1, 1, 4.0).unwrap();
        grid.set_value_at(2, 2, 100).unwrap();

        assert_eq!(grid.area_sum(0, 0, 1, 1).unwrap(), 10.0);
        assert_eq!(grid.area_average(0, 0, 1, 1).unwrap(), 2.5);
        assert_eq!(grid.area_sum_of(&Area::single(2, 2)).unwrap(), 100.0);
    }

    #[test]
    fn test_area_invalid() {
        let grid = numbered(3, 3);
        assert_eq!(
            grid.area_sum(2, 0, 1, 0),
            Err(Error::InvalidArea(Area::new(2, 0, 1, 0)))
        );
        assert!(grid.area_sum(0, 2, 0, 1).is_err());
        assert!(grid.area_sum(0, 0, 3, 0).is_err());
        assert!(grid.area_average(0, 0, 0, 3).is_err());
    }

    #[test]
    fn test_averages() {
        let mut grid = Grid::new(2, 4);
        grid.set_value_at(0, 0, 4).unwrap();
        grid.set_value_at(1, 0, "text").unwrap();
        grid.set_value_at(2, 0, 4.0).unwrap();

        // Divides by all four rows, not the two numeric cells
        assert_eq!(grid.column_average(0).unwrap(), 2.0);
        assert_eq!(grid.row_average(0).unwrap(), 2.0);
        assert!(grid.column_average(2).is_err());
    }

    #[test]
    fn test_average_over_empty_axis() {
        let grid = Grid::new(2, 0);
        assert_eq!(grid.column_average(0), Err(Error::EmptyAxis(Axis::Column)));

        let grid = Grid::new(0, 2);
        assert_eq!(grid.row_average(1), Err(Error::EmptyAxis(Axis::Row)));
        assert_eq!(grid.row_sum(1).unwrap(), 0.0);
    }
}
