//! Grid type

use crate::cell::{CellAddress, CellValue};
use crate::error::{Error, Result};

/// A grid of cells, stored row by row
///
/// Rows keep the length they were loaded with, so a grid read from ragged
/// input stays ragged. The shape never changes after construction; only
/// cell values are replaced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<CellValue>>,
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from rows of cell values
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// Create a grid from rows of input text
    ///
    /// ```
    /// use rpn_sheets_core::{CellValue, Grid};
    ///
    /// let grid = Grid::from_text_rows([["1 2 +", "#ERR"]]);
    /// assert_eq!(grid.get_at(0, 1), Some(&CellValue::Error));
    /// ```
    pub fn from_text_rows<R, C, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(CellValue::from_input).collect())
            .collect();
        Self { rows }
    }

    /// Append a row
    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in a row (0 if the row does not exist)
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Check if the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    // === Cell Access ===

    /// Get a cell value by address string (e.g., "A1")
    pub fn get_value(&self, address: &str) -> Result<&CellValue> {
        let addr = CellAddress::parse(address)?;
        self.get(addr).ok_or(Error::OutOfBounds {
            row: addr.row,
            col: addr.col,
        })
    }

    /// Get a cell value by address
    pub fn get(&self, addr: CellAddress) -> Option<&CellValue> {
        self.get_at(addr.row, addr.col)
    }

    /// Get a cell value by row and column indices
    pub fn get_at(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Replace a cell value, returning the previous one
    pub fn set_at<V: Into<CellValue>>(&mut self, row: usize, col: usize, value: V) -> Result<CellValue> {
        let cell = self
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(Error::OutOfBounds { row, col })?;
        Ok(std::mem::replace(cell, value.into()))
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Iterate over every position in sweep order (left to right, top to bottom)
    pub fn addresses(&self) -> impl Iterator<Item = CellAddress> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            (0..cells.len()).map(move |col| CellAddress::new(row, col))
        })
    }

    /// Count cells matching a predicate
    pub fn count_where<F: Fn(&CellValue) -> bool>(&self, f: F) -> usize {
        self.rows.iter().flatten().filter(|&v| f(v)).count()
    }

    /// Render every row as display strings
    pub fn to_text_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect()
    }
}
