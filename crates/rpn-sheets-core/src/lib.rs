//! # rpn-sheets-core
//!
//! Core data structures for rpn-sheets.
//!
//! This crate provides the fundamental types used throughout rpn-sheets:
//! - [`CellValue`] - Represents cell values (pending expressions, numbers, the error marker)
//! - [`CellAddress`] - Cell addressing in A1 notation
//! - [`Grid`] - The rows of cells a solve works on
//!
//! ## Example
//!
//! ```rust
//! use rpn_sheets_core::{CellValue, Grid};
//!
//! let mut grid = Grid::from_text_rows([["3 4 +", "5"]]);
//! assert!(grid.get_value("A1").unwrap().is_pending());
//!
//! grid.set_at(0, 0, 7.0).unwrap();
//! assert_eq!(grid.get_value("A1").unwrap(), &CellValue::Number(7.0));
//! ```

pub mod cell;
pub mod error;
pub mod grid;

// Re-exports for convenience
pub use cell::{format_number, CellAddress, CellValue, ERROR_MARKER};
pub use error::{Error, Result};
pub use grid::Grid;
