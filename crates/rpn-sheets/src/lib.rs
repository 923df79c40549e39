//! # rpn-sheets
//!
//! Solve grids of postfix (RPN) expressions that reference each other.
//!
//! Every cell holds a postfix expression such as `3 4 +` or `A1 B1 -`. Cell
//! references are substituted once the referenced cell has a number, and the
//! grid is swept until nothing changes. Whatever cannot be solved ends up as
//! the error marker `#ERR`.
//!
//! ## Example
//!
//! ```rust
//! use rpn_sheets::prelude::*;
//!
//! let mut grid = Grid::from_text_rows(vec![vec!["3 4 +", "5"], vec!["A1 B1 -"]]);
//! grid.solve().unwrap();
//!
//! assert_eq!(
//!     grid.to_text_rows(),
//!     vec![vec!["7.0", "5.0"], vec!["2.0"]]
//! );
//! ```

pub mod calculation;
pub mod prelude;

// Re-export calculation types
pub use calculation::{GridSolveExt, SolveOptions, SolveState, SolveStats, Solver};

// Re-export core types
pub use rpn_sheets_core::{
    format_number, CellAddress, CellValue, Error, Grid, Result, ERROR_MARKER,
};

// Re-export formula types
pub use rpn_sheets_formula::{
    evaluate, evaluate_str, resolve, tokenize, FormulaError, FormulaResult, ResolveError,
    OPERATORS,
};

// Re-export I/O types
pub use rpn_sheets_csv::{CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};

use std::path::Path;

/// Extension trait for Grid to add file I/O
pub trait GridExt {
    /// Load a grid from a CSV file
    fn open<P: AsRef<Path>>(path: P) -> Result<Grid>;

    /// Save the grid to a CSV file
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl GridExt for Grid {
    fn open<P: AsRef<Path>>(path: P) -> Result<Grid> {
        CsvReader::read_file(path, &CsvReadOptions::default())
            .map_err(|e| Error::other(e.to_string()))
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        CsvWriter::write_file(self, path, &CsvWriteOptions::default())
            .map_err(|e| Error::other(e.to_string()))
    }
}
