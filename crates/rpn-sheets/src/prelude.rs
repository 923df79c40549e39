//! Prelude module - common imports for rpn-sheets users
//!
//! ```rust
//! use rpn_sheets::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellAddress,
    CellValue,

    // I/O types
    CsvReader,
    CsvWriter,

    // Error types
    Error,
    // Main types
    Grid,
    // Extension traits
    GridExt,
    GridSolveExt,
    Result,

    // Calculation types
    SolveOptions,
    SolveStats,
};
