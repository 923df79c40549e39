//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellValue`] - The value stored in a cell
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`is_reference`] / [`decode`] - Reference-token recognition

mod address;
mod value;

pub use address::{decode, is_reference, CellAddress};
pub use value::{format_number, CellValue, ERROR_MARKER};
