//! # rpn-sheets-formula
//!
//! Postfix expression evaluation for rpn-sheets.
//!
//! This crate provides:
//! - The numeric operator library and its operator table
//! - Tokenizing cell text
//! - Reference substitution against a [`Grid`](rpn_sheets_core::Grid)
//! - Postfix reduction to a single number
//!
//! ## Example
//!
//! ```rust
//! use rpn_sheets_formula::{evaluate, tokenize};
//!
//! let result = evaluate(&tokenize("16 SQRT 3 +")).unwrap();
//! assert_eq!(result, 7.0);
//! ```

pub mod error;
pub mod evaluator;
pub mod functions;
pub mod resolver;
pub mod token;

pub use error::{FormulaError, FormulaResult, ReferenceTarget, ResolveError};
pub use evaluator::{evaluate, evaluate_str};
pub use functions::{lookup, OperatorDef, Operation, OPERATORS};
pub use resolver::resolve;
pub use token::{tokenize, Token};
