//! Formula error types

use rpn_sheets_core::CellAddress;
use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while evaluating a postfix expression
///
/// Every variant ends up as the error marker in the grid; the distinction only
/// matters for logging and tests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    /// Numeric input outside the operation's domain
    #[error("Domain error in {operator}: {message}")]
    Domain {
        operator: &'static str,
        message: String,
    },

    /// Operand token that is not a number
    #[error("Invalid operand: '{0}'")]
    InvalidOperand(String),

    /// Operator with too few preceding tokens
    #[error("Not enough operands for {operator}: expected {expected}, got {actual}")]
    MissingOperands {
        operator: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Several tokens left but none of them is an operator
    #[error("No operator to reduce {0} remaining tokens")]
    MissingOperator(usize),

    /// Nothing to evaluate
    #[error("Empty expression")]
    Empty,

    /// Final remaining token is not numeric
    #[error("Parse error: '{0}' is not a number")]
    Parse(String),
}

impl FormulaError {
    /// Create a domain error for an operator
    pub fn domain<S: Into<String>>(operator: &'static str, message: S) -> Self {
        FormulaError::Domain {
            operator,
            message: message.into(),
        }
    }
}

/// Reasons a cell's references cannot be substituted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Reference outside the grid; the cell is in error for good
    #[error("Reference {0} is outside the grid")]
    OutOfBounds(ReferenceTarget),

    /// Referenced cell is still an unevaluated expression
    #[error("Reference {0} is not resolved yet")]
    Pending(CellAddress),

    /// Referenced cell holds the error marker
    #[error("Reference {0} holds the error marker")]
    ErrorReference(CellAddress),
}

impl ResolveError {
    /// Whether a later sweep could still succeed
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ResolveError::OutOfBounds(_))
    }
}

/// What an out-of-bounds reference pointed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceTarget {
    /// A well-formed address past the edge of the grid
    Address(CellAddress),
    /// A reference token that does not decode to any position (e.g. row 0)
    Undecodable,
}

impl std::fmt::Display for ReferenceTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceTarget::Address(addr) => write!(f, "{}", addr),
            ReferenceTarget::Undecodable => f.write_str("<undecodable>"),
        }
    }
}
