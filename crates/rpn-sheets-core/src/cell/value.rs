//! Cell value types

use std::fmt;

/// Text of the error marker, both in input and in output
pub const ERROR_MARKER: &str = "#ERR";

/// Represents the value stored in a cell
///
/// A cell starts as [`CellValue::Expression`] and moves to either
/// [`CellValue::Number`] or [`CellValue::Error`] once it is solved. Both of
/// those are terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Raw postfix text that has not been evaluated yet
    Expression(String),

    /// Resolved numeric result
    Number(f64),

    /// The error marker
    Error,
}

impl CellValue {
    /// Build a cell from its input text.
    ///
    /// The literal `#ERR` (ignoring surrounding whitespace) loads as an
    /// already-errored cell; everything else is kept as an expression.
    pub fn from_input<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        if text.trim() == ERROR_MARKER {
            CellValue::Error
        } else {
            CellValue::Expression(text)
        }
    }

    /// Create a new expression value
    pub fn expression<S: Into<String>>(text: S) -> Self {
        CellValue::Expression(text.into())
    }

    /// Check if the cell still holds unevaluated text
    pub fn is_pending(&self) -> bool {
        matches!(self, CellValue::Expression(_))
    }

    /// Check if the cell contains an error
    pub fn is_error(&self) -> bool {
        matches!(self, CellValue::Error)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Expression(text) => f.write_str(text),
            CellValue::Number(n) => f.write_str(&format_number(*n)),
            CellValue::Error => f.write_str(ERROR_MARKER),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::from_input(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::from_input(s)
    }
}

/// Format a number the way results are written out.
///
/// Shortest text that parses back to the same `f64`, always with a decimal
/// point for whole numbers (`7.0`, `2.5`, `-0.33`). Parsing the output with
/// `str::parse::<f64>` gives back exactly `n`.
pub fn format_number(n: f64) -> String {
    format!("{:?}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input() {
        assert_eq!(CellValue::from_input("3 4 +"), CellValue::expression("3 4 +"));
        assert_eq!(CellValue::from_input("#ERR"), CellValue::Error);
        assert_eq!(CellValue::from_input(" #ERR "), CellValue::Error);
        assert_eq!(CellValue::from_input(""), CellValue::expression(""));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(7.0), "7.0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.33), "-0.33");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1234.56), "1234.56");
    }

    #[test]
    fn test_format_number_round_trips() {
        for n in [0.01, 1.0 / 3.0, 12345.67, -98.76, 1e-3] {
            assert_eq!(format_number(n).parse::<f64>().unwrap(), n);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Number(4.0).to_string(), "4.0");
        assert_eq!(CellValue::Error.to_string(), "#ERR");
        assert_eq!(CellValue::expression("A1 1 +").to_string(), "A1 1 +");
    }

    #[test]
    fn test_state_queries() {
        assert!(CellValue::expression("1").is_pending());
        assert!(!CellValue::Number(1.0).is_pending());
        assert!(CellValue::Error.is_error());
        assert!(!CellValue::Number(2.0).is_error());
    }
}
