//! Built-in postfix operators

pub mod math;

use crate::error::FormulaResult;
use ahash::AHashMap;
use once_cell::sync::Lazy;

/// Operator implementation, tagged by arity
#[derive(Clone, Copy)]
pub enum Operation {
    /// Takes the one preceding operand
    Unary(fn(f64) -> FormulaResult<f64>),
    /// Takes the two preceding operands, left operand first
    Binary(fn(f64, f64) -> FormulaResult<f64>),
}

impl Operation {
    /// Number of operands consumed
    pub fn arity(&self) -> usize {
        match self {
            Operation::Unary(_) => 1,
            Operation::Binary(_) => 2,
        }
    }
}

/// Operator definition
#[derive(Clone, Copy)]
pub struct OperatorDef {
    /// Token that names the operator (case-sensitive)
    pub token: &'static str,
    /// Implementation
    pub operation: Operation,
}

impl OperatorDef {
    /// Number of operands consumed
    pub fn arity(&self) -> usize {
        self.operation.arity()
    }

    /// Apply the operator to its operands, in token order
    ///
    /// `operands` must hold exactly [`OperatorDef::arity`] values.
    pub fn apply(&self, operands: &[f64]) -> FormulaResult<f64> {
        match (self.operation, operands) {
            (Operation::Unary(f), [x]) => f(*x),
            (Operation::Binary(f), [a, b]) => f(*a, *b),
            _ => Err(crate::error::FormulaError::MissingOperands {
                operator: self.token,
                expected: self.arity(),
                actual: operands.len(),
            }),
        }
    }
}

impl std::fmt::Debug for OperatorDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperatorDef")
            .field("token", &self.token)
            .field("arity", &self.arity())
            .finish()
    }
}

/// Every operator the evaluator understands
pub static OPERATORS: &[OperatorDef] = &[
    OperatorDef { token: "+", operation: Operation::Binary(math::add) },
    OperatorDef { token: "-", operation: Operation::Binary(math::subtract) },
    OperatorDef { token: "*", operation: Operation::Binary(math::multiply) },
    OperatorDef { token: "/", operation: Operation::Binary(math::divide) },
    OperatorDef { token: "^", operation: Operation::Binary(math::power) },
    OperatorDef { token: "!", operation: Operation::Unary(math::factorial) },
    OperatorDef { token: "ABS", operation: Operation::Unary(math::absolute_value) },
    OperatorDef { token: "ACOS", operation: Operation::Unary(math::acos) },
    OperatorDef { token: "ASIN", operation: Operation::Unary(math::asin) },
    OperatorDef { token: "ATAN", operation: Operation::Unary(math::atan) },
    OperatorDef { token: "COS", operation: Operation::Unary(math::cos) },
    OperatorDef { token: "COSH", operation: Operation::Unary(math::cosh) },
    OperatorDef { token: "LOG", operation: Operation::Unary(math::log) },
    OperatorDef { token: "SIN", operation: Operation::Unary(math::sin) },
    OperatorDef { token: "SINH", operation: Operation::Unary(math::sinh) },
    OperatorDef { token: "SQRT", operation: Operation::Unary(math::square_root) },
    OperatorDef { token: "TAN", operation: Operation::Unary(math::tan) },
    OperatorDef { token: "TANH", operation: Operation::Unary(math::tanh) },
];

static OPERATOR_TABLE: Lazy<AHashMap<&'static str, &'static OperatorDef>> =
    Lazy::new(|| OPERATORS.iter().map(|def| (def.token, def)).collect());

/// Look up an operator by its exact token
pub fn lookup(token: &str) -> Option<&'static OperatorDef> {
    OPERATOR_TABLE.get(token).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_complete() {
        assert_eq!(OPERATORS.len(), 18);
        for def in OPERATORS {
            assert!(std::ptr::eq(lookup(def.token).unwrap(), def));
        }
    }

    #[test]
    fn test_arity() {
        for token in ["+", "-", "*", "/", "^"] {
            assert_eq!(lookup(token).unwrap().arity(), 2, "{}", token);
        }
        for token in [
            "!", "ABS", "ACOS", "ASIN", "ATAN", "COS", "COSH", "LOG", "SIN", "SINH", "SQRT", "TAN",
            "TANH",
        ] {
            assert_eq!(lookup(token).unwrap().arity(), 1, "{}", token);
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(lookup("SQRT").is_some());
        assert!(lookup("sqrt").is_none());
        assert!(lookup(" +").is_none());
        assert!(lookup("-1").is_none());
        assert!(lookup("A1").is_none());
    }

    #[test]
    fn test_apply() {
        let minus = lookup("-").unwrap();
        assert_eq!(minus.apply(&[10.0, 4.0]).unwrap(), 6.0);
        assert!(minus.apply(&[10.0]).is_err());

        let sqrt = lookup("SQRT").unwrap();
        assert_eq!(sqrt.apply(&[9.0]).unwrap(), 3.0);
    }
}
