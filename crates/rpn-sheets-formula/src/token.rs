//! Postfix tokens

use crate::error::{FormulaError, FormulaResult};
use crate::functions::{self, OperatorDef};

/// Split cell text into whitespace-delimited tokens
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// Parse a numeric literal, rejecting infinities and NaN
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// A classified token during reduction
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Known operator
    Operator(&'static OperatorDef),
    /// Literal text, parsed only when an operator consumes it
    Operand(String),
    /// Result of an earlier reduction step
    Value(f64),
}

impl Token {
    /// Classify raw token text
    pub fn classify(text: &str) -> Self {
        match functions::lookup(text) {
            Some(def) => Token::Operator(def),
            None => Token::Operand(text.to_owned()),
        }
    }

    /// The operator definition, if this is an operator
    pub fn as_operator(&self) -> Option<&'static OperatorDef> {
        match self {
            Token::Operator(def) => Some(def),
            _ => None,
        }
    }

    /// Numeric value of an operand
    pub fn to_number(&self) -> FormulaResult<f64> {
        match self {
            Token::Value(n) => Ok(*n),
            Token::Operand(text) => {
                parse_number(text).ok_or_else(|| FormulaError::InvalidOperand(text.clone()))
            }
            Token::Operator(def) => Err(FormulaError::InvalidOperand(def.token.to_owned())),
        }
    }
}

impl PartialEq for OperatorDef {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}
