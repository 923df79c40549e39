//! Postfix evaluator
//!
//! Reduces a token sequence one operator at a time. Each step finds the first
//! operator from the left, replaces it and the operands immediately before it
//! with the operator's result, and starts over. The expression is solved when
//! a single numeric token is left.

use crate::error::{FormulaError, FormulaResult};
use crate::token::{parse_number, tokenize, Token};

/// Evaluate a fully resolved token sequence
///
/// # Examples
/// ```
/// use rpn_sheets_formula::evaluate;
///
/// let tokens: Vec<String> = ["3", "4", "+", "2", "*"].iter().map(|t| t.to_string()).collect();
/// assert_eq!(evaluate(&tokens).unwrap(), 14.0);
/// ```
pub fn evaluate<S: AsRef<str>>(tokens: &[S]) -> FormulaResult<f64> {
    let mut tokens: Vec<Token> = tokens.iter().map(|t| Token::classify(t.as_ref())).collect();

    while tokens.len() > 1 {
        reduce_once(&mut tokens)?;
    }

    match tokens.pop() {
        None => Err(FormulaError::Empty),
        Some(Token::Value(n)) => Ok(n),
        Some(Token::Operand(text)) => parse_number(&text).ok_or(FormulaError::Parse(text)),
        Some(Token::Operator(def)) => Err(FormulaError::Parse(def.token.to_owned())),
    }
}

/// Tokenize and evaluate expression text that contains no references
pub fn evaluate_str(text: &str) -> FormulaResult<f64> {
    evaluate(&tokenize(text))
}

/// Apply the leftmost operator once
fn reduce_once(tokens: &mut Vec<Token>) -> FormulaResult<()> {
    let (pos, def) = tokens
        .iter()
        .enumerate()
        .find_map(|(i, t)| t.as_operator().map(|def| (i, def)))
        .ok_or(FormulaError::MissingOperator(tokens.len()))?;

    let arity = def.arity();
    if pos < arity {
        return Err(FormulaError::MissingOperands {
            operator: def.token,
            expected: arity,
            actual: pos,
        });
    }

    let start = pos - arity;
    let operands = tokens[start..pos]
        .iter()
        .map(Token::to_number)
        .collect::<FormulaResult<Vec<f64>>>()?;
    let result = def.apply(&operands)?;

    log::trace!("{} {:?} = {}", def.token, operands, result);
    tokens.splice(start..=pos, std::iter::once(Token::Value(result)));
    Ok(())
}
