//! Cell reference resolution
//!
//! Replaces every reference token in an expression with the referenced cell's
//! number. A reference can only be substituted once the target cell is solved
//! to a number; anything else stops resolution for this attempt.

use crate::error::{ReferenceTarget, ResolveError};
use rpn_sheets_core::cell::is_reference;
use rpn_sheets_core::{format_number, CellAddress, CellValue, Grid};

/// Substitute references in a token sequence.
///
/// References are visited in token order. A reference outside the grid (or
/// one that does not decode) fails with [`ResolveError::OutOfBounds`] and one
/// whose target is still an expression fails with [`ResolveError::Pending`];
/// whichever comes first wins. A reference to an error cell does not stop the
/// scan, so a later out-of-bounds reference still fails the cell at once. If
/// nothing else failed, the first such reference is reported as
/// [`ResolveError::ErrorReference`].
///
/// # Examples
/// ```
/// use rpn_sheets_core::Grid;
/// use rpn_sheets_formula::resolve;
///
/// let mut grid = Grid::from_text_rows([["7", "A1 2 *"]]);
/// grid.set_at(0, 0, 7.0).unwrap();
///
/// let tokens = vec!["A1".to_string(), "2".to_string(), "*".to_string()];
/// assert_eq!(resolve(&tokens, &grid).unwrap(), vec!["7.0", "2", "*"]);
/// ```
pub fn resolve<S: AsRef<str>>(tokens: &[S], grid: &Grid) -> Result<Vec<String>, ResolveError> {
    let mut resolved = Vec::with_capacity(tokens.len());
    let mut error_reference = None;

    for token in tokens {
        match resolve_token(token.as_ref(), grid) {
            Ok(text) => resolved.push(text),
            Err(ResolveError::ErrorReference(addr)) => {
                error_reference.get_or_insert(addr);
            }
            Err(e) => return Err(e),
        }
    }

    match error_reference {
        Some(addr) => Err(ResolveError::ErrorReference(addr)),
        None => Ok(resolved),
    }
}

/// Substitute a single token, leaving non-references untouched
pub fn resolve_token(token: &str, grid: &Grid) -> Result<String, ResolveError> {
    if !is_reference(token) {
        return Ok(token.to_owned());
    }

    let addr = CellAddress::parse(token)
        .map_err(|_| ResolveError::OutOfBounds(ReferenceTarget::Undecodable))?;

    match grid.get(addr) {
        None => Err(ResolveError::OutOfBounds(ReferenceTarget::Address(addr))),
        Some(CellValue::Number(n)) => Ok(format_number(*n)),
        Some(CellValue::Expression(_)) => Err(ResolveError::Pending(addr)),
        Some(CellValue::Error) => Err(ResolveError::ErrorReference(addr)),
    }
}
