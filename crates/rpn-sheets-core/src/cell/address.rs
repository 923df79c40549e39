//! Cell address type and reference-token recognition

use crate::error::{Error, Result};
use lazy_regex::{regex_captures, regex_is_match};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "AB12")
///
/// Columns are letters (A = first column, Z = 26th, AA = 27th, ...) and rows are
/// 1-based numbers in text form. Both are stored 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: usize,
    /// Column index (0-based, A=0, B=1, ...)
    pub col: usize,
}

/// Check whether a token is a cell reference.
///
/// Letters followed by digits, with whitespace allowed around and between the
/// two parts. Operator mnemonics such as `SQRT` never match because they carry
/// no digits, and numeric literals never match because they do not start with
/// a letter.
pub fn is_reference(token: &str) -> bool {
    regex_is_match!(r"^\s*[A-Za-z]+\s*[0-9]+\s*$", token)
}

/// Decode a reference token into a 0-based `(column, row)` pair.
///
/// ```
/// use rpn_sheets_core::cell::decode;
///
/// assert_eq!(decode("A1").unwrap(), (0, 0));
/// assert_eq!(decode("B2").unwrap(), (1, 1));
/// ```
pub fn decode(token: &str) -> Result<(usize, usize)> {
    let addr = CellAddress::parse(token)?;
    Ok((addr.col, addr.row))
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use rpn_sheets_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("A1").unwrap();
    /// assert_eq!(addr.row, 0);
    /// assert_eq!(addr.col, 0);
    ///
    /// let addr = CellAddress::parse(" b 3 ").unwrap();
    /// assert_eq!(addr.row, 2);
    /// assert_eq!(addr.col, 1);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let (_, letters, digits) = regex_captures!(r"^\s*([A-Za-z]+)\s*([0-9]+)\s*$", s)
            .ok_or_else(|| Error::InvalidAddress(format!("'{}' is not a cell reference", s)))?;

        let col = Self::letters_to_column(letters)?;

        let row: usize = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        // Rows are 1-based in text, 0-based internally
        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self { row: row - 1, col })
    }

    /// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
    pub fn letters_to_column(letters: &str) -> Result<usize> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress("empty column letters".into()));
        }

        let mut col: usize = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidAddress(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            let digit = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
            col = col
                .checked_mul(26)
                .and_then(|c| c.checked_add(digit))
                .ok_or_else(|| Error::InvalidAddress(format!("column '{}' is too large", letters)))?;
        }

        Ok(col - 1)
    }

    /// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn column_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col as u128 + 1;

        while n > 0 {
            n -= 1;
            result.insert(0, ((n % 26) as u8 + b'A') as char);
            n /= 26;
        }

        result
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::column_to_letters(self.col), self.row as u128 + 1)
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_to_letters() {
        assert_eq!(CellAddress::column_to_letters(0), "A");
        assert_eq!(CellAddress::column_to_letters(25), "Z");
        assert_eq!(CellAddress::column_to_letters(26), "AA");
        assert_eq!(CellAddress::column_to_letters(701), "ZZ");
        assert_eq!(CellAddress::column_to_letters(702), "AAA");
    }

    #[test]
    fn test_letters_to_column() {
        assert_eq!(CellAddress::letters_to_column("A").unwrap(), 0);
        assert_eq!(CellAddress::letters_to_column("B").unwrap(), 1);
        assert_eq!(CellAddress::letters_to_column("Z").unwrap(), 25);
        assert_eq!(CellAddress::letters_to_column("AA").unwrap(), 26);
        assert_eq!(CellAddress::letters_to_column("AB").unwrap(), 27);
        assert_eq!(CellAddress::letters_to_column("ZZ").unwrap(), 701);

        // Case insensitive
        assert_eq!(CellAddress::letters_to_column("a").unwrap(), 0);
        assert_eq!(CellAddress::letters_to_column("aa").unwrap(), 26);
    }

    #[test]
    fn test_letters_to_column_overflow() {
        let huge = "Z".repeat(40);
        assert!(CellAddress::letters_to_column(&huge).is_err());
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("A1").unwrap(), (0, 0));
        assert_eq!(decode("B2").unwrap(), (1, 1));
        assert_eq!(decode("C1").unwrap(), (2, 0));
        assert_eq!(decode("a10").unwrap(), (0, 9));
        assert_eq!(decode("AA3").unwrap(), (26, 2));
    }

    #[test]
    fn test_decode_inverts_display() {
        for row in 0..9 {
            for col in 0..26 {
                let text = CellAddress::new(row, col).to_string();
                assert_eq!(decode(&text).unwrap(), (col, row));
            }
        }
    }

    #[test]
    fn test_cell_address_parse_whitespace() {
        let addr = CellAddress::parse("  C 4 ").unwrap();
        assert_eq!(addr, CellAddress::new(3, 2));
    }

    #[test]
    fn test_cell_address_parse_errors() {
        assert!(CellAddress::parse("").is_err());
        assert!(CellAddress::parse("A").is_err());
        assert!(CellAddress::parse("1").is_err());
        assert!(CellAddress::parse("A0").is_err()); // Row 0 is invalid
        assert!(CellAddress::parse("1A").is_err());
        assert!(CellAddress::parse("A1B").is_err());
        assert!(CellAddress::parse("A99999999999999999999999").is_err());
    }

    #[test]
    fn test_is_reference() {
        assert!(is_reference("A1"));
        assert!(is_reference("b2"));
        assert!(is_reference(" C3 "));
        assert!(is_reference("D 4"));
        assert!(is_reference("AA10"));

        assert!(!is_reference("SQRT"));
        assert!(!is_reference("+"));
        assert!(!is_reference("12"));
        assert!(!is_reference("-1.5"));
        assert!(!is_reference("1e5"));
        assert!(!is_reference("#ERR"));
        assert!(!is_reference("A1B2"));
    }

    #[test]
    fn test_cell_address_display() {
        assert_eq!(CellAddress::new(0, 0).to_string(), "A1");
        assert_eq!(CellAddress::new(99, 2).to_string(), "C100");
        assert_eq!(CellAddress::new(0, 26).to_string(), "AA1");
    }
}
