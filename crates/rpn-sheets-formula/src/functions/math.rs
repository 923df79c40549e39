//! Math functions
//!
//! Every function returns its result rounded to 2 decimal places, half away
//! from zero. Inputs outside an operation's domain, and results that are not
//! finite, are reported as [`FormulaError::Domain`].

use crate::error::{FormulaError, FormulaResult};

/// Largest n for which n! fits in an f64
const MAX_FACTORIAL: f64 = 170.0;

/// Round to 2 decimal places, half away from zero.
///
/// Whole numbers (which includes every f64 beyond 2^52) are returned as they
/// are, so large results never pick up scaling error.
pub fn round2(value: f64) -> f64 {
    if value.fract() == 0.0 {
        return value;
    }
    (value * 100.0).round() / 100.0
}

/// Reject non-finite results, then round
fn finish(operator: &'static str, value: f64) -> FormulaResult<f64> {
    if value.is_finite() {
        Ok(round2(value))
    } else {
        Err(FormulaError::domain(operator, format!("result is {}", value)))
    }
}

/// `a b +`
pub fn add(a: f64, b: f64) -> FormulaResult<f64> {
    finish("+", a + b)
}

/// `a b -`
pub fn subtract(a: f64, b: f64) -> FormulaResult<f64> {
    finish("-", a - b)
}

/// `a b *`
pub fn multiply(a: f64, b: f64) -> FormulaResult<f64> {
    finish("*", a * b)
}

/// `a b /`
pub fn divide(a: f64, b: f64) -> FormulaResult<f64> {
    if b == 0.0 {
        return Err(FormulaError::domain("/", "division by zero"));
    }
    finish("/", a / b)
}

/// `a b ^` - a raised to the power b
///
/// Cases like `0 -1 ^` or `-8 0.5 ^` have no real result and fail.
pub fn power(a: f64, b: f64) -> FormulaResult<f64> {
    finish("^", a.powf(b))
}

/// `n !` - factorial of a non-negative integer
pub fn factorial(n: f64) -> FormulaResult<f64> {
    if n < 0.0 || n.fract() != 0.0 {
        return Err(FormulaError::domain(
            "!",
            format!("{} is not a non-negative integer", n),
        ));
    }
    if n > MAX_FACTORIAL {
        return Err(FormulaError::domain("!", format!("{}! overflows", n)));
    }

    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        i += 1.0;
    }
    finish("!", result)
}

/// `x ABS`
pub fn absolute_value(x: f64) -> FormulaResult<f64> {
    finish("ABS", x.abs())
}

/// `x ACOS` - defined on [-1, 1]
pub fn acos(x: f64) -> FormulaResult<f64> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(FormulaError::domain("ACOS", format!("{} is outside [-1, 1]", x)));
    }
    finish("ACOS", x.acos())
}

/// `x ASIN` - defined on [-1, 1]
pub fn asin(x: f64) -> FormulaResult<f64> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(FormulaError::domain("ASIN", format!("{} is outside [-1, 1]", x)));
    }
    finish("ASIN", x.asin())
}

/// `x ATAN`
pub fn atan(x: f64) -> FormulaResult<f64> {
    finish("ATAN", x.atan())
}

/// `x COS`
pub fn cos(x: f64) -> FormulaResult<f64> {
    finish("COS", x.cos())
}

/// `x COSH`
pub fn cosh(x: f64) -> FormulaResult<f64> {
    finish("COSH", x.cosh())
}

/// `x LOG` - natural logarithm, defined for x > 0
pub fn log(x: f64) -> FormulaResult<f64> {
    if x <= 0.0 {
        return Err(FormulaError::domain("LOG", format!("{} is not positive", x)));
    }
    finish("LOG", x.ln())
}

/// `x SIN`
pub fn sin(x: f64) -> FormulaResult<f64> {
    finish("SIN", x.sin())
}

/// `x SINH`
pub fn sinh(x: f64) -> FormulaResult<f64> {
    finish("SINH", x.sinh())
}

/// `x SQRT` - defined for x >= 0
pub fn square_root(x: f64) -> FormulaResult<f64> {
    if x < 0.0 {
        return Err(FormulaError::domain("SQRT", format!("{} is negative", x)));
    }
    finish("SQRT", x.sqrt())
}

/// `x TAN`
pub fn tan(x: f64) -> FormulaResult<f64> {
    finish("TAN", x.tan())
}

/// `x TANH`
pub fn tanh(x: f64) -> FormulaResult<f64> {
    finish("TANH", x.tanh())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_domain(result: FormulaResult<f64>) -> bool {
        matches!(result, Err(FormulaError::Domain { .. }))
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(2.5), 2.5);
        assert_eq!(round2(1.0 / 3.0), 0.33);
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(-2.0 / 3.0), -0.67);
        assert_eq!(round2(1e300), 1e300);
        assert_eq!(round2(f64::MAX), f64::MAX);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(add(3.0, 4.0).unwrap(), 7.0);
        assert_eq!(subtract(7.0, 5.0).unwrap(), 2.0);
        assert_eq!(multiply(2.5, 4.0).unwrap(), 10.0);
        assert_eq!(divide(1.0, 3.0).unwrap(), 0.33);
        assert_eq!(power(2.0, 10.0).unwrap(), 1024.0);
        assert_eq!(add(0.1, 0.2).unwrap(), 0.3);
    }

    #[test]
    fn test_divide_by_zero() {
        assert!(is_domain(divide(10.0, 0.0)));
        assert!(is_domain(divide(0.0, 0.0)));
    }

    #[test]
    fn test_power_domain() {
        assert!(is_domain(power(0.0, -1.0)));
        assert!(is_domain(power(-8.0, 0.5)));
        assert!(is_domain(power(10.0, 400.0)));
        assert_eq!(power(-2.0, 3.0).unwrap(), -8.0);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0.0).unwrap(), 1.0);
        assert_eq!(factorial(1.0).unwrap(), 1.0);
        assert_eq!(factorial(5.0).unwrap(), 120.0);
        assert_eq!(factorial(10.0).unwrap(), 3628800.0);
        assert!(factorial(170.0).is_ok());
        assert!(is_domain(factorial(171.0)));
        assert!(is_domain(factorial(-1.0)));
        assert!(is_domain(factorial(2.5)));
    }

    #[test]
    fn test_unary() {
        assert_eq!(absolute_value(-3.456).unwrap(), 3.46);
        assert_eq!(square_root(16.0).unwrap(), 4.0);
        assert_eq!(square_root(2.0).unwrap(), 1.41);
        assert_eq!(log(1.0).unwrap(), 0.0);
        assert_eq!(log(std::f64::consts::E).unwrap(), 1.0);
        assert_eq!(sin(0.0).unwrap(), 0.0);
        assert_eq!(cos(0.0).unwrap(), 1.0);
        assert_eq!(tan(1.0).unwrap(), 1.56);
        assert_eq!(acos(1.0).unwrap(), 0.0);
        assert_eq!(asin(1.0).unwrap(), 1.57);
        assert_eq!(atan(1.0).unwrap(), 0.79);
        assert_eq!(cosh(0.0).unwrap(), 1.0);
        assert_eq!(sinh(1.0).unwrap(), 1.18);
        assert_eq!(tanh(1.0).unwrap(), 0.76);
    }

    #[test]
    fn test_unary_domain() {
        assert!(is_domain(square_root(-1.0)));
        assert!(is_domain(log(0.0)));
        assert!(is_domain(log(-2.0)));
        assert!(is_domain(acos(1.5)));
        assert!(is_domain(asin(-1.01)));
        assert!(is_domain(cosh(1000.0)));
        assert!(is_domain(sinh(-1000.0)));
    }
}
