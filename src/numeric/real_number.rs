// ============================================================================
// Real Number
// Exact i64 fractions that promote to high-precision decimals when needed
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of decimal places used when an approximate value is printed
/// without an explicit precision.
pub const DEFAULT_PRECISION: u32 = 6;

/// Which representation a [`RealNumber`] currently uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RealKind {
    /// Exact ratio of two integers
    Fraction,
    /// Rounded high-precision decimal
    Approximate,
}

/// A real number held either exactly or approximately.
///
/// Binary operations stay exact while both operands are `Fraction`. As soon
/// as either operand is `Approximate`, both are converted to `Decimal` and the
/// result is `Approximate`. Nothing converts back automatically.
///
/// Fractions are never reduced implicitly: `1/3 + 1/3` is `6/9` until
/// [`RealNumber::simplify`] is called.
///
/// # Equality
/// `PartialEq` is structural: `2/4 != 1/2` and `Fraction(2/1) != Approximate(2)`.
/// Use [`RealNumber::approx_eq`] to compare values numerically.
///
/// # Example
/// ```
/// use linear_algebra::numeric::RealNumber;
///
/// let third = RealNumber::fraction(1, 3)?;
/// let sum = third.checked_add(third)?;
/// assert_eq!(sum.to_string(), "6/9");
/// assert_eq!(sum.simplify()?.to_string(), "2/3");
/// # Ok::<(), linear_algebra::numeric::NumericError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RealNumber {
    /// `numerator / denominator`, exact. A zero denominator is rejected by
    /// every operation with [`NumericError::DegenerateFraction`].
    Fraction { numerator: i64, denominator: i64 },
    /// Approximate value with 28 significant decimal digits.
    Approximate(Decimal),
}

// ============================================================================
// Internal Helpers
// ============================================================================

/// Reject zero denominators before they can poison a computation.
#[inline]
pub(super) fn checked_parts(numerator: i64, denominator: i64) -> NumericResult<(i64, i64)> {
    if denominator == 0 {
        tracing::debug!(numerator, "rejecting fraction with zero denominator");
        return Err(NumericError::DegenerateFraction);
    }
    Ok((numerator, denominator))
}

/// Narrow an `i128` intermediate back to `i64`.
#[inline]
pub(super) fn narrow(value: i128) -> NumericResult<i64> {
    if value > i64::MAX as i128 {
        Err(NumericError::Overflow)
    } else if value < i64::MIN as i128 {
        Err(NumericError::Underflow)
    } else {
        Ok(value as i64)
    }
}

/// Euclidean greatest common divisor.
pub(super) fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Lowest terms with the sign carried by the numerator.
pub(super) fn reduced_parts(numerator: i64, denominator: i64) -> NumericResult<(i64, i64)> {
    let (numerator, denominator) = checked_parts(numerator, denominator)?;
    // denominator != 0, so the divisor is at least 1
    let divisor = gcd(numerator.unsigned_abs(), denominator.unsigned_abs()) as i128;
    let sign: i128 = if denominator < 0 { -1 } else { 1 };
    Ok((
        narrow(sign * numerator as i128 / divisor)?,
        narrow(sign * denominator as i128 / divisor)?,
    ))
}

/// Truncate a decimal toward zero into an `i64`.
#[inline]
pub(super) fn truncate(value: Decimal) -> NumericResult<i64> {
    value.trunc().to_i64().ok_or(NumericError::Overflow)
}

/// Render a decimal with exactly `precision` places, rounding half away from zero.
fn format_decimal(value: Decimal, precision: u32) -> String {
    let rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", precision as usize, rounded)
}

/// Operands of a binary operation after the promotion rule has been applied.
enum Promoted {
    Exact { a: i64, b: i64, c: i64, d: i64 },
    Approximate(Decimal, Decimal),
}

impl RealNumber {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an exact fraction.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `denominator` is zero.
    #[inline]
    pub fn fraction(numerator: i64, denominator: i64) -> NumericResult<Self> {
        if denominator == 0 {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::Fraction {
            numerator,
            denominator,
        })
    }

    /// Create an exact integer `value/1`.
    #[inline]
    pub const fn integer(value: i64) -> Self {
        Self::Fraction {
            numerator: value,
            denominator: 1,
        }
    }

    /// Create an approximate value.
    #[inline]
    pub const fn approximate(value: Decimal) -> Self {
        Self::Approximate(value)
    }

    /// Create an approximate value from an `f64`.
    ///
    /// # Errors
    /// Returns `InvalidInput` for NaN, infinities and values outside the decimal range.
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        Decimal::from_f64(value)
            .map(Self::Approximate)
            .ok_or(NumericError::InvalidInput)
    }

    /// Exact zero (`0/1`).
    #[inline]
    pub const fn zero() -> Self {
        Self::integer(0)
    }

    /// Exact one (`1/1`).
    #[inline]
    pub const fn one() -> Self {
        Self::integer(1)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Which representation this value uses.
    #[inline]
    pub const fn kind(self) -> RealKind {
        match self {
            Self::Fraction { .. } => RealKind::Fraction,
            Self::Approximate(_) => RealKind::Approximate,
        }
    }

    #[inline]
    pub const fn is_fraction(self) -> bool {
        matches!(self, Self::Fraction { .. })
    }

    #[inline]
    pub const fn is_approximate(self) -> bool {
        matches!(self, Self::Approximate(_))
    }

    /// Check if value is zero. A degenerate `0/0` is not zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Fraction {
                numerator,
                denominator,
            } => numerator == 0 && denominator != 0,
            Self::Approximate(value) => value.is_zero(),
        }
    }

    /// Check if value is strictly negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        match self {
            Self::Fraction {
                numerator,
                denominator,
            } => numerator != 0 && denominator != 0 && (numerator < 0) != (denominator < 0),
            Self::Approximate(value) => !value.is_zero() && value.is_sign_negative(),
        }
    }

    /// The value as a decimal: true division for fractions.
    ///
    /// # Errors
    /// Returns `DegenerateFraction` for a zero denominator.
    pub fn to_decimal(self) -> NumericResult<Decimal> {
        match self {
            Self::Fraction {
                numerator,
                denominator,
            } => {
                let (numerator, denominator) = checked_parts(numerator, denominator)?;
                Decimal::from(numerator)
                    .checked_div(Decimal::from(denominator))
                    .ok_or(NumericError::Overflow)
            },
            Self::Approximate(value) => Ok(value),
        }
    }

    // ========================================================================
    // Promotion
    // ========================================================================

    fn promote(self, rhs: Self, op: &'static str) -> NumericResult<Promoted> {
        match (self, rhs) {
            (
                Self::Fraction {
                    numerator: a,
                    denominator: b,
                },
                Self::Fraction {
                    numerator: c,
                    denominator: d,
                },
            ) => {
                let (a, b) = checked_parts(a, b)?;
                let (c, d) = checked_parts(c, d)?;
                Ok(Promoted::Exact { a, b, c, d })
            },
            (Self::Approximate(x), Self::Approximate(y)) => Ok(Promoted::Approximate(x, y)),
            _ => {
                tracing::trace!(op, "mixed operands, promoting to approximate arithmetic");
                Ok(Promoted::Approximate(self.to_decimal()?, rhs.to_decimal()?))
            },
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition: `a/b + c/d = (a·d + c·b) / (b·d)`, unreduced.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if an exact part leaves the `i64` range.
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        match self.promote(rhs, "add")? {
            Promoted::Exact { a, b, c, d } => Ok(Self::Fraction {
                numerator: narrow(a as i128 * d as i128 + c as i128 * b as i128)?,
                denominator: narrow(b as i128 * d as i128)?,
            }),
            Promoted::Approximate(x, y) => x
                .checked_add(y)
                .map(Self::Approximate)
                .ok_or(NumericError::Overflow),
        }
    }

    /// Checked subtraction: `a/b - c/d = (a·d - c·b) / (b·d)`, unreduced.
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        match self.promote(rhs, "sub")? {
            Promoted::Exact { a, b, c, d } => Ok(Self::Fraction {
                numerator: narrow(a as i128 * d as i128 - c as i128 * b as i128)?,
                denominator: narrow(b as i128 * d as i128)?,
            }),
            Promoted::Approximate(x, y) => x
                .checked_sub(y)
                .map(Self::Approximate)
                .ok_or(NumericError::Overflow),
        }
    }

    /// Checked multiplication: `(a·c) / (b·d)`.
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        match self.promote(rhs, "mul")? {
            Promoted::Exact { a, b, c, d } => Ok(Self::Fraction {
                numerator: narrow(a as i128 * c as i128)?,
                denominator: narrow(b as i128 * d as i128)?,
            }),
            Promoted::Approximate(x, y) => x
                .checked_mul(y)
                .map(Self::Approximate)
                .ok_or(NumericError::Overflow),
        }
    }

    /// Checked division: `(a/b) ÷ (c/d) = (a·d) / (b·c)`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero, in either representation.
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        match self.promote(rhs, "div")? {
            Promoted::Exact { a, b, c, d } => {
                if c == 0 {
                    return Err(NumericError::DivisionByZero);
                }
                Ok(Self::Fraction {
                    numerator: narrow(a as i128 * d as i128)?,
                    denominator: narrow(b as i128 * c as i128)?,
                })
            },
            Promoted::Approximate(x, y) => {
                if y.is_zero() {
                    return Err(NumericError::DivisionByZero);
                }
                x.checked_div(y)
                    .map(Self::Approximate)
                    .ok_or(NumericError::Overflow)
            },
        }
    }

    // ========================================================================
    // Unary Operations
    // ========================================================================

    /// Flip the sign (of the numerator, for fractions).
    pub fn negate(self) -> NumericResult<Self> {
        match self {
            Self::Fraction {
                numerator,
                denominator,
            } => {
                let (numerator, denominator) = checked_parts(numerator, denominator)?;
                Ok(Self::Fraction {
                    numerator: numerator.checked_neg().ok_or(NumericError::Overflow)?,
                    denominator,
                })
            },
            Self::Approximate(value) => Ok(Self::Approximate(-value)),
        }
    }

    /// Reciprocal: swaps numerator and denominator for fractions.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the value is zero.
    pub fn inverse(self) -> NumericResult<Self> {
        match self {
            Self::Fraction {
                numerator,
                denominator,
            } => {
                let (numerator, denominator) = checked_parts(numerator, denominator)?;
                if numerator == 0 {
                    return Err(NumericError::DivisionByZero);
                }
                Ok(Self::Fraction {
                    numerator: denominator,
                    denominator: numerator,
                })
            },
            Self::Approximate(value) => {
                if value.is_zero() {
                    return Err(NumericError::DivisionByZero);
                }
                Decimal::ONE
                    .checked_div(value)
                    .map(Self::Approximate)
                    .ok_or(NumericError::Overflow)
            },
        }
    }

    /// Get absolute value (of the numerator, for fractions).
    pub fn abs(self) -> NumericResult<Self> {
        match self {
            Self::Fraction {
                numerator,
                denominator,
            } => {
                let (numerator, denominator) = checked_parts(numerator, denominator)?;
                Ok(Self::Fraction {
                    numerator: numerator.checked_abs().ok_or(NumericError::Overflow)?,
                    denominator,
                })
            },
            Self::Approximate(value) => Ok(Self::Approximate(value.abs())),
        }
    }

    // ========================================================================
    // Conversion and Simplification
    // ========================================================================

    /// Force fraction form. Approximate values are truncated toward zero
    /// over a denominator of 1: the fractional part is discarded, not rounded.
    ///
    /// # Errors
    /// Returns `Overflow` if the integer part does not fit an `i64`.
    pub fn as_fraction(self) -> NumericResult<Self> {
        match self {
            Self::Fraction {
                numerator,
                denominator,
            } => {
                checked_parts(numerator, denominator)?;
                Ok(self)
            },
            Self::Approximate(value) => Ok(Self::integer(truncate(value)?)),
        }
    }

    /// Force approximate form via true division.
    pub fn as_approximate(self) -> NumericResult<Self> {
        self.to_decimal().map(Self::Approximate)
    }

    /// Reduce a fraction to lowest terms with a positive denominator.
    ///
    /// Approximate values are returned unchanged. Idempotent.
    pub fn simplify(self) -> NumericResult<Self> {
        match self {
            Self::Fraction {
                numerator,
                denominator,
            } => {
                let (numerator, denominator) = reduced_parts(numerator, denominator)?;
                Ok(Self::Fraction {
                    numerator,
                    denominator,
                })
            },
            Self::Approximate(_) => Ok(self),
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Numeric comparison across representations.
    ///
    /// Two fractions with equal cross products are equal regardless of
    /// `tolerance`; everything else is compared as decimals.
    pub fn approx_eq(self, other: Self, tolerance: Decimal) -> NumericResult<bool> {
        if let (
            Self::Fraction {
                numerator: a,
                denominator: b,
            },
            Self::Fraction {
                numerator: c,
                denominator: d,
            },
        ) = (self, other)
        {
            let (a, b) = checked_parts(a, b)?;
            let (c, d) = checked_parts(c, d)?;
            if a as i128 * d as i128 == c as i128 * b as i128 {
                return Ok(true);
            }
        }
        let difference = self
            .to_decimal()?
            .checked_sub(other.to_decimal()?)
            .ok_or(NumericError::Overflow)?;
        Ok(difference.abs() <= tolerance)
    }

    // ========================================================================
    // Printing
    // ========================================================================

    /// Render with a fixed number of decimal places. Fractions ignore `precision`.
    pub fn to_string_with_precision(self, precision: u32) -> String {
        format!("{:.*}", precision as usize, self)
    }

    /// Render as `numerator/denominator`, truncating approximate values first.
    pub fn to_fraction_string(self) -> NumericResult<String> {
        Ok(self.as_fraction()?.to_string())
    }

    /// Render as a decimal with `precision` places, dividing fractions first.
    pub fn to_approximate_string(self, precision: u32) -> NumericResult<String> {
        Ok(self.as_approximate()?.to_string_with_precision(precision))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for RealNumber {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for RealNumber {
    #[inline]
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl From<Decimal> for RealNumber {
    #[inline]
    fn from(value: Decimal) -> Self {
        Self::Approximate(value)
    }
}

impl TryFrom<f64> for RealNumber {
    type Error = NumericError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

// ============================================================================
// Operators
// ============================================================================

// Each operator delegates to its checked_* counterpart and returns NumericResult.

impl Neg for RealNumber {
    type Output = NumericResult<Self>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Add for RealNumber {
    type Output = NumericResult<Self>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl Sub for RealNumber {
    type Output = NumericResult<Self>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl Mul for RealNumber {
    type Output = NumericResult<Self>;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs)
    }
}

impl Div for RealNumber {
    type Output = NumericResult<Self>;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs)
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for RealNumber {
    /// Fractions print as `n/d`. Approximate values honour `{:.p}` and fall
    /// back to [`DEFAULT_PRECISION`] places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fraction {
                numerator,
                denominator,
            } => write!(f, "{}/{}", numerator, denominator),
            Self::Approximate(value) => {
                let precision = f
                    .precision()
                    .map(|p| p as u32)
                    .unwrap_or(DEFAULT_PRECISION);
                write!(f, "{}", format_decimal(*value, precision))
            },
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for RealNumber {
    type Err = NumericError;

    /// Parse from a string.
    ///
    /// # Examples
    /// - "6/9" -> Fraction 6/9
    /// - "-4" -> Fraction -4/1
    /// - "0.125" -> Approximate 0.125
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        if let Some((numerator, denominator)) = s.split_once('/') {
            let numerator: i64 = numerator
                .trim()
                .parse()
                .map_err(|_| NumericError::InvalidInput)?;
            let denominator: i64 = denominator
                .trim()
                .parse()
                .map_err(|_| NumericError::InvalidInput)?;
            return Self::fraction(numerator, denominator);
        }

        if let Ok(integer) = s.parse::<i64>() {
            return Ok(Self::integer(integer));
        }

        Decimal::from_str(s)
            .map(Self::Approximate)
            .map_err(|_| NumericError::InvalidInput)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> RealNumber {
        RealNumber::fraction(n, d).unwrap()
    }

    fn approx(s: &str) -> RealNumber {
        RealNumber::Approximate(Decimal::from_str(s).unwrap())
    }

    fn tolerance() -> Decimal {
        Decimal::new(1, 12)
    }

    #[test]
    fn test_constructors() {
        assert_eq!(RealNumber::fraction(1, 0), Err(NumericError::DivisionByZero));
        assert_eq!(RealNumber::default(), frac(0, 1));
        assert_eq!(RealNumber::one(), frac(1, 1));
        assert_eq!(RealNumber::from(7), frac(7, 1));
        assert_eq!(RealNumber::from_f64(0.5).unwrap(), approx("0.5"));
        assert_eq!(RealNumber::from_f64(f64::NAN), Err(NumericError::InvalidInput));
        assert_eq!(RealNumber::from_f64(f64::INFINITY), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_thirds_sum_unreduced_then_simplified() {
        let third = frac(1, 3);
        let sum = third.checked_add(third).unwrap();
        assert_eq!(sum, frac(6, 9));
        assert_eq!(sum.simplify().unwrap(), frac(2, 3));
    }

    #[test]
    fn test_exact_arithmetic() {
        let a = frac(1, 2);
        let b = frac(3, 4);
        assert_eq!(a.checked_add(b).unwrap(), frac(10, 8));
        assert_eq!(a.checked_sub(b).unwrap(), frac(-2, 8));
        assert_eq!(a.checked_mul(b).unwrap(), frac(3, 8));
        assert_eq!(a.checked_div(b).unwrap(), frac(4, 6));
    }

    #[test]
    fn test_promotion() {
        let exact = frac(1, 4);
        let inexact = approx("0.5");

        let sum = exact.checked_add(inexact).unwrap();
        assert_eq!(sum.kind(), RealKind::Approximate);
        assert_eq!(sum, approx("0.75"));

        let product = inexact.checked_mul(exact).unwrap();
        assert!(product.is_approximate());
        assert_eq!(product.to_decimal().unwrap(), Decimal::new(125, 3));

        let quotient = inexact.checked_div(inexact).unwrap();
        assert!(quotient.is_approximate());
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            frac(1, 2).checked_div(frac(0, 5)),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(
            approx("1.5").checked_div(approx("0")),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(
            approx("1.5").checked_div(RealNumber::zero()),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(RealNumber::zero().inverse(), Err(NumericError::DivisionByZero));
        assert_eq!(approx("0.0").inverse(), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_degenerate_operand_rejected() {
        let poisoned = RealNumber::Fraction {
            numerator: 0,
            denominator: 0,
        };
        assert_eq!(poisoned.simplify(), Err(NumericError::DegenerateFraction));
        assert_eq!(
            poisoned.checked_add(frac(1, 2)),
            Err(NumericError::DegenerateFraction)
        );
        assert_eq!(
            approx("1").checked_mul(poisoned),
            Err(NumericError::DegenerateFraction)
        );
        assert_eq!(poisoned.as_approximate(), Err(NumericError::DegenerateFraction));
        assert!(!poisoned.is_zero());
    }

    #[test]
    fn test_overflow() {
        let big = RealNumber::integer(i64::MAX);
        assert_eq!(big.checked_add(big), Err(NumericError::Overflow));
        assert_eq!(
            RealNumber::integer(i64::MIN).checked_sub(big),
            Err(NumericError::Underflow)
        );
        assert_eq!(RealNumber::integer(i64::MIN).negate(), Err(NumericError::Overflow));
        assert_eq!(RealNumber::integer(i64::MIN).abs(), Err(NumericError::Overflow));
        assert_eq!(
            approx("79228162514264337593543950335").checked_add(approx("1")),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_unary_operations() {
        assert_eq!(frac(2, 3).negate().unwrap(), frac(-2, 3));
        assert_eq!(approx("2.5").negate().unwrap(), approx("-2.5"));
        assert_eq!(frac(-2, 3).inverse().unwrap(), frac(3, -2));
        assert_eq!(approx("4").inverse().unwrap(), approx("0.25"));
        assert_eq!(frac(-2, 3).abs().unwrap(), frac(2, 3));
        assert_eq!(approx("-2.5").abs().unwrap(), approx("2.5"));
    }

    #[test]
    fn test_operators() {
        let third = frac(1, 3);
        assert_eq!(third + third, Ok(frac(6, 9)));
        assert_eq!(third - frac(1, 2), Ok(frac(-1, 6)));
        assert_eq!(third * frac(3, 4), Ok(frac(3, 12)));
        assert_eq!(third / frac(2, 5), Ok(frac(5, 6)));
        assert_eq!(-third, Ok(frac(-1, 3)));

        assert_eq!(approx("1.5") + frac(1, 2), Ok(approx("2.0")));
        assert_eq!(-approx("1.5"), Ok(approx("-1.5")));

        assert_eq!(third / RealNumber::zero(), Err(NumericError::DivisionByZero));
        assert_eq!(
            RealNumber::integer(i64::MAX) * RealNumber::integer(2),
            Err(NumericError::Overflow)
        );

        // chains propagate through ?
        let chained = || -> NumericResult<RealNumber> { (third + third)? * frac(3, 2) };
        assert_eq!(chained().unwrap().simplify().unwrap(), RealNumber::one());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(approx("7.9").as_fraction().unwrap(), frac(7, 1));
        assert_eq!(approx("-7.9").as_fraction().unwrap(), frac(-7, 1));
        assert_eq!(frac(3, 4).as_fraction().unwrap(), frac(3, 4));
        assert_eq!(frac(3, 4).as_approximate().unwrap(), approx("0.75"));
        assert_eq!(
            approx("100000000000000000000").as_fraction(),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_simplify() {
        assert_eq!(frac(6, 9).simplify().unwrap(), frac(2, 3));
        assert_eq!(frac(6, -9).simplify().unwrap(), frac(-2, 3));
        assert_eq!(frac(-6, -9).simplify().unwrap(), frac(2, 3));
        assert_eq!(frac(0, 7).simplify().unwrap(), frac(0, 1));
        assert_eq!(approx("0.5").simplify().unwrap(), approx("0.5"));
        assert_eq!(frac(i64::MIN, -1).simplify(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_predicates() {
        assert!(frac(0, 3).is_zero());
        assert!(frac(1, -3).is_negative());
        assert!(!frac(-1, -3).is_negative());
        assert!(approx("-0.1").is_negative());
        assert!(!approx("0").is_negative());
        assert!(frac(1, 3).is_fraction());
    }

    #[test]
    fn test_approx_eq() {
        assert!(frac(1, 2).approx_eq(frac(2, 4), Decimal::ZERO).unwrap());
        assert!(frac(1, 2).approx_eq(approx("0.5"), tolerance()).unwrap());
        assert!(!frac(1, 3).approx_eq(approx("0.3"), tolerance()).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(frac(6, 9).to_string(), "6/9");
        assert_eq!(frac(6, 9).to_string_with_precision(2), "6/9");
        assert_eq!(approx("2.5").to_string(), "2.500000");
        assert_eq!(format!("{:.3}", approx("0.3333333")), "0.333");
        assert_eq!(approx("0.6666666").to_string_with_precision(3), "0.667");
        assert_eq!(approx("-1.25").to_string_with_precision(1), "-1.3");
    }

    #[test]
    fn test_forced_projections() {
        assert_eq!(frac(2, 3).to_approximate_string(3).unwrap(), "0.667");
        assert_eq!(approx("7.25").to_fraction_string().unwrap(), "7/1");
        assert_eq!(frac(6, 9).to_fraction_string().unwrap(), "6/9");
        assert_eq!(approx("0.5").to_approximate_string(2).unwrap(), "0.50");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("6/9".parse::<RealNumber>().unwrap(), frac(6, 9));
        assert_eq!(" -4 ".parse::<RealNumber>().unwrap(), frac(-4, 1));
        assert_eq!("0.125".parse::<RealNumber>().unwrap(), approx("0.125"));
        assert_eq!("1/0".parse::<RealNumber>(), Err(NumericError::DivisionByZero));
        assert_eq!("abc".parse::<RealNumber>(), Err(NumericError::InvalidInput));
        assert_eq!("".parse::<RealNumber>(), Err(NumericError::InvalidInput));
        assert_eq!("1/x".parse::<RealNumber>(), Err(NumericError::InvalidInput));
    }
}
