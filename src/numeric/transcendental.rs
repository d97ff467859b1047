// ============================================================================
// Transcendental Operations
// Powers, roots and exponentials with a configurable exactness policy
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::real_number::{checked_parts, reduced_parts, truncate, RealNumber};
use rust_decimal::prelude::{FromPrimitive, MathematicalOps, ToPrimitive};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound on Newton steps for decimal cube roots.
const CBRT_ITERATIONS: usize = 8;

/// Upper bound on Newton steps when refining an arc-cosine.
const ACOS_ITERATIONS: usize = 4;

/// Below this distance from ±1 an `f64` arc-cosine seed rounds to an endpoint.
const ACOS_ENDPOINT_GAP: Decimal = Decimal::from_parts(1, 0, 0, false, 12);

/// How roots, powers and exponentials treat an exact operand.
///
/// Approximate operands always produce approximate results; the policy only
/// decides what happens when every operand is a `Fraction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExactnessPolicy {
    /// Reduce first, return an exact fraction when numerator and denominator
    /// are perfect powers of the right kind, otherwise promote to an
    /// approximate result of the true quotient.
    #[default]
    Promote,

    /// Apply the operation to numerator and denominator separately and
    /// truncate each result back to an integer.
    ///
    /// Only meaningful for perfect powers: `sqrt(2/3)` becomes `1/1`.
    ElementWise,
}

// ============================================================================
// Decimal Kernels
// ============================================================================

/// Snap `root` to the nearest integer when that integer is the exact root.
fn snap_to_integer(root: Decimal, radicand: Decimal, degree: u32) -> Decimal {
    let nearest = root.round();
    let mut power = Some(Decimal::ONE);
    for _ in 0..degree {
        power = power.and_then(|acc| acc.checked_mul(nearest));
    }
    if power == Some(radicand) {
        nearest
    } else {
        root
    }
}

fn decimal_sqrt(value: Decimal) -> NumericResult<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(NumericError::OutOfDomain);
    }
    let root = value.sqrt().ok_or(NumericError::OutOfDomain)?;
    Ok(snap_to_integer(root, value, 2))
}

/// Cube root by Newton iteration, seeded from `f64`.
fn decimal_cbrt(value: Decimal) -> NumericResult<Decimal> {
    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }
    let magnitude = value.abs();
    let mut root = magnitude
        .to_f64()
        .map(f64::cbrt)
        .and_then(Decimal::from_f64)
        .ok_or(NumericError::Overflow)?;
    if root.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let two = Decimal::TWO;
    let three = Decimal::from(3);
    for _ in 0..CBRT_ITERATIONS {
        let square = root.checked_mul(root).ok_or(NumericError::Overflow)?;
        let next = root
            .checked_mul(two)
            .and_then(|doubled| {
                magnitude
                    .checked_div(square)
                    .and_then(|q| doubled.checked_add(q))
            })
            .and_then(|sum| sum.checked_div(three))
            .ok_or(NumericError::Overflow)?;
        if next == root {
            break;
        }
        root = next;
    }

    let root = snap_to_integer(root, magnitude, 3);
    Ok(if value.is_sign_negative() { -root } else { root })
}

/// `e^value`. Large negative arguments fall below the smallest decimal step
/// and give zero.
fn decimal_exp(value: Decimal) -> NumericResult<Decimal> {
    match value.checked_exp() {
        Some(result) => Ok(result),
        None if value.is_sign_negative() => Ok(Decimal::ZERO),
        None => Err(NumericError::Overflow),
    }
}

/// `base^exponent` for decimals. Integer exponents use repeated
/// multiplication; fractional exponents need a non-negative base.
fn decimal_pow(base: Decimal, exponent: Decimal) -> NumericResult<Decimal> {
    if exponent.is_zero() {
        return Ok(Decimal::ONE);
    }
    if base.is_zero() {
        return if exponent.is_sign_negative() {
            Err(NumericError::DivisionByZero)
        } else {
            Ok(Decimal::ZERO)
        };
    }
    if exponent.fract().is_zero() {
        if let Some(power) = exponent.to_i64() {
            return base.checked_powi(power).ok_or(NumericError::Overflow);
        }
    }
    if base.is_sign_negative() {
        return Err(NumericError::OutOfDomain);
    }
    base.checked_powd(exponent).ok_or(NumericError::Overflow)
}

/// `(n/d)^(p/q)` when no exact answer exists. Negative bases are accepted
/// for odd `q`, where the real root is well defined.
fn rational_pow_approx(n: i64, d: i64, p: i64, q: i64) -> NumericResult<Decimal> {
    let base = RealNumber::integer(n)
        .checked_div(RealNumber::integer(d))?
        .to_decimal()?;
    let exponent = Decimal::from(p)
        .checked_div(Decimal::from(q))
        .ok_or(NumericError::Overflow)?;
    if base.is_sign_negative() && q % 2 == 1 {
        let magnitude = decimal_pow(base.abs(), exponent)?;
        return Ok(if p % 2 != 0 { -magnitude } else { magnitude });
    }
    decimal_pow(base, exponent)
}

/// Exact integer `degree`-th root of `value`, if it has one.
fn integer_root(value: i64, degree: u32) -> Option<i64> {
    match degree {
        0 => return None,
        1 => return Some(value),
        _ => {},
    }
    if value < 0 && degree % 2 == 0 {
        return None;
    }
    let magnitude = value.unsigned_abs();
    let estimate = (magnitude as f64).powf(1.0 / degree as f64).round() as u64;
    let root = (estimate.saturating_sub(1)..=estimate.saturating_add(1))
        .find(|candidate| candidate.checked_pow(degree) == Some(magnitude))?;
    let root = i64::try_from(root).ok()?;
    Some(if value < 0 { -root } else { root })
}

/// Apply `op` to numerator and denominator independently, truncating both.
fn element_wise(
    numerator: i64,
    denominator: i64,
    op: impl Fn(Decimal) -> NumericResult<Decimal>,
) -> NumericResult<RealNumber> {
    let (numerator, denominator) = checked_parts(numerator, denominator)?;
    let numerator = truncate(op(Decimal::from(numerator))?)?;
    let denominator = truncate(op(Decimal::from(denominator))?)?;
    RealNumber::fraction(numerator, denominator)
}

/// Exact root of a reduced fraction, when both parts are perfect powers.
fn exact_root(numerator: i64, denominator: i64, degree: u32) -> Option<RealNumber> {
    let numerator = integer_root(numerator, degree)?;
    let denominator = integer_root(denominator, degree)?;
    Some(RealNumber::Fraction {
        numerator,
        denominator,
    })
}

// ============================================================================
// Trigonometry (used by vector geometry)
// ============================================================================

pub(crate) fn sin(angle: Decimal) -> NumericResult<Decimal> {
    angle.checked_sin().ok_or(NumericError::Overflow)
}

pub(crate) fn cos(angle: Decimal) -> NumericResult<Decimal> {
    angle.checked_cos().ok_or(NumericError::Overflow)
}

/// Arc-cosine in radians. The input is clamped to `[-1, 1]`.
///
/// Within `ACOS_ENDPOINT_GAP` of ±1 the series
/// `acos(1 - g) = sqrt(2g)(1 + g/12 + O(g²))` is used directly. Elsewhere the
/// `f64` arc-cosine is refined by Newton steps on `cos(θ) - x`.
pub(crate) fn acos(cosine: Decimal) -> NumericResult<Decimal> {
    let cosine = cosine.clamp(-Decimal::ONE, Decimal::ONE);
    if cosine == Decimal::ONE {
        return Ok(Decimal::ZERO);
    }
    if cosine == -Decimal::ONE {
        return Ok(Decimal::PI);
    }

    let gap = Decimal::ONE - cosine.abs();
    if gap < ACOS_ENDPOINT_GAP {
        let offset = decimal_sqrt(gap * Decimal::TWO)? * (Decimal::ONE + gap / Decimal::from(12));
        return Ok(if cosine.is_sign_negative() {
            Decimal::PI - offset
        } else {
            offset
        });
    }

    let mut angle = cosine
        .to_f64()
        .map(f64::acos)
        .and_then(Decimal::from_f64)
        .ok_or(NumericError::InvalidInput)?;
    for _ in 0..ACOS_ITERATIONS {
        let sine = sin(angle)?;
        if sine.is_zero() {
            break;
        }
        let step = cos(angle)?
            .checked_sub(cosine)
            .and_then(|delta| delta.checked_div(sine))
            .ok_or(NumericError::Overflow)?;
        if step.is_zero() {
            break;
        }
        angle = angle.checked_add(step).ok_or(NumericError::Overflow)?;
    }
    Ok(angle)
}

// ============================================================================
// RealNumber Operations
// ============================================================================

impl RealNumber {
    /// Raise to a power using the default [`ExactnessPolicy`].
    pub fn pow(self, exponent: Self) -> NumericResult<Self> {
        self.pow_with(exponent, ExactnessPolicy::default())
    }

    /// Raise to a power.
    ///
    /// With `Promote`, an exact base and an exact exponent `p/q` give an
    /// exact result when `q == 1`, or when the base is a perfect `q`-th
    /// power. Negative `p` inverts the base.
    ///
    /// # Errors
    /// - `DivisionByZero` for zero raised to a negative power
    /// - `OutOfDomain` for a negative base with an even-root exponent
    /// - `Overflow` if the result leaves the representable range
    pub fn pow_with(self, exponent: Self, policy: ExactnessPolicy) -> NumericResult<Self> {
        match (self, exponent) {
            (
                Self::Fraction {
                    numerator,
                    denominator,
                },
                Self::Fraction { .. },
            ) => match policy {
                ExactnessPolicy::Promote => exact_pow(numerator, denominator, exponent),
                ExactnessPolicy::ElementWise => {
                    let exponent = exponent.to_decimal()?;
                    element_wise(numerator, denominator, |part| decimal_pow(part, exponent))
                },
            },
            _ => {
                let base = self.to_decimal()?;
                let exponent = exponent.to_decimal()?;
                decimal_pow(base, exponent).map(Self::Approximate)
            },
        }
    }

    /// Square root using the default [`ExactnessPolicy`].
    pub fn sqrt(self) -> NumericResult<Self> {
        self.sqrt_with(ExactnessPolicy::default())
    }

    /// Square root.
    ///
    /// `Promote` gives `sqrt(8/18) = 2/3` exactly and `sqrt(2/1)` approximately.
    /// Callers that always want the true root of a fraction can call
    /// [`RealNumber::as_approximate`] first.
    ///
    /// # Errors
    /// Returns `OutOfDomain` for negative values.
    pub fn sqrt_with(self, policy: ExactnessPolicy) -> NumericResult<Self> {
        match self {
            Self::Approximate(value) => decimal_sqrt(value).map(Self::Approximate),
            Self::Fraction {
                numerator,
                denominator,
            } => match policy {
                ExactnessPolicy::Promote => {
                    let (numerator, denominator) = reduced_parts(numerator, denominator)?;
                    if numerator < 0 {
                        return Err(NumericError::OutOfDomain);
                    }
                    if let Some(root) = exact_root(numerator, denominator, 2) {
                        return Ok(root);
                    }
                    tracing::trace!(numerator, denominator, "square root is irrational, promoting");
                    let quotient = Self::Fraction {
                        numerator,
                        denominator,
                    }
                    .to_decimal()?;
                    decimal_sqrt(quotient).map(Self::Approximate)
                },
                ExactnessPolicy::ElementWise => element_wise(numerator, denominator, decimal_sqrt),
            },
        }
    }

    /// Cube root using the default [`ExactnessPolicy`].
    pub fn cbrt(self) -> NumericResult<Self> {
        self.cbrt_with(ExactnessPolicy::default())
    }

    /// Cube root. Defined for negative values.
    pub fn cbrt_with(self, policy: ExactnessPolicy) -> NumericResult<Self> {
        match self {
            Self::Approximate(value) => decimal_cbrt(value).map(Self::Approximate),
            Self::Fraction {
                numerator,
                denominator,
            } => match policy {
                ExactnessPolicy::Promote => {
                    let (numerator, denominator) = reduced_parts(numerator, denominator)?;
                    if let Some(root) = exact_root(numerator, denominator, 3) {
                        return Ok(root);
                    }
                    tracing::trace!(numerator, denominator, "cube root is irrational, promoting");
                    let quotient = Self::Fraction {
                        numerator,
                        denominator,
                    }
                    .to_decimal()?;
                    decimal_cbrt(quotient).map(Self::Approximate)
                },
                ExactnessPolicy::ElementWise => element_wise(numerator, denominator, decimal_cbrt),
            },
        }
    }

    /// Natural exponential using the default [`ExactnessPolicy`].
    pub fn exp(self) -> NumericResult<Self> {
        self.exp_with(ExactnessPolicy::default())
    }

    /// Natural exponential. Under `Promote` only `exp(0) = 1/1` stays exact.
    pub fn exp_with(self, policy: ExactnessPolicy) -> NumericResult<Self> {
        match self {
            Self::Approximate(value) => decimal_exp(value).map(Self::Approximate),
            Self::Fraction {
                numerator,
                denominator,
            } => match policy {
                ExactnessPolicy::Promote => {
                    let (numerator, _) = checked_parts(numerator, denominator)?;
                    if numerator == 0 {
                        return Ok(Self::one());
                    }
                    decimal_exp(self.to_decimal()?).map(Self::Approximate)
                },
                ExactnessPolicy::ElementWise => element_wise(numerator, denominator, decimal_exp),
            },
        }
    }
}

fn exact_pow(numerator: i64, denominator: i64, exponent: RealNumber) -> NumericResult<RealNumber> {
    let (n, d) = reduced_parts(numerator, denominator)?;
    let (p, q) = match exponent {
        RealNumber::Fraction {
            numerator,
            denominator,
        } => reduced_parts(numerator, denominator)?,
        RealNumber::Approximate(_) => return Err(NumericError::InvalidInput),
    };

    if p == 0 {
        return Ok(RealNumber::one());
    }
    if n == 0 {
        return if p < 0 {
            Err(NumericError::DivisionByZero)
        } else {
            Ok(RealNumber::zero())
        };
    }

    let root = u32::try_from(q)
        .ok()
        .and_then(|degree| exact_root(n, d, degree));
    let (root_n, root_d) = match root {
        Some(RealNumber::Fraction {
            numerator,
            denominator,
        }) => (numerator, denominator),
        _ => {
            tracing::trace!(n, d, p, q, "power has no exact form, promoting");
            return rational_pow_approx(n, d, p, q).map(RealNumber::Approximate);
        },
    };

    // unit roots stay exact for any exponent
    if root_d == 1 && root_n.unsigned_abs() == 1 {
        let odd = p % 2 != 0;
        return Ok(RealNumber::integer(if root_n < 0 && odd { -1 } else { 1 }));
    }

    let raised = u32::try_from(p.unsigned_abs()).ok().and_then(|power| {
        Some((root_n.checked_pow(power)?, root_d.checked_pow(power)?))
    });
    let (raised_n, raised_d) = match raised {
        Some(parts) => parts,
        None => {
            tracing::trace!(n, d, p, q, "exact power leaves the i64 range, promoting");
            return rational_pow_approx(n, d, p, q).map(RealNumber::Approximate);
        },
    };
    if p < 0 {
        RealNumber::integer(raised_d).checked_div(RealNumber::integer(raised_n))?.simplify()
    } else {
        Ok(RealNumber::Fraction {
            numerator: raised_n,
            denominator: raised_d,
        })
    }
}
