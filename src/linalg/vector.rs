// ============================================================================
// Real Vector
// Growable sequence of RealNumber with element-wise and geometric operations
// ============================================================================

use crate::numeric::{ExactnessPolicy, NumericError, NumericResult, RealNumber};
use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Build a [`RealVector`] of approximate values.
///
/// Accepts anything convertible to `Decimal` (integers, `f64`). Evaluates to
/// `NumericResult<RealVector>` because floats such as NaN are rejected.
///
/// # Example
/// ```
/// use linear_algebra::realvec;
///
/// let v = realvec![1.0, 2.0, 3.0]?;
/// assert_eq!(format!("{:.1}", v), "[1.0, 2.0, 3.0]");
/// # Ok::<(), linear_algebra::numeric::NumericError>(())
/// ```
#[macro_export]
macro_rules! realvec {
    () => {
        ::core::result::Result::<$crate::linalg::RealVector, $crate::numeric::NumericError>::Ok(
            $crate::linalg::RealVector::new(),
        )
    };
    ($($x:expr),+ $(,)?) => {
        $crate::linalg::RealVector::from_approximations([$($x),+])
    };
}

/// An ordered, growable sequence of real numbers.
///
/// Elements are owned by value. `Clone` is a deep copy. Operations that
/// combine two vectors require equal lengths and report
/// [`NumericError::DimensionMismatch`] otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RealVector {
    elements: Vec<RealNumber>,
}

impl RealVector {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an empty vector.
    #[inline]
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Create an empty vector with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Create a vector of `len` exact zeros. Capacity equals length.
    pub fn zeros(len: usize) -> Self {
        let mut elements = Vec::with_capacity(len);
        elements.resize(len, RealNumber::zero());
        Self { elements }
    }

    /// Wrap existing elements.
    #[inline]
    pub fn from_elements(elements: Vec<RealNumber>) -> Self {
        Self { elements }
    }

    /// Build from values, each wrapped as an approximate element.
    ///
    /// # Errors
    /// Returns `InvalidInput` if a value has no decimal representation
    /// (NaN, infinities, out of range).
    pub fn from_approximations<I, T>(values: I) -> NumericResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: TryInto<Decimal>,
    {
        values
            .into_iter()
            .map(|value| {
                value
                    .try_into()
                    .map(RealNumber::Approximate)
                    .map_err(|_| NumericError::InvalidInput)
            })
            .collect()
    }

    /// Build from integers, each wrapped as an exact `n/1`.
    pub fn from_integers<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        values.into_iter().map(RealNumber::integer).collect()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Number of elements, in geometric terms.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Allocated element slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<RealNumber> {
        self.elements.get(index).copied()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, RealNumber> {
        self.elements.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[RealNumber] {
        &self.elements
    }

    // ========================================================================
    // Growth
    // ========================================================================

    /// Append one element, doubling capacity when storage is full.
    pub fn push(&mut self, value: RealNumber) {
        let capacity = self.elements.capacity();
        if self.elements.len() == capacity {
            self.elements.reserve_exact(capacity.max(1));
            tracing::trace!(
                from = capacity,
                to = self.elements.capacity(),
                "vector storage grown"
            );
        }
        self.elements.push(value);
    }

    // ========================================================================
    // Element-wise Operations
    // ========================================================================

    /// Fail with `DimensionMismatch` unless both vectors have the same length.
    pub(crate) fn ensure_same_dimension(&self, other: &Self) -> NumericResult<()> {
        if self.len() != other.len() {
            tracing::debug!(
                left = self.len(),
                right = other.len(),
                "vector dimension mismatch"
            );
            return Err(NumericError::DimensionMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }

    /// Fail with `UnsupportedDimension` unless the vector has `expected` elements.
    pub(crate) fn ensure_dimension(&self, expected: usize) -> NumericResult<()> {
        if self.len() != expected {
            tracing::debug!(expected, found = self.len(), "unsupported vector dimension");
            return Err(NumericError::UnsupportedDimension {
                expected,
                found: self.len(),
            });
        }
        Ok(())
    }

    fn zip_with(
        &self,
        other: &Self,
        op: impl Fn(RealNumber, RealNumber) -> NumericResult<RealNumber>,
    ) -> NumericResult<Self> {
        self.ensure_same_dimension(other)?;
        self.elements
            .iter()
            .zip(&other.elements)
            .map(|(&a, &b)| op(a, b))
            .collect()
    }

    fn map(&self, op: impl Fn(RealNumber) -> NumericResult<RealNumber>) -> NumericResult<Self> {
        self.elements.iter().map(|&a| op(a)).collect()
    }

    /// Element-wise sum.
    pub fn checked_add(&self, other: &Self) -> NumericResult<Self> {
        self.zip_with(other, RealNumber::checked_add)
    }

    /// Element-wise difference.
    pub fn checked_sub(&self, other: &Self) -> NumericResult<Self> {
        self.zip_with(other, RealNumber::checked_sub)
    }

    /// Multiply every element by `scalar`.
    pub fn checked_mul_scalar(&self, scalar: RealNumber) -> NumericResult<Self> {
        self.map(|a| a.checked_mul(scalar))
    }

    /// Divide every element by `scalar`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `scalar` is zero.
    pub fn checked_div_scalar(&self, scalar: RealNumber) -> NumericResult<Self> {
        self.map(|a| a.checked_div(scalar))
    }

    /// Force every element into approximate form.
    pub fn as_approximate(&self) -> NumericResult<Self> {
        self.map(RealNumber::as_approximate)
    }

    /// Force every element into fraction form (truncating approximate ones).
    pub fn as_fraction(&self) -> NumericResult<Self> {
        self.map(RealNumber::as_fraction)
    }

    /// Reduce every exact element to lowest terms.
    pub fn simplify(&self) -> NumericResult<Self> {
        self.map(RealNumber::simplify)
    }

    // ========================================================================
    // Products and Norms
    // ========================================================================

    /// Dot product, accumulated from an exact zero.
    pub fn dot(&self, other: &Self) -> NumericResult<RealNumber> {
        self.ensure_same_dimension(other)?;
        self.elements
            .iter()
            .zip(&other.elements)
            .try_fold(RealNumber::zero(), |sum, (&a, &b)| {
                sum.checked_add(a.checked_mul(b)?)
            })
    }

    /// Euclidean norm using the default [`ExactnessPolicy`].
    ///
    /// An all-exact vector has an exact norm only when its squared length is
    /// a perfect square of a fraction, e.g. `|(3, 4)| = 5/1`.
    pub fn norm(&self) -> NumericResult<RealNumber> {
        self.norm_with(ExactnessPolicy::default())
    }

    /// Euclidean norm: `sqrt(self · self)`.
    pub fn norm_with(&self, policy: ExactnessPolicy) -> NumericResult<RealNumber> {
        self.dot(self)?.sqrt_with(policy)
    }

    /// Scale to unit length.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for the zero vector.
    pub fn normalize(&self) -> NumericResult<Self> {
        let norm = self.norm()?;
        self.checked_div_scalar(norm)
    }

    /// Cross product of two 3-element vectors.
    ///
    /// # Errors
    /// Returns `UnsupportedDimension` unless both operands have 3 elements.
    pub fn cross(&self, other: &Self) -> NumericResult<Self> {
        self.ensure_dimension(3)?;
        other.ensure_dimension(3)?;
        let a = &self.elements;
        let b = &other.elements;
        let component = |i: usize, j: usize| -> NumericResult<RealNumber> {
            a[i].checked_mul(b[j])?.checked_sub(a[j].checked_mul(b[i])?)
        };
        Ok(Self::from_elements(vec![
            component(1, 2)?,
            component(2, 0)?,
            component(0, 1)?,
        ]))
    }

    // ========================================================================
    // Printing
    // ========================================================================

    /// Render as `[a, b, ...]` with approximate elements at `precision` places.
    pub fn to_string_with_precision(&self, precision: u32) -> String {
        format!("{:.*}", precision as usize, self)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl FromIterator<RealNumber> for RealVector {
    fn from_iter<I: IntoIterator<Item = RealNumber>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RealVector {
    type Item = RealNumber;
    type IntoIter = std::vec::IntoIter<RealNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a RealVector {
    type Item = &'a RealNumber;
    type IntoIter = std::slice::Iter<'a, RealNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl Index<usize> for RealVector {
    type Output = RealNumber;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl From<Vec<RealNumber>> for RealVector {
    fn from(elements: Vec<RealNumber>) -> Self {
        Self::from_elements(elements)
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Neg for &RealVector {
    type Output = NumericResult<RealVector>;

    fn neg(self) -> Self::Output {
        self.map(RealNumber::negate)
    }
}

impl Add for &RealVector {
    type Output = NumericResult<RealVector>;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl Sub for &RealVector {
    type Output = NumericResult<RealVector>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl Mul<RealNumber> for &RealVector {
    type Output = NumericResult<RealVector>;

    fn mul(self, scalar: RealNumber) -> Self::Output {
        self.checked_mul_scalar(scalar)
    }
}

impl Div<RealNumber> for &RealVector {
    type Output = NumericResult<RealVector>;

    fn div(self, scalar: RealNumber) -> Self::Output {
        self.checked_div_scalar(scalar)
    }
}

impl fmt::Display for RealVector {
    /// `{:.p}` is forwarded to every element.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match f.precision() {
                Some(precision) => write!(f, "{:.*}", precision, element)?,
                None => write!(f, "{}", element)?,
            }
        }
        write!(f, "]")
    }
}

// ============================================================================
// Tests
// ============================================================================
