// ============================================================================
// Numeric Configuration
// Printing precision, exactness policy and comparison tolerance
// ============================================================================

use crate::linalg::RealVector;
use crate::numeric::{ExactnessPolicy, NumericError, NumericResult, RealNumber, DEFAULT_PRECISION};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of decimal places a `Decimal` can carry.
pub const MAX_PRECISION: u32 = 28;

/// Default tolerance for numeric comparisons (1e-12).
pub const DEFAULT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 12);

// ============================================================================
// Complete Numeric Configuration
// ============================================================================

/// Settings shared by callers that print, compare or take roots of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumericConfig {
    /// Decimal places used when printing approximate values
    pub precision: u32,

    /// How roots, powers and exponentials treat exact operands
    pub policy: ExactnessPolicy,

    /// Largest absolute difference still considered equal
    pub tolerance: Decimal,
}

impl NumericConfig {
    /// Create a configuration with default precision, policy and tolerance
    pub fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            policy: ExactnessPolicy::default(),
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Builder method: Set printing precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set exactness policy
    pub fn with_policy(mut self, policy: ExactnessPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builder method: Set comparison tolerance
    pub fn with_tolerance(mut self, tolerance: Decimal) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        if self.precision > MAX_PRECISION {
            tracing::debug!(precision = self.precision, "precision exceeds decimal scale");
            return Err(NumericError::InvalidInput);
        }

        if self.tolerance.is_sign_negative() && !self.tolerance.is_zero() {
            tracing::debug!(tolerance = %self.tolerance, "negative tolerance");
            return Err(NumericError::InvalidInput);
        }

        Ok(())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Compare two values within the configured tolerance
    pub fn approx_eq(&self, a: RealNumber, b: RealNumber) -> NumericResult<bool> {
        a.approx_eq(b, self.tolerance)
    }

    /// Render a value at the configured precision
    pub fn format(&self, value: RealNumber) -> String {
        value.to_string_with_precision(self.precision)
    }

    /// Render a vector at the configured precision
    pub fn format_vector(&self, vector: &RealVector) -> String {
        vector.to_string_with_precision(self.precision)
    }
}

impl Default for NumericConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl NumericConfig {
    /// Exact where possible, promote otherwise
    pub fn exact_first() -> Self {
        Self::new().with_policy(ExactnessPolicy::Promote)
    }

    /// Roots and powers applied to numerator and denominator separately,
    /// each truncated to an integer
    pub fn legacy_element_wise() -> Self {
        Self::new().with_policy(ExactnessPolicy::ElementWise)
    }

    /// Default settings printing `precision` decimal places
    pub fn display(precision: u32) -> Self {
        Self::new().with_precision(precision)
    }
}
