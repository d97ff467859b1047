// ============================================================================
// Numeric Errors
// Error types for exact and approximate real-number arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during real-number and vector operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the representable maximum
    Overflow,
    /// Result below the representable minimum
    Underflow,
    /// Attempted division by (or inversion of) zero
    DivisionByZero,
    /// A fraction with a zero denominator was used as an operand
    DegenerateFraction,
    /// Argument lies outside the operation's domain (e.g. sqrt of a negative)
    OutOfDomain,
    /// Input string or value is invalid
    InvalidInput,
    /// Element-wise operation on vectors of different lengths
    DimensionMismatch { left: usize, right: usize },
    /// Operation defined only for a specific dimension
    UnsupportedDimension { expected: usize, found: usize },
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::DegenerateFraction => {
                write!(f, "degenerate fraction: denominator is zero")
            },
            NumericError::OutOfDomain => write!(f, "argument outside the domain of the operation"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::DimensionMismatch { left, right } => write!(
                f,
                "dimension mismatch: left operand has {} elements, right operand has {}",
                left, right
            ),
            NumericError::UnsupportedDimension { expected, found } => write!(
                f,
                "unsupported dimension: expected {} elements, found {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
