// ============================================================================
// Linear Algebra Library
// Exact-or-approximate real numbers and the vectors built from them
// ============================================================================

//! # Linear Algebra
//!
//! Vector arithmetic over a real number that stays an exact fraction for as
//! long as it can and falls back to a 28-digit decimal when it must.
//!
//! ## Features
//!
//! - **Dual representation**: `i64` fractions or `rust_decimal` approximations
//! - **Checked arithmetic**: overflow, zero denominators and domain errors are
//!   reported as [`numeric::NumericError`], never as panics or sentinel values
//! - **Vector geometry**: dot and cross products, norms, angles, projections,
//!   reflections and Rodrigues rotations
//! - **Configurable exactness** for roots, powers and exponentials
//!
//! ## Example
//!
//! ```rust
//! use linear_algebra::prelude::*;
//!
//! let a = RealVector::from_integers([1, 2, 3]);
//! let b = RealVector::from_integers([4, 5, 6]);
//!
//! assert_eq!(a.dot(&b)?, RealNumber::integer(32));
//! assert_eq!(a.cross(&b)?, RealVector::from_integers([-3, 6, -3]));
//!
//! let third = RealNumber::fraction(1, 3)?;
//! let sum = third.checked_add(third)?;
//! assert_eq!(sum.to_string(), "6/9");
//! assert_eq!(sum.simplify()?.to_string(), "2/3");
//!
//! let unit = a.as_approximate()?.normalize()?;
//! println!("{:.3}", unit); // [0.267, 0.535, 0.802]
//! # Ok::<(), NumericError>(())
//! ```

pub mod config;
pub mod linalg;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::NumericConfig;
    pub use crate::linalg::RealVector;
    pub use crate::numeric::{
        ExactnessPolicy, NumericError, NumericResult, RealKind, RealNumber,
    };
    pub use crate::realvec;
}
