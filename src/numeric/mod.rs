// ============================================================================
// Numeric Module
// Dual-representation real numbers: exact fractions or high-precision decimals
// ============================================================================
//
// This module provides:
// - RealNumber: exact `i64` fraction or approximate `Decimal`, promoting on demand
// - ExactnessPolicy: how roots, powers and exponentials treat exact operands
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - Exactness is kept as long as both operands are exact, lost monotonically
// - All arithmetic returns Result (no panics, no poisoned zero denominators)
// - Values are `Copy` and immutable; every operation returns a new value

mod errors;
mod real_number;
mod transcendental;

pub use errors::{NumericError, NumericResult};
pub use real_number::{RealKind, RealNumber, DEFAULT_PRECISION};
pub use transcendental::ExactnessPolicy;

pub(crate) use transcendental::{acos, cos, sin};
