// ============================================================================
// Linear Algebra Module
// Vectors of RealNumber and the geometry built on them
// ============================================================================
//
// This module provides:
// - RealVector: growable vector with checked element-wise arithmetic
// - Products and norms: dot, cross, norm, normalize
// - Geometry: angle, distance, projection, reflection, rotation, translation
//
// Every operation returns NumericResult; dimension problems are reported as
// DimensionMismatch or UnsupportedDimension instead of aborting.

mod geometry;
mod vector;

pub use vector::RealVector;
