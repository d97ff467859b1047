// ============================================================================
// Vector Geometry
// Angles, distances, projections and rotations on RealVector
// ============================================================================

use super::RealVector;
use crate::numeric::{acos, cos, sin, NumericError, NumericResult, RealNumber};

/// Unit vector along coordinate `axis` of 3-space.
fn basis(axis: usize) -> RealVector {
    (0..3)
        .map(|i| RealNumber::integer(i64::from(i == axis)))
        .collect()
}

impl RealVector {
    /// Angle between two vectors in radians, always approximate.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` for unequal lengths and `DivisionByZero`
    /// when either vector has zero length.
    pub fn angle(&self, other: &Self) -> NumericResult<RealNumber> {
        self.ensure_same_dimension(other)?;
        let lengths = self.norm()?.checked_mul(other.norm()?)?;
        if lengths.is_zero() {
            tracing::debug!("angle with a zero-length vector");
            return Err(NumericError::DivisionByZero);
        }
        let cosine = self.dot(other)?.checked_div(lengths)?.to_decimal()?;
        acos(cosine).map(RealNumber::Approximate)
    }

    /// Euclidean distance `|self - other|`.
    pub fn distance(&self, other: &Self) -> NumericResult<RealNumber> {
        self.checked_sub(other)?.norm()
    }

    /// Component of `self` along `onto`: `(self·onto / onto·onto) onto`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `onto` is the zero vector.
    pub fn project(&self, onto: &Self) -> NumericResult<Self> {
        let scale = self.dot(onto)?.checked_div(onto.dot(onto)?)?;
        onto.checked_mul_scalar(scale)
    }

    /// Component of `self` orthogonal to `from`.
    pub fn reject(&self, from: &Self) -> NumericResult<Self> {
        self.checked_sub(&self.project(from)?)
    }

    /// Mirror across the hyperplane orthogonal to `normal`.
    pub fn reflect(&self, normal: &Self) -> NumericResult<Self> {
        let twice = self
            .project(normal)?
            .checked_mul_scalar(RealNumber::integer(2))?;
        self.checked_sub(&twice)
    }

    /// Rotate a 3-vector by `angle` radians about `axis` (right-hand rule).
    ///
    /// Uses Rodrigues' formula with `k = axis / |axis|`:
    /// `v cosθ + (k × v) sinθ + k (k·v)(1 - cosθ)`.
    ///
    /// # Errors
    /// Returns `UnsupportedDimension` unless both vectors have 3 elements and
    /// `DivisionByZero` for a zero axis.
    pub fn rotate(&self, axis: &Self, angle: RealNumber) -> NumericResult<Self> {
        self.ensure_dimension(3)?;
        axis.ensure_dimension(3)?;
        let k = axis.normalize()?;

        let theta = angle.to_decimal()?;
        let cos_theta = RealNumber::Approximate(cos(theta)?);
        let sin_theta = RealNumber::Approximate(sin(theta)?);
        let versine = RealNumber::one().checked_sub(cos_theta)?;

        let along = k.dot(self)?.checked_mul(versine)?;
        self.checked_mul_scalar(cos_theta)?
            .checked_add(&k.cross(self)?.checked_mul_scalar(sin_theta)?)?
            .checked_add(&k.checked_mul_scalar(along)?)
    }

    /// Rotate a 3-vector about the x axis.
    pub fn rotate_x(&self, angle: RealNumber) -> NumericResult<Self> {
        self.rotate(&basis(0), angle)
    }

    /// Rotate a 3-vector about the y axis.
    pub fn rotate_y(&self, angle: RealNumber) -> NumericResult<Self> {
        self.rotate(&basis(1), angle)
    }

    /// Rotate a 3-vector about the z axis.
    pub fn rotate_z(&self, angle: RealNumber) -> NumericResult<Self> {
        self.rotate(&basis(2), angle)
    }

    /// Shift a point by `offset`.
    pub fn translate(&self, offset: &Self) -> NumericResult<Self> {
        self.checked_add(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::realvec;
    use rust_decimal::Decimal;

    fn tolerance() -> Decimal {
        Decimal::new(1, 9)
    }

    fn half_pi() -> RealNumber {
        RealNumber::Approximate(Decimal::PI / Decimal::TWO)
    }

    fn assert_close(actual: &RealVector, expected: &[i64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, &e) in actual.iter().zip(expected) {
            assert!(
                a.approx_eq(RealNumber::integer(e), tolerance()).unwrap(),
                "{} != {}",
                actual,
                e
            );
        }
    }

    #[test]
    fn test_angle() {
        let x = RealVector::from_integers([1, 0, 0]);
        let y = RealVector::from_integers([0, 1, 0]);

        let right = x.angle(&y).unwrap();
        assert!(right.is_approximate());
        assert!(right.approx_eq(half_pi(), tolerance()).unwrap());

        assert!(x.angle(&x).unwrap().is_zero());

        let opposite = RealVector::from_integers([-2, 0, 0]);
        assert_eq!(
            x.angle(&opposite).unwrap(),
            RealNumber::Approximate(Decimal::PI)
        );
    }

    #[test]
    fn test_angle_between_nearly_parallel_vectors() {
        let giga = 1_000_000_000;
        let a = RealVector::from_integers([giga, 0, 0]);
        let b = RealVector::from_integers([giga, 1, 0]);

        // atan(1e-9) = 1e-9 - 3.3e-28
        let angle = a.angle(&b).unwrap();
        assert!(!angle.is_zero());
        assert!(angle
            .approx_eq(RealNumber::Approximate(Decimal::new(1, 9)), Decimal::new(1, 15))
            .unwrap());

        let flipped = RealVector::from_integers([-giga, -1, 0]);
        let obtuse = a.angle(&flipped).unwrap();
        let expected = RealNumber::Approximate(Decimal::PI - Decimal::new(1, 9));
        assert!(obtuse.approx_eq(expected, Decimal::new(1, 15)).unwrap());
    }

    #[test]
    fn test_angle_errors() {
        let x = realvec![1, 0].unwrap();
        assert_eq!(
            x.angle(&RealVector::zeros(2)),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(
            x.angle(&RealVector::zeros(3)),
            Err(NumericError::DimensionMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn test_distance() {
        let origin = RealVector::zeros(2);
        let point = RealVector::from_integers([3, 4]);
        assert_eq!(origin.distance(&point).unwrap(), RealNumber::integer(5));
        assert!(point.distance(&point).unwrap().is_zero());
    }

    #[test]
    fn test_project_and_reject() {
        let v = RealVector::from_integers([2, 3]);
        let x = RealVector::from_integers([1, 0]);
        assert_eq!(v.project(&x).unwrap(), RealVector::from_integers([2, 0]));
        assert_eq!(v.reject(&x).unwrap(), RealVector::from_integers([0, 3]));

        assert_eq!(
            v.project(&RealVector::zeros(2)),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_reflect() {
        let v = RealVector::from_integers([1, -1]);
        let normal = RealVector::from_integers([0, 1]);
        assert_eq!(
            v.reflect(&normal).unwrap(),
            RealVector::from_integers([1, 1])
        );
    }

    #[test]
    fn test_rotate_about_coordinate_axes() {
        let x = RealVector::from_integers([1, 0, 0]);
        let y = RealVector::from_integers([0, 1, 0]);
        let z = RealVector::from_integers([0, 0, 1]);

        assert_close(&x.rotate_z(half_pi()).unwrap(), &[0, 1, 0]);
        assert_close(&y.rotate_x(half_pi()).unwrap(), &[0, 0, 1]);
        assert_close(&z.rotate_y(half_pi()).unwrap(), &[1, 0, 0]);
    }

    #[test]
    fn test_rotate_general_axis() {
        // a third of a turn about (1,1,1) cycles the coordinate axes
        let third_turn = RealNumber::Approximate(Decimal::PI * Decimal::TWO / Decimal::from(3));
        let axis = RealVector::from_integers([1, 1, 1]);
        let x = RealVector::from_integers([1, 0, 0]);
        assert_close(&x.rotate(&axis, third_turn).unwrap(), &[0, 1, 0]);

        // scaling the axis does not change the rotation
        let long_axis = RealVector::from_integers([0, 0, 7]);
        assert_close(&x.rotate(&long_axis, half_pi()).unwrap(), &[0, 1, 0]);

        // vectors on the axis are fixed
        assert_close(&axis.rotate(&axis, third_turn).unwrap(), &[1, 1, 1]);
    }

    #[test]
    fn test_rotate_errors() {
        let planar = RealVector::from_integers([1, 0]);
        assert_eq!(
            planar.rotate_z(half_pi()),
            Err(NumericError::UnsupportedDimension {
                expected: 3,
                found: 2
            })
        );

        let v = RealVector::from_integers([1, 0, 0]);
        assert_eq!(
            v.rotate(&RealVector::zeros(3), half_pi()),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_translate() {
        let p = RealVector::from_integers([1, 2, 3]);
        let offset = RealVector::from_integers([-1, 0, 1]);
        assert_eq!(
            p.translate(&offset).unwrap(),
            RealVector::from_integers([0, 2, 4])
        );
        assert!(p.translate(&RealVector::zeros(2)).is_err());
    }
}
