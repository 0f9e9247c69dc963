//! Planes with canonical integer coefficients
//!
//! A plane is stored as the unique canonical tuple `(a, b, c, d)` of
//! `a·x + b·y + c·z + d = 0`: gcd-reduced integers with the first non-zero
//! normal component positive. Two mathematically identical planes, however
//! constructed, compare equal.

use super::normalize;
use super::point::Point3;
use super::vector::Vec3;
use crate::error::{KernelError, KernelResult};
use crate::exact::Rat;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tagged construction data for a plane
///
/// One variant per legal combination of defining data, so invalid field
/// combinations are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaneSpec {
    /// Direct coefficients of `a·x + b·y + c·z + d = 0`
    Coefficients { a: Rat, b: Rat, c: Rat, d: Rat },

    /// A point on the plane and a normal vector
    PointNormal { point: Point3, normal: Vec3 },

    /// Three non-collinear points on the plane
    ThreePoints { p: Point3, q: Point3, r: Point3 },
}

/// A plane in canonical form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Plane {
    coeffs: [i64; 4],
}

impl Plane {
    /// Build a plane from tagged construction data
    pub fn build(spec: &PlaneSpec) -> KernelResult<Plane> {
        match spec {
            PlaneSpec::Coefficients { a, b, c, d } => Self::from_coefficients(*a, *b, *c, *d),
            PlaneSpec::PointNormal { point, normal } => Self::from_point_normal(point, normal),
            PlaneSpec::ThreePoints { p, q, r } => Self::from_three_points(p, q, r),
        }
    }

    /// Canonicalize raw rational coefficients
    ///
    /// Fails with `InvalidGeometry` when `(a, b, c)` is the zero vector;
    /// the kernel never substitutes a default normal.
    pub fn from_coefficients(a: Rat, b: Rat, c: Rat, d: Rat) -> KernelResult<Plane> {
        use num_traits::Zero;
        if a.is_zero() && b.is_zero() && c.is_zero() {
            return Err(KernelError::InvalidGeometry(
                "plane normal is the zero vector".to_string(),
            ));
        }
        let ints = normalize::canonical_integer_tuple(&[a, b, c, d], 3);
        Ok(Plane {
            coeffs: [ints[0], ints[1], ints[2], ints[3]],
        })
    }

    /// Canonicalize integer coefficients
    pub fn from_integer_coefficients(a: i64, b: i64, c: i64, d: i64) -> KernelResult<Plane> {
        Self::from_coefficients(
            Rat::from_integer(a),
            Rat::from_integer(b),
            Rat::from_integer(c),
            Rat::from_integer(d),
        )
    }

    /// Plane through a point with a given normal
    pub fn from_point_normal(point: &Point3, normal: &Vec3) -> KernelResult<Plane> {
        if normal.is_zero() {
            return Err(KernelError::InvalidGeometry(
                "plane normal is the zero vector".to_string(),
            ));
        }
        let d = -normal.dot(&point.as_vector());
        Self::from_coefficients(normal.x, normal.y, normal.z, d)
    }

    /// Plane through three non-collinear points
    pub fn from_three_points(p: &Point3, q: &Point3, r: &Point3) -> KernelResult<Plane> {
        let normal = q.sub(p).cross(&r.sub(p));
        if normal.is_zero() {
            return Err(KernelError::InvalidGeometry(
                "three defining points are collinear".to_string(),
            ));
        }
        Self::from_point_normal(p, &normal)
    }

    /// Coefficient `a`
    pub fn a(&self) -> i64 {
        self.coeffs[0]
    }

    /// Coefficient `b`
    pub fn b(&self) -> i64 {
        self.coeffs[1]
    }

    /// Coefficient `c`
    pub fn c(&self) -> i64 {
        self.coeffs[2]
    }

    /// Coefficient `d`
    pub fn d(&self) -> i64 {
        self.coeffs[3]
    }

    /// The canonical coefficient tuple
    pub fn coefficients(&self) -> [i64; 4] {
        self.coeffs
    }

    /// The canonical normal vector
    pub fn normal(&self) -> Vec3 {
        Vec3::from_integers(self.coeffs[0], self.coeffs[1], self.coeffs[2])
    }

    /// Squared norm of the canonical normal
    pub fn norm_squared(&self) -> i64 {
        self.coeffs[0] * self.coeffs[0]
            + self.coeffs[1] * self.coeffs[1]
            + self.coeffs[2] * self.coeffs[2]
    }

    /// Evaluate `a·x + b·y + c·z + d` at a point
    pub fn eval(&self, point: &Point3) -> Rat {
        Rat::from_integer(self.coeffs[0]) * point.x
            + Rat::from_integer(self.coeffs[1]) * point.y
            + Rat::from_integer(self.coeffs[2]) * point.z
            + Rat::from_integer(self.coeffs[3])
    }

    /// Check whether a point lies on the plane
    pub fn contains(&self, point: &Point3) -> bool {
        use num_traits::Zero;
        self.eval(point).is_zero()
    }

    /// The parallel plane with the same normal and a different offset
    pub fn with_offset(&self, d: Rat) -> KernelResult<Plane> {
        Self::from_coefficients(
            Rat::from_integer(self.coeffs[0]),
            Rat::from_integer(self.coeffs[1]),
            Rat::from_integer(self.coeffs[2]),
            d,
        )
    }
}

// Serialized as the bare canonical tuple; deserialization re-validates and
// re-canonicalizes so hand-edited input cannot break the invariant.
impl Serialize for Plane {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.coeffs.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Plane {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let coeffs = <[i64; 4]>::deserialize(deserializer)?;
        Plane::from_integer_coefficients(coeffs[0], coeffs[1], coeffs[2], coeffs[3])
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_uniqueness_under_scaling() {
        let base = Plane::from_integer_coefficients(2, -4, 6, 8).unwrap();
        for k in [-3i64, -1, 2, 5] {
            let scaled =
                Plane::from_integer_coefficients(2 * k, -4 * k, 6 * k, 8 * k).unwrap();
            assert_eq!(base, scaled, "scale {} must canonicalize identically", k);
        }
    }

    #[test]
    fn test_leading_sign_convention() {
        let plane = Plane::from_integer_coefficients(-1, -1, -1, 6).unwrap();
        assert_eq!(plane.coefficients(), [1, 1, 1, -6]);
    }

    #[test]
    fn test_zero_normal_rejected() {
        let err = Plane::from_integer_coefficients(0, 0, 0, 5).unwrap_err();
        assert!(matches!(err, KernelError::InvalidGeometry(_)));
    }

    #[test]
    fn test_point_normal_construction() {
        // Through (1, 1, 1) with normal (1, 1, 1): x + y + z - 3 = 0
        let plane = Plane::from_point_normal(
            &Point3::from_integers(1, 1, 1),
            &Vec3::from_integers(1, 1, 1),
        )
        .unwrap();
        assert_eq!(plane.coefficients(), [1, 1, 1, -3]);
    }

    #[test]
    fn test_point_normal_zero_normal_rejected() {
        let err =
            Plane::from_point_normal(&Point3::origin(), &Vec3::zero()).unwrap_err();
        assert!(matches!(err, KernelError::InvalidGeometry(_)));
    }

    #[test]
    fn test_three_points_construction() {
        let plane = Plane::from_three_points(
            &Point3::from_integers(1, 0, 0),
            &Point3::from_integers(0, 1, 0),
            &Point3::from_integers(0, 0, 1),
        )
        .unwrap();
        assert_eq!(plane.coefficients(), [1, 1, 1, -1]);
    }

    #[test]
    fn test_collinear_points_rejected() {
        let err = Plane::from_three_points(
            &Point3::from_integers(0, 0, 0),
            &Point3::from_integers(1, 1, 1),
            &Point3::from_integers(2, 2, 2),
        )
        .unwrap_err();
        assert!(matches!(err, KernelError::InvalidGeometry(_)));
    }

    #[test]
    fn test_same_plane_different_constructions() {
        let from_coeffs = Plane::from_integer_coefficients(1, 1, 1, -3).unwrap();
        let from_points = Plane::from_three_points(
            &Point3::from_integers(3, 0, 0),
            &Point3::from_integers(0, 3, 0),
            &Point3::from_integers(0, 0, 3),
        )
        .unwrap();
        assert_eq!(from_coeffs, from_points);
    }

    #[test]
    fn test_rational_coefficients_cleared() {
        let plane = Plane::from_coefficients(
            Rat::new(1, 2),
            Rat::new(1, 2),
            Rat::new(1, 2),
            Rat::from_integer(-3),
        )
        .unwrap();
        assert_eq!(plane.coefficients(), [1, 1, 1, -6]);
    }

    #[test]
    fn test_eval_and_contains() {
        let plane = Plane::from_integer_coefficients(1, 1, 1, -6).unwrap();
        assert_eq!(
            plane.eval(&Point3::origin()),
            Rat::from_integer(-6)
        );
        assert!(plane.contains(&Point3::from_integers(1, 2, 3)));
    }

    #[test]
    fn test_build_from_spec_variants() {
        let spec = PlaneSpec::PointNormal {
            point: Point3::from_integers(0, 0, 3),
            normal: Vec3::from_integers(0, 0, 2),
        };
        let plane = Plane::build(&spec).unwrap();
        assert_eq!(plane.coefficients(), [0, 0, 1, -3]);
    }

    #[test]
    fn test_serde_rejects_zero_normal() {
        let err = serde_json::from_str::<Plane>("[0,0,0,1]");
        assert!(err.is_err());
    }

    #[test]
    fn test_serde_round_trip_recanonicalizes() {
        let plane = Plane::from_integer_coefficients(1, 1, 1, -6).unwrap();
        let json = serde_json::to_string(&plane).unwrap();
        assert_eq!(json, "[1,1,1,-6]");
        let back: Plane = serde_json::from_str("[-2,-2,-2,12]").unwrap();
        assert_eq!(back, plane);
    }
}
