//! Spheres with an exact squared radius
//!
//! The radius is kept squared for as long as possible so intermediate
//! results stay rational; an exact radius is only materialized on demand,
//! as an integer when the squared radius is a perfect square and as a
//! coefficient times a square root otherwise.

use super::point::Point3;
use crate::error::{KernelError, KernelResult};
use crate::exact::{ExactValue, Rat};
use num_traits::Signed;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A sphere given by its center and exact squared radius
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sphere {
    center: Point3,
    radius_squared: Rat,
}

#[derive(Serialize, Deserialize)]
struct RawSphere {
    center: Point3,
    radius_squared: Rat,
}

impl Sphere {
    /// Create a sphere; a negative squared radius is `InvalidGeometry`
    pub fn new(center: Point3, radius_squared: Rat) -> KernelResult<Sphere> {
        if radius_squared.is_negative() {
            return Err(KernelError::InvalidGeometry(
                "negative squared radius".to_string(),
            ));
        }
        Ok(Sphere {
            center,
            radius_squared,
        })
    }

    /// Sphere with an integer radius
    pub fn with_integer_radius(center: Point3, radius: i64) -> KernelResult<Sphere> {
        Self::new(center, Rat::from_integer(radius * radius))
    }

    /// The center point
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// The exact squared radius
    pub fn radius_squared(&self) -> Rat {
        self.radius_squared
    }

    /// The exact radius, materialized from the squared form
    pub fn radius(&self) -> ExactValue {
        ExactValue::sqrt_of_nonneg(self.radius_squared)
    }

    /// Check whether a point lies on the sphere surface
    pub fn contains(&self, point: &Point3) -> bool {
        point.sub(&self.center).norm_squared() == self.radius_squared
    }
}

impl Serialize for Sphere {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RawSphere {
            center: self.center,
            radius_squared: self.radius_squared,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Sphere {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawSphere::deserialize(deserializer)?;
        Sphere::new(raw.center, raw.radius_squared).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_squared_radius_rejected() {
        let err = Sphere::new(Point3::origin(), Rat::from_integer(-1)).unwrap_err();
        assert!(matches!(err, KernelError::InvalidGeometry(_)));
    }

    #[test]
    fn test_perfect_square_radius() {
        let sphere = Sphere::new(Point3::origin(), Rat::from_integer(25)).unwrap();
        assert_eq!(sphere.radius(), ExactValue::Integer(5));
    }

    #[test]
    fn test_irrational_radius_stays_symbolic() {
        let sphere = Sphere::new(Point3::origin(), Rat::from_integer(8)).unwrap();
        assert_eq!(sphere.radius().to_string(), "2√2");
    }

    #[test]
    fn test_contains_surface_point() {
        let sphere = Sphere::with_integer_radius(Point3::origin(), 5).unwrap();
        assert!(sphere.contains(&Point3::from_integers(3, 4, 0)));
        assert!(!sphere.contains(&Point3::from_integers(1, 1, 1)));
    }

    #[test]
    fn test_zero_radius_allowed() {
        let sphere = Sphere::new(Point3::origin(), Rat::from_integer(0)).unwrap();
        assert!(sphere.radius().is_zero());
    }
}
