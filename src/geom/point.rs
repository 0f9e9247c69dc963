//! Points in exact rational 3-space

use super::vector::Vec3;
use crate::exact::Rat;
use serde::{Deserialize, Serialize};

/// Coordinate axis selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes in order
    pub fn all() -> [Axis; 3] {
        [Axis::X, Axis::Y, Axis::Z]
    }
}

/// A point with three exact rational coordinates
///
/// Points have no identity beyond their coordinates; equality is
/// component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point3 {
    pub x: Rat,
    pub y: Rat,
    pub z: Rat,
}

impl Point3 {
    /// Create a point from rational coordinates
    pub fn new(x: Rat, y: Rat, z: Rat) -> Self {
        Self { x, y, z }
    }

    /// Create a point from integer coordinates
    pub fn from_integers(x: i64, y: i64, z: i64) -> Self {
        Self {
            x: Rat::from_integer(x),
            y: Rat::from_integer(y),
            z: Rat::from_integer(z),
        }
    }

    /// The origin
    pub fn origin() -> Self {
        Self::from_integers(0, 0, 0)
    }

    /// Vector from `other` to `self`
    pub fn sub(&self, other: &Point3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// The point displaced by a vector
    pub fn translated(&self, v: &Vec3) -> Point3 {
        Point3::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }

    /// Position vector from the origin
    pub fn as_vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// The coordinate along one axis
    pub fn coord(&self, axis: Axis) -> Rat {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_wise_equality() {
        let p = Point3::from_integers(1, 2, 3);
        let q = Point3::new(
            Rat::from_integer(1),
            Rat::from_integer(2),
            Rat::from_integer(3),
        );
        assert_eq!(p, q);
    }

    #[test]
    fn test_sub_gives_vector() {
        let p = Point3::from_integers(3, 4, 5);
        let q = Point3::from_integers(1, 1, 1);
        assert_eq!(p.sub(&q), Vec3::from_integers(2, 3, 4));
    }

    #[test]
    fn test_translate_round_trip() {
        let p = Point3::from_integers(2, -1, 7);
        let v = Vec3::from_integers(-3, 5, 1);
        let back = p.translated(&v).translated(&v.neg());
        assert_eq!(back, p);
    }

    #[test]
    fn test_coord_by_axis() {
        let p = Point3::from_integers(4, 5, 6);
        assert_eq!(p.coord(Axis::X), Rat::from_integer(4));
        assert_eq!(p.coord(Axis::Y), Rat::from_integer(5));
        assert_eq!(p.coord(Axis::Z), Rat::from_integer(6));
    }
}
