//! Vectors in exact rational 3-space
//!
//! Pure, total arithmetic over exact components; no floating point at any
//! stage of this layer.

use super::normalize;
use crate::exact::Rat;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// A vector with three exact rational components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: Rat,
    pub y: Rat,
    pub z: Rat,
}

impl Vec3 {
    /// Create a vector from rational components
    pub fn new(x: Rat, y: Rat, z: Rat) -> Self {
        Self { x, y, z }
    }

    /// Create a vector from integer components
    pub fn from_integers(x: i64, y: i64, z: i64) -> Self {
        Self {
            x: Rat::from_integer(x),
            y: Rat::from_integer(y),
            z: Rat::from_integer(z),
        }
    }

    /// The zero vector
    pub fn zero() -> Self {
        Self::from_integers(0, 0, 0)
    }

    /// Component-wise sum
    pub fn add(&self, other: &Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Component-wise difference
    pub fn sub(&self, other: &Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// The vector scaled by an exact rational factor
    pub fn scale(&self, k: Rat) -> Vec3 {
        Vec3::new(self.x * k, self.y * k, self.z * k)
    }

    /// The negated vector
    pub fn neg(&self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }

    /// Dot product
    pub fn dot(&self, other: &Vec3) -> Rat {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product
    pub fn cross(&self, other: &Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared Euclidean norm (kept squared to stay rational)
    pub fn norm_squared(&self) -> Rat {
        self.dot(self)
    }

    /// Check for the zero vector
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }

    /// True when the cross product with `other` vanishes
    pub fn is_parallel_to(&self, other: &Vec3) -> bool {
        self.cross(other).is_zero()
    }

    /// The smallest integer vector on the same ray through the origin
    ///
    /// Clears denominators and divides by the gcd of the absolute
    /// components. Fails closed: the zero vector is returned unchanged,
    /// callers must check for zero explicitly before relying on the result.
    pub fn simplify(&self) -> Vec3 {
        if self.is_zero() {
            return *self;
        }
        let ints = normalize::integer_representative(&[self.x, self.y, self.z]);
        Vec3::from_integers(ints[0], ints[1], ints[2])
    }
}
