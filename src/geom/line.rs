//! Lines given by an anchor point and a non-zero direction
//!
//! The direction invariant is enforced at construction; the canonical
//! direction makes two lines comparable even when their representatives
//! differ by scale or sign. Anchors are not canonicalized, any point on
//! the line is a valid anchor.

use super::normalize;
use super::point::Point3;
use super::vector::Vec3;
use crate::error::{KernelError, KernelResult};
use crate::exact::Rat;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A line in 3-space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    anchor: Point3,
    direction: Vec3,
}

#[derive(Serialize, Deserialize)]
struct RawLine {
    anchor: Point3,
    direction: Vec3,
}

impl Line {
    /// Create a line from an anchor and a direction
    ///
    /// A zero direction fails with `InvalidGeometry`; callers must
    /// re-sample instead of passing a default.
    pub fn new(anchor: Point3, direction: Vec3) -> KernelResult<Line> {
        if direction.is_zero() {
            return Err(KernelError::InvalidGeometry(
                "line direction is the zero vector".to_string(),
            ));
        }
        Ok(Line { anchor, direction })
    }

    /// Line through two distinct points
    pub fn through_points(p: &Point3, q: &Point3) -> KernelResult<Line> {
        let direction = q.sub(p);
        if direction.is_zero() {
            return Err(KernelError::InvalidGeometry(
                "two defining points coincide".to_string(),
            ));
        }
        Ok(Line {
            anchor: *p,
            direction,
        })
    }

    /// The anchor point
    pub fn anchor(&self) -> &Point3 {
        &self.anchor
    }

    /// The stored direction representative
    pub fn direction(&self) -> &Vec3 {
        &self.direction
    }

    /// The gcd-reduced, sign-normalized integer direction
    ///
    /// Two lines with the same carrier have equal canonical directions
    /// regardless of how their representatives were scaled or oriented.
    pub fn canonical_direction(&self) -> Vec3 {
        let ints = normalize::canonical_integer_tuple(
            &[self.direction.x, self.direction.y, self.direction.z],
            3,
        );
        Vec3::from_integers(ints[0], ints[1], ints[2])
    }

    /// The point at parameter `t` along the direction
    pub fn point_at(&self, t: Rat) -> Point3 {
        self.anchor.translated(&self.direction.scale(t))
    }

    /// Check whether a point lies on the line
    pub fn contains(&self, point: &Point3) -> bool {
        point.sub(&self.anchor).cross(&self.direction).is_zero()
    }
}

impl Serialize for Line {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RawLine {
            anchor: self.anchor,
            direction: self.direction,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Line {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawLine::deserialize(deserializer)?;
        Line::new(raw.anchor, raw.direction).map_err(D::Error::custom)
    }
}
