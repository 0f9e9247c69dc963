//! Plane–plane and sphere–plane relationships
//!
//! The sphere–plane relationship is an explicit three-way classification
//! decided by exact comparison of squared distances, never by checking a
//! formula result for a negative radicand.

use crate::error::{KernelError, KernelResult};
use crate::exact::{ExactValue, Rat};
use crate::geom::{Plane, Sphere, Vec3};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Relationship between a sphere and a plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpherePlaneRelation {
    /// The plane misses the sphere
    Disjoint,

    /// The plane touches the sphere in a single point
    Tangent,

    /// The plane cuts the sphere in a circle
    Intersecting,
}

/// The two tangent-plane offsets `base ± spread` for a fixed normal
///
/// The sum of a rational and a non-trivial square-root multiple has no
/// single exact representation, so the pair is kept in this split form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TangentPlaneOffsets {
    /// `-dot(normal, center)`, the offset of the plane through the center
    pub base: Rat,

    /// `radius * ‖normal‖`, always non-negative
    pub spread: ExactValue,
}

impl TangentPlaneOffsets {
    /// Both offsets as exact values, when the spread is rational
    pub fn as_exact_pair(&self) -> Option<(ExactValue, ExactValue)> {
        let s = self.spread.to_rational()?;
        Some((
            ExactValue::from_rational(self.base - s),
            ExactValue::from_rational(self.base + s),
        ))
    }

    /// Presentation-tier approximations of the two offsets
    pub fn approx_pair(&self) -> (f64, f64) {
        let base = *self.base.numer() as f64 / *self.base.denom() as f64;
        let s = self.spread.approx();
        (base - s, base + s)
    }
}

fn squared_center_distance(sphere: &Sphere, plane: &Plane) -> KernelResult<Rat> {
    let n = plane.norm_squared();
    if n == 0 {
        return Err(KernelError::DegenerateGeometry(
            "plane has a zero normal".to_string(),
        ));
    }
    let e = plane.eval(sphere.center());
    Ok(e * e / Rat::from_integer(n))
}

/// Classify the sphere–plane relationship
///
/// Exactly one of the three states holds; the decision compares `d²` with
/// `R²` in exact arithmetic.
pub fn sphere_plane_relation(
    sphere: &Sphere,
    plane: &Plane,
) -> KernelResult<SpherePlaneRelation> {
    let d2 = squared_center_distance(sphere, plane)?;
    Ok(match d2.cmp(&sphere.radius_squared()) {
        Ordering::Greater => SpherePlaneRelation::Disjoint,
        Ordering::Equal => SpherePlaneRelation::Tangent,
        Ordering::Less => SpherePlaneRelation::Intersecting,
    })
}

/// Radius of the circle where a plane cuts a sphere
///
/// Returns `None` when the plane misses the sphere, exact zero at
/// tangency, and `sqrt(R² − d²)` otherwise.
pub fn circle_of_intersection_radius(
    sphere: &Sphere,
    plane: &Plane,
) -> KernelResult<Option<ExactValue>> {
    let d2 = squared_center_distance(sphere, plane)?;
    Ok(match d2.cmp(&sphere.radius_squared()) {
        Ordering::Greater => None,
        Ordering::Equal => Some(ExactValue::from_integer(0)),
        Ordering::Less => Some(ExactValue::sqrt_of(sphere.radius_squared() - d2)?),
    })
}

/// Distance between two parallel planes
///
/// Requires the normals to be parallel (vanishing cross product) and
/// fails with `NotParallel` otherwise. The second normal is expressed as
/// `k` times the first, then the distance is `|d2 − k·d1| / ‖n2‖`.
pub fn parallel_plane_distance(first: &Plane, second: &Plane) -> KernelResult<ExactValue> {
    let n1 = first.normal();
    let n2 = second.normal();
    if !n1.is_parallel_to(&n2) {
        return Err(KernelError::NotParallel);
    }
    // canonical planes leave k positive; find it from the first non-zero
    // component pair
    let pairs = [(n1.x, n2.x), (n1.y, n2.y), (n1.z, n2.z)];
    let k = pairs
        .iter()
        .find(|(a, _)| !a.is_zero())
        .map(|(a, b)| b / a)
        .ok_or_else(|| {
            KernelError::DegenerateGeometry("plane has a zero normal".to_string())
        })?;
    let diff = Rat::from_integer(second.d()) - k * Rat::from_integer(first.d());
    ExactValue::sqrt_of(diff * diff / n2.norm_squared())
}

/// Offsets of the two planes with a given normal tangent to a sphere
///
/// Solves `distance(center, plane(normal, d)) = radius` for `d`; the two
/// symmetric roots are `-dot(normal, center) ± radius·‖normal‖`.
pub fn sphere_tangent_plane_offsets(
    sphere: &Sphere,
    normal: &Vec3,
) -> KernelResult<TangentPlaneOffsets> {
    let n = normal.norm_squared();
    if n.is_zero() {
        return Err(KernelError::DegenerateGeometry(
            "tangent plane family with a zero normal".to_string(),
        ));
    }
    let base = -normal.dot(&sphere.center().as_vector());
    let spread = ExactValue::sqrt_of(sphere.radius_squared() * n)?;
    Ok(TangentPlaneOffsets { base, spread })
}
