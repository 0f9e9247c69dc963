//! Distances, projections, and reflections
//!
//! Computations scale by a squared norm and divide at the end, so results
//! are exact with no premature rounding. Valid planes and lines cannot
//! carry a zero normal or direction, but every operation still checks and
//! signals `DegenerateGeometry` rather than dividing by zero.

use crate::error::{KernelError, KernelResult};
use crate::exact::{ExactValue, Rat};
use crate::geom::{Line, Plane, Point3};
use num_traits::Zero;

fn plane_norm_squared(plane: &Plane) -> KernelResult<i64> {
    let n = plane.norm_squared();
    if n == 0 {
        return Err(KernelError::DegenerateGeometry(
            "plane has a zero normal".to_string(),
        ));
    }
    Ok(n)
}

fn line_norm_squared(line: &Line) -> KernelResult<Rat> {
    let n = line.direction().norm_squared();
    if n.is_zero() {
        return Err(KernelError::DegenerateGeometry(
            "line has a zero direction".to_string(),
        ));
    }
    Ok(n)
}

/// Exact distance from a point to a plane
///
/// `|a·Px + b·Py + c·Pz + d| / sqrt(a² + b² + c²)`, returned as a plain
/// rational when the denominator is a perfect square and as a
/// coefficient times a square root otherwise.
pub fn distance_point_plane(point: &Point3, plane: &Plane) -> KernelResult<ExactValue> {
    let n = plane_norm_squared(plane)?;
    let e = plane.eval(point);
    ExactValue::sqrt_of(e * e / Rat::from_integer(n))
}

/// Exact orthogonal projection of a point onto a plane
pub fn project_point_onto_plane(point: &Point3, plane: &Plane) -> KernelResult<Point3> {
    let n = plane_norm_squared(plane)?;
    let t = plane.eval(point) / Rat::from_integer(n);
    Ok(point.translated(&plane.normal().scale(-t)))
}

/// Exact reflection of a point across a plane
pub fn reflect_point_over_plane(point: &Point3, plane: &Plane) -> KernelResult<Point3> {
    let n = plane_norm_squared(plane)?;
    let t = plane.eval(point) / Rat::from_integer(n);
    Ok(point.translated(&plane.normal().scale(-(t + t))))
}

/// Exact orthogonal projection of a point onto a line
///
/// Parametric foot at `t = dot(P - anchor, direction) / |direction|²`.
pub fn project_point_onto_line(point: &Point3, line: &Line) -> KernelResult<Point3> {
    let n = line_norm_squared(line)?;
    let t = point.sub(line.anchor()).dot(line.direction()) / n;
    Ok(line.point_at(t))
}

/// Exact distance from a point to a line
pub fn distance_point_line(point: &Point3, line: &Line) -> KernelResult<ExactValue> {
    let foot = project_point_onto_line(point, line)?;
    ExactValue::sqrt_of(point.sub(&foot).norm_squared())
}
