//! Angles between lines and planes
//!
//! Angles follow the pedagogical convention: the numerator is taken in
//! absolute value, so line–line, line–plane, and plane–plane angles are
//! all reported in [0°, 90°]. Each solution carries the exact trig ratio
//! alongside a rounded degree value computed once at the presentation
//! boundary.

use crate::error::{KernelError, KernelResult};
use crate::exact::{ExactValue, Rat};
use crate::geom::{Line, Plane, Vec3};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Which trig ratio the exact expression denotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrigRatio {
    Cosine,
    Sine,
}

/// An angle as an exact ratio plus its rounded degree value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleSolution {
    /// Exact value of the cosine or sine
    pub ratio: ExactValue,

    /// Whether `ratio` is a cosine or a sine
    pub ratio_kind: TrigRatio,

    /// Rounded angle in degrees, in [0, 90]
    pub degrees: u32,
}

fn solve_ratio(numer: Rat, n1: Rat, n2: Rat, kind: TrigRatio) -> KernelResult<AngleSolution> {
    // |numer| / sqrt(n1 * n2), formed under the root so the absolute value
    // comes for free
    let ratio = ExactValue::sqrt_of(numer * numer / (n1 * n2))?;
    // clamp is mandatory: floating evaluation of the exact ratio can
    // exceed 1 by rounding epsilon
    let x = ratio.approx().clamp(0.0, 1.0);
    let radians = match kind {
        TrigRatio::Cosine => x.acos(),
        TrigRatio::Sine => x.asin(),
    };
    let degrees = radians.to_degrees().round() as u32;
    Ok(AngleSolution {
        ratio,
        ratio_kind: kind,
        degrees,
    })
}

/// Angle between two direction vectors
///
/// `cos = |u·v| / (‖u‖·‖v‖)`. A zero-length input makes the angle
/// undefined and fails with `DegenerateGeometry`.
pub fn angle_between_directions(u: &Vec3, v: &Vec3) -> KernelResult<AngleSolution> {
    let n1 = u.norm_squared();
    let n2 = v.norm_squared();
    if n1.is_zero() || n2.is_zero() {
        return Err(KernelError::DegenerateGeometry(
            "angle with a zero-length direction".to_string(),
        ));
    }
    solve_ratio(u.dot(v), n1, n2, TrigRatio::Cosine)
}

/// Angle between two lines
pub fn angle_between_lines(first: &Line, second: &Line) -> KernelResult<AngleSolution> {
    angle_between_directions(first.direction(), second.direction())
}

/// Angle between a direction vector and a plane
///
/// `sin = |u·n| / (‖u‖·‖n‖)`, solved with arcsin rather than arccos.
pub fn angle_between_direction_and_plane(u: &Vec3, plane: &Plane) -> KernelResult<AngleSolution> {
    let n1 = u.norm_squared();
    let normal = plane.normal();
    let n2 = normal.norm_squared();
    if n1.is_zero() || n2.is_zero() {
        return Err(KernelError::DegenerateGeometry(
            "angle with a zero-length direction or normal".to_string(),
        ));
    }
    solve_ratio(u.dot(&normal), n1, n2, TrigRatio::Sine)
}

/// Angle between a line and a plane
pub fn angle_between_line_and_plane(line: &Line, plane: &Plane) -> KernelResult<AngleSolution> {
    angle_between_direction_and_plane(line.direction(), plane)
}

/// Angle between two planes, via their normals
pub fn angle_between_planes(first: &Plane, second: &Plane) -> KernelResult<AngleSolution> {
    angle_between_directions(&first.normal(), &second.normal())
}
