//! Generated question records
//!
//! A question carries typed statement data, the exact answer, an optional
//! presentation value, and the synthesized wrong answers. Rendering to
//! the project's textual notation happens elsewhere; the kernel defines
//! only the semantic values.

use crate::exact::ExactValue;
use crate::error::KernelResult;
use crate::geom::{Axis, Line, Plane, Point3, Sphere, Vec3};
use serde::{Deserialize, Serialize};

/// Typed statement data, one variant per question kind
///
/// Each variant carries exactly the objects the kind samples, so a
/// statement with an invalid field combination is unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// Distance from a point to a plane
    PointPlaneDistance { point: Point3, plane: Plane },

    /// One coordinate of a point reflected across a plane
    PointPlaneReflection {
        point: Point3,
        plane: Plane,
        axis: Axis,
    },

    /// Distance from a point to a line
    PointLineDistance { point: Point3, line: Line },

    /// Angle between two lines
    LineLineAngle { first: Line, second: Line },

    /// Angle between a line and a plane
    LinePlaneAngle { line: Line, plane: Plane },

    /// Angle between two planes
    PlanePlaneAngle { first: Plane, second: Plane },

    /// Distance between two parallel planes
    ParallelPlaneDistance { first: Plane, second: Plane },

    /// The greater tangent-plane offset for a sphere and a fixed normal
    SphereTangentPlanes { sphere: Sphere, normal: Vec3 },

    /// Radius of the circle cut out of a sphere by a plane
    SphereSectionRadius { sphere: Sphere, plane: Plane },
}

/// A fully generated multiple-choice question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Kind identifier, matching `QuestionKind::id`
    pub kind: String,

    /// The sampled given objects
    pub statement: Statement,

    /// The exact correct answer
    pub answer: ExactValue,

    /// Rounded presentation value, when the exact answer is not already
    /// presentation-ready
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approx: Option<f64>,

    /// Intermediate exact quantity surfaced for the worked solution, such
    /// as the trig ratio behind a rounded angle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support: Option<ExactValue>,

    /// Display-distinct wrong answers
    pub distractors: Vec<ExactValue>,
}

impl Question {
    /// All answer options, correct answer first
    ///
    /// Shuffling for presentation is the renderer's concern.
    pub fn options(&self) -> Vec<&ExactValue> {
        let mut options = Vec::with_capacity(1 + self.distractors.len());
        options.push(&self.answer);
        options.extend(self.distractors.iter());
        options
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> KernelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> KernelResult<Question> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Round to two decimals for presentation
pub(crate) fn presentation_value(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
