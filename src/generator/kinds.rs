//! Concrete question kinds
//!
//! One implementation per problem family. Each `generate` performs a
//! single sampling attempt: it samples integer parameters, builds the
//! geometric objects, computes the exact answer, and synthesizes wrong
//! answers from the mistakes a student actually makes with that formula.
//! Unusable configurations fail with a typed error so the outer loop can
//! resample.

use super::question::{presentation_value, Question, Statement};
use super::{GeneratorConfig, QuestionKind};
use crate::distractor::{synthesize, MistakeKind};
use crate::error::{KernelError, KernelResult};
use crate::exact::{ExactValue, Rat};
use crate::geom::{Axis, Line, Plane, Point3, Sphere, Vec3};
use crate::solve::{angle, intersect, metric};
use num_traits::{Signed, Zero};
use rand::rngs::StdRng;
use rand::Rng;

/// All registered question kinds
pub fn all_kinds() -> Vec<Box<dyn QuestionKind>> {
    vec![
        Box::new(PointPlaneDistance),
        Box::new(PointPlaneReflection),
        Box::new(PointLineDistance),
        Box::new(LineLineAngle),
        Box::new(LinePlaneAngle),
        Box::new(PlanePlaneAngle),
        Box::new(ParallelPlaneDistance),
        Box::new(SphereTangentPlanes),
        Box::new(SphereSectionRadius),
    ]
}

fn sample_point(rng: &mut StdRng, config: &GeneratorConfig) -> Point3 {
    Point3::from_integers(
        rng.gen_range(config.coord_min..=config.coord_max),
        rng.gen_range(config.coord_min..=config.coord_max),
        rng.gen_range(config.coord_min..=config.coord_max),
    )
}

fn sample_offset(rng: &mut StdRng, config: &GeneratorConfig) -> i64 {
    rng.gen_range(config.coord_min..=config.coord_max)
}

/// Sample a non-zero coefficient triple, retrying a bounded number of times
fn sample_coeffs(rng: &mut StdRng, config: &GeneratorConfig) -> KernelResult<[i64; 3]> {
    for _ in 0..16 {
        let coeffs = [
            rng.gen_range(config.coeff_min..=config.coeff_max),
            rng.gen_range(config.coeff_min..=config.coeff_max),
            rng.gen_range(config.coeff_min..=config.coeff_max),
        ];
        if coeffs.iter().any(|&c| c != 0) {
            return Ok(coeffs);
        }
    }
    Err(KernelError::DegenerateGeometry(
        "coefficient sampling kept producing the zero triple".to_string(),
    ))
}

fn sample_direction(rng: &mut StdRng, config: &GeneratorConfig) -> KernelResult<Vec3> {
    let coeffs = sample_coeffs(rng, config)?;
    Ok(Vec3::from_integers(coeffs[0], coeffs[1], coeffs[2]))
}

fn sample_plane(rng: &mut StdRng, config: &GeneratorConfig) -> KernelResult<Plane> {
    let coeffs = sample_coeffs(rng, config)?;
    Plane::from_integer_coefficients(
        coeffs[0],
        coeffs[1],
        coeffs[2],
        sample_offset(rng, config),
    )
}

fn sample_radius(rng: &mut StdRng, config: &GeneratorConfig) -> i64 {
    rng.gen_range(1..=config.coord_max.max(2))
}

/// Distance from a sampled point to a sampled plane
pub struct PointPlaneDistance;

impl QuestionKind for PointPlaneDistance {
    fn id(&self) -> &'static str {
        "point_plane_distance"
    }

    fn generate(&self, rng: &mut StdRng, config: &GeneratorConfig) -> KernelResult<Question> {
        let plane = sample_plane(rng, config)?;
        let point = sample_point(rng, config);
        if plane.contains(&point) {
            return Err(KernelError::DegenerateGeometry(
                "sampled point lies on the plane".to_string(),
            ));
        }
        let answer = metric::distance_point_plane(&point, &plane)?;

        // classic slips: forgot to divide by the norm, dropped the z term
        let e = plane.eval(&point);
        let mut candidates = vec![ExactValue::from_rational(e.abs())];
        let planar = plane.a() * plane.a() + plane.b() * plane.b();
        if planar != 0 {
            let e2 = Rat::from_integer(plane.a()) * point.x
                + Rat::from_integer(plane.b()) * point.y
                + Rat::from_integer(plane.d());
            candidates.push(ExactValue::sqrt_of(e2 * e2 / Rat::from_integer(planar))?);
        }
        let distractors = synthesize(
            &answer,
            &candidates,
            &[
                MistakeKind::ForgottenRoot,
                MistakeKind::HalvedValue,
                MistakeKind::DoubledValue,
            ],
            &config.distractors,
            rng,
        )?;
        Ok(Question {
            kind: self.id().to_string(),
            statement: Statement::PointPlaneDistance { point, plane },
            approx: Some(presentation_value(answer.approx())),
            support: None,
            answer,
            distractors,
        })
    }
}

/// One coordinate of a point reflected across a plane
pub struct PointPlaneReflection;

impl QuestionKind for PointPlaneReflection {
    fn id(&self) -> &'static str {
        "point_plane_reflection"
    }

    fn generate(&self, rng: &mut StdRng, config: &GeneratorConfig) -> KernelResult<Question> {
        let plane = sample_plane(rng, config)?;
        let point = sample_point(rng, config);
        if plane.contains(&point) {
            return Err(KernelError::DegenerateGeometry(
                "sampled point lies on the plane".to_string(),
            ));
        }
        // only query an axis the reflection actually moves
        let movable: Vec<Axis> = Axis::all()
            .into_iter()
            .zip(plane.coefficients().into_iter())
            .filter(|(_, c)| *c != 0)
            .map(|(axis, _)| axis)
            .collect();
        let axis = movable[rng.gen_range(0..movable.len())];

        let reflected = metric::reflect_point_over_plane(&point, &plane)?;
        let foot = metric::project_point_onto_plane(&point, &plane)?;
        let answer = ExactValue::from_rational(reflected.coord(axis));

        // slips: stopped at the projection, kept the original point,
        // mirrored to the wrong side
        let t = plane.eval(&point) / Rat::from_integer(plane.norm_squared());
        let wrong_side = point.translated(&plane.normal().scale(t + t));
        let candidates = vec![
            ExactValue::from_rational(foot.coord(axis)),
            ExactValue::from_rational(wrong_side.coord(axis)),
            ExactValue::from_rational(point.coord(axis)),
        ];
        let distractors = synthesize(
            &answer,
            &candidates,
            &[MistakeKind::SignFlip],
            &config.distractors,
            rng,
        )?;
        Ok(Question {
            kind: self.id().to_string(),
            statement: Statement::PointPlaneReflection { point, plane, axis },
            approx: Some(presentation_value(answer.approx())),
            support: None,
            answer,
            distractors,
        })
    }
}

/// Distance from a sampled point to a sampled line
pub struct PointLineDistance;

impl QuestionKind for PointLineDistance {
    fn id(&self) -> &'static str {
        "point_line_distance"
    }

    fn generate(&self, rng: &mut StdRng, config: &GeneratorConfig) -> KernelResult<Question> {
        let line = Line::new(sample_point(rng, config), sample_direction(rng, config)?)?;
        let point = sample_point(rng, config);
        if line.contains(&point) {
            return Err(KernelError::DegenerateGeometry(
                "sampled point lies on the line".to_string(),
            ));
        }
        let answer = metric::distance_point_line(&point, &line)?;

        // slip: measured to the anchor instead of the foot
        let to_anchor = ExactValue::sqrt_of(point.sub(line.anchor()).norm_squared())?;
        let distractors = synthesize(
            &answer,
            &[to_anchor],
            &[
                MistakeKind::ForgottenRoot,
                MistakeKind::HalvedValue,
                MistakeKind::DoubledValue,
            ],
            &config.distractors,
            rng,
        )?;
        Ok(Question {
            kind: self.id().to_string(),
            statement: Statement::PointLineDistance { point, line },
            approx: Some(presentation_value(answer.approx())),
            support: None,
            answer,
            distractors,
        })
    }
}

/// Angle between two sampled lines
pub struct LineLineAngle;

impl QuestionKind for LineLineAngle {
    fn id(&self) -> &'static str {
        "line_line_angle"
    }

    fn generate(&self, rng: &mut StdRng, config: &GeneratorConfig) -> KernelResult<Question> {
        let u = sample_direction(rng, config)?;
        let v = sample_direction(rng, config)?;
        if u.is_parallel_to(&v) {
            return Err(KernelError::DegenerateGeometry(
                "sampled directions are parallel".to_string(),
            ));
        }
        let first = Line::new(sample_point(rng, config), u)?;
        let second = Line::new(sample_point(rng, config), v)?;
        let sol = angle::angle_between_lines(&first, &second)?;
        if sol.degrees == 0 {
            return Err(KernelError::DegenerateGeometry(
                "sampled directions are nearly parallel".to_string(),
            ));
        }
        let answer = ExactValue::from_integer(i64::from(sol.degrees));

        // slips: complement, supplement
        let candidates = vec![
            ExactValue::from_integer(i64::from(90 - sol.degrees)),
            ExactValue::from_integer(i64::from(180 - sol.degrees)),
        ];
        let distractors =
            synthesize(&answer, &candidates, &[], &config.distractors, rng)?;
        Ok(Question {
            kind: self.id().to_string(),
            statement: Statement::LineLineAngle { first, second },
            approx: None,
            support: Some(sol.ratio),
            answer,
            distractors,
        })
    }
}

/// Angle between a sampled line and a sampled plane
pub struct LinePlaneAngle;

impl QuestionKind for LinePlaneAngle {
    fn id(&self) -> &'static str {
        "line_plane_angle"
    }

    fn generate(&self, rng: &mut StdRng, config: &GeneratorConfig) -> KernelResult<Question> {
        let direction = sample_direction(rng, config)?;
        let plane = sample_plane(rng, config)?;
        if direction.dot(&plane.normal()).is_zero() {
            return Err(KernelError::DegenerateGeometry(
                "sampled line is parallel to the plane".to_string(),
            ));
        }
        let line = Line::new(sample_point(rng, config), direction)?;
        let sol = angle::angle_between_line_and_plane(&line, &plane)?;
        if sol.degrees == 0 {
            return Err(KernelError::DegenerateGeometry(
                "sampled line is nearly parallel to the plane".to_string(),
            ));
        }
        let answer = ExactValue::from_integer(i64::from(sol.degrees));

        // slip: used arccos of the same ratio
        let candidates = vec![ExactValue::from_integer(i64::from(90 - sol.degrees))];
        let distractors =
            synthesize(&answer, &candidates, &[], &config.distractors, rng)?;
        Ok(Question {
            kind: self.id().to_string(),
            statement: Statement::LinePlaneAngle { line, plane },
            approx: None,
            support: Some(sol.ratio),
            answer,
            distractors,
        })
    }
}

/// Angle between two sampled planes
pub struct PlanePlaneAngle;

impl QuestionKind for PlanePlaneAngle {
    fn id(&self) -> &'static str {
        "plane_plane_angle"
    }

    fn generate(&self, rng: &mut StdRng, config: &GeneratorConfig) -> KernelResult<Question> {
        let first = sample_plane(rng, config)?;
        let second = sample_plane(rng, config)?;
        if first.normal().is_parallel_to(&second.normal()) {
            return Err(KernelError::DegenerateGeometry(
                "sampled planes are parallel".to_string(),
            ));
        }
        let sol = angle::angle_between_planes(&first, &second)?;
        if sol.degrees == 0 {
            return Err(KernelError::DegenerateGeometry(
                "sampled planes are nearly parallel".to_string(),
            ));
        }
        let answer = ExactValue::from_integer(i64::from(sol.degrees));
        let candidates = vec![
            ExactValue::from_integer(i64::from(90 - sol.degrees)),
            ExactValue::from_integer(i64::from(180 - sol.degrees)),
        ];
        let distractors =
            synthesize(&answer, &candidates, &[], &config.distractors, rng)?;
        Ok(Question {
            kind: self.id().to_string(),
            statement: Statement::PlanePlaneAngle { first, second },
            approx: None,
            support: Some(sol.ratio),
            answer,
            distractors,
        })
    }
}

/// Distance between two parallel sampled planes
pub struct ParallelPlaneDistance;

impl QuestionKind for ParallelPlaneDistance {
    fn id(&self) -> &'static str {
        "parallel_plane_distance"
    }

    fn generate(&self, rng: &mut StdRng, config: &GeneratorConfig) -> KernelResult<Question> {
        let coeffs = sample_coeffs(rng, config)?;
        let d1 = sample_offset(rng, config);
        let d2 = sample_offset(rng, config);
        if d1 == d2 {
            return Err(KernelError::DegenerateGeometry(
                "sampled planes coincide".to_string(),
            ));
        }
        let first = Plane::from_integer_coefficients(coeffs[0], coeffs[1], coeffs[2], d1)?;
        let second = Plane::from_integer_coefficients(coeffs[0], coeffs[1], coeffs[2], d2)?;
        let answer = intersect::parallel_plane_distance(&first, &second)?;

        // slip: forgot to divide by the norm
        let candidates = vec![ExactValue::from_integer((d2 - d1).abs())];
        let distractors = synthesize(
            &answer,
            &candidates,
            &[MistakeKind::ForgottenRoot, MistakeKind::HalvedValue],
            &config.distractors,
            rng,
        )?;
        Ok(Question {
            kind: self.id().to_string(),
            statement: Statement::ParallelPlaneDistance { first, second },
            approx: Some(presentation_value(answer.approx())),
            support: None,
            answer,
            distractors,
        })
    }
}

/// The greater tangent-plane offset for a sphere and a fixed normal
///
/// Normals are drawn from a choice set with perfect-square norms so both
/// offsets stay rational.
pub struct SphereTangentPlanes;

const TANGENT_NORMALS: [[i64; 3]; 9] = [
    [1, 0, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 2, 2],
    [2, 1, 2],
    [2, 2, 1],
    [0, 3, 4],
    [3, 0, 4],
    [3, 4, 0],
];

impl QuestionKind for SphereTangentPlanes {
    fn id(&self) -> &'static str {
        "sphere_tangent_planes"
    }

    fn generate(&self, rng: &mut StdRng, config: &GeneratorConfig) -> KernelResult<Question> {
        let sphere =
            Sphere::with_integer_radius(sample_point(rng, config), sample_radius(rng, config))?;
        let n = TANGENT_NORMALS[rng.gen_range(0..TANGENT_NORMALS.len())];
        let normal = Vec3::from_integers(n[0], n[1], n[2]);
        let offsets = intersect::sphere_tangent_plane_offsets(&sphere, &normal)?;
        let (lesser, greater) = offsets.as_exact_pair().ok_or_else(|| {
            KernelError::DegenerateGeometry("tangent offsets are irrational".to_string())
        })?;
        let answer = greater;

        // slips: picked the other tangent side, forgot the norm factor
        let radius = sphere.radius();
        let mut candidates = vec![lesser.clone()];
        if let Some(r) = radius.to_rational() {
            candidates.push(ExactValue::from_rational(offsets.base + r));
        }
        let distractors = synthesize(
            &answer,
            &candidates,
            &[MistakeKind::SignFlip],
            &config.distractors,
            rng,
        )?;
        Ok(Question {
            kind: self.id().to_string(),
            statement: Statement::SphereTangentPlanes { sphere, normal },
            approx: Some(presentation_value(answer.approx())),
            support: Some(lesser),
            answer,
            distractors,
        })
    }
}

/// Radius of the circle a sampled plane cuts out of a sampled sphere
pub struct SphereSectionRadius;

impl QuestionKind for SphereSectionRadius {
    fn id(&self) -> &'static str {
        "sphere_section_radius"
    }

    fn generate(&self, rng: &mut StdRng, config: &GeneratorConfig) -> KernelResult<Question> {
        let sphere =
            Sphere::with_integer_radius(sample_point(rng, config), sample_radius(rng, config))?;
        let plane = sample_plane(rng, config)?;
        let answer = match intersect::circle_of_intersection_radius(&sphere, &plane)? {
            Some(radius) if !radius.is_zero() => radius,
            _ => {
                return Err(KernelError::DegenerateGeometry(
                    "sampled plane does not cut the sphere".to_string(),
                ))
            }
        };
        let center_distance = metric::distance_point_plane(sphere.center(), &plane)?;

        // slips: added instead of subtracting in the Pythagorean step,
        // answered with the sphere radius or the center distance
        let mut candidates = Vec::new();
        if let Some(d_squared) = center_distance.squared().to_rational() {
            candidates.push(ExactValue::sqrt_of(sphere.radius_squared() + d_squared)?);
        }
        candidates.push(sphere.radius());
        candidates.push(center_distance.clone());
        let distractors = synthesize(
            &answer,
            &candidates,
            &[MistakeKind::ForgottenRoot],
            &config.distractors,
            rng,
        )?;
        Ok(Question {
            kind: self.id().to_string(),
            statement: Statement::SphereSectionRadius { sphere, plane },
            approx: Some(presentation_value(answer.approx())),
            support: Some(center_distance),
            answer,
            distractors,
        })
    }
}
