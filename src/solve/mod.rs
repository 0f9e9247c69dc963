//! Solvers over canonical geometric objects
//!
//! Metric, angle, and intersection/tangency computations. Every operation
//! returns an exact result or a typed error, never a numerically unstable
//! approximation.

pub mod angle;
pub mod intersect;
pub mod metric;

pub use angle::{
    angle_between_direction_and_plane, angle_between_directions, angle_between_line_and_plane,
    angle_between_lines, angle_between_planes, AngleSolution, TrigRatio,
};
pub use intersect::{
    circle_of_intersection_radius, parallel_plane_distance, sphere_plane_relation,
    sphere_tangent_plane_offsets, SpherePlaneRelation, TangentPlaneOffsets,
};
pub use metric::{
    distance_point_line, distance_point_plane, project_point_onto_line,
    project_point_onto_plane, reflect_point_over_plane,
};
