//! Static Query Engine: instantaneous overlap and intersection tests.
//!
//! Every function here is pure and allocation-free. Degenerate configurations
//! (parallel lines, zero-length segments) are reported as "no intersection", never
//! as a panic.
//!
//! # Touching is not overlapping
//!
//! All overlap predicates use strict comparisons. Two circles whose boundaries meet
//! in a single point do not overlap, a point on a rect edge is not inside it. The
//! sweep engine's "already overlapping" checks call these exact predicates, so a
//! zero-velocity sweep reports `t = 0` if and only if the static test is true.

pub mod nearest;
pub mod overlap;


pub use nearest::{
    nearest_point_on_line, nearest_point_on_ray, nearest_point_on_rect,
    nearest_point_on_rect_edge, shortest_line_between_lines,
};
pub use overlap::{
    capsule_contains_point, circle_contains_point, intersect_line_line, intersect_ray_ray,
    overlaps_circle_capsule, overlaps_circle_circle, overlaps_circle_line, overlaps_circle_ray,
    overlaps_circle_rect, overlaps_rect_line, overlaps_rect_rect, rect_contains_point,
    rect_penetration,
};
