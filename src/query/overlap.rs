use crate::fixed_math::{recip_saturating, sign, FixedNum, FixedVec2, ONE};
use crate::shapes::{Capsule, Circle, Line, Ray, Rect};

use super::nearest::{nearest_point_on_line, nearest_point_on_ray};

// ============================================================================
// Point Containment
// ============================================================================

pub fn circle_contains_point(circle: &Circle, point: FixedVec2) -> bool {
    circle.contains_point(point)
}

pub fn rect_contains_point(rect: &Rect, point: FixedVec2) -> bool {
    rect.contains_point(point)
}

/// True if `point` is strictly closer to the capsule's spine than its radius.
pub fn capsule_contains_point(capsule: &Capsule, point: FixedVec2) -> bool {
    let (closest, _) = nearest_point_on_line(&capsule.spine(), point);
    closest.distance_squared(point) < capsule.radius_squared()
}

// ============================================================================
// Circle Overlaps
// ============================================================================

/// True iff the squared center distance is below the squared radius sum.
pub fn overlaps_circle_circle(a: &Circle, b: &Circle) -> bool {
    let radii = a.radius + b.radius;
    a.origin.distance_squared(b.origin) < radii * radii
}

pub fn overlaps_circle_line(circle: &Circle, line: &Line) -> bool {
    let (closest, _) = nearest_point_on_line(line, circle.origin);
    closest.distance_squared(circle.origin) < circle.radius_squared()
}

pub fn overlaps_circle_ray(circle: &Circle, ray: &Ray) -> bool {
    let closest = nearest_point_on_ray(ray, circle.origin);
    closest.distance_squared(circle.origin) < circle.radius_squared()
}

pub fn overlaps_circle_capsule(circle: &Circle, capsule: &Capsule) -> bool {
    let (closest, _) = nearest_point_on_line(&capsule.spine(), circle.origin);
    let radii = circle.radius + capsule.radius;
    closest.distance_squared(circle.origin) < radii * radii
}

/// Closest-point test: the center-to-center delta is clamped to the rect's half
/// extents, and the distance from that point to the circle center is compared
/// against the radius.
pub fn overlaps_circle_rect(circle: &Circle, rect: &Rect) -> bool {
    let rect = rect.normalized();
    let center = rect.center();
    let half = rect.half_extents();

    let delta = (circle.origin - center).clamp(-half, half);
    let closest = center + delta;
    closest.distance_squared(circle.origin) < circle.radius_squared()
}

// ============================================================================
// Intersections
// ============================================================================

/// Distances along `a` and `b` at which the two infinite lines
/// `a_origin + t * a_dir` and `b_origin + u * b_dir` meet.
///
/// `None` when the directions are parallel (zero cross product), including the
/// collinear case.
pub(crate) fn ray_ray_params(
    a_origin: FixedVec2,
    a_dir: FixedVec2,
    b_origin: FixedVec2,
    b_dir: FixedVec2,
) -> Option<(FixedNum, FixedNum)> {
    let denom = a_dir.cross(b_dir);
    if denom == FixedNum::ZERO {
        return None;
    }
    let delta = b_origin - a_origin;
    let t = delta.cross(b_dir) / denom;
    let u = delta.cross(a_dir) / denom;
    Some((t, u))
}

/// Intersection point of two rays, or `None` if they are parallel or the crossing
/// lies behind either origin.
pub fn intersect_ray_ray(a: &Ray, b: &Ray) -> Option<FixedVec2> {
    let (t, u) = ray_ray_params(a.origin, a.direction, b.origin, b.direction)?;
    if t < FixedNum::ZERO || u < FixedNum::ZERO {
        return None;
    }
    Some(a.point_at(t))
}

/// Intersection point of two segments.
///
/// Both parametric coordinates must lie in [0, 1]. Parallel segments, collinear
/// overlapping ones included, are reported as `None`.
pub fn intersect_line_line(a: &Line, b: &Line) -> Option<FixedVec2> {
    let a_vec = a.vector();
    let b_vec = b.vector();

    let denom = b_vec.y * a_vec.x - b_vec.x * a_vec.y;
    if denom == FixedNum::ZERO {
        return None;
    }

    let offset = a.p1 - b.p1;
    let ua = (b_vec.x * offset.y - b_vec.y * offset.x) / denom;
    let ub = (a_vec.x * offset.y - a_vec.y * offset.x) / denom;

    let unit = FixedNum::ZERO..=ONE;
    if !unit.contains(&ua) || !unit.contains(&ub) {
        return None;
    }

    Some(a.point_at(ua))
}

/// Segment vs rect slab test.
///
/// Returns the fraction along `line` at which it enters `rect`, clamped to [0, 1]
/// (zero if `line` starts inside). Axis-aligned segments use the saturating
/// reciprocal, so the per-axis times become `±FixedNum::MAX` instead of dividing
/// by zero.
pub fn overlaps_rect_line(rect: &Rect, line: &Line) -> Option<FixedNum> {
    let rect = rect.normalized();
    let center = rect.center();
    let half = rect.half_extents();
    let delta = line.vector();

    let scale_x = recip_saturating(delta.x);
    let scale_y = recip_saturating(delta.y);
    let sign_x = sign(scale_x);
    let sign_y = sign(scale_y);

    let near_x = (center.x - sign_x * half.x - line.p1.x).saturating_mul(scale_x);
    let near_y = (center.y - sign_y * half.y - line.p1.y).saturating_mul(scale_y);
    let far_x = (center.x + sign_x * half.x - line.p1.x).saturating_mul(scale_x);
    let far_y = (center.y + sign_y * half.y - line.p1.y).saturating_mul(scale_y);

    if near_x > far_y || near_y > far_x {
        return None;
    }

    let near_time = near_x.max(near_y);
    let far_time = far_x.min(far_y);

    if near_time >= ONE || far_time <= FixedNum::ZERO {
        return None;
    }

    Some(near_time.clamp(FixedNum::ZERO, ONE))
}

// ============================================================================
// Rect Overlaps
// ============================================================================

/// Open-interval test on the edges of both axes.
///
/// Works on exact edges rather than halved sizes, so an overlap of a single bit
/// is still seen.
pub fn overlaps_rect_rect(a: &Rect, b: &Rect) -> bool {
    let a = a.normalized();
    let b = b.normalized();
    let (a_max, b_max) = (a.max(), b.max());
    a.min.x < b_max.x && b.min.x < a_max.x && a.min.y < b_max.y && b.min.y < a_max.y
}

/// Translation that moves `a` out of `b`, per axis.
///
/// Each component is the shorter of the two ways out along that axis: pushing `a`
/// towards negative (so its max meets `b`'s min) or towards positive (so its min
/// meets `b`'s max). Callers resolving contacts usually apply only the
/// smaller-magnitude component.
pub fn rect_penetration(a: &Rect, b: &Rect) -> Option<FixedVec2> {
    if !overlaps_rect_rect(a, b) {
        return None;
    }

    let a = a.normalized();
    let b = b.normalized();
    let (a_max, b_max) = (a.max(), b.max());

    let axis = |a_min: FixedNum, a_max: FixedNum, b_min: FixedNum, b_max: FixedNum| {
        let push_negative = a_max - b_min;
        let push_positive = b_max - a_min;
        if push_negative < push_positive {
            -push_negative
        } else {
            push_positive
        }
    };

    Some(FixedVec2::new(
        axis(a.min.x, a_max.x, b.min.x, b_max.x),
        axis(a.min.y, a_max.y, b.min.y, b_max.y),
    ))
}
