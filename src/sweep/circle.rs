use crate::fixed_math::{sqrt_or_zero, FixedNum, FixedVec2};
use crate::query::{nearest_point_on_line, nearest_point_on_ray, overlaps_circle_line, overlaps_circle_ray};
use crate::shapes::{Circle, Line, Ray};

use super::hit::SweepHit;

/// Moving circle against a fixed point.
///
/// The point is projected onto the circle's path. If it lies within `radius` of the
/// path, the Pythagorean relation gives how far before the projection the circle's
/// rim first reaches it: `back = sqrt(r² - perp²)`.
///
/// Rejected when the point is behind the motion, farther than `radius` from the
/// path, or reached only after the full displacement.
pub fn sweep_circle_vs_point(circle: &Circle, velocity: FixedVec2, point: FixedVec2) -> Option<SweepHit> {
    if circle.contains_point(point) {
        return Some(SweepHit::new(FixedNum::ZERO, point, circle.origin, circle.origin - point));
    }

    let travel = velocity.length();
    if travel == FixedNum::ZERO {
        return None;
    }

    let to_point = point - circle.origin;
    if velocity.dot(to_point) <= FixedNum::ZERO {
        return None;
    }

    let direction = velocity / travel;
    let along = to_point.dot(direction);
    let perp = to_point.cross(direction);
    let perp_sq = perp * perp;
    let radius_sq = circle.radius_squared();
    if perp_sq > radius_sq {
        return None;
    }

    let back = sqrt_or_zero(radius_sq - perp_sq);
    let distance = (along - back).max(FixedNum::ZERO);
    if distance > travel {
        return None;
    }

    let t = distance / travel;
    let centroid = circle.origin + direction * distance;
    Some(SweepHit::new(t, point, centroid, centroid - point))
}

/// Moving circle against a fixed circle.
///
/// Reduced to [`sweep_circle_vs_point`] with the combined radius; the contact point
/// sits `a.radius` back from the centroid along the normal.
pub fn sweep_circle_vs_circle(a: &Circle, velocity: FixedVec2, b: &Circle) -> Option<SweepHit> {
    let combined = a.with_radius(a.radius + b.radius);
    let hit = sweep_circle_vs_point(&combined, velocity, b.origin)?;
    let point = hit.centroid - hit.normal * a.radius;
    Some(SweepHit::new(hit.t, point, hit.centroid, hit.normal))
}

/// Two moving circles.
///
/// Solved in `b`'s frame with the relative velocity, then mapped back to world
/// space at the time of impact.
pub fn sweep_circle_vs_sweep_circle(
    a: &Circle,
    a_velocity: FixedVec2,
    b: &Circle,
    b_velocity: FixedVec2,
) -> Option<SweepHit> {
    let hit = sweep_circle_vs_circle(a, a_velocity - b_velocity, b)?;
    let b_offset = b_velocity * hit.t;
    let centroid = hit.centroid + b_offset;
    let point = hit.point + b_offset;
    Some(SweepHit::new(hit.t, point, centroid, hit.normal))
}

/// Moving circle against a segment.
///
/// Three candidate contacts are tested: the segment body and its two rounded
/// endpoints. The earliest valid one wins.
pub fn sweep_circle_vs_line(circle: &Circle, velocity: FixedVec2, line: &Line) -> Option<SweepHit> {
    if overlaps_circle_line(circle, line) {
        let (closest, _) = nearest_point_on_line(line, circle.origin);
        return Some(SweepHit::new(FixedNum::ZERO, closest, circle.origin, circle.origin - closest));
    }
    if velocity.is_zero() {
        return None;
    }
    if line.is_degenerate() {
        return sweep_circle_vs_point(circle, velocity, line.p1);
    }

    let length = line.length();
    let body = line_body_contact(circle, velocity, line.p1, line.direction())
        .filter(|(_, along)| *along >= FixedNum::ZERO && *along <= length)
        .map(|(hit, _)| hit);

    let first = sweep_circle_vs_point(circle, velocity, line.p1);
    let second = sweep_circle_vs_point(circle, velocity, line.p2);
    SweepHit::earliest(SweepHit::earliest(body, first), second)
}

/// Moving circle against a ray: the body case of [`sweep_circle_vs_line`] with a
/// single rounded endpoint at the ray origin.
pub fn sweep_circle_vs_ray(circle: &Circle, velocity: FixedVec2, ray: &Ray) -> Option<SweepHit> {
    if overlaps_circle_ray(circle, ray) {
        let closest = nearest_point_on_ray(ray, circle.origin);
        return Some(SweepHit::new(FixedNum::ZERO, closest, circle.origin, circle.origin - closest));
    }
    if velocity.is_zero() {
        return None;
    }

    let origin_cap = sweep_circle_vs_point(circle, velocity, ray.origin);
    if ray.direction.is_zero() {
        return origin_cap;
    }

    let body = line_body_contact(circle, velocity, ray.origin, ray.direction)
        .filter(|(_, along)| *along >= FixedNum::ZERO)
        .map(|(hit, _)| hit);

    SweepHit::earliest(body, origin_cap)
}

/// Contact of a moving circle with the infinite line through `anchor` along the unit
/// `direction`.
///
/// Returns the hit and the contact's distance along the line from `anchor`, so
/// callers can apply their own containment range. The time is where the center's
/// path crosses the line, scaled by `(side - r) / side` so the rim rather than
/// the center touches. `None` when moving parallel or away, when the rim already
/// reaches the line, or when contact happens after the full displacement.
pub(crate) fn line_body_contact(
    circle: &Circle,
    velocity: FixedVec2,
    anchor: FixedVec2,
    direction: FixedVec2,
) -> Option<(SweepHit, FixedNum)> {
    let mut normal = direction.rotate_90();
    let mut side = (circle.origin - anchor).dot(normal);
    if side < FixedNum::ZERO {
        normal = -normal;
        side = -side;
    }

    let approach = -velocity.dot(normal);
    if approach <= FixedNum::ZERO {
        return None;
    }

    let gap = side - circle.radius;
    if gap < FixedNum::ZERO || gap > approach {
        return None;
    }

    let t = gap / approach;
    let centroid = circle.origin + velocity * t;
    let contact = centroid - normal * circle.radius;
    let along = (contact - anchor).dot(direction);
    Some((SweepHit::new(t, contact, centroid, normal), along))
}
