use crate::fixed_math::{FixedNum, FixedVec2, ONE};
use crate::shapes::{Line, Ray, Rect};

use super::overlap::intersect_line_line;

/// Closest point of the solid rect to `point` (the point itself when inside).
pub fn nearest_point_on_rect(rect: &Rect, point: FixedVec2) -> FixedVec2 {
    let rect = rect.normalized();
    point.clamp(rect.min, rect.max())
}

/// Closest point on the rect's boundary.
///
/// Outside points clamp onto the rect, which lands them in an edge or corner
/// region. Interior points are pushed to the nearest edge; when an x edge and a y
/// edge are equally close the x edge wins.
pub fn nearest_point_on_rect_edge(rect: &Rect, point: FixedVec2) -> FixedVec2 {
    let rect = rect.normalized();
    if !rect.contains_point(point) {
        return point.clamp(rect.min, rect.max());
    }

    let max = rect.max();
    let left = point.x - rect.min.x;
    let right = max.x - point.x;
    let bottom = point.y - rect.min.y;
    let top = max.y - point.y;

    if left.min(right) <= bottom.min(top) {
        let x = if left <= right { rect.min.x } else { max.x };
        FixedVec2::new(x, point.y)
    } else {
        let y = if bottom <= top { rect.min.y } else { max.y };
        FixedVec2::new(point.x, y)
    }
}

/// Closest point on the segment and its parameter in [0, 1].
///
/// A degenerate segment returns `p1` with parameter zero. The interior point is
/// computed as `p1 + v * dot / |v|²` rather than through the rounded parameter, which
/// keeps projections onto axis-aligned segments exact.
pub fn nearest_point_on_line(line: &Line, point: FixedVec2) -> (FixedVec2, FixedNum) {
    let vector = line.vector();
    let len_sq = vector.length_squared();
    if len_sq == FixedNum::ZERO {
        return (line.p1, FixedNum::ZERO);
    }

    let dot = (point - line.p1).dot(vector);
    if dot <= FixedNum::ZERO {
        (line.p1, FixedNum::ZERO)
    } else if dot >= len_sq {
        (line.p2, ONE)
    } else {
        (line.p1 + vector * dot / len_sq, dot / len_sq)
    }
}

/// Closest point on the ray. Points behind the origin project onto the origin.
pub fn nearest_point_on_ray(ray: &Ray, point: FixedVec2) -> FixedVec2 {
    let distance = (point - ray.origin).dot(ray.direction).max(FixedNum::ZERO);
    ray.point_at(distance)
}

/// Shortest segment connecting `a` to `b`, running from a point on `a` to a point
/// on `b`.
///
/// Intersecting segments yield a zero-length line at the crossing. Otherwise the
/// answer is one of the four endpoint-to-segment projections; the first shortest
/// candidate wins ties.
pub fn shortest_line_between_lines(a: &Line, b: &Line) -> Line {
    if let Some(point) = intersect_line_line(a, b) {
        return Line::point(point);
    }

    let candidates = [
        Line::new(a.p1, nearest_point_on_line(b, a.p1).0),
        Line::new(a.p2, nearest_point_on_line(b, a.p2).0),
        Line::new(nearest_point_on_line(a, b.p1).0, b.p1),
        Line::new(nearest_point_on_line(a, b.p2).0, b.p2),
    ];

    let mut best = candidates[0];
    let mut best_len_sq = best.length_squared();
    for candidate in &candidates[1..] {
        let len_sq = candidate.length_squared();
        if len_sq < best_len_sq {
            best = *candidate;
            best_len_sq = len_sq;
        }
    }
    best
}
