use tracing::trace;

use crate::fixed_math::{FixedNum, FixedVec2, ONE};
use crate::query::{nearest_point_on_line, shortest_line_between_lines};
use crate::shapes::{Capsule, Circle, Line};

use super::circle::{line_body_contact, sweep_circle_vs_point};
use super::hit::SweepHit;

/// Moving point against a capsule.
///
/// The shortest segment between the point's path and the spine rejects misses
/// early. Where that closest approach lands on the spine decides which features
/// are tested:
///
/// - at an endpoint: that endpoint's disc and the body, earliest wins;
/// - mid-body: the body alone.
///
/// When the mid-body contact projects outside the spine, the first endpoint's
/// disc is swept instead. That is not the true contact in every configuration;
/// a path that clips the far end of the capsule can be reported as a miss.
pub fn sweep_point_vs_capsule(point: FixedVec2, velocity: FixedVec2, capsule: &Capsule) -> Option<SweepHit> {
    let spine = capsule.spine();
    if capsule.contains_point(point) {
        let (closest, _) = nearest_point_on_line(&spine, point);
        return Some(SweepHit::new(FixedNum::ZERO, point, point, point - closest));
    }
    if velocity.is_zero() {
        return None;
    }

    let path = Line::new(point, point + velocity);
    let shortest = shortest_line_between_lines(&path, &spine);
    if shortest.length_squared() > capsule.radius_squared() {
        return None;
    }

    let inflated = Circle::new(point, capsule.radius);
    let first_cap = || cap_contact(&inflated, velocity, capsule.p1);
    if spine.is_degenerate() {
        return first_cap();
    }

    let length = spine.length();
    let body = line_body_contact(&inflated, velocity, spine.p1, spine.direction());
    // A rim contact of the inflated point lands on the spine; the surface contact is the point itself.
    let body_in_range = body
        .filter(|(_, along)| *along >= FixedNum::ZERO && *along <= length)
        .map(|(hit, _)| SweepHit::new(hit.t, hit.centroid, hit.centroid, hit.normal));

    let (_, u) = nearest_point_on_line(&spine, shortest.p2);
    if u == FixedNum::ZERO {
        return SweepHit::earliest(first_cap(), body_in_range);
    }
    if u == ONE {
        return SweepHit::earliest(cap_contact(&inflated, velocity, capsule.p2), body_in_range);
    }

    if body_in_range.is_some() {
        return body_in_range;
    }

    trace!(
        "capsule sweep: body contact outside spine (along={:?}, length={:?}), using first endpoint",
        body.map(|(_, along)| along),
        length
    );
    first_cap()
}

/// Moving circle against a capsule, reduced to [`sweep_point_vs_capsule`] against a
/// capsule with the combined radius.
pub fn sweep_circle_vs_capsule(circle: &Circle, velocity: FixedVec2, capsule: &Capsule) -> Option<SweepHit> {
    let grown = Capsule::new(capsule.p1, capsule.p2, capsule.radius + circle.radius);
    let hit = sweep_point_vs_capsule(circle.origin, velocity, &grown)?;
    let point = hit.centroid - hit.normal * circle.radius;
    Some(SweepHit::new(hit.t, point, hit.centroid, hit.normal))
}

/// Point against one rounded end: the same math as a circle of the capsule's
/// radius sweeping towards the endpoint.
fn cap_contact(inflated: &Circle, velocity: FixedVec2, endpoint: FixedVec2) -> Option<SweepHit> {
    let hit = sweep_circle_vs_point(inflated, velocity, endpoint)?;
    Some(SweepHit::new(hit.t, hit.centroid, hit.centroid, hit.normal))
}
