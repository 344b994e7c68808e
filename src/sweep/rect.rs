use crate::fixed_math::{sign, FixedNum, FixedVec2, ONE, TWO};
use crate::query::{nearest_point_on_rect_edge, overlaps_rect_rect};
use crate::shapes::Rect;

use super::hit::SweepHit;

/// Moving point against a rect.
///
/// Velocities with a zero component are handled as a single-axis crossing; the
/// rest go through the slab test. When both slabs are entered at the same time the
/// x face is reported.
pub fn sweep_point_vs_rect(point: FixedVec2, velocity: FixedVec2, rect: &Rect) -> Option<SweepHit> {
    let rect = rect.normalized();
    if rect.contains_point(point) {
        let edge = nearest_point_on_rect_edge(&rect, point);
        return Some(SweepHit::new(FixedNum::ZERO, point, point, edge - point));
    }
    if velocity.is_zero() {
        return None;
    }

    let min = rect.min;
    let max = rect.max();

    if velocity.y == FixedNum::ZERO {
        if point.y <= min.y || point.y >= max.y {
            return None;
        }
        let face = if velocity.x > FixedNum::ZERO { min.x } else { max.x };
        let t = crossing_time(face - point.x, velocity.x)?;
        let contact = FixedVec2::new(face, point.y);
        return Some(SweepHit::new(t, contact, contact, FixedVec2::new(-sign(velocity.x), FixedNum::ZERO)));
    }

    if velocity.x == FixedNum::ZERO {
        if point.x <= min.x || point.x >= max.x {
            return None;
        }
        let face = if velocity.y > FixedNum::ZERO { min.y } else { max.y };
        let t = crossing_time(face - point.y, velocity.y)?;
        let contact = FixedVec2::new(point.x, face);
        return Some(SweepHit::new(t, contact, contact, FixedVec2::new(FixedNum::ZERO, -sign(velocity.y))));
    }

    let (near_face_x, far_face_x) = if velocity.x > FixedNum::ZERO { (min.x, max.x) } else { (max.x, min.x) };
    let (near_face_y, far_face_y) = if velocity.y > FixedNum::ZERO { (min.y, max.y) } else { (max.y, min.y) };

    let near_x = (near_face_x - point.x).saturating_div(velocity.x);
    let far_x = (far_face_x - point.x).saturating_div(velocity.x);
    let near_y = (near_face_y - point.y).saturating_div(velocity.y);
    let far_y = (far_face_y - point.y).saturating_div(velocity.y);

    if near_x > far_y || near_y > far_x {
        return None;
    }

    let near_time = near_x.max(near_y);
    let far_time = far_x.min(far_y);
    if near_time > ONE || far_time <= FixedNum::ZERO {
        return None;
    }

    let t = near_time.clamp(FixedNum::ZERO, ONE);
    let (contact, normal) = if near_x >= near_y {
        (
            FixedVec2::new(near_face_x, point.y + velocity.y * t),
            FixedVec2::new(-sign(velocity.x), FixedNum::ZERO),
        )
    } else {
        (
            FixedVec2::new(point.x + velocity.x * t, near_face_y),
            FixedVec2::new(FixedNum::ZERO, -sign(velocity.y)),
        )
    };
    Some(SweepHit::new(t, contact, contact, normal))
}

/// Moving rect against a fixed rect.
///
/// The moving rect's center is swept against `target` grown by the moving half
/// size. The contact point lies on the struck face of `target`, centred on the
/// span the two rects share along that face at the time of impact.
pub fn sweep_rect_vs_rect(moving: &Rect, velocity: FixedVec2, target: &Rect) -> Option<SweepHit> {
    let moving = moving.normalized();
    let target = target.normalized();
    let center = moving.center();
    let expanded = target.expanded(moving.half_extents());

    if overlaps_rect_rect(&moving, &target) {
        let point = moving
            .intersection(&target)
            .map_or(center, |overlap| overlap.center());
        let edge = nearest_point_on_rect_edge(&expanded, center);
        return Some(SweepHit::new(FixedNum::ZERO, point, center, edge - center));
    }
    // Halving odd sizes rounds, so the grown rect can admit a center that the
    // overlap test rejects.
    if velocity.is_zero() {
        return None;
    }

    let hit = sweep_point_vs_rect(center, velocity, &expanded)?;
    let moved = moving.translated(hit.centroid - center);
    let (moved_max, target_max) = (moved.max(), target.max());

    let point = if hit.normal.x != FixedNum::ZERO {
        let x = if hit.normal.x < FixedNum::ZERO { target.min.x } else { target_max.x };
        let y = span_midpoint(moved.min.y, moved_max.y, target.min.y, target_max.y);
        FixedVec2::new(x, y)
    } else {
        let y = if hit.normal.y < FixedNum::ZERO { target.min.y } else { target_max.y };
        let x = span_midpoint(moved.min.x, moved_max.x, target.min.x, target_max.x);
        FixedVec2::new(x, y)
    };

    Some(SweepHit::new(hit.t, point, hit.centroid, hit.normal))
}

/// Fraction of `speed` needed to cover `distance`, if it lies in [0, 1].
fn crossing_time(distance: FixedNum, speed: FixedNum) -> Option<FixedNum> {
    let t = distance.saturating_div(speed);
    (FixedNum::ZERO..=ONE).contains(&t).then_some(t)
}

fn span_midpoint(a_min: FixedNum, a_max: FixedNum, b_min: FixedNum, b_max: FixedNum) -> FixedNum {
    let lo = a_min.max(b_min);
    let hi = a_max.min(b_max);
    (lo.min(hi) + lo.max(hi)) / TWO
}
