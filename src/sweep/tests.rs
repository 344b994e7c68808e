use super::*;
use crate::fixed_math::{FixedNum, FixedVec2};
use crate::shapes::{Capsule, Circle, Line, Ray, Rect};

fn v(x: f32, y: f32) -> FixedVec2 {
    FixedVec2::from_f32(x, y)
}

fn fx(value: f32) -> FixedNum {
    FixedNum::from_num(value)
}

fn near(a: FixedNum, b: f32) -> bool {
    (a - fx(b)).abs() <= fx(0.001)
}

fn near_vec(a: FixedVec2, x: f32, y: f32) -> bool {
    near(a.x, x) && near(a.y, y)
}

// ============================================================================
// SweepHit
// ============================================================================

#[test]
fn test_hit_normal_is_normalized_with_fallback() {
    let hit = SweepHit::new(FixedNum::ZERO, v(0.0, 0.0), v(0.0, 0.0), v(0.0, 3.0));
    assert_eq!(hit.normal, FixedVec2::Y);

    let degenerate = SweepHit::new(FixedNum::ZERO, v(0.0, 0.0), v(0.0, 0.0), FixedVec2::ZERO);
    assert_eq!(degenerate.normal, FixedVec2::X, "Zero normal should fall back to +X");
}

#[test]
fn test_earliest_prefers_first_on_ties() {
    let a = SweepHit::new(fx(0.5), v(1.0, 0.0), v(1.0, 0.0), FixedVec2::X);
    let b = SweepHit::new(fx(0.5), v(2.0, 0.0), v(2.0, 0.0), FixedVec2::Y);
    let c = SweepHit::new(fx(0.25), v(3.0, 0.0), v(3.0, 0.0), FixedVec2::Y);

    assert_eq!(SweepHit::earliest(Some(a), Some(b)), Some(a));
    assert_eq!(SweepHit::earliest(Some(a), Some(c)), Some(c));
    assert_eq!(SweepHit::earliest(None, Some(b)), Some(b));
    assert_eq!(SweepHit::earliest(Some(a), None), Some(a));
    assert_eq!(SweepHit::earliest(None, None), None);
}

// ============================================================================
// Point vs Rect
// ============================================================================

#[test]
fn test_point_vs_rect_axis_aligned_hit() {
    let rect = Rect::new(v(4.0, -1.0), v(2.0, 2.0));
    let hit = sweep_point_vs_rect(v(0.0, 0.0), v(10.0, 0.0), &rect).expect("Should hit the left face");

    assert!(near(hit.t, 0.4), "t = {:?}", hit.t);
    assert_eq!(hit.point, v(4.0, 0.0));
    assert_eq!(hit.centroid, v(4.0, 0.0));
    assert_eq!(hit.normal, v(-1.0, 0.0));
}

#[test]
fn test_point_vs_rect_negative_axis_hit() {
    let rect = Rect::new(v(4.0, -1.0), v(2.0, 2.0));
    let hit = sweep_point_vs_rect(v(10.0, 0.0), v(-10.0, 0.0), &rect).expect("Should hit the right face");

    assert!(near(hit.t, 0.4));
    assert_eq!(hit.point, v(6.0, 0.0));
    assert_eq!(hit.normal, v(1.0, 0.0));

    let vertical = sweep_point_vs_rect(v(5.0, 5.0), v(0.0, -10.0), &rect).expect("Should hit the top face");
    assert!(near(vertical.t, 0.4));
    assert_eq!(vertical.point, v(5.0, 1.0));
    assert_eq!(vertical.normal, v(0.0, 1.0));
}

#[test]
fn test_point_vs_rect_diagonal_y_face() {
    let rect = Rect::new(v(2.0, 4.0), v(4.0, 2.0));
    let hit = sweep_point_vs_rect(v(0.0, 0.0), v(10.0, 10.0), &rect).expect("Should hit the bottom face");

    assert!(near(hit.t, 0.4));
    assert_eq!(hit.point.y, fx(4.0), "Contact lies exactly on the face");
    assert!(near(hit.point.x, 4.0));
    assert_eq!(hit.normal, v(0.0, -1.0));
}

#[test]
fn test_point_vs_rect_corner_tie_prefers_x_face() {
    let rect = Rect::new(v(4.0, 4.0), v(2.0, 2.0));
    let hit = sweep_point_vs_rect(v(0.0, 0.0), v(10.0, 10.0), &rect).expect("Should hit the corner");

    assert_eq!(hit.normal, v(-1.0, 0.0), "Simultaneous entry reports the x face");
    assert_eq!(hit.point.x, fx(4.0));
}

#[test]
fn test_point_vs_rect_misses() {
    let rect = Rect::new(v(4.0, -1.0), v(2.0, 2.0));

    assert!(sweep_point_vs_rect(v(0.0, 0.0), v(2.0, 0.0), &rect).is_none(), "Too short");
    assert!(sweep_point_vs_rect(v(0.0, 0.0), v(-10.0, 0.0), &rect).is_none(), "Moving away");
    assert!(sweep_point_vs_rect(v(0.0, 1.0), v(10.0, 0.0), &rect).is_none(), "Grazing the top edge");
    assert!(
        sweep_point_vs_rect(v(0.0, 0.0), v(10.0, 10.0), &Rect::new(v(8.0, 0.0), v(2.0, 2.0))).is_none(),
        "Diagonal passes above"
    );
    assert!(sweep_point_vs_rect(v(4.0, 0.0), FixedVec2::ZERO, &rect).is_none(), "On the boundary, not moving");
}

#[test]
fn test_point_vs_rect_starting_inside() {
    let rect = Rect::new(v(4.0, -1.0), v(2.0, 2.0));
    let hit = sweep_point_vs_rect(v(4.5, 0.0), v(10.0, 0.0), &rect).expect("Already inside");

    assert_eq!(hit.t, FixedNum::ZERO);
    assert_eq!(hit.point, v(4.5, 0.0));
    assert_eq!(hit.normal, v(-1.0, 0.0), "Normal points towards the closest edge");
}

// ============================================================================
// Rect vs Rect
// ============================================================================

#[test]
fn test_rect_vs_rect_face_contact() {
    let moving = Rect::new(v(0.0, 0.0), v(2.0, 2.0));
    let target = Rect::new(v(6.0, 1.0), v(2.0, 2.0));
    let hit = sweep_rect_vs_rect(&moving, v(10.0, 0.0), &target).expect("Should hit");

    assert!(near(hit.t, 0.4));
    assert_eq!(hit.centroid, v(5.0, 1.0));
    assert_eq!(hit.normal, v(-1.0, 0.0));
    assert_eq!(hit.point, v(6.0, 1.5), "Midpoint of the shared span on the struck face");
}

#[test]
fn test_rect_vs_rect_vertical_contact() {
    let moving = Rect::new(v(0.0, 10.0), v(4.0, 2.0));
    let target = Rect::new(v(2.0, 0.0), v(4.0, 4.0));
    let hit = sweep_rect_vs_rect(&moving, v(0.0, -10.0), &target).expect("Should land on top");

    assert!(near(hit.t, 0.6));
    assert_eq!(hit.normal, v(0.0, 1.0));
    assert_eq!(hit.point, v(3.0, 4.0));
}

#[test]
fn test_rect_vs_rect_already_overlapping() {
    let a = Rect::new(v(0.0, 0.0), v(4.0, 4.0));
    let b = Rect::new(v(2.0, 2.0), v(4.0, 4.0));
    let hit = sweep_rect_vs_rect(&a, v(1.0, 0.0), &b).expect("Overlap is a hit at t = 0");

    assert_eq!(hit.t, FixedNum::ZERO);
    assert_eq!(hit.point, v(3.0, 3.0));
    assert_eq!(hit.centroid, v(2.0, 2.0));
    assert_eq!(hit.normal, v(-1.0, 0.0));
}

#[test]
fn test_rect_vs_rect_touching_and_missing() {
    let a = Rect::new(v(0.0, 0.0), v(2.0, 2.0));
    let touching = Rect::new(v(2.0, 0.0), v(2.0, 2.0));

    assert!(sweep_rect_vs_rect(&a, FixedVec2::ZERO, &touching).is_none());
    assert!(sweep_rect_vs_rect(&a, v(0.0, 10.0), &Rect::new(v(5.0, 5.0), v(1.0, 1.0))).is_none());
}

// ============================================================================
// Circles
// ============================================================================

#[test]
fn test_circle_vs_point_head_on() {
    let circle = Circle::new(v(0.0, 0.0), fx(1.0));
    let hit = sweep_circle_vs_point(&circle, v(10.0, 0.0), v(5.0, 0.0)).expect("Should hit");

    assert!(near(hit.t, 0.4));
    assert_eq!(hit.centroid, v(4.0, 0.0));
    assert_eq!(hit.point, v(5.0, 0.0));
    assert_eq!(hit.normal, v(-1.0, 0.0));
}

#[test]
fn test_circle_vs_point_off_axis() {
    let circle = Circle::new(v(0.0, 0.0), fx(1.0));
    let hit = sweep_circle_vs_point(&circle, v(10.0, 0.0), v(5.0, 0.6)).expect("Should graze");

    // back = sqrt(1 - 0.36) = 0.8
    assert!(near(hit.t, 0.42), "t = {:?}", hit.t);
    assert!(near_vec(hit.centroid, 4.2, 0.0));
    assert!(near_vec(hit.normal, -0.8, -0.6));
}

#[test]
fn test_circle_vs_point_rejections() {
    let circle = Circle::new(v(0.0, 0.0), fx(1.0));

    assert!(sweep_circle_vs_point(&circle, v(10.0, 0.0), v(-5.0, 0.0)).is_none(), "Behind");
    assert!(sweep_circle_vs_point(&circle, v(10.0, 0.0), v(5.0, 2.0)).is_none(), "Too far from the path");
    assert!(sweep_circle_vs_point(&circle, v(3.0, 0.0), v(5.0, 0.0)).is_none(), "Out of reach");
    assert!(sweep_circle_vs_point(&circle, FixedVec2::ZERO, v(5.0, 0.0)).is_none(), "Not moving");
}

#[test]
fn test_circle_vs_circle_scenario() {
    let c1 = Circle::new(v(0.0, 0.0), fx(1.0));
    let c2 = Circle::new(v(5.0, 0.0), fx(1.0));
    let hit = sweep_circle_vs_circle(&c1, v(10.0, 0.0), &c2).expect("Should hit");

    assert!(near(hit.t, 0.3), "t = {:?}", hit.t);
    assert_eq!(hit.centroid, v(3.0, 0.0));
    assert_eq!(hit.point, v(4.0, 0.0), "Contact is one radius ahead of the centroid");
    assert_eq!(hit.normal, v(-1.0, 0.0));
}

#[test]
fn test_circle_vs_circle_overlapping_and_touching() {
    let c1 = Circle::new(v(0.0, 0.0), fx(1.0));

    let overlapping = sweep_circle_vs_circle(&c1, FixedVec2::ZERO, &Circle::new(v(1.5, 0.0), fx(1.0)));
    assert_eq!(overlapping.map(|hit| hit.t), Some(FixedNum::ZERO));

    let touching = sweep_circle_vs_circle(&c1, FixedVec2::ZERO, &Circle::new(v(2.0, 0.0), fx(1.0)));
    assert!(touching.is_none());
}

#[test]
fn test_two_moving_circles() {
    let a = Circle::new(v(0.0, 0.0), fx(1.0));
    let b = Circle::new(v(10.0, 0.0), fx(1.0));
    let hit = sweep_circle_vs_sweep_circle(&a, v(10.0, 0.0), &b, v(-10.0, 0.0)).expect("Head-on");

    assert!(near(hit.t, 0.4));
    assert!(near_vec(hit.centroid, 4.0, 0.0));
    assert!(near_vec(hit.point, 5.0, 0.0));
    assert_eq!(hit.normal, v(-1.0, 0.0));

    let same = sweep_circle_vs_sweep_circle(&a, v(10.0, 0.0), &b, v(10.0, 0.0));
    assert!(same.is_none(), "Moving in lockstep never closes the gap");
}

// ============================================================================
// Circle vs Line / Ray
// ============================================================================

#[test]
fn test_circle_vs_line_body() {
    let circle = Circle::new(v(0.0, 5.0), fx(1.0));
    let line = Line::new(v(-5.0, 0.0), v(5.0, 0.0));
    let hit = sweep_circle_vs_line(&circle, v(0.0, -10.0), &line).expect("Should hit the body");

    assert!(near(hit.t, 0.4));
    assert!(near_vec(hit.centroid, 0.0, 1.0));
    assert!(near_vec(hit.point, 0.0, 0.0));
    assert_eq!(hit.normal, v(0.0, 1.0));
}

#[test]
fn test_circle_vs_line_end_cap() {
    let circle = Circle::new(v(5.6, 5.0), fx(1.0));
    let line = Line::new(v(-5.0, 0.0), v(5.0, 0.0));
    let hit = sweep_circle_vs_line(&circle, v(0.0, -10.0), &line).expect("Should clip the end");

    assert!(near(hit.t, 0.42), "t = {:?}", hit.t);
    assert_eq!(hit.point, v(5.0, 0.0));
    assert!(near_vec(hit.normal, 0.6, 0.8));
}

#[test]
fn test_circle_vs_line_misses_and_overlap() {
    let line = Line::new(v(-5.0, 0.0), v(5.0, 0.0));
    let above = Circle::new(v(0.0, 5.0), fx(1.0));

    assert!(sweep_circle_vs_line(&above, v(10.0, 0.0), &line).is_none(), "Parallel");
    assert!(sweep_circle_vs_line(&above, v(0.0, 10.0), &line).is_none(), "Moving away");
    assert!(sweep_circle_vs_line(&above, FixedVec2::ZERO, &line).is_none(), "Not moving");

    let resting = Circle::new(v(0.0, 0.5), fx(1.0));
    let hit = sweep_circle_vs_line(&resting, v(0.0, 10.0), &line).expect("Already overlapping");
    assert_eq!(hit.t, FixedNum::ZERO);
    assert_eq!(hit.point, v(0.0, 0.0));
    assert_eq!(hit.normal, v(0.0, 1.0));
}

#[test]
fn test_circle_vs_degenerate_line() {
    let circle = Circle::new(v(0.0, 0.0), fx(1.0));
    let hit = sweep_circle_vs_line(&circle, v(10.0, 0.0), &Line::point(v(5.0, 0.0))).expect("Point-like line");
    assert!(near(hit.t, 0.4));
}

#[test]
fn test_circle_vs_ray() {
    let ray = Ray::new(v(0.0, 0.0), v(1.0, 0.0));

    let body = sweep_circle_vs_ray(&Circle::new(v(1000.0, 5.0), fx(1.0)), v(0.0, -10.0), &ray)
        .expect("Rays are unbounded forward");
    assert!(near(body.t, 0.4));
    assert_eq!(body.normal, v(0.0, 1.0));

    let cap = sweep_circle_vs_ray(&Circle::new(v(-0.6, 5.0), fx(1.0)), v(0.0, -10.0), &ray)
        .expect("Should clip the origin");
    assert!(near(cap.t, 0.42));
    assert!(near_vec(cap.normal, -0.6, 0.8));

    let behind = sweep_circle_vs_ray(&Circle::new(v(-5.0, 5.0), fx(1.0)), v(0.0, -10.0), &ray);
    assert!(behind.is_none(), "Nothing behind the origin");
}

// ============================================================================
// Capsules
// ============================================================================

fn capsule() -> Capsule {
    Capsule::new(v(0.0, 0.0), v(10.0, 0.0), fx(1.0))
}

#[test]
fn test_point_vs_capsule_body() {
    let hit = sweep_point_vs_capsule(v(5.0, 5.0), v(0.0, -10.0), &capsule()).expect("Should hit the body");

    assert!(near(hit.t, 0.4));
    assert!(near_vec(hit.point, 5.0, 1.0));
    assert_eq!(hit.normal, v(0.0, 1.0));
}

#[test]
fn test_point_vs_capsule_contact_is_the_moving_point() {
    let body = sweep_point_vs_capsule(v(5.0, 5.0), v(0.0, -10.0), &capsule()).expect("Body hit");
    let cap = sweep_point_vs_capsule(v(-5.0, -5.0), v(6.0, 6.0), &capsule()).expect("Cap hit");

    for hit in [body, cap] {
        assert_eq!(hit.point, hit.centroid, "Contact lies on the surface, where the point is");
    }
    assert!(near(body.point.y, 1.0), "One radius above the spine, got {:?}", body.point.y);
}

#[test]
fn test_point_vs_capsule_end_cap() {
    let hit = sweep_point_vs_capsule(v(-5.0, -5.0), v(6.0, 6.0), &capsule()).expect("Should hit the p1 cap");

    // Distance to first contact is |(5, 5)| - 1 over a travel of |(6, 6)|.
    assert!(near(hit.t, 0.7155), "t = {:?}", hit.t);
    assert!(near_vec(hit.normal, -0.7071, -0.7071));
}

#[test]
fn test_point_vs_capsule_parallel_path_reaches_cap() {
    let hit = sweep_point_vs_capsule(v(-5.0, 0.5), v(10.0, 0.0), &capsule()).expect("Should hit the p1 cap");

    // back = sqrt(1 - 0.25)
    assert!(near(hit.t, 0.4134), "t = {:?}", hit.t);
    assert!(near_vec(hit.point, -0.866, 0.5));
}

#[test]
fn test_point_vs_capsule_inside_and_misses() {
    let inside = sweep_point_vs_capsule(v(5.0, 0.5), v(3.0, 0.0), &capsule()).expect("Already inside");
    assert_eq!(inside.t, FixedNum::ZERO);
    assert_eq!(inside.normal, v(0.0, 1.0));

    assert!(sweep_point_vs_capsule(v(5.0, 5.0), v(10.0, 0.0), &capsule()).is_none(), "Passes above");
    assert!(sweep_point_vs_capsule(v(5.0, 5.0), FixedVec2::ZERO, &capsule()).is_none(), "Not moving");
}

#[test]
fn test_point_vs_capsule_out_of_range_body_uses_first_endpoint() {
    // The path crosses the spine near p2 but its body contact projects past p2.
    // The first endpoint's disc is tested instead, which this path never reaches,
    // so the far cap contact goes unreported.
    let start = v(12.5, 3.0);
    let velocity = v(-6.0, -6.0);

    assert!(sweep_point_vs_capsule(start, velocity, &capsule()).is_none());
    assert!(
        sweep_circle_vs_point(&Circle::new(start, fx(1.0)), velocity, v(10.0, 0.0)).is_some(),
        "The p2 cap alone would have been hit"
    );
}

#[test]
fn test_circle_vs_capsule() {
    let circle = Circle::new(v(5.0, 5.0), fx(0.5));
    let hit = sweep_circle_vs_capsule(&circle, v(0.0, -10.0), &capsule()).expect("Should hit");

    assert!(near(hit.t, 0.35));
    assert!(near_vec(hit.centroid, 5.0, 1.5));
    assert!(near_vec(hit.point, 5.0, 1.0));
    assert_eq!(hit.normal, v(0.0, 1.0));
}
