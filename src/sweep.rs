//! Sweep Engine: continuous collision tests.
//!
//! A sweep moves one shape by a displacement `velocity` over the unit interval and
//! reports the first contact with another shape as a [`SweepHit`]. Every test
//! follows the same outline:
//!
//! 1. **Already overlapping**: the matching static predicate from
//!    [`query`](crate::query) is true, so the hit is returned at `t = 0`.
//! 2. **No intersection along the path**: `None`. A zero velocity always lands here
//!    unless the shapes already overlap.
//! 3. **Hit found**: `t` in [0, 1] with contact point, centroid and normal.
//!
//! The pairwise tests reduce to simpler primitives with a Minkowski sum: circle vs
//! circle becomes a point against a circle of the combined radius, rect vs rect
//! becomes the moving rect's center against the target grown by the moving half
//! size, and so on.
//!
//! Two tie-break rules to be aware of:
//! - [`sweep_point_vs_rect`] prefers the x face when both slabs are entered at the
//!   same time.
//! - [`sweep_point_vs_capsule`] falls back to the capsule's first endpoint when the
//!   body contact projects outside the spine.

pub mod capsule;
pub mod circle;
pub mod hit;
pub mod rect;

#[cfg(test)]
mod tests;

pub use capsule::{sweep_circle_vs_capsule, sweep_point_vs_capsule};
pub use circle::{
    sweep_circle_vs_circle, sweep_circle_vs_line, sweep_circle_vs_point, sweep_circle_vs_ray,
    sweep_circle_vs_sweep_circle,
};
pub use hit::SweepHit;
pub use rect::{sweep_point_vs_rect, sweep_rect_vs_rect};
