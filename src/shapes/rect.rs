use serde::{Deserialize, Serialize};

use crate::fixed_math::{FixedNum, FixedVec2, TWO};

use super::Bounded;

/// Axis-aligned rectangle stored as a `min` corner and a `size`.
///
/// `size` components may be negative; they are signed extents and `max()` is always
/// `min + size`. Queries work on [`normalized`](Rect::normalized), where the size is
/// non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub min: FixedVec2,
    pub size: FixedVec2,
}

impl Rect {
    pub fn new(min: FixedVec2, size: FixedVec2) -> Self {
        Self { min, size }
    }

    pub fn from_min_max(min: FixedVec2, max: FixedVec2) -> Self {
        Self { min, size: max - min }
    }

    pub fn from_center(center: FixedVec2, half_extents: FixedVec2) -> Self {
        Self {
            min: center - half_extents,
            size: half_extents * TWO,
        }
    }

    pub fn max(&self) -> FixedVec2 {
        self.min + self.size
    }

    pub fn center(&self) -> FixedVec2 {
        self.min + self.size / TWO
    }

    /// Half of the absolute size on each axis.
    pub fn half_extents(&self) -> FixedVec2 {
        self.size.abs() / TWO
    }

    pub fn width(&self) -> FixedNum {
        self.size.x.abs()
    }

    pub fn height(&self) -> FixedNum {
        self.size.y.abs()
    }

    /// Same region with a non-negative size.
    pub fn normalized(&self) -> Self {
        let max = self.max();
        Self::from_min_max(self.min.min(max), self.min.max(max))
    }

    /// Corners of the normalized rect, counter-clockwise from `min`.
    pub fn corners(&self) -> [FixedVec2; 4] {
        let r = self.normalized();
        let max = r.max();
        [
            r.min,
            FixedVec2::new(max.x, r.min.y),
            max,
            FixedVec2::new(r.min.x, max.y),
        ]
    }

    /// Strict interior test: points on the boundary are outside.
    pub fn contains_point(&self, point: FixedVec2) -> bool {
        let r = self.normalized();
        let max = r.max();
        point.x > r.min.x && point.x < max.x && point.y > r.min.y && point.y < max.y
    }

    /// Grown by `half_extents` on every side (Minkowski sum with a rect of that half size).
    pub fn expanded(&self, half_extents: FixedVec2) -> Self {
        let r = self.normalized();
        Self::new(r.min - half_extents, r.size + half_extents * TWO)
    }

    /// Overlapping region of two rects, or `None` if they are disjoint.
    /// Rects that only share an edge yield a zero-width region.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();
        let min = a.min.max(b.min);
        let max = a.max().min(b.max());
        if min.x > max.x || min.y > max.y {
            return None;
        }
        Some(Rect::from_min_max(min, max))
    }

    pub fn translated(&self, offset: FixedVec2) -> Self {
        Self { min: self.min + offset, ..*self }
    }
}

impl Bounded for Rect {
    fn bounds(&self) -> Rect {
        self.normalized()
    }
}
