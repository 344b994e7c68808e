use serde::{Deserialize, Serialize};

use crate::fixed_math::{FixedNum, FixedVec2, TWO};

use super::{Bounded, Rect};

/// Finite segment from `p1` to `p2`.
///
/// A segment with `p1 == p2` is degenerate: its direction and normal are zero and
/// callers must check [`is_degenerate`](Line::is_degenerate) before dividing by its length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    pub p1: FixedVec2,
    pub p2: FixedVec2,
}

impl Line {
    pub fn new(p1: FixedVec2, p2: FixedVec2) -> Self {
        Self { p1, p2 }
    }

    /// Zero-length segment at `point`.
    pub fn point(point: FixedVec2) -> Self {
        Self { p1: point, p2: point }
    }

    /// `p2 - p1`
    pub fn vector(&self) -> FixedVec2 {
        self.p2 - self.p1
    }

    pub fn length(&self) -> FixedNum {
        self.vector().length()
    }

    pub fn length_squared(&self) -> FixedNum {
        self.vector().length_squared()
    }

    pub fn direction(&self) -> FixedVec2 {
        self.vector().normalize()
    }

    /// Direction rotated a quarter turn counter-clockwise.
    pub fn normal(&self) -> FixedVec2 {
        self.direction().rotate_90()
    }

    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }

    /// Point at parameter `t`, where 0 is `p1` and 1 is `p2`.
    pub fn point_at(&self, t: FixedNum) -> FixedVec2 {
        self.p1 + self.vector() * t
    }

    pub fn midpoint(&self) -> FixedVec2 {
        self.p1 + self.vector() / TWO
    }

    pub fn reversed(&self) -> Self {
        Self { p1: self.p2, p2: self.p1 }
    }

    pub fn translated(&self, offset: FixedVec2) -> Self {
        Self { p1: self.p1 + offset, p2: self.p2 + offset }
    }
}

impl Bounded for Line {
    fn bounds(&self) -> Rect {
        Rect::from_min_max(self.p1.min(self.p2), self.p1.max(self.p2))
    }
}
