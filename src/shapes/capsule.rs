use serde::{Deserialize, Serialize};

use crate::fixed_math::{FixedNum, FixedVec2};

use super::{Bounded, Line, Rect};

/// Segment `p1`-`p2` swept by a disc of `radius`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capsule {
    pub p1: FixedVec2,
    pub p2: FixedVec2,
    pub radius: FixedNum,
}

impl Capsule {
    pub fn new(p1: FixedVec2, p2: FixedVec2, radius: FixedNum) -> Self {
        Self { p1, p2, radius }
    }

    /// The segment the disc is swept along.
    pub fn spine(&self) -> Line {
        Line::new(self.p1, self.p2)
    }

    pub fn radius_squared(&self) -> FixedNum {
        self.radius * self.radius
    }

    /// Strict interior test against the swept disc.
    pub fn contains_point(&self, point: FixedVec2) -> bool {
        crate::query::capsule_contains_point(self, point)
    }

    pub fn translated(&self, offset: FixedVec2) -> Self {
        Self {
            p1: self.p1 + offset,
            p2: self.p2 + offset,
            ..*self
        }
    }
}

impl Bounded for Capsule {
    fn bounds(&self) -> Rect {
        self.spine().bounds().expanded(FixedVec2::splat(self.radius))
    }
}
