use serde::{Deserialize, Serialize};

use crate::fixed_math::{FixedNum, FixedVec2};

/// First contact found by a sweep test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SweepHit {
    /// Fraction of the displacement travelled before contact, in [0, 1].
    pub t: FixedNum,
    /// World-space contact point.
    pub point: FixedVec2,
    /// Position of the moving shape's reference point at the time of impact.
    pub centroid: FixedVec2,
    /// Unit normal pointing away from the obstacle.
    pub normal: FixedVec2,
}

impl SweepHit {
    /// Builds a hit, normalizing `normal` and substituting [`FixedVec2::X`] when it
    /// has zero length.
    pub fn new(t: FixedNum, point: FixedVec2, centroid: FixedVec2, normal: FixedVec2) -> Self {
        Self {
            t,
            point,
            centroid,
            normal: normal.normalize_or(FixedVec2::X),
        }
    }

    /// The earlier of two optional hits. On equal `t` the first one wins.
    pub fn earliest(a: Option<SweepHit>, b: Option<SweepHit>) -> Option<SweepHit> {
        match (a, b) {
            (Some(a), Some(b)) => Some(if b.t < a.t { b } else { a }),
            (a, None) => a,
            (None, b) => b,
        }
    }
}
