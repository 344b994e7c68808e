use serde::{Deserialize, Serialize};

use crate::fixed_math::{FixedNum, FixedVec2, TWO};

use super::{Bounded, Rect};

/// Disc with a non-negative radius. Validating the radius is the caller's job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Circle {
    pub origin: FixedVec2,
    pub radius: FixedNum,
}

impl Circle {
    pub fn new(origin: FixedVec2, radius: FixedNum) -> Self {
        Self { origin, radius }
    }

    pub fn radius_squared(&self) -> FixedNum {
        self.radius * self.radius
    }

    /// Strict interior test: points on the circle itself are outside.
    pub fn contains_point(&self, point: FixedVec2) -> bool {
        self.origin.distance_squared(point) < self.radius_squared()
    }

    pub fn translated(&self, offset: FixedVec2) -> Self {
        Self { origin: self.origin + offset, ..*self }
    }

    pub fn with_radius(&self, radius: FixedNum) -> Self {
        Self { radius, ..*self }
    }
}

impl Bounded for Circle {
    fn bounds(&self) -> Rect {
        Rect::new(
            self.origin - FixedVec2::splat(self.radius),
            FixedVec2::splat(self.radius * TWO),
        )
    }
}
