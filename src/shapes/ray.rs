use serde::{Deserialize, Serialize};

use crate::fixed_math::{FixedNum, FixedVec2};

use super::Line;

/// Half-line from `origin` along a unit `direction`.
///
/// Rays have no finite bounds; use [`segment`](Ray::segment) to get a bounded piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ray {
    pub origin: FixedVec2,
    pub direction: FixedVec2,
}

impl Ray {
    /// Builds a ray, normalizing `direction`. A zero direction stays zero.
    pub fn new(origin: FixedVec2, direction: FixedVec2) -> Self {
        Self { origin, direction: direction.normalize() }
    }

    /// Ray from `from` through `through`.
    pub fn from_points(from: FixedVec2, through: FixedVec2) -> Self {
        Self::new(from, through - from)
    }

    /// Ray from `origin` at `angle` radians from +X.
    pub fn from_angle(origin: FixedVec2, angle: FixedNum) -> Self {
        Self::new(origin, FixedVec2::from_angle(angle))
    }

    /// Direction rotated a quarter turn counter-clockwise.
    pub fn normal(&self) -> FixedVec2 {
        self.direction.rotate_90()
    }

    /// Point `distance` units along the ray.
    pub fn point_at(&self, distance: FixedNum) -> FixedVec2 {
        self.origin + self.direction * distance
    }

    /// The first `length` units of the ray as a segment.
    pub fn segment(&self, length: FixedNum) -> Line {
        Line::new(self.origin, self.point_at(length))
    }

    pub fn translated(&self, offset: FixedVec2) -> Self {
        Self { origin: self.origin + offset, ..*self }
    }
}
