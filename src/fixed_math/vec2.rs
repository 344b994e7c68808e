use serde::{Deserialize, Serialize};

use super::ops::sqrt_or_zero;
use super::trig::{atan2, cos, sin};
use super::FixedNum;

/// Two-component fixed-point vector.
///
/// Equality and hashing are bit-pattern identity, there is no epsilon comparison
/// anywhere in the kernel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedVec2 {
    pub x: FixedNum,
    pub y: FixedNum,
}

impl FixedVec2 {
    pub const ZERO: Self = Self { x: FixedNum::ZERO, y: FixedNum::ZERO };
    /// Unit +X axis. Also the fallback normal for degenerate contacts.
    pub const X: Self = Self { x: FixedNum::from_bits(1 << 16), y: FixedNum::ZERO };
    /// Unit +Y axis.
    pub const Y: Self = Self { x: FixedNum::ZERO, y: FixedNum::from_bits(1 << 16) };

    pub fn new(x: FixedNum, y: FixedNum) -> Self {
        Self { x, y }
    }

    pub fn splat(value: FixedNum) -> Self {
        Self { x: value, y: value }
    }

    pub fn from_f32(x: f32, y: f32) -> Self {
        Self {
            x: FixedNum::from_num(x),
            y: FixedNum::from_num(y),
        }
    }

    /// Convert for display or rendering. Never feed the result back into the kernel.
    pub fn to_f32(self) -> (f32, f32) {
        (self.x.to_num(), self.y.to_num())
    }

    /// Unit vector pointing at `angle` radians from +X.
    pub fn from_angle(angle: FixedNum) -> Self {
        Self { x: cos(angle), y: sin(angle) }
    }

    /// Angle from +X in radians, in (-π, π].
    pub fn angle(self) -> FixedNum {
        atan2(self.y, self.x)
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    pub fn length(self) -> FixedNum {
        let len_sq = self.length_squared();
        if len_sq == FixedNum::ZERO {
            return FixedNum::ZERO;
        }
        sqrt_or_zero(len_sq)
    }

    pub fn length_squared(self) -> FixedNum {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector in the same direction, or zero for a zero-length input.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == FixedNum::ZERO {
            Self::ZERO
        } else {
            Self {
                x: self.x / len,
                y: self.y / len,
            }
        }
    }

    /// Like [`normalize`](Self::normalize) but substitutes `fallback` when the result
    /// would be zero.
    pub fn normalize_or(self, fallback: Self) -> Self {
        let n = self.normalize();
        if n.is_zero() {
            fallback
        } else {
            n
        }
    }

    pub fn distance(self, other: Self) -> FixedNum {
        (self - other).length()
    }

    pub fn distance_squared(self, other: Self) -> FixedNum {
        (self - other).length_squared()
    }

    pub fn dot(self, other: Self) -> FixedNum {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of the two vectors.
    pub fn cross(self, other: Self) -> FixedNum {
        self.x * other.y - self.y * other.x
    }

    /// Counter-clockwise quarter turn.
    pub fn rotate_90(self) -> Self {
        Self { x: -self.y, y: self.x }
    }

    pub fn rotate_180(self) -> Self {
        -self
    }

    pub fn rotate_270(self) -> Self {
        Self { x: self.y, y: -self.x }
    }

    pub fn abs(self) -> Self {
        Self { x: self.x.abs(), y: self.y.abs() }
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Self { x: self.x.min(other.x), y: self.y.min(other.y) }
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self { x: self.x.max(other.x), y: self.y.max(other.y) }
    }

    /// Component-wise clamp. `min` must not exceed `max` on either axis.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self {
            x: self.x.clamp(min.x, max.x),
            y: self.y.clamp(min.y, max.y),
        }
    }

    pub fn lerp(self, other: Self, t: FixedNum) -> Self {
        self + (other - self) * t
    }
}

impl std::ops::Add for FixedVec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for FixedVec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<FixedNum> for FixedVec2 {
    type Output = Self;
    fn mul(self, rhs: FixedNum) -> Self::Output {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl std::ops::Div<FixedNum> for FixedVec2 {
    type Output = Self;
    fn div(self, rhs: FixedNum) -> Self::Output {
        Self { x: self.x / rhs, y: self.y / rhs }
    }
}

impl std::ops::Neg for FixedVec2 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self { x: -self.x, y: -self.y }
    }
}

impl std::ops::AddAssign for FixedVec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::SubAssign for FixedVec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}
