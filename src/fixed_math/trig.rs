//! Deterministic trigonometric approximations.
//!
//! All functions evaluate polynomials in [`FixedNum`] only, so results are
//! identical on every platform. Absolute error is below 0.002.

use super::ops::{sqrt_or_zero, FRAC_PI_2, ONE, PI, TAU};
use super::FixedNum;

// 4/π, 4/π², and the parabola refinement weight 0.225
const SIN_B: FixedNum = FixedNum::from_bits(83_443);
const SIN_C: FixedNum = FixedNum::from_bits(26_561);
const SIN_P: FixedNum = FixedNum::from_bits(14_746);

// π/4 and the two correction terms of the atan polynomial
const ATAN_A: FixedNum = FixedNum::from_bits(51_472);
const ATAN_B: FixedNum = FixedNum::from_bits(16_037);
const ATAN_C: FixedNum = FixedNum::from_bits(4_345);

/// Wrap an angle into [-π, π).
fn wrap_angle(angle: FixedNum) -> FixedNum {
    let turns = ((angle + PI) / TAU).floor();
    angle - TAU * turns
}

/// Sine of an angle in radians.
pub fn sin(angle: FixedNum) -> FixedNum {
    let x = wrap_angle(angle);
    let y = SIN_B * x - SIN_C * x * x.abs();
    SIN_P * (y * y.abs() - y) + y
}

/// Cosine of an angle in radians.
pub fn cos(angle: FixedNum) -> FixedNum {
    sin(angle + FRAC_PI_2)
}

/// Arctangent for |z| <= 1.
fn atan_unit(z: FixedNum) -> FixedNum {
    let abs_z = z.abs();
    ATAN_A * z - z * (abs_z - ONE) * (ATAN_B + ATAN_C * abs_z)
}

/// Four-quadrant arctangent of `y / x`, in (-π, π]. `atan2(0, 0)` is zero.
pub fn atan2(y: FixedNum, x: FixedNum) -> FixedNum {
    if x == FixedNum::ZERO && y == FixedNum::ZERO {
        return FixedNum::ZERO;
    }

    if x.abs() >= y.abs() {
        let angle = atan_unit(y / x);
        if x > FixedNum::ZERO {
            angle
        } else if y >= FixedNum::ZERO {
            angle + PI
        } else {
            angle - PI
        }
    } else {
        let base = if y > FixedNum::ZERO { FRAC_PI_2 } else { -FRAC_PI_2 };
        base - atan_unit(x / y)
    }
}

/// Arcsine, with the input clamped to [-1, 1].
pub fn asin(x: FixedNum) -> FixedNum {
    let x = x.clamp(-ONE, ONE);
    atan2(x, sqrt_or_zero(ONE - x * x))
}
