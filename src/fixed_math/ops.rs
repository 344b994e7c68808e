use super::FixedNum;

/// 1.0
pub const ONE: FixedNum = FixedNum::from_bits(1 << 16);
/// 0.5
pub const HALF: FixedNum = FixedNum::from_bits(1 << 15);
/// 2.0
pub const TWO: FixedNum = FixedNum::from_bits(2 << 16);
/// π rounded to the nearest representable value.
pub const PI: FixedNum = FixedNum::from_bits(205_887);
/// π / 2
pub const FRAC_PI_2: FixedNum = FixedNum::from_bits(102_944);
/// 2π
pub const TAU: FixedNum = FixedNum::from_bits(411_775);

/// Reciprocal that never divides by zero.
///
/// `recip_saturating(0)` returns `FixedNum::MAX`, the positive "infinity" sentinel,
/// so that `sign(recip_saturating(0)) == 1` just like IEEE `1 / +0`. Callers that
/// multiply by the result must use saturating multiplication.
#[inline]
pub fn recip_saturating(x: FixedNum) -> FixedNum {
    if x == FixedNum::ZERO {
        FixedNum::MAX
    } else {
        ONE.saturating_div(x)
    }
}

/// Sign of `x` as `-1`, `0` or `+1`.
#[inline]
pub fn sign(x: FixedNum) -> FixedNum {
    if x > FixedNum::ZERO {
        ONE
    } else if x < FixedNum::ZERO {
        -ONE
    } else {
        FixedNum::ZERO
    }
}

/// Square root that returns zero for non-positive input instead of panicking.
#[inline]
pub fn sqrt_or_zero(x: FixedNum) -> FixedNum {
    if x <= FixedNum::ZERO {
        FixedNum::ZERO
    } else {
        x.sqrt()
    }
}
