//! Deterministic fixed-point mathematics library.
//!
//! This module provides deterministic math types and operations using fixed-point
//! arithmetic to ensure identical behavior across different platforms and architectures.
//! Every query and integrator in the crate is built on these types, so two machines
//! replaying the same inputs produce bit-identical outputs.
//!
//! # Overflow
//!
//! Ordinary operators follow the `fixed` crate: overflow traps in debug builds and
//! wraps in release builds. Code that deliberately multiplies by the "infinite"
//! sentinel from [`recip_saturating`] uses saturating multiplication instead.

use fixed::types::I48F16;

pub use ops::{recip_saturating, sign, sqrt_or_zero, FRAC_PI_2, HALF, ONE, PI, TAU, TWO};
pub use trig::{asin, atan2, cos, sin};
pub use vec2::FixedVec2;

mod ops;
mod trig;
mod vec2;


/// Fixed-point number type used throughout the kernel.
///
/// Uses I48F16 format: 48 bits for the integer part, 16 bits for the fractional part.
/// This provides a range of approximately ±140 trillion with a precision of ~0.000015.
pub type FixedNum = I48F16;
