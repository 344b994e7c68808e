use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::fixed_math::FixedNum;

use super::curve::SodCurve;
use super::state::SodState;

/// Anything a [`SodState`] can smooth: a fixed-point vector space over [`FixedNum`].
pub trait SodValue:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<FixedNum, Output = Self>
    + Div<FixedNum, Output = Self>
    + Default
    + PartialEq
    + Debug
    + Send
    + Sync
{
}

impl<T> SodValue for T where
    T: Copy
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<FixedNum, Output = T>
        + Div<FixedNum, Output = T>
        + Default
        + PartialEq
        + Debug
        + Send
        + Sync
{
}

/// A smoothed value bundled with the curve that drives it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sod<T> {
    curve: SodCurve,
    state: SodState<T>,
}

impl<T: SodValue> Sod<T> {
    pub fn new(curve: SodCurve, value: T) -> Self {
        Self {
            curve,
            state: SodState::new(value),
        }
    }

    pub fn curve(&self) -> &SodCurve {
        &self.curve
    }

    pub fn state(&self) -> &SodState<T> {
        &self.state
    }

    pub fn previous_value(&self) -> T {
        self.state.previous_value
    }

    pub fn velocity(&self) -> T {
        self.state.velocity
    }

    pub fn previous_target(&self) -> T {
        self.state.previous_target
    }

    pub fn target(&self) -> T {
        self.state.target
    }

    pub fn set_target(&mut self, target: T) {
        self.state.target = target;
    }

    pub fn value(&self) -> T {
        self.state.value
    }

    pub fn time(&self) -> FixedNum {
        self.state.time
    }

    pub fn update(&mut self, dt: FixedNum) -> T {
        self.state.update(&self.curve, dt)
    }

    pub fn reset(&mut self, value: T, reset_velocity: bool, reset_time: bool) {
        self.state.reset(value, reset_velocity, reset_time);
    }

    pub fn extrapolate(&self, dt: FixedNum) -> T {
        self.state.extrapolate(&self.curve, dt)
    }

    // Retuning keeps the state, so the value stays continuous.

    pub fn set_frequency(&mut self, frequency: FixedNum) {
        self.curve.set_frequency(frequency);
    }

    pub fn set_damping(&mut self, damping: FixedNum) {
        self.curve.set_damping(damping);
    }

    pub fn set_response(&mut self, response: FixedNum) {
        self.curve.set_response(response);
    }

    pub fn set_curve(&mut self, curve: SodCurve) {
        self.curve = curve;
    }
}
