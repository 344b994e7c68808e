use serde::{Deserialize, Serialize};

use crate::fixed_math::FixedNum;

use super::curve::SodCurve;
use super::value::SodValue;

/// Integration state of one filtered value.
///
/// Holds no curve: the same state can be driven by any [`SodCurve`], and many
/// states can share one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SodState<T> {
    /// Value at the last whole sub-step.
    pub previous_value: T,
    pub velocity: T,
    /// Target seen by the last whole sub-step.
    pub previous_target: T,
    pub target: T,
    /// Interpolated value between sub-steps; what callers sample.
    pub value: T,
    /// Time not yet consumed by a whole sub-step, in [0, timestep).
    pub remainder: FixedNum,
    /// Total time fed through [`update`](SodState::update).
    pub time: FixedNum,
}

impl<T: SodValue> SodState<T> {
    /// A state at rest on `value`.
    pub fn new(value: T) -> Self {
        let mut state = Self::default();
        state.reset(value, true, true);
        state
    }

    /// Snaps value, previous value and both targets to `value`.
    pub fn reset(&mut self, value: T, reset_velocity: bool, reset_time: bool) {
        self.previous_value = value;
        self.previous_target = value;
        self.target = value;
        self.value = value;
        if reset_velocity {
            self.velocity = T::default();
        }
        if reset_time {
            self.remainder = FixedNum::ZERO;
            self.time = FixedNum::ZERO;
        }
    }

    /// Advances by `dt` and returns the new interpolated value.
    ///
    /// Only whole sub-steps change the integration state and the remainder is kept
    /// in time units, so any split of the same total `dt` into `update` calls lands
    /// on identical bits. Negative `dt` is treated as zero.
    pub fn update(&mut self, curve: &SodCurve, dt: FixedNum) -> T {
        let dt = dt.max(FixedNum::ZERO);
        let step = curve.timestep();

        self.time += dt;
        self.remainder += dt;

        while self.remainder >= step {
            self.previous_value = self.previous_value + self.velocity * step;
            let spring = self.target + (self.target - self.previous_target) * curve.k3()
                - self.previous_value
                - self.velocity * curve.k1();
            self.velocity = self.velocity + spring / curve.k2();
            self.previous_target = self.target;
            self.remainder -= step;
        }

        self.value = self.previous_value + self.velocity * self.remainder;
        self.value
    }

    /// Unconsumed part of a sub-step as a fraction of `curve`'s timestep, in [0, 1).
    pub fn time_fraction(&self, curve: &SodCurve) -> FixedNum {
        self.remainder / curve.timestep()
    }

    /// Value this state would report after `dt`, leaving `self` untouched.
    pub fn extrapolate(&self, curve: &SodCurve, dt: FixedNum) -> T {
        let mut preview = *self;
        preview.update(curve, dt)
    }
}
