use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fixed_math::{FixedNum, ONE, PI, TAU, TWO};

/// Coefficients of a second-order filter, kept in sync with the parameters that
/// produced them.
///
/// `k2` and `k3` are stored already divided by the timestep so a sub-step is a
/// single multiply-add per component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SodCurve {
    frequency: FixedNum,
    damping: FixedNum,
    response: FixedNum,
    timestep: FixedNum,
    k1: FixedNum,
    k2: FixedNum,
    k3: FixedNum,
}

impl SodCurve {
    /// Virtual sub-step length: 1/100 s.
    pub const TIMESTEP: FixedNum = FixedNum::from_bits(655);
    /// Frequencies below this are raised to it.
    pub const MIN_FREQUENCY: FixedNum = FixedNum::from_bits(66);

    pub fn new(frequency: FixedNum, damping: FixedNum, response: FixedNum) -> Self {
        Self::with_timestep(frequency, damping, response, Self::TIMESTEP)
    }

    pub fn with_timestep(frequency: FixedNum, damping: FixedNum, response: FixedNum, timestep: FixedNum) -> Self {
        debug_assert!(frequency > FixedNum::ZERO, "SOD frequency must be positive");
        debug_assert!(timestep > FixedNum::ZERO, "SOD timestep must be positive");
        let mut curve = Self {
            frequency,
            damping,
            response,
            timestep: timestep.max(FixedNum::DELTA),
            k1: FixedNum::ZERO,
            k2: ONE,
            k3: FixedNum::ZERO,
        };
        curve.recompute();
        curve
    }

    /// Raw coefficients, already scaled to the default timestep.
    ///
    /// The frequency, damping and response read back as zero. Calling a setter
    /// afterwards recomputes all three coefficients from the floored parameters.
    pub fn from_k_values(k1: FixedNum, k2: FixedNum, k3: FixedNum) -> Self {
        debug_assert!(k2 != FixedNum::ZERO, "k2 divides every sub-step");
        Self {
            frequency: FixedNum::ZERO,
            damping: FixedNum::ZERO,
            response: FixedNum::ZERO,
            timestep: Self::TIMESTEP,
            k1,
            k2: if k2 == FixedNum::ZERO { ONE } else { k2 },
            k3,
        }
    }

    pub fn frequency(&self) -> FixedNum {
        self.frequency
    }

    pub fn damping(&self) -> FixedNum {
        self.damping
    }

    pub fn response(&self) -> FixedNum {
        self.response
    }

    pub fn timestep(&self) -> FixedNum {
        self.timestep
    }

    pub fn k1(&self) -> FixedNum {
        self.k1
    }

    pub fn k2(&self) -> FixedNum {
        self.k2
    }

    pub fn k3(&self) -> FixedNum {
        self.k3
    }

    pub fn set_frequency(&mut self, frequency: FixedNum) {
        debug_assert!(frequency > FixedNum::ZERO, "SOD frequency must be positive");
        self.frequency = frequency;
        self.recompute();
    }

    pub fn set_damping(&mut self, damping: FixedNum) {
        self.damping = damping;
        self.recompute();
    }

    pub fn set_response(&mut self, response: FixedNum) {
        self.response = response;
        self.recompute();
    }

    /// Rebuilds `k1..k3` from the current parameters.
    ///
    /// `k2` is raised to the smallest value that keeps semi-implicit Euler stable
    /// at this timestep.
    pub fn recompute(&mut self) {
        debug_assert!(self.damping >= FixedNum::ZERO, "SOD damping must not be negative");

        let frequency = self.frequency.max(Self::MIN_FREQUENCY);
        let damping = self.damping.max(FixedNum::ZERO);
        let dt = self.timestep;

        let angular = TAU * frequency;
        let k1 = damping / (PI * frequency);
        let k2 = ONE / (angular * angular);
        let k3 = self.response * damping / angular;

        let stable = (dt * dt / TWO + dt * k1 / TWO).max(dt * k1);
        if k2 < stable {
            debug!(
                "SOD k2 clamped for stability: {:?} -> {:?} (frequency={:?}, damping={:?})",
                k2, stable, frequency, damping
            );
        }

        self.k1 = k1;
        self.k2 = k2.max(stable) / dt;
        self.k3 = k3 / dt;
    }
}

impl Default for SodCurve {
    /// One hertz, critically damped, no anticipation.
    fn default() -> Self {
        Self::new(ONE, ONE, FixedNum::ZERO)
    }
}
