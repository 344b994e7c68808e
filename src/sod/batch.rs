#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::fixed_math::FixedNum;
use crate::profiling::profile;

use super::curve::SodCurve;
use super::state::SodState;
use super::value::{Sod, SodValue};

/// Advances every state by the same `dt` under one shared curve.
///
/// Each element reads and writes only itself, so the result is bit-identical
/// whether the `parallel` feature spreads the work over the rayon pool or not.
#[profile(2)]
pub fn update_batch<T: SodValue>(states: &mut [SodState<T>], curve: &SodCurve, dt: FixedNum) {
    #[cfg(feature = "parallel")]
    {
        states.par_iter_mut().for_each(|state| {
            state.update(curve, dt);
        });
    }

    #[cfg(not(feature = "parallel"))]
    {
        states.iter_mut().for_each(|state| {
            state.update(curve, dt);
        });
    }
}

/// Like [`update_batch`], for values that each carry their own curve.
#[profile(2)]
pub fn update_sods<T: SodValue>(sods: &mut [Sod<T>], dt: FixedNum) {
    #[cfg(feature = "parallel")]
    {
        sods.par_iter_mut().for_each(|sod| {
            sod.update(dt);
        });
    }

    #[cfg(not(feature = "parallel"))]
    {
        sods.iter_mut().for_each(|sod| {
            sod.update(dt);
        });
    }
}
