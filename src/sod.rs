//! Second-order dynamics (SOD) smoothing.
//!
//! A [`SodCurve`] turns the human-facing `(frequency, damping, response)` triple
//! into three integration coefficients. A [`SodState`] advances towards its target
//! in whole fixed sub-steps of the curve's virtual timestep, carrying the remainder
//! of each `update` call into the next one, exactly, in time units. Splitting the
//! same total time into different calls therefore never changes the state.
//!
//! - `frequency`: speed of the response in Hz.
//! - `damping`: 0 oscillates forever, 1 is critically damped, above 1 settles slowly.
//! - `response`: initial reaction; negative anticipates, above 1 overshoots.

pub mod batch;
pub mod curve;
pub mod state;
pub mod value;


pub use batch::{update_batch, update_sods};
pub use curve::SodCurve;
pub use state::SodState;
pub use value::{Sod, SodValue};
