//! Deterministic fixed-point 2D geometry and continuous collision.
//!
//! Everything that produces a simulation result runs on [`FixedNum`], so two
//! machines replaying the same inputs agree bit for bit.
//!
//! - [`shapes`]: circles, segments, rays, rects and capsules
//! - [`query`]: instantaneous overlap, intersection and nearest-point tests
//! - [`sweep`]: first time of impact of a moving shape against another
//! - [`sod`]: second-order dynamics smoothing on a fixed virtual timestep
//!
//! [`snapshot`], [`config`] and [`logging`] are the I/O edges; only they return
//! [`KestrelError`].

pub mod config;
pub mod error;
pub mod fixed_math;
pub mod logging;
pub mod profiling;
pub mod query;
pub mod shapes;
pub mod snapshot;
pub mod sod;
pub mod sweep;

pub use error::KestrelError;
pub use fixed_math::{FixedNum, FixedVec2};
pub use shapes::{Bounded, Capsule, Circle, Line, Ray, Rect, Shape};
pub use sod::{Sod, SodCurve, SodState, SodValue};
pub use sweep::SweepHit;
