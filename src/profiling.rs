//! Opt-in timing of batch kernels.
//!
//! `#[profile]` logs `[PERF] <fn>: <elapsed>` through `tracing::info!` when the
//! `perf_stats` feature is enabled and the call exceeds its threshold in
//! milliseconds. Without the feature it expands to the bare function.

pub use kestrel_macros::profile;
