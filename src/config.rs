//! Kernel configuration loaded from a RON file.
//!
//! Values are stored as human-readable floats and converted to fixed point in
//! exactly one place, [`SodConfig::curve`], so every consumer sees the same bits.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::KestrelError;
use crate::fixed_math::FixedNum;
use crate::sod::SodCurve;

pub const DEFAULT_CONFIG_PATH: &str = "assets/kestrel_config.ron";

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct KernelConfig {
    pub sod: SodConfig,
    pub logging: LoggingConfig,
}

/// Default SOD tuning. Changing `tick_rate` between runs changes the integrated
/// values, so replays must use the file they were recorded with.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SodConfig {
    /// Virtual sub-steps per second.
    pub tick_rate: f64,
    pub frequency: f32,
    pub damping: f32,
    pub response: f32,
}

impl Default for SodConfig {
    fn default() -> Self {
        Self {
            tick_rate: 100.0,
            frequency: 1.0,
            damping: 1.0,
            response: 0.0,
        }
    }
}

impl SodConfig {
    /// Sub-step length. Falls back to [`SodCurve::TIMESTEP`] for a tick rate that
    /// is not positive or does not fit the fixed format.
    pub fn timestep(&self) -> FixedNum {
        FixedNum::checked_from_num(1.0 / self.tick_rate)
            .filter(|step| *step > FixedNum::ZERO)
            .unwrap_or(SodCurve::TIMESTEP)
    }

    pub fn curve(&self) -> SodCurve {
        let defaults = Self::default();
        let fixed = |value: f32, fallback: f32| {
            FixedNum::checked_from_num(value).unwrap_or_else(|| FixedNum::from_num(fallback))
        };
        SodCurve::with_timestep(
            fixed(self.frequency, defaults.frequency),
            fixed(self.damping, defaults.damping),
            fixed(self.response, defaults.response),
            self.timestep(),
        )
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: String,
    /// Log files are named `<file_prefix>_<timestamp>.log`.
    pub file_prefix: String,
    /// How many old log files survive a new run.
    pub keep_files: usize,
    /// `EnvFilter` directives, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: "logs".to_string(),
            file_prefix: "kestrel".to_string(),
            keep_files: 25,
            filter: "kestrel=info".to_string(),
        }
    }
}

/// Loads `path`, falling back to defaults when it cannot be read or parsed.
pub fn load_config(path: impl AsRef<Path>) -> KernelConfig {
    let path = path.as_ref();
    match try_load_config(path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config from {}: {}", path.display(), e);
            error!("Using default KernelConfig");
            KernelConfig::default()
        }
    }
}

pub fn try_load_config(path: impl AsRef<Path>) -> Result<KernelConfig, KestrelError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let config = ron::from_str::<KernelConfig>(&contents)?;
    info!("Loaded kernel config from {}", path.display());
    Ok(config)
}
