use thiserror::Error;

/// Errors from the I/O-facing parts of the crate. Geometry and integration never fail.
#[derive(Debug, Error)]
pub enum KestrelError {
    /// Reading or writing a file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Config file is not valid RON for [`KernelConfig`](crate::config::KernelConfig).
    #[error("config error: {0}")]
    Config(#[from] ron::error::SpannedError),
    /// Snapshot bytes could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
    #[error("snapshot version {found} is not supported (expected {expected})")]
    SnapshotVersion { found: u32, expected: u32 },
    /// Log file appender could not be created.
    #[error("logging error: {0}")]
    Logging(#[from] tracing_appender::rolling::InitError),
}
