use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::KestrelError;

/// Installs a global subscriber writing to stdout and to a fresh timestamped file.
///
/// Older log files beyond `keep_files` are deleted first. `RUST_LOG` overrides the
/// configured filter. If a global subscriber already exists the file is still
/// created but nothing is installed. Returns the path of the new log file.
pub fn setup_file_logging(config: &LoggingConfig) -> Result<PathBuf, KestrelError> {
    let log_dir = PathBuf::from(&config.directory);
    fs::create_dir_all(&log_dir)?;

    let removed = cleanup_old_logs(&log_dir, &config.file_prefix, config.keep_files)?;

    let now = chrono::Local::now();
    let log_filename = format!("{}_{}.log", config.file_prefix, now.format("%Y%m%d_%H%M%S"));
    let log_file_path = log_dir.join(&log_filename);

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(&log_filename)
        .build(&log_dir)?;

    let file_layer = fmt::layer().with_writer(file_appender).with_ansi(false);

    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init();
    if let Err(e) = installed {
        debug!("Global subscriber already set, keeping it: {}", e);
    }
    debug!("Removed {} old log file(s) from {}", removed, log_dir.display());

    Ok(log_file_path)
}

/// Deletes the oldest `<prefix>*.log` files in `log_dir` until `keep_count` remain.
///
/// Files are ordered by modification time, then by name when times tie. Returns
/// how many files were removed; a file that cannot be removed is logged and
/// skipped.
pub fn cleanup_old_logs(log_dir: &Path, prefix: &str, keep_count: usize) -> Result<usize, KestrelError> {
    let mut logs = Vec::new();
    for entry in fs::read_dir(log_dir)? {
        let path = entry?.path();
        let is_log = path.extension().is_some_and(|ext| ext == "log")
            && path.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.starts_with(prefix));
        if !is_log {
            continue;
        }
        let modified = fs::metadata(&path).and_then(|m| m.modified()).ok();
        logs.push((modified, path));
    }

    let excess = logs.len().saturating_sub(keep_count);
    if excess == 0 {
        return Ok(0);
    }
    logs.sort();

    let mut removed = 0;
    for (_, path) in logs.into_iter().take(excess) {
        match fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(e) => warn!("Could not remove old log {}: {}", path.display(), e),
        }
    }
    Ok(removed)
}
