//! Logging setup.
//!
//! File-based tracing so log output never shares a terminal with the
//! TUI. Logs go to a per-user data directory and are filtered via
//! `RUST_LOG` (default `info`).

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::app::AppError;

/// Default log directory under the per-user data directory.
const LOG_DIR_NAME: &str = "arwaypoint";

/// Resolve the default log directory (e.g. `~/.local/share/arwaypoint/logs`).
pub fn default_log_dir() -> Result<PathBuf, AppError> {
    dirs::data_local_dir()
        .map(|d| d.join(LOG_DIR_NAME).join("logs"))
        .ok_or_else(|| AppError::Config("could not resolve a user data directory".to_string()))
}

/// Initialize logging into the default log directory.
///
/// The returned guard must be held for the lifetime of the process;
/// dropping it flushes and stops the background writer.
pub fn init_logging() -> Result<WorkerGuard, AppError> {
    let dir = default_log_dir()?;
    init_logging_to(&dir)
}

/// Initialize logging into an explicit directory.
pub fn init_logging_to(dir: &Path) -> Result<WorkerGuard, AppError> {
    std::fs::create_dir_all(dir)
        .map_err(|e| AppError::Logging(format!("could not create {}: {}", dir.display(), e)))?;

    let appender = tracing_appender::rolling::daily(dir, "arwaypoint.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(guard)
}
