//! Logging setup for the CLI: console plus a per-run log file.
//!
//! The library only emits `tracing` events; this module is where the binary
//! decides what happens to them. Two layers are installed: a colourised
//! stderr layer at INFO (overridable via `RUST_LOG`) and a plain-text file
//! layer at DEBUG. Each run gets its own file under a date-sharded tree,
//! `<base>/<YYYY>/<MM-DD>/<YYYY-MM-DD_HH-MM-SS>.log`, so old runs never get
//! clobbered and a day's logs sit next to each other.

use crate::error::Pdf2EpubError;
use chrono::{DateTime, Local};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Install the global subscriber; returns the log-file path.
///
/// Call once, before any conversion starts. `base_dir` is the root of the
/// log tree (the CLI passes `.log`). Fails if the log file cannot be
/// created or a subscriber is already installed.
pub fn init(base_dir: &Path) -> Result<PathBuf, Pdf2EpubError> {
    let log_path = log_file_path(base_dir, &Local::now());
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Pdf2EpubError::LoggingInitFailed(e.to_string()))?;
    }
    let log_file =
        File::create(&log_path).map_err(|e| Pdf2EpubError::LoggingInitFailed(e.to_string()))?;

    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file))
        .with_filter(LevelFilter::DEBUG);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| Pdf2EpubError::LoggingInitFailed(e.to_string()))?;

    Ok(log_path)
}

/// `<base>/<YYYY>/<MM-DD>/<YYYY-MM-DD_HH-MM-SS>.log`
fn log_file_path(base_dir: &Path, now: &DateTime<Local>) -> PathBuf {
    base_dir
        .join(now.format("%Y").to_string())
        .join(now.format("%m-%d").to_string())
        .join(format!("{}.log", now.format("%Y-%m-%d_%H-%M-%S")))
}
