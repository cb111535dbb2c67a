//! Logging setup: progress streams to stdout and to a timestamped file
//! under `logs/`. This is observational only — the core engine never
//! treats a log line as a control signal.

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Installs a `tracing` subscriber writing to stdout and to
/// `logs/<prefix>_<timestamp>.log`. Returns the log file path.
pub fn init_logging(prefix: &str) -> Result<PathBuf> {
    let log_dir = PathBuf::from("logs");
    fs::create_dir_all(&log_dir).context("unable to create logs/ directory")?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = log_dir.join(format!("{prefix}_{timestamp}.log"));

    let log_file = File::create(&log_path)
        .with_context(|| format!("unable to create log file at {}", log_path.display()))?;

    let writer = std::io::stdout.and(log_file);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(log_path)
}
