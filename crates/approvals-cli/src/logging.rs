// Rust guideline compliant 2026-10-18

//! Tracing setup for the `aq` binary.

use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Parses a log level name.
///
/// # Errors
///
/// Returns an error for anything other than error, warn, info or debug.
pub fn parse_log_level(level: &str) -> anyhow::Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => anyhow::bail!("Invalid log level: {}", other),
    }
}

/// Installs the global tracing subscriber.
///
/// With a log file, events are written there as JSON through a non-blocking
/// writer; the returned guard must live until exit to flush it. Otherwise
/// events go to stderr so they never mix with command output on stdout.
///
/// # Errors
///
/// Returns an error if the level is invalid or the log file cannot be opened.
pub fn init_tracing(level: &str, log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let level = parse_log_level(level)?;

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}
