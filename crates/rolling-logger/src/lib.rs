//! Rolling Logger
//!
//! Installs a global `tracing` subscriber with two outputs:
//! - console (ANSI, stderr)
//! - `<app_name>.<date>.log` in the log directory, rotated daily
//!
//! At most `DEFAULT_MAX_FILES` dated files are kept; older ones are pruned by
//! the appender when it rotates. Records emitted through the `log` crate are
//! forwarded into `tracing`.

use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Number of dated log files kept in the log directory
pub const DEFAULT_MAX_FILES: usize = 7;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("failed to prepare log directory: {0}")]
    Io(#[from] io::Error),
    #[error("failed to open log file: {0}")]
    Appender(#[from] InitError),
    #[error("invalid log filter: {0}")]
    Filter(String),
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Local wall-clock timestamps, same format as the console output
#[derive(Debug, Clone, Copy, Default)]
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Daily-rotated appender writing `<dir>/<app_name>.<date>.log`
///
/// Creates `dir` if needed and appends to today's file when it already exists.
pub fn file_appender(
    dir: impl AsRef<Path>,
    app_name: &str,
) -> Result<RollingFileAppender, LoggerError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(app_name)
        .filename_suffix("log")
        .max_log_files(DEFAULT_MAX_FILES)
        .build(dir)?;
    Ok(appender)
}

/// Initialize the global logger
///
/// `default_level` is used when `RUST_LOG` is not set (e.g. "info" or
/// "todo_server=debug,tower_http=info"). File output goes through a
/// background writer; keep the returned guard alive until shutdown so
/// buffered records are flushed.
pub fn init_logger(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    default_level: &str,
) -> Result<WorkerGuard, LoggerError> {
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender(log_dir, app_name)?);

    let filter = match std::env::var("RUST_LOG") {
        Ok(from_env) if !from_env.trim().is_empty() => EnvFilter::try_new(from_env),
        _ => EnvFilter::try_new(default_level),
    }
    .map_err(|e| LoggerError::Filter(e.to_string()))?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_timer(LocalTime)
        .with_writer(io::stderr);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_timer(LocalTime)
        .with_ansi(false)
        .with_writer(file_writer);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

    log::debug!("log bridge active for {}", app_name);
    Ok(guard)
}
