//! Logging configuration using tracing
//!
//! The SDK itself only emits `tracing` events; hosts that already install a
//! subscriber can ignore this module entirely. [`init`] is a convenience for
//! sample apps and integration harnesses that want file logging out of the
//! box.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Initialize the logging subsystem
///
/// Logs are written to `<data dir>/emtrack/logs/`.
/// Log level is controlled by the `EMTRACK_LOG` environment variable.
///
/// # Examples
/// ```bash
/// EMTRACK_LOG=debug cargo run
/// EMTRACK_LOG=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "emtrack.log");

    // Default to info, allow override via EMTRACK_LOG
    let env_filter = EnvFilter::try_from_env("EMTRACK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("emtrack=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoUtc::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))?;

    tracing::info!("emtrack session tracking starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("emtrack").join("logs")
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join("emtrack.log")
}
