//! File logging for both front-ends.
//!
//! The TUI owns the terminal and headless mode owns stdout, so every log line
//! goes to a daily rolling file under `<data_local_dir>/studio-shell/logs/`.
//!
//! The filter comes from `STUDIO_LOG` using `EnvFilter` syntax. Without it the
//! workspace crates log at `info` and dependencies only at `warn`. A useful
//! override when chasing section or theme resolution is:
//!
//! ```bash
//! STUDIO_LOG=shell_app::section=debug,shell_app::theme=debug,info studio-shell
//! ```

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the filter directives
pub const LOG_ENV_VAR: &str = "STUDIO_LOG";

/// Workspace crates at `info`, everything else at `warn`
pub const DEFAULT_FILTER: &str =
    "studio_shell=info,shell_core=info,shell_app=info,shell_tui=info,warn";

const APP_DIR: &str = "studio-shell";
const LOG_FILE_PREFIX: &str = "studio-shell.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Install the global subscriber. Call once, before the session is built.
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let requested = std::env::var(LOG_ENV_VAR).ok();
    let (filter, rejected) = build_filter(requested.as_deref());

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_timer(fmt::time::ChronoLocal::new(TIMESTAMP_FORMAT.to_string()));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::info!(
        "Studio Shell {} starting, logs in {}",
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );
    if let Some(reason) = rejected {
        tracing::warn!("Ignoring {}: {}; using {:?}", LOG_ENV_VAR, reason, DEFAULT_FILTER);
    }

    Ok(())
}

/// Parse the requested directives, falling back to [`DEFAULT_FILTER`].
///
/// The subscriber is not installed yet when this runs, so a rejected value
/// is handed back for logging afterwards.
fn build_filter(requested: Option<&str>) -> (EnvFilter, Option<String>) {
    match requested.map(str::trim).filter(|s| !s.is_empty()) {
        None => (EnvFilter::new(DEFAULT_FILTER), None),
        Some(directives) => match EnvFilter::try_new(directives) {
            Ok(filter) => (filter, None),
            Err(e) => (EnvFilter::new(DEFAULT_FILTER), Some(e.to_string())),
        },
    }
}

fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("logs")
}
