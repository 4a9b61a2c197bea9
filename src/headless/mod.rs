//! Headless mode - NDJSON in, NDJSON out
//!
//! Drives a layout session without a terminal UI. Commands arrive on stdin,
//! one JSON object per line; session events and snapshots are written to
//! stdout the same way. This is what scripted tests and embedding hosts use.
//!
//! # Example
//!
//! ```json
//! {"cmd":"resize","width":600,"height":900}
//! {"cmd":"select_section","section":"store"}
//! {"cmd":"snapshot"}
//! ```
//!
//! produces lines such as
//!
//! ```json
//! {"event":"viewport_changed","viewport":{"width":600,"height":900},"device":"large_mobile","orientation":"portrait","timestamp":1704700001000}
//! {"event":"section_changed","previous":"main","section":"store","timestamp":1704700001002}
//! ```

pub mod command;
pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use shell_app::{LayoutSnapshot, SessionEvent};

/// Headless-only output lines (session events are forwarded as-is)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Session mounted and accepting commands
    Ready { url: String },

    Snapshot { snapshot: Box<LayoutSnapshot> },

    /// A command line could not be understood
    Error { message: String },
}

/// One output line: payload plus a millisecond timestamp
#[derive(Debug, Serialize)]
struct Stamped<'a, T: Serialize> {
    #[serde(flatten)]
    payload: &'a T,
    timestamp: i64,
}

/// Serialize to a single NDJSON line
pub fn to_line<T: Serialize>(payload: &T) -> serde_json::Result<String> {
    serde_json::to_string(&Stamped {
        payload,
        timestamp: Utc::now().timestamp_millis(),
    })
}

/// Write one line to stdout and flush
pub fn emit<T: Serialize>(payload: &T) {
    let json = match to_line(payload) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize headless event: {}", e);
            return;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", json) {
        error!("Failed to write headless event to stdout: {}", e);
        return;
    }
    if let Err(e) = stdout.flush() {
        error!("Failed to flush headless stdout: {}", e);
    }
}

impl HeadlessEvent {
    pub fn ready(url: &str) -> Self {
        Self::Ready {
            url: url.to_string(),
        }
    }

    pub fn snapshot(snapshot: LayoutSnapshot) -> Self {
        Self::Snapshot {
            snapshot: Box::new(snapshot),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}
