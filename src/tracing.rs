//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! multi-cursor edits, selections and style toggles.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=cursor=debug,message=debug` - scoped filtering
//! - `RUST_LOG=quill::editable=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/quill-editor/logs/quill.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_PREFIX;
use crate::editable::{CursorSet, TextRange};

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr and respects RUST_LOG (default `warn`).
/// File logging writes to `~/.config/quill-editor/logs/quill.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG; stdout carries CLI output
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of cursor/selection state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub cursor_count: usize,
    pub primary: TextRange,
    /// Every range ascending by location
    pub ranges: Vec<TextRange>,
}

impl CursorSnapshot {
    pub fn from_cursors(cursors: &CursorSet) -> Self {
        Self {
            cursor_count: cursors.len(),
            primary: cursors.primary(),
            ranges: cursors.all_selections(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &CursorSnapshot) -> Option<String> {
        if self.cursor_count != other.cursor_count {
            return Some(format!(
                "cursor count: {} → {}",
                self.cursor_count, other.cursor_count
            ));
        }

        let mut changes = Vec::new();
        if self.primary != other.primary {
            changes.push(format!(
                "primary: {} → {}",
                describe(self.primary),
                describe(other.primary)
            ));
        }
        for (i, (before, after)) in self.ranges.iter().zip(&other.ranges).enumerate() {
            if before != after {
                changes.push(format!("#{}: {} → {}", i, describe(*before), describe(*after)));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

/// `@5` for a caret, `5+3` for a selection
fn describe(range: TextRange) -> String {
    if range.is_caret() {
        format!("@{}", range.location)
    } else {
        format!("{}+{}", range.location, range.length)
    }
}
