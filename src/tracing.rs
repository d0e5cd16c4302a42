//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! selection, mode, and store interaction issues.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=selection=debug,message=debug` - scoped filtering
//! - `RUST_LOG=lectio::runtime=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/lectio/logs/lectio.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{ReaderModel, SelectionState};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering and goes to
/// stderr so command output stays clean. File logging writes to
/// `~/.config/lectio/logs/lectio.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "lectio.log");
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
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of mode/selection state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub mode: &'static str,
    /// Anchor and head spans while a drag is in progress
    pub drag: Option<((usize, usize), (usize, usize))>,
    pub highlight_count: usize,
}

impl SelectionSnapshot {
    pub fn from_model(model: &ReaderModel) -> Self {
        let drag = match model.selection {
            SelectionState::Idle => None,
            SelectionState::Selecting { anchor, head } => {
                Some(((anchor.start, anchor.end), (head.start, head.end)))
            }
        };
        Self {
            mode: model.mode.label(),
            drag,
            highlight_count: model.highlights.len(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.mode != other.mode {
            changes.push(format!("mode: {} → {}", self.mode, other.mode));
        }

        match (self.drag, other.drag) {
            (None, Some((anchor, _))) => {
                changes.push(format!("drag started at {}..{}", anchor.0, anchor.1))
            }
            (Some(_), None) => changes.push("drag ended".to_string()),
            (Some((_, before)), Some((_, after))) if before != after => changes.push(format!(
                "head: {}..{} → {}..{}",
                before.0, before.1, after.0, after.1
            )),
            _ => {}
        }

        if self.highlight_count != other.highlight_count {
            changes.push(format!(
                "highlights: {} → {}",
                self.highlight_count, other.highlight_count
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
