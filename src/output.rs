//! Output formatting for status-line and JSON modes
//!
//! The status line `<LABEL> - <message>` is what monitoring systems parse.
//! JSON mode carries the same information for scripts.

use serde::Serialize;

use crate::core::models::{Outcome, Status};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Monitoring status line (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Rendered result of one probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    /// Status level
    pub status: Status,
    /// Exit code for the status
    pub code: i32,
    /// Outcome message
    pub message: String,
    /// URL that was probed, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ProbeReport {
    /// Build a report from an outcome
    #[must_use]
    pub fn new(outcome: Outcome, url: Option<String>) -> Self {
        Self {
            status: outcome.status(),
            code: outcome.code(),
            message: outcome.into_message(),
            url,
        }
    }

    /// Render the report as text for the given mode
    #[must_use]
    pub fn render(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) -> String {
        format!("{} - {}", self.status, self.message)
    }

    fn render_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
