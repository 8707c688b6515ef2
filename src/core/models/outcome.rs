//! Probe outcomes and their monitoring status levels
//!
//! The four levels and their exit codes are the status contract every
//! Nagios-compatible monitoring system expects. They must never be renumbered.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Monitoring status level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// Service is healthy (exit 0)
    Ok,
    /// Service is degraded (exit 1)
    Warning,
    /// Service is failing or unreachable (exit 2)
    Critical,
    /// State could not be determined (exit 3)
    Unknown,
}

impl Status {
    /// Process exit code for this status
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }

    /// Label printed at the start of the status line
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a single probe: a status level plus its message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The ok term matched
    Ok(String),
    /// The warning term matched
    Warning(String),
    /// The critical term matched, or the request failed
    Critical(String),
    /// Nothing matched, or an unexpected failure occurred
    Unknown(String),
}

impl Outcome {
    /// Status level of this outcome
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Ok(_) => Status::Ok,
            Self::Warning(_) => Status::Warning,
            Self::Critical(_) => Status::Critical,
            Self::Unknown(_) => Status::Unknown,
        }
    }

    /// Process exit code
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.status().code()
    }

    /// Human-readable message
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Ok(m) | Self::Warning(m) | Self::Critical(m) | Self::Unknown(m) => m,
        }
    }

    /// Consume the outcome, returning its message
    #[must_use]
    pub fn into_message(self) -> String {
        match self {
            Self::Ok(m) | Self::Warning(m) | Self::Critical(m) | Self::Unknown(m) => m,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.status(), self.message())
    }
}
