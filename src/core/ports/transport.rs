//! Transport port
//!
//! Defines how the core fetches the response body it classifies.

use std::time::Duration;

use thiserror::Error;

/// Why a fetch produced no body
///
/// The split decides the outcome: transport failures are CRITICAL, anything
/// else is UNKNOWN. The description is reported verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network or HTTP-level failure (refused, timed out, TLS, protocol, bad status)
    #[error("{0}")]
    Transport(String),

    /// Any other failure
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// Create a transport failure
    #[must_use]
    pub fn transport(description: impl Into<String>) -> Self {
        Self::Transport(description.into())
    }

    /// Create a non-transport failure
    #[must_use]
    pub fn other(description: impl Into<String>) -> Self {
        Self::Other(description.into())
    }

    /// The failure description
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Transport(d) | Self::Other(d) => d,
        }
    }
}

/// Something that can fetch a URL and return its body as text
///
/// Implementations perform exactly one request per call and never retry.
#[cfg_attr(test, mockall::automock)]
pub trait Transport {
    /// Fetch `url`, giving up after `timeout`
    fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError>;
}
