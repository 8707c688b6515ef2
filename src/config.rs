//! Probe configuration
//!
//! Every setting can come from a TOML file, from command-line flags, or both.
//! Flags override the file. Example file:
//!
//! ```toml
//! hostname = "accounting.example.org"
//! port = 443
//! uri = "/pub/summary.html"
//! ssl = true
//!
//! [search]
//! ok = "OK"
//! warning = "WARN"
//! critical = "ERROR"
//!
//! [messages]
//! ok = "Publication is up to date"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::HttpOptions;
use crate::core::models::{MatchSpec, ProbeTarget};

/// Request timeout used when none is configured, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur while building a probe configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config file {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config file {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying parse error
        source: toml::de::Error,
    },

    /// A required setting was given neither in the file nor on the command line
    #[error("missing required setting: {0}")]
    Missing(&'static str),
}

/// Search terms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Term meaning OK
    pub ok: Option<String>,
    /// Term meaning WARNING
    pub warning: Option<String>,
    /// Term meaning CRITICAL
    pub critical: Option<String>,
}

/// Messages reported for each status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    /// Message for OK
    pub ok: Option<String>,
    /// Message for WARNING
    pub warning: Option<String>,
    /// Message for CRITICAL
    pub critical: Option<String>,
    /// Message for UNKNOWN
    pub unknown: Option<String>,
}

/// Full probe configuration, every field optional until resolved
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Host to probe
    pub hostname: Option<String>,
    /// Port; 443 with `ssl`, else 80 when unset
    pub port: Option<u16>,
    /// Request path; `/` when unset
    pub uri: Option<String>,
    /// Use HTTPS
    pub ssl: Option<bool>,
    /// Request timeout in seconds
    pub timeout: Option<u64>,
    /// Match terms with exact case
    pub case_sensitive: Option<bool>,
    /// Accept invalid TLS certificates
    pub insecure: Option<bool>,
    /// Treat non-2xx responses as CRITICAL
    pub fail_on_http_status: Option<bool>,
    /// Search terms
    pub search: SearchConfig,
    /// Status messages
    pub messages: MessagesConfig,
}

impl ProbeConfig {
    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from a TOML string
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Overlay `other` on top of `self`; values set in `other` win
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            hostname: other.hostname.or(self.hostname),
            port: other.port.or(self.port),
            uri: other.uri.or(self.uri),
            ssl: other.ssl.or(self.ssl),
            timeout: other.timeout.or(self.timeout),
            case_sensitive: other.case_sensitive.or(self.case_sensitive),
            insecure: other.insecure.or(self.insecure),
            fail_on_http_status: other.fail_on_http_status.or(self.fail_on_http_status),
            search: SearchConfig {
                ok: other.search.ok.or(self.search.ok),
                warning: other.search.warning.or(self.search.warning),
                critical: other.search.critical.or(self.search.critical),
            },
            messages: MessagesConfig {
                ok: other.messages.ok.or(self.messages.ok),
                warning: other.messages.warning.or(self.messages.warning),
                critical: other.messages.critical.or(self.messages.critical),
                unknown: other.messages.unknown.or(self.messages.unknown),
            },
        }
    }

    /// Resolve the probe target
    pub fn target(&self) -> Result<ProbeTarget, ConfigError> {
        let host = self.hostname.clone().ok_or(ConfigError::Missing("hostname"))?;
        let ssl = self.ssl.unwrap_or(false);
        let port = self.port.unwrap_or(if ssl { 443 } else { 80 });
        let path = self.uri.clone().unwrap_or_else(|| "/".to_string());
        Ok(ProbeTarget::new(host, port, path, ssl))
    }

    /// Resolve search terms and messages
    pub fn match_spec(&self) -> Result<MatchSpec, ConfigError> {
        let ok = self.search.ok.clone().ok_or(ConfigError::Missing("ok-search"))?;
        let warning = self.search.warning.clone().ok_or(ConfigError::Missing("warning-search"))?;
        let critical = self.search.critical.clone().ok_or(ConfigError::Missing("critical-search"))?;

        let m = &self.messages;
        Ok(MatchSpec::new(ok, warning, critical)
            .with_messages(
                m.ok.clone().unwrap_or_default(),
                m.warning.clone().unwrap_or_default(),
                m.critical.clone().unwrap_or_default(),
                m.unknown.clone().unwrap_or_default(),
            )
            .case_sensitive(self.case_sensitive.unwrap_or(false)))
    }

    /// Request timeout
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Options for the HTTP transport
    #[must_use]
    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            insecure: self.insecure.unwrap_or(false),
            fail_on_http_status: self.fail_on_http_status.unwrap_or(false),
        }
    }
}
