//! CLI definitions

use std::path::PathBuf;

use clap::Parser;

use http_parser_probe::config::{MessagesConfig, ProbeConfig, SearchConfig};
use http_parser_probe::output::OutputMode;

/// `check_http_parser` - classify an HTTP(S) response body for monitoring
#[derive(Parser, Debug)]
#[command(
    name = "check_http_parser",
    version,
    about = "Fetch a URL and classify its body as OK, WARNING, CRITICAL or UNKNOWN",
    long_about = "Fetch a single HTTP(S) resource and search its body for three terms.\n\n\
                  The critical term is checked first, then the warning term, then the ok term.\n\
                  The first term found decides the status; if none is found the status is UNKNOWN.\n\
                  Exit codes: 0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN."
)]
pub struct Cli {
    /// Host to probe (a full http(s):// URL prefix is tolerated)
    #[arg(short = 'H', long)]
    pub hostname: Option<String>,

    /// Port [default: 80, or 443 with --ssl]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Request path [default: /]
    #[arg(short, long)]
    pub uri: Option<String>,

    /// Use HTTPS
    #[arg(long)]
    pub ssl: bool,

    /// Term meaning the service is ok
    #[arg(long)]
    pub ok_search: Option<String>,

    /// Term meaning the service is degraded
    #[arg(long)]
    pub warning_search: Option<String>,

    /// Term meaning the service is failing
    #[arg(long)]
    pub critical_search: Option<String>,

    /// Message reported on OK
    #[arg(long)]
    pub ok_message: Option<String>,

    /// Message reported on WARNING (matching body lines when empty)
    #[arg(long)]
    pub warning_message: Option<String>,

    /// Message reported on CRITICAL (matching body lines when empty)
    #[arg(long)]
    pub critical_message: Option<String>,

    /// Message reported on UNKNOWN
    #[arg(long)]
    pub unknown_message: Option<String>,

    /// Request timeout in seconds [default: 30]
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Match search terms with exact case
    #[arg(long)]
    pub case_sensitive: bool,

    /// Accept invalid TLS certificates
    #[arg(long)]
    pub insecure: bool,

    /// Report non-2xx responses as CRITICAL instead of classifying their body
    #[arg(long)]
    pub fail_on_http_status: bool,

    /// TOML file with probe settings; flags override it
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Output mode selected by the flags
    pub const fn output_mode(&self) -> OutputMode {
        if self.json { OutputMode::Json } else { OutputMode::Human }
    }

    /// Settings given on the command line, as a config overlay
    pub fn overrides(&self) -> ProbeConfig {
        ProbeConfig {
            hostname: self.hostname.clone(),
            port: self.port,
            uri: self.uri.clone(),
            ssl: self.ssl.then_some(true),
            timeout: self.timeout,
            case_sensitive: self.case_sensitive.then_some(true),
            insecure: self.insecure.then_some(true),
            fail_on_http_status: self.fail_on_http_status.then_some(true),
            search: SearchConfig {
                ok: self.ok_search.clone(),
                warning: self.warning_search.clone(),
                critical: self.critical_search.clone(),
            },
            messages: MessagesConfig {
                ok: self.ok_message.clone(),
                warning: self.warning_message.clone(),
                critical: self.critical_message.clone(),
                unknown: self.unknown_message.clone(),
            },
        }
    }

    /// Merge the config file (if any) with the command-line overrides
    pub fn resolve(&self) -> anyhow::Result<ProbeConfig> {
        let base = match &self.config {
            Some(path) => ProbeConfig::load(path)?,
            None => ProbeConfig::default(),
        };
        Ok(base.merge(self.overrides()))
    }
}
