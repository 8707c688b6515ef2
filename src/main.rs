//! `check_http_parser` - monitoring probe that classifies an HTTP(S) response body
//!
//! Prints one status line and exits with the Nagios-compatible status code.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use log::{debug, error};

use http_parser_probe::adapters::HttpTransport;
use http_parser_probe::core::models::Outcome;
use http_parser_probe::core::services::{build_url, classify, run_probe};
use http_parser_probe::output::{OutputMode, ProbeReport};

use crate::cli::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            process::exit(0);
        },
        // Usage errors must not exit 2, which monitoring reads as CRITICAL
        Err(e) => exit_with(&unknown(e.to_string().trim_end()), OutputMode::Human),
    };

    init_logging(cli.verbose);

    let report = match probe(&cli) {
        Ok(report) => report,
        Err(e) => {
            error!("probe setup failed: {e:#}");
            unknown(&format!("{e:#}"))
        },
    };

    exit_with(&report, cli.output_mode());
}

/// Resolve settings, fetch once and classify
fn probe(cli: &Cli) -> anyhow::Result<ProbeReport> {
    let config = cli.resolve()?;
    let target = config.target()?;
    let spec = config.match_spec()?;
    let url = build_url(&target);
    debug!("resolved config: {config:?}");

    let outcome = match HttpTransport::new(config.http_options()) {
        Ok(transport) => run_probe(&transport, &target, &spec, config.timeout()),
        Err(e) => classify(&spec, Err(e), &url),
    };

    Ok(ProbeReport::new(outcome, Some(url)))
}

fn unknown(message: &str) -> ProbeReport {
    ProbeReport::new(Outcome::Unknown(message.to_string()), None)
}

fn exit_with(report: &ProbeReport, mode: OutputMode) -> ! {
    println!("{}", report.render(mode));
    process::exit(report.code);
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
