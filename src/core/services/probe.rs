//! Probe runner - one request, one classification

use std::time::Duration;

use log::{debug, info};

use crate::core::models::{MatchSpec, Outcome, ProbeTarget};
use crate::core::ports::Transport;

use super::{build_url, classify};

/// Fetch `target` once through `transport` and classify the result
pub fn run_probe<T: Transport + ?Sized>(
    transport: &T,
    target: &ProbeTarget,
    spec: &MatchSpec,
    timeout: Duration,
) -> Outcome {
    let url = build_url(target);
    debug!("fetching {url} (timeout {}s)", timeout.as_secs_f64());

    let fetched = transport.fetch(&url, timeout);
    if let Err(e) = &fetched {
        debug!("fetch failed: {e:?}");
    }

    let outcome = classify(spec, fetched, &url);
    info!("{url}: {}", outcome.status());
    outcome
}
