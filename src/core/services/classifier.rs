//! Classifier - decides the outcome of a probe from its fetch result
//!
//! Transport failures short-circuit to CRITICAL, other failures to UNKNOWN.
//! A body is checked for the critical, warning and ok terms in that order;
//! the first term found wins. If none is found the outcome is UNKNOWN.

use log::debug;

use crate::core::models::{MatchSpec, Outcome};
use crate::core::ports::FetchError;

use super::corpus::{Corpus, fold};

/// Classify the result of fetching `url`
///
/// Failure descriptions are reported verbatim, without the URL hint.
#[must_use]
pub fn classify(spec: &MatchSpec, fetched: Result<String, FetchError>, url: &str) -> Outcome {
    match fetched {
        Ok(body) => classify_body(spec, &body, url),
        Err(FetchError::Transport(description)) => Outcome::Critical(description),
        Err(FetchError::Other(description)) => Outcome::Unknown(description),
    }
}

/// Classify a response body fetched from `url`
///
/// # Examples
///
/// ```
/// use http_parser_probe::core::models::{MatchSpec, Outcome};
/// use http_parser_probe::core::services::classify_body;
///
/// let spec = MatchSpec::new("ok", "warning", "critical")
///     .with_messages("Everything is ok.", "", "", "");
/// let outcome = classify_body(&spec, "OK", "http://h.com:80/");
/// assert_eq!(outcome, Outcome::Ok("Everything is ok.".to_string()));
/// ```
#[must_use]
pub fn classify_body(spec: &MatchSpec, body: &str, url: &str) -> Outcome {
    let corpus = Corpus::new(body);
    let cs = spec.case_sensitive;
    let haystack = fold(corpus.text(), cs);
    let found = |term: &str| haystack.contains(fold(term, cs).as_ref());

    debug!("classifying {} byte body (html: {})", body.len(), corpus.is_html());

    if found(&spec.crit_term) {
        let msg = explain(&spec.crit_message, &spec.crit_term, &corpus, cs);
        Outcome::Critical(with_url_hint(&msg, url))
    } else if found(&spec.warn_term) {
        let msg = explain(&spec.warn_message, &spec.warn_term, &corpus, cs);
        Outcome::Warning(with_url_hint(&msg, url))
    } else if found(&spec.ok_term) {
        Outcome::Ok(spec.ok_message.clone())
    } else if spec.unknown_message.is_empty() {
        Outcome::Unknown(url_hint(url))
    } else {
        Outcome::Unknown(with_url_hint(&spec.unknown_message, url))
    }
}

/// The configured message, or the body units mentioning `term` when none is set
fn explain(message: &str, term: &str, corpus: &Corpus<'_>, case_sensitive: bool) -> String {
    if message.is_empty() {
        corpus.matching_units(term, case_sensitive)
    } else {
        message.to_string()
    }
}

fn url_hint(url: &str) -> String {
    format!("For more info check URL: {url}")
}

fn with_url_hint(message: &str, url: &str) -> String {
    format!("{message}\n{}", url_hint(url))
}
