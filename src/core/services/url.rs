//! URL builder - turns a [`ProbeTarget`] into the URL that gets fetched
//!
//! Pure string normalization, no validation and no I/O.

use crate::core::models::ProbeTarget;

/// Build the canonical `scheme://host:port/path` URL for a target
///
/// - A leading `https://` or `http://` on the host is dropped
/// - One trailing `/` on the host is dropped
/// - The path gets a leading `/` if it has none
///
/// # Examples
///
/// ```
/// use http_parser_probe::core::models::ProbeTarget;
/// use http_parser_probe::core::services::build_url;
///
/// let target = ProbeTarget::new("https://h.com/", 80, "api", false);
/// assert_eq!(build_url(&target), "http://h.com:80/api");
/// ```
#[must_use]
pub fn build_url(target: &ProbeTarget) -> String {
    let host = target.host.as_str();
    let host = host.strip_prefix("https://").unwrap_or(host);
    let host = host.strip_prefix("http://").unwrap_or(host);
    let host = host.strip_suffix('/').unwrap_or(host);

    let sep = if target.path.starts_with('/') { "" } else { "/" };

    format!("{}://{}:{}{}{}", target.scheme(), host, target.port, sep, target.path)
}
