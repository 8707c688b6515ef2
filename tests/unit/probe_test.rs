//! Probe runner tests against a scripted transport

use std::time::Duration;

use http_parser_probe::core::models::ProbeTarget;
use http_parser_probe::core::ports::FetchError;
use http_parser_probe::core::services::run_probe;

use crate::common::fixtures::{URL, spec_with_messages};
use crate::common::mocks::StubTransport;

fn target() -> ProbeTarget {
    ProbeTarget::new("hostname.com", 80, "/api/test.php", false)
}

#[test]
fn test_requests_built_url_with_timeout() {
    let transport = StubTransport::body("OK");
    let outcome = run_probe(&transport, &target(), &spec_with_messages(false), Duration::from_secs(20));

    assert_eq!(outcome.to_string(), "OK - Everything is ok.");
    assert_eq!(transport.calls(), vec![(URL.to_string(), Duration::from_secs(20))]);
}

#[test]
fn test_connection_error_single_attempt() {
    let transport = StubTransport::failing(FetchError::transport("Error"));
    let outcome = run_probe(&transport, &target(), &spec_with_messages(false), Duration::from_secs(20));

    assert_eq!(outcome.to_string(), "CRITICAL - Error");
    assert_eq!(transport.calls().len(), 1);
}

#[test]
fn test_unknown_error() {
    let transport = StubTransport::failing(FetchError::other("Unknown exception"));
    let outcome = run_probe(&transport, &target(), &spec_with_messages(false), Duration::from_secs(20));

    assert_eq!(outcome.to_string(), "UNKNOWN - Unknown exception");
    assert_eq!(outcome.code(), 3);
}

#[test]
fn test_unknown_hint_uses_built_url() {
    let transport = StubTransport::body("Some strange text.");
    let target = ProbeTarget::new("https://hostname.com/", 8443, "status", true);
    let outcome = run_probe(&transport, &target, &spec_with_messages(false), Duration::from_secs(5));

    assert_eq!(
        outcome.message(),
        "Something unknown.\nFor more info check URL: https://hostname.com:8443/status"
    );
}
