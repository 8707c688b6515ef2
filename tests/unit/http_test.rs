//! HTTP transport tests against a local server

use std::time::Duration;

use http_parser_probe::adapters::{HttpOptions, HttpTransport};
use http_parser_probe::core::ports::{FetchError, Transport};

use crate::common::server::{TestServer, closed_port};

const TIMEOUT: Duration = Duration::from_secs(5);

fn transport(options: HttpOptions) -> HttpTransport {
    HttpTransport::new(options).unwrap()
}

#[test]
fn test_fetches_body() {
    let server = TestServer::text("OK: all systems go");
    let body = transport(HttpOptions::default())
        .fetch(&format!("http://127.0.0.1:{}/api/test.php", server.port), TIMEOUT)
        .unwrap();

    assert_eq!(body, "OK: all systems go");
    assert_eq!(server.next_path(), "/api/test.php");
}

#[test]
fn test_error_status_body_is_returned_by_default() {
    let server = TestServer::start("CRITICAL: database down", 503, "text/plain", 1);
    let body = transport(HttpOptions::default())
        .fetch(&format!("http://127.0.0.1:{}/", server.port), TIMEOUT)
        .unwrap();

    assert_eq!(body, "CRITICAL: database down");
}

#[test]
fn test_error_status_fails_when_requested() {
    let server = TestServer::start("OK", 500, "text/plain", 1);
    let options = HttpOptions { fail_on_http_status: true, ..HttpOptions::default() };
    let err = transport(options)
        .fetch(&format!("http://127.0.0.1:{}/", server.port), TIMEOUT)
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
    assert!(err.message().contains("500"));
}

#[test]
fn test_connection_refused_is_transport_failure() {
    let err = transport(HttpOptions::default())
        .fetch(&format!("http://127.0.0.1:{}/", closed_port()), TIMEOUT)
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
}
