//! URL builder tests

use http_parser_probe::core::models::ProbeTarget;
use http_parser_probe::core::services::build_url;
use test_case::test_case;

#[test_case("hostname.com", 80, "/api/test.php", false, "http://hostname.com:80/api/test.php" ; "plain")]
#[test_case("hostname.com", 80, "/api/test.php", true, "https://hostname.com:80/api/test.php" ; "tls")]
#[test_case("https://h.com/", 80, "api", false, "http://h.com:80/api" ; "full url as host")]
#[test_case("http://h.com", 443, "/", true, "https://h.com:443/" ; "http prefix with tls")]
#[test_case("h.com/", 8080, "status", false, "http://h.com:8080/status" ; "trailing slash")]
#[test_case("h.com", 80, "", false, "http://h.com:80/" ; "empty path")]
#[test_case("h.com", 80, "//double", false, "http://h.com:80//double" ; "double slash path kept")]
fn test_build_url(host: &str, port: u16, path: &str, tls: bool, expected: &str) {
    assert_eq!(build_url(&ProbeTarget::new(host, port, path, tls)), expected);
}

#[test]
fn test_build_url_is_repeatable() {
    let target = ProbeTarget::new("https://h.com/", 80, "api", false);
    assert_eq!(build_url(&target), build_url(&target));
}
