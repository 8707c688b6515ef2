//! Tests for the Output module

use http_parser_probe::core::models::{Outcome, Status};
use http_parser_probe::output::{OutputMode, ProbeReport};

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn report_copies_outcome() {
    let report = ProbeReport::new(Outcome::Warning("slow".to_string()), None);
    assert_eq!(report.status, Status::Warning);
    assert_eq!(report.code, 1);
    assert_eq!(report.message, "slow");
}

#[test]
fn human_status_lines() {
    let cases = [
        (Outcome::Ok("Everything is ok.".to_string()), "OK - Everything is ok."),
        (Outcome::Warning("w".to_string()), "WARNING - w"),
        (Outcome::Critical("Error".to_string()), "CRITICAL - Error"),
        (Outcome::Unknown("Unknown exception".to_string()), "UNKNOWN - Unknown exception"),
    ];
    for (outcome, expected) in cases {
        assert_eq!(ProbeReport::new(outcome, None).render(OutputMode::Human), expected);
    }
}

#[test]
fn json_round_trips_through_serde() {
    let report = ProbeReport::new(
        Outcome::Ok("fine".to_string()),
        Some("http://h.com:80/".to_string()),
    );
    let value: serde_json::Value = serde_json::from_str(&report.render(OutputMode::Json)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"status": "OK", "code": 0, "message": "fine", "url": "http://h.com:80/"})
    );
}
