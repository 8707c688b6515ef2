//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing
//! without real I/O operations.

use std::cell::RefCell;
use std::time::Duration;

use http_parser_probe::core::ports::{FetchError, Transport};

/// Transport that returns a scripted result and records every call
pub struct StubTransport {
    result: Result<String, FetchError>,
    calls: RefCell<Vec<(String, Duration)>>,
}

impl StubTransport {
    pub fn body(body: &str) -> Self {
        Self::with_result(Ok(body.to_string()))
    }

    pub fn failing(err: FetchError) -> Self {
        Self::with_result(Err(err))
    }

    fn with_result(result: Result<String, FetchError>) -> Self {
        Self {
            result,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Every `(url, timeout)` fetched so far
    pub fn calls(&self) -> Vec<(String, Duration)> {
        self.calls.borrow().clone()
    }
}

impl Transport for StubTransport {
    fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        self.calls.borrow_mut().push((url.to_string(), timeout));
        self.result.clone()
    }
}
