//! HTTP transport backed by a blocking `reqwest` client

use std::error::Error as _;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::core::ports::{FetchError, Transport};

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("check_http_parser/", env!("CARGO_PKG_VERSION"));

/// Options for building an [`HttpTransport`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HttpOptions {
    /// Accept invalid TLS certificates
    pub insecure: bool,
    /// Treat a non-2xx status as a transport failure instead of classifying the body
    pub fail_on_http_status: bool,
}

/// [`Transport`] that performs real HTTP(S) requests
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    options: HttpOptions,
}

impl HttpTransport {
    /// Build a transport
    ///
    /// A client that cannot be constructed is not a network failure, so it is
    /// reported as [`FetchError::Other`].
    pub fn new(options: HttpOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(options.insecure)
            .build()
            .map_err(|e| FetchError::other(describe(&e)))?;

        Ok(Self { client, options })
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .map_err(|e| FetchError::transport(describe(&e)))?;

        let status = response.status();
        debug!("{url} answered {status}");

        let response = if self.options.fail_on_http_status {
            response
                .error_for_status()
                .map_err(|e| FetchError::transport(describe(&e)))?
        } else {
            response
        };

        response.text().map_err(|e| FetchError::transport(describe(&e)))
    }
}

/// Render an error with its source chain, e.g. `error sending request: connection refused`
fn describe(err: &reqwest::Error) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}
