//! Probe target: where the request goes

/// The host, port, path and scheme a probe fetches
///
/// Values are taken as given; nothing is validated here. A bad host or port
/// surfaces later as a transport failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    /// Host name; a full `http(s)://host/` prefix and trailing slash are tolerated
    pub host: String,
    /// TCP port
    pub port: u16,
    /// Request path, with or without a leading `/`
    pub path: String,
    /// Use `https` instead of `http`
    pub use_tls: bool,
}

impl ProbeTarget {
    /// Create a new target
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, path: impl Into<String>, use_tls: bool) -> Self {
        Self {
            host: host.into(),
            port,
            path: path.into(),
            use_tls,
        }
    }

    /// URL scheme for this target
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        if self.use_tls { "https" } else { "http" }
    }
}
