//! Search terms and messages used to classify a response body

/// What to look for in the body, and what to report when it is found
///
/// Empty messages are allowed. An empty critical or warning message makes the
/// classifier derive one from the matching lines of the body instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSpec {
    /// Term whose presence means the service is ok
    pub ok_term: String,
    /// Term whose presence means the service is degraded
    pub warn_term: String,
    /// Term whose presence means the service is failing
    pub crit_term: String,
    /// Message reported on OK
    pub ok_message: String,
    /// Message reported on WARNING (derived from the body when empty)
    pub warn_message: String,
    /// Message reported on CRITICAL (derived from the body when empty)
    pub crit_message: String,
    /// Message reported on UNKNOWN
    pub unknown_message: String,
    /// Compare terms with exact case
    pub case_sensitive: bool,
}

impl MatchSpec {
    /// Create a spec with the three search terms and empty messages
    #[must_use]
    pub fn new(
        ok_term: impl Into<String>,
        warn_term: impl Into<String>,
        crit_term: impl Into<String>,
    ) -> Self {
        Self {
            ok_term: ok_term.into(),
            warn_term: warn_term.into(),
            crit_term: crit_term.into(),
            ..Self::default()
        }
    }

    /// Set the four messages
    #[must_use]
    pub fn with_messages(
        mut self,
        ok: impl Into<String>,
        warn: impl Into<String>,
        crit: impl Into<String>,
        unknown: impl Into<String>,
    ) -> Self {
        self.ok_message = ok.into();
        self.warn_message = warn.into();
        self.crit_message = crit.into();
        self.unknown_message = unknown.into();
        self
    }

    /// Set case sensitivity
    #[must_use]
    pub const fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}
