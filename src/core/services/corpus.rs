//! Search corpus - the response body prepared for term matching
//!
//! HTML bodies have every tag replaced by [`SEPARATOR`], so a term can never
//! match across a tag boundary and the text between tags forms the units a
//! diagnostic message is built from. Plain-text bodies are used as-is and
//! their units are lines.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Text that replaces every HTML tag
pub const SEPARATOR: &str = "|";

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is a valid regex"));

/// A response body ready for searching
#[derive(Debug, Clone)]
pub struct Corpus<'a> {
    original: &'a str,
    stripped: Cow<'a, str>,
    html: bool,
}

impl<'a> Corpus<'a> {
    /// Prepare a body for searching
    #[must_use]
    pub fn new(body: &'a str) -> Self {
        let stripped = TAG.replace_all(body, SEPARATOR);
        let html = stripped != body;
        Self {
            original: body,
            stripped,
            html,
        }
    }

    /// Whether the body contained at least one tag
    #[must_use]
    pub const fn is_html(&self) -> bool {
        self.html
    }

    /// Text that search terms are matched against
    ///
    /// Tag-stripped text for HTML, the untouched body otherwise.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.stripped
    }

    /// Line-like units: segments between tags for HTML, lines otherwise
    pub fn units(&self) -> impl Iterator<Item = &str> {
        let (text, sep) = if self.html {
            (self.stripped.as_ref(), SEPARATOR)
        } else {
            (self.original, "\n")
        };
        text.split(sep)
    }

    /// Every unit containing `term`, trimmed and joined with newlines
    ///
    /// Without `case_sensitive` both the term and each unit are lower-cased
    /// before comparing. Units keep their original case in the result.
    #[must_use]
    pub fn matching_units(&self, term: &str, case_sensitive: bool) -> String {
        let needle = fold(term, case_sensitive);
        self.units()
            .filter(|unit| fold(unit, case_sensitive).contains(needle.as_ref()))
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Lower-case `s` unless matching is case sensitive
pub(crate) fn fold(s: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.to_lowercase())
    }
}
