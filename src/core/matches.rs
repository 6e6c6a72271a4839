//! Match results
//!
//! The pair of answers produced for one query.

use std::fmt;

/// Best matches for a single query
///
/// The two halves deliberately use different "nothing found" conventions:
/// `value` is `None` when the word list is empty, while `lexical` is the
/// empty string when no word sorts at or after the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// Word with the nearest character value
    pub value: Option<String>,
    /// Smallest word that is lexically equal to or after the query
    pub lexical: String,
}

impl MatchResult {
    #[must_use]
    pub const fn new(value: Option<String>, lexical: String) -> Self {
        Self { value, lexical }
    }

    /// Result for an empty word list
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            value: None,
            lexical: String::new(),
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value={} lexical={:?}",
            self.value.as_deref().unwrap_or("<none>"),
            self.lexical
        )
    }
}
