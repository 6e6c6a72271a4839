//! Main matching interface

use super::{closest_by_value, closest_lexical};
use crate::core::MatchResult;

/// Matches queries against a snapshot of the word list
///
/// Borrows the words for the duration of one request and never mutates them.
pub struct MatchEngine<'a> {
    words: &'a [String],
}

impl<'a> MatchEngine<'a> {
    /// Create an engine over a word snapshot
    #[must_use]
    pub const fn new(words: &'a [String]) -> Self {
        Self { words }
    }

    /// Number of words the engine matches against
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word with the nearest character value, or `None` if there are no words
    #[must_use]
    pub fn closest_by_value(&self, query: &str) -> Option<&'a str> {
        closest_by_value(query, self.words)
    }

    /// Smallest word at or after the query, or `""` if there is none
    #[must_use]
    pub fn closest_lexical(&self, query: &str) -> String {
        closest_lexical(query, self.words)
    }

    /// Compute both matches for a query
    #[must_use]
    pub fn analyze(&self, query: &str) -> MatchResult {
        MatchResult::new(
            self.closest_by_value(query).map(str::to_string),
            self.closest_lexical(query),
        )
    }
}
