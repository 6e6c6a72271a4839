//! Closest word by character value

use crate::core::value_distance;

/// Find the word whose character value is nearest to the query's
///
/// Ties go to the word that appears first in `words`. Returns `None` if
/// `words` is empty.
///
/// # Examples
/// ```
/// use word_analyzer::matcher::closest_by_value;
///
/// let words = vec!["abc".to_string(), "z".to_string(), "cab".to_string()];
/// assert_eq!(closest_by_value("bca", &words), Some("abc"));
/// assert_eq!(closest_by_value("bca", &[]), None);
/// ```
#[must_use]
pub fn closest_by_value<'a>(query: &str, words: &'a [String]) -> Option<&'a str> {
    // min_by_key keeps the first of several equal minima
    words
        .iter()
        .min_by_key(|word| value_distance(query, word))
        .map(String::as_str)
}
