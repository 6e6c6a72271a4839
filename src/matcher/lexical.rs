//! Closest word at or after the query in lexical order

use crate::core::lexical_compare;

/// Find the word with the smallest non-negative lexical distance to the query
///
/// The words are sorted (a private copy, the caller's slice is untouched)
/// and each one is compared against `query` with [`lexical_compare`]. The
/// word with the smallest result `>= 0` wins; ties keep the earlier word in
/// sorted order. Returns an empty string when every word sorts before the
/// query, including when `words` is empty.
///
/// Note the distance is the comparison magnitude, not the sorted position,
/// so the winner is not always the immediate successor of the query.
#[must_use]
pub fn closest_lexical(query: &str, words: &[String]) -> String {
    let mut sorted: Vec<&str> = words.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let mut best: Option<(i64, &str)> = None;
    for word in sorted {
        let difference = lexical_compare(word, query);
        if difference < 0 {
            continue;
        }
        if best.is_none_or(|(min, _)| difference < min) {
            best = Some((difference, word));
        }
    }

    best.map(|(_, word)| word.to_string()).unwrap_or_default()
}
