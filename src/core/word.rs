//! Word scoring primitives
//!
//! Letter-value sums and a three-way lexical comparison with a meaningful magnitude.

/// Value of a single character: `a`=1, `b`=2, ... `z`=26
///
/// The character is lowercased first. Characters outside `a..=z` are not
/// filtered: they simply produce values outside `1..=26` (a space is -64,
/// a digit `0` is -48).
#[inline]
#[must_use]
pub fn letter_value(c: char) -> i64 {
    let lower = c.to_lowercase().next().unwrap_or(c);
    i64::from(u32::from(lower)) - i64::from(u32::from('a')) + 1
}

/// Sum of the letter values of every character in `word`
///
/// # Examples
/// ```
/// use word_analyzer::core::char_value;
///
/// assert_eq!(char_value("a"), 1);
/// assert_eq!(char_value("az"), 27);
/// assert_eq!(char_value("AZ"), char_value("az"));
/// ```
#[must_use]
pub fn char_value(word: &str) -> i64 {
    word.chars().map(letter_value).sum()
}

/// Absolute difference between the character values of two words
#[inline]
#[must_use]
pub fn value_distance(query: &str, candidate: &str) -> u64 {
    (char_value(candidate) - char_value(query)).unsigned_abs()
}

/// Three-way lexical comparison of `word` against `other`
///
/// Returns the code point difference at the first position where the two
/// strings differ. When one string is a prefix of the other, returns the
/// difference of their lengths (in characters). Zero means equal.
///
/// The sign always agrees with `str::cmp`.
///
/// # Examples
/// ```
/// use word_analyzer::core::lexical_compare;
///
/// assert_eq!(lexical_compare("banana", "banana"), 0);
/// assert_eq!(lexical_compare("cherry", "banana"), 1);
/// assert_eq!(lexical_compare("apple", "zzz"), -25);
/// assert_eq!(lexical_compare("band", "ban"), 1);
/// ```
#[must_use]
pub fn lexical_compare(word: &str, other: &str) -> i64 {
    let mut left = word.chars();
    let mut right = other.chars();

    loop {
        match (left.next(), right.next()) {
            (Some(a), Some(b)) if a != b => {
                return i64::from(u32::from(a)) - i64::from(u32::from(b));
            }
            (Some(_), Some(_)) => {}
            (Some(_), None) => return 1 + left.count() as i64,
            (None, Some(_)) => return -(1 + right.count() as i64),
            (None, None) => return 0,
        }
    }
}
