//! Word file reading and writing
//!
//! The backing file is plain text: words separated by any whitespace when
//! read, joined by single spaces when fully rewritten, and one word plus a
//! newline per append. A full rewrite ends with a newline so the next append
//! starts on a fresh token.

use crate::error::{Result, StorageError};
use std::path::Path;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Split file content into words on runs of whitespace
///
/// # Examples
/// ```
/// use word_analyzer::wordlists::loader::parse_words;
///
/// assert_eq!(parse_words("apple  banana\ncherry\n"), vec!["apple", "banana", "cherry"]);
/// assert!(parse_words("").is_empty());
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content.split_whitespace().map(str::to_string).collect()
}

/// Join words with a single space, the full-rewrite file format
#[must_use]
pub fn serialize_words(words: &[String]) -> String {
    words.join(" ")
}

/// Load words from a file
///
/// # Errors
///
/// Returns `StorageError::Read` if the file cannot be read, including when it
/// does not exist. A missing file is never treated as an empty list.
pub async fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| StorageError::read(path, e))?;

    Ok(parse_words(&content))
}

/// Append a single word followed by a newline, creating the file if needed
///
/// # Errors
///
/// Returns `StorageError::Write` if the file cannot be opened or written.
pub async fn append_to_file(path: impl AsRef<Path>, word: &str) -> Result<()> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(|e| StorageError::write(path, e))?;

    let line = format!("{word}\n");
    file.write_all(line.as_bytes())
        .await
        .map_err(|e| StorageError::write(path, e))?;
    file.flush().await.map_err(|e| StorageError::write(path, e))
}

/// Replace the whole file with the space-joined words and a final newline
///
/// # Errors
///
/// Returns `StorageError::Write` if the file cannot be written.
pub async fn save_to_file(path: impl AsRef<Path>, words: &[String]) -> Result<()> {
    let path = path.as_ref();
    let mut content = serialize_words(words);
    content.push('\n');
    fs::write(path, content)
        .await
        .map_err(|e| StorageError::write(path, e))
}
