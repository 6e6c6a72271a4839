//! The live word list and its backing file

use super::loader::{append_to_file, load_from_file, save_to_file};
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Owner of the in-memory word list
///
/// Appends go to the file first and reach memory only once the write has
/// succeeded. Appends and the final persist are serialized through a single
/// writer gate so the file and the list agree on word order. Reads never
/// wait on file I/O.
#[derive(Debug)]
pub struct WordStore {
    path: PathBuf,
    words: RwLock<Vec<String>>,
    writer: Mutex<()>,
}

impl WordStore {
    /// Create a store from words already in memory
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, words: Vec<String>) -> Self {
        Self {
            path: path.into(),
            words: RwLock::new(words),
            writer: Mutex::new(()),
        }
    }

    /// Load the store from its backing file
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Read` if the file is missing or unreadable.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let words = load_from_file(&path).await?;
        info!(path = %path.display(), words = words.len(), "loaded word list");
        Ok(Self::new(path, words))
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy of the current words, in insertion order
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.words
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a word to the file, then to the in-memory list
    ///
    /// Failures are logged and swallowed: the word is simply not remembered.
    pub async fn append(&self, word: String) {
        let _gate = self.writer.lock().await;

        match append_to_file(&self.path, &word).await {
            Ok(()) => {
                debug!(path = %self.path.display(), word = %word, "word appended");
                self.words
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(word);
            }
            Err(e) => {
                warn!(error = %e, word = %word, "failed to append word");
            }
        }
    }

    /// Overwrite the backing file with every word, space-joined
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Write` if the file cannot be written.
    pub async fn persist(&self) -> Result<()> {
        let _gate = self.writer.lock().await;
        let words = self.snapshot();

        save_to_file(&self.path, &words).await?;
        info!(path = %self.path.display(), words = words.len(), "persisted word list");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use std::sync::Arc;

    fn write_words(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("words.txt");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn load_reads_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_words(&dir, "apple banana\ncherry");

        let store = WordStore::load(&path).await.unwrap();
        assert_eq!(store.snapshot(), vec!["apple", "banana", "cherry"]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.path(), path.as_path());
    }

    #[tokio::test]
    async fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = WordStore::load(dir.path().join("absent.txt")).await;
        assert!(matches!(result, Err(StorageError::Read { .. })));
    }

    #[tokio::test]
    async fn load_empty_file_gives_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_words(&dir, "");

        let store = WordStore::load(&path).await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn append_updates_file_and_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_words(&dir, "apple\n");
        let store = WordStore::load(&path).await.unwrap();

        store.append("hello".to_string()).await;

        assert_eq!(store.snapshot(), vec!["apple", "hello"]);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "apple\nhello\n");
    }

    #[tokio::test]
    async fn append_keeps_empty_and_duplicate_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_words(&dir, "");
        let store = WordStore::load(&path).await.unwrap();

        store.append(String::new()).await;
        store.append("echo".to_string()).await;
        store.append("echo".to_string()).await;

        assert_eq!(store.snapshot(), vec!["", "echo", "echo"]);
    }

    #[tokio::test]
    async fn append_failure_leaves_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("words.txt");
        let store = WordStore::new(path, vec!["apple".to_string()]);

        store.append("hello".to_string()).await;

        assert_eq!(store.snapshot(), vec!["apple"]);
    }

    #[tokio::test]
    async fn persist_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_words(&dir, "apple\nbanana\n");
        let store = WordStore::load(&path).await.unwrap();

        store.append("hello".to_string()).await;
        store.persist().await.unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "apple banana hello\n"
        );

        let reloaded = WordStore::load(&path).await.unwrap();
        let hellos = reloaded.snapshot().iter().filter(|w| *w == "hello").count();
        assert_eq!(hellos, 1);
        assert_eq!(reloaded.snapshot(), store.snapshot());
    }

    #[tokio::test]
    async fn append_after_restart_keeps_words_separate() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_words(&dir, "apple banana");

        let first_run = WordStore::load(&path).await.unwrap();
        first_run.persist().await.unwrap();

        // Second run ends without a persist
        let second_run = WordStore::load(&path).await.unwrap();
        second_run.append("hello".to_string()).await;
        assert_eq!(second_run.snapshot(), vec!["apple", "banana", "hello"]);

        let third_run = WordStore::load(&path).await.unwrap();
        assert_eq!(third_run.snapshot(), second_run.snapshot());
    }

    #[tokio::test]
    async fn persist_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("words.txt");
        let store = WordStore::new(path, vec!["apple".to_string()]);

        let result = store.persist().await;
        assert!(matches!(result, Err(StorageError::Write { .. })));
    }

    #[tokio::test]
    async fn snapshot_is_detached_from_later_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_words(&dir, "one");
        let store = WordStore::load(&path).await.unwrap();

        let before = store.snapshot();
        store.append("two".to_string()).await;

        assert_eq!(before, vec!["one"]);
        assert_eq!(store.snapshot(), vec!["one", "two"]);
    }

    #[tokio::test]
    async fn concurrent_appends_keep_file_and_memory_in_step() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_words(&dir, "");
        let store = Arc::new(WordStore::load(&path).await.unwrap());

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.append(format!("w{i}")).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let in_memory = store.snapshot();
        assert_eq!(in_memory.len(), 20);

        let on_disk = load_from_file(&path).await.unwrap();
        assert_eq!(on_disk, in_memory);
    }
}
