use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const STORE_FILE_NAME: &str = "saved_words.json";

#[derive(Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read the saved word list: {0}")]
    Read(io::Error),
    #[error("failed to write the saved word list: {0}")]
    Write(io::Error),
    #[error("failed to encode the saved word list: {0}")]
    Encode(serde_json::Error),
}

/// The words the user chose to keep, in the order they were saved.
///
/// Persisted as a single json array of strings. The in-memory list stays
/// authoritative for the session even when a write fails, so a save is
/// never silently dropped mid-session.
pub struct SavedWords {
    path: PathBuf,
    words: Option<Vec<String>>,
}

impl SavedWords {
    pub fn new(path: PathBuf) -> Self {
        Self { path, words: None }
    }

    /// Appends `word` unless it is already saved (exact, case-sensitive
    /// match). On a failed write the word stays in the in-memory list and
    /// the error is returned so the caller can warn about the next start.
    pub fn add(&mut self, word: &str) -> Result<AddOutcome, PersistenceError> {
        debug_assert!(!word.is_empty(), "callers never save an empty word");
        let words = self.ensure_loaded()?;
        if words.iter().any(|saved| saved == word) {
            return Ok(AddOutcome::AlreadyPresent);
        }
        words.push(word.to_owned());
        self.persist()?;
        Ok(AddOutcome::Added)
    }

    pub fn list(&mut self) -> Result<&[String], PersistenceError> {
        Ok(self.ensure_loaded()?.as_slice())
    }

    fn ensure_loaded(&mut self) -> Result<&mut Vec<String>, PersistenceError> {
        if self.words.is_none() {
            self.words = Some(load(&self.path)?);
        }
        Ok(self.words.get_or_insert_with(Vec::new))
    }

    fn persist(&self) -> Result<(), PersistenceError> {
        let words = self.words.as_deref().unwrap_or(&[]);
        let encoded = serde_json::to_string(words).map_err(PersistenceError::Encode)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(PersistenceError::Write)?;
        }
        std::fs::write(&self.path, encoded).map_err(PersistenceError::Write)
    }
}

/// A missing file and an unparseable one are both the "no data yet" case;
/// only an io failure on an existing file is reported as a fault.
fn load(path: &Path) -> Result<Vec<String>, PersistenceError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(error) => return Err(PersistenceError::Read(error)),
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(words) => Ok(sanitize(words)),
        Err(error) => {
            tracing::warn!(
                "ignoring unparseable saved word list at {}: {error}",
                path.display()
            );
            Ok(Vec::new())
        }
    }
}

/// Re-establishes the list invariant against externally edited files:
/// no empty strings, no duplicates, first occurrence wins.
fn sanitize(words: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(words.len());
    for word in words {
        if !word.is_empty() && !result.contains(&word) {
            result.push(word);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SavedWords {
        SavedWords::new(dir.path().join(STORE_FILE_NAME))
    }

    #[test]
    fn adding_twice_reports_already_present() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        assert_eq!(store.add("cat").unwrap(), AddOutcome::Added);
        assert_eq!(store.add("cat").unwrap(), AddOutcome::AlreadyPresent);
        assert_eq!(store.list().unwrap(), ["cat".to_owned()]);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.add("cat").unwrap();
        store.add("dog").unwrap();
        assert_eq!(store.list().unwrap(), ["cat".to_owned(), "dog".to_owned()]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        assert_eq!(store.add("cat").unwrap(), AddOutcome::Added);
        assert_eq!(store.add("Cat").unwrap(), AddOutcome::Added);
    }

    #[test]
    fn list_survives_a_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = store_in(&dir);
            store.add("ephemeral").unwrap();
            store.add("lasting").unwrap();
        }
        let mut store = store_in(&dir);
        assert_eq!(
            store.list().unwrap(),
            ["ephemeral".to_owned(), "lasting".to_owned()]
        );
    }

    #[test]
    fn absent_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(STORE_FILE_NAME), "not json at all").unwrap();
        let mut store = store_in(&dir);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn externally_broken_lists_are_sanitized_on_load() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(STORE_FILE_NAME),
            r#"["cat", "", "dog", "cat"]"#,
        )
        .unwrap();
        let mut store = store_in(&dir);
        assert_eq!(store.list().unwrap(), ["cat".to_owned(), "dog".to_owned()]);
    }

    #[test]
    fn memory_stays_authoritative_when_the_write_fails() {
        let dir = TempDir::new().unwrap();
        let mut store = SavedWords::new(dir.path().join("sub").join(STORE_FILE_NAME));
        assert!(store.list().unwrap().is_empty());

        // a regular file where the store directory should be makes the write fail
        std::fs::write(dir.path().join("sub"), "").unwrap();
        assert!(store.add("cat").is_err());
        assert_eq!(store.add("cat").unwrap(), AddOutcome::AlreadyPresent);
    }
}
