use std::sync::atomic::{AtomicU64, Ordering};

use dictionary::{Dictionary, DictionaryError, Word};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Please enter a word to search.")]
    EmptyQuery,
    #[error("Couldn't find the word you were looking for.")]
    NotFound,
    #[error("Failed to fetch the definition: {0}")]
    TransientFailure(String),
    /// A newer query was issued while this one was in flight. Never shown
    /// to the user, the outcome is simply dropped.
    #[error("superseded by a newer search")]
    Superseded,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no entry for that word")]
    NoEntry,
    #[error("{0}")]
    Unavailable(String),
}

/// Seam to the word-lookup capability so the coordinator can be driven
/// by scripted sources in tests.
pub trait WordSource {
    async fn fetch(&self, term: &str) -> Result<Word, FetchError>;
}

impl WordSource for Dictionary {
    async fn fetch(&self, term: &str) -> Result<Word, FetchError> {
        self.get_definition(term).await.map_err(|error| match error {
            DictionaryError::NotFound(_) => FetchError::NoEntry,
            other => FetchError::Unavailable(other.to_string()),
        })
    }
}

/// Issues lookups against a [`WordSource`] and tags each one with a
/// generation so a lookup that resolves after a newer one was issued is
/// reported as [`LookupError::Superseded`] instead of overwriting it.
pub struct LookupCoordinator<S> {
    source: S,
    latest: AtomicU64,
}

impl<S: WordSource> LookupCoordinator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            latest: AtomicU64::new(0),
        }
    }

    /// Looks up `term`, trimmed but otherwise passed to the source
    /// verbatim. An empty trimmed term fails without touching the source.
    pub async fn lookup(&self, term: &str) -> Result<Word, LookupError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(LookupError::EmptyQuery);
        }
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("lookup #{generation} for {term:?}");
        let outcome = self.source.fetch(term).await;
        if self.latest.load(Ordering::SeqCst) != generation {
            tracing::debug!("dropping superseded lookup #{generation} for {term:?}");
            return Err(LookupError::Superseded);
        }
        match outcome {
            Ok(word) => Ok(word),
            Err(FetchError::NoEntry) => Err(LookupError::NotFound),
            Err(FetchError::Unavailable(reason)) => Err(LookupError::TransientFailure(reason)),
        }
    }
}
