use std::fmt;

use entries_api::get_definition;

mod entries_api;
mod word;

pub use word::{PartOfSpeech, Phonetic, UnknownPartOfSpeech, Word, WordDefinition, WordMeaning};

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary service: {0}")]
    Fetch(reqwest::Error),
    #[error("failed to decode the dictionary response: {0}")]
    Deserialize(reqwest::Error),
    #[error(transparent)]
    Conversion(UnknownPartOfSpeech),
    #[error("the dictionary service answered with status {0}")]
    Status(reqwest::StatusCode),
    #[error("{0}")]
    NotFound(NotFoundError),
}

/// The structured "no definitions found" reply the service sends for
/// words it has no entry for.
#[derive(Debug)]
pub struct NotFoundError {
    message: String,
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub struct Dictionary {
    client: reqwest::Client,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        get_definition(&self.client, word).await
    }
}
