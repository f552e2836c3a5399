use std::str::FromStr;

use serde::Deserialize;

use crate::word::{PartOfSpeech, Phonetic, Word, WordDefinition, WordMeaning};
use crate::{DictionaryError, NotFoundError};

const ENTRIES_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

#[derive(Deserialize)]
struct WordEntry {
    word: String,
    #[serde(default)]
    phonetics: Vec<PhoneticEntry>,
    #[serde(default)]
    meanings: Vec<MeaningEntry>,
    #[serde(default, rename = "sourceUrls")]
    source_urls: Vec<String>,
}

#[derive(Deserialize)]
struct PhoneticEntry {
    text: Option<String>,
    audio: Option<String>,
}

#[derive(Deserialize)]
struct MeaningEntry {
    #[serde(rename = "partOfSpeech")]
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<DefinitionEntry>,
    #[serde(default)]
    synonyms: Vec<String>,
}

#[derive(Deserialize)]
struct DefinitionEntry {
    definition: String,
    example: Option<String>,
    #[serde(default)]
    synonyms: Vec<String>,
}

/// Body the api sends along with a 404.
#[derive(Deserialize)]
struct NoDefinitionsReply {
    message: String,
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    word: &str,
) -> Result<Word, DictionaryError> {
    let res = client
        .get(format!("{ENTRIES_API_URL}{word}"))
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    let status = res.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        let reply: NoDefinitionsReply =
            res.json().await.map_err(DictionaryError::Deserialize)?;
        return Err(DictionaryError::NotFound(NotFoundError {
            message: reply.message,
        }));
    }
    if !status.is_success() {
        return Err(DictionaryError::Status(status));
    }
    let entries: Vec<WordEntry> = res.json().await.map_err(DictionaryError::Deserialize)?;
    match entries.into_iter().next() {
        Some(entry) => convert_entry(entry),
        // the api can answer 200 with an empty entry list, treat it like a miss
        None => Err(DictionaryError::NotFound(NotFoundError {
            message: format!("No definitions found for \"{word}\""),
        })),
    }
}

fn convert_entry(entry: WordEntry) -> Result<Word, DictionaryError> {
    let meanings = entry
        .meanings
        .into_iter()
        .map(|meaning| {
            Ok(WordMeaning {
                part_of_speech: PartOfSpeech::from_str(&meaning.part_of_speech)?,
                definitions: meaning
                    .definitions
                    .into_iter()
                    .map(|definition| WordDefinition {
                        definition: definition.definition,
                        example: definition.example,
                        synonyms: definition.synonyms,
                    })
                    .collect(),
                synonyms: meaning.synonyms,
            })
        })
        .collect::<Result<Vec<WordMeaning>, _>>()
        .map_err(DictionaryError::Conversion)?;
    Ok(Word {
        word: entry.word,
        phonetics: entry
            .phonetics
            .into_iter()
            .map(|phonetic| Phonetic {
                // the api encodes "missing" as an empty string as often as null
                text: phonetic.text.filter(|text| !text.is_empty()),
                audio: phonetic.audio.filter(|audio| !audio.is_empty()),
            })
            .collect(),
        meanings,
        source_url: entry.source_urls.into_iter().next(),
    })
}
