use dictionary::{Dictionary, Word};

use crate::audio;
use crate::lookup::{LookupCoordinator, LookupError, WordSource};
use crate::render;
use crate::store::{AddOutcome, SavedWords};

/// All mutable state of a session, owned in one place and passed to the
/// command handlers explicitly.
pub struct App<S = Dictionary> {
    current_query: Option<String>,
    last_result: Option<Word>,
    store: SavedWords,
    coordinator: LookupCoordinator<S>,
    player: String,
}

impl App {
    pub fn new(store: SavedWords, player: String) -> Self {
        App::with_source(Dictionary::new(), store, player)
    }
}

impl<S: WordSource> App<S> {
    pub fn with_source(source: S, store: SavedWords, player: String) -> Self {
        Self {
            current_query: None,
            last_result: None,
            store,
            coordinator: LookupCoordinator::new(source),
            player,
        }
    }

    pub async fn search(&mut self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            render::print_lookup_error(&LookupError::EmptyQuery);
            return;
        }
        self.current_query = Some(term.to_owned());
        match self.coordinator.lookup(term).await {
            Ok(word) => {
                render::print_definition(&word);
                self.last_result = Some(word);
            }
            Err(error) => render::print_lookup_error(&error),
        }
    }

    /// Saves `word`, or the word of the result on screen when none is
    /// given.
    pub fn save(&mut self, word: Option<&str>) {
        let word = match word {
            Some(word) => word.to_owned(),
            None => match &self.last_result {
                Some(result) => result.word.clone(),
                None => {
                    println!("Look up a word first, or pass one: save <word>");
                    return;
                }
            },
        };
        match self.store.add(&word) {
            Ok(AddOutcome::Added) => println!("Saved \"{word}\"."),
            Ok(AddOutcome::AlreadyPresent) => println!("\"{word}\" is already saved."),
            Err(error) => {
                eprintln!("{error}; \"{word}\" is kept for this session only.");
            }
        }
    }

    pub fn list_saved(&mut self) {
        match self.store.list() {
            Ok(words) if words.is_empty() => println!("No words saved yet."),
            Ok(words) => {
                for word in words {
                    println!("    {word}");
                }
            }
            Err(error) => eprintln!("{error}"),
        }
    }

    pub async fn play(&mut self) {
        match &self.last_result {
            None => println!("Look up a word first."),
            Some(result) => {
                if let Err(error) = audio::play_pronunciation(&self.player, result).await {
                    eprintln!("Unable to play audio: {error}.");
                }
            }
        }
    }

    /// Re-runs the search with the n-th synonym shown for the last
    /// result, mirroring a click on a synonym token.
    pub async fn synonym(&mut self, number: &str) {
        let term = {
            let Some(result) = &self.last_result else {
                println!("Look up a word first.");
                return;
            };
            let synonyms = render::displayed_synonyms(result);
            let chosen = number
                .parse::<usize>()
                .ok()
                .and_then(|number| synonyms.get(number.wrapping_sub(1)));
            match chosen {
                Some(synonym) => synonym.to_string(),
                None => {
                    println!("No synonym numbered {number} on screen.");
                    return;
                }
            }
        };
        self.search(&term).await;
    }
}

#[cfg(test)]
mod tests {
    use dictionary::{PartOfSpeech, WordDefinition, WordMeaning};
    use tempfile::TempDir;

    use crate::lookup::FetchError;
    use crate::store::STORE_FILE_NAME;

    use super::*;

    struct FixedSource;

    impl WordSource for FixedSource {
        async fn fetch(&self, term: &str) -> Result<Word, FetchError> {
            Ok(Word {
                word: term.to_owned(),
                phonetics: Vec::new(),
                meanings: vec![WordMeaning {
                    part_of_speech: PartOfSpeech::Adjective,
                    definitions: vec![WordDefinition {
                        definition: format!("definition of {term}"),
                        example: None,
                        synonyms: Vec::new(),
                    }],
                    synonyms: vec![format!("{term}-like"), format!("{term}-ish")],
                }],
                source_url: None,
            })
        }
    }

    fn app_in(dir: &TempDir) -> App<FixedSource> {
        let store = SavedWords::new(dir.path().join(STORE_FILE_NAME));
        App::with_source(FixedSource, store, "mpv".to_owned())
    }

    #[tokio::test]
    async fn searching_tracks_the_current_query() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        assert_eq!(app.current_query, None);
        app.search("  hello ").await;
        assert_eq!(app.current_query.as_deref(), Some("hello"));
        // an empty submission is rejected before it becomes the current query
        app.search("   ").await;
        assert_eq!(app.current_query.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn save_without_an_argument_keeps_the_word_on_screen() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        app.save(None);
        assert!(app.store.list().unwrap().is_empty());

        app.search("serendipity").await;
        app.save(None);
        assert_eq!(app.store.list().unwrap(), ["serendipity".to_owned()]);
    }

    #[tokio::test]
    async fn a_synonym_number_retriggers_the_search() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        app.search("bright").await;
        app.synonym("2").await;
        assert_eq!(app.current_query.as_deref(), Some("bright-ish"));

        app.synonym("17").await;
        assert_eq!(app.current_query.as_deref(), Some("bright-ish"));
    }
}
