use dictionary::Word;

use crate::lookup::LookupError;

/// Display caps, matching how much fits a screenful before it stops
/// being useful.
pub const MAX_DEFINITIONS: usize = 5;
pub const MAX_SYNONYMS: usize = 10;

pub fn print_definition(word: &Word) {
    print!("Showing definition for '{}'", word.word);
    if let Some(text) = word.phonetic_text() {
        print!("  {text}");
    }
    if word.audio_url().is_some() {
        print!("  (audio: play)");
    }
    println!(":");
    let mut synonym_number = 0;
    for meaning in &word.meanings {
        println!("    {}:", meaning.part_of_speech);
        for (index, definition) in meaning
            .definitions
            .iter()
            .take(MAX_DEFINITIONS)
            .enumerate()
        {
            println!("        {}. {}", index + 1, definition.definition);
            if let Some(example) = &definition.example {
                println!("           \"{example}\"");
            }
            if !definition.synonyms.is_empty() {
                println!("           synonyms: {}", definition.synonyms.join(", "));
            }
        }
        if !meaning.synonyms.is_empty() {
            let tokens = meaning
                .synonyms
                .iter()
                .take(MAX_SYNONYMS)
                .map(|synonym| {
                    synonym_number += 1;
                    format!("[{synonym_number}] {synonym}")
                })
                .collect::<Vec<String>>();
            println!("      synonyms: {}", tokens.join("  "));
        }
    }
    if let Some(url) = &word.source_url {
        println!("    source: {url}");
    }
}

pub fn print_lookup_error(error: &LookupError) {
    match error {
        // a stale outcome never reaches the screen
        LookupError::Superseded => {}
        LookupError::EmptyQuery | LookupError::NotFound => println!("{error}"),
        LookupError::TransientFailure(_) => eprintln!("{error}"),
    }
}

/// The meaning-level synonyms in the order and quantity they are shown,
/// so `syn <n>` selects exactly what is on screen.
pub fn displayed_synonyms(word: &Word) -> Vec<&str> {
    word.meanings
        .iter()
        .flat_map(|meaning| meaning.synonyms.iter().take(MAX_SYNONYMS))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use dictionary::{PartOfSpeech, WordMeaning};

    use super::*;

    fn meaning_with_synonyms(count: usize) -> WordMeaning {
        WordMeaning {
            part_of_speech: PartOfSpeech::Noun,
            definitions: Vec::new(),
            synonyms: (0..count).map(|index| format!("synonym-{index}")).collect(),
        }
    }

    #[test]
    fn synonym_numbering_is_capped_per_meaning_and_spans_meanings() {
        let word = Word {
            word: "busy".to_owned(),
            phonetics: Vec::new(),
            meanings: vec![meaning_with_synonyms(12), meaning_with_synonyms(3)],
            source_url: None,
        };
        let synonyms = displayed_synonyms(&word);
        assert_eq!(synonyms.len(), MAX_SYNONYMS + 3);
        assert_eq!(synonyms[0], "synonym-0");
        // the eleventh shown synonym is the second meaning's first
        assert_eq!(synonyms[MAX_SYNONYMS], "synonym-0");
    }
}
