use std::fmt;
use std::str::FromStr;

#[derive(Debug)]
pub struct Word {
    pub word: String,
    pub phonetics: Vec<Phonetic>,
    pub meanings: Vec<WordMeaning>,
    pub source_url: Option<String>,
}

impl Word {
    /// The first phonetic spelling the entry carries, if any.
    pub fn phonetic_text(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .find_map(|phonetic| phonetic.text.as_deref())
    }

    /// The first pronunciation audio url the entry carries, if any.
    pub fn audio_url(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .find_map(|phonetic| phonetic.audio.as_deref())
    }
}

#[derive(Debug)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
}

#[derive(Debug)]
pub struct WordMeaning {
    pub part_of_speech: PartOfSpeech,
    pub definitions: Vec<WordDefinition>,
    pub synonyms: Vec<String>,
}

#[derive(Debug)]
pub struct WordDefinition {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
    Exclamation,
    Determiner,
    Article,
    Numeral,
    Particle,
}

impl PartOfSpeech {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Exclamation => "exclamation",
            PartOfSpeech::Determiner => "determiner",
            PartOfSpeech::Article => "article",
            PartOfSpeech::Numeral => "numeral",
            PartOfSpeech::Particle => "particle",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown part of speech `{tag}`")]
pub struct UnknownPartOfSpeech {
    tag: String,
}

impl FromStr for PartOfSpeech {
    type Err = UnknownPartOfSpeech;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "noun" => Ok(PartOfSpeech::Noun),
            "pronoun" => Ok(PartOfSpeech::Pronoun),
            "verb" => Ok(PartOfSpeech::Verb),
            "adjective" => Ok(PartOfSpeech::Adjective),
            "adverb" => Ok(PartOfSpeech::Adverb),
            "preposition" => Ok(PartOfSpeech::Preposition),
            "conjunction" => Ok(PartOfSpeech::Conjunction),
            "interjection" => Ok(PartOfSpeech::Interjection),
            "exclamation" => Ok(PartOfSpeech::Exclamation),
            "determiner" => Ok(PartOfSpeech::Determiner),
            "article" => Ok(PartOfSpeech::Article),
            "numeral" => Ok(PartOfSpeech::Numeral),
            "particle" => Ok(PartOfSpeech::Particle),
            other => Err(UnknownPartOfSpeech {
                tag: other.to_owned(),
            }),
        }
    }
}
