use super::level::Level;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A vocabulary entry from the bundled catalog
///
/// Identifiers are stable strings, so persisted progress keeps pointing at the
/// same words after the catalog is reloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogWord {
    /// Unique identifier (e.g., "a1-haus")
    pub id: String,
    /// German headword
    pub german: String,
    /// Translation of the headword
    pub translation: String,
    /// Free-form part-of-speech tag (e.g., "noun", "verb")
    pub part_of_speech: String,
    /// Example sentence using the headword
    pub example: String,
    /// Proficiency level of the word
    pub level: Level,
    /// Optional topic tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl CatalogWord {
    /// Classify the free-form part-of-speech tag
    pub fn part_of_speech_kind(&self) -> PartOfSpeech {
        PartOfSpeech::classify(&self.part_of_speech)
    }
}

/// Coarse part-of-speech classes used by the vocabulary filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Other,
}

impl PartOfSpeech {
    /// Map a free-form tag onto a class
    ///
    /// Accepts English, German, Russian and Ukrainian grammar terms by stem,
    /// so "Substantiv", "noun" and "существительное" all classify as
    /// [`PartOfSpeech::Noun`]. Terms in other languages fall into
    /// [`PartOfSpeech::Other`].
    pub fn classify(tag: &str) -> Self {
        let tag = tag.trim().to_lowercase();
        let has_stem = |stems: &[&str]| stems.iter().any(|stem| tag.starts_with(stem));
        if has_stem(&["noun", "substantiv", "nomen", "существительн", "іменник"]) {
            PartOfSpeech::Noun
        } else if has_stem(&["verb", "глагол", "дієслов"]) {
            PartOfSpeech::Verb
        } else if has_stem(&["adj", "прилагательн", "прикметник"]) {
            PartOfSpeech::Adjective
        } else {
            PartOfSpeech::Other
        }
    }
}

impl FromStr for PartOfSpeech {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "noun" | "nouns" => Ok(PartOfSpeech::Noun),
            "verb" | "verbs" => Ok(PartOfSpeech::Verb),
            "adjective" | "adjectives" => Ok(PartOfSpeech::Adjective),
            "other" => Ok(PartOfSpeech::Other),
            _ => Err(format!(
                "Invalid part of speech '{}'. Valid options are: noun, verb, adjective, other",
                s
            )),
        }
    }
}
