//! Read-only vocabulary and grammar catalog
//!
//! The catalog is loaded once at startup, either from the JSON datasets
//! compiled into the binary or from files given on the command line.
//! - `level`: the six ordered proficiency levels
//! - `word`: vocabulary entries
//! - `topic`: grammar topics
//!
//! A dataset that cannot be read or parsed is replaced by an empty list, so the
//! rest of the server keeps working with empty results.

mod level;
mod topic;
mod word;

pub use level::Level;
pub use topic::GrammarTopic;
pub use word::{CatalogWord, PartOfSpeech};

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

const BUNDLED_WORDS: &str = include_str!("../../data/seed_words.json");
const BUNDLED_TOPICS: &str = include_str!("../../data/grammar_topics.json");

/// Static reference data: vocabulary words and grammar topics
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    words: Vec<CatalogWord>,
    topics: Vec<GrammarTopic>,
    word_index: HashMap<String, usize>,
    topic_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from already parsed records
    ///
    /// Records with an identifier that was already seen are dropped, keeping
    /// the first occurrence.
    pub fn new(words: Vec<CatalogWord>, topics: Vec<GrammarTopic>) -> Self {
        let mut catalog = Self::default();

        for word in words {
            if catalog.word_index.contains_key(&word.id) {
                warn!(id = %word.id, "Duplicate word id in catalog, keeping first entry");
                continue;
            }
            catalog
                .word_index
                .insert(word.id.clone(), catalog.words.len());
            catalog.words.push(word);
        }

        for topic in topics {
            if catalog.topic_index.contains_key(&topic.id) {
                warn!(id = %topic.id, "Duplicate topic id in catalog, keeping first entry");
                continue;
            }
            catalog
                .topic_index
                .insert(topic.id.clone(), catalog.topics.len());
            catalog.topics.push(topic);
        }

        catalog
    }

    /// Catalog built from the datasets bundled with the binary
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_WORDS, BUNDLED_TOPICS)
    }

    /// Build a catalog from JSON documents
    ///
    /// Each document that fails to parse contributes an empty list.
    pub fn from_json(words_json: &str, topics_json: &str) -> Self {
        let words = parse_words(words_json).unwrap_or_else(|e| {
            warn!(error = %format!("{:#}", e), "Word catalog unavailable, using empty list");
            Vec::new()
        });
        let topics = parse_topics(topics_json).unwrap_or_else(|e| {
            warn!(error = %format!("{:#}", e), "Grammar catalog unavailable, using empty list");
            Vec::new()
        });
        Self::new(words, topics)
    }

    /// Load a catalog, falling back to the bundled dataset for any path not given
    ///
    /// # Arguments
    /// * `words_path` - Optional JSON file with vocabulary words
    /// * `topics_path` - Optional JSON file with grammar topics
    pub fn load(words_path: Option<&Path>, topics_path: Option<&Path>) -> Self {
        let words = match words_path {
            Some(path) => read_json_file(path).and_then(|json| parse_words(&json)),
            None => parse_words(BUNDLED_WORDS),
        }
        .unwrap_or_else(|e| {
            warn!(error = %format!("{:#}", e), "Word catalog unavailable, using empty list");
            Vec::new()
        });

        let topics = match topics_path {
            Some(path) => read_json_file(path).and_then(|json| parse_topics(&json)),
            None => parse_topics(BUNDLED_TOPICS),
        }
        .unwrap_or_else(|e| {
            warn!(error = %format!("{:#}", e), "Grammar catalog unavailable, using empty list");
            Vec::new()
        });

        Self::new(words, topics)
    }

    /// All vocabulary words in catalog order
    pub fn all_words(&self) -> &[CatalogWord] {
        &self.words
    }

    /// All grammar topics in catalog order
    pub fn all_topics(&self) -> &[GrammarTopic] {
        &self.topics
    }

    /// Words of a single level, in catalog order
    pub fn words_for_level(&self, level: Level) -> Vec<&CatalogWord> {
        self.words.iter().filter(|w| w.level == level).collect()
    }

    /// Grammar topics of a single level, in catalog order
    pub fn topics_for_level(&self, level: Level) -> Vec<&GrammarTopic> {
        self.topics.iter().filter(|t| t.level == level).collect()
    }

    /// Find a word by its identifier
    pub fn word(&self, id: &str) -> Option<&CatalogWord> {
        self.word_index.get(id).map(|&i| &self.words[i])
    }

    /// Find a grammar topic by its identifier
    pub fn topic(&self, id: &str) -> Option<&GrammarTopic> {
        self.topic_index.get(id).map(|&i| &self.topics[i])
    }

    /// Check if the catalog has neither words nor topics
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.topics.is_empty()
    }
}

fn read_json_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn parse_words(json: &str) -> Result<Vec<CatalogWord>> {
    serde_json::from_str(json).context("Failed to parse word catalog")
}

fn parse_topics(json: &str) -> Result<Vec<GrammarTopic>> {
    serde_json::from_str(json).context("Failed to parse grammar catalog")
}
