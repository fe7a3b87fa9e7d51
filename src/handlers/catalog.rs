//! Catalog browsing handlers: vocabulary and grammar topics

use crate::DeutschDailyHandler;
use crate::formatting::{self, LearnedFilter};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl DeutschDailyHandler {
    /// List the words of a level with optional filters
    ///
    /// # Arguments
    /// * `level` - Level code; the selected level when omitted
    /// * `keyword` - Case-insensitive search in headword and translation
    /// * `part_of_speech` - noun/verb/adjective/other
    /// * `learned` - all/learned/unlearned
    pub async fn handle_list_words(
        &self,
        level: Option<String>,
        keyword: Option<String>,
        part_of_speech: Option<String>,
        learned: Option<String>,
    ) -> McpResult<String> {
        let level = level.as_deref().map(validation::parse_level).transpose()?;
        let part_of_speech = part_of_speech
            .as_deref()
            .map(validation::parse_part_of_speech)
            .transpose()?;
        let learned = learned
            .as_deref()
            .map(validation::parse_learned_filter)
            .transpose()?
            .unwrap_or(LearnedFilter::All);

        let (data, _, events) = self.open_day();
        let level = level.unwrap_or(data.plan.selected_level);

        let mut words = self.catalog.words_for_level(level);
        if let Some(keyword) = &keyword {
            formatting::apply_keyword_filter(&mut words, keyword);
        }
        if let Some(part_of_speech) = part_of_speech {
            formatting::apply_part_of_speech_filter(&mut words, part_of_speech);
        }
        formatting::apply_learned_filter(&mut words, learned, &data);

        let output = formatting::format_words(&words, &data);
        self.commit(data, events)?;
        Ok(output)
    }

    /// Show a single word
    pub async fn handle_word(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_id(&id);
        let (data, _, events) = self.open_day();

        let Some(word) = self.catalog.word(&id) else {
            self.commit(data, events)?;
            bail_public!(_, "Word '{}' not found", id);
        };

        let output = formatting::format_word_detail(word, &data);
        self.commit(data, events)?;
        Ok(output)
    }

    /// List the grammar topics of a level with completion marks
    pub async fn handle_grammar(&self, level: Option<String>) -> McpResult<String> {
        let level = level.as_deref().map(validation::parse_level).transpose()?;
        let (data, _, events) = self.open_day();
        let level = level.unwrap_or(data.plan.selected_level);

        let topics = self.catalog.topics_for_level(level);
        let output = formatting::format_topics(level, &topics, &data);
        self.commit(data, events)?;
        Ok(output)
    }

    /// Show a single grammar topic
    pub async fn handle_topic(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_id(&id);
        let (data, _, events) = self.open_day();

        let Some(topic) = self.catalog.topic(&id) else {
            self.commit(data, events)?;
            bail_public!(_, "Grammar topic '{}' not found", id);
        };

        let output = formatting::format_topic_detail(topic, &data);
        self.commit(data, events)?;
        Ok(output)
    }
}
