//! Formatting helper functions for tool output
//!
//! This module contains the vocabulary filters and the text rendering of
//! words, topics, the daily plan and the progress overview.

use crate::catalog::{Catalog, CatalogWord, GrammarTopic, Level, PartOfSpeech};
use crate::study::StudyData;
use chrono::NaiveDate;
use std::str::FromStr;

/// Number of activity days shown on the progress overview
const RECENT_ACTIVITY_DAYS: usize = 5;

/// Learned-state filter for vocabulary listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearnedFilter {
    All,
    Learned,
    Unlearned,
}

impl FromStr for LearnedFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(LearnedFilter::All),
            "learned" => Ok(LearnedFilter::Learned),
            "unlearned" => Ok(LearnedFilter::Unlearned),
            _ => Err(format!(
                "Invalid filter '{}'. Valid options are: all, learned, unlearned",
                s
            )),
        }
    }
}

/// Apply keyword filtering (case-insensitive search in headword and translation)
///
/// # Arguments
/// * `words` - Words to filter
/// * `keyword` - Keyword to search for (case-insensitive); empty keeps everything
pub fn apply_keyword_filter(words: &mut Vec<&CatalogWord>, keyword: &str) {
    let keyword_lower = keyword.trim().to_lowercase();
    if keyword_lower.is_empty() {
        return;
    }
    words.retain(|word| {
        word.german.to_lowercase().contains(&keyword_lower)
            || word.translation.to_lowercase().contains(&keyword_lower)
    });
}

/// Apply part-of-speech filtering
pub fn apply_part_of_speech_filter(words: &mut Vec<&CatalogWord>, part_of_speech: PartOfSpeech) {
    words.retain(|word| word.part_of_speech_kind() == part_of_speech);
}

/// Apply learned/unlearned filtering against the learned set
pub fn apply_learned_filter(words: &mut Vec<&CatalogWord>, filter: LearnedFilter, data: &StudyData) {
    match filter {
        LearnedFilter::All => {}
        LearnedFilter::Learned => words.retain(|w| data.progress.is_word_learned(&w.id)),
        LearnedFilter::Unlearned => words.retain(|w| !data.progress.is_word_learned(&w.id)),
    }
}

fn word_line(word: &CatalogWord, marked: bool) -> String {
    format!(
        "- [{}] {} <{}> - {} ({}, {})\n",
        if marked { "x" } else { " " },
        word.german,
        word.id,
        word.translation,
        word.part_of_speech,
        word.level
    )
}

/// Format a vocabulary listing
///
/// # Arguments
/// * `words` - Words to list
/// * `data` - Study data used to mark learned words
pub fn format_words(words: &[&CatalogWord], data: &StudyData) -> String {
    if words.is_empty() {
        return "No words found".to_string();
    }

    let mut result = format!("Found {} word(s):\n\n", words.len());
    for word in words {
        result.push_str(&word_line(word, data.progress.is_word_learned(&word.id)));
    }
    result
}

/// Format the detail view of a single word
pub fn format_word_detail(word: &CatalogWord, data: &StudyData) -> String {
    let mut result = format!("{} - {}\n", word.german, word.translation);
    result.push_str(&format!("  ID: {}\n", word.id));
    result.push_str(&format!("  Level: {}\n", word.level.display_name()));
    result.push_str(&format!("  Part of speech: {}\n", word.part_of_speech));
    result.push_str(&format!("  Example: {}\n", word.example));
    if let Some(tags) = &word.tags
        && !tags.is_empty()
    {
        result.push_str(&format!("  Tags: {}\n", tags.join(", ")));
    }
    result.push_str(&format!(
        "  Learned: {}\n",
        if data.progress.is_word_learned(&word.id) {
            "yes"
        } else {
            "no"
        }
    ));
    if data.plan.is_planned(&word.id) {
        result.push_str("  In today's words\n");
    }
    result
}

/// Format today's plan: new words with completion marks, then review words
pub fn format_today(data: &StudyData, catalog: &Catalog, today: NaiveDate) -> String {
    let plan = &data.plan;
    let words = plan.todays_words(catalog);

    let mut result = format!(
        "Today ({}) - level {}, {} word(s) per day\n",
        today,
        plan.selected_level.display_name(),
        plan.words_per_day
    );
    result.push_str(&format!(
        "Streak: {} day(s)\n\n",
        data.progress.streak_days
    ));

    if words.is_empty() {
        result.push_str("No words available for this level.\n");
    } else {
        let done = words.iter().filter(|w| plan.is_completed(&w.id)).count();
        result.push_str(&format!(
            "Today's words ({}/{} learned):\n",
            done,
            words.len()
        ));
        for word in &words {
            result.push_str(&word_line(word, plan.is_completed(&word.id)));
        }
        if plan.remaining_count() == 0 {
            result.push_str("All of today's words are learned.\n");
        }
    }

    result.push('\n');
    result.push_str(&format_review(data, catalog));
    result
}

/// Format today's review words
pub fn format_review(data: &StudyData, catalog: &Catalog) -> String {
    let words = data.plan.review_words(catalog);
    if words.is_empty() {
        return "No words to review today.\n".to_string();
    }

    let mut result = format!("Review ({} word(s) from your last study day):\n", words.len());
    for word in &words {
        result.push_str(&format!(
            "- {} <{}> - {}\n  Example: {}\n",
            word.german, word.id, word.translation, word.example
        ));
    }
    result
}

/// Format the grammar topic listing of a level
pub fn format_topics(level: Level, topics: &[&GrammarTopic], data: &StudyData) -> String {
    if topics.is_empty() {
        return format!("No grammar topics for level {}", level);
    }

    let completed = topics
        .iter()
        .filter(|t| data.progress.is_topic_completed(&t.id))
        .count();
    let mut result = format!(
        "Grammar topics for {} ({}/{} completed):\n\n",
        level.display_name(),
        completed,
        topics.len()
    );
    for topic in topics {
        result.push_str(&format!(
            "- [{}] {} <{}>\n",
            if data.progress.is_topic_completed(&topic.id) {
                "x"
            } else {
                " "
            },
            topic.title,
            topic.id
        ));
    }
    result
}

/// Format the detail view of a grammar topic
pub fn format_topic_detail(topic: &GrammarTopic, data: &StudyData) -> String {
    let mut result = format!("{} ({})\n\n{}\n", topic.title, topic.level, topic.explanation);
    if !topic.examples.is_empty() {
        result.push_str("\nExamples:\n");
        for (i, example) in topic.examples.iter().enumerate() {
            result.push_str(&format!("  {}. {}\n", i + 1, example));
        }
    }
    if data.progress.is_topic_completed(&topic.id) {
        result.push_str("\nCompleted\n");
    }
    result
}

/// Format the progress overview
pub fn format_progress(data: &StudyData, catalog: &Catalog) -> String {
    let progress = &data.progress;
    let level = data.plan.selected_level;

    let mut result = format!("Level: {}\n", level.display_name());
    result.push_str(&format!("Streak: {} day(s)\n", progress.streak_days));
    if let Some(date) = progress.last_study_date {
        result.push_str(&format!("Last study day: {}\n", date));
    }
    result.push_str(&format!(
        "Words learned: {}\n",
        progress.learned_word_ids.len()
    ));
    result.push_str(&format!(
        "Topics completed: {}\n",
        progress.completed_topic_ids.len()
    ));

    result.push_str("\nProgress by level:\n");
    for l in Level::ALL {
        let percent = (progress.level_progress(l, catalog) * 100.0).round() as u32;
        result.push_str(&format!(
            "  {}{}: {}%\n",
            l,
            if l == level { " (current)" } else { "" },
            percent
        ));
    }

    result.push_str("\nRecent activity:\n");
    let mut any_activity = false;
    for day in progress.recent_activity(RECENT_ACTIVITY_DAYS) {
        any_activity = true;
        result.push_str(&format!(
            "  {} - level {}: {} word(s), {} topic(s)\n",
            day.date, day.level, day.words_learned, day.topics_completed
        ));
    }
    if !any_activity {
        result.push_str("  No activity yet\n");
    }

    result.push_str("\nAchievements:\n");
    for (achievement, unlocked) in data.achievements() {
        result.push_str(&format!(
            "  [{}] {} - {}\n",
            if unlocked { "x" } else { " " },
            achievement.title(),
            achievement.description()
        ));
    }

    if data.reminder.enabled {
        result.push_str(&format!(
            "\nDaily reminder: {:02}:{:02}\n",
            data.reminder.hour, data.reminder.minute
        ));
    }

    result
}
