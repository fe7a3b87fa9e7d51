//! Learning handlers: marking words learned and grammar topics completed

use crate::DeutschDailyHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl DeutschDailyHandler {
    /// Mark one or more words learned
    ///
    /// Each word is added to today's completions and to the learned set, and
    /// the streak is updated once for the day. Unknown IDs are reported and
    /// skipped; the call fails only when no ID was usable.
    pub async fn handle_mark_learned(&self, ids: Vec<String>) -> McpResult<String> {
        if ids.is_empty() {
            bail_public!(_, "No IDs provided. Please specify at least one word ID.");
        }

        let (mut data, today, mut events) = self.open_day();

        let mut successes = Vec::new();
        let mut failures = Vec::new();

        for id in ids.iter().map(|id| validation::normalize_id(id)) {
            let Some(word) = self.catalog.word(&id) else {
                failures.push(format!("{}: unknown word", id));
                continue;
            };

            let already = data.progress.is_word_learned(&id) && data.plan.is_completed(&id);
            events.extend(data.mark_word_learned(&id, today));
            if already {
                successes.push(format!("{} ({}) was already learned", word.german, id));
            } else {
                successes.push(format!("{} ({}) learned", word.german, id));
            }
        }

        if successes.is_empty() {
            self.commit(data, events)?;
            bail_public!(_, "No words were marked:\n{}", failures.join("\n"));
        }

        let remaining = data.plan.remaining_count();
        let streak = data.progress.streak_days;
        self.commit(data, events)?;

        let mut result = successes.join("\n");
        result.push_str(&format!(
            "\n\nStreak: {} day(s). {} of today's words left.",
            streak, remaining
        ));
        if !failures.is_empty() {
            result.push_str(&format!("\n\nFailed:\n{}", failures.join("\n")));
        }
        Ok(result)
    }

    /// Remove today's completion mark from a word
    ///
    /// The word stays in the learned set and the streak is left alone.
    pub async fn handle_unmark_learned(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_id(&id);
        let (mut data, _, mut events) = self.open_day();

        if self.catalog.word(&id).is_none() {
            self.commit(data, events)?;
            bail_public!(_, "Word '{}' not found", id);
        }

        let changed = data.unmark_word_learned(&id);
        let was_marked = !changed.is_empty();
        events.extend(changed);
        self.commit(data, events)?;

        if was_marked {
            Ok(format!("Removed today's completion mark from {}", id))
        } else {
            Ok(format!("{} was not marked today", id))
        }
    }

    /// Mark a grammar topic completed and update the streak
    pub async fn handle_complete_topic(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_id(&id);
        let (mut data, today, mut events) = self.open_day();

        let Some(topic) = self.catalog.topic(&id) else {
            self.commit(data, events)?;
            bail_public!(_, "Grammar topic '{}' not found", id);
        };

        let already = data.progress.is_topic_completed(&id);
        events.extend(data.complete_topic(&id, today));
        let streak = data.progress.streak_days;
        self.commit(data, events)?;

        if already {
            Ok(format!(
                "Topic '{}' was already completed. Streak: {} day(s).",
                topic.title, streak
            ))
        } else {
            Ok(format!(
                "Topic '{}' completed. Streak: {} day(s).",
                topic.title, streak
            ))
        }
    }
}
