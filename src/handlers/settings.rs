//! Settings handlers: level, daily quota, reminder and reset

use crate::DeutschDailyHandler;
use crate::study::ReminderSettings;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl DeutschDailyHandler {
    /// Change the studied level; today's words are drawn again from the new level
    pub async fn handle_set_level(&self, level: String) -> McpResult<String> {
        let level = validation::parse_level(&level)?;
        let (mut data, today, mut events) = self.open_day();

        if data.plan.selected_level == level {
            self.commit(data, events)?;
            return Ok(format!("Level is already {}", level.display_name()));
        }

        events.extend(data.set_level(level, today, &self.catalog, &mut rand::thread_rng()));
        let count = data.plan.todays_word_ids.len();
        self.commit(data, events)?;

        Ok(format!(
            "Level set to {}. Today's plan now has {} word(s).",
            level.display_name(),
            count
        ))
    }

    /// Change the daily quota
    ///
    /// Values outside 1..=30 are clamped, never rejected.
    pub async fn handle_set_words_per_day(&self, count: i64) -> McpResult<String> {
        let (mut data, today, mut events) = self.open_day();

        let changed = data.set_words_per_day(count, today, &self.catalog, &mut rand::thread_rng());
        let was_changed = !changed.is_empty();
        events.extend(changed);
        let quota = data.plan.words_per_day;
        let planned = data.plan.todays_word_ids.len();
        self.commit(data, events)?;

        if was_changed {
            Ok(format!(
                "Words per day set to {}. Today's plan now has {} word(s).",
                quota, planned
            ))
        } else {
            Ok(format!("Words per day is already {}", quota))
        }
    }

    /// Store the daily reminder preference
    ///
    /// Hour and minute default to the current setting and are clamped to a
    /// valid time of day.
    pub async fn handle_set_reminder(
        &self,
        enabled: bool,
        hour: Option<i64>,
        minute: Option<i64>,
    ) -> McpResult<String> {
        let (mut data, _, mut events) = self.open_day();

        let current = data.reminder;
        let reminder = ReminderSettings::new(
            enabled,
            hour.unwrap_or(current.hour as i64),
            minute.unwrap_or(current.minute as i64),
        );
        events.extend(data.set_reminder(reminder));
        self.commit(data, events)?;

        if reminder.enabled {
            Ok(format!(
                "Daily reminder enabled at {:02}:{:02}",
                reminder.hour, reminder.minute
            ))
        } else {
            Ok("Daily reminder disabled".to_string())
        }
    }

    /// Clear all settings and progress, then plan today again
    pub async fn handle_reset_progress(&self, confirm: bool) -> McpResult<String> {
        if !confirm {
            bail_public!(
                _,
                "Reset deletes all progress and settings. Call again with confirm=true to proceed."
            );
        }

        let (mut data, today, mut events) = self.open_day();
        events.extend(data.reset(today, &self.catalog, &mut rand::thread_rng()));
        let count = data.plan.todays_word_ids.len();
        self.commit(data, events)?;

        Ok(format!(
            "All progress has been reset. Today's plan has {} word(s).",
            count
        ))
    }
}
