use super::achievements::Achievement;
use super::events::StudyEvent;
use super::plan::{DailyPlan, RefreshOutcome};
use super::tracker::{ProgressTracker, StreakChange};
use crate::catalog::{Catalog, Level};
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Format version written to the progress file
pub const FORMAT_VERSION: u32 = 1;

/// Daily reminder preference
///
/// Only the preference is stored; delivering the reminder is up to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderSettings {
    pub enabled: bool,
    pub hour: u32,
    pub minute: u32,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            hour: 9,
            minute: 0,
        }
    }
}

impl ReminderSettings {
    /// Build settings with hour and minute clamped to a valid time of day
    pub fn new(enabled: bool, hour: i64, minute: i64) -> Self {
        Self {
            enabled,
            hour: hour.clamp(0, 23) as u32,
            minute: minute.clamp(0, 59) as u32,
        }
    }
}

/// Everything persisted for the single local user
///
/// All transitions take the current date explicitly and return the events
/// they caused, so callers decide when to persist and whom to notify.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudyData {
    /// Format version of the progress file
    pub format_version: u32,
    pub plan: DailyPlan,
    pub progress: ProgressTracker,
    pub reminder: ReminderSettings,
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl StudyData {
    /// Create empty study data with default settings
    pub fn new() -> Self {
        Self {
            format_version: FORMAT_VERSION,
            ..Self::default()
        }
    }

    /// Bring the daily plan up to date for `today`
    pub fn refresh<R>(&mut self, today: NaiveDate, catalog: &Catalog, rng: &mut R) -> Vec<StudyEvent>
    where
        R: Rng + ?Sized,
    {
        match self.plan.refresh(today, catalog, rng) {
            RefreshOutcome::SameDay => Vec::new(),
            RefreshOutcome::FirstRun => vec![self.plan_created(today)],
            RefreshOutcome::RolledOver { from, to } => vec![
                StudyEvent::DayRolledOver {
                    from,
                    to,
                    review_count: self.plan.review_word_ids.len(),
                },
                self.plan_created(today),
            ],
        }
    }

    /// Change the studied level; today's selection is redrawn from the new level
    pub fn set_level<R>(
        &mut self,
        level: Level,
        today: NaiveDate,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Vec<StudyEvent>
    where
        R: Rng + ?Sized,
    {
        if !self.plan.set_level(level, today, catalog, rng) {
            return Vec::new();
        }
        vec![self.settings_changed(), self.plan_created(today)]
    }

    /// Change the daily quota (clamped to 1..=30); today's selection is redrawn
    pub fn set_words_per_day<R>(
        &mut self,
        value: i64,
        today: NaiveDate,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Vec<StudyEvent>
    where
        R: Rng + ?Sized,
    {
        if !self.plan.set_words_per_day(value, today, catalog, rng) {
            return Vec::new();
        }
        vec![self.settings_changed(), self.plan_created(today)]
    }

    /// Mark a word learned: today's completion, the learned set and the streak
    pub fn mark_word_learned(&mut self, id: &str, today: NaiveDate) -> Vec<StudyEvent> {
        let mut events = Vec::new();
        if self.plan.mark_completed(id) {
            events.push(StudyEvent::WordCompleted { id: id.to_string() });
        }
        let level = self.plan.selected_level;
        let (_, change) = self.progress.mark_word_learned(id, today, level);
        events.extend(self.streak_changed(change));
        events
    }

    /// Remove today's completion mark for a word
    ///
    /// The learned set and the streak are left as they are.
    pub fn unmark_word_learned(&mut self, id: &str) -> Vec<StudyEvent> {
        if self.plan.unmark_completed(id) {
            vec![StudyEvent::WordUncompleted { id: id.to_string() }]
        } else {
            Vec::new()
        }
    }

    /// Mark a grammar topic completed and update the streak
    pub fn complete_topic(&mut self, id: &str, today: NaiveDate) -> Vec<StudyEvent> {
        let mut events = Vec::new();
        let level = self.plan.selected_level;
        let (inserted, change) = self.progress.mark_topic_completed(id, today, level);
        if inserted {
            events.push(StudyEvent::TopicCompleted { id: id.to_string() });
        }
        events.extend(self.streak_changed(change));
        events
    }

    /// Replace the daily reminder preference
    pub fn set_reminder(&mut self, reminder: ReminderSettings) -> Vec<StudyEvent> {
        if self.reminder == reminder {
            return Vec::new();
        }
        self.reminder = reminder;
        vec![StudyEvent::ReminderChanged {
            enabled: reminder.enabled,
            hour: reminder.hour,
            minute: reminder.minute,
        }]
    }

    /// Clear all settings and progress, then plan again for `today`
    pub fn reset<R>(&mut self, today: NaiveDate, catalog: &Catalog, rng: &mut R) -> Vec<StudyEvent>
    where
        R: Rng + ?Sized,
    {
        *self = Self::new();
        let mut events = vec![StudyEvent::Reset];
        events.extend(self.refresh(today, catalog, rng));
        events
    }

    /// Every achievement with its unlocked state
    pub fn achievements(&self) -> Vec<(Achievement, bool)> {
        Achievement::ALL
            .iter()
            .map(|a| (*a, a.is_unlocked(&self.progress, self.plan.selected_level)))
            .collect()
    }

    fn plan_created(&self, date: NaiveDate) -> StudyEvent {
        StudyEvent::PlanCreated {
            date,
            level: self.plan.selected_level,
            word_count: self.plan.todays_word_ids.len(),
        }
    }

    fn settings_changed(&self) -> StudyEvent {
        StudyEvent::SettingsChanged {
            level: self.plan.selected_level,
            words_per_day: self.plan.words_per_day,
        }
    }

    fn streak_changed(&self, change: StreakChange) -> Option<StudyEvent> {
        if change == StreakChange::Unchanged {
            return None;
        }
        Some(StudyEvent::StreakChanged {
            streak_days: self.progress.streak_days,
            change,
        })
    }
}
