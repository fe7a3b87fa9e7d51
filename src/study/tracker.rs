//! Learned-item tracking and the day-over-day study streak

use crate::catalog::{Catalog, Level};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Number of days kept in the activity log
pub const ACTIVITY_LOG_DAYS: usize = 30;

/// How a study action changed the streak
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// First recorded study day
    Started,
    /// Already studied today
    Unchanged,
    /// Studied yesterday, streak grew by one
    Extended,
    /// Gap of two or more days (or a study date in the future); back to 1
    Reset,
}

/// Study activity of one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    pub date: NaiveDate,
    /// Words newly added to the learned set on this day
    pub words_learned: u32,
    /// Topics newly completed on this day
    pub topics_completed: u32,
    /// Level selected when the last action of the day happened
    pub level: Level,
}

/// Long-lived progress: learned words, completed topics and the streak
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressTracker {
    pub learned_word_ids: BTreeSet<String>,
    pub completed_topic_ids: BTreeSet<String>,
    pub streak_days: u32,
    pub last_study_date: Option<NaiveDate>,
    /// Oldest first, at most `ACTIVITY_LOG_DAYS` entries
    pub activity: Vec<DailyActivity>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word to the learned set and record a study action
    ///
    /// # Returns
    /// Whether the word was new, and how the streak changed
    pub fn mark_word_learned(&mut self, id: &str, today: NaiveDate, level: Level) -> (bool, StreakChange) {
        let inserted = self.learned_word_ids.insert(id.to_string());
        let change = self.record_study(today);
        if let Some(entry) = self.activity_entry(today, level)
            && inserted
        {
            entry.words_learned += 1;
        }
        (inserted, change)
    }

    /// Add a grammar topic to the completed set and record a study action
    ///
    /// # Returns
    /// Whether the topic was new, and how the streak changed
    pub fn mark_topic_completed(
        &mut self,
        id: &str,
        today: NaiveDate,
        level: Level,
    ) -> (bool, StreakChange) {
        let inserted = self.completed_topic_ids.insert(id.to_string());
        let change = self.record_study(today);
        if let Some(entry) = self.activity_entry(today, level)
            && inserted
        {
            entry.topics_completed += 1;
        }
        (inserted, change)
    }

    /// Update the streak for a study action on `today`
    ///
    /// The last study date is set to `today` in every case.
    pub fn record_study(&mut self, today: NaiveDate) -> StreakChange {
        let change = match self.last_study_date {
            None => {
                self.streak_days = 1;
                StreakChange::Started
            }
            Some(last) => match (today - last).num_days() {
                0 => StreakChange::Unchanged,
                1 => {
                    self.streak_days += 1;
                    StreakChange::Extended
                }
                _ => {
                    self.streak_days = 1;
                    StreakChange::Reset
                }
            },
        };
        self.last_study_date = Some(today);
        change
    }

    pub fn is_word_learned(&self, id: &str) -> bool {
        self.learned_word_ids.contains(id)
    }

    pub fn is_topic_completed(&self, id: &str) -> bool {
        self.completed_topic_ids.contains(id)
    }

    /// Activity entries, newest first
    pub fn recent_activity(&self, limit: usize) -> impl Iterator<Item = &DailyActivity> {
        self.activity.iter().rev().take(limit)
    }

    /// Share of a level's words and topics that are learned, in `0.0..=1.0`
    ///
    /// A level with no catalog content reports `0.0`.
    pub fn level_progress(&self, level: Level, catalog: &Catalog) -> f64 {
        let words = catalog.words_for_level(level);
        let topics = catalog.topics_for_level(level);
        let total = words.len() + topics.len();
        if total == 0 {
            return 0.0;
        }

        let learned = words.iter().filter(|w| self.is_word_learned(&w.id)).count();
        let completed = topics
            .iter()
            .filter(|t| self.is_topic_completed(&t.id))
            .count();
        (learned + completed) as f64 / total as f64
    }

    /// Entry for `today`, created at its sorted position if missing
    ///
    /// The log stays ordered by date with one entry per day, also when the
    /// clock moves backwards. Returns `None` when `today` is older than every
    /// day the capped log keeps.
    fn activity_entry(&mut self, today: NaiveDate, level: Level) -> Option<&mut DailyActivity> {
        let index = match self.activity.binary_search_by_key(&today, |a| a.date) {
            Ok(index) => index,
            Err(index) => {
                if index == 0 && self.activity.len() >= ACTIVITY_LOG_DAYS {
                    return None;
                }
                self.activity.insert(
                    index,
                    DailyActivity {
                        date: today,
                        words_learned: 0,
                        topics_completed: 0,
                        level,
                    },
                );
                if self.activity.len() > ACTIVITY_LOG_DAYS {
                    let excess = self.activity.len() - ACTIVITY_LOG_DAYS;
                    self.activity.drain(..excess);
                    index - excess
                } else {
                    index
                }
            }
        };

        let entry = &mut self.activity[index];
        entry.level = level;
        Some(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogWord, GrammarTopic};
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_action_starts_streak() {
        let mut tracker = ProgressTracker::new();
        assert_eq!(tracker.record_study(date(2025, 5, 1)), StreakChange::Started);
        assert_eq!(tracker.streak_days, 1);
        assert_eq!(tracker.last_study_date, Some(date(2025, 5, 1)));
    }

    #[test]
    fn test_consecutive_days_extend_streak() {
        let mut tracker = ProgressTracker::new();
        tracker.record_study(date(2025, 5, 1));
        assert_eq!(tracker.record_study(date(2025, 5, 2)), StreakChange::Extended);
        assert_eq!(tracker.record_study(date(2025, 5, 3)), StreakChange::Extended);
        assert_eq!(tracker.streak_days, 3);
    }

    #[test]
    fn test_same_day_does_not_change_streak() {
        let mut tracker = ProgressTracker::new();
        tracker.record_study(date(2025, 5, 1));
        tracker.record_study(date(2025, 5, 2));
        assert_eq!(tracker.record_study(date(2025, 5, 2)), StreakChange::Unchanged);
        assert_eq!(tracker.streak_days, 2);
    }

    #[test]
    fn test_gap_resets_streak() {
        let mut tracker = ProgressTracker::new();
        tracker.record_study(date(2025, 5, 1));
        tracker.record_study(date(2025, 5, 2));
        assert_eq!(tracker.record_study(date(2025, 5, 4)), StreakChange::Reset);
        assert_eq!(tracker.streak_days, 1);
        assert_eq!(tracker.record_study(date(2025, 5, 5)), StreakChange::Extended);
        assert_eq!(tracker.streak_days, 2);
    }

    #[test]
    fn test_future_study_date_resets_streak() {
        let mut tracker = ProgressTracker::new();
        tracker.record_study(date(2025, 5, 10));
        tracker.record_study(date(2025, 5, 11));
        assert_eq!(tracker.record_study(date(2025, 5, 9)), StreakChange::Reset);
        assert_eq!(tracker.streak_days, 1);
        assert_eq!(tracker.last_study_date, Some(date(2025, 5, 9)));
    }

    #[test]
    fn test_streak_across_month_boundary() {
        let mut tracker = ProgressTracker::new();
        tracker.record_study(date(2024, 2, 28));
        tracker.record_study(date(2024, 2, 29));
        tracker.record_study(date(2024, 3, 1));
        assert_eq!(tracker.streak_days, 3);
    }

    #[test]
    fn test_mark_word_learned_is_idempotent_but_updates_streak() {
        let mut tracker = ProgressTracker::new();
        let (inserted, _) = tracker.mark_word_learned("w1", date(2025, 5, 1), Level::A1);
        assert!(inserted);

        let (inserted, change) = tracker.mark_word_learned("w1", date(2025, 5, 2), Level::A1);
        assert!(!inserted);
        assert_eq!(change, StreakChange::Extended);
        assert_eq!(tracker.learned_word_ids.len(), 1);
        assert_eq!(tracker.streak_days, 2);
    }

    #[test]
    fn test_activity_log_counts_new_items_per_day() {
        let mut tracker = ProgressTracker::new();
        let day = date(2025, 5, 1);
        tracker.mark_word_learned("w1", day, Level::A1);
        tracker.mark_word_learned("w2", day, Level::A1);
        tracker.mark_word_learned("w2", day, Level::A1);
        tracker.mark_topic_completed("t1", day, Level::A2);

        assert_eq!(tracker.activity.len(), 1);
        let entry = &tracker.activity[0];
        assert_eq!(entry.words_learned, 2);
        assert_eq!(entry.topics_completed, 1);
        assert_eq!(entry.level, Level::A2);

        tracker.mark_word_learned("w3", date(2025, 5, 2), Level::A2);
        let recent: Vec<_> = tracker.recent_activity(5).collect();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].date, date(2025, 5, 2));
    }

    #[test]
    fn test_activity_log_is_capped() {
        let mut tracker = ProgressTracker::new();
        let start = date(2025, 1, 1);
        for i in 0..40 {
            tracker.mark_word_learned(&format!("w{}", i), start + Duration::days(i), Level::A1);
        }
        assert_eq!(tracker.activity.len(), ACTIVITY_LOG_DAYS);
        assert_eq!(tracker.activity[0].date, start + Duration::days(10));
        assert_eq!(tracker.streak_days, 40);
    }

    #[test]
    fn test_activity_log_stays_ordered_when_clock_moves_back() {
        let mut tracker = ProgressTracker::new();
        tracker.mark_topic_completed("t1", date(2025, 6, 10), Level::A1);
        tracker.mark_word_learned("w1", date(2025, 6, 8), Level::A1);
        tracker.mark_word_learned("w2", date(2025, 6, 10), Level::A1);

        let dates: Vec<_> = tracker.activity.iter().map(|a| a.date).collect();
        assert_eq!(dates, vec![date(2025, 6, 8), date(2025, 6, 10)]);
        assert_eq!(tracker.activity[0].words_learned, 1);
        assert_eq!(tracker.activity[1].words_learned, 1);
        assert_eq!(tracker.activity[1].topics_completed, 1);

        let recent: Vec<_> = tracker.recent_activity(5).map(|a| a.date).collect();
        assert_eq!(recent, vec![date(2025, 6, 10), date(2025, 6, 8)]);
    }

    #[test]
    fn test_day_older_than_full_log_is_not_recorded() {
        let mut tracker = ProgressTracker::new();
        let start = date(2025, 1, 1);
        for i in 0..ACTIVITY_LOG_DAYS as i64 {
            tracker.mark_word_learned(&format!("w{}", i), start + Duration::days(i), Level::A1);
        }

        tracker.mark_word_learned("old", start - Duration::days(3), Level::A1);
        assert_eq!(tracker.activity.len(), ACTIVITY_LOG_DAYS);
        assert_eq!(tracker.activity[0].date, start);
        assert!(tracker.is_word_learned("old"));

        // A day inside the window evicts the oldest entry
        tracker.mark_word_learned("new", start + Duration::days(40), Level::A1);
        assert_eq!(tracker.activity.len(), ACTIVITY_LOG_DAYS);
        assert_eq!(tracker.activity[0].date, start + Duration::days(1));
        assert_eq!(
            tracker.activity.last().map(|a| a.date),
            Some(start + Duration::days(40))
        );
    }

    #[test]
    fn test_level_progress() {
        let words = vec![
            CatalogWord {
                id: "w1".to_string(),
                german: "Haus".to_string(),
                translation: "house".to_string(),
                part_of_speech: "noun".to_string(),
                example: String::new(),
                level: Level::A1,
                tags: None,
            },
            CatalogWord {
                id: "w2".to_string(),
                german: "Buch".to_string(),
                translation: "book".to_string(),
                part_of_speech: "noun".to_string(),
                example: String::new(),
                level: Level::A1,
                tags: None,
            },
        ];
        let topics = vec![GrammarTopic {
            id: "t1".to_string(),
            level: Level::A1,
            title: "Articles".to_string(),
            explanation: String::new(),
            examples: Vec::new(),
        }];
        let catalog = Catalog::new(words, topics);

        let mut tracker = ProgressTracker::new();
        assert_eq!(tracker.level_progress(Level::A1, &catalog), 0.0);

        tracker.mark_word_learned("w1", date(2025, 5, 1), Level::A1);
        tracker.mark_topic_completed("t1", date(2025, 5, 1), Level::A1);
        let progress = tracker.level_progress(Level::A1, &catalog);
        assert!((progress - 2.0 / 3.0).abs() < 1e-9);

        assert_eq!(tracker.level_progress(Level::C2, &catalog), 0.0);
    }
}
