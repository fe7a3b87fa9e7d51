//! Serialization and deserialization implementations for StudyData
//!
//! The progress file is a flat set of keys. Loading is lenient per key: a key
//! that is missing or holds a value of the wrong shape falls back to its
//! default, and the remaining keys are still used.

use super::plan::{DEFAULT_WORDS_PER_DAY, DailyPlan, clamp_words_per_day};
use super::study_data::{FORMAT_VERSION, ReminderSettings, StudyData};
use super::tracker::{ACTIVITY_LOG_DAYS, DailyActivity, ProgressTracker};
use crate::catalog::Level;
use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use tracing::warn;

/// A value that either parsed as `T` or was skipped
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

fn take<T>(value: Option<Lenient<T>>, key: &str) -> Option<T> {
    match value {
        Some(Lenient::Valid(v)) => Some(v),
        Some(Lenient::Invalid(_)) => {
            warn!(key, "Ignoring malformed value in progress file");
            None
        }
        None => None,
    }
}

#[derive(Deserialize)]
struct StudyDataHelper {
    #[serde(default)]
    format_version: Option<Lenient<u32>>,
    #[serde(default)]
    selected_level: Option<Lenient<Level>>,
    #[serde(default)]
    words_per_day: Option<Lenient<i64>>,
    #[serde(default)]
    last_planned_date: Option<Lenient<NaiveDate>>,
    #[serde(default)]
    todays_word_ids: Option<Lenient<Vec<String>>>,
    #[serde(default)]
    todays_completed_ids: Option<Lenient<BTreeSet<String>>>,
    #[serde(default)]
    review_word_ids: Option<Lenient<Vec<String>>>,
    #[serde(default)]
    learned_word_ids: Option<Lenient<BTreeSet<String>>>,
    #[serde(default)]
    completed_topic_ids: Option<Lenient<BTreeSet<String>>>,
    #[serde(default)]
    streak_days: Option<Lenient<u32>>,
    #[serde(default)]
    last_study_date: Option<Lenient<NaiveDate>>,
    #[serde(default)]
    activity: Option<Lenient<Vec<DailyActivity>>>,
    #[serde(default)]
    reminder: Option<Lenient<ReminderSettings>>,
}

impl<'de> Deserialize<'de> for StudyData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let helper = StudyDataHelper::deserialize(deserializer)?;

        // A stored quota of 0 means "never set"
        let words_per_day = match take(helper.words_per_day, "words_per_day") {
            None | Some(0) => DEFAULT_WORDS_PER_DAY,
            Some(value) => clamp_words_per_day(value),
        };

        let plan = DailyPlan {
            selected_level: take(helper.selected_level, "selected_level").unwrap_or_default(),
            words_per_day,
            last_planned_date: take(helper.last_planned_date, "last_planned_date"),
            todays_word_ids: take(helper.todays_word_ids, "todays_word_ids").unwrap_or_default(),
            todays_completed_ids: take(helper.todays_completed_ids, "todays_completed_ids")
                .unwrap_or_default(),
            review_word_ids: take(helper.review_word_ids, "review_word_ids").unwrap_or_default(),
        };

        let mut activity = take(helper.activity, "activity").unwrap_or_default();
        activity.sort_by_key(|a| a.date);
        if activity.len() > ACTIVITY_LOG_DAYS {
            let excess = activity.len() - ACTIVITY_LOG_DAYS;
            activity.drain(..excess);
        }

        let progress = ProgressTracker {
            learned_word_ids: take(helper.learned_word_ids, "learned_word_ids").unwrap_or_default(),
            completed_topic_ids: take(helper.completed_topic_ids, "completed_topic_ids")
                .unwrap_or_default(),
            streak_days: take(helper.streak_days, "streak_days").unwrap_or_default(),
            last_study_date: take(helper.last_study_date, "last_study_date"),
            activity,
        };

        let reminder = take(helper.reminder, "reminder").unwrap_or_default();

        Ok(StudyData {
            format_version: take(helper.format_version, "format_version")
                .unwrap_or(FORMAT_VERSION),
            plan,
            progress,
            reminder: ReminderSettings::new(
                reminder.enabled,
                reminder.hour as i64,
                reminder.minute as i64,
            ),
        })
    }
}

// Plain values come first; `activity` and `reminder` become TOML tables.
#[derive(Serialize)]
struct StudyDataRecord<'a> {
    format_version: u32,
    selected_level: Level,
    words_per_day: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_planned_date: Option<NaiveDate>,
    todays_word_ids: &'a [String],
    todays_completed_ids: &'a BTreeSet<String>,
    review_word_ids: &'a [String],
    learned_word_ids: &'a BTreeSet<String>,
    completed_topic_ids: &'a BTreeSet<String>,
    streak_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_study_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    activity: &'a [DailyActivity],
    reminder: &'a ReminderSettings,
}

impl Serialize for StudyData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        StudyDataRecord {
            format_version: FORMAT_VERSION,
            selected_level: self.plan.selected_level,
            words_per_day: self.plan.words_per_day,
            last_planned_date: self.plan.last_planned_date,
            todays_word_ids: &self.plan.todays_word_ids,
            todays_completed_ids: &self.plan.todays_completed_ids,
            review_word_ids: &self.plan.review_word_ids,
            learned_word_ids: &self.progress.learned_word_ids,
            completed_topic_ids: &self.progress.completed_topic_ids,
            streak_days: self.progress.streak_days,
            last_study_date: self.progress.last_study_date,
            activity: &self.progress.activity,
            reminder: &self.reminder,
        }
        .serialize(serializer)
    }
}
