//! Study state: daily planning and progress tracking
//!
//! - `plan`: the daily word rotation (today's words, review words, rollover)
//! - `tracker`: learned items, streak and activity log
//! - `achievements`: milestones derived from progress
//! - `events`: state-change notifications and listener registration
//! - `study_data`: the persisted container tying the parts together
//! - `serde_impl`: the flat progress-file format

mod achievements;
mod events;
mod plan;
mod serde_impl;
mod study_data;
mod tracker;

pub use achievements::Achievement;
pub use events::{EventBus, ListenerId, StudyEvent};
pub use plan::{
    DEFAULT_WORDS_PER_DAY, DailyPlan, MAX_WORDS_PER_DAY, MIN_WORDS_PER_DAY, RefreshOutcome,
    clamp_words_per_day,
};
pub use study_data::{FORMAT_VERSION, ReminderSettings, StudyData};
pub use tracker::{ACTIVITY_LOG_DAYS, DailyActivity, ProgressTracker, StreakChange};

use chrono::{Local, NaiveDate};

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}
