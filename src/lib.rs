//! Deutsch Daily MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a daily
//! German vocabulary routine. Every calendar day the learner gets a fresh
//! selection of words for the chosen CEFR level; words completed on the
//! previous study day come back for review, and a day-over-day streak is kept.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `DeutschDailyHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `catalog` and `study` modules - Reference data, daily
//!   planning and progress tracking
//! - **Persistence Layer**: `storage` module - File-based TOML storage
//!
//! # Example
//!
//! ```no_run
//! use deutsch_daily::DeutschDailyHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = DeutschDailyHandler::new("progress.toml", None, None)?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod clock;
pub mod formatting;
mod handlers;
pub mod storage;
pub mod study;
pub mod telemetry;
pub mod validation;

use anyhow::{Result, bail};
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

// Re-export commonly used types
pub use catalog::{Catalog, CatalogWord, GrammarTopic, Level, PartOfSpeech};
pub use clock::{Clock, FixedClock, SystemClock};
pub use storage::Storage;
pub use study::{
    Achievement, DailyPlan, EventBus, ListenerId, ProgressTracker, ReminderSettings, StreakChange,
    StudyData, StudyEvent,
};

/// MCP Server handler for the daily German study routine
///
/// Owns the read-only catalog and the study state of the single local user.
/// Every change is persisted to a TOML file and published on the event bus.
pub struct DeutschDailyHandler {
    pub(crate) data: Mutex<StudyData>,
    pub(crate) storage: Storage,
    pub(crate) catalog: Catalog,
    pub(crate) clock: Box<dyn Clock>,
    pub(crate) events: EventBus,
}

impl DeutschDailyHandler {
    /// Create a new handler
    ///
    /// # Arguments
    /// * `storage_path` - Path to the progress file (TOML format)
    /// * `words_path` - Vocabulary JSON file; the bundled dataset when `None`
    /// * `topics_path` - Grammar topic JSON file; the bundled dataset when `None`
    ///
    /// # Returns
    /// Result containing the handler or an error
    ///
    /// # Example
    /// ```no_run
    /// # use deutsch_daily::DeutschDailyHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = DeutschDailyHandler::new("progress.toml", None, None)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        storage_path: &str,
        words_path: Option<&Path>,
        topics_path: Option<&Path>,
    ) -> Result<Self> {
        if Path::new(storage_path).is_dir() {
            bail!("Progress file path '{}' is a directory", storage_path);
        }

        let catalog = Catalog::load(words_path, topics_path);
        info!(
            words = catalog.all_words().len(),
            topics = catalog.all_topics().len(),
            "Catalog loaded"
        );

        Ok(Self::with_parts(
            Storage::new(storage_path),
            catalog,
            SystemClock,
        ))
    }

    /// Create a handler from already built parts
    ///
    /// The progress file is loaded immediately and a tracing listener is
    /// registered on the event bus.
    pub fn with_parts(storage: Storage, catalog: Catalog, clock: impl Clock + 'static) -> Self {
        let data = Mutex::new(storage.load());
        let events = EventBus::new();
        events.subscribe(|event| debug!(?event, "Study state changed"));
        Self {
            data,
            storage,
            catalog,
            clock: Box::new(clock),
            events,
        }
    }

    /// Event bus on which every state change is published
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// The read-only catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Copy of the current study state, as last modified by a tool call
    pub fn snapshot(&self) -> StudyData {
        self.lock_data().clone()
    }

    pub(crate) fn lock_data(&self) -> MutexGuard<'_, StudyData> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn current_date(&self) -> NaiveDate {
        self.clock.today()
    }
}

/// Daily German vocabulary trainer.
///
/// Each calendar day brings a new random selection of words from the selected
/// CEFR level (A1 to C2). Words marked learned today come back as review words
/// on the next study day. Marking words or completing grammar topics keeps a
/// day-over-day streak going.
///
/// Key concepts:
/// - **today**: today's words with completion marks, plus review words
/// - **mark_learned**: mark words learned (by ID, e.g. "a1-haus")
/// - **list_words / grammar**: browse vocabulary and grammar of a level
/// - **progress**: streak, totals, per-level progress and achievements
///
/// Word IDs look like "a1-haus"; grammar topic IDs like "a2-perfekt".
#[mcp_server]
impl McpServer for DeutschDailyHandler {
    /// **Daily study**: Show today's words with completion marks and the review words.
    /// **Workflow**: Start here every day. A new day automatically draws new words
    /// and turns yesterday's learned words into review words.
    #[tool]
    async fn today(&self) -> McpResult<String> {
        self.handle_today().await
    }

    /// **Review**: List the words learned on the previous study day.
    #[tool]
    async fn review(&self) -> McpResult<String> {
        self.handle_review().await
    }

    /// **Learn**: Mark words learned. Updates today's completion marks, the learned set and the streak.
    /// **Batch**: Supports multiple IDs.
    #[tool]
    async fn mark_learned(
        &self,
        /// Word IDs (e.g., ["a1-haus", "a1-buch"])
        ids: Vec<String>,
    ) -> McpResult<String> {
        self.handle_mark_learned(ids).await
    }

    /// **Undo**: Remove today's completion mark from a word. The learned set and streak are kept.
    #[tool]
    async fn unmark_learned(
        &self,
        /// Word ID
        id: String,
    ) -> McpResult<String> {
        self.handle_unmark_learned(id).await
    }

    /// **Grammar**: Mark a grammar topic completed. Counts as study activity for the streak.
    #[tool]
    async fn complete_topic(
        &self,
        /// Grammar topic ID (e.g., "a1-articles")
        id: String,
    ) -> McpResult<String> {
        self.handle_complete_topic(id).await
    }

    /// **Settings**: Change the studied level. Today's words are drawn again from the new level.
    #[tool]
    async fn set_level(
        &self,
        /// Level code: A1/A2/B1/B2/C1/C2
        level: String,
    ) -> McpResult<String> {
        self.handle_set_level(level).await
    }

    /// **Settings**: Change how many new words are drawn per day (1-30, clamped).
    #[tool]
    async fn set_words_per_day(
        &self,
        /// Words per day
        count: i64,
    ) -> McpResult<String> {
        self.handle_set_words_per_day(count).await
    }

    /// **Settings**: Store the daily reminder preference. Delivery is up to the client.
    #[tool]
    async fn set_reminder(
        &self,
        /// Enable the reminder
        enabled: bool,
        /// Hour 0-23 (optional)
        hour: Option<i64>,
        /// Minute 0-59 (optional)
        minute: Option<i64>,
    ) -> McpResult<String> {
        self.handle_set_reminder(enabled, hour, minute).await
    }

    /// **Vocabulary**: List words of a level. Filters combine.
    #[tool]
    async fn list_words(
        &self,
        /// Level code; selected level when omitted (optional)
        level: Option<String>,
        /// Search in German headword and translation (optional)
        keyword: Option<String>,
        /// noun/verb/adjective/other (optional)
        part_of_speech: Option<String>,
        /// all/learned/unlearned (optional)
        learned: Option<String>,
    ) -> McpResult<String> {
        self.handle_list_words(level, keyword, part_of_speech, learned)
            .await
    }

    /// **Vocabulary**: Show one word with example sentence and learned state.
    #[tool]
    async fn word(
        &self,
        /// Word ID
        id: String,
    ) -> McpResult<String> {
        self.handle_word(id).await
    }

    /// **Grammar**: List grammar topics of a level with completion marks.
    #[tool]
    async fn grammar(
        &self,
        /// Level code; selected level when omitted (optional)
        level: Option<String>,
    ) -> McpResult<String> {
        self.handle_grammar(level).await
    }

    /// **Grammar**: Show one grammar topic with explanation and examples.
    #[tool]
    async fn topic(
        &self,
        /// Grammar topic ID
        id: String,
    ) -> McpResult<String> {
        self.handle_topic(id).await
    }

    /// **Progress**: Level, streak, totals, per-level progress, recent activity and achievements.
    #[tool]
    async fn progress(&self) -> McpResult<String> {
        self.handle_progress().await
    }

    /// **Reset**: Delete all progress and settings, then plan today again. Requires confirm=true.
    #[tool]
    async fn reset_progress(
        &self,
        /// Must be true to reset
        confirm: bool,
    ) -> McpResult<String> {
        self.handle_reset_progress(confirm).await
    }
}
