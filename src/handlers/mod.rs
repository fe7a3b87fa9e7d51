//! MCP tool handlers for the study server
//!
//! Every handler locks the study data, rolls the plan forward to the current
//! date, applies its action and then persists and publishes what changed.

pub mod catalog;
pub mod learn;
pub mod progress;
pub mod settings;
pub mod today;

use crate::DeutschDailyHandler;
use crate::study::{StudyData, StudyEvent};
use chrono::NaiveDate;
use mcp_attr::{Result as McpResult, bail};
use std::sync::MutexGuard;

impl DeutschDailyHandler {
    /// Lock the study data and bring today's plan up to date
    ///
    /// # Returns
    /// The locked data, the current date and the events of the refresh
    pub(crate) fn open_day(&self) -> (MutexGuard<'_, StudyData>, NaiveDate, Vec<StudyEvent>) {
        let mut data = self.lock_data();
        let today = self.current_date();
        let events = data.refresh(today, &self.catalog, &mut rand::thread_rng());
        (data, today, events)
    }

    /// Save the whole document if anything changed, then notify listeners
    ///
    /// The lock is released before listeners run.
    pub(crate) fn commit(
        &self,
        data: MutexGuard<'_, StudyData>,
        events: Vec<StudyEvent>,
    ) -> McpResult<()> {
        if events.is_empty() {
            return Ok(());
        }

        let saved = self.storage.save(&data);
        drop(data);

        if let Err(e) = saved {
            bail!("Failed to save: {:#}", e);
        }

        self.events.publish_all(&events);
        Ok(())
    }
}
