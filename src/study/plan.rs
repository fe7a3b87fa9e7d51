//! Daily plan state and the planner transitions
//!
//! `DailyPlan` decides which catalog words are today's new words and which are
//! review words. Day boundaries are detected by calendar-date equality, not
//! by elapsed time.

use crate::catalog::{Catalog, CatalogWord, Level};
use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;

/// Smallest accepted daily quota
pub const MIN_WORDS_PER_DAY: u32 = 1;
/// Largest accepted daily quota
pub const MAX_WORDS_PER_DAY: u32 = 30;
/// Quota used before the user picks one
pub const DEFAULT_WORDS_PER_DAY: u32 = 7;

/// Clamp a requested daily quota into `MIN_WORDS_PER_DAY..=MAX_WORDS_PER_DAY`
pub fn clamp_words_per_day(value: i64) -> u32 {
    value.clamp(MIN_WORDS_PER_DAY as i64, MAX_WORDS_PER_DAY as i64) as u32
}

/// What `DailyPlan::refresh` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// No plan existed; a fresh one was computed
    FirstRun,
    /// The plan was already made today; nothing changed
    SameDay,
    /// The calendar day changed; completions became review words
    RolledOver { from: NaiveDate, to: NaiveDate },
}

/// The mutable daily planning state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPlan {
    /// Level the user is studying
    pub selected_level: Level,
    /// Target number of new words per day
    pub words_per_day: u32,
    /// Calendar day the plan was last computed for
    pub last_planned_date: Option<NaiveDate>,
    /// Today's new words, in presentation order
    pub todays_word_ids: Vec<String>,
    /// Words marked learned today
    ///
    /// Not restricted to `todays_word_ids`: any word may be marked.
    pub todays_completed_ids: BTreeSet<String>,
    /// Words to review today, taken from the previous day's completions
    pub review_word_ids: Vec<String>,
}

impl Default for DailyPlan {
    fn default() -> Self {
        Self {
            selected_level: Level::default(),
            words_per_day: DEFAULT_WORDS_PER_DAY,
            last_planned_date: None,
            todays_word_ids: Vec::new(),
            todays_completed_ids: BTreeSet::new(),
            review_word_ids: Vec::new(),
        }
    }
}

impl DailyPlan {
    /// Create a plan with default settings and no history
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the plan up to date for `today`
    ///
    /// On the first run a fresh selection is made and the review list keeps
    /// its current value. On a new calendar day, whatever gap since the last
    /// plan, the completed set is shuffled into the review list before the new
    /// selection is made. On the same calendar day nothing changes.
    pub fn refresh<R>(&mut self, today: NaiveDate, catalog: &Catalog, rng: &mut R) -> RefreshOutcome
    where
        R: Rng + ?Sized,
    {
        match self.last_planned_date {
            None => {
                self.plan_for(today, catalog, rng);
                RefreshOutcome::FirstRun
            }
            Some(last) if last == today => RefreshOutcome::SameDay,
            Some(last) => {
                let mut review: Vec<String> = self.todays_completed_ids.iter().cloned().collect();
                review.shuffle(rng);
                self.review_word_ids = review;
                self.plan_for(today, catalog, rng);
                RefreshOutcome::RolledOver {
                    from: last,
                    to: today,
                }
            }
        }
    }

    /// Compute a new selection of words for `date`
    ///
    /// Resets today's completions and draws `min(words_per_day, candidates)`
    /// distinct words of the selected level uniformly at random. An empty
    /// candidate pool gives an empty plan. The review list is not touched.
    pub fn plan_for<R>(&mut self, date: NaiveDate, catalog: &Catalog, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.last_planned_date = Some(date);
        self.todays_completed_ids.clear();

        let mut candidates = catalog.words_for_level(self.selected_level);
        let count = (self.words_per_day as usize).min(candidates.len()).max(1);
        candidates.shuffle(rng);

        self.todays_word_ids = candidates
            .into_iter()
            .take(count)
            .map(|w| w.id.clone())
            .collect();
    }

    /// Switch to another level and re-plan for `today`
    ///
    /// # Returns
    /// `true` if the level changed, `false` if it was already selected
    pub fn set_level<R>(&mut self, level: Level, today: NaiveDate, catalog: &Catalog, rng: &mut R) -> bool
    where
        R: Rng + ?Sized,
    {
        if self.selected_level == level {
            return false;
        }
        self.selected_level = level;
        self.plan_for(today, catalog, rng);
        true
    }

    /// Change the daily quota (clamped to 1..=30) and re-plan for `today`
    ///
    /// # Returns
    /// `true` if the clamped quota differs from the previous one
    pub fn set_words_per_day<R>(
        &mut self,
        value: i64,
        today: NaiveDate,
        catalog: &Catalog,
        rng: &mut R,
    ) -> bool
    where
        R: Rng + ?Sized,
    {
        let clamped = clamp_words_per_day(value);
        if self.words_per_day == clamped {
            return false;
        }
        self.words_per_day = clamped;
        self.plan_for(today, catalog, rng);
        true
    }

    /// Mark a word completed for today
    ///
    /// # Returns
    /// `true` if the word was not marked yet
    pub fn mark_completed(&mut self, id: &str) -> bool {
        self.todays_completed_ids.insert(id.to_string())
    }

    /// Remove a completion mark for today
    ///
    /// # Returns
    /// `true` if the word had been marked
    pub fn unmark_completed(&mut self, id: &str) -> bool {
        self.todays_completed_ids.remove(id)
    }

    /// Check if a word has been marked completed today
    pub fn is_completed(&self, id: &str) -> bool {
        self.todays_completed_ids.contains(id)
    }

    /// Check if a word is part of today's new words
    pub fn is_planned(&self, id: &str) -> bool {
        self.todays_word_ids.iter().any(|w| w == id)
    }

    /// Today's words resolved against the catalog
    ///
    /// Identifiers that no longer exist in the catalog are skipped.
    pub fn todays_words<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CatalogWord> {
        self.todays_word_ids
            .iter()
            .filter_map(|id| catalog.word(id))
            .collect()
    }

    /// Today's review words resolved against the catalog
    pub fn review_words<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CatalogWord> {
        self.review_word_ids
            .iter()
            .filter_map(|id| catalog.word(id))
            .collect()
    }

    /// Number of today's words not yet marked completed
    pub fn remaining_count(&self) -> usize {
        self.todays_word_ids
            .iter()
            .filter(|id| !self.todays_completed_ids.contains(*id))
            .count()
    }
}
