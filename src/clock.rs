//! Source of "today" for the server
//!
//! Day boundaries are decided on local calendar dates. Tests use `FixedClock`
//! to step through days without waiting for midnight.

use crate::study::local_date_today;
use chrono::{Duration, NaiveDate};
use std::sync::{Mutex, PoisonError};

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local system date
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        local_date_today()
    }
}

/// A clock that stays on a chosen date until moved
#[derive(Debug)]
pub struct FixedClock {
    date: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Mutex::new(date),
        }
    }

    pub fn set(&self, date: NaiveDate) {
        *self.date.lock().unwrap_or_else(PoisonError::into_inner) = date;
    }

    /// Move the clock forward by `days` (negative moves it back)
    pub fn advance_days(&self, days: i64) {
        let mut date = self.date.lock().unwrap_or_else(PoisonError::into_inner);
        *date += Duration::days(days);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.date.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
