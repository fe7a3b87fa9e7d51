//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use deutsch_daily::{Catalog, DeutschDailyHandler, FixedClock, Storage};
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Create a test handler with temporary storage and the bundled catalog
pub fn get_test_handler(start: NaiveDate) -> (DeutschDailyHandler, Arc<FixedClock>, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let clock = Arc::new(FixedClock::new(start));
    let handler = open_handler(temp_file.path(), Catalog::bundled(), clock.clone());
    (handler, clock, temp_file)
}

/// Open a handler on an existing progress file, as a restart would
pub fn open_handler(path: &Path, catalog: Catalog, clock: Arc<FixedClock>) -> DeutschDailyHandler {
    DeutschDailyHandler::with_parts(Storage::new(path), catalog, clock)
}

/// A catalog with `count` nouns per listed level
pub fn catalog_with(counts: &[(deutsch_daily::Level, usize)]) -> Catalog {
    let mut words = Vec::new();
    for (level, count) in counts {
        for i in 0..*count {
            words.push(deutsch_daily::CatalogWord {
                id: format!("{}-word-{}", level.code().to_lowercase(), i),
                german: format!("Wort{}", i),
                translation: format!("word {}", i),
                part_of_speech: "noun".to_string(),
                example: format!("Das ist Wort{}.", i),
                level: *level,
                tags: None,
            });
        }
    }
    Catalog::new(words, Vec::new())
}
