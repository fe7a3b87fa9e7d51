//! Daily selection, rollover and re-planning tests
mod common;

use common::{catalog_with, date, get_test_handler, open_handler};
use deutsch_daily::{Level, StudyEvent};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

#[tokio::test]
async fn test_first_day_draws_quota_of_distinct_words() {
    let (handler, _clock, _temp_file) = get_test_handler(date(2025, 6, 1));
    handler.handle_today().await.unwrap();

    let data = handler.snapshot();
    let ids = &data.plan.todays_word_ids;
    assert_eq!(ids.len(), 7);
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), 7);
    for id in ids {
        let word = handler.catalog().word(id).unwrap();
        assert_eq!(word.level, Level::A1);
    }
    assert!(data.plan.review_word_ids.is_empty());
    assert_eq!(data.plan.last_planned_date, Some(date(2025, 6, 1)));
}

#[tokio::test]
async fn test_quota_larger_than_level_takes_every_word() {
    let (handler, _clock, _temp_file) = get_test_handler(date(2025, 6, 1));
    handler.handle_set_words_per_day(20).await.unwrap();

    let data = handler.snapshot();
    assert_eq!(data.plan.words_per_day, 20);
    let planned: HashSet<_> = data.plan.todays_word_ids.iter().cloned().collect();
    let a1: HashSet<_> = handler
        .catalog()
        .words_for_level(Level::A1)
        .iter()
        .map(|w| w.id.clone())
        .collect();
    assert_eq!(planned, a1);
}

#[tokio::test]
async fn test_quota_is_clamped() {
    let (handler, _clock, _temp_file) = get_test_handler(date(2025, 6, 1));

    let output = handler.handle_set_words_per_day(100).await.unwrap();
    assert!(output.contains("Words per day set to 30"));

    handler.handle_set_words_per_day(0).await.unwrap();
    let data = handler.snapshot();
    assert_eq!(data.plan.words_per_day, 1);
    assert_eq!(data.plan.todays_word_ids.len(), 1);

    let output = handler.handle_set_words_per_day(-5).await.unwrap();
    assert!(output.contains("already 1"));
}

#[tokio::test]
async fn test_same_day_refresh_keeps_plan() {
    let (handler, _clock, _temp_file) = get_test_handler(date(2025, 6, 1));
    handler.handle_today().await.unwrap();
    let before = handler.snapshot();

    handler.handle_today().await.unwrap();
    handler.handle_review().await.unwrap();
    handler.handle_progress().await.unwrap();

    assert_eq!(handler.snapshot(), before);
}

#[tokio::test]
async fn test_rollover_turns_completions_into_review() {
    let (handler, clock, _temp_file) = get_test_handler(date(2025, 6, 1));
    handler.handle_today().await.unwrap();

    let first_day = handler.snapshot().plan.todays_word_ids;
    let completed: Vec<String> = first_day[..3].to_vec();
    handler.handle_mark_learned(completed.clone()).await.unwrap();

    clock.advance_days(1);
    let output = handler.handle_today().await.unwrap();
    assert!(output.contains("Review (3 word(s)"));

    let data = handler.snapshot();
    let review: HashSet<_> = data.plan.review_word_ids.iter().cloned().collect();
    let expected: HashSet<_> = completed.into_iter().collect();
    assert_eq!(data.plan.review_word_ids.len(), 3);
    assert_eq!(review, expected);
    assert!(data.plan.todays_completed_ids.is_empty());
    assert_eq!(data.plan.todays_word_ids.len(), 7);
    assert_eq!(data.plan.last_planned_date, Some(date(2025, 6, 2)));
}

#[tokio::test]
async fn test_rollover_after_a_gap_uses_last_completions() {
    let (handler, clock, _temp_file) = get_test_handler(date(2025, 6, 1));
    handler.handle_today().await.unwrap();
    let id = handler.snapshot().plan.todays_word_ids[0].clone();
    handler.handle_mark_learned(vec![id.clone()]).await.unwrap();

    clock.advance_days(5);
    handler.handle_today().await.unwrap();
    assert_eq!(handler.snapshot().plan.review_word_ids, vec![id]);

    // A day without completions leaves nothing to review
    clock.advance_days(1);
    handler.handle_today().await.unwrap();
    assert!(handler.snapshot().plan.review_word_ids.is_empty());
}

#[tokio::test]
async fn test_level_change_replans_today() {
    let (handler, _clock, _temp_file) = get_test_handler(date(2025, 6, 1));
    handler.handle_today().await.unwrap();
    let id = handler.snapshot().plan.todays_word_ids[0].clone();
    handler.handle_mark_learned(vec![id.clone()]).await.unwrap();

    let output = handler.handle_set_level("a2".to_string()).await.unwrap();
    assert!(output.contains("3 word(s)"));

    let data = handler.snapshot();
    assert_eq!(data.plan.selected_level, Level::A2);
    assert_eq!(data.plan.todays_word_ids.len(), 3);
    assert!(data.plan.todays_completed_ids.is_empty());
    assert!(data.progress.is_word_learned(&id));

    let output = handler.handle_set_level("A2".to_string()).await.unwrap();
    assert!(output.contains("already"));
}

#[tokio::test]
async fn test_level_without_words_gives_empty_plan() {
    let temp_file = NamedTempFile::new().unwrap();
    let clock = Arc::new(deutsch_daily::FixedClock::new(date(2025, 6, 1)));
    let handler = open_handler(
        temp_file.path(),
        catalog_with(&[(Level::A1, 4)]),
        clock.clone(),
    );

    handler.handle_set_level("B2".to_string()).await.unwrap();
    let output = handler.handle_today().await.unwrap();
    assert!(output.contains("No words available for this level."));
    assert!(handler.snapshot().plan.todays_word_ids.is_empty());

    handler.handle_set_level("A1".to_string()).await.unwrap();
    assert_eq!(handler.snapshot().plan.todays_word_ids.len(), 4);
}

#[tokio::test]
async fn test_rollover_events_are_published() {
    let (handler, clock, _temp_file) = get_test_handler(date(2025, 6, 1));
    handler.handle_today().await.unwrap();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let listener = handler
        .events()
        .subscribe(move |event| sink.lock().unwrap().push(event.clone()));

    clock.advance_days(1);
    handler.handle_today().await.unwrap();
    {
        let seen = seen.lock().unwrap();
        assert_eq!(
            seen[0],
            StudyEvent::DayRolledOver {
                from: date(2025, 6, 1),
                to: date(2025, 6, 2),
                review_count: 0
            }
        );
        assert!(matches!(seen[1], StudyEvent::PlanCreated { word_count: 7, .. }));
    }

    assert!(handler.events().unsubscribe(listener));
    clock.advance_days(1);
    handler.handle_today().await.unwrap();
    assert_eq!(seen.lock().unwrap().len(), 2);
}
