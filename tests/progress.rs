// Persistence, collection and streak rules over the key-value seam.

use daily_idiom::error::StoreError;
use daily_idiom::store::{DailyRecord, KeyValueStore, MemoryStore, Progress, keys};
use daily_idiom::DayKey;

fn day(s: &str) -> DayKey {
    DayKey::parse(s).unwrap()
}

fn attempt(date: &str, idiom_id: u32, selected_index: usize, is_correct: bool) -> DailyRecord {
    DailyRecord {
        date: day(date),
        idiom_id,
        is_correct,
        selected_index,
    }
}

/// Backend whose every call fails, like a browser with storage disabled.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("quota exceeded".into()))
    }
}

#[test]
fn first_submission_per_day_wins() {
    let progress = Progress::new(MemoryStore::new());
    assert!(progress.record_attempt(attempt("2024-01-01", 5, 1, false)));
    assert!(!progress.record_attempt(attempt("2024-01-01", 5, 2, true)));

    let records = progress.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], attempt("2024-01-01", 5, 1, false));
    // the dropped correct answer must not collect the idiom either
    assert!(!progress.is_collected(5));
}

#[test]
fn idiom_is_collected_once() {
    let progress = Progress::new(MemoryStore::new());
    progress.record_attempt(attempt("2024-01-01", 9, 0, true));
    progress.record_attempt(attempt("2024-02-11", 9, 3, true));

    let collection = progress.collection();
    assert_eq!(collection.len(), 1);
    assert_eq!(collection[0].idiom_id, 9);
    assert_eq!(collection[0].collected_date, day("2024-01-01"));
    assert_eq!(progress.records().len(), 2);
}

#[test]
fn wrong_answer_is_not_collected_but_counts_for_streak() {
    let progress = Progress::new(MemoryStore::new());
    progress.record_attempt(attempt("2024-01-01", 3, 0, false));
    assert!(progress.collection().is_empty());
    let streak = progress.streak();
    assert_eq!(streak.current_streak, 1);
    assert_eq!(streak.last_date, Some(day("2024-01-01")));
}

#[test]
fn consecutive_days_build_a_streak_and_gaps_reset_it() {
    let progress = Progress::new(MemoryStore::new());
    progress.record_attempt(attempt("2024-01-01", 1, 0, true));
    progress.record_attempt(attempt("2024-01-02", 2, 0, false));
    progress.record_attempt(attempt("2024-01-03", 3, 0, true));
    assert_eq!(progress.streak().current_streak, 3);

    progress.record_attempt(attempt("2024-01-06", 4, 0, true));
    let streak = progress.streak();
    assert_eq!(streak.current_streak, 1);
    assert_eq!(streak.longest_streak, 3);
}

#[test]
fn streak_scenario_from_stored_state() {
    let store = MemoryStore::new();
    store
        .set(keys::STREAK, r#"{"currentStreak":3,"longestStreak":3,"lastDate":"2024-01-01"}"#)
        .unwrap();
    let progress = Progress::new(&store);
    progress.record_attempt(attempt("2024-01-02", 1, 0, true));
    let streak = progress.streak();
    assert_eq!(streak.current_streak, 4);
    assert!(streak.longest_streak >= 4);

    let store = MemoryStore::new();
    store
        .set(keys::STREAK, r#"{"currentStreak":3,"longestStreak":3,"lastDate":"2024-01-01"}"#)
        .unwrap();
    let progress = Progress::new(&store);
    progress.record_attempt(attempt("2024-01-05", 1, 0, true));
    assert_eq!(progress.streak().current_streak, 1);
}

#[test]
fn broken_backend_degrades_to_defaults() {
    let progress = Progress::new(BrokenStore);
    assert!(progress.records().is_empty());
    assert!(progress.collection().is_empty());
    assert_eq!(progress.streak().current_streak, 0);
    assert!(!progress.unlocks().collection);
    // writes are swallowed rather than surfaced
    assert!(progress.record_attempt(attempt("2024-01-01", 1, 0, true)));
    assert!(progress.records().is_empty());
}

#[test]
fn record_for_finds_by_date() {
    let progress = Progress::new(MemoryStore::new());
    progress.record_attempt(attempt("2024-03-10", 12, 2, true));
    assert_eq!(progress.record_for(day("2024-03-10")).map(|r| r.idiom_id), Some(12));
    assert_eq!(progress.record_for(day("2024-03-11")), None);
}

#[test]
fn unlock_updates_persist() {
    let store = MemoryStore::new();
    let progress = Progress::new(&store);
    let today = day("2024-04-01");
    progress.update_unlocks(|u| u.unlock_hint(today));
    progress.update_unlocks(|u| u.stats = true);

    let reopened = Progress::new(&store);
    let unlocks = reopened.unlocks();
    assert!(unlocks.hint_unlocked(today));
    assert!(!unlocks.hint_unlocked(today.tomorrow()));
    assert!(unlocks.stats);
    assert!(!unlocks.collection);
}

#[test]
fn one_bad_record_does_not_wipe_history() {
    let store = MemoryStore::new();
    store
        .set(
            keys::RECORDS,
            concat!(
                r#"[{"date":"2024-01-01","idiomId":4,"isCorrect":true,"selectedIndex":1},"#,
                r#"{"date":"2024-1-2","idiomId":5,"isCorrect":false,"selectedIndex":0}]"#
            ),
        )
        .unwrap();
    store
        .set(
            keys::COLLECTION,
            r#"[{"idiomId":4,"collectedDate":"2024-01-01"},{"idiomId":"x"}]"#,
        )
        .unwrap();
    let progress = Progress::new(&store);
    assert_eq!(progress.records(), vec![attempt("2024-01-01", 4, 1, true)]);
    assert_eq!(progress.collection().len(), 1);

    progress.record_attempt(attempt("2024-01-03", 6, 0, true));
    let dates: Vec<_> = progress.records().iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![day("2024-01-01"), day("2024-01-03")]);
    assert!(progress.is_collected(4) && progress.is_collected(6));
}
