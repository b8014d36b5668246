//! Persistence: a raw string key-value seam plus the typed progress repository.
//!
//! Persistence is best effort. Any read or write failure is logged and the
//! caller sees default state; nothing here returns an error to the UI.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::dates::DayKey;
use crate::error::StoreError;
use crate::streak::StreakState;
use crate::unlocks::UnlockState;

pub mod keys {
    pub const RECORDS: &str = "daily-idiom-records";
    pub const COLLECTION: &str = "daily-idiom-collection";
    pub const STREAK: &str = "daily-idiom-streak";
    pub const UNLOCKS: &str = "daily-idiom-unlocks";
}

/// String-keyed blob storage. Implementations use interior mutability so a
/// shared handle can be passed around like the browser's `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-process map, used by tests and as the fallback when no browser storage exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value, for inspecting what was written.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.map.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Browser `window.localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, StoreError> {
        let win = web_sys::window().ok_or(StoreError::Unavailable)?;
        let storage = win
            .local_storage()
            .map_err(|e| StoreError::Backend(format!("{e:?}")))?
            .ok_or(StoreError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Backend(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(format!("{e:?}")))
    }
}

/// One answered day. At most one per date; the first write wins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub date: DayKey,
    pub idiom_id: u32,
    pub is_correct: bool,
    pub selected_index: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionEntry {
    pub idiom_id: u32,
    pub collected_date: DayKey,
}

/// Typed view over the four persisted keys.
pub struct Progress<S> {
    store: S,
}

impl<S: KeyValueStore> Progress<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.store.get(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("discarding unreadable {key}: {e}");
                T::default()
            }),
            Ok(None) => T::default(),
            Err(e) => {
                log::warn!("failed to read {key}: {e}");
                T::default()
            }
        }
    }

    /// Loads a JSON array element by element. Entries that no longer parse
    /// are dropped on their own so the rest of the history survives.
    fn load_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let items: Vec<serde_json::Value> = self.load(key);
        items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(v) => Some(v),
                Err(e) => {
                    log::warn!("skipping unreadable entry in {key}: {e}");
                    None
                }
            })
            .collect()
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("failed to encode {key}: {e}");
                return;
            }
        };
        if let Err(e) = self.store.set(key, &raw) {
            log::warn!("failed to write {key}: {e}");
        }
    }

    pub fn records(&self) -> Vec<DailyRecord> {
        self.load_list(keys::RECORDS)
    }

    pub fn record_for(&self, date: DayKey) -> Option<DailyRecord> {
        self.records().into_iter().find(|r| r.date == date)
    }

    pub fn collection(&self) -> Vec<CollectionEntry> {
        self.load_list(keys::COLLECTION)
    }

    pub fn is_collected(&self, idiom_id: u32) -> bool {
        self.collection().iter().any(|c| c.idiom_id == idiom_id)
    }

    pub fn streak(&self) -> StreakState {
        self.load(keys::STREAK)
    }

    pub fn unlocks(&self) -> UnlockState {
        self.load(keys::UNLOCKS)
    }

    /// Read-modify-write of the unlock record.
    pub fn update_unlocks(&self, f: impl FnOnce(&mut UnlockState)) -> UnlockState {
        let mut unlocks = self.unlocks();
        f(&mut unlocks);
        self.save(keys::UNLOCKS, &unlocks);
        unlocks
    }

    /// Stores the day's answer. A second submission for the same date is
    /// ignored entirely. Otherwise a correct answer collects the idiom (once)
    /// and the streak advances whether or not the answer was right.
    ///
    /// Returns `true` if the record was written.
    pub fn record_attempt(&self, record: DailyRecord) -> bool {
        let mut records = self.records();
        if records.iter().any(|r| r.date == record.date) {
            log::info!("attempt for {} already recorded, ignoring", record.date);
            return false;
        }
        let date = record.date;
        let idiom_id = record.idiom_id;
        let is_correct = record.is_correct;
        records.push(record);
        self.save(keys::RECORDS, &records);

        if is_correct {
            self.add_to_collection(idiom_id, date);
        }
        self.advance_streak(date);
        true
    }

    fn add_to_collection(&self, idiom_id: u32, date: DayKey) -> bool {
        let mut collection = self.collection();
        if collection.iter().any(|c| c.idiom_id == idiom_id) {
            return false;
        }
        collection.push(CollectionEntry {
            idiom_id,
            collected_date: date,
        });
        self.save(keys::COLLECTION, &collection);
        log::info!("idiom {idiom_id} collected on {date}");
        true
    }

    fn advance_streak(&self, date: DayKey) {
        let mut streak = self.streak();
        if streak.advance(date) {
            self.save(keys::STREAK, &streak);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> DayKey {
        DayKey::parse(s).unwrap()
    }

    #[test]
    fn test_records_use_camel_case_json() {
        let store = MemoryStore::new();
        let progress = Progress::new(&store);
        progress.record_attempt(DailyRecord {
            date: day("2024-01-01"),
            idiom_id: 3,
            is_correct: true,
            selected_index: 2,
        });
        assert_eq!(
            store.raw(keys::RECORDS).unwrap(),
            r#"[{"date":"2024-01-01","idiomId":3,"isCorrect":true,"selectedIndex":2}]"#
        );
        assert_eq!(
            store.raw(keys::COLLECTION).unwrap(),
            r#"[{"idiomId":3,"collectedDate":"2024-01-01"}]"#
        );
    }

    #[test]
    fn test_reads_existing_web_app_data() {
        let store = MemoryStore::new();
        store
            .set(
                keys::STREAK,
                r#"{"currentStreak":4,"longestStreak":9,"lastDate":"2024-05-02"}"#,
            )
            .unwrap();
        let progress = Progress::new(&store);
        let streak = progress.streak();
        assert_eq!(streak.current_streak, 4);
        assert_eq!(streak.longest_streak, 9);
        assert_eq!(streak.last_date, Some(day("2024-05-02")));
    }

    #[test]
    fn test_unreadable_value_falls_back_to_default() {
        let store = MemoryStore::new();
        store.set(keys::RECORDS, "{not json").unwrap();
        let progress = Progress::new(&store);
        assert!(progress.records().is_empty());
    }
}
