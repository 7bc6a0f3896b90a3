use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The last calendar day a plan was generated and the cumulative day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakRecord {
    pub last_day: NaiveDate,
    pub count: u32,
}

/// Injected persistence for the streak counter. Keeping the storage behind a
/// get/set pair lets tests swap the on-disk store for an in-memory one.
pub trait StreakStore {
    fn load(&self) -> Result<Option<StreakRecord>>;
    fn save(&self, record: StreakRecord) -> Result<()>;
}

/// Advance the streak for `today` and return the current count.
///
/// Increments at most once per distinct calendar day: regenerating a plan on
/// a day already recorded returns the stored count without writing.
pub fn bump_streak(store: &dyn StreakStore, today: NaiveDate) -> Result<u32> {
    let record = store.load()?;

    if let Some(rec) = record {
        if rec.last_day == today {
            debug!(count = rec.count, "streak already bumped today");
            return Ok(rec.count);
        }
    }

    let count = record.map(|r| r.count).unwrap_or(0) + 1;
    store.save(StreakRecord {
        last_day: today,
        count,
    })?;
    Ok(count)
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStreakStore {
    record: Mutex<Option<StreakRecord>>,
}

impl StreakStore for MemoryStreakStore {
    fn load(&self) -> Result<Option<StreakRecord>> {
        Ok(*self.record.lock().unwrap())
    }

    fn save(&self, record: StreakRecord) -> Result<()> {
        *self.record.lock().unwrap() = Some(record);
        Ok(())
    }
}

/// Durable store backed by a small JSON file.
#[derive(Debug, Clone)]
pub struct FileStreakStore {
    path: PathBuf,
}

impl FileStreakStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StreakStore for FileStreakStore {
    fn load(&self) -> Result<Option<StreakRecord>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        let record = serde_json::from_str(&data)?;
        Ok(Some(record))
    }

    fn save(&self, record: StreakRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&record)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn same_day_bumps_once() {
        let store = MemoryStreakStore::default();
        let today = day("2025-06-01");
        assert_eq!(bump_streak(&store, today).unwrap(), 1);
        assert_eq!(bump_streak(&store, today).unwrap(), 1);
        assert_eq!(bump_streak(&store, today).unwrap(), 1);
    }

    #[test]
    fn distinct_days_increment_consecutively() {
        let store = MemoryStreakStore::default();
        assert_eq!(bump_streak(&store, day("2025-06-01")).unwrap(), 1);
        assert_eq!(bump_streak(&store, day("2025-06-02")).unwrap(), 2);
        assert_eq!(bump_streak(&store, day("2025-06-05")).unwrap(), 3);
    }

    #[test]
    fn same_day_does_not_rewrite_store() {
        let store = MemoryStreakStore::default();
        let today = day("2025-06-01");
        bump_streak(&store, today).unwrap();
        let before = store.load().unwrap();
        bump_streak(&store, today).unwrap();
        assert_eq!(store.load().unwrap(), before);
    }

    #[test]
    fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStreakStore::new(dir.path().join("streak.json"));

        assert_eq!(store.load().unwrap(), None);
        assert_eq!(bump_streak(&store, day("2025-06-01")).unwrap(), 1);
        assert_eq!(bump_streak(&store, day("2025-06-02")).unwrap(), 2);

        // A fresh handle over the same path sees the persisted record.
        let reopened = FileStreakStore::new(dir.path().join("streak.json"));
        assert_eq!(
            reopened.load().unwrap(),
            Some(StreakRecord {
                last_day: day("2025-06-02"),
                count: 2
            })
        );
    }
}
