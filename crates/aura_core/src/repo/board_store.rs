//! Typed board snapshots over a key-value repository.
//!
//! # Responsibility
//! - Map the three board entries onto their stable storage keys.
//! - Decode persisted values defensively at startup.
//! - Skip writes whose encoded value equals the last value seen for the key.
//!
//! # Invariants
//! - `aura-thoughts` holds a JSON array of note texts in display order.
//! - `aura-todos` holds a JSON array of `{text, completed}` in display order.
//! - `aura-count` holds the burst counter as a decimal string.

use super::kv_repo::{KvRepository, RepoResult};
use crate::model::task::StoredTask;
use log::{debug, warn};
use std::collections::HashMap;

pub const COUNT_KEY: &str = "aura-count";
pub const NOTES_KEY: &str = "aura-thoughts";
pub const TODOS_KEY: &str = "aura-todos";

/// Board state as read back from storage at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredBoard {
    pub notes: Vec<String>,
    pub tasks: Vec<StoredTask>,
    pub burst_count: u64,
}

/// Snapshot writer/reader for board entries.
pub struct BoardStore<R: KvRepository> {
    repo: R,
    last_written: HashMap<&'static str, String>,
}

impl<R: KvRepository> BoardStore<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            last_written: HashMap::new(),
        }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Reads all board entries; missing or malformed values become defaults.
    ///
    /// # Errors
    /// - Returns an error only when the underlying repository read fails.
    pub fn load(&mut self) -> RepoResult<StoredBoard> {
        let notes = match self.read_raw(NOTES_KEY)? {
            Some(raw) => decode_or_default(NOTES_KEY, &raw),
            None => Vec::new(),
        };
        let tasks = match self.read_raw(TODOS_KEY)? {
            Some(raw) => decode_or_default(TODOS_KEY, &raw),
            None => Vec::new(),
        };
        let burst_count = match self.read_raw(COUNT_KEY)? {
            Some(raw) => parse_count(&raw),
            None => 0,
        };

        Ok(StoredBoard {
            notes,
            tasks,
            burst_count,
        })
    }

    /// Overwrites the note list snapshot.
    pub fn save_notes<'a>(&mut self, texts: impl IntoIterator<Item = &'a str>) -> RepoResult<()> {
        let texts: Vec<&str> = texts.into_iter().collect();
        let encoded = serde_json::to_string(&texts)?;
        self.write_if_changed(NOTES_KEY, encoded)
    }

    /// Overwrites the task list snapshot.
    pub fn save_tasks(&mut self, tasks: &[StoredTask]) -> RepoResult<()> {
        let encoded = serde_json::to_string(tasks)?;
        self.write_if_changed(TODOS_KEY, encoded)
    }

    /// Overwrites the burst counter.
    pub fn save_count(&mut self, count: u64) -> RepoResult<()> {
        self.write_if_changed(COUNT_KEY, count.to_string())
    }

    fn read_raw(&mut self, key: &'static str) -> RepoResult<Option<String>> {
        let raw = self.repo.get(key)?;
        if let Some(value) = &raw {
            self.last_written.insert(key, value.clone());
        }
        Ok(raw)
    }

    fn write_if_changed(&mut self, key: &'static str, encoded: String) -> RepoResult<()> {
        if self.last_written.get(key) == Some(&encoded) {
            debug!("event=store_write module=repo status=skip key={key} reason=unchanged");
            return Ok(());
        }

        self.repo.put(key, &encoded)?;
        debug!(
            "event=store_write module=repo status=ok key={} bytes={}",
            key,
            encoded.len()
        );
        self.last_written.insert(key, encoded);
        Ok(())
    }
}

fn decode_or_default<T: serde::de::DeserializeOwned>(key: &str, raw: &str) -> Vec<T> {
    match serde_json::from_str::<Vec<T>>(raw) {
        Ok(items) => items,
        Err(err) => {
            warn!(
                "event=store_decode module=repo status=error key={} error_code=malformed_value error={}",
                key, err
            );
            Vec::new()
        }
    }
}

fn parse_count(raw: &str) -> u64 {
    match raw.trim().parse::<u64>() {
        Ok(count) => count,
        Err(err) => {
            warn!(
                "event=store_decode module=repo status=error key={} error_code=malformed_value error={}",
                COUNT_KEY, err
            );
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardStore, StoredBoard, COUNT_KEY, NOTES_KEY, TODOS_KEY};
    use crate::model::task::StoredTask;
    use crate::repo::kv_repo::{KvRepository, MemoryKvRepository};

    #[test]
    fn load_from_empty_store_yields_defaults() {
        let mut store = BoardStore::new(MemoryKvRepository::new());
        assert_eq!(store.load().unwrap(), StoredBoard::default());
    }

    #[test]
    fn malformed_values_degrade_to_defaults() {
        let repo = MemoryKvRepository::new();
        repo.put(NOTES_KEY, "{not json").unwrap();
        repo.put(TODOS_KEY, "{\"text\":\"object not array\"}").unwrap();
        repo.put(COUNT_KEY, "many").unwrap();

        let mut store = BoardStore::new(repo);
        assert_eq!(store.load().unwrap(), StoredBoard::default());
    }

    #[test]
    fn todos_without_completed_flag_default_to_open() {
        let repo = MemoryKvRepository::new();
        repo.put(TODOS_KEY, r#"[{"text":"water plants"}]"#).unwrap();

        let mut store = BoardStore::new(repo);
        let board = store.load().unwrap();
        assert_eq!(
            board.tasks,
            vec![StoredTask {
                text: "water plants".to_string(),
                completed: false,
            }]
        );
    }

    #[test]
    fn encodes_entries_in_external_format() {
        let repo = MemoryKvRepository::new();
        let mut store = BoardStore::new(repo.clone());

        store.save_notes(["first", "second"]).unwrap();
        store
            .save_tasks(&[StoredTask {
                text: "call mom".to_string(),
                completed: true,
            }])
            .unwrap();
        store.save_count(3).unwrap();

        assert_eq!(repo.raw(NOTES_KEY).unwrap(), r#"["first","second"]"#);
        assert_eq!(
            repo.raw(TODOS_KEY).unwrap(),
            r#"[{"text":"call mom","completed":true}]"#
        );
        assert_eq!(repo.raw(COUNT_KEY).unwrap(), "3");
    }

    #[test]
    fn unchanged_snapshot_is_not_rewritten() {
        let repo = MemoryKvRepository::new();
        let mut store = BoardStore::new(repo.clone());

        store.save_notes(["a"]).unwrap();
        store.save_notes(["a"]).unwrap();
        assert_eq!(repo.write_count(), 1);

        store.save_notes(["a", "b"]).unwrap();
        assert_eq!(repo.write_count(), 2);
    }

    #[test]
    fn values_read_at_load_count_as_already_written() {
        let repo = MemoryKvRepository::new();
        repo.put(COUNT_KEY, "4").unwrap();

        let mut store = BoardStore::new(repo.clone());
        let board = store.load().unwrap();
        store.save_count(board.burst_count).unwrap();
        assert_eq!(repo.write_count(), 1);
    }
}
