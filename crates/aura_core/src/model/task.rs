//! To-do task model.

use super::item::ItemId;
use serde::{Deserialize, Serialize};

/// One to-do row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: ItemId, text: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            text: text.into(),
            completed,
        }
    }

    /// Persisted shape of this task (identity is positional in storage).
    pub fn to_stored(&self) -> StoredTask {
        StoredTask {
            text: self.text.clone(),
            completed: self.completed,
        }
    }
}

/// Storage projection of a task under the `aura-todos` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTask {
    pub text: String,
    /// Older snapshots may omit the flag; treat that as not completed.
    #[serde(default)]
    pub completed: bool,
}
