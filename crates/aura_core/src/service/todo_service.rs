//! To-do list management.
//!
//! # Invariants
//! - Tasks keep insertion order; that order is the persisted order.
//! - Every mutation is visible in [`TodoList::stored`] immediately.

use crate::model::item::{IdSequence, ItemId};
use crate::model::task::{StoredTask, Task};

/// Canonical list of to-do rows.
#[derive(Debug, Default)]
pub struct TodoList {
    tasks: Vec<Task>,
    ids: IdSequence,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn add(&mut self, text: impl Into<String>, completed: bool) -> ItemId {
        let id = self.ids.next_id();
        self.tasks.push(Task::new(id, text, completed));
        id
    }

    /// Flips completion for one task and returns the new flag.
    pub fn toggle(&mut self, id: ItemId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    pub fn delete(&mut self, id: ItemId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Storage projection of the full list.
    pub fn stored(&self) -> Vec<StoredTask> {
        self.tasks.iter().map(Task::to_stored).collect()
    }
}
