//! Stable item identity for notes and tasks.

use std::fmt::{Display, Formatter};

/// Session-scoped identifier for one note or task.
///
/// Identifiers are handed out in increasing order and never reused within a
/// board lifetime, so removing an item never changes another item's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Monotonic id generator; the first id handed out is `1`.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub fn next_id(&mut self) -> ItemId {
        self.last += 1;
        ItemId(self.last)
    }
}
