//! Note bubble management.
//!
//! # Responsibility
//! - Create bubbles with derived layout and stable ids.
//! - Run the dismiss lifecycle: burst, fade, delayed removal.
//!
//! # Invariants
//! - Notes keep insertion order; that order is the persisted order.
//! - A note is burst at most once; repeated clicks while fading are ignored.
//! - Removal happens only once the burst deadline has been reached.

use crate::model::item::{IdSequence, ItemId};
use crate::model::note::{Bubble, BubblePhase, Note};
use rand::Rng;

/// Default delay between a dismiss click and removal of the bubble.
pub const DEFAULT_BURST_DELAY_MS: u64 = 200;

/// Result of clicking a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstOutcome {
    /// The bubble started fading and will be removed at `remove_at_ms`.
    Started { remove_at_ms: i64 },
    /// The bubble was already fading; nothing changed.
    AlreadyBursting,
}

/// Canonical list of live note bubbles.
#[derive(Debug)]
pub struct NoteBubbles {
    notes: Vec<Note>,
    ids: IdSequence,
    burst_delay_ms: u64,
}

impl NoteBubbles {
    pub fn new(burst_delay_ms: u64) -> Self {
        Self {
            notes: Vec::new(),
            ids: IdSequence::default(),
            burst_delay_ms,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: ItemId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Texts of all live bubbles, in display order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.notes.iter().map(|note| note.text.as_str())
    }

    /// Appends a new floating bubble laid out for `text`.
    pub fn create(&mut self, text: impl Into<String>, rng: &mut impl Rng) -> ItemId {
        let text = text.into();
        let bubble = Bubble::for_text(&text, rng);
        let id = self.ids.next_id();
        self.notes.push(Note::new(id, text, bubble));
        id
    }

    /// Starts the dismiss animation for one bubble.
    ///
    /// Returns `None` when no live bubble has `id`.
    pub fn burst(&mut self, id: ItemId, now_ms: i64) -> Option<BurstOutcome> {
        let delay = i64::try_from(self.burst_delay_ms).unwrap_or(i64::MAX);
        let note = self.notes.iter_mut().find(|note| note.id == id)?;
        if note.is_bursting() {
            return Some(BurstOutcome::AlreadyBursting);
        }

        let remove_at_ms = now_ms.saturating_add(delay);
        note.phase = BubblePhase::Bursting { remove_at_ms };
        Some(BurstOutcome::Started { remove_at_ms })
    }

    /// Removes every bursting bubble whose deadline is at or before `now_ms`.
    ///
    /// Returns the removed ids in display order.
    pub fn remove_due(&mut self, now_ms: i64) -> Vec<ItemId> {
        let mut removed = Vec::new();
        self.notes.retain(|note| match note.phase {
            BubblePhase::Bursting { remove_at_ms } if remove_at_ms <= now_ms => {
                removed.push(note.id);
                false
            }
            _ => true,
        });
        removed
    }

    /// Earliest pending removal deadline, if any bubble is fading.
    pub fn next_removal_at(&self) -> Option<i64> {
        self.notes
            .iter()
            .filter_map(|note| match note.phase {
                BubblePhase::Bursting { remove_at_ms } => Some(remove_at_ms),
                BubblePhase::Floating => None,
            })
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::{BurstOutcome, NoteBubbles};
    use crate::model::item::ItemId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bubbles_with(texts: &[&str]) -> (NoteBubbles, Vec<ItemId>) {
        let mut rng = StdRng::seed_from_u64(1);
        let mut bubbles = NoteBubbles::new(200);
        let ids = texts
            .iter()
            .map(|text| bubbles.create(*text, &mut rng))
            .collect();
        (bubbles, ids)
    }

    #[test]
    fn bursting_note_stays_until_deadline() {
        let (mut bubbles, ids) = bubbles_with(&["a", "b"]);

        let outcome = bubbles.burst(ids[0], 1_000).unwrap();
        assert_eq!(outcome, BurstOutcome::Started { remove_at_ms: 1_200 });
        assert_eq!(bubbles.next_removal_at(), Some(1_200));

        assert!(bubbles.remove_due(1_199).is_empty());
        assert_eq!(bubbles.texts().collect::<Vec<_>>(), vec!["a", "b"]);

        assert_eq!(bubbles.remove_due(1_200), vec![ids[0]]);
        assert_eq!(bubbles.texts().collect::<Vec<_>>(), vec!["b"]);
        assert_eq!(bubbles.next_removal_at(), None);
    }

    #[test]
    fn second_click_on_fading_bubble_is_ignored() {
        let (mut bubbles, ids) = bubbles_with(&["a"]);
        bubbles.burst(ids[0], 0).unwrap();
        assert_eq!(
            bubbles.burst(ids[0], 50),
            Some(BurstOutcome::AlreadyBursting)
        );
        assert_eq!(bubbles.next_removal_at(), Some(200));
    }

    #[test]
    fn burst_unknown_id_returns_none() {
        let (mut bubbles, _) = bubbles_with(&["a"]);
        assert_eq!(bubbles.burst(ItemId::new(99), 0), None);
    }

    #[test]
    fn fading_bubble_renders_scaled_and_transparent() {
        let (mut bubbles, ids) = bubbles_with(&["a"]);
        bubbles.burst(ids[0], 0).unwrap();
        let note = bubbles.get(ids[0]).unwrap();
        assert_eq!(note.scale(), 2.5);
        assert_eq!(note.opacity(), 0.0);
    }
}
