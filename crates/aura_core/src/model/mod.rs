//! Domain model for the mood board.
//!
//! # Responsibility
//! - Define canonical note, task and palette structures owned by the board.
//! - Keep presentation fields (bubble layout) derived from canonical data.
//!
//! # Invariants
//! - Every note and task is identified by a stable `ItemId`.
//! - Text stored in the model is already trimmed and non-empty.

pub mod item;
pub mod mood;
pub mod note;
pub mod task;

/// Normalizes raw user input at the submit boundary.
///
/// Returns `None` for empty or whitespace-only input, which callers treat as
/// "nothing to create".
pub fn normalize_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
