//! Board component services.
//!
//! # Responsibility
//! - Own canonical in-memory state for each board component.
//! - Stay storage-agnostic; persistence and sound are coordinated by
//!   [`crate::board::Board`].

pub mod clock_service;
pub mod note_service;
pub mod theme_service;
pub mod todo_service;
pub mod zen_service;
