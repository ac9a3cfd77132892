//! Repository layer: key-value persistence and typed board snapshots.
//!
//! # Responsibility
//! - Define the string-keyed storage contract the board writes through.
//! - Isolate SQLite details and JSON encoding from board orchestration.
//!
//! # Invariants
//! - Values are overwritten whole, never merged.
//! - Reads of malformed values degrade to empty defaults at the snapshot
//!   layer, never at the raw key-value layer.

pub mod board_store;
pub mod kv_repo;
