//! Core state, persistence and presentation rules for the Aura mood board.
//! Front ends feed input and tick events into [`Board`] and render from it.

pub mod audio;
pub mod board;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use audio::{AudioBackend, AudioCue, AudioEngine, AudioError, BellBackend, RecordingBackend};
pub use board::{Board, BoardError, BoardOptions, BoardResult, TickReport};
pub use config::{AuraConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::item::ItemId;
pub use model::mood::Mood;
pub use model::note::Note;
pub use model::task::Task;
pub use repo::board_store::{BoardStore, StoredBoard};
pub use repo::kv_repo::{
    KvRepository, MemoryKvRepository, RepoError, RepoResult, SqliteKvRepository,
};
pub use service::note_service::BurstOutcome;

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, now_epoch_ms};

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn epoch_clock_is_after_2020() {
        assert!(now_epoch_ms() > 1_577_836_800_000);
    }
}
