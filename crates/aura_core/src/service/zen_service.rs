//! Zen mode session stopwatch.
//!
//! # Invariants
//! - Initial state is `Inactive`; nothing here is persisted.
//! - Re-entering zen mode always starts again from `00:00`.
//! - The label only advances on ticks, matching a 1-second refresh.

/// Refresh period of the session label while zen mode is active.
pub const ZEN_TICK_MS: i64 = 1_000;

const ENTER_LABEL: &str = "Zen Mode";
const EXIT_LABEL: &str = "Exit Zen";

/// Zen timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZenState {
    #[default]
    Inactive,
    Active {
        started_at_ms: i64,
        elapsed_secs: u64,
    },
}

/// Two-state zen stopwatch.
#[derive(Debug, Default)]
pub struct ZenTimer {
    state: ZenState,
}

impl ZenTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ZenState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ZenState::Active { .. })
    }

    /// Flips between inactive and active; returns whether zen is now active.
    pub fn toggle(&mut self, now_ms: i64) -> bool {
        self.state = match self.state {
            ZenState::Inactive => ZenState::Active {
                started_at_ms: now_ms,
                elapsed_secs: 0,
            },
            ZenState::Active { .. } => ZenState::Inactive,
        };
        self.is_active()
    }

    /// Recomputes elapsed whole seconds; no-op while inactive.
    pub fn tick(&mut self, now_ms: i64) {
        if let ZenState::Active {
            started_at_ms,
            elapsed_secs,
        } = &mut self.state
        {
            let elapsed_ms = now_ms.saturating_sub(*started_at_ms).max(0);
            *elapsed_secs = u64::try_from(elapsed_ms / 1_000).unwrap_or(0);
        }
    }

    /// Session display text, `None` while the display is hidden.
    pub fn label(&self) -> Option<String> {
        match self.state {
            ZenState::Active { elapsed_secs, .. } => {
                Some(format!("Session: {}", format_elapsed(elapsed_secs)))
            }
            ZenState::Inactive => None,
        }
    }

    /// Text of the zen toggle control.
    pub fn button_label(&self) -> &'static str {
        if self.is_active() {
            EXIT_LABEL
        } else {
            ENTER_LABEL
        }
    }
}

/// Formats whole seconds as zero-padded `mm:ss`.
pub fn format_elapsed(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
