//! Note bubble model.
//!
//! # Responsibility
//! - Hold note text plus the bubble layout it is rendered with.
//! - Track the dismiss animation phase between click and removal.
//!
//! # Invariants
//! - Bubble size is monotonic in text length and clamped to
//!   `[MIN_BUBBLE_PX, MAX_BUBBLE_PX]`.
//! - Bubble position stays inside the `[10%, 90%)` band on both axes.
//! - A bursting note is still live (rendered and persisted) until removed.

use super::item::ItemId;
use rand::Rng;

pub const MIN_BUBBLE_PX: u32 = 120;
pub const MAX_BUBBLE_PX: u32 = 250;
const BASE_BUBBLE_PX: u32 = 100;
const PX_PER_CHAR: u32 = 4;
const POSITION_MARGIN_PCT: f64 = 10.0;
const POSITION_SPAN_PCT: f64 = 80.0;
const BURST_SCALE: f64 = 2.5;

/// Visual placement of a bubble inside its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    /// Width and height in pixels.
    pub size_px: u32,
    /// Horizontal offset in percent of the container width.
    pub left_pct: f64,
    /// Vertical offset in percent of the container height.
    pub top_pct: f64,
}

impl Bubble {
    /// Lays out a bubble for `text` at a uniformly random position.
    pub fn for_text(text: &str, rng: &mut impl Rng) -> Self {
        Self {
            size_px: bubble_size_px(text),
            left_pct: random_position_pct(rng),
            top_pct: random_position_pct(rng),
        }
    }
}

/// Returns the bubble edge length for a note text.
pub fn bubble_size_px(text: &str) -> u32 {
    let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    BASE_BUBBLE_PX
        .saturating_add(chars.saturating_mul(PX_PER_CHAR))
        .clamp(MIN_BUBBLE_PX, MAX_BUBBLE_PX)
}

fn random_position_pct(rng: &mut impl Rng) -> f64 {
    rng.gen::<f64>() * POSITION_SPAN_PCT + POSITION_MARGIN_PCT
}

/// Lifecycle phase of a rendered bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubblePhase {
    Floating,
    /// Dismissed; removed from the board once `remove_at_ms` passes.
    Bursting { remove_at_ms: i64 },
}

/// One live note bubble.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: ItemId,
    pub text: String,
    pub bubble: Bubble,
    pub phase: BubblePhase,
}

impl Note {
    pub fn new(id: ItemId, text: impl Into<String>, bubble: Bubble) -> Self {
        Self {
            id,
            text: text.into(),
            bubble,
            phase: BubblePhase::Floating,
        }
    }

    pub fn is_bursting(&self) -> bool {
        matches!(self.phase, BubblePhase::Bursting { .. })
    }

    /// Render scale factor: grown while bursting.
    pub fn scale(&self) -> f64 {
        if self.is_bursting() {
            BURST_SCALE
        } else {
            1.0
        }
    }

    /// Render opacity: faded out while bursting.
    pub fn opacity(&self) -> f64 {
        if self.is_bursting() {
            0.0
        } else {
            1.0
        }
    }
}
