//! Text projections of board state.

use aura_core::service::theme_service::Theme;
use aura_core::service::clock_service::ClockReading;
use aura_core::{Board, KvRepository, Note, Task, TickReport};
use chrono::Local;

pub fn note_line(note: &Note) -> String {
    let state = if note.is_bursting() { " (bursting)" } else { "" };
    format!(
        "[{:>3}] {} ({}px @ {:.0}%,{:.0}%){}",
        note.id, note.text, note.bubble.size_px, note.bubble.left_pct, note.bubble.top_pct, state
    )
}

pub fn task_line(task: &Task) -> String {
    let check = if task.completed { "x" } else { " " };
    format!("[{:>3}] [{}] {}", task.id, check, task.text)
}

pub fn palette_lines(theme: &Theme) -> Vec<String> {
    theme
        .variables()
        .iter()
        .map(|(name, color)| format!("  {name}: {color}"))
        .collect()
}

fn reading_line(reading: &ClockReading) -> String {
    format!("{}  {}", reading.time_label, reading.greeting)
}

pub fn clock_line<R: KvRepository>(board: &Board<R>) -> String {
    reading_line(&board.clock(Local::now().time()))
}

/// In-place status line refreshed on every 1-second tick.
pub fn tick_status_line(report: &TickReport) -> String {
    match &report.zen_label {
        Some(label) => format!("{}  {label}", reading_line(&report.clock)),
        None => reading_line(&report.clock),
    }
}

pub fn board_lines<R: KvRepository>(board: &Board<R>) -> Vec<String> {
    let mut lines = vec![
        clock_line(board),
        format!(
            "mood: {}  bursts: {}  {}",
            board.theme().mood(),
            board.burst_count(),
            board.zen().label().unwrap_or_default()
        ),
        "thoughts:".to_string(),
    ];
    if board.notes().is_empty() {
        lines.push("  (none)".to_string());
    }
    lines.extend(board.notes().iter().map(|note| format!("  {}", note_line(note))));
    lines.push("to-do:".to_string());
    if board.tasks().is_empty() {
        lines.push("  (none)".to_string());
    }
    lines.extend(board.tasks().iter().map(|task| format!("  {}", task_line(task))));
    lines
}
