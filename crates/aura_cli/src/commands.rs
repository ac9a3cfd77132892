//! One-shot subcommands.

use crate::render;
use aura_core::{now_epoch_ms, Board, BurstOutcome, ItemId, KvRepository, Mood};
use std::error::Error;
use std::time::Duration;

type CommandResult = Result<(), Box<dyn Error>>;

pub fn add_note<R: KvRepository>(board: &mut Board<R>, text: &str) -> CommandResult {
    match board.submit_note(text)? {
        Some(id) => println!("added note {id}"),
        None => println!("nothing to add"),
    }
    Ok(())
}

pub fn list_notes<R: KvRepository>(board: &Board<R>) {
    for note in board.notes() {
        println!("{}", render::note_line(note));
    }
}

/// Bursts a bubble and waits out the fade so the removal is persisted.
pub fn burst_note<R: KvRepository>(board: &mut Board<R>, id: u64, delay_ms: u64) -> CommandResult {
    let id = ItemId::new(id);
    if let BurstOutcome::Started { .. } = board.burst_note(id, now_epoch_ms())? {
        std::thread::sleep(Duration::from_millis(delay_ms));
        board.tick(now_epoch_ms())?;
    }
    println!("burst note {id}; total bursts {}", board.burst_count());
    Ok(())
}

pub fn add_task<R: KvRepository>(board: &mut Board<R>, text: &str) -> CommandResult {
    match board.submit_task(text)? {
        Some(id) => println!("added task {id}"),
        None => println!("nothing to add"),
    }
    Ok(())
}

pub fn list_tasks<R: KvRepository>(board: &Board<R>) {
    for task in board.tasks() {
        println!("{}", render::task_line(task));
    }
}

pub fn toggle_task<R: KvRepository>(board: &mut Board<R>, id: u64) -> CommandResult {
    let id = ItemId::new(id);
    let completed = board.toggle_task(id)?;
    println!("task {id} {}", if completed { "done" } else { "open" });
    Ok(())
}

pub fn delete_task<R: KvRepository>(board: &mut Board<R>, id: u64) -> CommandResult {
    let id = ItemId::new(id);
    board.delete_task(id)?;
    println!("deleted task {id}");
    Ok(())
}

pub fn mood<R: KvRepository>(board: &mut Board<R>, name: Option<&str>) -> CommandResult {
    match name {
        Some(name) => {
            let mood: Mood = name.parse()?;
            board.select_mood(mood);
            println!("mood {mood} (preview; not kept after exit)");
            for line in render::palette_lines(board.theme()) {
                println!("{line}");
            }
        }
        None => {
            for mood in Mood::ALL {
                println!("{mood}");
            }
        }
    }
    Ok(())
}

pub fn clock<R: KvRepository>(board: &Board<R>) {
    println!("{}", render::clock_line(board));
}

pub fn status<R: KvRepository>(board: &Board<R>) {
    for line in render::board_lines(board) {
        println!("{line}");
    }
}
