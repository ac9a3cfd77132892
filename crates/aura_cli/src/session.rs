//! Interactive board session.
//!
//! # Responsibility
//! - Run the single-threaded event loop: one input line or one tick at a time.
//! - Fire the 1-second recurring tick and any due bubble removals.
//!
//! # Invariants
//! - Only this loop touches the board; the reader thread forwards raw lines.
//! - A failed command is reported and the session keeps running.

use crate::render;
use aura_core::service::zen_service::ZEN_TICK_MS;
use aura_core::{now_epoch_ms, Board, BurstOutcome, ItemId, KvRepository, Mood};
use log::warn;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

const HELP: &str = "commands: note <text> | burst <id> | task <text> | toggle <id> | \
delete <id> | mood <name> | zen | show | help | quit";

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Which scheduled work is due when the loop wakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Wake {
    removal_due: bool,
    tick_due: bool,
}

/// How long to wait for input before the next tick or bubble removal.
fn wait_for(now_ms: i64, next_tick_at: i64, next_removal_at: Option<i64>) -> Duration {
    let wake_at = next_removal_at.map_or(next_tick_at, |due| due.min(next_tick_at));
    Duration::from_millis(u64::try_from(wake_at.saturating_sub(now_ms)).unwrap_or(0))
}

fn wake_reason(now_ms: i64, next_tick_at: i64, next_removal_at: Option<i64>) -> Wake {
    Wake {
        removal_due: next_removal_at.is_some_and(|due| due <= now_ms),
        tick_due: now_ms >= next_tick_at,
    }
}

pub fn run<R: KvRepository>(board: &mut Board<R>) -> Result<(), Box<dyn Error>> {
    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    println!("{HELP}");
    show(board);

    let mut next_tick_at = now_epoch_ms() + ZEN_TICK_MS;
    loop {
        let timeout = wait_for(now_epoch_ms(), next_tick_at, board.next_removal_at());

        match rx.recv_timeout(timeout) {
            Ok(line) => match handle_line(board, &line) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => eprintln!("error: {err}"),
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        let now = now_epoch_ms();
        let wake = wake_reason(now, next_tick_at, board.next_removal_at());
        if !wake.removal_due && !wake.tick_due {
            continue;
        }

        match board.tick(now) {
            Ok(report) => {
                for id in &report.removed_notes {
                    println!("bubble {id} burst");
                }
                if wake.tick_due {
                    print!("\r{} ", render::tick_status_line(&report));
                    io::stdout().flush()?;
                    next_tick_at = now + ZEN_TICK_MS;
                }
            }
            Err(err) => {
                warn!("event=session_tick module=cli status=error error={err}");
                eprintln!("error: {err}");
            }
        }
    }

    Ok(())
}

fn handle_line<R: KvRepository>(board: &mut Board<R>, line: &str) -> Result<Flow, Box<dyn Error>> {
    let line = line.trim();
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match command {
        "" => {}
        "note" => {
            for ch in rest.chars() {
                board.note_input_key(ch.encode_utf8(&mut [0; 4]));
            }
            if let Some(id) = board.submit_note(rest)? {
                println!("added note {id}");
            }
        }
        "burst" => {
            let id = parse_id(rest)?;
            if board.burst_note(id, now_epoch_ms())? == BurstOutcome::AlreadyBursting {
                println!("bubble {id} is already bursting");
            }
            println!("bursts: {}", board.burst_count());
        }
        "task" => {
            if let Some(id) = board.submit_task(rest)? {
                println!("added task {id}");
            }
        }
        "toggle" => {
            let id = parse_id(rest)?;
            let completed = board.toggle_task(id)?;
            println!("task {id} {}", if completed { "done" } else { "open" });
        }
        "delete" => {
            let id = parse_id(rest)?;
            board.delete_task(id)?;
            println!("deleted task {id}");
        }
        "mood" => {
            let mood: Mood = rest.parse()?;
            board.select_mood(mood);
            for line in render::palette_lines(board.theme()) {
                println!("{line}");
            }
        }
        "zen" => {
            board.toggle_zen(now_epoch_ms());
            println!("[{}]", board.zen().button_label());
            if let Some(label) = board.zen().label() {
                println!("{label}");
            }
        }
        "show" => show(board),
        "help" => println!("{HELP}"),
        "quit" | "exit" => return Ok(Flow::Quit),
        other => println!("unknown command `{other}`; {HELP}"),
    }
    Ok(Flow::Continue)
}

fn parse_id(raw: &str) -> Result<ItemId, Box<dyn Error>> {
    let value = raw
        .parse::<u64>()
        .map_err(|err| format!("invalid id `{raw}`: {err}"))?;
    Ok(ItemId::new(value))
}

fn show<R: KvRepository>(board: &Board<R>) {
    for line in render::board_lines(board) {
        println!("{line}");
    }
}
