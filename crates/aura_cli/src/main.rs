//! Terminal front end for the Aura mood board.
//!
//! # Responsibility
//! - Resolve config, logging and the store, then hand one board to either a
//!   one-shot command or the interactive session.
//! - Report errors on stderr with a non-zero exit code instead of panicking.

mod commands;
mod render;
mod session;

use aura_core::db::open_db;
use aura_core::{
    default_log_level, init_logging, AudioEngine, AuraConfig, BellBackend, Board, BoardOptions,
    SqliteKvRepository,
};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "aura", version, about = "Personal mood board in the terminal")]
struct Cli {
    /// TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Store database file; overrides `store_path`.
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Absolute log directory; overrides `log_dir`.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    /// Disable sound cues.
    #[arg(long, global = true)]
    mute: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Note bubbles.
    #[command(subcommand)]
    Note(NoteCommand),
    /// To-do list.
    #[command(subcommand)]
    Todo(TodoCommand),
    /// Preview a palette's colors (not kept after exit; use `session` to
    /// keep one applied), or list palettes when no name is given.
    Mood { name: Option<String> },
    /// Show the clock and greeting.
    Clock,
    /// Show the whole board.
    Status,
    /// Interactive session with live ticks and zen mode.
    Session,
}

#[derive(Subcommand, Debug)]
enum NoteCommand {
    /// Add a note bubble.
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// List live bubbles.
    List,
    /// Burst a bubble by id.
    Burst { id: u64 },
}

#[derive(Subcommand, Debug)]
enum TodoCommand {
    /// Add a task.
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// List tasks.
    List,
    /// Flip a task's completion.
    Toggle { id: u64 },
    /// Delete a task.
    Delete { id: u64 },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("aura: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

/// Configured log level, or the build-mode default.
fn log_level(config: &AuraConfig) -> &str {
    config.log_level.as_deref().unwrap_or(default_log_level())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => AuraConfig::load(path)?,
        None => AuraConfig::default(),
    };
    if let Some(db) = cli.db {
        config.store_path = db;
    }
    if let Some(log_dir) = cli.log_dir {
        config.log_dir = Some(log_dir);
    }
    if cli.mute {
        config.audio_enabled = false;
    }
    config.validate()?;

    if let Some(log_dir) = &config.log_dir {
        init_logging(log_level(&config), log_dir)?;
    }

    let audio = if config.audio_enabled {
        AudioEngine::new(Box::new(BellBackend::new(std::io::stderr())))
    } else {
        AudioEngine::silent()
    };

    let conn = open_db(&config.store_path)?;
    let mut board = Board::open(
        SqliteKvRepository::new(&conn),
        audio,
        BoardOptions::from(&config),
    )?;

    match cli.command {
        Command::Note(NoteCommand::Add { text }) => commands::add_note(&mut board, &text.join(" ")),
        Command::Note(NoteCommand::List) => {
            commands::list_notes(&board);
            Ok(())
        }
        Command::Note(NoteCommand::Burst { id }) => {
            commands::burst_note(&mut board, id, config.burst_delay_ms)
        }
        Command::Todo(TodoCommand::Add { text }) => commands::add_task(&mut board, &text.join(" ")),
        Command::Todo(TodoCommand::List) => {
            commands::list_tasks(&board);
            Ok(())
        }
        Command::Todo(TodoCommand::Toggle { id }) => commands::toggle_task(&mut board, id),
        Command::Todo(TodoCommand::Delete { id }) => commands::delete_task(&mut board, id),
        Command::Mood { name } => commands::mood(&mut board, name.as_deref()),
        Command::Clock => {
            commands::clock(&board);
            Ok(())
        }
        Command::Status => {
            commands::status(&board);
            Ok(())
        }
        Command::Session => session::run(&mut board),
    }
}
