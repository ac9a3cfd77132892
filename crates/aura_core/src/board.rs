//! Application state for one mood board.
//!
//! # Responsibility
//! - Own every component's canonical state, the store and the audio engine.
//! - Turn input and tick events into mutations, snapshot writes and cues.
//!
//! # Invariants
//! - Both lists are rebuilt from the store before any event is handled, and
//!   replay never fires a cue.
//! - Task mutations persist the full task list before returning.
//! - Note creation persists immediately; note removal persists on the tick
//!   that passes the burst deadline.
//! - The burst counter is persisted on every increment and never decreases.

use crate::audio::{AudioCue, AudioEngine};
use crate::config::AuraConfig;
use crate::model::item::ItemId;
use crate::model::mood::Mood;
use crate::model::normalize_input;
use crate::model::note::Note;
use crate::model::task::Task;
use crate::repo::board_store::BoardStore;
use crate::repo::kv_repo::{KvRepository, RepoError};
use crate::service::clock_service::{clock_reading, ClockReading};
use crate::service::note_service::{BurstOutcome, NoteBubbles, DEFAULT_BURST_DELAY_MS};
use crate::service::theme_service::Theme;
use crate::service::todo_service::TodoList;
use crate::service::zen_service::ZenTimer;
use chrono::{Local, NaiveTime, TimeZone};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Debug)]
pub enum BoardError {
    Repo(RepoError),
    NoteNotFound(ItemId),
    TaskNotFound(ItemId),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for BoardError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Startup settings for a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardOptions {
    pub burst_delay_ms: u64,
    pub mood: Mood,
    pub greeting_name: String,
    /// Fixed seed for bubble placement; entropy-seeded when `None`.
    pub rng_seed: Option<u64>,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            burst_delay_ms: DEFAULT_BURST_DELAY_MS,
            mood: Mood::Aurora,
            greeting_name: String::new(),
            rng_seed: None,
        }
    }
}

impl From<&AuraConfig> for BoardOptions {
    fn from(config: &AuraConfig) -> Self {
        Self {
            burst_delay_ms: config.burst_delay_ms,
            mood: config.mood(),
            greeting_name: config.greeting_name.clone(),
            rng_seed: None,
        }
    }
}

/// What one tick changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// Bubbles whose burst animation finished on this tick.
    pub removed_notes: Vec<ItemId>,
    /// Current zen session label, when zen mode is active.
    pub zen_label: Option<String>,
    /// Clock region text for the tick's local time.
    pub clock: ClockReading,
}

/// One mood board: canonical state plus its store and audio.
pub struct Board<R: KvRepository> {
    store: BoardStore<R>,
    notes: NoteBubbles,
    todos: TodoList,
    burst_count: u64,
    zen: ZenTimer,
    theme: Theme,
    audio: AudioEngine,
    rng: StdRng,
    greeting_name: String,
}

impl<R: KvRepository> Board<R> {
    /// Loads persisted entries from `repo` and rebuilds the board.
    ///
    /// # Errors
    /// - Returns an error when the repository cannot be read. Malformed
    ///   values are not errors; they load as empty.
    pub fn open(repo: R, audio: AudioEngine, options: BoardOptions) -> BoardResult<Self> {
        let mut store = BoardStore::new(repo);
        let stored = store.load()?;
        let rng = match options.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut board = Self {
            store,
            notes: NoteBubbles::new(options.burst_delay_ms),
            todos: TodoList::new(),
            burst_count: stored.burst_count,
            zen: ZenTimer::new(),
            theme: Theme::new(options.mood),
            audio,
            rng,
            greeting_name: options.greeting_name,
        };

        for text in &stored.notes {
            board.notes.create(text.as_str(), &mut board.rng);
        }
        for task in &stored.tasks {
            board.todos.add(task.text.as_str(), task.completed);
        }
        board.persist_notes()?;
        board.persist_tasks()?;

        info!(
            "event=board_open module=board status=ok notes={} tasks={} burst_count={}",
            stored.notes.len(),
            stored.tasks.len(),
            stored.burst_count
        );
        Ok(board)
    }

    pub fn notes(&self) -> &[Note] {
        self.notes.notes()
    }

    pub fn tasks(&self) -> &[Task] {
        self.todos.tasks()
    }

    pub fn burst_count(&self) -> u64 {
        self.burst_count
    }

    pub fn zen(&self) -> &ZenTimer {
        &self.zen
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn store(&self) -> &BoardStore<R> {
        &self.store
    }

    /// Earliest time a pending bubble removal is due.
    pub fn next_removal_at(&self) -> Option<i64> {
        self.notes.next_removal_at()
    }

    /// Handles the note submit control. Blank input creates nothing.
    pub fn submit_note(&mut self, raw: &str) -> BoardResult<Option<ItemId>> {
        match normalize_input(raw) {
            Some(text) => self.create_note(text, true).map(Some),
            None => {
                debug!("event=note_submit module=board status=skip reason=blank_input");
                Ok(None)
            }
        }
    }

    /// Adds a bubble and rewrites the note list.
    pub fn create_note(&mut self, text: impl Into<String>, play_effect: bool) -> BoardResult<ItemId> {
        if play_effect {
            self.audio.play(AudioCue::Pop);
        }
        let id = self.notes.create(text, &mut self.rng);
        self.persist_notes()?;
        info!("event=note_create module=board status=ok note_id={id}");
        Ok(id)
    }

    /// Handles a click on a bubble.
    ///
    /// Starts the fade, bumps and persists the counter. The bubble leaves the
    /// board on the first [`Board::tick`] at or after the returned deadline.
    pub fn burst_note(&mut self, id: ItemId, now_ms: i64) -> BoardResult<BurstOutcome> {
        let outcome = self
            .notes
            .burst(id, now_ms)
            .ok_or(BoardError::NoteNotFound(id))?;
        if outcome == BurstOutcome::AlreadyBursting {
            debug!("event=note_burst module=board status=skip note_id={id} reason=already_bursting");
            return Ok(outcome);
        }

        self.audio.play(AudioCue::Burst);
        self.burst_count = self.burst_count.saturating_add(1);
        self.store.save_count(self.burst_count)?;
        info!(
            "event=note_burst module=board status=ok note_id={} burst_count={}",
            id, self.burst_count
        );
        Ok(outcome)
    }

    /// Handles the task submit control. Blank input creates nothing.
    pub fn submit_task(&mut self, raw: &str) -> BoardResult<Option<ItemId>> {
        match normalize_input(raw) {
            Some(text) => self.add_task(text, false).map(Some),
            None => {
                debug!("event=task_submit module=board status=skip reason=blank_input");
                Ok(None)
            }
        }
    }

    pub fn add_task(&mut self, text: impl Into<String>, completed: bool) -> BoardResult<ItemId> {
        let id = self.todos.add(text, completed);
        self.persist_tasks()?;
        info!("event=task_create module=board status=ok task_id={id}");
        Ok(id)
    }

    /// Flips completion and persists; returns the new flag.
    pub fn toggle_task(&mut self, id: ItemId) -> BoardResult<bool> {
        let completed = self.todos.toggle(id).ok_or(BoardError::TaskNotFound(id))?;
        self.persist_tasks()?;
        info!("event=task_toggle module=board status=ok task_id={id} completed={completed}");
        Ok(completed)
    }

    pub fn delete_task(&mut self, id: ItemId) -> BoardResult<()> {
        self.todos.delete(id).ok_or(BoardError::TaskNotFound(id))?;
        self.audio.play(AudioCue::Burst);
        self.persist_tasks()?;
        info!("event=task_delete module=board status=ok task_id={id}");
        Ok(())
    }

    /// Keystroke in the note input: printable characters and Backspace click.
    pub fn note_input_key(&mut self, key: &str) {
        if key.chars().count() == 1 || key == "Backspace" {
            self.audio.play(AudioCue::Click);
        }
    }

    pub fn select_mood(&mut self, mood: Mood) {
        self.theme.apply(mood);
        info!("event=mood_select module=board status=ok mood={mood}");
    }

    /// Enters or leaves zen mode; returns whether zen is now active.
    pub fn toggle_zen(&mut self, now_ms: i64) -> bool {
        self.audio.warm_up();
        let active = self.zen.toggle(now_ms);
        info!("event=zen_toggle module=board status=ok active={active}");
        active
    }

    /// Recurring tick at the local time of `now_ms`.
    pub fn tick(&mut self, now_ms: i64) -> BoardResult<TickReport> {
        let local_time = Local
            .timestamp_millis_opt(now_ms)
            .single()
            .map(|at| at.time())
            .unwrap_or_else(|| Local::now().time());
        self.tick_at(now_ms, local_time)
    }

    /// Recurring tick: finishes due bursts, refreshes the zen label and
    /// reads the clock for `local_time`.
    pub fn tick_at(&mut self, now_ms: i64, local_time: NaiveTime) -> BoardResult<TickReport> {
        let removed_notes = self.notes.remove_due(now_ms);
        if !removed_notes.is_empty() {
            self.persist_notes()?;
            info!(
                "event=note_remove module=board status=ok removed={} remaining={}",
                removed_notes.len(),
                self.notes.notes().len()
            );
        }

        self.zen.tick(now_ms);
        Ok(TickReport {
            removed_notes,
            zen_label: self.zen.label(),
            clock: self.clock(local_time),
        })
    }

    /// Clock region text for a local wall-clock time.
    pub fn clock(&self, local_time: NaiveTime) -> ClockReading {
        clock_reading(local_time, &self.greeting_name)
    }

    fn persist_notes(&mut self) -> BoardResult<()> {
        self.store.save_notes(self.notes.texts())?;
        Ok(())
    }

    fn persist_tasks(&mut self) -> BoardResult<()> {
        self.store.save_tasks(&self.todos.stored())?;
        Ok(())
    }
}
