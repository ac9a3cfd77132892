//! Ambient sound cues.
//!
//! # Responsibility
//! - Name the three board cues and describe how each one sounds.
//! - Lazily bring up an audio backend on first use and resume it on demand.
//!
//! # Invariants
//! - Audio failures never propagate: a failed cue is logged and skipped.
//! - Backend creation is attempted at most once per successful init; a failed
//!   creation is retried on the next cue.

mod backends;

pub use backends::{BellBackend, CueLog, RecordingBackend, SilentBackend};

use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AudioResult<T> = Result<T, AudioError>;

/// Backend-level audio failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// The platform refused to create an audio context.
    Unavailable(String),
    /// The context exists but could not be resumed.
    ResumeFailed(String),
    /// Playback of one cue failed.
    Playback(String),
}

impl Display for AudioError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "audio unavailable: {msg}"),
            Self::ResumeFailed(msg) => write!(f, "audio resume failed: {msg}"),
            Self::Playback(msg) => write!(f, "audio playback failed: {msg}"),
        }
    }
}

impl Error for AudioError {}

/// Named sound effects fired by board actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// Sampled pop played when a bubble appears.
    Pop,
    /// Decaying triangle tone played on dismissals and deletes.
    Burst,
    /// Short sine tick played on note-input keystrokes.
    Click,
}

impl AudioCue {
    pub fn name(self) -> &'static str {
        match self {
            Self::Pop => "pop",
            Self::Burst => "burst",
            Self::Click => "click",
        }
    }

    pub fn spec(self) -> CueSpec {
        match self {
            Self::Pop => CueSpec::Sample {
                name: "pop-sfx",
                restart: true,
            },
            Self::Burst => CueSpec::Tone(ToneSpec {
                waveform: Waveform::Triangle,
                frequency_hz: 300.0,
                start_gain: 0.8,
                end_gain: Some(0.01),
                duration_ms: 300,
            }),
            Self::Click => CueSpec::Tone(ToneSpec {
                waveform: Waveform::Sine,
                frequency_hz: 1600.0,
                start_gain: 0.08,
                end_gain: None,
                duration_ms: 50,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

/// Synthesized tone parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub waveform: Waveform,
    pub frequency_hz: f32,
    pub start_gain: f32,
    /// Exponential ramp target reached at `duration_ms`; `None` keeps gain flat.
    pub end_gain: Option<f32>,
    pub duration_ms: u32,
}

/// How a cue is produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CueSpec {
    /// Pre-recorded sample; `restart` rewinds it instead of layering plays.
    Sample { name: &'static str, restart: bool },
    Tone(ToneSpec),
}

/// Platform audio seam.
pub trait AudioBackend {
    /// Creates the underlying audio context.
    fn create_context(&mut self) -> AudioResult<()>;
    /// Whether the platform has suspended the context.
    fn is_suspended(&self) -> bool;
    fn resume(&mut self) -> AudioResult<()>;
    fn play(&mut self, cue: AudioCue, spec: &CueSpec) -> AudioResult<()>;
}

/// Lazily-initialized cue player owned by the board.
pub struct AudioEngine {
    backend: Box<dyn AudioBackend>,
    context_ready: bool,
}

impl AudioEngine {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            context_ready: false,
        }
    }

    /// Engine that never makes a sound.
    pub fn silent() -> Self {
        Self::new(Box::new(SilentBackend))
    }

    pub fn is_initialized(&self) -> bool {
        self.context_ready
    }

    /// Brings the backend up without playing anything.
    ///
    /// Failures are logged and otherwise ignored.
    pub fn warm_up(&mut self) {
        if let Err(err) = self.ensure_ready() {
            warn!("event=audio_init module=audio status=error error={err}");
        }
    }

    /// Fires one cue, skipping it silently when audio is unavailable.
    pub fn play(&mut self, cue: AudioCue) {
        let result = self
            .ensure_ready()
            .and_then(|()| self.backend.play(cue, &cue.spec()));

        match result {
            Ok(()) => debug!("event=audio_cue module=audio status=ok cue={}", cue.name()),
            Err(err) => warn!(
                "event=audio_cue module=audio status=skip cue={} error={}",
                cue.name(),
                err
            ),
        }
    }

    fn ensure_ready(&mut self) -> AudioResult<()> {
        if !self.context_ready {
            self.backend.create_context()?;
            self.context_ready = true;
        }
        if self.backend.is_suspended() {
            self.backend.resume()?;
        }
        Ok(())
    }
}
