//! Audio backend implementations.

use super::{AudioBackend, AudioCue, AudioError, AudioResult, CueSpec};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

const BELL: &[u8] = b"\x07";

/// Backend that accepts every cue and produces nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentBackend;

impl AudioBackend for SilentBackend {
    fn create_context(&mut self) -> AudioResult<()> {
        Ok(())
    }

    fn is_suspended(&self) -> bool {
        false
    }

    fn resume(&mut self) -> AudioResult<()> {
        Ok(())
    }

    fn play(&mut self, _cue: AudioCue, _spec: &CueSpec) -> AudioResult<()> {
        Ok(())
    }
}

/// Terminal backend: rings the bell for pops and bursts.
///
/// Clicks are dropped; a bell per keystroke is unusable in a terminal.
pub struct BellBackend<W: Write> {
    out: W,
}

impl<W: Write> BellBackend<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> AudioBackend for BellBackend<W> {
    fn create_context(&mut self) -> AudioResult<()> {
        Ok(())
    }

    fn is_suspended(&self) -> bool {
        false
    }

    fn resume(&mut self) -> AudioResult<()> {
        Ok(())
    }

    fn play(&mut self, cue: AudioCue, _spec: &CueSpec) -> AudioResult<()> {
        if cue == AudioCue::Click {
            return Ok(());
        }
        self.out
            .write_all(BELL)
            .and_then(|()| self.out.flush())
            .map_err(|err| AudioError::Playback(err.to_string()))
    }
}

#[derive(Debug, Default)]
struct CueLogInner {
    cues: Vec<AudioCue>,
    contexts_created: usize,
    resumes: usize,
}

/// Shared view of what a [`RecordingBackend`] has observed.
#[derive(Debug, Clone, Default)]
pub struct CueLog {
    inner: Rc<RefCell<CueLogInner>>,
}

impl CueLog {
    pub fn cues(&self) -> Vec<AudioCue> {
        self.inner.borrow().cues.clone()
    }

    pub fn contexts_created(&self) -> usize {
        self.inner.borrow().contexts_created
    }

    pub fn resumes(&self) -> usize {
        self.inner.borrow().resumes
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().cues.clear();
    }
}

/// Backend that records every played cue; used by tests and dry runs.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    log: CueLog,
    suspended: bool,
    unavailable: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context starts suspended and must be resumed once.
    pub fn start_suspended(mut self) -> Self {
        self.suspended = true;
        self
    }

    /// Context creation always fails.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    pub fn log(&self) -> CueLog {
        self.log.clone()
    }
}

impl AudioBackend for RecordingBackend {
    fn create_context(&mut self) -> AudioResult<()> {
        if self.unavailable {
            return Err(AudioError::Unavailable("blocked before user gesture".to_string()));
        }
        self.log.inner.borrow_mut().contexts_created += 1;
        Ok(())
    }

    fn is_suspended(&self) -> bool {
        self.suspended
    }

    fn resume(&mut self) -> AudioResult<()> {
        self.suspended = false;
        self.log.inner.borrow_mut().resumes += 1;
        Ok(())
    }

    fn play(&mut self, cue: AudioCue, _spec: &CueSpec) -> AudioResult<()> {
        self.log.inner.borrow_mut().cues.push(cue);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BellBackend;
    use crate::audio::{AudioBackend, AudioCue};

    #[test]
    fn bell_rings_for_pop_and_burst_only() {
        let mut backend = BellBackend::new(Vec::new());
        for cue in [AudioCue::Pop, AudioCue::Click, AudioCue::Burst] {
            backend.play(cue, &cue.spec()).unwrap();
        }
        assert_eq!(backend.out, b"\x07\x07".to_vec());
    }
}
