//! Audio module - advisory sound cues
//!
//! Cues are fire-and-forget. A sink may fail; [`AudioOutput::dispatch`] logs
//! the failure and moves on, so nothing here can affect game state.

use std::fmt;
use std::io::{self, Write};

use anyhow::Result;
use tracing::warn;

use crate::types::SoundCue;

/// Something that can play a cue
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue) -> Result<()>;
}

impl<S: AudioSink + ?Sized> AudioSink for Box<S> {
    fn play(&mut self, cue: SoundCue) -> Result<()> {
        (**self).play(cue)
    }
}

/// Discards every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) -> Result<()> {
        Ok(())
    }
}

/// Rings the terminal bell for the cues worth interrupting the player for.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn rings_for(cue: SoundCue) -> bool {
        matches!(cue, SoundCue::LineClear | SoundCue::GameOver)
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: SoundCue) -> Result<()> {
        if Self::rings_for(cue) {
            self.out.write_all(b"\x07")?;
            self.out.flush()?;
        }
        Ok(())
    }
}

/// A sink plus the player's mute switch
pub struct AudioOutput {
    sink: Box<dyn AudioSink>,
    muted: bool,
    failures: u64,
}

impl AudioOutput {
    pub fn new(sink: Box<dyn AudioSink>, muted: bool) -> Self {
        Self {
            sink,
            muted,
            failures: 0,
        }
    }

    pub fn silent() -> Self {
        Self::new(Box::new(NullAudio), false)
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Flip the mute switch and return the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Number of cues the sink failed to play
    pub fn failures(&self) -> u64 {
        self.failures
    }

    /// Play `cues` in order unless muted. Returns how many played successfully.
    pub fn dispatch(&mut self, cues: &[SoundCue]) -> usize {
        if self.muted {
            return 0;
        }

        let mut played = 0;
        for &cue in cues {
            match self.sink.play(cue) {
                Ok(()) => played += 1,
                Err(err) => {
                    self.failures += 1;
                    warn!(cue = cue.as_str(), error = %err, "audio cue failed");
                }
            }
        }
        played
    }
}

impl fmt::Debug for AudioOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioOutput")
            .field("muted", &self.muted)
            .field("failures", &self.failures)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<SoundCue>>>);

    impl AudioSink for Recorder {
        fn play(&mut self, cue: SoundCue) -> Result<()> {
            self.0.borrow_mut().push(cue);
            Ok(())
        }
    }

    struct Broken;

    impl AudioSink for Broken {
        fn play(&mut self, _cue: SoundCue) -> Result<()> {
            anyhow::bail!("no audio device")
        }
    }

    #[test]
    fn dispatch_plays_in_order() {
        let recorder = Recorder::default();
        let mut audio = AudioOutput::new(Box::new(recorder.clone()), false);

        let played = audio.dispatch(&[SoundCue::LineClear, SoundCue::Lock]);
        assert_eq!(played, 2);
        assert_eq!(
            recorder.0.borrow().as_slice(),
            &[SoundCue::LineClear, SoundCue::Lock]
        );
    }

    #[test]
    fn muted_output_plays_nothing() {
        let recorder = Recorder::default();
        let mut audio = AudioOutput::new(Box::new(recorder.clone()), false);
        assert!(audio.toggle_mute());

        assert_eq!(audio.dispatch(&[SoundCue::Move]), 0);
        assert!(recorder.0.borrow().is_empty());

        assert!(!audio.toggle_mute());
        assert_eq!(audio.dispatch(&[SoundCue::Move]), 1);
    }

    #[test]
    fn sink_failures_are_swallowed() {
        let mut audio = AudioOutput::new(Box::new(Broken), false);
        assert_eq!(audio.dispatch(&[SoundCue::Move, SoundCue::GameOver]), 0);
        assert_eq!(audio.failures(), 2);
    }

    #[test]
    fn bell_rings_only_for_clear_and_game_over() {
        let mut bell = TerminalBell::new(Vec::new());
        for cue in [
            SoundCue::Move,
            SoundCue::Rotate,
            SoundCue::Lock,
            SoundCue::LineClear,
            SoundCue::GameOver,
        ] {
            bell.play(cue).unwrap();
        }
        assert_eq!(bell.into_inner(), b"\x07\x07".to_vec());
    }
}
