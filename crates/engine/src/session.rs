//! Session - the single serialization point between the host and the game
//!
//! Every stimulus goes through [`Session::handle`], which runs it to
//! completion, then re-syncs the gravity clock with what the game asks for and
//! forwards the cues it produced to the audio output.

use std::time::{Duration, Instant};

use tracing::info;

use crate::audio::AudioOutput;
use crate::clock::GravityClock;
use crate::core::rng::PieceSource;
use crate::core::{GameSnapshot, GameState};
use crate::types::Command;

/// One unit of work for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stimulus {
    /// Gravity tick from the clock
    Tick,
    Command(Command),
    Start,
    TogglePause,
    /// Start when no game is running, otherwise toggle pause
    PlayPause,
    ToggleMute,
}

#[derive(Debug)]
pub struct Session<S: PieceSource> {
    game: GameState<S>,
    clock: GravityClock,
    audio: AudioOutput,
}

impl<S: PieceSource> Session<S> {
    pub fn new(game: GameState<S>, audio: AudioOutput) -> Self {
        Self {
            game,
            clock: GravityClock::new(),
            audio,
        }
    }

    pub fn game(&self) -> &GameState<S> {
        &self.game
    }

    pub fn clock(&self) -> &GravityClock {
        &self.clock
    }

    pub fn audio(&self) -> &AudioOutput {
        &self.audio
    }

    pub fn is_muted(&self) -> bool {
        self.audio.is_muted()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// Process one stimulus. Returns whether anything visible changed.
    pub fn handle(&mut self, stimulus: Stimulus, now: Instant) -> bool {
        let changed = match stimulus {
            Stimulus::Tick => self.game.on_tick(),
            Stimulus::Command(command) => self.game.on_command(command),
            Stimulus::Start => self.game.start(),
            Stimulus::TogglePause => self.game.toggle_pause(),
            Stimulus::PlayPause => self.game.play_or_pause(),
            Stimulus::ToggleMute => {
                let muted = self.audio.toggle_mute();
                info!(muted, "mute toggled");
                true
            }
        };

        self.clock.sync(self.game.fall_interval(), now);
        let cues = self.game.take_cues();
        self.audio.dispatch(&cues);
        changed
    }

    /// Deliver a gravity tick if one is due at `now`.
    pub fn poll_clock(&mut self, now: Instant) -> bool {
        if self.clock.poll(now) {
            self.handle(Stimulus::Tick, now)
        } else {
            false
        }
    }

    /// How long the host may wait for input before the next tick is due
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.clock.time_until_due(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::SequenceSource;
    use crate::types::{GameStatus, PieceKind};

    const SECOND: Duration = Duration::from_millis(1000);

    fn session() -> Session<SequenceSource> {
        Session::new(
            GameState::new(SequenceSource::repeat(PieceKind::O)),
            AudioOutput::silent(),
        )
    }

    #[test]
    fn idle_session_has_no_clock() {
        let mut session = session();
        let now = Instant::now();
        assert_eq!(session.time_until_tick(now), None);
        assert!(!session.poll_clock(now + SECOND * 3));
        assert_eq!(session.game().status(), GameStatus::Idle);
    }

    #[test]
    fn start_arms_clock_and_ticks_fall() {
        let mut session = session();
        let t0 = Instant::now();
        assert!(session.handle(Stimulus::PlayPause, t0));
        assert_eq!(session.time_until_tick(t0), Some(SECOND));

        assert!(!session.poll_clock(t0 + Duration::from_millis(500)));
        assert!(session.poll_clock(t0 + SECOND));
        assert_eq!(session.game().active().y, 1);
    }

    #[test]
    fn pause_tears_down_clock() {
        let mut session = session();
        let t0 = Instant::now();
        session.handle(Stimulus::Start, t0);
        session.handle(Stimulus::TogglePause, t0 + Duration::from_millis(200));

        assert!(!session.clock().is_armed());
        assert!(!session.poll_clock(t0 + SECOND * 5));
        assert_eq!(session.game().active().y, 0);

        let t1 = t0 + SECOND * 6;
        session.handle(Stimulus::PlayPause, t1);
        assert_eq!(session.game().status(), GameStatus::Playing);
        assert_eq!(session.time_until_tick(t1), Some(SECOND));
    }

    #[test]
    fn commands_do_not_postpone_gravity() {
        let mut session = session();
        let t0 = Instant::now();
        session.handle(Stimulus::Start, t0);
        session.handle(
            Stimulus::Command(Command::Left),
            t0 + Duration::from_millis(900),
        );
        assert!(session.poll_clock(t0 + SECOND));
    }

    #[test]
    fn mute_toggle_is_independent_of_game() {
        let mut session = session();
        let now = Instant::now();
        assert!(!session.is_muted());
        assert!(session.handle(Stimulus::ToggleMute, now));
        assert!(session.is_muted());
        assert_eq!(session.game().status(), GameStatus::Idle);
    }
}
