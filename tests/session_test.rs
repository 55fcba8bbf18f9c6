//! Host-side tests: key mapping, clock-driven gravity and audio dispatch

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use blocktris::core::rng::SequenceSource;
use blocktris::core::{ActivePiece, Board, GameState};
use blocktris::engine::{AudioOutput, AudioSink, Session, Stimulus};
use blocktris::input::map_key;
use blocktris::stimulus_for;
use blocktris::types::{Color, Command, GameStatus, PieceKind, SoundCue};

const SECOND: Duration = Duration::from_millis(1000);

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<SoundCue>>>);

impl AudioSink for Recorder {
    fn play(&mut self, cue: SoundCue) -> Result<()> {
        self.0.borrow_mut().push(cue);
        Ok(())
    }
}

struct Failing;

impl AudioSink for Failing {
    fn play(&mut self, _cue: SoundCue) -> Result<()> {
        anyhow::bail!("device unplugged")
    }
}

fn press(session: &mut Session<SequenceSource>, code: KeyCode, now: Instant) -> bool {
    let action = map_key(KeyEvent::from(code)).expect("mapped key");
    session.handle(stimulus_for(action), now)
}

#[test]
fn keys_drive_the_game() {
    let mut session = Session::new(
        GameState::new(SequenceSource::repeat(PieceKind::O)),
        AudioOutput::silent(),
    );
    let t0 = Instant::now();

    // Arrow keys do nothing before the game starts.
    assert!(!press(&mut session, KeyCode::Left, t0));

    assert!(press(&mut session, KeyCode::Char('p'), t0));
    assert_eq!(session.game().status(), GameStatus::Playing);

    assert!(press(&mut session, KeyCode::Left, t0));
    assert!(press(&mut session, KeyCode::Down, t0));
    assert_eq!((session.game().active().x, session.game().active().y), (2, 1));

    assert!(press(&mut session, KeyCode::Char('p'), t0));
    assert_eq!(session.game().status(), GameStatus::Paused);

    // Restart only applies to idle or finished games.
    assert!(!press(&mut session, KeyCode::Char('r'), t0));
    assert_eq!(session.game().status(), GameStatus::Paused);
}

#[test]
fn gravity_follows_the_clock() {
    let mut session = Session::new(
        GameState::new(SequenceSource::repeat(PieceKind::T)),
        AudioOutput::silent(),
    );
    let t0 = Instant::now();
    session.handle(Stimulus::Start, t0);

    for n in 1..=5u32 {
        assert!(!session.poll_clock(t0 + SECOND * n - Duration::from_millis(1)));
        assert!(session.poll_clock(t0 + SECOND * n));
        assert_eq!(session.game().active().y, n as i8);
    }
}

#[test]
fn game_over_stops_the_clock_and_plays_cue() {
    let recorder = Recorder::default();
    let mut board = Board::new();
    board.fill(4, 2, Color::Red);
    let game = GameState::playing_with(
        board,
        ActivePiece::new(PieceKind::O),
        SequenceSource::repeat(PieceKind::O),
    );
    let mut session = Session::new(game, AudioOutput::new(Box::new(recorder.clone()), false));
    let t0 = Instant::now();

    session.handle(Stimulus::Command(Command::Down), t0);
    assert_eq!(session.game().status(), GameStatus::GameOver);
    assert!(!session.clock().is_armed());
    assert_eq!(session.time_until_tick(t0), None);
    assert_eq!(recorder.0.borrow().as_slice(), &[SoundCue::GameOver]);

    // Play/pause from game over starts a new game and re-arms gravity.
    session.handle(Stimulus::PlayPause, t0 + SECOND);
    assert_eq!(session.game().status(), GameStatus::Playing);
    assert_eq!(session.time_until_tick(t0 + SECOND), Some(SECOND));
}

#[test]
fn line_clear_plays_clear_then_lock() {
    let recorder = Recorder::default();
    let board = Board::from_ascii(&["###..#####", "###..#####"]);
    let game = GameState::playing_with(
        board,
        ActivePiece::at(PieceKind::O, 3, 18),
        SequenceSource::repeat(PieceKind::T),
    );
    let mut session = Session::new(game, AudioOutput::new(Box::new(recorder.clone()), false));

    session.handle(Stimulus::Tick, Instant::now());
    assert_eq!(session.game().score(), 200);
    assert_eq!(
        recorder.0.borrow().as_slice(),
        &[SoundCue::LineClear, SoundCue::Lock]
    );
}

#[test]
fn muted_and_failing_audio_never_affect_the_game() {
    let recorder = Recorder::default();
    let mut muted = Session::new(
        GameState::new(SequenceSource::repeat(PieceKind::I)),
        AudioOutput::new(Box::new(recorder.clone()), true),
    );
    let mut broken = Session::new(
        GameState::new(SequenceSource::repeat(PieceKind::I)),
        AudioOutput::new(Box::new(Failing), false),
    );
    let t0 = Instant::now();

    for session in [&mut muted, &mut broken] {
        session.handle(Stimulus::Start, t0);
        session.handle(Stimulus::Command(Command::Left), t0);
        session.handle(Stimulus::Command(Command::Rotate), t0);
    }

    assert!(recorder.0.borrow().is_empty());
    assert!(broken.audio().failures() >= 2);
    assert_eq!(muted.game().active(), broken.game().active());
    assert_eq!(muted.game().status(), GameStatus::Playing);
}
