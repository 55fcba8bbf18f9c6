//! Game state module - owns the board, the active piece, the score and the lifecycle
//!
//! `GameState` is the only mutator of game data. It is driven by exactly two
//! kinds of stimuli, a gravity tick ([`GameState::on_tick`]) and a discrete
//! command ([`GameState::on_command`]), plus the lifecycle calls
//! [`GameState::start`] and [`GameState::toggle_pause`]. Each call runs to
//! completion before returning; the host must serialize them.
//!
//! The state never owns a timer. Instead [`GameState::fall_interval`] tells the
//! host whether its gravity clock should be running.

use std::time::Duration;

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::board::Board;
use crate::movement::{move_down, move_left, move_right, try_rotate};
use crate::pieces::{random_piece, ActivePiece};
use crate::rng::{PieceSource, UniformSource};
use crate::scoring::{line_clear_score, merge_and_clear};
use crate::snapshot::{active_cells, GameSnapshot};
use crate::types::{Command, GameStatus, LockEvent, SoundCue, FALL_INTERVAL_MS};

/// Cues produced by a single stimulus. Overflow is dropped; cues are advisory.
pub type CueBuffer = ArrayVec<SoundCue, 4>;

/// Result of a single soft drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved one row down
    Moved,
    /// The piece could not move and settled into the board; a new piece spawned
    Locked(LockEvent),
    /// The piece could not leave the spawn row: the game is over
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformSource<StdRng>> {
    board: Board,
    active: ActivePiece,
    score: u32,
    /// Rows cleared since the game started
    lines: u32,
    status: GameStatus,
    source: S,
    last_lock: Option<LockEvent>,
    cues: CueBuffer,
}

impl<S: PieceSource> GameState<S> {
    /// Create an idle game drawing pieces from `source`.
    ///
    /// A first piece is already spawned so the idle screen has something to
    /// show; [`GameState::start`] replaces it.
    pub fn new(mut source: S) -> Self {
        let active = random_piece(&mut source);
        Self {
            board: Board::new(),
            active,
            score: 0,
            lines: 0,
            status: GameStatus::Idle,
            source,
            last_lock: None,
            cues: CueBuffer::new(),
        }
    }

    /// A game already in progress on `board` with `active` falling.
    ///
    /// Useful for reproducing a position (tests, replays). The board and piece
    /// are taken as given; score and line count start at zero.
    pub fn playing_with(board: Board, active: ActivePiece, source: S) -> Self {
        Self {
            board,
            active,
            score: 0,
            lines: 0,
            status: GameStatus::Playing,
            source,
            last_lock: None,
            cues: CueBuffer::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Outcome of the most recent settle in this game, if any
    pub fn last_lock(&self) -> Option<LockEvent> {
        self.last_lock
    }

    /// Cues produced by the latest stimulus
    pub fn cues(&self) -> &[SoundCue] {
        &self.cues
    }

    /// Take the pending cues, leaving none behind.
    pub fn take_cues(&mut self) -> CueBuffer {
        std::mem::take(&mut self.cues)
    }

    /// Gravity interval the host clock should run at, or `None` to stop it.
    pub fn fall_interval(&self) -> Option<Duration> {
        self.status
            .is_playing()
            .then(|| Duration::from_millis(FALL_INTERVAL_MS as u64))
    }

    /// Begin a new game. Only valid from `Idle` or `GameOver`.
    ///
    /// Empties the board, resets score and line count and spawns a fresh piece.
    pub fn start(&mut self) -> bool {
        self.cues.clear();
        if !matches!(self.status, GameStatus::Idle | GameStatus::GameOver) {
            return false;
        }

        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.last_lock = None;
        self.active = random_piece(&mut self.source);
        self.status = GameStatus::Playing;
        info!(piece = self.active.kind.as_str(), "game started");
        true
    }

    /// Flip between `Playing` and `Paused`. No effect in any other status.
    pub fn toggle_pause(&mut self) -> bool {
        self.cues.clear();
        self.status = match self.status {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            GameStatus::Idle | GameStatus::GameOver => return false,
        };
        info!(status = self.status.as_str(), "pause toggled");
        true
    }

    /// Single play/pause control: starts a game when none is running,
    /// otherwise toggles pause.
    pub fn play_or_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Idle | GameStatus::GameOver => self.start(),
            GameStatus::Playing | GameStatus::Paused => self.toggle_pause(),
        }
    }

    /// Gravity tick from the host clock. Only effective while playing.
    pub fn on_tick(&mut self) -> bool {
        self.cues.clear();
        if !self.status.is_playing() {
            return false;
        }
        self.soft_drop();
        true
    }

    /// Input command. Ignored unless playing; returns whether state changed.
    pub fn on_command(&mut self, command: Command) -> bool {
        self.cues.clear();
        if !self.status.is_playing() {
            return false;
        }
        match command {
            Command::Left => self.move_left(),
            Command::Right => self.move_right(),
            Command::Rotate => self.rotate(),
            Command::Down => {
                self.soft_drop();
                true
            }
        }
    }

    /// Shift the active piece one column left if legal
    pub fn move_left(&mut self) -> bool {
        self.commit(move_left(&self.active, &self.board), SoundCue::Move)
    }

    /// Shift the active piece one column right if legal
    pub fn move_right(&mut self) -> bool {
        self.commit(move_right(&self.active, &self.board), SoundCue::Move)
    }

    /// Rotate the active piece clockwise if legal (no wall kicks)
    pub fn rotate(&mut self) -> bool {
        self.commit(try_rotate(&self.active, &self.board), SoundCue::Rotate)
    }

    /// Move the active piece one row down, locking it when it cannot move.
    ///
    /// A piece that cannot move down while still at `y <= 0` ends the game and
    /// stays where it is as the final rendered piece.
    pub fn soft_drop(&mut self) -> DropOutcome {
        if let Some(moved) = move_down(&self.active, &self.board) {
            self.active = moved;
            return DropOutcome::Moved;
        }

        if self.active.y <= 0 {
            self.status = GameStatus::GameOver;
            self.push_cue(SoundCue::GameOver);
            info!(score = self.score, lines = self.lines, "game over");
            return DropOutcome::GameOver;
        }

        DropOutcome::Locked(self.lock_active())
    }

    /// Merge the active piece, clear rows, score them and spawn the next piece.
    fn lock_active(&mut self) -> LockEvent {
        let (board, lines_cleared) = merge_and_clear(&self.board, &self.active);
        let score_delta = line_clear_score(lines_cleared);

        self.board = board;
        self.score = self.score.saturating_add(score_delta);
        self.lines = self.lines.saturating_add(lines_cleared);

        if lines_cleared > 0 {
            self.push_cue(SoundCue::LineClear);
        }
        self.push_cue(SoundCue::Lock);

        let event = LockEvent {
            lines_cleared,
            score_delta,
        };
        self.last_lock = Some(event);

        debug!(
            piece = self.active.kind.as_str(),
            x = self.active.x,
            y = self.active.y,
            lines_cleared,
            score = self.score,
            "piece locked"
        );

        self.active = random_piece(&mut self.source);
        debug!(piece = self.active.kind.as_str(), "piece spawned");
        event
    }

    fn commit(&mut self, candidate: Option<ActivePiece>, cue: SoundCue) -> bool {
        match candidate {
            Some(piece) => {
                self.active = piece;
                self.push_cue(cue);
                true
            }
            None => false,
        }
    }

    fn push_cue(&mut self, cue: SoundCue) {
        let _ = self.cues.try_push(cue);
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            active: active_cells(&self.active),
            kind: self.active.kind,
            score: self.score,
            lines: self.lines,
            status: self.status,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(UniformSource::from_entropy())
    }
}
