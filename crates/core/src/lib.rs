//! Core game logic - pure, deterministic and testable
//!
//! This crate contains the rules of the falling-block game: the board, the
//! piece catalog, collision, movement, settling and scoring, and the lifecycle
//! state machine. It owns no timer and performs no I/O; the host drives it
//! with ticks and commands and reads back snapshots and sound cues.
//!
//! # Module Structure
//!
//! - [`board`]: fixed 10x20 well with row clearing
//! - [`pieces`]: shape matrices, clockwise rotation and the active piece
//! - [`rng`]: pluggable piece sources (uniform random or a fixed sequence)
//! - [`collision`]: the single legality check for placements
//! - [`movement`]: validated shifts and rotation, no wall kicks
//! - [`scoring`]: merge, clear and linear line scoring
//! - [`game_state`]: lifecycle and stimulus handling
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - Every piece spawns at (3, 0); the next kind is drawn uniformly at random.
//! - Gravity moves the piece down once per second while playing.
//! - A piece that cannot move down settles; full rows are removed and each is
//!   worth 100 points.
//! - A piece that cannot move down while its origin is still at the top row
//!   ends the game.
//!
//! # Example
//!
//! ```
//! use blocktris_core::rng::SequenceSource;
//! use blocktris_core::types::{Command, GameStatus, PieceKind};
//! use blocktris_core::GameState;
//!
//! let mut game = GameState::new(SequenceSource::repeat(PieceKind::O));
//! game.start();
//! assert_eq!(game.status(), GameStatus::Playing);
//!
//! game.on_command(Command::Right);
//! game.on_tick();
//! assert_eq!((game.active().x, game.active().y), (4, 1));
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod movement;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blocktris_types as types;

pub use board::Board;
pub use collision::collides;
pub use game_state::{CueBuffer, DropOutcome, GameState};
pub use pieces::{get_shape, random_piece, ActivePiece, Shape};
pub use rng::{PieceSource, SequenceSource, UniformSource};
pub use scoring::{line_clear_score, merge_and_clear};
pub use snapshot::{ActiveCell, GameSnapshot};
