//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the engine core, the host
//! runtime, input mapping and rendering. Everything here is plain data with no
//! external dependencies.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn position**: (3, 0) for every piece
//!
//! # Timing
//!
//! Gravity runs at a single fixed interval (`FALL_INTERVAL_MS`). There are no
//! levels and no speed curve.
//!
//! # Examples
//!
//! ```
//! use blocktris_types::{Color, Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.color(), Color::Purple);
//!
//! // Arrow key names are accepted as command tokens.
//! assert_eq!(Command::from_str("ArrowUp"), Some(Command::Rotate));
//! assert_eq!(Command::from_str("space"), None);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Column where every new piece's bounding box starts
pub const SPAWN_X: i8 = 3;

/// Row where every new piece's bounding box starts
pub const SPAWN_Y: i8 = 0;

/// Gravity interval in milliseconds (one row per second)
pub const FALL_INTERVAL_MS: u32 = 1000;

/// Points awarded per row removed in a single settle
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Largest bounding box (in either dimension) a piece shape may have
pub const MAX_SHAPE_DIM: usize = 4;

/// Display color of a piece or a locked cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

impl Color {
    /// Color token as used by renderers
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Red => "red",
        }
    }
}

/// A cell on the game board
///
/// - `None`: empty cell
/// - `Some(Color)`: filled cell with the color of the piece that locked there
///
/// A color can only exist on a filled cell.
pub type Cell = Option<Color>;

/// The seven tetromino piece kinds
///
/// - **I**: cyan, horizontal bar
/// - **J**: blue
/// - **L**: orange (mirror of J)
/// - **O**: yellow, 2x2 square
/// - **S**: green
/// - **T**: purple
/// - **Z**: red (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Fixed display color of this kind
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::Orange,
            PieceKind::O => Color::Yellow,
            PieceKind::S => Color::Green,
            PieceKind::T => Color::Purple,
            PieceKind::Z => Color::Red,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blocktris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Commands delivered by the input dispatch while a game is running
///
/// These are the only inputs the engine accepts besides the lifecycle calls
/// (start, pause) and the gravity tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Shift the active piece one column left
    Left,
    /// Shift the active piece one column right
    Right,
    /// Soft drop: one row down right away, without waiting for gravity
    Down,
    /// Rotate the active piece 90° clockwise (no wall kicks)
    Rotate,
}

impl Command {
    /// Parse a command token (case-insensitive)
    ///
    /// Accepts the command names and the browser-style arrow key names.
    /// Anything else is not a command and yields `None`.
    ///
    /// ```
    /// use blocktris_types::Command;
    ///
    /// assert_eq!(Command::from_str("left"), Some(Command::Left));
    /// assert_eq!(Command::from_str("ArrowDown"), Some(Command::Down));
    /// assert_eq!(Command::from_str("rotate"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "arrowleft" => Some(Command::Left),
            "right" | "arrowright" => Some(Command::Right),
            "down" | "arrowdown" => Some(Command::Down),
            "rotate" | "arrowup" => Some(Command::Rotate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Left => "left",
            Command::Right => "right",
            Command::Down => "down",
            Command::Rotate => "rotate",
        }
    }
}

/// Lifecycle status of a game
///
/// `Idle` → `Playing` ⇄ `Paused`, `Playing` → `GameOver` → (start) → `Playing`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// Before the first start
    #[default]
    Idle,
    Playing,
    Paused,
    /// Terminal state, cleared only by starting a new game
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::Playing => "playing",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "gameOver",
        }
    }

    /// Whether gravity and commands have any effect
    pub fn is_playing(&self) -> bool {
        matches!(self, GameStatus::Playing)
    }
}

/// Advisory audio cues emitted by the engine
///
/// Cues are fire-and-forget. Whether they are played, muted or fail to play
/// never influences game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Successful horizontal shift
    Move,
    /// Successful rotation
    Rotate,
    /// One or more rows were removed
    LineClear,
    /// A piece settled into the board
    Lock,
    /// The game ended
    GameOver,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Move => "move",
            SoundCue::Rotate => "rotate",
            SoundCue::LineClear => "clear",
            SoundCue::Lock => "drop",
            SoundCue::GameOver => "gameOver",
        }
    }
}

/// Outcome of the most recent settle (lock) event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
}
