//! Snapshot module - read-only projection of the game for renderers
//!
//! The active piece is never written into the board. Renderers that need the
//! composed picture ask [`GameSnapshot::cell_at`], which overlays the active
//! cells on top of the locked ones.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::pieces::ActivePiece;
use crate::types::{Cell, Color, GameStatus, PieceKind, MAX_SHAPE_DIM};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveCell {
    pub x: i8,
    pub y: i8,
    pub color: Color,
}

pub type ActiveCells = ArrayVec<ActiveCell, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Absolute cells of `piece`, including any above row 0
pub fn active_cells(piece: &ActivePiece) -> ActiveCells {
    piece
        .cells()
        .map(|(x, y)| ActiveCell {
            x,
            y,
            color: piece.color,
        })
        .collect()
}

/// Overlay `active` on `board` at (x, y). Active cells win over locked ones.
pub fn overlay_cell(board: &Board, active: &[ActiveCell], x: i8, y: i8) -> Cell {
    active
        .iter()
        .find(|cell| cell.x == x && cell.y == y)
        .map(|cell| cell.color)
        .or_else(|| board.get(x, y).flatten())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: ActiveCells,
    pub kind: PieceKind,
    pub score: u32,
    pub lines: u32,
    pub status: GameStatus,
}

impl GameSnapshot {
    /// Composed cell at (x, y): the active piece over the locked board.
    pub fn cell_at(&self, x: i8, y: i8) -> Cell {
        overlay_cell(&self.board, &self.active, x, y)
    }

    pub fn playable(&self) -> bool {
        self.status.is_playing()
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}
