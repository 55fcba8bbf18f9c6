//! Movement and rotation controller.
//!
//! Each operation builds a candidate piece and returns it only when the
//! candidate does not collide. `None` means the command is rejected and the
//! caller keeps its current piece.

use crate::board::Board;
use crate::collision::collides;
use crate::pieces::ActivePiece;

/// Candidate shifted by (dx, dy), if legal
pub fn try_shift(piece: &ActivePiece, board: &Board, dx: i8, dy: i8) -> Option<ActivePiece> {
    let candidate = piece.shifted(dx, dy);
    (!collides(&candidate.shape, candidate.x, candidate.y, board)).then_some(candidate)
}

pub fn move_left(piece: &ActivePiece, board: &Board) -> Option<ActivePiece> {
    try_shift(piece, board, -1, 0)
}

pub fn move_right(piece: &ActivePiece, board: &Board) -> Option<ActivePiece> {
    try_shift(piece, board, 1, 0)
}

pub fn move_down(piece: &ActivePiece, board: &Board) -> Option<ActivePiece> {
    try_shift(piece, board, 0, 1)
}

/// Clockwise rotation at the current origin, if legal.
///
/// No kick offsets are tried: a rotation that collides fails outright even
/// when a shifted placement would fit.
pub fn try_rotate(piece: &ActivePiece, board: &Board) -> Option<ActivePiece> {
    let candidate = piece.rotated();
    (!collides(&candidate.shape, candidate.x, candidate.y, board)).then_some(candidate)
}
