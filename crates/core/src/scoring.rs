//! Scoring module - merge a settled piece, clear full rows, award points
//!
//! Scoring is linear: every row removed by one settle is worth
//! `LINE_CLEAR_POINTS`, with no multi-line bonus, no combo and no level factor.

use crate::board::Board;
use crate::pieces::ActivePiece;
use crate::types::LINE_CLEAR_POINTS;

/// Points for clearing `lines` rows in a single settle
pub fn line_clear_score(lines: u32) -> u32 {
    lines.saturating_mul(LINE_CLEAR_POINTS)
}

/// Write every on-board cell of `piece` into `board`.
///
/// Cells above row 0 are dropped: they were never part of the visible well.
pub fn merge_piece(board: &mut Board, piece: &ActivePiece) {
    for (x, y) in piece.cells() {
        if y >= 0 {
            board.fill(x, y, piece.color);
        }
    }
}

/// Merge `piece` into a copy of `board`, then remove and count full rows.
///
/// The returned board always has the full 10x20 dimensions; removed rows are
/// replaced by empty rows at the top and the surviving rows keep their order.
pub fn merge_and_clear(board: &Board, piece: &ActivePiece) -> (Board, u32) {
    let mut next = board.clone();
    merge_piece(&mut next, piece);
    let cleared = next.clear_full_rows();
    (next, cleared.len() as u32)
}
