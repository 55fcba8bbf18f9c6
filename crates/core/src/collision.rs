//! Collision detection - the single legality check for every placement.

use crate::board::Board;
use crate::pieces::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether placing `shape` with its origin at (x, y) is illegal.
///
/// A placement collides when any occupied cell lands left of column 0, right
/// of the last column, below the last row, or on a filled board cell. Cells
/// above row 0 are only checked against the side walls, which lets a piece
/// hang partly above the well (e.g. after rotating at the top).
pub fn collides(shape: &Shape, x: i8, y: i8, board: &Board) -> bool {
    shape.occupied().any(|(col, row)| {
        let bx = x + col;
        let by = y + row;
        if bx < 0 || bx >= BOARD_WIDTH as i8 || by >= BOARD_HEIGHT as i8 {
            return true;
        }
        by >= 0 && board.is_filled(bx, by)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{I_SHAPE, O_SHAPE, T_SHAPE};
    use crate::types::Color;

    #[test]
    fn spawn_on_empty_board_is_legal() {
        let board = Board::new();
        assert!(!collides(&T_SHAPE, 3, 0, &board));
    }

    #[test]
    fn walls_and_floor_collide() {
        let board = Board::new();
        assert!(collides(&O_SHAPE, -1, 5, &board));
        assert!(collides(&O_SHAPE, 9, 5, &board));
        assert!(collides(&O_SHAPE, 3, 19, &board));
        assert!(!collides(&O_SHAPE, 8, 18, &board));
    }

    #[test]
    fn empty_shape_rows_may_hang_outside() {
        let board = Board::new();
        // I spawn row is row 1 of its box; rows 2-3 are empty and may sit below the floor.
        assert!(!collides(&I_SHAPE, 0, 18, &board));
        assert!(collides(&I_SHAPE, 0, 19, &board));
    }

    #[test]
    fn cells_above_the_well_skip_the_filled_check() {
        let mut board = Board::new();
        board.fill(3, 0, Color::Red);
        // Only the bottom row of O reaches row 0, at column 4.
        assert!(!collides(&O_SHAPE, 4, -1, &board));
        assert!(collides(&O_SHAPE, 3, -1, &board));
        // Side walls still apply above the well.
        assert!(collides(&O_SHAPE, -1, -3, &board));
    }

    #[test]
    fn filled_cells_collide() {
        let mut board = Board::new();
        board.fill(4, 1, Color::Blue);
        assert!(collides(&T_SHAPE, 3, 0, &board));
        assert!(!collides(&T_SHAPE, 5, 0, &board));
    }
}
