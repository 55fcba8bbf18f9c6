//! Pieces module - tetromino catalog, shape matrices and naive rotation
//!
//! A shape is a small binary matrix in the piece's local frame, with the origin
//! at the top-left of its bounding box. Rotation is a plain 90° clockwise matrix
//! rotation (transpose, then reverse each row). There are no kick tables: if
//! the rotated shape does not fit where the piece is, the rotation fails.

use crate::rng::PieceSource;
use crate::types::{Color, PieceKind, MAX_SHAPE_DIM, SPAWN_X, SPAWN_Y};

/// Binary shape matrix of at most 4x4 cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from rows of 0/1 (any non-zero value is occupied).
    ///
    /// Panics if the grid is larger than 4x4.
    ///
    /// ```
    /// use blocktris_core::pieces::Shape;
    ///
    /// let bar = Shape::from_grid([[1, 1, 1]]);
    /// assert_eq!((bar.width(), bar.height()), (3, 1));
    /// assert_eq!(bar.rotated_cw().width(), 1);
    /// ```
    pub const fn from_grid<const W: usize, const H: usize>(grid: [[u8; W]; H]) -> Self {
        assert!(W <= MAX_SHAPE_DIM && H <= MAX_SHAPE_DIM, "shape larger than 4x4");
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut row = 0;
        while row < H {
            let mut col = 0;
            while col < W {
                cells[row][col] = grid[row][col] != 0;
                col += 1;
            }
            row += 1;
        }
        Self {
            width: W as u8,
            height: H as u8,
            cells,
        }
    }

    /// Number of columns in the bounding box
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Number of rows in the bounding box
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether local cell (col, row) is occupied. Outside the box is never occupied.
    pub fn is_occupied(&self, col: u8, row: u8) -> bool {
        col < self.width && row < self.height && self.cells[row as usize][col as usize]
    }

    /// Occupied cells as local (col, row) offsets, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width)
                .filter(move |&col| self.cells[row as usize][col as usize])
                .map(move |col| (col as i8, row as i8))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.occupied().count()
    }

    /// Rotate 90° clockwise: transpose, then reverse each resulting row.
    ///
    /// The bounding box dimensions swap; square shapes keep theirs.
    pub fn rotated_cw(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, out_row) in cells.iter_mut().enumerate().take(w) {
            for (j, out) in out_row.iter_mut().enumerate().take(h) {
                *out = self.cells[h - 1 - j][i];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

pub const I_SHAPE: Shape = Shape::from_grid([
    [0, 0, 0, 0],
    [1, 1, 1, 1],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

pub const J_SHAPE: Shape = Shape::from_grid([
    [1, 0, 0],
    [1, 1, 1],
    [0, 0, 0],
]);

pub const L_SHAPE: Shape = Shape::from_grid([
    [0, 0, 1],
    [1, 1, 1],
    [0, 0, 0],
]);

pub const O_SHAPE: Shape = Shape::from_grid([
    [1, 1],
    [1, 1],
]);

pub const S_SHAPE: Shape = Shape::from_grid([
    [0, 1, 1],
    [1, 1, 0],
    [0, 0, 0],
]);

pub const T_SHAPE: Shape = Shape::from_grid([
    [0, 1, 0],
    [1, 1, 1],
    [0, 0, 0],
]);

pub const Z_SHAPE: Shape = Shape::from_grid([
    [1, 1, 0],
    [0, 1, 1],
    [0, 0, 0],
]);

/// Spawn orientation shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// The falling piece: shape, color and board-relative origin.
///
/// Moves and rotations never mutate a piece in place; they produce a
/// replacement value that is validated before it is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A catalog piece at the spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_X, SPAWN_Y)
    }

    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            shape: get_shape(kind),
            color: kind.color(),
            x,
            y,
        }
    }

    /// Same piece shifted by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece rotated clockwise in place (origin unchanged)
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }

    /// Absolute board coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .occupied()
            .map(move |(col, row)| (self.x + col, self.y + row))
    }
}

/// Draw the next kind from `source` and place it at the spawn position.
pub fn random_piece<S: PieceSource + ?Sized>(source: &mut S) -> ActivePiece {
    ActivePiece::new(source.next_kind())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(get_shape(kind).cell_count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn t_rotation_matches_matrix_rotation() {
        let rotated = T_SHAPE.rotated_cw();
        let expected = Shape::from_grid([
            [0, 1, 0],
            [0, 1, 1],
            [0, 1, 0],
        ]);
        assert_eq!(rotated, expected);
    }

    #[test]
    fn rectangular_shapes_swap_dimensions() {
        let shape = Shape::from_grid([[1, 1, 1], [1, 0, 0]]);
        let rotated = shape.rotated_cw();
        assert_eq!((rotated.width(), rotated.height()), (2, 3));
        assert_eq!(
            rotated,
            Shape::from_grid([
                [1, 1],
                [0, 1],
                [0, 1],
            ])
        );
    }

    #[test]
    fn four_rotations_are_identity() {
        for kind in PieceKind::ALL {
            let shape = get_shape(kind);
            let back = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(back, shape, "{:?}", kind);
        }
    }

    #[test]
    fn o_shape_is_rotation_invariant() {
        assert_eq!(O_SHAPE.rotated_cw(), O_SHAPE);
    }

    #[test]
    fn active_piece_cells_are_absolute() {
        let piece = ActivePiece::new(PieceKind::O);
        let cells: Vec<(i8, i8)> = piece.cells().collect();
        assert_eq!(cells, vec![(3, 0), (4, 0), (3, 1), (4, 1)]);
        assert_eq!(piece.color, Color::Yellow);
    }

    #[test]
    fn is_occupied_outside_box_is_false() {
        assert!(!O_SHAPE.is_occupied(2, 0));
        assert!(!O_SHAPE.is_occupied(0, 2));
        assert!(I_SHAPE.is_occupied(3, 1));
    }
}
