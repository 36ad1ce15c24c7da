//! Piece module - the falling piece and its collision test

use crate::board::Board;
use crate::catalog::ShapeTemplate;
use crate::shape::ShapeMatrix;
use crate::types::{PieceKind, Rgb};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub x: i32,
    pub y: i32,
    pub color: Rgb,
}

impl ActivePiece {
    /// Place a template horizontally centered on the top row of a board
    /// `board_width` cells wide.
    pub fn spawn(template: &ShapeTemplate, board_width: usize) -> Self {
        let (x, y) = spawn_position(board_width, template.matrix.width());
        Self {
            kind: template.kind,
            matrix: template.matrix,
            x,
            y,
            color: template.color,
        }
    }

    /// Absolute board coordinates of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.matrix
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx as i32, self.y + dy as i32))
    }

    /// Whether the piece shifted by `(dx, dy)` would hit a wall, the floor or
    /// a settled cell. Cells above the board never collide with settled cells.
    pub fn collides(&self, board: &Board, dx: i32, dy: i32) -> bool {
        check_collision(self, board, dx, dy)
    }

    /// Same piece at the same offset with its matrix rotated clockwise
    pub fn rotated(&self) -> Self {
        Self {
            matrix: self.matrix.rotate_clockwise(),
            ..*self
        }
    }

    /// Try to shift the piece; commits and returns true only if the target
    /// position is free.
    pub fn try_translate(&mut self, board: &Board, dx: i32, dy: i32) -> bool {
        if self.collides(board, dx, dy) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Try to rotate in place. No wall kicks: a blocked rotation is dropped.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let candidate = self.rotated();
        if candidate.collides(board, 0, 0) {
            return false;
        }
        self.matrix = candidate.matrix;
        true
    }
}

/// Collision predicate shared by moves, rotation, gravity and spawning.
///
/// A filled cell shifted by `(dx, dy)` collides when it lands outside
/// `0..width`, at or below the floor, or on a settled cell with `y >= 0`.
pub fn check_collision(piece: &ActivePiece, board: &Board, dx: i32, dy: i32) -> bool {
    piece
        .cells()
        .any(|(x, y)| board.is_occupied(x + dx, y + dy))
}

/// Spawn offset for a piece `piece_width` cells wide
///
/// `x = floor(board_width / 2) - floor(piece_width / 2)`, `y = 0`.
pub fn spawn_position(board_width: usize, piece_width: usize) -> (i32, i32) {
    ((board_width / 2) as i32 - (piece_width / 2) as i32, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::template_of;

    #[test]
    fn test_spawn_is_centered() {
        let o = ActivePiece::spawn(&template_of(PieceKind::O), 10);
        assert_eq!((o.x, o.y), (4, 0));

        let i = ActivePiece::spawn(&template_of(PieceKind::I), 10);
        assert_eq!((i.x, i.y), (3, 0));

        let t = ActivePiece::spawn(&template_of(PieceKind::T), 10);
        assert_eq!((t.x, t.y), (4, 0));
    }

    #[test]
    fn test_spawn_copies_template_color() {
        let s = ActivePiece::spawn(&template_of(PieceKind::S), 10);
        assert_eq!(s.color, Rgb::GREEN);
        assert_eq!(s.kind, PieceKind::S);
    }

    #[test]
    fn test_cells_are_absolute() {
        let mut o = ActivePiece::spawn(&template_of(PieceKind::O), 10);
        o.y = 5;
        let cells: Vec<_> = o.cells().collect();
        assert_eq!(cells, vec![(4, 5), (5, 5), (4, 6), (5, 6)]);
    }

    #[test]
    fn test_cells_above_board_do_not_collide() {
        let board = Board::default();
        let mut i = ActivePiece::spawn(&template_of(PieceKind::I), 10).rotated();
        i.y = -3;
        assert!(!i.collides(&board, 0, 0));
    }

    #[test]
    fn test_floor_collision() {
        let board = Board::default();
        let mut o = ActivePiece::spawn(&template_of(PieceKind::O), 10);
        o.y = 18;
        assert!(!o.collides(&board, 0, 0));
        assert!(o.collides(&board, 0, 1));
    }

    #[test]
    fn test_try_rotate_blocked_keeps_matrix() {
        let board = Board::default();
        // Vertical I against the right wall cannot turn horizontal in place.
        let mut i = ActivePiece::spawn(&template_of(PieceKind::I), 10).rotated();
        i.x = 9;
        i.y = 5;
        let before = i;
        assert!(!i.try_rotate(&board));
        assert_eq!(i, before);
    }
}
