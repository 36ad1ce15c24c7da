use crate::catalog::ShapeTemplate;
use crate::piece::ActivePiece;
use crate::shape::ShapeMatrix;
use crate::types::{Cell, GameStatus, PieceKind, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub x: i32,
    pub y: i32,
    pub color: Rgb,
}

impl ActiveSnapshot {
    /// Absolute coordinates of the filled cells
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.matrix
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx as i32, self.y + dy as i32))
    }
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            matrix: value.matrix,
            x: value.x,
            y: value.y,
            color: value.color,
        }
    }
}

/// Read-only view handed to the render adapter once per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major board cells (`y * width + x`)
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub next: Option<ShapeTemplate>,
    pub status: GameStatus,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl GameSnapshot {
    /// Board cell at (x, y), `None` when out of range
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.board.get(y * self.width + x).copied()
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            board: Vec::new(),
            active: None,
            next: None,
            status: GameStatus::Running,
            score: 0,
            level: 1,
            lines: 0,
        }
    }
}
