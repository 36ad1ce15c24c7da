//! Shared types module - plain data used by the engine and its adapters
//!
//! Everything here is dependency-free so the core, the input adapter and the
//! terminal renderer can agree on the same vocabulary.
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 20 rows. Coordinates are `(x, y)`
//! with `x` growing to the right and `y` growing downwards; row 0 is the top.
//!
//! # Scoring and Speed
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LINE_CLEAR_BASE_SCORE` | 100 | Multiplied by `lines²` on every lock |
//! | `SCORE_PER_LEVEL` | 1000 | Score needed to advance one level |
//! | `MAX_LEVEL` | 10 | Level cap |
//! | `BASE_TICKS_PER_SECOND` | 1 | Gravity rate is `BASE_TICKS_PER_SECOND + level` |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, Rgb, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.color(), Rgb::PURPLE);
//! assert_eq!(DEFAULT_BOARD_WIDTH, 10);
//! assert_eq!(DEFAULT_BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: usize = 10;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: usize = 20;

/// Largest accepted board side, in cells
pub const MAX_BOARD_SIDE: usize = 1024;

/// Points for a single cleared line; a lock clearing `n` lines awards `n² × 100`.
pub const LINE_CLEAR_BASE_SCORE: u32 = 100;

/// Score required per level step
pub const SCORE_PER_LEVEL: u32 = 1000;

/// Highest reachable level
pub const MAX_LEVEL: u32 = 10;

/// Gravity ticks per second before the level bonus is added
pub const BASE_TICKS_PER_SECOND: u32 = 1;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const CYAN: Rgb = Rgb::new(0, 255, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const PURPLE: Rgb = Rgb::new(128, 0, 128);
    pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
}

/// A cell on the board
///
/// - `None`: empty
/// - `Some(color)`: settled block of that color
pub type Cell = Option<Rgb>;

/// The seven piece kinds, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Canonical color of the kind
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::CYAN,
            PieceKind::O => Rgb::YELLOW,
            PieceKind::T => Rgb::PURPLE,
            PieceKind::L => Rgb::ORANGE,
            PieceKind::J => Rgb::BLUE,
            PieceKind::S => Rgb::GREEN,
            PieceKind::Z => Rgb::RED,
        }
    }
}

/// Discrete player commands delivered by the input adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one extra row down
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// End the session (handled by the runner, a no-op for the engine)
    Quit,
}

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    /// Terminal: a freshly spawned piece had no room
    GameOver,
}
