//! Configuration errors raised while constructing the engine.

use thiserror::Error;

/// Rejected engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },

    #[error("board {width}x{height} is too large (each side must be at most {max})")]
    BoardTooLarge { width: usize, height: usize, max: usize },

    #[error("shape catalog is empty")]
    EmptyCatalog,

    #[error("shape is {width} cells wide but the board is only {board_width} wide")]
    ShapeTooWide { width: usize, board_width: usize },
}
