//! Engine configuration, validated once at construction.

use crate::board::check_dimensions;
use crate::catalog::ShapeCatalog;
use crate::error::ConfigError;
use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

/// Board size and shape catalog for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_width: usize,
    pub board_height: usize,
    pub catalog: ShapeCatalog,
}

impl GameConfig {
    pub fn new(board_width: usize, board_height: usize) -> Self {
        Self {
            board_width,
            board_height,
            ..Self::default()
        }
    }

    pub fn with_catalog(mut self, catalog: ShapeCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimensions(self.board_width, self.board_height)?;
        if self.catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if let Some(t) = self
            .catalog
            .templates()
            .iter()
            .find(|t| t.matrix.width() > self.board_width)
        {
            return Err(ConfigError::ShapeTooWide {
                width: t.matrix.width(),
                board_width: self.board_width,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            catalog: ShapeCatalog::standard(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert_eq!((config.board_width, config.board_height), (10, 20));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_dimensions() {
        assert_eq!(
            GameConfig::new(0, 20).validate(),
            Err(ConfigError::InvalidDimensions {
                width: 0,
                height: 20
            })
        );
        assert!(GameConfig::new(10, 0).validate().is_err());
    }

    #[test]
    fn test_oversized_dimensions() {
        use crate::types::MAX_BOARD_SIDE;

        assert!(matches!(
            GameConfig::new(usize::MAX, usize::MAX).validate(),
            Err(ConfigError::BoardTooLarge { .. })
        ));
        assert!(GameConfig::new(10, MAX_BOARD_SIDE + 1).validate().is_err());
        assert_eq!(GameConfig::new(MAX_BOARD_SIDE, MAX_BOARD_SIDE).validate(), Ok(()));
    }

    #[test]
    fn test_board_narrower_than_i_piece() {
        assert_eq!(
            GameConfig::new(3, 20).validate(),
            Err(ConfigError::ShapeTooWide {
                width: 4,
                board_width: 3
            })
        );
    }
}
