//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds every game rule and all mutable session state. It has no
//! dependencies on terminals, input devices or clocks:
//!
//! - **Deterministic**: the random source is injected, so a seed (or a
//!   scripted sequence) reproduces a game exactly
//! - **Testable**: every rule is a plain method or pure function
//! - **Portable**: adapters only read snapshots and send commands
//!
//! # Module Structure
//!
//! - [`shape`]: fixed-size 0/1 matrices and clockwise rotation
//! - [`catalog`]: the seven canonical shapes and their colors
//! - [`board`]: settled-cell grid, collision queries, row clearing
//! - [`piece`]: the active piece and the collision predicate
//! - [`rng`]: injectable random sources
//! - [`spawner`]: uniform random selection with a one-piece lookahead
//! - [`scoring`]: points, level and fall speed
//! - [`game_state`]: the controller driving ticks and commands
//! - [`snapshot`]: read-only view for renderers
//! - [`config`] / [`error`]: validated construction
//!
//! # Game Rules
//!
//! - Pieces spawn centered on the top row; a blocked spawn ends the game
//! - Moves and rotations are validated first and silently dropped if blocked
//! - Rotation is clockwise and in place (no wall kicks)
//! - A lock clearing `n` rows scores `n² × 100`
//! - Level is `min(10, score / 1000 + 1)`; gravity runs at `1 + level` ticks/s
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, TickOutcome};
//! use blockfall_core::types::Command;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_command(Command::MoveLeft);
//! game.apply_command(Command::Rotate);
//! assert_eq!(game.tick(), TickOutcome::Fell);
//!
//! assert_eq!(game.score(), 0);
//! assert_eq!(game.level(), 1);
//! ```

pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;
pub mod spawner;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{ShapeCatalog, ShapeTemplate};
pub use config::GameConfig;
pub use error::ConfigError;
pub use game_state::{GameState, LockEvent, TickOutcome};
pub use piece::{check_collision, ActivePiece};
pub use rng::{EntropyRng, RandomSource, ScriptedRng, SimpleRng};
pub use scoring::{level_for_score, line_clear_score, tick_interval, ticks_per_second};
pub use shape::ShapeMatrix;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use spawner::Spawner;
