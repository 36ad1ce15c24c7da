//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::Command`] with a fixed
//! key map and collects one frame's worth of commands in a [`CommandBatch`],
//! which the runner hands to the engine in arrival order.

pub mod batch;
pub mod map;

pub use blockfall_types as types;

pub use batch::{CommandBatch, MAX_COMMANDS_PER_FRAME};
pub use map::handle_key_event;
