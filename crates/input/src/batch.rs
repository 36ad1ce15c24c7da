//! Per-frame command buffer.
//!
//! Stack-only: commands beyond [`MAX_COMMANDS_PER_FRAME`] within one frame
//! are dropped.

use arrayvec::ArrayVec;

use crate::types::Command;

/// Commands kept per frame
pub const MAX_COMMANDS_PER_FRAME: usize = 32;

/// Ordered commands received since the last tick
#[derive(Debug, Clone, Default)]
pub struct CommandBatch {
    commands: ArrayVec<Command, MAX_COMMANDS_PER_FRAME>,
    quit: bool,
}

impl CommandBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a command. `Quit` only raises the quit flag; it is never
    /// forwarded to the engine. Returns false if the frame is full.
    pub fn push(&mut self, command: Command) -> bool {
        if command == Command::Quit {
            self.quit = true;
            return true;
        }
        self.commands.try_push(command).is_ok()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn as_slice(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget the buffered commands (the quit flag is sticky)
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}
