//! Game state module - the controller that owns a whole session
//!
//! Ties together board, active piece, spawner and scoring. One `GameState`
//! owns all mutable state; adapters drive it through the command methods and
//! [`GameState::tick`], and read it back through accessors or a
//! [`GameSnapshot`].

use std::time::Duration;

use crate::board::Board;
use crate::catalog::{ShapeCatalog, ShapeTemplate};
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::piece::ActivePiece;
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::{level_for_score, line_clear_score, tick_interval, ticks_per_second};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::spawner::Spawner;
use crate::types::{Command, GameStatus};

/// What a single gravity tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece moved down one row
    Fell,
    /// The piece locked and its successor spawned
    Locked { lines_cleared: usize },
    /// The piece locked and its successor had no room
    GameOver,
    /// The session was already over; nothing happened
    Halted,
}

/// Emitted after every lock, consumed by observers via
/// [`GameState::take_last_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: usize,
    /// Points awarded by this lock
    pub points: u32,
    /// Score and level after the lock
    pub score: u32,
    pub level: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    active: ActivePiece,
    spawner: Spawner<R>,
    status: GameStatus,
    score: u32,
    lines: u32,
    /// Pieces spawned so far, including the one that ended the game
    pieces: u32,
    last_event: Option<LockEvent>,
}

impl GameState<SimpleRng> {
    /// Standard 10x20 game with the seven canonical shapes and a seeded RNG
    pub fn new(seed: u32) -> Self {
        Self::from_parts(
            Board::default(),
            Spawner::new(ShapeCatalog::standard(), SimpleRng::new(seed)),
        )
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: RandomSource> GameState<R> {
    /// Build a session from a configuration and a random source.
    ///
    /// Fails fast on zero board dimensions, an empty catalog, or a shape that
    /// is wider than the board. The first piece is spawned immediately.
    pub fn with_config(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.board_width, config.board_height)?;
        Ok(Self::from_parts(board, Spawner::new(config.catalog, rng)))
    }

    fn from_parts(board: Board, mut spawner: Spawner<R>) -> Self {
        let first = spawner.next();
        let active = ActivePiece::spawn(&first, board.width());
        let status = if active.collides(&board, 0, 0) {
            GameStatus::GameOver
        } else {
            GameStatus::Running
        };

        Self {
            board,
            active,
            spawner,
            status,
            score: 0,
            lines: 0,
            pieces: 1,
            last_event: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Derived from the score on every call, never stored
    pub fn level(&self) -> u32 {
        level_for_score(self.score)
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    /// Preview of the piece that spawns after the active one
    pub fn next_piece(&self) -> Option<ShapeTemplate> {
        self.spawner.peek()
    }

    /// Gravity rate the timer should drive `tick()` at
    pub fn ticks_per_second(&self) -> u32 {
        ticks_per_second(self.level())
    }

    pub fn tick_interval(&self) -> Duration {
        tick_interval(self.level())
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Try to move the active piece; rejected moves are silent no-ops.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.active.try_translate(&self.board, dx, dy)
    }

    /// Try to rotate the active piece clockwise in place (no wall kicks).
    pub fn try_rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.active.try_rotate(&self.board)
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// One extra row down. Never locks: a blocked soft drop is rejected
    /// and the lock happens on the next tick.
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    pub fn rotate(&mut self) -> bool {
        self.try_rotate()
    }

    /// Apply a player command; returns whether the piece changed.
    ///
    /// `Quit` belongs to the runner and is ignored here.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::SoftDrop => self.soft_drop(),
            Command::Rotate => self.rotate(),
            Command::Quit => false,
        }
    }

    /// Main game tick - one row of gravity, locking when the piece has landed
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Halted;
        }

        if self.active.try_translate(&self.board, 0, 1) {
            return TickOutcome::Fell;
        }

        let lines_cleared = self.lock_piece();
        if self.spawn_piece() {
            TickOutcome::Locked { lines_cleared }
        } else {
            TickOutcome::GameOver
        }
    }

    /// Apply one frame of buffered commands in arrival order, then tick.
    pub fn step(&mut self, commands: &[Command]) -> TickOutcome {
        for &command in commands {
            self.apply_command(command);
        }
        self.tick()
    }

    /// Merge the active piece, clear rows and score the lock.
    /// Returns the number of rows cleared.
    fn lock_piece(&mut self) -> usize {
        self.board.merge(&self.active);

        let lines_cleared = self.board.clear_full_rows();
        let points = line_clear_score(lines_cleared);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines_cleared as u32);

        self.last_event = Some(LockEvent {
            lines_cleared,
            points,
            score: self.score,
            level: self.level(),
        });

        lines_cleared
    }

    /// Replace the active piece with the next one from the spawner.
    ///
    /// Returns false (and ends the game) if the new piece collides at its
    /// spawn position. The blocked piece stays as the active piece so it can
    /// still be drawn; the board is not touched.
    fn spawn_piece(&mut self) -> bool {
        let template = self.spawner.next();
        self.active = ActivePiece::spawn(&template, self.board.width());
        self.pieces = self.pieces.wrapping_add(1);

        if self.active.collides(&self.board, 0, 0) {
            self.status = GameStatus::GameOver;
            return false;
        }
        true
    }

    /// Write the render-facing view of the session into `out`, reusing its
    /// board allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = Some(ActiveSnapshot::from(self.active));
        out.next = self.spawner.peek();
        out.status = self.status;
        out.score = self.score;
        out.level = self.level();
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::template_of;
    use crate::rng::ScriptedRng;
    use crate::types::{PieceKind, Rgb};

    const I_IDX: usize = 0;
    const O_IDX: usize = 1;
    const T_IDX: usize = 2;

    fn scripted(script: Vec<usize>) -> GameState<ScriptedRng> {
        GameState::with_config(GameConfig::default(), ScriptedRng::new(script)).unwrap()
    }

    fn fill_row_except(state: &mut GameState<ScriptedRng>, y: i32, gaps: &[i32]) {
        let width = state.board().width() as i32;
        for x in 0..width {
            if !gaps.contains(&x) {
                state.board_mut().set(x, y, Some(Rgb::RED));
            }
        }
    }

    fn drop_to_floor<R: RandomSource>(state: &mut GameState<R>) {
        while state.soft_drop() {}
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.status(), GameStatus::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.lines(), 0);
        assert_eq!(state.pieces(), 1);
        assert!(state.next_piece().is_some());
        assert_eq!(state.active().y, 0);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let err = GameState::with_config(GameConfig::new(0, 20), SimpleRng::new(1)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidDimensions {
                width: 0,
                height: 20
            }
        );

        let err = GameState::with_config(GameConfig::new(10, 0), SimpleRng::new(1)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_first_spawn_and_preview_are_separate_draws() {
        let state = scripted(vec![I_IDX, O_IDX]);
        assert_eq!(state.active().kind, PieceKind::I);
        assert_eq!(state.next_piece().map(|t| t.kind), Some(PieceKind::O));
    }

    #[test]
    fn test_tick_gravity() {
        let mut state = scripted(vec![O_IDX]);
        assert_eq!(state.tick(), TickOutcome::Fell);
        assert_eq!(state.active().y, 1);
    }

    #[test]
    fn test_move_rejected_at_wall() {
        let mut state = scripted(vec![O_IDX]);
        while state.move_left() {}
        assert_eq!(state.active().x, 0);

        let before = *state.active();
        assert!(!state.move_left());
        assert_eq!(*state.active(), before);

        while state.move_right() {}
        assert_eq!(state.active().x, 8);
        assert!(!state.move_right());
        assert_eq!(state.active().x, 8);
    }

    #[test]
    fn test_rotate_changes_matrix() {
        let mut state = scripted(vec![I_IDX]);
        state.tick();
        assert!(state.rotate());
        assert_eq!(state.active().matrix.width(), 1);
        assert_eq!(state.active().matrix.height(), 4);
    }

    #[test]
    fn test_rotate_near_wall_fails_silently() {
        let mut state = scripted(vec![I_IDX]);
        state.tick();
        assert!(state.rotate());
        while state.move_right() {}
        assert_eq!(state.active().x, 9);

        let before = *state.active();
        assert!(!state.rotate());
        assert_eq!(*state.active(), before);
    }

    #[test]
    fn test_soft_drop_never_locks() {
        let mut state = scripted(vec![O_IDX]);
        drop_to_floor(&mut state);
        assert_eq!(state.active().y, 18);
        assert!(!state.soft_drop());
        assert_eq!(state.board().occupied_count(), 0);
        assert_eq!(state.pieces(), 1);
    }

    #[test]
    fn test_lock_merges_and_spawns() {
        let mut state = scripted(vec![O_IDX]);
        drop_to_floor(&mut state);
        assert_eq!(state.tick(), TickOutcome::Locked { lines_cleared: 0 });

        assert_eq!(state.board().occupied_count(), 4);
        assert_eq!(state.board().get(4, 18), Some(Some(Rgb::YELLOW)));
        assert_eq!(state.board().get(5, 19), Some(Some(Rgb::YELLOW)));
        assert_eq!(state.active().y, 0);
        assert_eq!(state.pieces(), 2);

        let event = state.take_last_event().unwrap();
        assert_eq!(event.lines_cleared, 0);
        assert_eq!(event.points, 0);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_single_line_clear_scores_100() {
        let mut state = scripted(vec![I_IDX]);
        // Bottom row full except where the horizontal I lands (x = 3..=6).
        fill_row_except(&mut state, 19, &[3, 4, 5, 6]);
        drop_to_floor(&mut state);
        assert_eq!(state.tick(), TickOutcome::Locked { lines_cleared: 1 });

        assert_eq!(state.score(), 100);
        assert_eq!(state.lines(), 1);
        assert_eq!(state.board().occupied_count(), 0);
    }

    #[test]
    fn test_tetris_scores_1600() {
        let mut state = scripted(vec![I_IDX]);
        for y in 16..20 {
            fill_row_except(&mut state, y, &[0]);
        }
        assert!(state.rotate());
        while state.move_left() {}
        drop_to_floor(&mut state);
        assert_eq!(state.tick(), TickOutcome::Locked { lines_cleared: 4 });

        assert_eq!(state.score(), 1600);
        assert_eq!(state.level(), 2);
        assert_eq!(state.board().occupied_count(), 0);

        let event = state.take_last_event().unwrap();
        assert_eq!(event.points, 1600);
        assert_eq!(event.level, 2);
    }

    #[test]
    fn test_two_singles_score_200() {
        let mut state = scripted(vec![I_IDX]);
        for _ in 0..2 {
            fill_row_except(&mut state, 19, &[3, 4, 5, 6]);
            drop_to_floor(&mut state);
            assert_eq!(state.tick(), TickOutcome::Locked { lines_cleared: 1 });
        }
        assert_eq!(state.score(), 200);
        assert_eq!(state.lines(), 2);
    }

    #[test]
    fn test_game_over_when_spawn_blocked() {
        let mut state = scripted(vec![O_IDX]);
        drop_to_floor(&mut state);

        // Block the O's spawn cells on the top row.
        state.board_mut().set(4, 0, Some(Rgb::RED));
        state.board_mut().set(5, 0, Some(Rgb::RED));

        assert_eq!(state.tick(), TickOutcome::GameOver);
        assert!(state.is_game_over());

        let board_after = state.board().clone();
        let score_after = state.score();
        assert_eq!(board_after.occupied_count(), 6);

        assert_eq!(state.tick(), TickOutcome::Halted);
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::SoftDrop,
            Command::Rotate,
        ] {
            assert!(!state.apply_command(cmd));
        }
        assert_eq!(state.step(&[Command::SoftDrop]), TickOutcome::Halted);
        assert_eq!(state.board(), &board_after);
        assert_eq!(state.score(), score_after);
    }

    #[test]
    fn test_commands_never_end_the_game() {
        let mut state = scripted(vec![O_IDX]);
        fill_row_except(&mut state, 2, &[]);
        for _ in 0..10 {
            for cmd in [
                Command::MoveLeft,
                Command::SoftDrop,
                Command::Rotate,
                Command::MoveRight,
            ] {
                state.apply_command(cmd);
            }
        }
        assert_eq!(state.status(), GameStatus::Running);
    }

    #[test]
    fn test_step_applies_commands_before_gravity() {
        let mut state = scripted(vec![O_IDX]);
        let outcome = state.step(&[Command::MoveLeft, Command::MoveLeft, Command::SoftDrop]);
        assert_eq!(outcome, TickOutcome::Fell);
        assert_eq!((state.active().x, state.active().y), (2, 2));
    }

    #[test]
    fn test_step_locks_after_commands() {
        let mut state = scripted(vec![O_IDX]);
        for _ in 0..17 {
            state.soft_drop();
        }
        // The soft drop lands the piece, so the same tick's gravity locks it.
        let outcome = state.step(&[Command::SoftDrop]);
        assert_eq!(outcome, TickOutcome::Locked { lines_cleared: 0 });
    }

    #[test]
    fn test_quit_is_ignored_by_engine() {
        let mut state = scripted(vec![O_IDX]);
        let before = *state.active();
        assert!(!state.apply_command(Command::Quit));
        assert_eq!(*state.active(), before);
    }

    #[test]
    fn test_tick_interval_follows_level() {
        let mut state = scripted(vec![I_IDX]);
        assert_eq!(state.ticks_per_second(), 2);
        assert_eq!(state.tick_interval(), Duration::from_millis(500));

        for y in 16..20 {
            fill_row_except(&mut state, y, &[0]);
        }
        state.rotate();
        while state.move_left() {}
        drop_to_floor(&mut state);
        state.tick();
        assert_eq!(state.ticks_per_second(), 3);
    }

    #[test]
    fn test_one_row_board_clears_every_lock() {
        let catalog = ShapeCatalog::new(vec![template_of(PieceKind::I)]).unwrap();
        let config = GameConfig::new(4, 1).with_catalog(catalog);
        let mut state = GameState::with_config(config, SimpleRng::new(3)).unwrap();
        assert_eq!(state.status(), GameStatus::Running);

        // A 4x1 board fits exactly one I; locking fills the row, which clears.
        assert_eq!(state.tick(), TickOutcome::Locked { lines_cleared: 1 });
        assert_eq!(state.score(), 100);
    }

    #[test]
    fn test_first_spawn_can_end_game() {
        // A 2x2 O cannot fit on a one-row board.
        let catalog = ShapeCatalog::new(vec![template_of(PieceKind::O)]).unwrap();
        let config = GameConfig::new(4, 1).with_catalog(catalog);
        let mut state = GameState::with_config(config, SimpleRng::new(3)).unwrap();
        assert!(state.is_game_over());
        assert_eq!(state.tick(), TickOutcome::Halted);
        assert_eq!(state.board().occupied_count(), 0);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = scripted(vec![O_IDX, T_IDX]);
        state.tick();
        let snap = state.snapshot();
        assert_eq!((snap.width, snap.height), (10, 20));
        assert_eq!(snap.board.len(), 200);
        assert_eq!(snap.active.map(|a| a.y), Some(1));
        assert_eq!(snap.next.map(|t| t.kind), Some(PieceKind::T));
        assert_eq!(snap.status, GameStatus::Running);
        assert_eq!(snap.level, 1);
    }
}
