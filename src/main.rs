//! Terminal blockfall runner (default binary).
//!
//! Owns the wall clock and the terminal: polls crossterm for key presses
//! until the next gravity tick is due, then hands the buffered commands to
//! the engine in one `step`.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{
    EntropyRng, GameConfig, GameSnapshot, GameState, LockEvent, RandomSource, SimpleRng,
};
use blockfall::input::{handle_key_event, CommandBatch};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

/// How long the final frame stays up after the game ends.
const GAME_OVER_HOLD: Duration = Duration::from_secs(2);

#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game for the terminal")]
struct Args {
    /// Board width in cells
    #[arg(long, env = "BLOCKFALL_WIDTH", default_value_t = DEFAULT_BOARD_WIDTH)]
    width: usize,

    /// Board height in cells
    #[arg(long, env = "BLOCKFALL_HEIGHT", default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: usize,

    /// Seed for a reproducible piece sequence (OS entropy when omitted)
    #[arg(long, env = "BLOCKFALL_SEED")]
    seed: Option<u32>,
}

/// Per-session tally of lock events, logged on exit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LockStats {
    locks: u32,
    /// Most rows removed by a single lock
    best_clear: usize,
    /// Locks that cleared four rows at once
    fours: u32,
}

impl LockStats {
    fn record(&mut self, event: &LockEvent) {
        self.locks += 1;
        self.best_clear = self.best_clear.max(event.lines_cleared);
        if event.lines_cleared >= 4 {
            self.fours += 1;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunEnd {
    Quit,
    GameOver,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SimpleRng::new(seed)),
        None => Box::new(EntropyRng::new()),
    };
    let config = GameConfig::new(args.width, args.height);
    let mut game = GameState::with_config(config, rng)
        .with_context(|| format!("cannot start a {}x{} game", args.width, args.height))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut stats = LockStats::default();
    let result = run(&mut term, &mut game, &mut stats);

    // Always try to restore terminal state.
    let _ = term.exit();

    let end = result?;
    eprintln!(
        "[blockfall] board={}x{} seed={}",
        args.width,
        args.height,
        args.seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "entropy".to_string())
    );
    eprintln!(
        "[blockfall] {} score={} level={} lines={} pieces={}",
        match end {
            RunEnd::Quit => "quit",
            RunEnd::GameOver => "game over",
        },
        game.score(),
        game.level(),
        game.lines(),
        game.pieces()
    );
    eprintln!(
        "[blockfall] locks={} best_clear={} fours={}",
        stats.locks, stats.best_clear, stats.fours
    );
    Ok(())
}

fn run<R: RandomSource>(
    term: &mut TerminalRenderer,
    game: &mut GameState<R>,
    stats: &mut LockStats,
) -> Result<RunEnd> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut frame = FrameBuffer::new(0, 0);
    let mut batch = CommandBatch::new();

    loop {
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut frame);
        term.draw_swap(&mut frame)?;

        if game.is_game_over() {
            std::thread::sleep(GAME_OVER_HOLD);
            return Ok(RunEnd::GameOver);
        }

        // Buffer input until the next tick is due. Speed follows the level.
        let deadline = Instant::now() + game.tick_interval();
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if timeout.is_zero() || !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(command) = handle_key_event(key) {
                        // A full batch drops the extra keys for this tick.
                        batch.push(command);
                    }
                    if batch.quit_requested() {
                        return Ok(RunEnd::Quit);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        game.step(batch.as_slice());
        batch.clear();
        if let Some(event) = game.take_last_event() {
            stats.record(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall::core::{ScriptedRng, TickOutcome};

    fn lock(lines_cleared: usize) -> LockEvent {
        LockEvent {
            lines_cleared,
            points: 0,
            score: 0,
            level: 1,
        }
    }

    #[test]
    fn test_lock_stats_tally() {
        let mut stats = LockStats::default();
        for lines in [0, 2, 4, 1, 4] {
            stats.record(&lock(lines));
        }
        assert_eq!(
            stats,
            LockStats {
                locks: 5,
                best_clear: 4,
                fours: 2,
            }
        );
    }

    #[test]
    fn test_lock_stats_follow_the_game() {
        let mut game =
            GameState::with_config(GameConfig::default(), ScriptedRng::new(vec![1])).unwrap();
        let mut stats = LockStats::default();
        while stats.locks < 3 {
            assert_ne!(game.step(&[]), TickOutcome::Halted);
            if let Some(event) = game.take_last_event() {
                stats.record(&event);
            }
        }
        assert_eq!(stats.best_clear, 0);
        assert_eq!(game.board().occupied_count(), 12);
    }
}
