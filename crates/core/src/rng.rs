//! RNG module - injectable randomness for piece selection
//!
//! The engine never reaches for a global generator. It draws catalog indices
//! through [`RandomSource`], so a session can be seeded ([`SimpleRng`]),
//! scripted for tests ([`ScriptedRng`]) or seeded from the OS ([`EntropyRng`]).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices
pub trait RandomSource {
    /// Return a value in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_index(&mut self, bound: usize) -> usize {
        // The low bits of an LCG cycle with short periods; use the high half.
        ((self.next_u32() >> 16) as usize) % bound
    }
}

/// Replays a fixed sequence of indices (wrapped into range), cycling forever
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    script: Vec<usize>,
    pos: usize,
}

impl ScriptedRng {
    /// An empty script behaves like `[0]`.
    pub fn new(script: Vec<usize>) -> Self {
        let script = if script.is_empty() { vec![0] } else { script };
        Self { script, pos: 0 }
    }

    /// How many indices have been handed out
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedRng {
    fn next_index(&mut self, bound: usize) -> usize {
        let value = self.script[self.pos % self.script.len()];
        self.pos += 1;
        value % bound
    }
}

/// OS-seeded generator for interactive play
#[derive(Debug, Clone)]
pub struct EntropyRng {
    inner: StdRng,
}

impl EntropyRng {
    pub fn new() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}
