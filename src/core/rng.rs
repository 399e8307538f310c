//! Deterministic random number generation.
//!
//! All randomness in the engine (stat rolls, effect slots, deck shuffles,
//! the AI's archetype pick) goes through the `RandomSource` trait. The
//! production implementation is `GameRng`, a seedable ChaCha8 stream.
//!
//! A `GameRngState` captures the stream position, so a session can be
//! resumed and produce the same draws it would have produced unbroken.
//!
//! ```
//! use grid_ccg::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_range_inclusive(1, 10), b.gen_range_inclusive(1, 10));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of randomness for card generation.
///
/// Tests can supply scripted implementations to pin exact rolls.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn gen_range_inclusive(&mut self, low: u32, high: u32) -> u32;

    /// Uniform float in `[0, 1)`.
    fn gen_unit(&mut self) -> f64;

    /// `amount` distinct indices from `0..length`, in random order.
    ///
    /// Returns at most `length` indices.
    fn distinct_indices(&mut self, length: usize, amount: usize) -> Vec<usize>;

    /// Shuffle a slice in place.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is still recorded, so `state()` can reproduce it.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Capture the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream captured with `state()`.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self { inner, seed: state.seed }
    }
}

impl RandomSource for GameRng {
    fn gen_range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.inner.gen_range(low..=high)
    }

    fn gen_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    fn distinct_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.inner, length, amount.min(length)).into_vec()
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

/// Seed plus ChaCha8 word position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}
