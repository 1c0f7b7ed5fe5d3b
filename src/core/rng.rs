//! Deterministic dice rolling.
//!
//! The engine core never rolls dice — moves arrive with their amount already
//! decided. `DiceRng` exists for hosts (turn orchestrators, simulations,
//! tests) that want reproducible games.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical roll sequence
//! - **Forkable**: Create independent branches for parallel simulations
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use rust_ludo::core::DiceRng;
//!
//! let mut dice = DiceRng::new(42);
//! let roll = dice.roll(6);
//! assert!((1..=6).contains(&roll));
//!
//! // Same seed, same sequence
//! let mut replay = DiceRng::new(42);
//! assert_eq!(replay.roll(6), roll);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic die roller with forking for parallel simulations.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl DiceRng {
    /// Create a new roller with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Roll a die with the given number of sides, yielding `1..=sides`.
    ///
    /// Panics if `sides` is 0.
    pub fn roll(&mut self, sides: u32) -> u32 {
        assert!(sides > 0, "Die must have at least one side");
        self.inner.gen_range(1..=sides)
    }

    /// Roll two dice with the given number of sides.
    pub fn roll_pair(&mut self, sides: u32) -> (u32, u32) {
        (self.roll(sides), self.roll(sides))
    }

    /// Fork this roller to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DiceRngState {
        DiceRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DiceRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable roller state for checkpointing.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many rolls have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
