//! Random Move Isolation Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons (any search engine should easily beat this)
//! - Exercising the game driver and move generation

use isolation_core::{Engine, GridState, Move, TimeLeft};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(test)]
mod lib_tests;

/// An engine that plays random legal moves.
///
/// Seeded instances replay the same choices for the same positions, which
/// keeps driver tests reproducible.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn select_move(
        &mut self,
        _state: &GridState,
        legal_moves: &[Move],
        _time_left: &dyn TimeLeft,
    ) -> Option<Move> {
        legal_moves.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
