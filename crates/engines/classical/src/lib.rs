//! Classical Isolation Engine
//!
//! Minimax and alpha-beta search over [`GridState`] forecasts with a
//! pluggable evaluation function. This is the baseline search player.

mod eval;
mod opening;
mod search;

use isolation_core::{Engine, GridState, Move, TimeLeft};

pub use eval::{Evaluator, OpenMoveEval};
pub use opening::OpeningBook;
pub use search::{
    alpha_beta, minimax, search, Algorithm, SearchLimits, SearchResult, DEFAULT_TIME_MARGIN_MS,
};

/// Move selector driven by tree search.
///
/// This engine uses:
/// - Minimax or alpha-beta search, selected by [`Algorithm`]
/// - Open-move (mobility) evaluation unless another [`Evaluator`] is supplied
/// - The caller's clock, keeping [`DEFAULT_TIME_MARGIN_MS`] in reserve
pub struct SearchEngine {
    algorithm: Algorithm,
    limits: SearchLimits,
    eval: Box<dyn Evaluator>,
    name: String,
    /// Node counter of the last search, for statistics
    nodes: u64,
}

impl SearchEngine {
    pub fn new(algorithm: Algorithm, depth: u32) -> Self {
        Self::with_evaluator(algorithm, SearchLimits::depth(depth), OpenMoveEval)
    }

    pub fn with_evaluator(
        algorithm: Algorithm,
        limits: SearchLimits,
        eval: impl Evaluator + 'static,
    ) -> Self {
        let label = match algorithm {
            Algorithm::Minimax => "Minimax",
            Algorithm::AlphaBeta => "AlphaBeta",
        };
        Self {
            algorithm,
            limits,
            eval: Box::new(eval),
            name: format!("{label} d{}", limits.depth),
            nodes: 0,
        }
    }

    /// Run the configured search without the engine wrapper's fallbacks.
    pub fn analyze(&mut self, state: &GridState, time_left: &dyn TimeLeft) -> SearchResult {
        let result = search(state, self.algorithm, self.limits, self.eval.as_ref(), time_left);
        self.nodes = result.nodes;
        result
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for SearchEngine {
    fn select_move(
        &mut self,
        state: &GridState,
        legal_moves: &[Move],
        time_left: &dyn TimeLeft,
    ) -> Option<Move> {
        let result = self.analyze(state, time_left);
        result
            .best_move
            .filter(|mv| legal_moves.contains(mv))
            .or_else(|| legal_moves.first().copied())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
