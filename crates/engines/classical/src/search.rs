//! Depth- and time-bounded minimax and alpha-beta search.
//!
//! Both searches run on behalf of the player to move at the root (the
//! "owner"). Layers alternate MAX (owner to move) and MIN (opponent to
//! move). Every node polls the caller's clock before expanding and falls
//! back to its utility once fewer than `time_margin_ms` remain.

use isolation_core::{GridState, Move, PlayerId, TimeLeft};
use tracing::debug;

use crate::eval::Evaluator;

/// Headroom kept on the clock so a result can still be returned.
pub const DEFAULT_TIME_MARGIN_MS: i64 = 500;

const INF: f64 = f64::INFINITY;

/// Which tree search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    Minimax,
    #[default]
    AlphaBeta,
}

/// Depth and clock limits for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum search depth in plies
    pub depth: u32,
    /// Abandon exploration once fewer milliseconds than this remain
    pub time_margin_ms: i64,
}

impl SearchLimits {
    /// Limits with the given depth and the default time margin.
    pub fn depth(depth: u32) -> Self {
        Self {
            depth,
            time_margin_ms: DEFAULT_TIME_MARGIN_MS,
        }
    }

    pub fn with_margin(mut self, time_margin_ms: i64) -> Self {
        self.time_margin_ms = time_margin_ms;
        self
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The best move found (None if the root has no legal moves)
    pub best_move: Option<Move>,
    /// Utility of `best_move` from the owner's perspective
    pub score: f64,
    /// Depth requested
    pub depth: u32,
    /// Number of states forecast during the search
    pub nodes: u64,
    /// Whether the clock cut the search short
    pub stopped: bool,
}

/// Plain minimax, no pruning.
pub fn minimax(
    state: &GridState,
    limits: SearchLimits,
    eval: &dyn Evaluator,
    time_left: &dyn TimeLeft,
) -> SearchResult {
    Searcher::new(state.active_player(), limits, eval, time_left).run(state, Algorithm::Minimax)
}

/// Minimax with alpha-beta pruning. Returns the same utility as
/// [`minimax`] for the same inputs.
pub fn alpha_beta(
    state: &GridState,
    limits: SearchLimits,
    eval: &dyn Evaluator,
    time_left: &dyn TimeLeft,
) -> SearchResult {
    Searcher::new(state.active_player(), limits, eval, time_left).run(state, Algorithm::AlphaBeta)
}

/// Dispatch on `algorithm`.
pub fn search(
    state: &GridState,
    algorithm: Algorithm,
    limits: SearchLimits,
    eval: &dyn Evaluator,
    time_left: &dyn TimeLeft,
) -> SearchResult {
    match algorithm {
        Algorithm::Minimax => minimax(state, limits, eval, time_left),
        Algorithm::AlphaBeta => alpha_beta(state, limits, eval, time_left),
    }
}

struct Searcher<'a> {
    owner: PlayerId,
    limits: SearchLimits,
    eval: &'a dyn Evaluator,
    time_left: &'a dyn TimeLeft,
    nodes: u64,
    stopped: bool,
}

impl<'a> Searcher<'a> {
    fn new(
        owner: PlayerId,
        limits: SearchLimits,
        eval: &'a dyn Evaluator,
        time_left: &'a dyn TimeLeft,
    ) -> Self {
        Self {
            owner,
            limits,
            eval,
            time_left,
            nodes: 0,
            stopped: false,
        }
    }

    fn run(mut self, root: &GridState, algorithm: Algorithm) -> SearchResult {
        let depth = self.limits.depth;
        let moves = root.legal_moves();

        let Some(&first) = moves.first() else {
            let score = self.utility(root, true);
            return self.finish(None, score, algorithm);
        };

        if self.cutoff(root, depth) {
            let score = self.utility(root, true);
            return self.finish(Some(first), score, algorithm);
        }

        let mut best_move = first;
        let mut best_score = -INF;
        for mv in moves {
            let child = self.expand(root, mv);
            let score = match algorithm {
                Algorithm::Minimax => self.min_value(&child, depth - 1),
                Algorithm::AlphaBeta => self.ab_min_value(&child, depth - 1, best_score, INF),
            };

            // First-seen move wins ties.
            if score > best_score {
                best_score = score;
                best_move = mv;
            }
            if self.stopped {
                break;
            }
        }

        self.finish(Some(best_move), best_score, algorithm)
    }

    fn finish(self, best_move: Option<Move>, score: f64, algorithm: Algorithm) -> SearchResult {
        debug!(
            ?algorithm,
            owner = %self.owner,
            depth = self.limits.depth,
            nodes = self.nodes,
            stopped = self.stopped,
            score,
            best_move = ?best_move,
            "search finished"
        );
        SearchResult {
            best_move,
            score,
            depth: self.limits.depth,
            nodes: self.nodes,
            stopped: self.stopped,
        }
    }

    #[inline]
    fn expand(&mut self, state: &GridState, mv: Move) -> GridState {
        self.nodes += 1;
        state.forecast(mv)
    }

    /// Horizon, clock or decisive outcome. The clock is polled on every call.
    fn cutoff(&mut self, state: &GridState, depth: u32) -> bool {
        if self.time_left.remaining_ms() < self.limits.time_margin_ms {
            self.stopped = true;
            return true;
        }
        depth == 0 || state.is_winner(self.owner) || state.is_loser(self.owner)
    }

    fn utility(&self, state: &GridState, maximizing: bool) -> f64 {
        if state.is_winner(self.owner) {
            INF
        } else if state.is_loser(self.owner) {
            -INF
        } else {
            self.eval.score(state, maximizing)
        }
    }

    fn max_value(&mut self, state: &GridState, depth: u32) -> f64 {
        if self.cutoff(state, depth) {
            return self.utility(state, true);
        }
        let mut best = -INF;
        for mv in state.legal_moves() {
            let child = self.expand(state, mv);
            best = best.max(self.min_value(&child, depth - 1));
        }
        best
    }

    fn min_value(&mut self, state: &GridState, depth: u32) -> f64 {
        if self.cutoff(state, depth) {
            return self.utility(state, false);
        }
        let mut best = INF;
        for mv in state.legal_moves() {
            let child = self.expand(state, mv);
            best = best.min(self.max_value(&child, depth - 1));
        }
        best
    }

    fn ab_max_value(&mut self, state: &GridState, depth: u32, mut alpha: f64, beta: f64) -> f64 {
        if self.cutoff(state, depth) {
            return self.utility(state, true);
        }
        let mut best = -INF;
        for mv in state.legal_moves() {
            let child = self.expand(state, mv);
            let score = self.ab_min_value(&child, depth - 1, alpha, beta);
            if score >= beta {
                return score; // Beta cutoff
            }
            best = best.max(score);
            alpha = alpha.max(score);
        }
        best
    }

    fn ab_min_value(&mut self, state: &GridState, depth: u32, alpha: f64, mut beta: f64) -> f64 {
        if self.cutoff(state, depth) {
            return self.utility(state, false);
        }
        let mut best = INF;
        for mv in state.legal_moves() {
            let child = self.expand(state, mv);
            let score = self.ab_max_value(&child, depth - 1, alpha, beta);
            if score <= alpha {
                return score; // Alpha cutoff
            }
            best = best.min(score);
            beta = beta.min(score);
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
