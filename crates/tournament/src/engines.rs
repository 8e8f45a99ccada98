//! Engine construction from command-line style specs

use classical_engine::{Algorithm, OpeningBook, SearchEngine};
use isolation_core::Engine;
use random_engine::RandomEngine;

use crate::error::TournamentError;
use crate::human::HumanEngine;

/// Build an engine from a spec such as `alphabeta:5`.
///
/// Search engines take an optional `:depth` suffix and otherwise use
/// `default_depth`.
pub fn create_engine(spec: &str, default_depth: u32) -> Result<Box<dyn Engine>, TournamentError> {
    let (kind, depth) = match spec.split_once(':') {
        Some((kind, depth)) => {
            let depth = depth
                .parse()
                .map_err(|_| TournamentError::UnknownEngine(spec.to_string()))?;
            (kind, depth)
        }
        None => (spec, default_depth),
    };

    let engine: Box<dyn Engine> = match kind.to_lowercase().as_str() {
        "random" | "rand" => Box::new(RandomEngine::new()),
        "minimax" | "mm" => Box::new(SearchEngine::new(Algorithm::Minimax, depth)),
        "alphabeta" | "ab" => Box::new(SearchEngine::new(Algorithm::AlphaBeta, depth)),
        "book" => Box::new(OpeningBook::new(SearchEngine::new(
            Algorithm::AlphaBeta,
            depth,
        ))),
        "human" => Box::new(HumanEngine::stdio()),
        _ => return Err(TournamentError::UnknownEngine(spec.to_string())),
    };
    Ok(engine)
}
