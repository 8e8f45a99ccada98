//! Error types for the tournament driver

use std::path::PathBuf;

use isolation_core::GameError;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TournamentError {
    #[error("failed to {operation} {}: {source}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown engine '{0}' (expected random, minimax[:D], alphabeta[:D], book[:D] or human)")]
    UnknownEngine(String),

    #[error(transparent)]
    Game(#[from] GameError),
}
