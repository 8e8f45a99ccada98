//! Error types for board construction and move application

use thiserror::Error;

use crate::types::{Move, PlayerId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("invalid board dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: usize, height: usize },

    #[error("move {mv} is outside the {width}x{height} board")]
    OutOfBounds { mv: Move, width: usize, height: usize },

    #[error("cell {mv} is already occupied")]
    Occupied { mv: Move },

    #[error("move {mv} is not reachable for {player}")]
    IllegalMove { mv: Move, player: PlayerId },

    #[error("invalid position: {message}")]
    InvalidPosition { message: String },
}
