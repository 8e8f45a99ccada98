pub mod board;
pub mod error;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::GameError;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move selector (search, random, human, ...)
// =============================================================================

/// Trait that all move selectors must implement.
///
/// The driver asks the active player's engine for a move, passing the
/// current state, the already-computed legal moves and a remaining-time
/// oracle. The returned move must be one of `legal_moves`; anything else,
/// `None`, or answering after the clock ran out forfeits the game.
pub trait Engine: Send {
    /// Pick a move for the player to move in `state`.
    ///
    /// # Arguments
    /// * `state` - The current position
    /// * `legal_moves` - Legal moves for the active player
    /// * `time_left` - Milliseconds remaining for this move
    ///
    /// # Returns
    /// The chosen move, or `None` if no move could be produced
    fn select_move(
        &mut self,
        state: &GridState,
        legal_moves: &[Move],
        time_left: &dyn TimeLeft,
    ) -> Option<Move>;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
