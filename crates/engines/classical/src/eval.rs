//! Mobility-based position evaluation.

use isolation_core::GridState;

/// Scores a position for the side the search runs on behalf of.
///
/// Called at every search horizon, so implementations should be cheap and
/// must not have side effects.
pub trait Evaluator: Send + Sync {
    /// `maximizing` is true when the side to move in `state` is the
    /// searching player, false when it is the opponent.
    fn score(&self, state: &GridState, maximizing: bool) -> f64;
}

impl<F> Evaluator for F
where
    F: Fn(&GridState, bool) -> f64 + Send + Sync,
{
    fn score(&self, state: &GridState, maximizing: bool) -> f64 {
        self(state, maximizing)
    }
}

/// Counts the searching player's open moves.
///
/// On a MAX layer the searcher is to move, so that is the active player's
/// move count; on a MIN layer the searcher just moved and is the inactive
/// player.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenMoveEval;

impl Evaluator for OpenMoveEval {
    fn score(&self, state: &GridState, maximizing: bool) -> f64 {
        let moves = if maximizing {
            state.legal_moves()
        } else {
            state.opponent_moves()
        };
        moves.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isolation_core::{Move, PlayerId};

    #[test]
    fn test_open_move_eval_counts_mover() {
        let state = GridState::from_diagram(
            &[
                ". 2 . . .",
                ". . . . .",
                ". . 1 . .",
                ". . . . .",
                ". . . . .",
            ],
            PlayerId::One,
        )
        .unwrap();

        assert_eq!(OpenMoveEval.score(&state, true), 16.0);
        assert_eq!(OpenMoveEval.score(&state, false), 12.0);
    }

    #[test]
    fn test_open_move_eval_opening() {
        let state = GridState::default().forecast(Move::new(2, 2));
        // Free placement still applies to both players after one move.
        assert_eq!(OpenMoveEval.score(&state, true), 24.0);
        assert_eq!(OpenMoveEval.score(&state, false), 24.0);
    }

    #[test]
    fn test_closure_evaluator() {
        let eval = |state: &GridState, _max: bool| state.blank_cells().len() as f64;
        assert_eq!(eval.score(&GridState::default(), true), 25.0);
    }
}
