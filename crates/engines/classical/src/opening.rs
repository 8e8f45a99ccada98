//! Hard-coded opening replies tried before falling back to search.

use isolation_core::{Engine, GridState, Move, PlayerId, TimeLeft};

/// Cells the second player prefers on a 5x5 board when mirroring fails.
/// None of them lies on a line through the centre, so they break the
/// first player's reflection strategy.
const NON_REFLECTIVE_5X5: [Move; 8] = [
    Move::new(0, 1),
    Move::new(1, 0),
    Move::new(0, 3),
    Move::new(3, 0),
    Move::new(1, 4),
    Move::new(4, 1),
    Move::new(3, 4),
    Move::new(4, 3),
];

/// Opening book wrapped around another engine.
///
/// In order: take the centre if it is open, mirror the opponent's last
/// move through the centre, and (second player on a 5x5 board only) take
/// a non-reflective cell. Anything else goes to the wrapped engine.
pub struct OpeningBook<E> {
    fallback: E,
    name: String,
}

impl<E: Engine> OpeningBook<E> {
    pub fn new(fallback: E) -> Self {
        let name = format!("Book + {}", fallback.name());
        Self { fallback, name }
    }

    /// The book's reply, if any rule applies.
    pub fn book_move(state: &GridState, legal_moves: &[Move]) -> Option<Move> {
        let centre = Move::new(state.height() / 2, state.width() / 2);
        if legal_moves.contains(&centre) {
            return Some(centre);
        }

        let me = state.active_player();
        let last = state.last_move(me.other())?;

        let mirror = Move::new(state.height() - 1 - last.row, state.width() - 1 - last.col);
        if legal_moves.contains(&mirror) {
            return Some(mirror);
        }

        if me == PlayerId::Two && state.width() == 5 && state.height() == 5 {
            return NON_REFLECTIVE_5X5
                .iter()
                .find(|mv| legal_moves.contains(mv))
                .copied();
        }
        None
    }
}

impl<E: Engine> Engine for OpeningBook<E> {
    fn select_move(
        &mut self,
        state: &GridState,
        legal_moves: &[Move],
        time_left: &dyn TimeLeft,
    ) -> Option<Move> {
        if let Some(mv) = Self::book_move(state, legal_moves) {
            tracing::debug!(%mv, "book move");
            return Some(mv);
        }
        self.fallback.select_move(state, legal_moves, time_left)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.fallback.new_game();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Algorithm, SearchEngine};
    use isolation_core::Unlimited;

    type Book = OpeningBook<SearchEngine>;

    #[test]
    fn test_takes_centre_first() {
        let state = GridState::default();
        assert_eq!(Book::book_move(&state, &state.legal_moves()), Some(Move::new(2, 2)));
    }

    #[test]
    fn test_mirrors_opponent() {
        // Player one took the centre; player two took a corner.
        let state = GridState::default()
            .forecast(Move::new(2, 2))
            .forecast(Move::new(0, 0));
        assert_eq!(Book::book_move(&state, &state.legal_moves()), Some(Move::new(4, 4)));
    }

    #[test]
    fn test_second_player_avoids_reflection() {
        // Centre taken and its own mirror image, so rule three applies.
        let state = GridState::default().forecast(Move::new(2, 2));
        assert_eq!(state.active_player(), PlayerId::Two);
        assert_eq!(Book::book_move(&state, &state.legal_moves()), Some(Move::new(0, 1)));
    }

    #[test]
    fn test_first_player_falls_back_to_search() {
        let state = GridState::from_diagram(
            &[
                ". . . . .",
                ". . . . .",
                ". . x . .",
                ". . . 1 .",
                "o . . . 2",
            ],
            PlayerId::One,
        )
        .unwrap();
        // Centre occupied; the mirror of (4,4) is (0,0), which (3,3) cannot
        // reach past the occupied centre.
        let legal = state.legal_moves();
        assert_eq!(Book::book_move(&state, &legal), None);

        let mut book = OpeningBook::new(SearchEngine::new(Algorithm::AlphaBeta, 2));
        let mv = book.select_move(&state, &legal, &Unlimited);
        assert!(legal.contains(&mv.unwrap()));
        assert_eq!(book.name(), "Book + AlphaBeta d2");
    }
}
