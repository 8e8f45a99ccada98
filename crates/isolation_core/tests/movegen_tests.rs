//! Move generation properties checked over randomly played positions.

use std::collections::HashSet;

use isolation_core::{GridState, Move, PlayerId};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

/// Plays `choices` as indices into the legal move list until the
/// sequence runs out or the side to move is stuck.
fn play_indices(width: usize, height: usize, choices: &[usize]) -> GridState {
    let mut state = GridState::new(width, height).expect("positive dimensions");
    for &choice in choices {
        let moves = state.legal_moves();
        if moves.is_empty() {
            break;
        }
        state = state.forecast(moves[choice % moves.len()]);
    }
    state
}

fn play_random_game(seed: u64) -> (GridState, Vec<Move>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GridState::default();
    let mut history = Vec::new();
    while let Some(&mv) = state.legal_moves().choose(&mut rng) {
        history.push(mv);
        state = state.forecast(mv);
    }
    (state, history)
}

proptest! {
    #[test]
    fn legal_moves_match_slide_rule(
        width in 1usize..7,
        height in 1usize..7,
        choices in prop::collection::vec(0usize..64, 0..40),
    ) {
        let state = play_indices(width, height, &choices);
        let blanks: HashSet<Move> = state.blank_cells().into_iter().collect();

        for player in PlayerId::ALL {
            let moves: HashSet<Move> = state.legal_moves_for(player).into_iter().collect();

            if state.move_count() < 2 {
                prop_assert_eq!(&moves, &blanks);
                continue;
            }

            let from = state.last_move(player).expect("both players have moved");
            for mv in &moves {
                prop_assert!(blanks.contains(mv));
                prop_assert!(state.is_legal_move(*mv, from));
            }
            for cell in blanks.difference(&moves) {
                prop_assert!(!state.is_legal_move(*cell, from));
            }
        }
    }

    #[test]
    fn marks_track_moves(choices in prop::collection::vec(0usize..64, 0..30)) {
        let state = play_indices(5, 5, &choices);
        let one = state.cells_occupied_by(PlayerId::One).len() as u32;
        let two = state.cells_occupied_by(PlayerId::Two).len() as u32;

        prop_assert_eq!(state.move_count(), one + two);
        let expected_active = if one == two { PlayerId::One } else { PlayerId::Two };
        prop_assert_eq!(state.active_player(), expected_active);
        prop_assert_ne!(state.active_player(), state.inactive_player());
        prop_assert_eq!(
            state.blank_cells().len() as u32,
            (state.width() * state.height()) as u32 - state.move_count()
        );
    }

    #[test]
    fn forecast_is_pure(choices in prop::collection::vec(0usize..64, 0..20)) {
        let state = play_indices(5, 5, &choices);
        let before = state.clone();
        let one_before = state.legal_moves_for(PlayerId::One);
        let two_before = state.legal_moves_for(PlayerId::Two);

        for mv in state.legal_moves() {
            let child = state.forecast(mv);
            prop_assert_eq!(child.move_count(), state.move_count() + 1);
            prop_assert_eq!(child.active_player(), state.inactive_player());
        }

        prop_assert_eq!(&state, &before);
        prop_assert_eq!(state.legal_moves_for(PlayerId::One), one_before);
        prop_assert_eq!(state.legal_moves_for(PlayerId::Two), two_before);
    }

    #[test]
    fn winner_is_the_side_not_to_move(choices in prop::collection::vec(0usize..64, 0..40)) {
        let state = play_indices(4, 4, &choices);
        let stuck = state.legal_moves().is_empty();

        prop_assert_eq!(state.is_terminal(), stuck);
        prop_assert_eq!(state.is_winner(state.inactive_player()), stuck);
        prop_assert_eq!(state.is_loser(state.active_player()), stuck);
        prop_assert!(!state.is_winner(state.active_player()));
        prop_assert!(!state.is_loser(state.inactive_player()));
    }
}

#[test]
fn test_random_games_terminate() {
    let results: Vec<_> = (0..256u64).into_par_iter().map(play_random_game).collect();

    for (state, history) in results {
        assert!(state.is_terminal());
        assert!(history.len() <= 25);
        assert_eq!(state.move_count() as usize, history.len());
        assert!(state.is_winner(state.inactive_player()));

        // Replaying through the checked API must agree with the fast path.
        let mut replay = GridState::default();
        for mv in &history {
            replay = replay.try_forecast(*mv).expect("recorded move is legal");
        }
        assert_eq!(replay, state);
    }
}

#[test]
fn test_first_reply_sees_all_remaining_cells() {
    for row in 0..5 {
        for col in 0..5 {
            let state = GridState::default().forecast(Move::new(row, col));
            let moves = state.legal_moves_for(PlayerId::Two);
            assert_eq!(moves.len(), 24);
            assert!(!moves.contains(&Move::new(row, col)));
        }
    }
}
