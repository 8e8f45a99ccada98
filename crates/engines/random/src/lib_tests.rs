use super::*;
use isolation_core::{PlayerId, Unlimited};

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let state = GridState::default()
        .forecast(Move::new(1, 1))
        .forecast(Move::new(3, 3));
    let legal = state.legal_moves();

    for _ in 0..20 {
        let mv = engine.select_move(&state, &legal, &Unlimited);
        assert!(legal.contains(&mv.unwrap()));
    }
}

#[test]
fn random_engine_handles_stuck_position() {
    let mut engine = RandomEngine::new();
    let state = GridState::from_diagram(&["1 x", "o 2"], PlayerId::One).unwrap();

    assert!(state.legal_moves().is_empty());
    assert_eq!(engine.select_move(&state, &[], &Unlimited), None);
}

#[test]
fn seeded_engines_agree() {
    let state = GridState::default();
    let legal = state.legal_moves();
    let mut a = RandomEngine::seeded(11);
    let mut b = RandomEngine::seeded(11);

    for _ in 0..10 {
        assert_eq!(
            a.select_move(&state, &legal, &Unlimited),
            b.select_move(&state, &legal, &Unlimited)
        );
    }
}
