//! Randomized playout properties.

use proptest::prelude::*;

use canopy::board::arena;
use canopy::{
    Action, Board, CellId, Engine, GameState, RoundInput, SearchRng, Seat, TreeRecord,
};

fn board() -> Board {
    Board::from_records(&arena::standard_records())
}

fn opening_state(board: &Board) -> GameState {
    RoundInput {
        day: 0,
        nutrients: 20,
        my_sun: 2,
        my_score: 0,
        opp_sun: 2,
        opp_score: 0,
        opp_waiting: false,
        trees: vec![
            TreeRecord { cell: CellId::new(20), size: 1, is_mine: true, is_dormant: false },
            TreeRecord { cell: CellId::new(29), size: 1, is_mine: true, is_dormant: false },
            TreeRecord { cell: CellId::new(23), size: 1, is_mine: false, is_dormant: false },
            TreeRecord { cell: CellId::new(32), size: 1, is_mine: false, is_dormant: false },
        ],
    }
    .to_state(board)
}

/// Drive a uniformly random game, calling `inspect` after every transition.
fn random_playout(
    board: &Board,
    seed: u64,
    max_steps: usize,
    mut inspect: impl FnMut(&GameState, &GameState),
) {
    let engine = Engine::new(board);
    let mut rng = SearchRng::new(seed);
    let mut state = opening_state(board);

    for _ in 0..max_steps {
        if state.is_terminal() {
            break;
        }
        let player_moves = engine.legal_actions(&state, Seat::Player);
        let opponent_moves = engine.legal_actions(&state, Seat::Opponent);
        let player = *rng.choose(&player_moves).unwrap_or(&Action::Wait);
        let opponent = *rng.choose(&opponent_moves).unwrap_or(&Action::Wait);

        let next = engine.apply(&state, player, opponent);
        inspect(&state, &next);
        state = next;
    }
}

fn assert_invariants(board: &Board, prev: &GameState, state: &GameState) {
    assert!(state.nutrients <= prev.nutrients, "nutrients increased");
    for seat in Seat::ALL {
        assert!(state.sun[seat] >= 0, "negative sun");
        assert!(state.score[seat] >= prev.score[seat], "score decreased");

        let owned = state.active[seat].len() + state.dormant[seat].len();
        let counted: usize = state.trees_by_size[seat].iter().map(|&n| n as usize).sum();
        assert_eq!(owned, counted, "tree counts out of sync");

        for cell in state.active[seat].iter().chain(state.dormant[seat].iter()) {
            let size = state.tree_at(cell).expect("tracked tree missing");
            assert!(size <= 3, "oversized tree");
        }
    }
    for id in board.cell_ids() {
        assert_eq!(state.tree_at(id).is_some(), state.owner_of(id).is_some());
    }
}

fn assert_shadows_match_rebuild(board: &Board, state: &GameState) {
    let mut rebuilt = state.clone();
    rebuilt.refresh_shadows(board);
    for id in board.cell_ids() {
        for caster in 1..=3 {
            assert_eq!(
                state.shadow_count(id, caster),
                rebuilt.shadow_count(id, caster),
                "stale shadow counter at {id} for caster size {caster}"
            );
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_random_playouts_preserve_invariants(seed in any::<u64>()) {
        let board = board();
        random_playout(&board, seed, 120, |prev, next| {
            assert_invariants(&board, prev, next);
        });
    }

    #[test]
    fn prop_incremental_shadows_match_full_rebuild(seed in any::<u64>()) {
        let board = board();
        random_playout(&board, seed, 80, |_, next| {
            assert_shadows_match_rebuild(&board, next);
        });
    }

    #[test]
    fn prop_playouts_are_deterministic(seed in any::<u64>()) {
        let board = board();
        let mut trace_a = Vec::new();
        let mut trace_b = Vec::new();
        random_playout(&board, seed, 60, |_, next| trace_a.push(next.clone()));
        random_playout(&board, seed, 60, |_, next| trace_b.push(next.clone()));
        prop_assert_eq!(trace_a, trace_b);
    }

    #[test]
    fn prop_nutrients_drop_one_per_completion(seed in any::<u64>()) {
        let board = board();
        random_playout(&board, seed, 120, |prev, next| {
            let gained: i32 = Seat::ALL
                .into_iter()
                .map(|seat| {
                    i32::from(prev.trees_by_size[seat][3])
                        - i32::from(next.trees_by_size[seat][3])
                })
                .sum();
            let completed = gained.max(0);
            if completed > 0 {
                assert_eq!(prev.nutrients - next.nutrients, completed);
            }
        });
    }
}
