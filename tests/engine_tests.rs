//! End-to-end transition scenarios through the public ingestion path.

use canopy::board::arena;
use canopy::{
    Action, Board, CellId, Engine, GameState, RoundInput, Seat, TreeRecord, BASE_GROW_COSTS,
};

fn board() -> Board {
    Board::from_records(&arena::standard_records())
}

fn cell(id: u8) -> CellId {
    CellId::new(id)
}

/// Build a round state: `(cell, size, is_mine, is_dormant)` per tree.
fn state(
    board: &Board,
    day: u8,
    nutrients: i32,
    sun: (i32, i32),
    trees: &[(u8, u8, bool, bool)],
) -> GameState {
    RoundInput {
        day,
        nutrients,
        my_sun: sun.0,
        my_score: 0,
        opp_sun: sun.1,
        opp_score: 0,
        opp_waiting: false,
        trees: trees
            .iter()
            .map(|&(cell, size, is_mine, is_dormant)| TreeRecord {
                cell: CellId::new(cell),
                size,
                is_mine,
                is_dormant,
            })
            .collect(),
    }
    .to_state(board)
}

#[test]
fn test_transitions_are_deterministic() {
    let board = board();
    let engine = Engine::new(&board);
    let start = state(&board, 2, 20, (6, 6), &[(0, 1, true, false), (20, 2, false, false)]);

    let player = Action::Grow { cell: cell(0) };
    let opponent = Action::Seed { source: cell(20), target: cell(21) };
    let a = engine.apply(&start, player, opponent);
    let b = engine.apply(&start, player, opponent);
    assert_eq!(a, b);
}

#[test]
fn test_grow_cost_schedule_scenario() {
    let board = board();
    let engine = Engine::new(&board);
    // One size-1 tree, base schedule.
    let start = state(&board, 0, 20, (10, 0), &[(5, 1, true, false)]);
    assert_eq!(start.grow_cost[Seat::Player], [2, 3, 7]);

    let next = engine.apply(&start, Action::Grow { cell: cell(5) }, Action::Wait);

    // The tree left size 1 and arrived at size 2.
    assert_eq!(next.grow_cost[Seat::Player][1], start.grow_cost[Seat::Player][1] + 1);
    assert_eq!(next.grow_cost[Seat::Player][0], BASE_GROW_COSTS[0]);
    assert_eq!(next.grow_cost[Seat::Player][2], BASE_GROW_COSTS[2]);
    assert_eq!(next.sun[Seat::Player], 10 - start.grow_cost[Seat::Player][1]);
    assert!(next.dormant[Seat::Player].contains(cell(5)));
}

#[test]
fn test_sun_income_after_joint_wait() {
    let board = board();
    let engine = Engine::new(&board);
    // A lone unshadowed size-2 tree with no banked sun.
    let start = state(&board, 4, 20, (0, 0), &[(9, 2, true, true)]);

    let next = engine.apply(&start, Action::Wait, Action::Wait);

    assert_eq!(next.day, 5);
    assert_eq!(next.sun[Seat::Player], 2);
    assert!(next.active[Seat::Player].contains(cell(9)));
    assert!(next.dormant[Seat::Player].is_empty());
    assert!(!next.waiting[Seat::Player]);
}

#[test]
fn test_seed_conflict_leaves_cell_empty_and_charges_both() {
    let board = board();
    let engine = Engine::new(&board);
    // Both sides hold one seed already, so each throw costs 1.
    let start = state(
        &board,
        0,
        20,
        (5, 5),
        &[
            (1, 2, true, false),
            (30, 0, true, true),
            (4, 2, false, false),
            (33, 0, false, true),
        ],
    );

    let target = cell(0);
    let next = engine.apply(
        &start,
        Action::Seed { source: cell(1), target },
        Action::Seed { source: cell(4), target },
    );

    assert!(next.is_empty_cell(target));
    assert_eq!(next.sun[Seat::Player], 4);
    assert_eq!(next.sun[Seat::Opponent], 4);
    assert!(next.dormant[Seat::Player].contains(cell(1)));
    assert!(next.dormant[Seat::Opponent].contains(cell(4)));
    assert_eq!(next.trees_by_size[Seat::Player][0], 1);
}

#[test]
fn test_seeds_on_distinct_cells_both_land() {
    let board = board();
    let engine = Engine::new(&board);
    let start = state(&board, 0, 20, (5, 5), &[(1, 2, true, false), (4, 2, false, false)]);

    let next = engine.apply(
        &start,
        Action::Seed { source: cell(1), target: cell(0) },
        Action::Seed { source: cell(4), target: cell(13) },
    );

    assert_eq!(next.tree_at(cell(0)), Some(0));
    assert_eq!(next.tree_at(cell(13)), Some(0));
    assert_eq!(next.owner_of(cell(0)), Some(Seat::Player));
    assert_eq!(next.owner_of(cell(13)), Some(Seat::Opponent));
    assert!(next.dormant[Seat::Player].contains(cell(0)));
}

#[test]
fn test_joint_completion_harvests_sequentially() {
    let board = board();
    let engine = Engine::new(&board);
    let start = state(&board, 10, 20, (6, 6), &[(2, 3, true, false), (5, 3, false, false)]);

    let next = engine.apply(
        &start,
        Action::Complete { cell: cell(2) },
        Action::Complete { cell: cell(5) },
    );

    // Player harvests the full pool, the opponent the decremented one plus
    // the joint-branch bonus point.
    assert_eq!(next.score[Seat::Player], 20);
    assert_eq!(next.score[Seat::Opponent], 19 + 1);
    assert_eq!(next.nutrients, 18);
    assert!(next.is_empty_cell(cell(2)));
    assert!(next.is_empty_cell(cell(5)));
    assert_eq!(next.trees_by_size[Seat::Player][3], 0);
}

#[test]
fn test_nutrients_drop_once_per_completion() {
    let board = board();
    let engine = Engine::new(&board);
    let start = state(&board, 10, 20, (6, 0), &[(2, 3, true, false)]);

    let next = engine.apply(&start, Action::Complete { cell: cell(2) }, Action::Wait);
    assert_eq!(next.nutrients, 19);
    assert_eq!(next.score[Seat::Player], 20);
    assert!(next.waiting[Seat::Opponent]);
}

#[test]
fn test_single_wait_does_not_advance_day() {
    let board = board();
    let engine = Engine::new(&board);
    let start = state(&board, 7, 20, (3, 3), &[(0, 1, true, false), (18, 1, false, false)]);

    let next = engine.apply(&start, Action::Wait, Action::Grow { cell: cell(18) });

    assert_eq!(next.day, 7);
    assert!(next.waiting[Seat::Player]);
    assert!(!next.waiting[Seat::Opponent]);

    // The waiting seat can only keep waiting.
    assert_eq!(engine.legal_actions(&next, Seat::Player), vec![Action::Wait]);
}

#[test]
fn test_reachable_seed_targets_from_center() {
    let board = board();
    let engine = Engine::new(&board);
    // A size-2 tree at the center of an otherwise empty board reaches the
    // 18 cells of rings one and two.
    let start = state(&board, 0, 20, (5, 0), &[(0, 2, true, false)]);

    let seeds: Vec<Action> = engine
        .legal_actions(&start, Seat::Player)
        .into_iter()
        .filter(|action| matches!(action, Action::Seed { .. }))
        .collect();
    assert_eq!(seeds.len(), 18);
}

#[test]
fn test_legality_closure_preserves_invariants() {
    let board = board();
    let engine = Engine::new(&board);
    let start = state(
        &board,
        6,
        18,
        (9, 9),
        &[
            (0, 2, true, false),
            (7, 1, true, false),
            (24, 3, true, false),
            (10, 2, false, false),
            (31, 0, false, false),
        ],
    );

    for action in engine.legal_actions(&start, Seat::Player) {
        let next = engine.apply(&start, action, Action::Wait);
        assert_invariants(&board, &next);
        assert!(next.nutrients <= start.nutrients);
    }
}

/// Structural invariants every reachable state must satisfy.
fn assert_invariants(board: &Board, state: &GameState) {
    for seat in Seat::ALL {
        assert!(state.sun[seat] >= 0, "negative sun for {seat}");
        assert!(state.score[seat] >= 0, "negative score for {seat}");

        let owned = state.active[seat].len() + state.dormant[seat].len();
        let counted: usize = state.trees_by_size[seat].iter().map(|&n| n as usize).sum();
        assert_eq!(owned, counted, "tree counts out of sync for {seat}");

        for cell in state.active[seat].iter().chain(state.dormant[seat].iter()) {
            assert!(state.tree_at(cell).is_some(), "tracked tree missing at {cell}");
            assert_eq!(state.owner_of(cell), Some(seat));
        }
        for cell in state.active[seat].iter() {
            assert!(!state.dormant[seat].contains(cell), "tree both active and dormant");
        }
    }

    for id in board.cell_ids() {
        if let Some(size) = state.tree_at(id) {
            assert!(size <= 3, "oversized tree at {id}");
            assert!(state.owner_of(id).is_some(), "orphan tree at {id}");
        }
    }
}
