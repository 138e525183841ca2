//! Legal move enumeration.
//!
//! Output order is deterministic for reproducible search and testing:
//! `Wait` first, then each active tree in ascending cell order contributing
//! its grow, complete, and seed actions (seed targets ascending).

use crate::board::{Board, CellId, CELL_COUNT};
use crate::core::{Action, GameState, Seat, MAX_TREE_SIZE};

use super::COMPLETE_COST;

/// All legal actions for `seat` this round.
///
/// A waiting seat can only keep waiting; otherwise `Wait` is always legal
/// and always first.
#[must_use]
pub fn legal_actions(board: &Board, state: &GameState, seat: Seat) -> Vec<Action> {
    let mut actions = vec![Action::Wait];
    if state.waiting[seat] {
        return actions;
    }

    let sun = state.sun[seat];
    let seed_cost = i32::from(state.trees_by_size[seat][0]);

    for cell in state.active[seat].iter() {
        let size = state
            .tree_at(cell)
            .expect("active set points at an empty cell");

        if size < MAX_TREE_SIZE {
            if sun >= state.grow_cost[seat][size as usize] {
                actions.push(Action::Grow { cell });
            }
            if sun >= seed_cost {
                for target in seed_targets(board, state, cell, size) {
                    actions.push(Action::Seed { source: cell, target });
                }
            }
        } else if sun >= COMPLETE_COST {
            actions.push(Action::Complete { cell });
        }
    }
    actions
}

/// Empty fertile cells reachable within `radius` hex-steps of `source`.
///
/// Bounded breadth-first flood that only traverses empty fertile cells;
/// each cell is collected the first time it is reached and the source is
/// excluded. Results come back in ascending cell order.
#[must_use]
pub fn seed_targets(board: &Board, state: &GameState, source: CellId, radius: u8) -> Vec<CellId> {
    let mut reached = [false; CELL_COUNT];
    let mut frontier = vec![source];
    let mut next_frontier = Vec::new();

    for _ in 0..radius {
        for &cell in &frontier {
            for neighbor in board.cell(cell).neighbors.into_iter().flatten() {
                if !reached[neighbor.index()]
                    && state.is_empty_cell(neighbor)
                    && board.is_usable(neighbor)
                {
                    reached[neighbor.index()] = true;
                    next_frontier.push(neighbor);
                }
            }
        }
        frontier.clear();
        std::mem::swap(&mut frontier, &mut next_frontier);
    }

    reached[source.index()] = false;
    (0..CELL_COUNT as u8)
        .map(CellId::new)
        .filter(|cell| reached[cell.index()])
        .collect()
}
