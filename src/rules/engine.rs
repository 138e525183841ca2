//! The joint transition engine.
//!
//! `apply` is a pure function from a state plus one action per seat to the
//! next state. Pairs of the same action kind resolve jointly — that branch
//! owns the shared-resource conflicts (day advancement, seed collisions,
//! double harvests). Mixed pairs apply each side independently.

use crate::board::{Board, CellId};
use crate::core::{Action, GameState, Seat, MAX_TREE_SIZE};

use super::moves;
use super::COMPLETE_COST;

/// Rules engine bound to an immutable board.
#[derive(Clone, Copy, Debug)]
pub struct Engine<'b> {
    board: &'b Board,
}

impl<'b> Engine<'b> {
    /// Create an engine for the given board.
    #[must_use]
    pub const fn new(board: &'b Board) -> Self {
        Self { board }
    }

    /// The board this engine plays on.
    #[must_use]
    pub const fn board(&self) -> &'b Board {
        self.board
    }

    /// All legal actions for `seat`, deterministically ordered.
    #[must_use]
    pub fn legal_actions(&self, state: &GameState, seat: Seat) -> Vec<Action> {
        moves::legal_actions(self.board, state, seat)
    }

    /// Apply one action per seat, producing the next state.
    ///
    /// Both actions must come from [`Engine::legal_actions`] for their seat;
    /// anything else is a caller bug.
    #[must_use]
    pub fn apply(&self, state: &GameState, player: Action, opponent: Action) -> GameState {
        let mut next = state.clone();

        if player.kind() == opponent.kind() {
            self.resolve_joint(&mut next, player, opponent);
        } else {
            self.apply_single(&mut next, Seat::Player, player);
            self.apply_single(&mut next, Seat::Opponent, opponent);
        }
        next
    }

    /// Joint resolution for same-kind action pairs.
    fn resolve_joint(&self, state: &mut GameState, player: Action, opponent: Action) {
        match (player, opponent) {
            (Action::Wait, Action::Wait) => self.advance_day(state),
            (
                Action::Seed { source: player_source, target: player_target },
                Action::Seed { source: opponent_source, target: opponent_target },
            ) => {
                // Same target: the seed fails for both sides. Costs are paid
                // and throwers go dormant either way.
                let successful = player_target != opponent_target;
                self.seed(state, Seat::Player, player_source, player_target, successful);
                self.seed(state, Seat::Opponent, opponent_source, opponent_target, successful);
            }
            (Action::Grow { cell: player_cell }, Action::Grow { cell: opponent_cell }) => {
                self.grow(state, Seat::Player, player_cell);
                self.grow(state, Seat::Opponent, opponent_cell);
            }
            (Action::Complete { cell: player_cell }, Action::Complete { cell: opponent_cell }) => {
                // Sequential harvest: the second completer sees the already
                // decremented pool, and the opponent is credited one extra
                // point on top.
                self.complete(state, Seat::Player, player_cell);
                self.complete(state, Seat::Opponent, opponent_cell);
                state.score[Seat::Opponent] += 1;
            }
            _ => unreachable!("joint resolution requires matching action kinds"),
        }
    }

    /// One seat's action applied in isolation.
    fn apply_single(&self, state: &mut GameState, seat: Seat, action: Action) {
        match action {
            Action::Wait => state.waiting[seat] = true,
            Action::Seed { source, target } => self.seed(state, seat, source, target, true),
            Action::Grow { cell } => self.grow(state, seat, cell),
            Action::Complete { cell } => self.complete(state, seat, cell),
        }
    }

    /// Both seats waited: the day turns over. Dormant trees wake, the sun
    /// moves on, and income is collected under the new shadows.
    fn advance_day(&self, state: &mut GameState) {
        state.day += 1;
        for seat in Seat::ALL {
            let mut dormant = std::mem::take(&mut state.dormant[seat]);
            dormant.drain_into(&mut state.active[seat]);
            state.waiting[seat] = false;
        }
        state.refresh_shadows(self.board);

        let income = state.sun_income();
        for seat in Seat::ALL {
            state.sun[seat] += income[seat];
        }
    }

    fn seed(
        &self,
        state: &mut GameState,
        seat: Seat,
        source: CellId,
        target: CellId,
        successful: bool,
    ) {
        debug_assert!(state.active[seat].contains(source), "seeding from a non-active tree");

        state.active[seat].remove(source);
        state.dormant[seat].insert(source);
        // Cost equals the seed count before this throw.
        state.sun[seat] -= i32::from(state.trees_by_size[seat][0]);
        debug_assert!(state.sun[seat] >= 0, "seed cost exceeded banked sun");

        if successful {
            state.add_tree(seat, target, 0, true);
        }
    }

    fn grow(&self, state: &mut GameState, seat: Seat, cell: CellId) {
        let size = state.tree_at(cell).expect("growing an empty cell");
        debug_assert!(size < MAX_TREE_SIZE, "growing a mature tree");
        debug_assert!(state.active[seat].contains(cell), "growing a non-active tree");

        state.active[seat].remove(cell);
        state.dormant[seat].insert(cell);

        let size_index = size as usize;
        state.sun[seat] -= state.grow_cost[seat][size_index];
        debug_assert!(state.sun[seat] >= 0, "grow cost exceeded banked sun");

        // One more tree at the destination size makes the next grow into it
        // pricier; one fewer at the source size cheapens growing into it.
        state.grow_cost[seat][size_index] += 1;
        if size > 0 {
            state.grow_cost[seat][size_index - 1] -= 1;
        }
        state.trees_by_size[seat][size_index + 1] += 1;
        state.trees_by_size[seat][size_index] -= 1;

        state.remove_shadow(self.board, cell, size);
        state.add_shadow(self.board, cell, size + 1);
        state.tree_map[cell.index()] = Some(size + 1);
    }

    fn complete(&self, state: &mut GameState, seat: Seat, cell: CellId) {
        debug_assert_eq!(state.tree_at(cell), Some(MAX_TREE_SIZE), "completing a non-mature tree");
        debug_assert!(state.active[seat].contains(cell), "completing a non-active tree");
        debug_assert!(state.sun[seat] >= COMPLETE_COST);

        state.active[seat].remove(cell);
        state.remove_shadow(self.board, cell, MAX_TREE_SIZE);
        state.tree_map[cell.index()] = None;

        state.score[seat] += state.nutrients;
        state.nutrients -= 1;
        state.trees_by_size[seat][MAX_TREE_SIZE as usize] -= 1;
    }
}
