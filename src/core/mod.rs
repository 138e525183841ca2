//! Core engine types: seats, actions, tree sets, game state, RNG.
//!
//! Everything here is a value type. A [`GameState`] is a fully self-contained
//! snapshot: transitions copy it and modify the copy, so no two branches of a
//! search ever alias mutable state.

pub mod action;
pub mod rng;
pub mod seat;
pub mod state;
pub mod tree_set;

pub use action::{Action, ActionKind};
pub use rng::SearchRng;
pub use seat::{Seat, SeatMap};
pub use state::{GameState, BASE_GROW_COSTS, FINAL_DAY, MAX_TREE_SIZE};
pub use tree_set::TreeSet;
