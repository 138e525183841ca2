//! # canopy
//!
//! A forest-duel simulation engine for simultaneous-move lookahead bots.
//!
//! ## Design Principles
//!
//! 1. **Value-Type States**: A [`GameState`] is a self-contained snapshot;
//!    every transition copies, so search branches never alias each other.
//!
//! 2. **Injected Topology**: The fixed 37-cell [`Board`] is built once and
//!    passed into every rules call. No globals.
//!
//! 3. **Joint Resolution**: Both seats act every round; the [`Engine`]
//!    resolves the pair, including same-kind conflicts, in one pure call.
//!
//! ## Architecture
//!
//! - **Bounded Lookahead**: the [`LookaheadTree`] expands the full cross
//!   product of both seats' moves, so depth stays small and a node cap plus
//!   wall-clock budget keep every round inside the referee's deadline.
//!
//! - **Root Rebasing**: between rounds the observed state is matched against
//!   the old root's children to reuse already-expanded subtrees.
//!
//! ## Modules
//!
//! - `board`: cells, directions, fertility, the 37-cell topology
//! - `core`: seats, actions, tree sets, game state, RNG
//! - `rules`: legal-move generation and the transition engine
//! - `search`: lookahead tree, opponent policies, move selection
//! - `protocol`: referee text protocol and state derivation

pub mod board;
pub mod core;
pub mod protocol;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::board::{Board, Cell, CellId, CellRecord, Direction, Fertility, CELL_COUNT};

pub use crate::core::{
    Action, ActionKind, GameState, SearchRng, Seat, SeatMap, TreeSet, BASE_GROW_COSTS, FINAL_DAY,
    MAX_TREE_SIZE,
};

pub use crate::rules::{Engine, COMPLETE_COST};

pub use crate::search::{
    LookaheadTree, MoveSelector, NodeId, OpponentPolicy, RandomOpponent, SearchConfig, SearchNode,
    TreeStats, WaitingOpponent,
};

pub use crate::protocol::{RoundInput, TreeRecord};
