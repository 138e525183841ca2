//! Lookahead search over the joint game tree.
//!
//! ## Overview
//!
//! - [`LookaheadTree`]: arena-based game tree. Each node owns a state and
//!   both seats' cached legal-move lists; children are materialized lazily as
//!   the cross product of the two lists, so expansion is kept to a small
//!   bounded depth and capped by a node budget.
//! - Root rebasing: after a real round is played, the observed state is
//!   matched against the old root's children; a hit reuses the subtree, a
//!   miss starts a fresh root.
//! - [`MoveSelector`]: scores the current round's candidate actions against
//!   an assumed opponent reply (neutral by default) under a wall-clock
//!   budget, and always returns a legal action.
//!
//! The tree is an enhancement layer; the selector alone reproduces baseline
//! behavior.

pub mod config;
pub mod node;
pub mod policy;
pub mod selector;
pub mod tree;

pub use config::SearchConfig;
pub use node::{NodeId, SearchNode};
pub use policy::{OpponentPolicy, RandomOpponent, WaitingOpponent};
pub use selector::MoveSelector;
pub use tree::{LookaheadTree, TreeStats};
