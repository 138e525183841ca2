//! Game rules: legal move generation and the joint transition engine.
//!
//! [`Engine`] owns all game-rule arithmetic. It borrows an immutable
//! [`Board`](crate::board::Board) (injected, never global) and exposes two
//! pure operations:
//!
//! - [`Engine::legal_actions`]: the exhaustive, deterministically ordered set
//!   of actions a seat may take this round.
//! - [`Engine::apply`]: the transition from a state plus one action per seat
//!   to the next state. Never mutates its inputs.
//!
//! The engine has no error outcomes. Feeding it an action outside the legal
//! set is a caller contract violation, guarded with debug assertions.

pub mod engine;
pub mod moves;

pub use engine::Engine;

/// Sun cost to complete a mature tree.
pub const COMPLETE_COST: i32 = 4;
