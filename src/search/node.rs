//! Search tree node and arena index.

use crate::core::{Action, GameState, Seat, SeatMap};

/// Index into the [`LookaheadTree`](super::LookaheadTree) node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the lookahead tree.
///
/// Owns its state snapshot and the cached legal-move lists for both seats.
/// `children` is empty until the node is expanded; once expanded it holds
/// one child per `(player move, opponent move)` pair, in row-major order
/// over the two cached lists.
#[derive(Clone, Debug)]
pub struct SearchNode {
    /// Parent node (NONE for the root).
    pub parent: NodeId,

    /// Depth below the current root.
    pub depth: u16,

    /// The state at this node.
    pub state: GameState,

    /// Cached legal moves per seat.
    pub moves: SeatMap<Vec<Action>>,

    /// Child ids, cross product of the two move lists; empty until expanded.
    pub children: Vec<NodeId>,
}

impl SearchNode {
    /// Create an unexpanded node.
    #[must_use]
    pub fn new(parent: NodeId, depth: u16, state: GameState, moves: SeatMap<Vec<Action>>) -> Self {
        Self {
            parent,
            depth,
            state,
            moves,
            children: Vec::new(),
        }
    }

    /// Whether this node's state ends the game.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Whether children have been materialized.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Branching factor: player moves times opponent moves.
    #[must_use]
    pub fn branching(&self) -> usize {
        self.moves[Seat::Player].len() * self.moves[Seat::Opponent].len()
    }
}
