//! Round actions and their wire rendering.
//!
//! Each round a seat commits exactly one action. Both seats resolve
//! simultaneously, and pairs of the *same kind* take a joint resolution
//! branch (shared-resource conflicts), so `ActionKind` exists as a separate
//! comparison axis.

use serde::{Deserialize, Serialize};

use crate::board::CellId;

/// One seat's action for a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Commit to doing nothing for the rest of the day.
    Wait,
    /// Grow the tree on `cell` by one size tier.
    Grow { cell: CellId },
    /// Throw a seed from the tree on `source` onto the empty cell `target`.
    Seed { source: CellId, target: CellId },
    /// Harvest the mature tree on `cell`.
    Complete { cell: CellId },
}

/// The kind of an [`Action`], without its cell arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Wait,
    Grow,
    Seed,
    Complete,
}

impl Action {
    /// The kind of this action.
    #[must_use]
    pub const fn kind(self) -> ActionKind {
        match self {
            Action::Wait => ActionKind::Wait,
            Action::Grow { .. } => ActionKind::Grow,
            Action::Seed { .. } => ActionKind::Seed,
            Action::Complete { .. } => ActionKind::Complete,
        }
    }
}

impl std::fmt::Display for Action {
    /// Render the protocol string: `WAIT`, `GROW i`, `SEED a b`, `COMPLETE i`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Wait => write!(f, "WAIT"),
            Action::Grow { cell } => write!(f, "GROW {cell}"),
            Action::Seed { source, target } => write!(f, "SEED {source} {target}"),
            Action::Complete { cell } => write!(f, "COMPLETE {cell}"),
        }
    }
}
