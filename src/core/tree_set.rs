//! Ordered set of tree cell indices.
//!
//! Active and dormant tree lists are compared element-wise when rebasing the
//! search tree, so iteration order must be canonical. `TreeSet` keeps its
//! backing vector sorted at all times; inserts and removals go through binary
//! search instead of the swap-remove tricks an unordered list would need.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::CellId;

/// Sorted set of cell indices holding one seat's trees.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeSet {
    cells: SmallVec<[CellId; 8]>,
}

impl TreeSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cell. No-op if already present.
    pub fn insert(&mut self, cell: CellId) {
        if let Err(position) = self.cells.binary_search(&cell) {
            self.cells.insert(position, cell);
        }
    }

    /// Remove a cell. Returns whether it was present.
    pub fn remove(&mut self, cell: CellId) -> bool {
        match self.cells.binary_search(&cell) {
            Ok(position) => {
                self.cells.remove(position);
                true
            }
            Err(_) => false,
        }
    }

    /// Whether the set contains a cell.
    #[must_use]
    pub fn contains(&self, cell: CellId) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }

    /// Move every cell into `other`, leaving this set empty.
    pub fn drain_into(&mut self, other: &mut TreeSet) {
        for cell in self.cells.drain(..) {
            if let Err(position) = other.cells.binary_search(&cell) {
                other.cells.insert(position, cell);
            }
        }
    }

    /// Number of cells in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate in ascending cell order.
    pub fn iter(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.iter().copied()
    }

    /// The sorted cells as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CellId] {
        &self.cells
    }
}

impl FromIterator<CellId> for TreeSet {
    fn from_iter<I: IntoIterator<Item = CellId>>(iter: I) -> Self {
        let mut set = Self::new();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}
