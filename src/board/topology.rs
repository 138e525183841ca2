//! The immutable board built from ingestion records.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, CellId, Direction, Fertility};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 37;

/// One board ingestion record, as delivered by the external parser.
///
/// `fertility` is the raw protocol value (0 = unusable, 1..=3 usable);
/// `neighbors` are raw indices with -1 meaning no adjacent cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    /// Cell index (0..=36).
    pub index: u8,

    /// Raw fertility class.
    pub fertility: u8,

    /// Raw neighbor indices per direction (-1 = board edge).
    pub neighbors: [i32; 6],
}

/// The fixed 37-cell board.
///
/// Constructed once at startup from exactly [`CELL_COUNT`] records and never
/// modified. Adjacency is validated to be symmetric; a malformed record set
/// is a startup-fatal condition, not a recoverable error.
#[derive(Clone, Debug)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Build the board from ingestion records.
    ///
    /// ## Panics
    ///
    /// Panics if the record set does not describe a well-formed board:
    /// wrong record count, duplicate or out-of-range indices, or
    /// asymmetric adjacency.
    #[must_use]
    pub fn from_records(records: &[CellRecord]) -> Self {
        assert_eq!(records.len(), CELL_COUNT, "board must have exactly {CELL_COUNT} cells");

        let mut cells = [Cell {
            id: CellId::new(0),
            fertility: Fertility::Unusable,
            neighbors: [None; 6],
        }; CELL_COUNT];
        let mut seen = [false; CELL_COUNT];

        for record in records {
            let index = record.index as usize;
            assert!(index < CELL_COUNT, "cell index {index} out of range");
            assert!(!seen[index], "duplicate cell index {index}");
            seen[index] = true;

            let mut neighbors = [None; 6];
            for (slot, &raw) in neighbors.iter_mut().zip(record.neighbors.iter()) {
                if raw >= 0 {
                    assert!((raw as usize) < CELL_COUNT, "neighbor index {raw} out of range");
                    *slot = Some(CellId::new(raw as u8));
                }
            }

            cells[index] = Cell {
                id: CellId::new(record.index),
                fertility: Fertility::from_record(record.fertility),
                neighbors,
            };
        }

        let board = Self { cells };
        board.assert_symmetric();
        board
    }

    /// Adjacency must be symmetric: if B is A's neighbor in direction d,
    /// A is B's neighbor in the opposite direction.
    fn assert_symmetric(&self) {
        for cell in &self.cells {
            for direction in Direction::ALL {
                if let Some(neighbor) = cell.neighbor(direction) {
                    let opposite = Direction::ALL[(direction.index() + 3) % 6];
                    assert_eq!(
                        self.cell(neighbor).neighbor(opposite),
                        Some(cell.id),
                        "asymmetric adjacency between {} and {}",
                        cell.id,
                        neighbor
                    );
                }
            }
        }
    }

    /// Get a cell by ID.
    #[inline]
    #[must_use]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.index()]
    }

    /// Neighbor of `cell` in `direction`, if any.
    #[inline]
    #[must_use]
    pub fn neighbor(&self, cell: CellId, direction: Direction) -> Option<CellId> {
        self.cells[cell.index()].neighbor(direction)
    }

    /// Fertility class of a cell.
    #[inline]
    #[must_use]
    pub fn fertility(&self, cell: CellId) -> Fertility {
        self.cells[cell.index()].fertility
    }

    /// Whether a tree may ever occupy this cell.
    #[inline]
    #[must_use]
    pub fn is_usable(&self, cell: CellId) -> bool {
        self.fertility(cell).is_usable()
    }

    /// Iterate over all cells.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterate over all cell IDs in index order.
    pub fn cell_ids(&self) -> impl Iterator<Item = CellId> {
        (0..CELL_COUNT as u8).map(CellId::new)
    }
}
