//! Cell identifiers, compass directions, and fertility classes.

use serde::{Deserialize, Serialize};

/// Identifier of a board cell (0..=36).
///
/// Cell 0 is the center; the remaining indices spiral outwards ring by ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellId(pub u8);

impl CellId {
    /// Create a new cell ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw cell index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the six hex compass directions.
///
/// The sun direction cycles through all six once per six days.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// All six directions in neighbor-record order.
    pub const ALL: [Direction; 6] = [
        Direction::East,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// The sun direction on a given day (`day mod 6`).
    #[must_use]
    pub const fn from_day(day: u8) -> Self {
        Self::ALL[(day % 6) as usize]
    }

    /// Index into a neighbor record (0..=5).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Fertility class of a cell.
///
/// Unusable cells never hold trees; the other three classes map to the
/// harvest bonus declared by the board data ({0, 2, 4}).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fertility {
    Unusable,
    Low,
    Medium,
    High,
}

impl Fertility {
    /// Decode the ingestion value (0 = unusable, 1..=3 usable).
    #[must_use]
    pub const fn from_record(value: u8) -> Self {
        match value {
            0 => Fertility::Unusable,
            1 => Fertility::Low,
            2 => Fertility::Medium,
            _ => Fertility::High,
        }
    }

    /// Harvest bonus value for this class.
    #[must_use]
    pub const fn harvest_bonus(self) -> i32 {
        match self {
            Fertility::Unusable | Fertility::Low => 0,
            Fertility::Medium => 2,
            Fertility::High => 4,
        }
    }

    /// Whether a tree may ever occupy a cell of this class.
    #[must_use]
    pub const fn is_usable(self) -> bool {
        !matches!(self, Fertility::Unusable)
    }
}

/// A board cell: fertility plus the six directional neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// This cell's identifier.
    pub id: CellId,

    /// Fertility class.
    pub fertility: Fertility,

    /// Adjacent cell per direction, `None` at the board edge.
    pub neighbors: [Option<CellId>; 6],
}

impl Cell {
    /// Neighbor in the given direction, if any.
    #[must_use]
    pub fn neighbor(&self, direction: Direction) -> Option<CellId> {
        self.neighbors[direction.index()]
    }
}
