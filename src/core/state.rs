//! The game state value type.
//!
//! A `GameState` is a complete snapshot of one round: day, nutrient pool,
//! per-seat resources and cost schedules, tree occupancy, and the shadow
//! counters for the current sun direction. It is copied on every transition;
//! nothing in it is shared, so search branches never observe each other.
//!
//! Shadow bookkeeping lives here: the map is rebuilt from scratch whenever
//! the day (and thus the sun direction) changes, and patched incrementally
//! when a tree grows or leaves the board within the same day.

use crate::board::{Board, CellId, Direction, CELL_COUNT};

use super::seat::{Seat, SeatMap};
use super::tree_set::TreeSet;

/// The game is over once `day` reaches this value.
pub const FINAL_DAY: u8 = 24;

/// Largest tree size; trees of this size can be completed.
pub const MAX_TREE_SIZE: u8 = 3;

/// Base cost to grow a tree from size 0, 1, 2.
pub const BASE_GROW_COSTS: [i32; 3] = [1, 3, 7];

/// A full game-state snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Current day, 0..=23; terminal at [`FINAL_DAY`].
    pub day: u8,

    /// Shared nutrient pool; decremented once per completed tree.
    pub nutrients: i32,

    /// Banked sun points per seat.
    pub sun: SeatMap<i32>,

    /// Score per seat.
    pub score: SeatMap<i32>,

    /// Whether a seat has committed to wait out the rest of the day.
    pub waiting: SeatMap<bool>,

    /// Cost to grow a tree from size 0, 1, 2 — base plus the seat's own
    /// tree count at the destination size.
    pub grow_cost: SeatMap<[i32; 3]>,

    /// Tree count per size (0..=3) per seat.
    pub trees_by_size: SeatMap<[u8; 4]>,

    /// Trees eligible to act this round, per seat.
    pub active: SeatMap<TreeSet>,

    /// Trees that already acted (or were just seeded) this day, per seat.
    pub dormant: SeatMap<TreeSet>,

    /// Tree size per cell, `None` when empty. Ownership is tracked by the
    /// per-seat tree sets; a cell is in exactly one seat's sets iff it is
    /// occupied here.
    pub(crate) tree_map: [Option<u8>; CELL_COUNT],

    /// `shadow_map[s][cell]` counts trees of size `s + 1` whose shadow
    /// covers `cell` in the current sun direction.
    pub(crate) shadow_map: [[u8; CELL_COUNT]; 3],
}

impl GameState {
    /// An empty state: day 0, no trees, base grow costs.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            day: 0,
            nutrients: 0,
            sun: SeatMap::with_value(0),
            score: SeatMap::with_value(0),
            waiting: SeatMap::with_value(false),
            grow_cost: SeatMap::with_value(BASE_GROW_COSTS),
            trees_by_size: SeatMap::with_value([0; 4]),
            active: SeatMap::from_fn(|_| TreeSet::new()),
            dormant: SeatMap::from_fn(|_| TreeSet::new()),
            tree_map: [None; CELL_COUNT],
            shadow_map: [[0; CELL_COUNT]; 3],
        }
    }

    /// The sun direction for the current day.
    #[must_use]
    pub fn sun_direction(&self) -> Direction {
        Direction::from_day(self.day)
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.day >= FINAL_DAY
    }

    /// Size of the tree on `cell`, if any.
    #[inline]
    #[must_use]
    pub fn tree_at(&self, cell: CellId) -> Option<u8> {
        self.tree_map[cell.index()]
    }

    /// Whether `cell` is empty.
    #[inline]
    #[must_use]
    pub fn is_empty_cell(&self, cell: CellId) -> bool {
        self.tree_map[cell.index()].is_none()
    }

    /// Place a tree on the board, registering it with its owner's sets and
    /// size counts. Grow costs and shadows are the caller's business.
    pub(crate) fn add_tree(&mut self, seat: Seat, cell: CellId, size: u8, dormant: bool) {
        debug_assert!(size <= MAX_TREE_SIZE);
        debug_assert!(self.tree_map[cell.index()].is_none(), "cell {cell} already occupied");

        self.tree_map[cell.index()] = Some(size);
        self.trees_by_size[seat][size as usize] += 1;
        if dormant {
            self.dormant[seat].insert(cell);
        } else {
            self.active[seat].insert(cell);
        }
    }

    /// Which seat owns the tree on `cell`, if any.
    #[must_use]
    pub fn owner_of(&self, cell: CellId) -> Option<Seat> {
        Seat::ALL
            .into_iter()
            .find(|&seat| self.active[seat].contains(cell) || self.dormant[seat].contains(cell))
    }

    // === Shadows ===

    /// Rebuild the shadow map from scratch for the current sun direction.
    pub fn refresh_shadows(&mut self, board: &Board) {
        self.shadow_map = [[0; CELL_COUNT]; 3];
        for index in 0..CELL_COUNT {
            if let Some(size) = self.tree_map[index] {
                if size > 0 {
                    self.walk_shadow(board, CellId::new(index as u8), size, 1);
                }
            }
        }
    }

    /// Add the shadow a tree of `size` on `cell` casts along the current
    /// sun direction. Size-0 trees cast nothing.
    pub(crate) fn add_shadow(&mut self, board: &Board, cell: CellId, size: u8) {
        if size > 0 {
            self.walk_shadow(board, cell, size, 1);
        }
    }

    /// Remove a previously added shadow cast.
    pub(crate) fn remove_shadow(&mut self, board: &Board, cell: CellId, size: u8) {
        if size > 0 {
            self.walk_shadow(board, cell, size, -1);
        }
    }

    fn walk_shadow(&mut self, board: &Board, cell: CellId, size: u8, delta: i8) {
        let direction = self.sun_direction();
        let row = &mut self.shadow_map[size as usize - 1];
        let mut cursor = board.neighbor(cell, direction);
        for _ in 0..size {
            let Some(covered) = cursor else { break };
            if delta > 0 {
                row[covered.index()] += 1;
            } else {
                debug_assert!(row[covered.index()] > 0, "removing absent shadow at {covered}");
                row[covered.index()] -= 1;
            }
            cursor = board.neighbor(covered, direction);
        }
    }

    /// Whether a tree of `size` (>= 1) on `cell` is blocked from the sun:
    /// some tree of size >= `size` casts a shadow onto the cell.
    #[must_use]
    pub fn is_sun_blocked(&self, cell: CellId, size: u8) -> bool {
        debug_assert!((1..=MAX_TREE_SIZE).contains(&size));
        self.shadow_map[size as usize - 1..]
            .iter()
            .any(|row| row[cell.index()] > 0)
    }

    /// Shadow counter for shadows cast by trees of `caster_size` onto `cell`.
    #[must_use]
    pub fn shadow_count(&self, cell: CellId, caster_size: u8) -> u8 {
        debug_assert!((1..=MAX_TREE_SIZE).contains(&caster_size));
        self.shadow_map[caster_size as usize - 1][cell.index()]
    }

    /// Sun income each seat would collect this round: every active tree
    /// earns its size unless its cell is sun-blocked.
    #[must_use]
    pub fn sun_income(&self) -> SeatMap<i32> {
        SeatMap::from_fn(|seat| {
            self.active[seat]
                .iter()
                .map(|cell| match self.tree_at(cell) {
                    Some(size) if size > 0 && !self.is_sun_blocked(cell, size) => i32::from(size),
                    _ => 0,
                })
                .sum()
        })
    }

    // === Rebasing equality ===

    /// Whether two states describe the same observable position: sun,
    /// score, full tree occupancy, and both seats' active lists in their
    /// canonical sorted order. Used to match an observed round against the
    /// children of the previous search root.
    #[must_use]
    pub fn same_position(&self, other: &GameState) -> bool {
        self.sun == other.sun
            && self.score == other.score
            && self.tree_map == other.tree_map
            && self.active[Seat::Player] == other.active[Seat::Player]
            && self.active[Seat::Opponent] == other.active[Seat::Opponent]
    }
}
