//! Board topology: cells, directions, fertility, adjacency.
//!
//! The board is a fixed 37-cell hexagonal arena. Its geometry is *input
//! data*, not something this crate computes: the engine consumes exactly 37
//! `(index, fertility, neighbor0..neighbor5)` records at startup and never
//! changes them afterwards. `Board` is the immutable result, injected into
//! the rules engine rather than living in globals.
//!
//! The `arena` submodule holds the standard referee layout as record data,
//! for tests and offline play.

pub mod arena;
pub mod cell;
pub mod topology;

pub use cell::{Cell, CellId, Direction, Fertility};
pub use topology::{Board, CellRecord, CELL_COUNT};
