//! Seat identification and per-seat data storage.
//!
//! The duel always has exactly two seats: the searching player and the
//! opponent. `SeatMap` stores one value per seat with O(1) access and
//! `Index` sugar, so per-seat fields read as `state.sun[Seat::Player]`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats in the duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The seat this process plays.
    Player,
    /// The other seat.
    Opponent,
}

impl Seat {
    /// Both seats, player first.
    pub const ALL: [Seat; 2] = [Seat::Player, Seat::Opponent];

    /// Storage index (0 = player, 1 = opponent).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Seat {
        match self {
            Seat::Player => Seat::Opponent,
            Seat::Opponent => Seat::Player,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Player => write!(f, "player"),
            Seat::Opponent => write!(f, "opponent"),
        }
    }
}

/// Per-seat data storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create with explicit values.
    #[must_use]
    pub const fn new(player: T, opponent: T) -> Self {
        Self {
            data: [player, opponent],
        }
    }

    /// Create with the same value in both seats.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Create from a factory function.
    pub fn from_fn(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::Player), factory(Seat::Opponent)],
        }
    }

    /// Iterate over `(Seat, &T)` pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        &mut self.data[seat.index()]
    }
}
