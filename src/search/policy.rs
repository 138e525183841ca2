//! Opponent modeling policies for move scoring.
//!
//! The selector evaluates each candidate action against an assumed opponent
//! reply. The default assumption is neutral (the opponent waits); a
//! uniform-random policy is available for less placid opponents.

use crate::core::{Action, GameState, Seat, SearchRng};
use crate::rules::Engine;

/// Picks the reply the opponent is assumed to make.
pub trait OpponentPolicy {
    /// Choose the assumed reply for `seat` in `state`.
    fn choose(&mut self, engine: &Engine<'_>, state: &GameState, seat: Seat) -> Action;
}

/// Neutral opponent: always waits.
#[derive(Clone, Copy, Debug, Default)]
pub struct WaitingOpponent;

impl OpponentPolicy for WaitingOpponent {
    fn choose(&mut self, _engine: &Engine<'_>, _state: &GameState, _seat: Seat) -> Action {
        Action::Wait
    }
}

/// Uniform-random opponent over its legal moves.
#[derive(Clone, Debug)]
pub struct RandomOpponent {
    rng: SearchRng,
}

impl RandomOpponent {
    /// Create with a deterministic seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SearchRng::new(seed),
        }
    }
}

impl OpponentPolicy for RandomOpponent {
    fn choose(&mut self, engine: &Engine<'_>, state: &GameState, seat: Seat) -> Action {
        let moves = engine.legal_actions(state, seat);
        *self.rng.choose(&moves).unwrap_or(&Action::Wait)
    }
}
