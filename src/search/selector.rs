//! Greedy one-round move selection under a time budget.

use std::time::Instant;

use crate::core::{Action, GameState, Seat};
use crate::rules::Engine;

use super::config::SearchConfig;
use super::policy::{OpponentPolicy, WaitingOpponent};

/// Picks the action to play this round.
///
/// Every candidate is scored by simulating one joint round against the
/// assumed opponent reply and taking the resulting swing in score plus sun.
/// Waiting is the zero baseline, so an action is only played when it beats
/// doing nothing. Ties keep the earlier candidate, and the wall-clock budget
/// is checked between candidates so a partial scan still returns the best
/// action seen so far.
pub struct MoveSelector {
    config: SearchConfig,
    opponent: Box<dyn OpponentPolicy>,
}

impl MoveSelector {
    /// Create a selector with the neutral (waiting) opponent model.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            opponent: Box::new(WaitingOpponent),
        }
    }

    /// Replace the opponent model.
    #[must_use]
    pub fn with_opponent(mut self, opponent: Box<dyn OpponentPolicy>) -> Self {
        self.opponent = opponent;
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Choose the action for the player seat in `state`.
    ///
    /// Always returns a legal action; on a terminal state or an exhausted
    /// budget this degrades to [`Action::Wait`].
    pub fn choose(&mut self, engine: &Engine<'_>, state: &GameState) -> Action {
        let deadline = Instant::now() + self.config.time_budget;

        let mut best = Action::Wait;
        let mut best_reward = 0.0;

        if state.is_terminal() {
            return best;
        }

        for candidate in engine.legal_actions(state, Seat::Player) {
            if Instant::now() >= deadline {
                break;
            }
            let reward = self.evaluate(engine, state, candidate);
            if reward > best_reward {
                best = candidate;
                best_reward = reward;
            }
        }
        best
    }

    /// Score one candidate: play a joint round and measure the player's
    /// swing in score plus banked sun.
    fn evaluate(&mut self, engine: &Engine<'_>, state: &GameState, candidate: Action) -> f64 {
        let reply = self.opponent.choose(engine, state, Seat::Opponent);
        let next = engine.apply(state, candidate, reply);

        let score_delta = next.score[Seat::Player] - state.score[Seat::Player];
        let sun_delta = next.sun[Seat::Player] - state.sun[Seat::Player];
        f64::from(score_delta) + f64::from(sun_delta)
    }
}
