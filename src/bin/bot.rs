//! Referee-driven bot process.
//!
//! Reads the board once, then loops: parse the round, rebase the lookahead
//! tree onto the observed state, expand it, pick an action, print it. Timing
//! and tree statistics go to stderr; the referee only sees the action line.

use std::io::{self, BufReader};
use std::time::Instant;

use canopy::{protocol, Engine, LookaheadTree, MoveSelector, SearchConfig};

fn main() {
    let stdin = io::stdin();
    let mut input = BufReader::new(stdin.lock());

    let board = protocol::read_board(&mut input);
    let engine = Engine::new(&board);

    let config = SearchConfig::default();
    let mut tree = LookaheadTree::new(&config);
    let mut selector = MoveSelector::new(config.clone());

    loop {
        let round = protocol::read_round(&mut input);
        let start = Instant::now();

        let state = round.to_state(&board);
        let reused = tree.rebase(&engine, &state);
        tree.expand(&engine, config.lookahead_depth);

        let action = selector.choose(&engine, &state);
        println!("{action}");

        let stats = tree.stats();
        eprintln!(
            "day {} round took {:?} ({} nodes, depth {}, reused: {reused})",
            state.day,
            start.elapsed(),
            stats.node_count,
            stats.max_depth,
        );
    }
}
