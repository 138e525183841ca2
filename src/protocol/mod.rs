//! Text protocol: referee input parsing and state derivation.
//!
//! The referee speaks a line-oriented protocol: the board arrives once at
//! startup (37 cell records), then every round delivers the day, the nutrient
//! pool, both seats' resources, the tree list, and a list of possible actions
//! we ignore (the engine derives its own). [`RoundInput::to_state`] turns a
//! round into a full [`GameState`], deriving everything the wire omits: the
//! active/dormant sets, per-size counts, the grow-cost schedule, and the
//! shadow map for `day mod 6`.
//!
//! Malformed input is fatal. The referee is the only peer and never sends
//! garbage, so every parse failure here is a programming error and panics
//! with the offending line.

use std::io::BufRead;

use crate::board::{Board, CellId, CellRecord, CELL_COUNT};
use crate::core::{GameState, Seat, SeatMap};

/// One tree as reported by the referee.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeRecord {
    /// Cell the tree stands on.
    pub cell: CellId,

    /// Tree size, 0..=3.
    pub size: u8,

    /// Whether the tree belongs to us.
    pub is_mine: bool,

    /// Whether the tree already acted this day.
    pub is_dormant: bool,
}

/// One round of referee input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundInput {
    /// Current day.
    pub day: u8,

    /// Shared nutrient pool.
    pub nutrients: i32,

    /// Our banked sun.
    pub my_sun: i32,

    /// Our score.
    pub my_score: i32,

    /// Opponent banked sun.
    pub opp_sun: i32,

    /// Opponent score.
    pub opp_score: i32,

    /// Whether the opponent is waiting out the day. The referee does not
    /// report our own flag; it is always false when we are asked to act.
    pub opp_waiting: bool,

    /// Every tree on the board.
    pub trees: Vec<TreeRecord>,
}

impl RoundInput {
    /// Derive the full game state for this round.
    #[must_use]
    pub fn to_state(&self, board: &Board) -> GameState {
        let mut state = GameState::empty();
        state.day = self.day;
        state.nutrients = self.nutrients;
        state.sun = SeatMap::new(self.my_sun, self.opp_sun);
        state.score = SeatMap::new(self.my_score, self.opp_score);
        state.waiting = SeatMap::new(false, self.opp_waiting);

        for tree in &self.trees {
            let seat = if tree.is_mine { Seat::Player } else { Seat::Opponent };
            state.add_tree(seat, tree.cell, tree.size, tree.is_dormant);
        }

        // Grow cost = base + own tree count at the destination size.
        for seat in Seat::ALL {
            for size in 0..3 {
                state.grow_cost[seat][size] +=
                    i32::from(state.trees_by_size[seat][size + 1]);
            }
        }

        state.refresh_shadows(board);
        state
    }
}

/// Read the startup board description: a cell count line followed by one
/// record per cell.
pub fn read_board<R: BufRead>(reader: &mut R) -> Board {
    let count: usize = parse_line(reader, "cell count");
    assert_eq!(count, CELL_COUNT, "unexpected board size {count}");

    let mut records = Vec::with_capacity(CELL_COUNT);
    for _ in 0..CELL_COUNT {
        let fields = read_fields(reader, "cell record", 8);
        let mut neighbors = [0i32; 6];
        for (slot, field) in neighbors.iter_mut().zip(&fields[2..]) {
            *slot = parse_field(field, "neighbor index");
        }
        records.push(CellRecord {
            index: parse_field(&fields[0], "cell index"),
            fertility: parse_field(&fields[1], "fertility"),
            neighbors,
        });
    }
    Board::from_records(&records)
}

/// Read one round of input, discarding the referee's possible-action lines.
pub fn read_round<R: BufRead>(reader: &mut R) -> RoundInput {
    let day: u8 = parse_line(reader, "day");
    let nutrients: i32 = parse_line(reader, "nutrients");

    let mine = read_fields(reader, "own resources", 2);
    let theirs = read_fields(reader, "opponent resources", 3);

    let tree_count: usize = parse_line(reader, "tree count");
    let mut trees = Vec::with_capacity(tree_count);
    for _ in 0..tree_count {
        let fields = read_fields(reader, "tree record", 4);
        trees.push(TreeRecord {
            cell: CellId::new(parse_field(&fields[0], "tree cell")),
            size: parse_field(&fields[1], "tree size"),
            is_mine: parse_flag(&fields[2], "ownership flag"),
            is_dormant: parse_flag(&fields[3], "dormancy flag"),
        });
    }

    // The referee enumerates our legal actions; we derive our own.
    let action_count: usize = parse_line(reader, "action count");
    for _ in 0..action_count {
        read_line(reader, "possible action");
    }

    RoundInput {
        day,
        nutrients,
        my_sun: parse_field(&mine[0], "own sun"),
        my_score: parse_field(&mine[1], "own score"),
        opp_sun: parse_field(&theirs[0], "opponent sun"),
        opp_score: parse_field(&theirs[1], "opponent score"),
        opp_waiting: parse_flag(&theirs[2], "opponent waiting flag"),
        trees,
    }
}

fn read_line<R: BufRead>(reader: &mut R, what: &str) -> String {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .unwrap_or_else(|err| panic!("reading {what}: {err}"));
    assert!(read > 0, "input ended while reading {what}");
    line.trim().to_owned()
}

fn read_fields<R: BufRead>(reader: &mut R, what: &str, expected: usize) -> Vec<String> {
    let line = read_line(reader, what);
    let fields: Vec<String> = line.split_whitespace().map(str::to_owned).collect();
    assert_eq!(fields.len(), expected, "bad {what} line: {line:?}");
    fields
}

fn parse_line<R: BufRead, T: std::str::FromStr>(reader: &mut R, what: &str) -> T {
    let line = read_line(reader, what);
    parse_field(&line, what)
}

fn parse_field<T: std::str::FromStr>(field: &str, what: &str) -> T {
    field
        .parse()
        .unwrap_or_else(|_| panic!("bad {what}: {field:?}"))
}

fn parse_flag(field: &str, what: &str) -> bool {
    match field {
        "0" => false,
        "1" => true,
        other => panic!("bad {what}: {other:?}"),
    }
}
