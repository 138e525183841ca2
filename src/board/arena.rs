//! The standard referee arena, expressed as ingestion records.
//!
//! Live play reads these 37 records from the referee; offline play and tests
//! need the same data without a referee attached. The layout is the familiar
//! spiral: cell 0 at the center, each ring walked counter-clockwise starting
//! from the east, with fertility 4/2/0-bonus classes assigned per ring.

use rustc_hash::FxHashMap;

use super::topology::{CellRecord, CELL_COUNT};

/// Cube-coordinate deltas per direction, in neighbor-record order
/// (E, NE, NW, W, SW, SE). Opposite directions are three apart.
const CUBE_DIRECTIONS: [(i32, i32, i32); 6] = [
    (1, -1, 0),
    (1, 0, -1),
    (0, 1, -1),
    (-1, 1, 0),
    (-1, 0, 1),
    (0, -1, 1),
];

const RING_COUNT: i32 = 3;

fn add(a: (i32, i32, i32), d: (i32, i32, i32)) -> (i32, i32, i32) {
    (a.0 + d.0, a.1 + d.1, a.2 + d.2)
}

fn distance(c: (i32, i32, i32)) -> i32 {
    c.0.abs().max(c.1.abs()).max(c.2.abs())
}

/// The 37 records of the standard arena, in spiral index order.
#[must_use]
pub fn standard_records() -> Vec<CellRecord> {
    let mut coords = Vec::with_capacity(CELL_COUNT);
    coords.push((0, 0, 0));

    // Spiral outwards: enter each ring to the east, then walk its six sides.
    let mut cursor = add((0, 0, 0), CUBE_DIRECTIONS[0]);
    for ring in 1..=RING_COUNT {
        for side in 0..6 {
            for _ in 0..ring {
                coords.push(cursor);
                cursor = add(cursor, CUBE_DIRECTIONS[(side + 2) % 6]);
            }
        }
        cursor = add(cursor, CUBE_DIRECTIONS[0]);
    }
    debug_assert_eq!(coords.len(), CELL_COUNT);

    let index_of: FxHashMap<(i32, i32, i32), u8> = coords
        .iter()
        .enumerate()
        .map(|(i, &c)| (c, i as u8))
        .collect();

    coords
        .iter()
        .enumerate()
        .map(|(index, &coord)| {
            let mut neighbors = [-1i32; 6];
            for (slot, &dir) in neighbors.iter_mut().zip(CUBE_DIRECTIONS.iter()) {
                if let Some(&neighbor) = index_of.get(&add(coord, dir)) {
                    *slot = i32::from(neighbor);
                }
            }
            let fertility = match distance(coord) {
                0 | 1 => 3,
                2 => 2,
                _ => 1,
            };
            CellRecord {
                index: index as u8,
                fertility,
                neighbors,
            }
        })
        .collect()
}
