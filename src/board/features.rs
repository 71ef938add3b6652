//! Positional feature counters. All are pure functions of the board and
//! relative to the side asked about.

use super::bits::neighbours;
use super::{Board, Side, Square};

/// Per-cell positional weights, indexed `[x][y]`.
pub const STATIC_WEIGHTS: [[i32; 8]; 8] = [
    [4, -3, 2, 2, 2, 2, -3, 4],
    [-3, -4, -1, -1, -1, -1, -4, -3],
    [2, -1, 1, 0, 0, 1, -1, 2],
    [2, -1, 0, 1, 1, 0, -1, 2],
    [2, -1, 0, 1, 1, 0, -1, 2],
    [2, -1, 1, 0, 0, 1, -1, 2],
    [-3, -4, -1, -1, -1, -1, -4, -3],
    [4, -3, 2, 2, 2, 2, -3, 4],
];

const CORNERS: u64 = (1 << 0) | (1 << 7) | (1 << 56) | (1 << 63);

// (0,1) (0,6) (7,1) (7,6) (1,0) (6,0) (1,7) (6,7)
const CORNER_ADJACENT: u64 =
    (1 << 8) | (1 << 48) | (1 << 15) | (1 << 55) | (1 << 1) | (1 << 6) | (1 << 57) | (1 << 62);

pub fn corners(board: &Board, side: Side) -> u32 {
    (board.bits(side) & CORNERS).count_ones()
}

/// Discs on the cells orthogonally next to a corner along an edge.
pub fn corner_adjacent(board: &Board, side: Side) -> u32 {
    (board.bits(side) & CORNER_ADJACENT).count_ones()
}

/// Discs touching at least one empty on-board cell.
pub fn frontier(board: &Board, side: Side) -> u32 {
    (board.bits(side) & neighbours(board.empty_bits())).count_ones()
}

/// Sum of table weights over `side`'s discs minus the opponent's.
pub fn static_weight(board: &Board, side: Side) -> i32 {
    let opp = side.opposite();
    Square::all()
        .map(|sq| {
            let w = STATIC_WEIGHTS[sq.x() as usize][sq.y() as usize];
            if board.owner_is(side, sq) { w } else if board.owner_is(opp, sq) { -w } else { 0 }
        })
        .sum()
}
