// Bitboard helpers. Bit index is x + 8*y.

const NOT_FILE_A: u64 = 0xfefe_fefe_fefe_fefe;
const NOT_FILE_H: u64 = 0x7f7f_7f7f_7f7f_7f7f;

/// The 8 compass steps as (dx, dy).
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Move every set bit one step in direction (dx, dy), dropping bits that
/// would wrap around a file edge or fall off the top/bottom.
#[inline]
pub fn shift(bb: u64, dx: i32, dy: i32) -> u64 {
    let moved = match dy {
        -1 => bb >> 8,
        1 => bb << 8,
        _ => bb,
    };
    match dx {
        -1 => (moved >> 1) & NOT_FILE_H,
        1 => (moved << 1) & NOT_FILE_A,
        _ => moved,
    }
}

/// Cells adjacent (8-neighbourhood) to any set bit.
#[inline]
pub fn neighbours(bb: u64) -> u64 {
    DIRECTIONS.iter().fold(0, |acc, &(dx, dy)| acc | shift(bb, dx, dy))
}

/// Targets where `own` could capture along a line of `opp`, for empty cells in `empty`.
pub fn move_targets(own: u64, opp: u64, empty: u64) -> u64 {
    let mut targets = 0u64;
    for &(dx, dy) in DIRECTIONS.iter() {
        let mut run = shift(own, dx, dy) & opp;
        // at most 6 opponent discs fit between two cells on a line
        for _ in 0..5 { run |= shift(run, dx, dy) & opp; }
        targets |= shift(run, dx, dy) & empty;
    }
    targets
}
