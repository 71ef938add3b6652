//! Reversi board state and rules.
//!
//! The board is two 64-bit sets: `occupied` and `black` (the owner bit,
//! meaningful only where `occupied` is set and kept zero elsewhere). It is a
//! plain `Copy` value, so search branches get independent state simply by
//! copying it.

pub mod bits;
pub mod features;
mod types;

use std::fmt;

use log::trace;

use crate::error::BoardError;
pub use types::{Move, Side, Square, BOARD_SIZE};

use bits::DIRECTIONS;

/// What a successful `apply` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    Placed { flipped: u32 },
    Passed,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    occupied: u64,
    black: u64,
}

impl Default for Board {
    fn default() -> Self { Self::new() }
}

impl Board {
    /// Standard opening: (3,3) and (4,4) white, (4,3) and (3,4) black.
    pub fn new() -> Self {
        let mut b = Self::empty();
        for (x, y, side) in [(3, 3, Side::White), (4, 4, Side::White), (4, 3, Side::Black), (3, 4, Side::Black)] {
            b.place(side, Square::from_index((x + 8 * y) as u32));
        }
        b
    }

    pub fn empty() -> Self { Self { occupied: 0, black: 0 } }

    /// Setup affordance: build a board from 64 cell labels (`b`, `w`, or
    /// `.`/`-`/`_` for empty), index `x + 8*y`. Whitespace is skipped so
    /// layouts can be written one row per line. No legality is checked.
    pub fn from_cells(layout: &str) -> Result<Self, BoardError> {
        let cells: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != 64 {
            return Err(BoardError::BadLayout(format!("expected 64 cells, got {}", cells.len())));
        }
        let mut b = Self::empty();
        for (idx, c) in cells.into_iter().enumerate() {
            let sq = Square::from_index(idx as u32);
            match c {
                'b' | 'B' => b.place(Side::Black, sq),
                'w' | 'W' => b.place(Side::White, sq),
                '.' | '-' | '_' => {}
                other => return Err(BoardError::BadLayout(format!("unexpected cell '{other}' at {sq}"))),
            }
        }
        Ok(b)
    }

    /// Inverse of `from_cells`, one row per line.
    pub fn to_cells(&self) -> String {
        let mut out = String::with_capacity(72);
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let sq = Square::from_index((x + 8 * y) as u32);
                out.push(self.side_at(sq).map_or('.', Side::label));
            }
            out.push('\n');
        }
        out
    }

    #[inline]
    pub fn occupied(&self, sq: Square) -> bool { self.occupied & sq.bit() != 0 }

    #[inline]
    pub fn owner_is(&self, side: Side, sq: Square) -> bool { self.bits(side) & sq.bit() != 0 }

    pub fn side_at(&self, sq: Square) -> Option<Side> {
        if !self.occupied(sq) { None }
        else if self.black & sq.bit() != 0 { Some(Side::Black) }
        else { Some(Side::White) }
    }

    /// Cells owned by `side`.
    #[inline]
    pub fn bits(&self, side: Side) -> u64 {
        match side {
            Side::Black => self.black & self.occupied,
            Side::White => self.occupied & !self.black,
        }
    }

    #[inline]
    pub fn empty_bits(&self) -> u64 { !self.occupied }

    pub(crate) fn place(&mut self, side: Side, sq: Square) {
        self.occupied |= sq.bit();
        match side {
            Side::Black => self.black |= sq.bit(),
            Side::White => self.black &= !sq.bit(),
        }
    }

    /// Opponent discs captured along (dx, dy) if `side` played at `origin`;
    /// zero unless the run is non-empty and closed by a `side` disc.
    fn capture_run(&self, origin: Square, side: Side, dx: i32, dy: i32) -> u64 {
        let opp = side.opposite();
        let mut run = 0u64;
        let mut cur = origin.offset(dx, dy);
        while let Some(sq) = cur {
            if self.owner_is(opp, sq) {
                run |= sq.bit();
                cur = sq.offset(dx, dy);
            } else if self.owner_is(side, sq) {
                return run;
            } else {
                return 0;
            }
        }
        0
    }

    /// All discs flipped by `side` playing at `sq` (empty set if none).
    pub fn flips(&self, sq: Square, side: Side) -> u64 {
        if self.occupied(sq) { return 0; }
        DIRECTIONS.iter().fold(0, |acc, &(dx, dy)| acc | self.capture_run(sq, side, dx, dy))
    }

    /// A pass is legal only when `side` has no placement available.
    pub fn is_legal(&self, mv: Move, side: Side) -> bool {
        match mv {
            Move::Pass => !self.has_legal_moves(side),
            Move::Place(sq) => self.flips(sq, side) != 0,
        }
    }

    /// Play `mv` for `side`. Illegal input is rejected and the board is left
    /// untouched.
    pub fn apply(&mut self, mv: Move, side: Side) -> Result<Applied, BoardError> {
        match mv {
            Move::Pass => {
                if self.has_legal_moves(side) { return Err(BoardError::IllegalMove { mv, side }); }
                Ok(Applied::Passed)
            }
            Move::Place(sq) => {
                let flipped = self.flips(sq, side);
                if flipped == 0 { return Err(BoardError::IllegalMove { mv, side }); }
                match side {
                    Side::Black => self.black |= flipped,
                    Side::White => self.black &= !flipped,
                }
                self.place(side, sq);
                trace!("{side} plays {sq}, flipping {}", flipped.count_ones());
                Ok(Applied::Placed { flipped: flipped.count_ones() })
            }
        }
    }

    /// Bitboard of every legal placement for `side`.
    #[inline]
    pub fn legal_targets(&self, side: Side) -> u64 {
        bits::move_targets(self.bits(side), self.bits(side.opposite()), self.empty_bits())
    }

    /// Whether a non-pass move exists.
    #[inline]
    pub fn has_legal_moves(&self, side: Side) -> bool { self.legal_targets(side) != 0 }

    pub fn is_terminal(&self) -> bool {
        !self.has_legal_moves(Side::Black) && !self.has_legal_moves(Side::White)
    }

    /// Legal placements in column-major order (x outer, y inner). Never
    /// contains `Move::Pass`.
    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        let targets = self.legal_targets(side);
        Square::all().filter(|sq| targets & sq.bit() != 0).map(Move::Place).collect()
    }

    #[inline]
    pub fn mobility(&self, side: Side) -> u32 { self.legal_targets(side).count_ones() }

    #[inline]
    pub fn count(&self, side: Side) -> u32 { self.bits(side).count_ones() }

    #[inline]
    pub fn empty_count(&self) -> u32 { self.empty_bits().count_ones() }

    /// Winner of a finished game; `None` while in play or on a draw.
    pub fn winner(&self) -> Option<Side> {
        if !self.is_terminal() { return None; }
        let (b, w) = (self.count(Side::Black), self.count(Side::White));
        if b > w { Some(Side::Black) } else if w > b { Some(Side::White) } else { None }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for y in 0..BOARD_SIZE {
            write!(f, "{}", y + 1)?;
            for x in 0..BOARD_SIZE {
                let sq = Square::from_index((x + 8 * y) as u32);
                write!(f, " {}", self.side_at(sq).map_or('.', Side::label))?;
            }
            writeln!(f)?;
        }
        write!(f, "black {} white {}", self.count(Side::Black), self.count(Side::White))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{})", self.to_cells())
    }
}
