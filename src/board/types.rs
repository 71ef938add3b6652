use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::BoardError;

pub const BOARD_SIZE: i32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Black,
    White,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Cell label used by layouts and the board diagram.
    pub fn label(self) -> char {
        match self {
            Side::Black => 'b',
            Side::White => 'w',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "black"),
            Side::White => write!(f, "white"),
        }
    }
}

/// An on-board cell. The only constructor validates its range, so every
/// `Square` can be dereferenced without further checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub fn new(x: i32, y: i32) -> Result<Self, BoardError> {
        if (0..BOARD_SIZE).contains(&x) && (0..BOARD_SIZE).contains(&y) {
            Ok(Square((x + BOARD_SIZE * y) as u8))
        } else {
            Err(BoardError::OutOfRange { x, y })
        }
    }

    pub(crate) fn from_index(idx: u32) -> Self {
        debug_assert!(idx < 64);
        Square(idx as u8)
    }

    #[inline]
    pub fn x(self) -> i32 { (self.0 % 8) as i32 }
    #[inline]
    pub fn y(self) -> i32 { (self.0 / 8) as i32 }
    #[inline]
    pub fn index(self) -> usize { self.0 as usize }
    #[inline]
    pub fn bit(self) -> u64 { 1u64 << self.0 }

    /// Step by (dx, dy); `None` once the step leaves the board.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Square> {
        Square::new(self.x() + dx, self.y() + dy).ok()
    }

    /// All 64 squares, x outer and y inner.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|x| (0..BOARD_SIZE).map(move |y| Square((x + BOARD_SIZE * y) as u8)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.x() as u8) as char, self.y() + 1)
    }
}

/// A placement or a pass. Legality depends on the board and side it is
/// played with, never on the move alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Place(Square),
    Pass,
}

impl Move {
    pub fn new(x: i32, y: i32) -> Result<Self, BoardError> {
        Square::new(x, y).map(Move::Place)
    }

    pub fn is_pass(self) -> bool { matches!(self, Move::Pass) }

    pub fn square(self) -> Option<Square> {
        match self {
            Move::Place(sq) => Some(sq),
            Move::Pass => None,
        }
    }
}

impl From<Square> for Move {
    fn from(sq: Square) -> Self { Move::Place(sq) }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(sq) => write!(f, "{sq}"),
            Move::Pass => write!(f, "pass"),
        }
    }
}

impl FromStr for Move {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("pass") { return Ok(Move::Pass); }
        let bytes = s.as_bytes();
        if bytes.len() != 2 { return Err(BoardError::BadMove(s.to_string())); }
        let col = bytes[0].to_ascii_lowercase();
        if !(b'a'..=b'h').contains(&col) || !(b'1'..=b'8').contains(&bytes[1]) {
            return Err(BoardError::BadMove(s.to_string()));
        }
        Move::new((col - b'a') as i32, (bytes[1] - b'1') as i32)
    }
}

impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
