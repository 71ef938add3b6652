use thiserror::Error;

use crate::board::{Move, Side};

/// Errors surfaced by the rules engine. None of them are fatal to a match;
/// the driver decides whether to escalate or log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("coordinate ({x}, {y}) is off the board")]
    OutOfRange { x: i32, y: i32 },

    #[error("illegal move {mv} for {side}")]
    IllegalMove { mv: Move, side: Side },

    #[error("cannot parse move '{0}'")]
    BadMove(String),

    #[error("bad board layout: {0}")]
    BadLayout(String),
}
