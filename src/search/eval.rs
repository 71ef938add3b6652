use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::features::{corners, frontier, static_weight};
use crate::board::{Board, Move, Side};

// Composite weights
const FRONTIER_WEIGHT: f64 = 25.0;
const CORNER_WEIGHT: f64 = 35.0;
const COIN_WEIGHT: f64 = 25.0;
const MOBILITY_WEIGHT: f64 = 10.0;

/// Leaf evaluator used by the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvalMode {
    /// Composite positional heuristic.
    #[default]
    Heuristic,
    /// Plain disc differential, for the reduced validation mode.
    CoinParity,
}

/// `100 * (mine - theirs) / (mine + theirs)`, zero when both are zero.
#[inline]
pub fn percent_diff(mine: u32, theirs: u32) -> f64 {
    let total = mine + theirs;
    if total == 0 { return 0.0; }
    100.0 * (mine as f64 - theirs as f64) / total as f64
}

/// Static weight times the weighted sum of coin, mobility, corner and
/// frontier differentials. Only useful to compare siblings; the magnitude
/// is not calibrated and both factors flip sign with the side, so the
/// product reads the same from either side.
pub fn heuristic(board: &Board, side: Side) -> f64 {
    let opp = side.opposite();
    let coins = percent_diff(board.count(side), board.count(opp));
    let mobility = percent_diff(board.mobility(side), board.mobility(opp));
    let corner = percent_diff(corners(board, side), corners(board, opp));
    // fewer frontier discs is better
    let front = percent_diff(frontier(board, opp), frontier(board, side));
    let composite = front * FRONTIER_WEIGHT + corner * CORNER_WEIGHT + coins * COIN_WEIGHT + mobility * MOBILITY_WEIGHT;
    static_weight(board, side) as f64 * composite
}

pub fn coin_parity(board: &Board, side: Side) -> i32 {
    board.count(side) as i32 - board.count(side.opposite()) as i32
}

/// Disc differential after `side` plays `mv` on a scratch copy. This is a
/// convenience for callers scoring a single candidate; the search itself
/// scores `CoinParity` leaves through `evaluate`. An illegal move scores the
/// unchanged position.
pub fn naive_heuristic(board: &Board, mv: Move, side: Side) -> i32 {
    let mut scratch = *board;
    match scratch.apply(mv, side) {
        Ok(_) => coin_parity(&scratch, side),
        Err(e) => {
            debug!("naive_heuristic: {e}; scoring the unchanged board");
            coin_parity(board, side)
        }
    }
}

pub fn evaluate(board: &Board, side: Side, mode: EvalMode) -> f64 {
    match mode {
        EvalMode::Heuristic => heuristic(board, side),
        EvalMode::CoinParity => coin_parity(board, side) as f64,
    }
}
