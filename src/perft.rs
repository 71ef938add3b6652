use crate::board::{Board, Move, Side};

/// Count move sequences of length `depth` from `board` with `side` to move.
/// A forced pass counts as a move; a finished game is a single leaf.
pub fn perft(board: &Board, side: Side, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    if board.is_terminal() { return 1; }
    let moves = board.legal_moves(side);
    if moves.is_empty() { return perft(board, side.opposite(), depth - 1); }
    let mut nodes = 0u64;
    for m in moves {
        let mut child = *board;
        if child.apply(m, side).is_ok() { nodes += perft(&child, side.opposite(), depth - 1); }
    }
    nodes
}

/// Like `perft` but split per root move, for debugging generator mismatches.
pub fn divide(board: &Board, side: Side, depth: u32) -> Vec<(Move, u64)> {
    board
        .legal_moves(side)
        .into_iter()
        .map(|m| {
            let mut child = *board;
            let n = match child.apply(m, side) {
                Ok(_) => perft(&child, side.opposite(), depth.saturating_sub(1)),
                Err(_) => 0,
            };
            (m, n)
        })
        .collect()
}
