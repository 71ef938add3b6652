use log::{debug, warn};
use serde::Serialize;

use crate::board::{Board, Move, Side};
use crate::search::eval::{evaluate, EvalMode};

/// Normal play searches 4 plies; the validation mode 2.
pub const DEFAULT_DEPTH: u32 = 4;
pub const VALIDATION_DEPTH: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    pub depth: u32,
    pub eval: EvalMode,
    /// Off gives a full-width search over the same tree.
    pub use_alpha_beta: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { depth: DEFAULT_DEPTH, eval: EvalMode::Heuristic, use_alpha_beta: true }
    }
}

impl SearchParams {
    /// Reduced mode: shallow search scored by disc differential.
    pub fn validation() -> Self {
        Self { depth: VALIDATION_DEPTH, eval: EvalMode::CoinParity, use_alpha_beta: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchResult {
    /// `None` when the searching side has no placement and must pass.
    pub best_move: Option<Move>,
    pub score: f64,
    pub nodes: u64,
}

/// Fixed-depth negamax with alpha-beta pruning. Every node works on its own
/// copy of the board, so siblings never observe each other's moves.
#[derive(Debug)]
pub struct Searcher {
    pub(crate) nodes: u64,
    eval: EvalMode,
    use_alpha_beta: bool,
}

impl Default for Searcher {
    fn default() -> Self { Self::new() }
}

impl Searcher {
    pub fn new() -> Self {
        Self { nodes: 0, eval: EvalMode::Heuristic, use_alpha_beta: true }
    }

    pub fn nodes(&self) -> u64 { self.nodes }

    /// Pick `side`'s move on `board`. A depth of 0 is treated as 1 so a legal
    /// move always comes back when one exists. Ties keep the first move in
    /// `legal_moves` order.
    pub fn search(&mut self, board: &Board, side: Side, params: SearchParams) -> SearchResult {
        self.nodes = 0;
        self.eval = params.eval;
        self.use_alpha_beta = params.use_alpha_beta;
        let depth = params.depth.max(1);

        if board.is_terminal() {
            let score = evaluate(board, side, self.eval);
            debug!("search: terminal root, score {score}");
            return SearchResult { best_move: None, score, nodes: self.nodes };
        }

        let moves = board.legal_moves(side);
        if moves.is_empty() {
            let score = -self.negamax(board, Move::Pass, depth - 1, side, f64::NEG_INFINITY, f64::INFINITY);
            debug!("search: {side} must pass, score {score} nodes {}", self.nodes);
            return SearchResult { best_move: None, score, nodes: self.nodes };
        }

        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best_score = f64::NEG_INFINITY;
        let mut best_move = moves[0];
        for m in moves {
            let score = -self.negamax(board, m, depth - 1, side, -beta, -alpha);
            if score > best_score { best_score = score; best_move = m; }
            if best_score > alpha { alpha = best_score; }
        }
        debug!("search: {side} depth {depth} best {best_move} score {best_score} nodes {}", self.nodes);
        SearchResult { best_move: Some(best_move), score: best_score, nodes: self.nodes }
    }

    /// Value of the position after `side` plays `mv` on a copy of `board`,
    /// seen by the side to move next. At `depth == 0` or on a finished
    /// board this is the leaf evaluation; otherwise the best negated reply.
    /// A pass (or an illegal move) leaves the copy unchanged.
    pub fn negamax(&mut self, board: &Board, mv: Move, depth: u32, side: Side, mut alpha: f64, beta: f64) -> f64 {
        self.nodes += 1;
        let mut child = *board;
        if let Move::Place(_) = mv {
            if let Err(e) = child.apply(mv, side) { warn!("negamax: {e}; treating as a pass"); }
        }

        let next = side.opposite();
        if depth == 0 || child.is_terminal() {
            return evaluate(&child, next, self.eval);
        }

        let mut replies = child.legal_moves(next);
        if replies.is_empty() { replies.push(Move::Pass); }

        let mut best = f64::NEG_INFINITY;
        for reply in replies {
            let score = -self.negamax(&child, reply, depth - 1, next, -beta, -alpha);
            if score > best { best = score; }
            if best > alpha { alpha = best; }
            if self.use_alpha_beta && alpha >= beta { break; }
        }
        best
    }
}
