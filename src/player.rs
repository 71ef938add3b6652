use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Move, Side};
use crate::error::BoardError;
use crate::search::alphabeta::{SearchParams, Searcher};
use crate::search::eval::heuristic;

/// How a player chooses among its legal moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// First legal move in `legal_moves` order.
    First,
    /// Uniformly random legal move from a seeded generator.
    Random { seed: u64 },
    /// One-ply lookahead on the composite heuristic.
    Greedy,
    /// Fixed-depth negamax search.
    Negamax(SearchParams),
}

impl Default for Strategy {
    fn default() -> Self { Strategy::Negamax(SearchParams::default()) }
}

/// Engine-side player. It keeps its own copy of the game board, updated
/// with the opponent's moves and its own choices; the driver keeps the
/// board of record.
pub struct Player {
    board: Board,
    side: Side,
    strategy: Strategy,
    rng: SmallRng,
    searcher: Searcher,
}

impl Player {
    pub fn new(side: Side, strategy: Strategy) -> Self {
        let seed = match strategy { Strategy::Random { seed } => seed, _ => 0 };
        Self { board: Board::new(), side, strategy, rng: SmallRng::seed_from_u64(seed), searcher: Searcher::new() }
    }

    pub fn side(&self) -> Side { self.side }
    pub fn strategy(&self) -> Strategy { self.strategy }
    pub fn board(&self) -> &Board { &self.board }

    /// Setup affordance for tests and analysis: replace the internal board.
    pub fn set_board(&mut self, board: Board) { self.board = board; }

    /// Record the opponent's move, choose a reply and play it on the internal
    /// board. `None` for `opponent_move` means there is nothing to record
    /// (first move of the game, or the opponent passed). Returns `None` when
    /// this side has to pass. An illegal opponent move is rejected and the
    /// internal board stays as it was. `ms_left` is advisory only.
    pub fn select_move(&mut self, opponent_move: Option<Move>, ms_left: Option<u64>) -> Result<Option<Move>, BoardError> {
        if let Some(mv) = opponent_move {
            if let Err(e) = self.board.apply(mv, self.side.opposite()) {
                warn!("rejecting opponent move: {e}");
                return Err(e);
            }
        }
        if let Some(ms) = ms_left { debug!("{} to move, {ms} ms left", self.side); }

        let choice = self.choose();
        if let Some(mv) = choice {
            self.board.apply(mv, self.side)?;
        }
        debug!("{} plays {}", self.side, choice.map_or_else(|| "pass".to_string(), |m| m.to_string()));
        Ok(choice)
    }

    fn choose(&mut self) -> Option<Move> {
        let moves = self.board.legal_moves(self.side);
        if moves.is_empty() { return None; }
        match self.strategy {
            Strategy::First => Some(moves[0]),
            Strategy::Random { .. } => Some(moves[self.rng.gen_range(0..moves.len())]),
            Strategy::Greedy => {
                let mut best: Option<(Move, f64)> = None;
                for m in moves {
                    let mut child = self.board;
                    if child.apply(m, self.side).is_err() { continue; }
                    let v = heuristic(&child, self.side);
                    if best.map_or(true, |(_, bv)| v > bv) { best = Some((m, v)); }
                }
                best.map(|(m, _)| m)
            }
            Strategy::Negamax(params) => self.searcher.search(&self.board, self.side, params).best_move,
        }
    }
}
