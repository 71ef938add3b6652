// Reversi engine: bitboard rules + fixed-depth negamax search
pub mod board;
pub mod error;
pub mod perft;
pub mod player;
pub mod search;
pub mod selfplay;

pub use board::{Applied, Board, Move, Side, Square};
pub use error::BoardError;
pub use player::{Player, Strategy};
pub use search::{EvalMode, SearchParams, SearchResult, Searcher};
