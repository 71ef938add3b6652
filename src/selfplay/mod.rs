use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use crate::board::{Board, Move, Side};
use crate::error::BoardError;
use crate::player::{Player, Strategy};

/// A full game can't exceed 60 placements plus a handful of passes.
pub const DEFAULT_MAX_PLIES: usize = 128;

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub black: Strategy,
    pub white: Strategy,
    /// Random strategies are reseeded per game from this.
    pub seed: u64,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 1, max_plies: DEFAULT_MAX_PLIES, black: Strategy::default(), white: Strategy::default(), seed: 0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub black: u32,
    pub white: u32,
    /// `None` for a draw or an unfinished game.
    pub winner: Option<Side>,
    pub finished: bool,
}

/// Drive one game between two players on an authoritative board. Every
/// returned move is checked against that board before it is played.
pub fn play_game(black: &mut Player, white: &mut Player, max_plies: usize) -> Result<GameRecord, BoardError> {
    let mut board = Board::new();
    let mut moves = Vec::new();
    let mut side = Side::Black;
    let mut last: Option<Move> = None;
    while moves.len() < max_plies && !board.is_terminal() {
        let player = if side == Side::Black { &mut *black } else { &mut *white };
        let chosen = player.select_move(last, None)?;
        let mv = chosen.unwrap_or(Move::Pass);
        board.apply(mv, side)?;
        moves.push(mv);
        last = chosen;
        side = side.opposite();
    }
    let finished = board.is_terminal();
    let record = GameRecord {
        moves,
        black: board.count(Side::Black),
        white: board.count(Side::White),
        winner: board.winner(),
        finished,
    };
    debug!("game over after {} plies: black {} white {}", record.moves.len(), record.black, record.white);
    Ok(record)
}

fn reseed(strategy: Strategy, seed: u64) -> Strategy {
    match strategy {
        Strategy::Random { seed: s } => Strategy::Random { seed: s ^ seed },
        other => other,
    }
}

/// Play `params.games` independent games in parallel. Each game owns its
/// players and boards; results come back in game order.
pub fn play_many(params: &SelfPlayParams) -> Result<Vec<GameRecord>, BoardError> {
    play_many_with(params, |_| {})
}

/// `play_many` with a hook called once per finished game, from whichever
/// worker finished it.
pub fn play_many_with<F>(params: &SelfPlayParams, on_game: F) -> Result<Vec<GameRecord>, BoardError>
where
    F: Fn(&GameRecord) + Sync,
{
    (0..params.games)
        .into_par_iter()
        .map(|gi| {
            let game_seed = params.seed.wrapping_add(gi as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
            let mut black = Player::new(Side::Black, reseed(params.black, game_seed));
            let mut white = Player::new(Side::White, reseed(params.white, game_seed.rotate_left(17)));
            let record = play_game(&mut black, &mut white, params.max_plies)?;
            on_game(&record);
            Ok::<_, BoardError>(record)
        })
        .collect()
}
