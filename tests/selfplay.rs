use othebot::board::{Board, Move, Side};
use othebot::player::{Player, Strategy};
use othebot::search::SearchParams;
use othebot::selfplay::{play_game, play_many, SelfPlayParams};

#[test]
fn random_games_are_deterministic_by_seed() {
    let params = SelfPlayParams {
        games: 3,
        black: Strategy::Random { seed: 1 },
        white: Strategy::Random { seed: 2 },
        seed: 42,
        ..SelfPlayParams::default()
    };
    let g1 = play_many(&params).unwrap();
    let g2 = play_many(&params).unwrap();
    assert_eq!(g1.len(), 3);
    assert_eq!(g1, g2);
}

#[test]
fn recorded_games_replay_legally() {
    let params = SelfPlayParams {
        games: 2,
        black: Strategy::Negamax(SearchParams::validation()),
        white: Strategy::Random { seed: 9 },
        seed: 7,
        ..SelfPlayParams::default()
    };
    for game in play_many(&params).unwrap() {
        assert!(game.finished);
        let mut b = Board::new();
        let mut side = Side::Black;
        for &m in &game.moves {
            b.apply(m, side).unwrap_or_else(|e| panic!("replay failed: {e}"));
            side = side.opposite();
        }
        assert!(b.is_terminal());
        assert_eq!(b.count(Side::Black), game.black);
        assert_eq!(b.count(Side::White), game.white);
        assert_eq!(b.winner(), game.winner);
    }
}

#[test]
fn ply_cap_stops_the_game() {
    let mut black = Player::new(Side::Black, Strategy::Greedy);
    let mut white = Player::new(Side::White, Strategy::Greedy);
    let game = play_game(&mut black, &mut white, 6).unwrap();
    assert_eq!(game.moves.len(), 6);
    assert!(!game.finished);
    assert_eq!(game.winner, None);
    assert!(game.moves.iter().all(|m| *m != Move::Pass));
}

#[test]
fn records_serialize_to_json() {
    let mut black = Player::new(Side::Black, Strategy::Random { seed: 5 });
    let mut white = Player::new(Side::White, Strategy::Random { seed: 6 });
    let game = play_game(&mut black, &mut white, 4).unwrap();
    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(json["moves"].as_array().unwrap().len(), 4);
    let first: Move = serde_json::from_value(json["moves"][0].clone()).unwrap();
    assert_eq!(first, game.moves[0]);
}

#[test]
fn game_hook_fires_once_per_game_and_keeps_seeding() {
    use othebot::selfplay::play_many_with;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let params = SelfPlayParams {
        games: 4,
        black: Strategy::Random { seed: 3 },
        white: Strategy::First,
        seed: 11,
        ..SelfPlayParams::default()
    };
    let seen = AtomicUsize::new(0);
    let hooked = play_many_with(&params, |g| {
        assert!(g.finished);
        seen.fetch_add(1, Ordering::Relaxed);
    })
    .unwrap();
    assert_eq!(seen.load(Ordering::Relaxed), 4);
    assert_eq!(hooked, play_many(&params).unwrap());
}
