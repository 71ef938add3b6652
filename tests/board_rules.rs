use othebot::board::{Applied, Board, Move, Side, Square};
use othebot::BoardError;
use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn mv(x: i32, y: i32) -> Move { Move::new(x, y).expect("on board") }

fn random_positions(seed: u64, games: usize) -> Vec<(Board, Side)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut out = Vec::new();
    for _ in 0..games {
        let mut b = Board::new();
        let mut side = Side::Black;
        while !b.is_terminal() {
            out.push((b, side));
            let moves = b.legal_moves(side);
            let m = if moves.is_empty() { Move::Pass } else { moves[rng.gen_range(0..moves.len())] };
            b.apply(m, side).expect("legal");
            side = side.opposite();
        }
        out.push((b, side));
    }
    out
}

#[test]
fn opening_has_four_black_moves() {
    let b = Board::new();
    assert_eq!(b.legal_moves(Side::Black), vec![mv(2, 3), mv(3, 2), mv(4, 5), mv(5, 4)]);
    assert_eq!(b.count(Side::Black), 2);
    assert_eq!(b.count(Side::White), 2);
    assert!(b.owner_is(Side::Black, Square::new(4, 3).unwrap()));
    assert!(b.owner_is(Side::White, Square::new(3, 3).unwrap()));
}

#[test]
fn opening_move_flips_one_disc() {
    let mut b = Board::new();
    let applied = b.apply(mv(2, 3), Side::Black).expect("legal opening move");
    assert_eq!(applied, Applied::Placed { flipped: 1 });
    assert!(b.owner_is(Side::Black, Square::new(3, 3).unwrap()));
    assert!(b.owner_is(Side::Black, Square::new(2, 3).unwrap()));
    assert_eq!(b.count(Side::Black), 4);
    assert_eq!(b.count(Side::White), 1);
    assert_eq!(b.empty_count(), 59);
}

#[test]
fn illegal_apply_leaves_board_unchanged() {
    let mut b = Board::new();
    let before = b;
    // occupied cell
    assert_eq!(b.apply(mv(3, 3), Side::Black), Err(BoardError::IllegalMove { mv: mv(3, 3), side: Side::Black }));
    // empty but captures nothing
    assert!(b.apply(mv(0, 0), Side::Black).is_err());
    // pass while moves exist
    assert!(b.apply(Move::Pass, Side::White).is_err());
    assert_eq!(b, before);
}

#[test]
fn off_board_coordinates_are_rejected() {
    assert_eq!(Square::new(8, 0), Err(BoardError::OutOfRange { x: 8, y: 0 }));
    assert_eq!(Move::new(-1, 3), Err(BoardError::OutOfRange { x: -1, y: 3 }));
    assert!(Square::new(7, 7).is_ok());
    assert_eq!(Square::new(0, 0).unwrap().offset(-1, 0), None);
}

#[test]
fn pass_is_legal_only_without_placements() {
    let b = Board::from_cells(&format!("wb{}", ".".repeat(62))).unwrap();
    assert!(!b.has_legal_moves(Side::Black));
    assert_eq!(b.legal_moves(Side::White), vec![mv(2, 0)]);
    assert!(b.is_legal(Move::Pass, Side::Black));
    assert!(!b.is_legal(Move::Pass, Side::White));
    assert!(!b.is_terminal());
    let mut after = b;
    assert_eq!(after.apply(Move::Pass, Side::Black), Ok(Applied::Passed));
    assert_eq!(after, b);
}

#[test]
fn move_notation() {
    assert_eq!(mv(2, 3).to_string(), "c4");
    assert_eq!("c4".parse::<Move>().unwrap(), mv(2, 3));
    assert_eq!("H8".parse::<Move>().unwrap(), mv(7, 7));
    assert_eq!("pass".parse::<Move>().unwrap(), Move::Pass);
    assert!(matches!("i1".parse::<Move>(), Err(BoardError::BadMove(_))));
    assert!(matches!("a9".parse::<Move>(), Err(BoardError::BadMove(_))));
}

#[test]
fn disc_counts_always_cover_the_board() {
    for (b, _) in random_positions(11, 20) {
        assert_eq!(b.count(Side::Black) + b.count(Side::White) + b.empty_count(), 64);
    }
}

#[test]
fn terminal_iff_neither_side_can_move() {
    for (b, _) in random_positions(12, 20) {
        let expected = !b.has_legal_moves(Side::Black) && !b.has_legal_moves(Side::White);
        assert_eq!(b.is_terminal(), expected);
    }
}

#[test]
fn captures_follow_contiguous_lines() {
    for (b, side) in random_positions(13, 10) {
        let opp = side.opposite();
        for m in b.legal_moves(side) {
            let origin = m.square().unwrap();
            let mut after = b;
            after.apply(m, side).unwrap();
            assert!(after.owner_is(side, origin));

            for sq in Square::all() {
                let flipped = b.owner_is(opp, sq) && after.owner_is(side, sq);
                if !flipped { continue; }
                // the flipped disc sits on a straight line from the origin
                let (dx, dy) = (sq.x() - origin.x(), sq.y() - origin.y());
                assert!(dx == 0 || dy == 0 || dx.abs() == dy.abs(), "{sq} not on a line from {origin}");
                let (sx, sy) = (dx.signum(), dy.signum());
                // every cell between origin and the flipped disc was an opponent disc
                let mut cur = origin.offset(sx, sy).unwrap();
                while cur != sq {
                    assert!(b.owner_is(opp, cur), "gap at {cur} between {origin} and {sq}");
                    cur = cur.offset(sx, sy).unwrap();
                }
                // and the run continues to a friendly disc
                let mut cur = sq.offset(sx, sy);
                loop {
                    let c = cur.expect("run fell off the board");
                    if b.owner_is(side, c) { break; }
                    assert!(b.owner_is(opp, c), "run broken at {c}");
                    cur = c.offset(sx, sy);
                }
            }
            // nothing but the origin and flips changed
            assert_eq!(after.count(side) + after.count(opp), b.count(side) + b.count(opp) + 1);
        }
    }
}

#[test]
fn winner_reported_only_when_finished() {
    let b = Board::new();
    assert_eq!(b.winner(), None);
    let done = Board::from_cells(&format!("bbb{}", ".".repeat(61))).unwrap();
    assert!(done.is_terminal());
    assert_eq!(done.winner(), Some(Side::Black));
}
