use criterion::{criterion_group, criterion_main, Criterion, black_box};
use othebot::board::{Board, Side};
use othebot::perft::perft;

fn bench_movegen(c: &mut Criterion) {
    let b = Board::new();
    c.bench_function("perft_6_opening", |ben| {
        ben.iter(|| black_box(perft(black_box(&b), Side::Black, 6)))
    });
    c.bench_function("legal_moves_opening", |ben| {
        ben.iter(|| black_box(black_box(&b).legal_moves(Side::Black)))
    });
}

criterion_group!(benches, bench_movegen);
criterion_main!(benches);
