use criterion::{criterion_group, criterion_main, Criterion, black_box};
use othebot::board::{Board, Side};

fn bench_eval(c: &mut Criterion) {
    let b = Board::new();
    c.bench_function("heuristic_opening", |ben| {
        ben.iter(|| {
            let v = othebot::search::eval::heuristic(black_box(&b), Side::Black);
            black_box(v)
        })
    });
}

criterion_group!(benches, bench_eval);
criterion_main!(benches);
