use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polar_ttt::{Board, Cell, Location, MinimaxConfig, MinimaxSearch, PolarRules, Side};

fn opening() -> Board {
    [(1, 3, Side::A), (1, 4, Side::B), (2, 4, Side::A), (0, 3, Side::B)]
        .into_iter()
        .fold(Board::new(), |board, (ring, sector, side)| {
            let location = Location::new(ring, sector).expect("opening cells are on the grid");
            board.with(location, Cell::Taken(side))
        })
}

fn criterion_benchmark(c: &mut Criterion) {
    let board = opening();
    c.bench_function("fitness", |b| b.iter(|| PolarRules.fitness(black_box(&board))));
    c.bench_function("legal targets", |b| b.iter(|| PolarRules.legal_targets(black_box(&board))));
    for plies in 0..=1 {
        let search = MinimaxSearch::new(MinimaxConfig { plies }, PolarRules, PolarRules);
        c.bench_function(&format!("minimax {plies}p"), |b| {
            b.iter(|| search.search(black_box(&board), true))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
