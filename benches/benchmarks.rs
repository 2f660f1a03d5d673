use choicegame::*;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        solving_random_game,
        solving_wide_game,
        replaying_cached_game,
}

fn solving_random_game(c: &mut criterion::Criterion) {
    c.bench_function("solve a random game", |b| {
        b.iter(|| GameSolver::<i64>::random().find_optimal())
    });
}

fn solving_wide_game(c: &mut criterion::Criterion) {
    let sequence = (0..64).map(|i| (i % 7) as i64 - 3).collect::<Vec<_>>();
    c.bench_function("solve a 7-vs-7 game", |b| {
        b.iter(|| {
            GameSolver::new(
                [1, 2, 3, 4, 5, 6, 7],
                [7, 6, 5, 4, 3, 2, 1],
                sequence.iter().copied(),
            )
            .and_then(|mut solver| solver.find_optimal())
        })
    });
}

fn replaying_cached_game(c: &mut criterion::Criterion) {
    let mut solver = GameSolver::new([1, 2, 3, 4, 5], [5, 4, 3, 2, 1], (0..32i64).map(|i| i % 5 - 2))
        .expect("well formed game");
    solver.find_optimal().expect("solvable game");
    c.bench_function("query a solved game", |b| {
        b.iter(|| solver.find_optimal())
    });
}
