//! Full random playouts, from deal to result.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use scoundrel::core::GameRng;
use scoundrel::rules::GameEngine;

fn random_playout(seed: u64) -> i32 {
    let mut engine = GameEngine::with_seed(seed);
    let mut rng = GameRng::new(seed ^ 0xDEAD_BEEF);

    while !engine.is_game_over() {
        let actions = engine.legal_actions();
        match rng.choose(&actions) {
            Some(&action) => {
                engine.apply(action);
            }
            None => break,
        }
    }

    engine.health()
}

fn bench_playout(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("random_playout", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            random_playout(black_box(seed))
        })
    });
}

fn bench_fork(c: &mut Criterion) {
    let mut engine = GameEngine::with_seed(42);
    c.bench_function("fork", |b| b.iter(|| black_box(engine.fork())));
}

criterion_group!(benches, bench_playout, bench_fork);
criterion_main!(benches);
