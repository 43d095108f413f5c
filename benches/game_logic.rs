use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tui_tower::core::{GameSnapshot, GameState};
use tui_tower::types::{GameEvent, TICK_MS};

fn bench_sweep_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("sweep_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(TICK_MS));
        })
    });
}

fn bench_drop_cycle(c: &mut Criterion) {
    let mut base = GameState::new(12345);
    base.start();

    c.bench_function("drop_to_landing", |b| {
        b.iter_batched(
            || base.clone(),
            |mut state| {
                state.apply_event(GameEvent::Drop);
                for _ in 0..60 {
                    state.tick(TICK_MS);
                }
                state
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut out = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut out));
        })
    });
}

criterion_group!(benches, bench_sweep_tick, bench_drop_cycle, bench_snapshot);
criterion_main!(benches);
