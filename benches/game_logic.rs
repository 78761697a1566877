use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{Board, GameState};
use blockfall::types::{GameAction, Grid, TICK_MS};

fn bench_step(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("step_16ms", |b| {
        b.iter(|| {
            state.step(black_box(TICK_MS), &[]);
        })
    });
}

fn bench_step_with_inputs(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let actions = [GameAction::MoveLeft, GameAction::Rotate];

    c.bench_function("step_with_inputs", |b| {
        b.iter(|| {
            state.step(black_box(TICK_MS), &actions);
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, 1);
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut grid = Grid::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut grid));
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_step_with_inputs,
    bench_line_clear,
    bench_snapshot
);
criterion_main!(benches);
