use PushEngine::core::{Direction, PuzzleState, StageCatalog, UserAction, step};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// A fixed walk-and-push script; blocked moves are part of the workload.
const SEQUENCE: &[Direction] = &[
    Direction::Left,
    Direction::Left,
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Right,
    Direction::Up,
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Down,
    Direction::Left,
    Direction::Down,
    Direction::Left,
    Direction::Up,
    Direction::Right,
];

pub fn bench_move_resolution(c: &mut Criterion) {
    let catalog = StageCatalog::builtin().expect("built-in stages are valid");
    let mut group = c.benchmark_group("move_resolution");

    for stage in catalog.stage_ids().collect::<Vec<_>>() {
        group.bench_with_input(
            BenchmarkId::new("scripted_sequence", stage),
            &stage,
            |b, &stage| {
                b.iter_with_setup(
                    || PuzzleState::load(&catalog, stage).expect("stage exists"),
                    |mut state| {
                        for &dir in SEQUENCE.iter().cycle().take(256) {
                            let _ = black_box(step(&mut state, UserAction::Move(dir)));
                        }
                        black_box(state)
                    },
                );
            },
        );
    }
    group.finish();
}

pub fn bench_stage_load(c: &mut Criterion) {
    let catalog = StageCatalog::builtin().expect("built-in stages are valid");
    c.bench_function("stage_load", |b| {
        b.iter(|| PuzzleState::load(black_box(&catalog), black_box(1)))
    });
}

criterion_group!(move_benches, bench_move_resolution, bench_stage_load);
criterion_main!(move_benches);
