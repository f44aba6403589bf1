use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tui_2048::core::{is_game_over, plan_animation, resolve_move, spawn_random_tile, GameSession, Grid};
use tui_2048::types::Direction;

fn busy_grid() -> Grid {
    Grid::from_rows([[2, 2, 4, 0], [4, 4, 8, 8], [0, 16, 16, 2], [2, 0, 2, 2]]).unwrap()
}

fn bench_resolve_move(c: &mut Criterion) {
    let grid = busy_grid();

    for dir in Direction::ALL {
        c.bench_function(&format!("resolve_move_{}", dir.as_str()), |b| {
            b.iter(|| resolve_move(black_box(&grid), black_box(dir)))
        });
    }
}

fn bench_spawn(c: &mut Criterion) {
    let grid = busy_grid();
    let mut rng = StdRng::seed_from_u64(12345);

    c.bench_function("spawn_random_tile", |b| {
        b.iter(|| spawn_random_tile(black_box(&grid), &mut rng))
    });
}

fn bench_plan_animation(c: &mut Criterion) {
    let result = resolve_move(&busy_grid(), Direction::Left);

    c.bench_function("plan_animation_8_steps", |b| {
        b.iter(|| plan_animation(black_box(&result.motions), black_box(&result.merges), 8))
    });
}

fn bench_game_over_check(c: &mut Criterion) {
    let stuck =
        Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();

    c.bench_function("is_game_over_full_grid", |b| {
        b.iter(|| is_game_over(black_box(&stuck)))
    });
}

fn bench_session_step(c: &mut Criterion) {
    let mut session = GameSession::with_seed(12345);
    let mut i = 0usize;

    c.bench_function("session_step", |b| {
        b.iter(|| {
            i = i.wrapping_add(1);
            if session.step(Direction::ALL[i % 4]).is_none() && session.game_over() {
                session.reset();
            }
        })
    });
}

criterion_group!(
    benches,
    bench_resolve_move,
    bench_spawn,
    bench_plan_animation,
    bench_game_over_check,
    bench_session_step
);
criterion_main!(benches);
