use blockfall::core::{is_legal, GameConfig, GameState, Grid, Piece};
use blockfall::types::{RotationDirection, ShapeKind};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default()).unwrap();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state.restart();
            }
            black_box(state.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new(10, 20);
            for y in 16..20 {
                for x in 0..10 {
                    let _ = grid.set(x, y, Some(ShapeKind::I));
                }
            }
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_is_legal(c: &mut Criterion) {
    let mut grid = Grid::new(10, 20);
    for x in 0..9 {
        let _ = grid.set(x, 19, Some(ShapeKind::J));
    }
    let piece = Piece::spawn(ShapeKind::T, (4, 17));

    c.bench_function("is_legal", |b| {
        b.iter(|| black_box(is_legal(black_box(&grid), black_box(&piece))))
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default()).unwrap();

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            state.move_left();
            state.move_right();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default()).unwrap();
    state.move_down();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.rotate(RotationDirection::Clockwise);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_is_legal,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
