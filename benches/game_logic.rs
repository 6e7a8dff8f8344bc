use criterion::{black_box, criterion_group, criterion_main, Criterion};
use boom_tetris::core::{attempt_mutation, Board, Game, GameConfig, Tetromino};
use boom_tetris::types::{GameMode, InputFrame, Shape, TICK_MS};

fn started_game() -> Game {
    let mut game = Game::new(GameConfig::with_seed(12345)).unwrap();
    game.start(0, GameMode::Normal).unwrap();
    game
}

fn bench_tick(c: &mut Criterion) {
    let mut game = started_game();
    let input = InputFrame::default();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(&input), black_box(TICK_MS));
            if game.scene() != boom_tetris::types::Scene::InGame {
                game = started_game();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(3));
                }
            }
            let rows = board.full_rows();
            board.compact_after_clear(&rows);
            board
        })
    });
}

fn bench_attempt_move(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = Tetromino::new(Shape::T);

    c.bench_function("attempt_move", |b| {
        b.iter(|| {
            // Once the piece reaches the wall every call rolls back.
            attempt_mutation(&mut piece, &board, |p| p.translate(black_box(1), 0))
        })
    });
}

fn bench_attempt_rotate(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = Tetromino::new(Shape::L);

    c.bench_function("attempt_rotate", |b| {
        b.iter(|| attempt_mutation(&mut piece, &board, Tetromino::spin_cw))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = started_game();
    game.tick(&InputFrame::default(), TICK_MS);
    let mut snapshot = game.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| game.snapshot_into(black_box(&mut snapshot)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_attempt_move,
    bench_attempt_rotate,
    bench_snapshot
);
criterion_main!(benches);
