use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{apply_move, is_terminal, slide_row, start_game, Board, GameSession, SimpleRng};
use tui_2048::types::{Direction, Mode};

fn busy_board() -> Board {
    Board::from_rows(&[
        [2u32, 2, 4, 8, 0],
        [16, 16, 0, 32, 32],
        [2, 4, 8, 16, 32],
        [0, 0, 64, 64, 2],
        [4, 0, 4, 0, 4],
    ])
    .unwrap_or_else(|| Board::new(Mode::Hardcore))
}

fn bench_slide_row(c: &mut Criterion) {
    let row = [2u32, 2, 4, 4, 8];
    c.bench_function("slide_row_5", |b| b.iter(|| slide_row(black_box(&row))));
}

fn bench_apply_move(c: &mut Criterion) {
    let session = GameSession::from_board(Mode::Hardcore, busy_board()).unwrap_or_else(|| {
        start_game(Mode::Hardcore, &mut SimpleRng::new(1))
    });
    let mut rng = SimpleRng::new(12345);

    c.bench_function("apply_move_hardcore", |b| {
        b.iter(|| apply_move(black_box(&session), Direction::Left, &mut rng))
    });
}

fn bench_is_terminal(c: &mut Criterion) {
    // Worst case: full board with no merges, every pair is checked.
    let board = Board::from_rows(&[
        [2u32, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ])
    .unwrap_or_else(|| Board::new(Mode::Classic));

    c.bench_function("is_terminal_full_4x4", |b| b.iter(|| is_terminal(black_box(&board))));
}

fn bench_random_game(c: &mut Criterion) {
    c.bench_function("classic_100_moves", |b| {
        b.iter(|| {
            let mut rng = SimpleRng::new(7);
            let mut session = start_game(Mode::Classic, &mut rng);
            for i in 0..100 {
                session = apply_move(&session, Direction::ALL[i % 4], &mut rng).session;
            }
            session
        })
    });
}

criterion_group!(
    benches,
    bench_slide_row,
    bench_apply_move,
    bench_is_terminal,
    bench_random_game
);
criterion_main!(benches);
