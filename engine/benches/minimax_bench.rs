use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::time::Duration;
use tictactoe_engine::{Board, Mark, SessionRng, choose_move, empty_board, find_best_move};

fn midgame_board() -> Board {
    let mut board = empty_board();
    for (index, mark) in [(4, Mark::X), (0, Mark::O), (8, Mark::X), (2, Mark::O)] {
        board[index] = mark;
    }
    board
}

fn bench_best_move_empty_board() {
    let board = empty_board();
    let mut rng = SessionRng::from_random();
    find_best_move(&board, &mut rng).unwrap();
}

fn bench_best_move_midgame() {
    let board = midgame_board();
    let mut rng = SessionRng::from_random();
    find_best_move(&board, &mut rng).unwrap();
}

fn bench_choose_move_default_difficulty() {
    let board = midgame_board();
    let mut rng = SessionRng::from_random();
    choose_move(&board, 0.7, &mut rng).unwrap();
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("best_move_empty_board", |b| {
        b.iter(bench_best_move_empty_board)
    });

    group.bench_function("best_move_midgame", |b| {
        b.iter(bench_best_move_midgame)
    });

    group.bench_function("choose_move_default_difficulty", |b| {
        b.iter(bench_choose_move_default_difficulty)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
