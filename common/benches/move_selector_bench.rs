use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::time::Duration;
use seven_row_common::SessionRng;
use seven_row_common::game::{Board, BotInput, Difficulty, Player, Position, calculate_move, check_winner};

fn mid_game_board() -> Board {
    let mut board = Board::new();
    let moves = [
        (4, 4, Player::White), (4, 5, Player::Black), (3, 4, Player::White), (3, 5, Player::Black),
        (5, 4, Player::White), (5, 5, Player::Black), (2, 3, Player::White), (6, 6, Player::Black),
        (1, 1, Player::White), (7, 7, Player::Black), (0, 8, Player::White), (8, 0, Player::Black),
    ];
    for (row, col, player) in moves {
        let _ = board.place(Position::new(row, col).to_index(), player);
    }
    board
}

fn play_full_game(difficulty: Difficulty) {
    let mut board = Board::new();
    let mut player = Player::White;
    let mut session_rng = SessionRng::new(7);
    while check_winner(&board).is_none() {
        let input = BotInput { board, player };
        let Some(index) = calculate_move(difficulty, input, &mut session_rng) else {
            break;
        };
        let _ = board.place(index, player);
        player = player.opponent();
    }
}

fn single_move(difficulty: Difficulty, board: Board) {
    let mut session_rng = SessionRng::new(7);
    calculate_move(difficulty, BotInput { board, player: Player::Black }, &mut session_rng);
}

fn move_selector_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_selector");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(20));

    for difficulty in Difficulty::ALL {
        group.bench_function(format!("full_game_level_{}", difficulty.level()), |b| {
            b.iter(|| play_full_game(difficulty))
        });
    }

    group.bench_function("lookahead_empty_board", |b| {
        b.iter(|| single_move(Difficulty::Lookahead, Board::new()))
    });

    group.bench_function("lookahead_mid_game", |b| {
        let board = mid_game_board();
        b.iter(|| single_move(Difficulty::Lookahead, board))
    });

    group.finish();
}

criterion_group!(benches, move_selector_bench);
criterion_main!(benches);
