use super::board::Board;
use super::types::{CELL_COUNT, Player};
use super::win_detector::check_winner;

/// Plies searched by the lookahead bot after its own candidate move.
pub const LOOKAHEAD_DEPTH: usize = 1;

const WIN_SCORE: i32 = 10;

/// Scores `board` for `player`, where `board` already holds `player`'s
/// candidate move and the opponent is to reply.
///
/// Faster wins score higher (`10 - depth`), slower losses score higher
/// (`depth - 10`), and a full board or the depth limit is neutral.
pub fn score(board: &Board, player: Player, max_depth: usize) -> i32 {
    minimax(board, 0, false, player, max_depth)
}

/// Scores `player` moving at `index`. The caller guarantees the cell is empty.
pub fn score_move(board: &Board, index: usize, player: Player, max_depth: usize) -> i32 {
    score(&board.with_mark(index, player), player, max_depth)
}

fn minimax(board: &Board, depth: usize, is_maximizing: bool, player: Player, max_depth: usize) -> i32 {
    let opponent = player.opponent();
    match check_winner(board) {
        Some(winner) if winner == player => return WIN_SCORE - depth as i32,
        Some(_) => return depth as i32 - WIN_SCORE,
        None => {}
    }

    if board.is_full() || depth >= max_depth {
        return 0;
    }

    if is_maximizing {
        let mut best = i32::MIN;
        for index in 0..CELL_COUNT {
            if !board.is_empty_at(index) {
                continue;
            }
            let eval = minimax(&board.with_mark(index, player), depth + 1, false, player, max_depth);
            best = best.max(eval);
        }
        best
    } else {
        let mut best = i32::MAX;
        for index in 0..CELL_COUNT {
            if !board.is_empty_at(index) {
                continue;
            }
            let eval = minimax(&board.with_mark(index, opponent), depth + 1, true, player, max_depth);
            best = best.min(eval);
        }
        best
    }
}
