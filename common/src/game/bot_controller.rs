use serde::{Deserialize, Serialize};

use super::board::Board;
use super::evaluator::{LOOKAHEAD_DEPTH, score_move};
use super::game_state::GameState;
use super::types::Player;
use super::win_detector::check_winner;
use crate::session_rng::SessionRng;

/// Computer skill level, shared by every computer seat in a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Level 1: uniformly random empty cell.
    Random,
    /// Level 2: take an immediate win, else block one, else random.
    Blocking,
    /// Level 3: take or block immediately, else one-ply lookahead.
    Lookahead,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Random, Difficulty::Blocking, Difficulty::Lookahead];

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Random),
            2 => Some(Difficulty::Blocking),
            3 => Some(Difficulty::Lookahead),
            _ => None,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Difficulty::Random => 1,
            Difficulty::Blocking => 2,
            Difficulty::Lookahead => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Difficulty::Random => "Easy",
            Difficulty::Blocking => "Medium",
            Difficulty::Lookahead => "Hard",
        }
    }
}

pub struct BotInput {
    pub board: Board,
    pub player: Player,
}

impl BotInput {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: *state.board(),
            player: state.current(),
        }
    }
}

/// Picks a cell for `input.player`. Returns `None` only when the board has no
/// empty cell; callers are expected to stop asking once the game is over.
pub fn calculate_move(difficulty: Difficulty, input: BotInput, rng: &mut SessionRng) -> Option<usize> {
    match difficulty {
        Difficulty::Random => calculate_random_move(&input.board, rng),
        Difficulty::Blocking => calculate_blocking_move(&input.board, input.player, rng),
        Difficulty::Lookahead => calculate_lookahead_move(&input.board, input.player),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

fn calculate_blocking_move(board: &Board, player: Player, rng: &mut SessionRng) -> Option<usize> {
    find_immediate_move(board, player).or_else(|| calculate_random_move(board, rng))
}

fn calculate_lookahead_move(board: &Board, player: Player) -> Option<usize> {
    if let Some(index) = find_immediate_move(board, player) {
        return Some(index);
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in board.available_moves() {
        let score = score_move(board, index, player, LOOKAHEAD_DEPTH);
        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// First cell, row-major, that wins on the spot for `player`.
pub fn find_winning_move(board: &Board, player: Player) -> Option<usize> {
    board
        .available_moves()
        .into_iter()
        .find(|&index| check_winner(&board.with_mark(index, player)) == Some(player))
}

/// A winning cell for `player` if one exists anywhere, otherwise the first
/// cell the opponent would win on.
pub fn find_immediate_move(board: &Board, player: Player) -> Option<usize> {
    find_winning_move(board, player).or_else(|| find_winning_move(board, player.opponent()))
}
