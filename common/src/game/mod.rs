mod board;
mod bot_controller;
mod evaluator;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, Difficulty, calculate_move, find_immediate_move, find_winning_move};
pub use evaluator::{LOOKAHEAD_DEPTH, score, score_move};
pub use game_state::{GameState, evaluate_status};
pub use types::{
    BOARD_SIZE, CELL_COUNT, Direction, GameStatus, Mark, Player, Position, WIN_LENGTH, WinningLine,
};
pub use win_detector::{check_winner, check_winner_with_line};
