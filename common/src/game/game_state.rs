use super::board::Board;
use super::types::{GameStatus, Player, WinningLine};
use super::win_detector::{check_winner, check_winner_with_line};

/// Status derived from the board alone: a winner first, then a full board.
pub fn evaluate_status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        return GameStatus::won_by(winner);
    }
    if board.is_full() {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Player,
    status: GameStatus,
    last_move: Option<usize>,
    move_count: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::White,
            status: GameStatus::InProgress,
            last_move: None,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Player {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        if self.status.winner().is_some() {
            check_winner_with_line(&self.board)
        } else {
            None
        }
    }

    /// Places `player`'s mark and returns the recomputed status. The turn only
    /// passes to the opponent while the game is still in progress.
    pub fn place_mark(&mut self, player: Player, index: usize) -> Result<GameStatus, String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if player != self.current {
            return Err(format!("Not {}'s turn", player.name()));
        }

        self.board.place(index, player)?;
        self.last_move = Some(index);
        self.move_count += 1;

        self.status = evaluate_status(&self.board);

        if self.status == GameStatus::InProgress {
            self.current = self.current.opponent();
        }

        Ok(self.status)
    }
}
