use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 9;
pub const WIN_LENGTH: usize = 7;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            Player::White => Mark::White,
            Player::Black => Mark::Black,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Player::White => "White",
            Player::Black => "Black",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    White,
    Black,
}

impl Mark {
    pub fn player(&self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::White => Some(Player::White),
            Mark::Black => Some(Player::Black),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        player.mark()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    WhiteWon,
    BlackWon,
    Draw,
}

impl GameStatus {
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::White => GameStatus::WhiteWon,
            Player::Black => GameStatus::BlackWon,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::WhiteWon => Some(Player::White),
            GameStatus::BlackWon => Some(Player::Black),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

/// Row-major coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    pub fn to_index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }
}

/// Scan directions, in the order the win detector tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// Row and column step.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub direction: Direction,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(player: Player, direction: Direction, start: Position, end: Position) -> Self {
        Self {
            player,
            direction,
            start,
            end,
        }
    }

    /// Board indices covered by the line, from `start` to `end`.
    pub fn cells(&self) -> Vec<usize> {
        let (dr, dc) = self.direction.delta();
        (0..WIN_LENGTH as isize)
            .map(|i| {
                let row = self.start.row as isize + dr * i;
                let col = self.start.col as isize + dc * i;
                Position::new(row as usize, col as usize).to_index()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_index_round_trip_is_row_major() {
        assert_eq!(Position::from_index(0), Position::new(0, 0));
        assert_eq!(Position::from_index(8), Position::new(0, 8));
        assert_eq!(Position::from_index(9), Position::new(1, 0));
        assert_eq!(Position::from_index(80), Position::new(8, 8));
        assert_eq!(Position::new(4, 5).to_index(), 41);
    }

    #[test]
    fn test_position_try_new_rejects_off_board() {
        assert!(Position::try_new(8, 8).is_some());
        assert!(Position::try_new(9, 0).is_none());
        assert!(Position::try_new(0, 9).is_none());
    }

    #[test]
    fn test_player_opponent_and_mark() {
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Mark::from(Player::Black), Mark::Black);
        assert_eq!(Mark::White.player(), Some(Player::White));
        assert_eq!(Mark::Empty.player(), None);
    }

    #[test]
    fn test_status_winner() {
        assert_eq!(GameStatus::won_by(Player::White), GameStatus::WhiteWon);
        assert_eq!(GameStatus::BlackWon.winner(), Some(Player::Black));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Draw.is_over());
    }

    #[test]
    fn test_winning_line_cells_follow_direction() {
        let line = WinningLine::new(
            Player::Black,
            Direction::DiagonalDownLeft,
            Position::new(0, 8),
            Position::new(6, 2),
        );
        assert_eq!(line.cells(), vec![8, 16, 24, 32, 40, 48, 56]);
    }
}
