use super::board::Board;
use super::types::{BOARD_SIZE, Direction, Player, Position, WIN_LENGTH, WinningLine};

pub fn check_winner(board: &Board) -> Option<Player> {
    check_winner_with_line(board).map(|line| line.player)
}

/// Scans row-major, trying each direction in [`Direction::ALL`] order from
/// every occupied cell, and returns the first complete run found.
pub fn check_winner_with_line(board: &Board) -> Option<WinningLine> {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let start = Position::new(row, col);
            let Some(player) = board.get(start.to_index()).and_then(|m| m.player()) else {
                continue;
            };

            for direction in Direction::ALL {
                if let Some(end) = check_line(board, start, direction, player) {
                    return Some(WinningLine::new(player, direction, start, end));
                }
            }
        }
    }

    None
}

/// Returns the far end of the run if all seven cells from `start` along
/// `direction` stay on the board and hold `player`'s mark.
fn check_line(board: &Board, start: Position, direction: Direction, player: Player) -> Option<Position> {
    let (dr, dc) = direction.delta();
    let last = (WIN_LENGTH - 1) as isize;
    let end_row = start.row as isize + dr * last;
    let end_col = start.col as isize + dc * last;
    if end_row < 0 || end_col < 0 || end_row >= BOARD_SIZE as isize || end_col >= BOARD_SIZE as isize {
        return None;
    }

    let mark = player.mark();
    for i in 0..WIN_LENGTH as isize {
        let row = (start.row as isize + dr * i) as usize;
        let col = (start.col as isize + dc * i) as usize;
        if board.get(Position::new(row, col).to_index()) != Some(mark) {
            return None;
        }
    }

    Some(Position::new(end_row as usize, end_col as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{CELL_COUNT, Mark};
    use crate::session_rng::SessionRng;

    fn board_with(player: Player, cells: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in cells {
            board.place(i, player).unwrap();
        }
        board
    }

    fn brute_force_winners(board: &Board) -> Vec<Player> {
        let mut winners = Vec::new();
        for index in 0..CELL_COUNT {
            let start = Position::from_index(index);
            for direction in Direction::ALL {
                let (dr, dc) = direction.delta();
                let cells: Vec<Option<Mark>> = (0..WIN_LENGTH as isize)
                    .map(|i| {
                        let r = start.row as isize + dr * i;
                        let c = start.col as isize + dc * i;
                        if r < 0 || c < 0 || r >= BOARD_SIZE as isize || c >= BOARD_SIZE as isize {
                            None
                        } else {
                            board.get(Position::new(r as usize, c as usize).to_index())
                        }
                    })
                    .collect();
                if let Some(Some(first)) = cells.first()
                    && let Some(player) = first.player()
                    && cells.iter().all(|c| *c == Some(*first))
                {
                    winners.push(player);
                }
            }
        }
        winners
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_single_marks_have_no_winner() {
        let mut board = Board::new();
        board.place(0, Player::White).unwrap();
        board.place(40, Player::Black).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_row_win_only_after_seventh_mark() {
        let mut board = Board::new();
        for i in 0..6 {
            board.place(i, Player::White).unwrap();
            assert_eq!(check_winner(&board), None);
        }
        board.place(6, Player::White).unwrap();
        assert_eq!(check_winner(&board), Some(Player::White));
    }

    #[test]
    fn test_vertical_win() {
        let cells: Vec<usize> = (2..9).map(|r| Position::new(r, 4).to_index()).collect();
        let board = board_with(Player::Black, &cells);
        let line = check_winner_with_line(&board).unwrap();
        assert_eq!(line.player, Player::Black);
        assert_eq!(line.direction, Direction::Vertical);
        assert_eq!(line.start, Position::new(2, 4));
        assert_eq!(line.end, Position::new(8, 4));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let cells: Vec<usize> = (0..7).map(|i| Position::new(i + 1, i + 2).to_index()).collect();
        let board = board_with(Player::White, &cells);
        let line = check_winner_with_line(&board).unwrap();
        assert_eq!(line.direction, Direction::DiagonalDownRight);
        assert_eq!(line.start, Position::new(1, 2));
    }

    #[test]
    fn test_diagonal_down_left_win() {
        let cells: Vec<usize> = (0..7).map(|i| Position::new(i + 2, 6 - i).to_index()).collect();
        let board = board_with(Player::Black, &cells);
        let line = check_winner_with_line(&board).unwrap();
        assert_eq!(line.direction, Direction::DiagonalDownLeft);
        assert_eq!(line.start, Position::new(2, 6));
        assert_eq!(line.end, Position::new(8, 0));
    }

    #[test]
    fn test_runs_do_not_wrap_across_rows() {
        // cols 5..8 of row 0 followed by cols 0..2 of row 1: contiguous indices, not a line
        let board = board_with(Player::White, &[5, 6, 7, 8, 9, 10, 11]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_broken_run_is_not_a_win() {
        let board = board_with(Player::White, &[0, 1, 2, 4, 5, 6, 7]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_is_reported() {
        let mut board = Board::new();
        // Black column at col 0 starting row 1, White row at row 0
        for r in 1..8 {
            board.place(Position::new(r, 0).to_index(), Player::Black).unwrap();
        }
        for c in 2..9 {
            board.place(Position::new(0, c).to_index(), Player::White).unwrap();
        }
        // row 0 is scanned before row 1
        assert_eq!(check_winner(&board), Some(Player::White));
    }

    #[test]
    fn test_check_winner_matches_brute_force_on_random_boards() {
        let mut rng = SessionRng::new(7);
        for _ in 0..300 {
            let fill = rng.random_range(0..=CELL_COUNT);
            let marks: Vec<Mark> = (0..CELL_COUNT)
                .map(|i| {
                    if i >= fill {
                        Mark::Empty
                    } else if rng.random_range(0..10) < 7 {
                        Mark::White
                    } else {
                        Mark::Black
                    }
                })
                .collect();
            let board = Board::from_marks(&marks);
            let expected = brute_force_winners(&board);
            let actual = check_winner(&board);
            assert_eq!(actual, expected.first().copied(), "{:?}", board);
            assert_eq!(actual, check_winner(&board));
        }
    }
}
