use std::fmt::Write;

use seven_row_common::game::{BOARD_SIZE, Difficulty, GameStatus, Mark, Position};
use seven_row_common::session::{Controller, GameMode, SessionPhase, SessionSnapshot};

/// Column letter plus 1-based row, e.g. `e5` for the centre cell.
pub fn cell_label(index: usize) -> String {
    let position = Position::from_index(index);
    format!("{}{}", (b'a' + position.col as u8) as char, position.row + 1)
}

fn mark_char(mark: Mark) -> char {
    match mark {
        Mark::Empty => '.',
        Mark::White => 'W',
        Mark::Black => 'B',
    }
}

pub fn render(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();
    match snapshot.phase {
        SessionPhase::NotStarted => {
            out.push_str("Choose a mode:\n");
            for (i, mode) in GameMode::ALL.iter().enumerate() {
                let _ = writeln!(out, "  {}) {}", i + 1, mode.title());
            }
            out.push_str("  q) Quit\n");
        }
        SessionPhase::AwaitingDifficulty => {
            out.push_str("Choose difficulty:\n");
            for difficulty in Difficulty::ALL {
                let _ = writeln!(out, "  {}) {}", difficulty.level(), difficulty.title());
            }
            out.push_str("  b) Back\n");
        }
        SessionPhase::InProgress | SessionPhase::Finished => {
            render_board(&mut out, snapshot);
            render_status(&mut out, snapshot);
        }
    }
    out
}

fn render_board(out: &mut String, snapshot: &SessionSnapshot) {
    out.push_str("   ");
    for col in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'a' + col as u8) as char);
    }
    out.push('\n');
    for row in 0..BOARD_SIZE {
        let _ = write!(out, "{:>2} ", row + 1);
        for col in 0..BOARD_SIZE {
            let index = Position::new(row, col).to_index();
            let mark = snapshot.board.get(index).unwrap_or_default();
            let _ = write!(out, " {}", mark_char(mark));
        }
        out.push('\n');
    }
}

fn render_status(out: &mut String, snapshot: &SessionSnapshot) {
    if let Some(index) = snapshot.last_move {
        let _ = writeln!(out, "Last move: {}", cell_label(index));
    }
    match snapshot.status {
        GameStatus::InProgress => {
            let waiting_for_computer = snapshot
                .mode
                .is_some_and(|mode| mode.controller(snapshot.current) == Controller::Computer);
            if waiting_for_computer {
                let _ = writeln!(out, "{} (computer) is thinking...", snapshot.current.name());
            } else {
                let _ = writeln!(out, "{} to move. Enter a cell like e5.", snapshot.current.name());
            }
            out.push_str("r) Restart  m) Menu  q) Quit\n");
        }
        GameStatus::WhiteWon | GameStatus::BlackWon | GameStatus::Draw => {
            match snapshot.status.winner() {
                Some(winner) => {
                    let _ = writeln!(out, "{} wins!", winner.name());
                }
                None => out.push_str("Draw.\n"),
            }
            if let Some(line) = snapshot.winning_line {
                let _ = writeln!(
                    out,
                    "Winning line: {} - {}",
                    cell_label(line.start.to_index()),
                    cell_label(line.end.to_index())
                );
            }
            out.push_str("r) Play again  m) Menu  q) Quit\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seven_row_common::game::Player;
    use seven_row_common::session::GameSession;

    #[test]
    fn test_cell_label_corners() {
        assert_eq!(cell_label(0), "a1");
        assert_eq!(cell_label(8), "i1");
        assert_eq!(cell_label(40), "e5");
        assert_eq!(cell_label(80), "i9");
    }

    #[test]
    fn test_menu_lists_modes() {
        let text = render(&GameSession::new().snapshot());
        assert!(text.contains("1) Human vs Human"));
        assert!(text.contains("3) Computer vs Computer"));
    }

    #[test]
    fn test_board_shows_marks_and_turn() {
        let mut session = GameSession::new();
        session.start_game(GameMode::HumanVsHuman);
        session.attempt_move(0);
        let text = render(&session.snapshot());
        let first_row = text.lines().nth(1).unwrap();
        assert!(first_row.starts_with(" 1  W ."));
        assert!(text.contains("Last move: a1"));
        assert!(text.contains("Black to move"));
    }

    #[test]
    fn test_finished_game_reports_winner_and_line() {
        let mut session = GameSession::new();
        session.start_game(GameMode::HumanVsHuman);
        for col in 0..7 {
            session.attempt_move(Position::new(0, col).to_index());
            if col < 6 {
                session.attempt_move(Position::new(1, col).to_index());
            }
        }
        let snapshot = session.snapshot();
        assert_eq!(snapshot.status.winner(), Some(Player::White));
        let text = render(&snapshot);
        assert!(text.contains("White wins!"));
        assert!(text.contains("Winning line: a1 - g1"));
    }
}
