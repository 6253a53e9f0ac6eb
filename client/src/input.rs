use seven_row_common::game::{BOARD_SIZE, Difficulty, Position};
use seven_row_common::session::{GameMode, SessionPhase};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    SelectMode(GameMode),
    SelectDifficulty(Difficulty),
    Back,
    Place(usize),
    Reset,
    Menu,
    Quit,
}

/// Reads a cell such as `e5`: column letter `a`-`i`, then row `1`-`9`.
pub fn parse_cell(text: &str) -> Option<usize> {
    let mut chars = text.chars();
    let column = chars.next()?.to_ascii_lowercase();
    if !column.is_ascii_lowercase() {
        return None;
    }
    let row: usize = chars.as_str().parse().ok()?;
    let col = (column as u8 - b'a') as usize;
    if row == 0 || row > BOARD_SIZE {
        return None;
    }
    Position::try_new(row - 1, col).map(|p| p.to_index())
}

/// Interprets one line of user input for the current phase.
pub fn parse_command(phase: SessionPhase, line: &str) -> Result<Command, String> {
    let text = line.trim().to_ascii_lowercase();
    if text == "q" || text == "quit" {
        return Ok(Command::Quit);
    }

    match phase {
        SessionPhase::NotStarted => text
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| GameMode::ALL.get(i).copied())
            .map(Command::SelectMode)
            .ok_or_else(|| format!("Unknown mode '{}', pick 1-{}", text, GameMode::ALL.len())),
        SessionPhase::AwaitingDifficulty => {
            if text == "b" || text == "back" {
                return Ok(Command::Back);
            }
            text.parse::<u8>()
                .ok()
                .and_then(Difficulty::from_level)
                .map(Command::SelectDifficulty)
                .ok_or_else(|| format!("Unknown difficulty '{}', pick 1-3", text))
        }
        SessionPhase::InProgress | SessionPhase::Finished => match text.as_str() {
            "r" | "restart" => Ok(Command::Reset),
            "m" | "menu" => Ok(Command::Menu),
            _ => parse_cell(&text)
                .map(Command::Place)
                .ok_or_else(|| format!("Cannot read cell '{}', use a1-i9", text)),
        },
    }
}
