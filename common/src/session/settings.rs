use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::defaults::{COMPUTER_VS_COMPUTER_DELAY_MS, HUMAN_VS_COMPUTER_DELAY_MS, MAX_TURN_DELAY_MS};
use crate::game::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsComputer,
    ComputerVsComputer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Controller {
    Human,
    Computer,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [
        GameMode::HumanVsHuman,
        GameMode::HumanVsComputer,
        GameMode::ComputerVsComputer,
    ];

    /// Who moves for `player`. Against the computer the human always takes White.
    pub fn controller(&self, player: Player) -> Controller {
        match (self, player) {
            (GameMode::HumanVsHuman, _) => Controller::Human,
            (GameMode::HumanVsComputer, Player::White) => Controller::Human,
            (GameMode::HumanVsComputer, Player::Black) => Controller::Computer,
            (GameMode::ComputerVsComputer, _) => Controller::Computer,
        }
    }

    pub fn needs_difficulty(&self) -> bool {
        *self != GameMode::HumanVsHuman
    }

    pub fn title(&self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsComputer => "Human vs Computer",
            GameMode::ComputerVsComputer => "Computer vs Computer",
        }
    }
}

/// Artificial pause before a computer move, for pacing only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingSettings {
    pub human_vs_computer_delay_ms: u64,
    pub computer_vs_computer_delay_ms: u64,
}

impl Default for PacingSettings {
    fn default() -> Self {
        Self {
            human_vs_computer_delay_ms: HUMAN_VS_COMPUTER_DELAY_MS,
            computer_vs_computer_delay_ms: COMPUTER_VS_COMPUTER_DELAY_MS,
        }
    }
}

impl PacingSettings {
    pub fn immediate() -> Self {
        Self {
            human_vs_computer_delay_ms: 0,
            computer_vs_computer_delay_ms: 0,
        }
    }

    pub fn delay_for(&self, mode: GameMode) -> Duration {
        match mode {
            GameMode::HumanVsHuman => Duration::ZERO,
            GameMode::HumanVsComputer => Duration::from_millis(self.human_vs_computer_delay_ms),
            GameMode::ComputerVsComputer => Duration::from_millis(self.computer_vs_computer_delay_ms),
        }
    }
}

impl Validate for PacingSettings {
    fn validate(&self) -> Result<(), String> {
        if self.human_vs_computer_delay_ms > MAX_TURN_DELAY_MS {
            return Err(format!(
                "Human vs computer delay must be at most {} ms",
                MAX_TURN_DELAY_MS
            ));
        }
        if self.computer_vs_computer_delay_ms > MAX_TURN_DELAY_MS {
            return Err(format!(
                "Computer vs computer delay must be at most {} ms",
                MAX_TURN_DELAY_MS
            ));
        }
        Ok(())
    }
}
