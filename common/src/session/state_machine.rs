use crate::game::{Board, Difficulty, GameState, GameStatus, Player, WinningLine};
use crate::log;

use super::settings::{Controller, GameMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    AwaitingDifficulty,
    InProgress,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Menu,
    AwaitingDifficulty,
    Playing,
}

/// A computer move owed by the session, valid only while the session is
/// still on the same generation and the same player is to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComputerTurn {
    pub generation: u64,
    pub player: Player,
    pub mode: GameMode,
    pub difficulty: Difficulty,
}

/// Read-only view handed to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub mode: Option<GameMode>,
    pub difficulty: Option<Difficulty>,
    pub board: Board,
    pub current: Player,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub winning_line: Option<WinningLine>,
    pub generation: u64,
}

/// Menu, difficulty selection and turn order for one local game.
///
/// Invalid requests are no-ops: they return `false` / `None` and leave the
/// session untouched.
#[derive(Debug, Clone)]
pub struct GameSession {
    stage: Stage,
    mode: Option<GameMode>,
    difficulty: Option<Difficulty>,
    game: GameState,
    generation: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            stage: Stage::Menu,
            mode: None,
            difficulty: None,
            game: GameState::new(),
            generation: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match self.stage {
            Stage::Menu => SessionPhase::NotStarted,
            Stage::AwaitingDifficulty => SessionPhase::AwaitingDifficulty,
            Stage::Playing if self.game.status().is_over() => SessionPhase::Finished,
            Stage::Playing => SessionPhase::InProgress,
        }
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn start_game(&mut self, mode: GameMode) -> bool {
        if self.stage != Stage::Menu {
            return false;
        }

        self.mode = Some(mode);
        if mode.needs_difficulty() {
            self.stage = Stage::AwaitingDifficulty;
            self.generation += 1;
        } else {
            self.difficulty = None;
            self.begin_play();
        }
        log!("Mode selected: {}", mode.title());
        true
    }

    pub fn start_game_with_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.stage != Stage::AwaitingDifficulty {
            return false;
        }

        self.difficulty = Some(difficulty);
        self.begin_play();
        log!("Difficulty selected: level {}", difficulty.level());
        true
    }

    /// Leaves the difficulty screen without starting a game.
    pub fn cancel_difficulty_selection(&mut self) -> bool {
        if self.stage != Stage::AwaitingDifficulty {
            return false;
        }
        self.return_to_menu();
        true
    }

    /// Fresh board with the same mode and difficulty. No-op outside a game.
    pub fn reset_game(&mut self) -> bool {
        if self.stage != Stage::Playing {
            return false;
        }
        self.begin_play();
        log!("Game reset");
        true
    }

    pub fn return_to_menu(&mut self) {
        self.stage = Stage::Menu;
        self.mode = None;
        self.difficulty = None;
        self.game = GameState::new();
        self.generation += 1;
    }

    /// Human move request. Returns the new status if the move was accepted.
    pub fn attempt_move(&mut self, index: usize) -> Option<GameStatus> {
        let mode = self.playing_mode()?;
        let player = self.game.current();
        if mode.controller(player) != Controller::Human {
            log!("Rejected move at {}: {} is computer controlled", index, player.name());
            return None;
        }
        self.place(player, index)
    }

    /// The computer move owed right now, if any.
    pub fn pending_computer_turn(&self) -> Option<ComputerTurn> {
        let mode = self.playing_mode()?;
        let player = self.game.current();
        if mode.controller(player) != Controller::Computer {
            return None;
        }
        Some(ComputerTurn {
            generation: self.generation,
            player,
            mode,
            difficulty: self.difficulty?,
        })
    }

    pub fn is_current(&self, turn: &ComputerTurn) -> bool {
        self.pending_computer_turn().as_ref() == Some(turn)
    }

    /// Applies a computer move for `turn`, discarding it if the session moved on.
    pub fn apply_computer_move(&mut self, turn: &ComputerTurn, index: usize) -> Option<GameStatus> {
        if !self.is_current(turn) {
            log!(
                "Discarded stale computer move for {} (generation {}, now {})",
                turn.player.name(),
                turn.generation,
                self.generation
            );
            return None;
        }
        self.place(turn.player, index)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase(),
            mode: self.mode,
            difficulty: self.difficulty,
            board: *self.game.board(),
            current: self.game.current(),
            status: self.game.status(),
            last_move: self.game.last_move(),
            winning_line: self.game.winning_line(),
            generation: self.generation,
        }
    }

    fn begin_play(&mut self) {
        self.stage = Stage::Playing;
        self.game = GameState::new();
        self.generation += 1;
    }

    fn playing_mode(&self) -> Option<GameMode> {
        if self.phase() != SessionPhase::InProgress {
            return None;
        }
        self.mode
    }

    fn place(&mut self, player: Player, index: usize) -> Option<GameStatus> {
        match self.game.place_mark(player, index) {
            Ok(status) => {
                if status.is_over() {
                    log!("Game over after {} moves: {:?}", self.game.move_count(), status);
                }
                Some(status)
            }
            Err(e) => {
                log!("Rejected move at {}: {}", index, e);
                None
            }
        }
    }
}
