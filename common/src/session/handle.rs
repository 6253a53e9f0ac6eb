use std::sync::Arc;

use tokio::sync::Mutex;

use crate::game::{BotInput, Difficulty, GameStatus, calculate_move};
use crate::log;
use crate::session_rng::SessionRng;

use super::broadcaster::SessionBroadcaster;
use super::settings::{GameMode, PacingSettings};
use super::state_machine::{ComputerTurn, GameSession, SessionSnapshot};

/// Shared, cloneable front for a [`GameSession`] that also plays the
/// computer's turns on a timer.
///
/// Each computer turn is a spawned task holding a [`ComputerTurn`] ticket. The
/// ticket is checked after the pacing delay and again after the move is
/// computed; if the session was reset, left, or otherwise moved on in the
/// meantime the move is dropped.
pub struct SessionHandle<B: SessionBroadcaster> {
    session: Arc<Mutex<GameSession>>,
    rng: Arc<Mutex<SessionRng>>,
    pacing: PacingSettings,
    broadcaster: B,
}

impl<B: SessionBroadcaster> Clone for SessionHandle<B> {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
            rng: self.rng.clone(),
            pacing: self.pacing,
            broadcaster: self.broadcaster.clone(),
        }
    }
}

impl<B: SessionBroadcaster> SessionHandle<B> {
    pub fn new(pacing: PacingSettings, rng: SessionRng, broadcaster: B) -> Self {
        log!("Session created with seed {}", rng.seed());
        Self {
            session: Arc::new(Mutex::new(GameSession::new())),
            rng: Arc::new(Mutex::new(rng)),
            pacing,
            broadcaster,
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }

    pub async fn start_game(&self, mode: GameMode) -> bool {
        let mut session = self.session.lock().await;
        let accepted = session.start_game(mode);
        if accepted {
            self.publish(&session).await;
        }
        accepted
    }

    pub async fn start_game_with_difficulty(&self, difficulty: Difficulty) -> bool {
        let mut session = self.session.lock().await;
        let accepted = session.start_game_with_difficulty(difficulty);
        if accepted {
            self.publish(&session).await;
        }
        accepted
    }

    pub async fn cancel_difficulty_selection(&self) -> bool {
        let mut session = self.session.lock().await;
        let accepted = session.cancel_difficulty_selection();
        if accepted {
            self.publish(&session).await;
        }
        accepted
    }

    pub async fn reset_game(&self) -> bool {
        let mut session = self.session.lock().await;
        let accepted = session.reset_game();
        if accepted {
            self.publish(&session).await;
        }
        accepted
    }

    pub async fn return_to_menu(&self) {
        let mut session = self.session.lock().await;
        session.return_to_menu();
        self.publish(&session).await;
    }

    pub async fn attempt_move(&self, index: usize) -> Option<GameStatus> {
        let mut session = self.session.lock().await;
        let status = session.attempt_move(index)?;
        self.publish(&session).await;
        Some(status)
    }

    async fn publish(&self, session: &GameSession) {
        self.broadcaster.broadcast_state(session.snapshot()).await;
        if let Some(turn) = session.pending_computer_turn() {
            self.schedule_computer_turn(turn);
        }
    }

    fn schedule_computer_turn(&self, turn: ComputerTurn) {
        let handle = self.clone();
        let delay = self.pacing.delay_for(turn.mode);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            handle.play_computer_turn(turn).await;
        });
    }

    async fn play_computer_turn(&self, turn: ComputerTurn) {
        let input = {
            let session = self.session.lock().await;
            if !session.is_current(&turn) {
                log!("Computer turn for {} superseded before it started", turn.player.name());
                return;
            }
            BotInput::from_game_state(session.game())
        };

        let mut rng = self.rng.lock().await.fork();
        let calculated_move =
            tokio::task::spawn_blocking(move || calculate_move(turn.difficulty, input, &mut rng)).await;

        let index = match calculated_move {
            Ok(Some(index)) => index,
            Ok(None) => {
                log!("No empty cell left for {}", turn.player.name());
                return;
            }
            Err(e) => {
                log!("Computer move task failed: {}", e);
                return;
            }
        };

        let mut session = self.session.lock().await;
        if session.apply_computer_move(&turn, index).is_some() {
            log!("{} (level {}) played {}", turn.player.name(), turn.difficulty.level(), index);
            self.publish(&session).await;
        }
    }
}
