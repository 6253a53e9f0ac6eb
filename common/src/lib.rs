pub mod config;
pub mod defaults;
pub mod game;
pub mod logger;
pub mod session;
pub mod session_rng;

pub use game::{Board, Difficulty, GameStatus, Player, Position};
pub use session::{GameMode, GameSession, SessionHandle, SessionPhase, SessionSnapshot};
pub use session_rng::SessionRng;
