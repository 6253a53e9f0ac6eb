mod broadcaster;
mod handle;
mod settings;
mod state_machine;

pub use broadcaster::{ChannelBroadcaster, SessionBroadcaster};
pub use handle::SessionHandle;
pub use settings::{Controller, GameMode, PacingSettings};
pub use state_machine::{ComputerTurn, GameSession, SessionPhase, SessionSnapshot};
