use std::future::Future;

use tokio::sync::mpsc;

use super::state_machine::SessionSnapshot;

/// Receives a snapshot after every accepted transition.
///
/// Called while the session lock is held, so implementations must not call
/// back into the session handle.
pub trait SessionBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: SessionSnapshot) -> impl Future<Output = ()> + Send;
}

/// Forwards snapshots into an unbounded channel.
#[derive(Clone)]
pub struct ChannelBroadcaster {
    sender: mpsc::UnboundedSender<SessionSnapshot>,
}

impl ChannelBroadcaster {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SessionSnapshot>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl SessionBroadcaster for ChannelBroadcaster {
    async fn broadcast_state(&self, snapshot: SessionSnapshot) {
        // A dropped receiver just means nobody is watching any more
        let _ = self.sender.send(snapshot);
    }
}
