// Use-case level inputs/outputs for the room loop.

use crate::domain::{Command, CommandError, PlayerId, PlayerView};
use tokio::sync::oneshot;

#[derive(Debug)]
pub enum RoomRequest {
    Command {
        player_id: PlayerId,
        command: Command,
        reply: oneshot::Sender<Result<(), CommandError>>,
    },
    View {
        player_id: PlayerId,
        reply: oneshot::Sender<PlayerView>,
    },
}

/// Published whenever the room's world changed; consumers push fresh views on receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncUpdate {
    pub tick: u64,
    pub updated_at: u64,
}
