// Domain-level errors for player commands.
//
// The display strings double as the `reason` sent back to clients.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Already joined")]
    AlreadyJoined,
    #[error("Not joined")]
    NotJoined,
    #[error("Invalid action")]
    InvalidAction,
    #[error("Reloading")]
    Reloading,
}
