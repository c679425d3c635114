// Use cases layer: room workflows hosting one World each.

pub mod game;
pub mod rooms;
pub mod types;

pub use rooms::{RoomError, RoomHandle, RoomRegistry, RoomSettings};
pub use types::{RoomRequest, SyncUpdate};
