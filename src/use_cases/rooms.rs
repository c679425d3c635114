// Room orchestration for spawning and managing independent game worlds.

use crate::domain::{Clock, Command, CommandError, GameConfig, PlayerView, World};
use crate::interface_adapters::utils::rng::room_rng;
use crate::use_cases::game::{RoomRuntime, game_task};
use crate::use_cases::{RoomRequest, SyncUpdate};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{Notify, RwLock, mpsc, oneshot, watch};
use tracing::info;

/// Shared configuration for spawning room worlds.
#[derive(Debug, Clone)]
pub struct RoomSettings {
    /// Capacity for inbound player requests.
    pub request_channel_capacity: usize,
    /// Fixed tick interval for the game loop.
    pub tick_interval: Duration,
    /// Tuning and rules every new World starts with.
    pub game_config: GameConfig,
    /// Fixed seed for reproducible rooms; fresh OS entropy when absent.
    pub seed: Option<u64>,
}

/// Errors returned by room registry and handle operations.
#[derive(Debug, Error)]
pub enum RoomError {
    /// Room already exists and cannot be re-created.
    #[error("room already exists")]
    AlreadyExists,
    #[error("room not found")]
    NotFound,
    /// The room loop has stopped.
    #[error("room closed")]
    Closed,
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Per-room channels.
#[derive(Clone)]
pub struct RoomHandle {
    /// Identifier clients use to target this room.
    pub room_id: Arc<str>,
    /// Sender for requests into the room task.
    request_tx: mpsc::Sender<RoomRequest>,
    /// Latest sync marker; the room task holds the only sender.
    sync_rx: watch::Receiver<SyncUpdate>,
    /// Stops the room task.
    shutdown: Arc<Notify>,
}

impl RoomHandle {
    /// Applies a player command and waits for its result.
    pub async fn command(&self, player_id: &str, command: Command) -> Result<(), RoomError> {
        let (reply, rx) = oneshot::channel();
        self.request_tx
            .send(RoomRequest::Command {
                player_id: player_id.to_string(),
                command,
                reply,
            })
            .await
            .map_err(|_| RoomError::Closed)?;
        rx.await.map_err(|_| RoomError::Closed)??;
        Ok(())
    }

    /// Fetches the read-only projection for a player.
    pub async fn view(&self, player_id: &str) -> Result<PlayerView, RoomError> {
        let (reply, rx) = oneshot::channel();
        self.request_tx
            .send(RoomRequest::View {
                player_id: player_id.to_string(),
                reply,
            })
            .await
            .map_err(|_| RoomError::Closed)?;
        rx.await.map_err(|_| RoomError::Closed)
    }

    /// Receiver that wakes whenever the world changed and errors once the room stops.
    pub fn subscribe(&self) -> watch::Receiver<SyncUpdate> {
        let mut sync_rx = self.sync_rx.clone();
        sync_rx.mark_unchanged();
        sync_rx
    }
}

/// Thread-safe registry for active rooms.
pub struct RoomRegistry {
    /// Global settings applied to newly created rooms.
    settings: RoomSettings,
    clock: Arc<dyn Clock>,
    /// Map of room id to active handle.
    rooms: RwLock<HashMap<String, RoomHandle>>,
}

impl RoomRegistry {
    pub fn new(settings: RoomSettings, clock: Arc<dyn Clock>) -> Self {
        Self {
            settings,
            clock,
            rooms: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a new room around a fresh World and spawns its task.
    pub async fn create_room(
        &self,
        room_id: String,
        creator: &str,
    ) -> Result<RoomHandle, RoomError> {
        let mut rooms = self.rooms.write().await;
        if rooms.contains_key(&room_id) {
            return Err(RoomError::AlreadyExists);
        }

        let mut rng = room_rng(self.settings.seed);
        let world = World::create_game(creator, self.settings.game_config, &mut rng);

        let (request_tx, request_rx) =
            mpsc::channel::<RoomRequest>(self.settings.request_channel_capacity);
        let (sync_tx, sync_rx) = watch::channel(SyncUpdate::default());
        let shutdown = Arc::new(Notify::new());
        let room_id: Arc<str> = Arc::from(room_id);

        tokio::spawn(game_task(
            room_id.clone(),
            world,
            request_rx,
            sync_tx,
            RoomRuntime {
                tick_interval: self.settings.tick_interval,
                clock: self.clock.clone(),
                rng,
            },
            shutdown.clone(),
        ));

        let room = RoomHandle {
            room_id: room_id.clone(),
            request_tx,
            sync_rx,
            shutdown,
        };

        info!(room_id = %room_id, creator, "room created");
        rooms.insert(room_id.to_string(), room.clone());
        Ok(room)
    }

    /// Returns a room handle for the provided id, if it exists.
    pub async fn get_room(&self, room_id: &str) -> Option<RoomHandle> {
        let rooms = self.rooms.read().await;
        rooms.get(room_id).cloned()
    }

    /// Stops the room task and forgets the room. Outstanding handles start failing with `Closed`.
    pub async fn close_room(&self, room_id: &str) -> Result<(), RoomError> {
        let room = self
            .rooms
            .write()
            .await
            .remove(room_id)
            .ok_or(RoomError::NotFound)?;
        room.shutdown.notify_one();
        info!(room_id, "room closed");
        Ok(())
    }

    /// Ids of every open room.
    pub async fn room_ids(&self) -> Vec<String> {
        let rooms = self.rooms.read().await;
        rooms.keys().cloned().collect()
    }
}
