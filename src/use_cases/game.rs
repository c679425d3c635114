use super::types::{RoomRequest, SyncUpdate};
use crate::domain::{Clock, World};
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, mpsc, watch};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Clock, randomness and pacing for one room loop.
pub struct RoomRuntime {
    pub tick_interval: Duration,
    pub clock: Arc<dyn Clock>,
    pub rng: StdRng,
}

/// Authoritative loop for a single room.
///
/// The task owns its World outright: requests are handled one at a time between
/// ticks, so no command ever observes a half-applied tick.
pub async fn game_task(
    room_id: Arc<str>,
    mut world: World,
    mut request_rx: mpsc::Receiver<RoomRequest>,
    sync_tx: watch::Sender<SyncUpdate>,
    runtime: RoomRuntime,
    shutdown: Arc<Notify>,
) {
    let RoomRuntime {
        tick_interval,
        clock,
        mut rng,
    } = runtime;
    let dt = tick_interval.as_secs_f64();
    let mut tick: u64 = 0;
    let mut published = world.revision();

    let mut interval = tokio::time::interval(tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(room_id = %room_id, tick_ms = tick_interval.as_millis(), "room started");

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                break;
            }
            request = request_rx.recv() => {
                // Every handle is gone; nobody can reach this room anymore.
                let Some(request) = request else { break };
                handle_request(&mut world, request, clock.as_ref(), &mut rng);
            }
            _ = interval.tick() => {
                tick += 1;
                let outcome = world.advance(dt, clock.now_millis(), &mut rng);
                if !outcome.hits.is_empty() || !outcome.sunk.is_empty() {
                    debug!(
                        room_id = %room_id,
                        tick,
                        hits = outcome.hits.len(),
                        sunk = outcome.sunk.len(),
                        "tick resolved combat"
                    );
                }
            }
        }

        // Commands and ticks both count; only push when something changed.
        if world.revision() != published {
            published = world.revision();
            sync_tx.send_replace(SyncUpdate {
                tick,
                updated_at: world.updated_at(),
            });
        }
    }

    info!(room_id = %room_id, tick, "room stopped");
}

fn handle_request(world: &mut World, request: RoomRequest, clock: &dyn Clock, rng: &mut StdRng) {
    match request {
        RoomRequest::Command {
            player_id,
            command,
            reply,
        } => {
            let result = world.apply_command(&player_id, command, clock.now_millis(), rng);
            // The requester may have given up waiting; the command still stands.
            let _ = reply.send(result);
        }
        RoomRequest::View { player_id, reply } => {
            let _ = reply.send(world.snapshot_for(&player_id));
        }
    }
}
