// Framework bootstrap for the headless game host.

use crate::domain::GameConfig;
use crate::frameworks::config;
use crate::interface_adapters::utils::clock::MonotonicClock;
use crate::use_cases::{RoomHandle, RoomRegistry, RoomSettings};
use std::io::Result;
use std::sync::Arc;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Registry wired with environment configuration.
pub fn build_registry() -> Arc<RoomRegistry> {
    let settings = RoomSettings {
        request_channel_capacity: config::REQUEST_CHANNEL_CAPACITY,
        tick_interval: config::tick_interval(),
        game_config: GameConfig {
            rules: config::game_rules(),
            ..GameConfig::default()
        },
        seed: config::game_seed(),
    };
    tracing::debug!(
        tick_ms = settings.tick_interval.as_millis(),
        rules = ?settings.game_config.rules,
        seed = ?settings.seed,
        "room settings configured"
    );

    Arc::new(RoomRegistry::new(settings, Arc::new(MonotonicClock::new())))
}

/// Hosts rooms until Ctrl-C.
pub async fn run(registry: Arc<RoomRegistry>) -> Result<()> {
    let room_id = config::default_room_id();
    let host = config::host_player_id();
    let room = registry
        .create_room(room_id.clone(), &host)
        .await
        .map_err(|e| {
            tracing::error!(%room_id, error = %e, "failed to open default room");
            std::io::Error::other(e)
        })?;
    tokio::spawn(log_sync_updates(room));

    tokio::signal::ctrl_c().await.inspect_err(|e| {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    })?;

    for room_id in registry.room_ids().await {
        let _ = registry.close_room(&room_id).await;
    }
    tracing::info!("shutdown complete");
    Ok(())
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();
    run(build_registry()).await
}

// Stand-in for a transport layer: report each state push a client would receive.
async fn log_sync_updates(room: RoomHandle) {
    let mut sync_rx = room.subscribe();
    while sync_rx.changed().await.is_ok() {
        let update = *sync_rx.borrow_and_update();
        tracing::debug!(
            room_id = %room.room_id,
            tick = update.tick,
            updated_at = update.updated_at,
            "world changed"
        );
    }
}
