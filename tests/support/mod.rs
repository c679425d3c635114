// Shared helpers for driving rooms through the registry in integration tests.
use naval_combat::domain::{GameConfig, GameRules};
use naval_combat::interface_adapters::utils::clock::MonotonicClock;
use naval_combat::use_cases::{RoomRegistry, RoomSettings};
use std::{sync::Arc, time::Duration};

// Fast ticks keep the tests short without changing simulation semantics.
pub const TEST_TICK: Duration = Duration::from_millis(10);

// Registry with a fixed seed so every room replays identically.
pub fn registry(rules: GameRules) -> RoomRegistry {
    let settings = RoomSettings {
        request_channel_capacity: 64,
        tick_interval: TEST_TICK,
        game_config: GameConfig {
            rules,
            ..GameConfig::default()
        },
        seed: Some(42),
    };
    RoomRegistry::new(settings, Arc::new(MonotonicClock::new()))
}

// Unique id so rooms from different tests never collide.
pub fn room_id() -> String {
    format!("test-{}", uuid::Uuid::new_v4())
}
