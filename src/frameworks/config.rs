use crate::domain::{BoundsPolicy, ChangeTracking, GameRules, HitPolicy, JoinPolicy, SpawnPolicy};
use std::{env, time::Duration};

// Runtime/server constants (not gameplay tuning).

pub const REQUEST_CHANNEL_CAPACITY: usize = 1024;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000 / 60);

pub fn tick_interval() -> Duration {
    env::var("TICK_INTERVAL_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|&millis| millis > 0)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_TICK_INTERVAL)
}

pub fn game_seed() -> Option<u64> {
    env::var("GAME_SEED").ok().and_then(|v| v.parse().ok())
}

pub fn default_room_id() -> String {
    env::var("DEFAULT_ROOM_ID").unwrap_or_else(|_| "default".to_string())
}

pub fn host_player_id() -> String {
    env::var("HOST_PLAYER_ID").unwrap_or_else(|_| "host".to_string())
}

/// Rule policies from the environment; unset or unknown values keep the defaults.
pub fn game_rules() -> GameRules {
    GameRules {
        join: policy_from_env("JOIN_POLICY", parse_join_policy),
        spawn: policy_from_env("SPAWN_POLICY", parse_spawn_policy),
        bounds: policy_from_env("SHIP_BOUNDS_POLICY", parse_bounds_policy),
        hit: policy_from_env("HIT_POLICY", parse_hit_policy),
        change_tracking: policy_from_env("CHANGE_TRACKING", parse_change_tracking),
    }
}

fn policy_from_env<T: Default>(key: &str, parse: fn(&str) -> Option<T>) -> T {
    let Ok(raw) = env::var(key) else {
        return T::default();
    };
    parse(raw.trim()).unwrap_or_else(|| {
        tracing::warn!(key, value = %raw, "unrecognized policy, using default");
        T::default()
    })
}

fn parse_join_policy(value: &str) -> Option<JoinPolicy> {
    match value.to_ascii_lowercase().as_str() {
        "lazy" => Some(JoinPolicy::Lazy),
        "explicit" => Some(JoinPolicy::Explicit),
        _ => None,
    }
}

fn parse_spawn_policy(value: &str) -> Option<SpawnPolicy> {
    match value.to_ascii_lowercase().as_str() {
        "origin" => Some(SpawnPolicy::Origin),
        "random" => Some(SpawnPolicy::Random),
        _ => None,
    }
}

fn parse_bounds_policy(value: &str) -> Option<BoundsPolicy> {
    match value.to_ascii_lowercase().as_str() {
        "sink" => Some(BoundsPolicy::Sink),
        "block" => Some(BoundsPolicy::Block),
        _ => None,
    }
}

fn parse_hit_policy(value: &str) -> Option<HitPolicy> {
    match value.to_ascii_lowercase().as_str() {
        "sink" => Some(HitPolicy::Sink),
        "respawn" => Some(HitPolicy::Respawn),
        "damage" => Some(HitPolicy::Damage),
        _ => None,
    }
}

fn parse_change_tracking(value: &str) -> Option<ChangeTracking> {
    match value.to_ascii_lowercase().as_str() {
        "visible" => Some(ChangeTracking::Visible),
        "every_update" => Some(ChangeTracking::EveryUpdate),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policies_parse_case_insensitively() {
        assert_eq!(parse_join_policy("Explicit"), Some(JoinPolicy::Explicit));
        assert_eq!(parse_spawn_policy("RANDOM"), Some(SpawnPolicy::Random));
        assert_eq!(parse_bounds_policy("block"), Some(BoundsPolicy::Block));
        assert_eq!(parse_hit_policy("respawn"), Some(HitPolicy::Respawn));
        assert_eq!(
            parse_change_tracking("every_update"),
            Some(ChangeTracking::EveryUpdate)
        );
    }

    #[test]
    fn unknown_policies_are_rejected() {
        assert_eq!(parse_join_policy("sometimes"), None);
        assert_eq!(parse_hit_policy(""), None);
    }
}
