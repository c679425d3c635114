mod support;

use naval_combat::domain::{Command, CommandError, GameRules, JoinPolicy, Orientation};
use naval_combat::use_cases::RoomError;
use std::time::Duration;

#[tokio::test]
async fn duplicate_room_ids_are_rejected() {
    let registry = support::registry(GameRules::default());
    let room_id = support::room_id();

    registry
        .create_room(room_id.clone(), "captain")
        .await
        .expect("first create should succeed");
    let again = registry.create_room(room_id.clone(), "captain").await;

    assert!(matches!(again, Err(RoomError::AlreadyExists)));
    assert!(registry.get_room(&room_id).await.is_some());
}

#[tokio::test]
async fn broadside_shows_up_in_view_and_reload_is_enforced() {
    let registry = support::registry(GameRules::default());
    let room = registry
        .create_room(support::room_id(), "captain")
        .await
        .expect("room should open");

    room.command("captain", Command::FireCannon)
        .await
        .expect("first broadside should fire");
    let second = room.command("captain", Command::FireCannon).await;
    assert!(matches!(
        second,
        Err(RoomError::Command(CommandError::Reloading))
    ));

    let view = room.view("captain").await.expect("view should be served");
    assert_eq!(view.viewer, "captain");
    assert_eq!(view.ships.len(), 1);
    assert_eq!(view.ships[0].player_id, "captain");
    // The upward ball leaves the map on the first tick; the other needs seconds.
    assert!((1..=2).contains(&view.cannon_balls.len()));
}

#[tokio::test]
async fn explicit_rooms_require_join() {
    let registry = support::registry(GameRules {
        join: JoinPolicy::Explicit,
        ..GameRules::default()
    });
    let room = registry
        .create_room(support::room_id(), "captain")
        .await
        .expect("room should open");

    let steer = Command::SetOrientation {
        orientation: Orientation::Right,
        accelerating: false,
    };
    assert!(matches!(
        room.command("mate", steer).await,
        Err(RoomError::Command(CommandError::NotJoined))
    ));

    room.command("mate", Command::Join)
        .await
        .expect("join should succeed");
    assert!(matches!(
        room.command("mate", Command::Join).await,
        Err(RoomError::Command(CommandError::AlreadyJoined))
    ));
    room.command("mate", steer)
        .await
        .expect("joined player can steer");

    let view = room.view("mate").await.expect("view should be served");
    assert_eq!(view.ships.len(), 2);
}

#[tokio::test]
async fn changes_publish_sync_updates() {
    let registry = support::registry(GameRules::default());
    let room = registry
        .create_room(support::room_id(), "captain")
        .await
        .expect("room should open");
    let mut sync_rx = room.subscribe();

    room.command("captain", Command::FireCannon)
        .await
        .expect("broadside should fire");

    tokio::time::timeout(Duration::from_secs(1), sync_rx.changed())
        .await
        .expect("sync update should arrive")
        .expect("room should still be open");
    let view = room.view("captain").await.expect("view should be served");
    assert!(sync_rx.borrow_and_update().updated_at <= view.updated_at);
}

#[tokio::test]
async fn idle_room_stays_quiet() {
    let registry = support::registry(GameRules::default());
    let room = registry
        .create_room(support::room_id(), "captain")
        .await
        .expect("room should open");
    let sync_rx = room.subscribe();

    tokio::time::sleep(support::TEST_TICK * 10).await;

    assert!(!sync_rx.has_changed().expect("sender should be alive"));
    let view = room.view("captain").await.expect("view should be served");
    assert_eq!(view.updated_at, 0);
}

#[tokio::test]
async fn rooms_do_not_share_state() {
    let registry = support::registry(GameRules::default());
    let first = registry
        .create_room(support::room_id(), "captain")
        .await
        .expect("room should open");
    let second = registry
        .create_room(support::room_id(), "captain")
        .await
        .expect("room should open");

    first
        .command("captain", Command::FireCannon)
        .await
        .expect("broadside should fire");
    second
        .command("captain", Command::FireCannon)
        .await
        .expect("other room has its own reload timer");

    second
        .command("stranger", Command::Leave)
        .await
        .expect_err("stranger never joined");
    let view = second.view("captain").await.expect("view should be served");
    assert_eq!(view.ships.len(), 1);
}

#[tokio::test]
async fn closed_room_stops_serving() {
    let registry = support::registry(GameRules::default());
    let room_id = support::room_id();
    let room = registry
        .create_room(room_id.clone(), "captain")
        .await
        .expect("room should open");

    registry.close_room(&room_id).await.expect("room should close");
    assert!(registry.get_room(&room_id).await.is_none());
    assert!(matches!(
        registry.close_room(&room_id).await,
        Err(RoomError::NotFound)
    ));

    // The task may serve one in-flight request before it sees the shutdown.
    let mut closed = false;
    for _ in 0..50 {
        if matches!(room.view("captain").await, Err(RoomError::Closed)) {
            closed = true;
            break;
        }
        tokio::time::sleep(support::TEST_TICK).await;
    }
    assert!(closed, "room should stop answering after close");
}

#[tokio::test]
async fn closing_a_room_ends_its_subscriptions() {
    let registry = support::registry(GameRules::default());
    let room_id = support::room_id();
    let room = registry
        .create_room(room_id.clone(), "captain")
        .await
        .expect("room should open");
    let mut sync_rx = room.subscribe();

    registry.close_room(&room_id).await.expect("room should close");

    let changed = tokio::time::timeout(Duration::from_secs(1), sync_rx.changed())
        .await
        .expect("subscriber should be released once the room stops");
    assert!(changed.is_err());
}
