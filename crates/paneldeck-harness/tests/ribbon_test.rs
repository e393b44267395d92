//! Notification ribbon and warming/cooling feedback.

use paneldeck_core::{RoomEvent, RoomSnapshot};
use paneldeck_driver::joins;
use paneldeck_harness::SimPanel;

fn snapshot() -> RoomSnapshot {
    RoomSnapshot { name: "Huddle".into(), ..RoomSnapshot::default() }
}

#[test]
fn warming_ribbon_stays_until_warmup_completes() {
    let mut sim = SimPanel::start(snapshot());

    sim.room.emit(RoomEvent::WarmingChanged(true));
    sim.pump();

    assert!(sim.sink().bool_value(joins::visible::NOTIFICATION_RIBBON));
    assert_eq!(
        sim.sink().string_value(joins::text::NOTIFICATION_RIBBON),
        "Room is powering on. Please wait..."
    );

    // No timeout on the warming message
    sim.advance(600_000);
    assert!(sim.sink().bool_value(joins::visible::NOTIFICATION_RIBBON));
}

#[test]
fn welcome_ribbon_auto_hides_after_two_seconds() {
    let mut sim = SimPanel::start(snapshot());
    sim.room.emit(RoomEvent::WarmingChanged(true));
    sim.pump();

    sim.room.emit(RoomEvent::WarmingChanged(false));
    sim.pump();
    assert_eq!(
        sim.sink().string_value(joins::text::NOTIFICATION_RIBBON),
        "Room is powered on. Welcome."
    );

    sim.advance(1_999);
    assert!(sim.sink().bool_value(joins::visible::NOTIFICATION_RIBBON));
    sim.advance(1);
    assert!(!sim.sink().bool_value(joins::visible::NOTIFICATION_RIBBON));
}

#[test]
fn cooling_ribbon_follows_cooldown() {
    let mut sim = SimPanel::start(snapshot());

    sim.room.emit(RoomEvent::CoolingChanged(true));
    sim.pump();
    assert_eq!(
        sim.sink().string_value(joins::text::NOTIFICATION_RIBBON),
        "Room is powering off. Please wait."
    );

    sim.room.emit(RoomEvent::CoolingChanged(false));
    sim.pump();
    assert!(!sim.sink().bool_value(joins::visible::NOTIFICATION_RIBBON));
}

#[test]
fn new_notification_replaces_the_pending_auto_hide() {
    let mut sim = SimPanel::start(snapshot());

    sim.driver.show_notification_ribbon("first", 1_000);
    sim.driver.show_notification_ribbon("second", 5_000);

    // The first notification's deadline must not take the second down
    sim.advance(1_000);
    assert!(sim.sink().bool_value(joins::visible::NOTIFICATION_RIBBON));
    assert_eq!(sim.sink().string_value(joins::text::NOTIFICATION_RIBBON), "second");

    sim.advance(4_000);
    assert!(!sim.sink().bool_value(joins::visible::NOTIFICATION_RIBBON));
}

#[test]
fn pinned_notification_cancels_a_pending_auto_hide() {
    let mut sim = SimPanel::start(snapshot());

    sim.driver.show_notification_ribbon("transient", 1_000);
    sim.driver.show_notification_ribbon("pinned", 0);

    sim.advance(600_000);
    assert!(sim.sink().bool_value(joins::visible::NOTIFICATION_RIBBON));

    sim.driver.hide_notification_ribbon();
    assert!(!sim.sink().bool_value(joins::visible::NOTIFICATION_RIBBON));
}

#[test]
fn popup_interlock_survives_ribbon_traffic() {
    // Popups and the ribbon are independent surfaces; a ribbon timeout
    // must not disturb the interlock
    let mut sim = SimPanel::start(snapshot());

    sim.press(joins::press::HEADER_ROOM_BUTTON);
    assert!(sim.sink().bool_value(joins::popup::ROOM_HEADER_PAGE));

    sim.driver.show_notification_ribbon("hello", 1_000);
    sim.advance(1_000);

    assert!(sim.sink().bool_value(joins::popup::ROOM_HEADER_PAGE));

    // Toggle closes it
    sim.press(joins::press::HEADER_ROOM_BUTTON);
    assert!(!sim.sink().bool_value(joins::popup::ROOM_HEADER_PAGE));

    // Close-button path: fresh show then hide-and-clear
    sim.press(joins::press::HEADER_ROOM_BUTTON);
    sim.press(joins::press::INTERLOCKED_MODAL_CLOSE);
    assert!(!sim.sink().bool_value(joins::popup::ROOM_HEADER_PAGE));
}
