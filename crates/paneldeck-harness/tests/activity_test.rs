//! Activity footer flows: call idempotence, share staging, mode
//! transitions, power sync, and volume controls.

use paneldeck_core::{
    ChangePhase, ListJoin, RoomEvent, RoomSnapshot, SourceEntry, SourceKey, VolumeDeviceState,
};
use paneldeck_driver::{joins, DisplayMode};
use paneldeck_harness::SimPanel;

fn source(key: &str, name: &str, order: u32) -> SourceEntry {
    SourceEntry {
        key: SourceKey::new(key),
        preferred_name: name.into(),
        icon: "blank".into(),
        order,
        include_in_list: true,
        disable_codec_sharing: false,
        device: None,
    }
}

fn snapshot_off() -> RoomSnapshot {
    RoomSnapshot {
        name: "Huddle".into(),
        sources: vec![source("laptop", "Laptop", 1)],
        volume: Some(VolumeDeviceState { has_feedback: true, level: 10_000, muted: false }),
        ..RoomSnapshot::default()
    }
}

/// Footer slots: 0 = Share, 1 = Call, 2 = End Meeting.
const FOOTER: ListJoin = joins::list::ACTIVITY_FOOTER;

#[test]
fn call_button_is_idempotent() {
    let mut sim = SimPanel::start(snapshot_off());

    sim.press_row(FOOTER, 1);
    assert!(sim.sink().bool_value(joins::visible::CALL_SURFACE));
    assert_eq!(sim.driver.mode(), DisplayMode::Call);
    assert_eq!(sim.room.default_call_routes(), 1);

    // Second press with the surface already up: no second warm-up
    sim.press_row(FOOTER, 1);
    assert_eq!(sim.room.default_call_routes(), 1);
    assert!(sim.sink().bool_value(joins::visible::CALL_SURFACE));
}

#[test]
fn share_with_no_default_route_prompts_for_a_source() {
    let mut sim = SimPanel::start(snapshot_off());

    sim.press_row(FOOTER, 0);

    assert!(sim.sink().bool_value(joins::visible::SOURCE_STAGING_BAR));
    assert!(sim.sink().bool_value(joins::visible::SELECT_A_SOURCE));
    assert_eq!(sim.driver.mode(), DisplayMode::Presentation);
    assert_eq!(sim.room.default_present_routes(), 0);
}

#[test]
fn share_runs_default_present_route_when_configured() {
    let mut snapshot = snapshot_off();
    snapshot.has_default_present_route = true;
    let mut sim = SimPanel::start(snapshot);
    sim.room.default_present_key = Some(SourceKey::new("laptop"));

    sim.press_row(FOOTER, 0);

    assert_eq!(sim.room.default_present_routes(), 1);
    assert!(sim.room.state().is_on, "share powered the room");
    assert_eq!(sim.sink().string_value(joins::text::CURRENT_SOURCE_NAME), "Laptop");
}

#[test]
fn share_during_call_lowers_the_call_surface() {
    let mut sim = SimPanel::start(snapshot_off());

    sim.press_row(FOOTER, 1);
    assert!(sim.sink().bool_value(joins::visible::CALL_SURFACE));

    sim.press_row(FOOTER, 0);
    assert!(!sim.sink().bool_value(joins::visible::CALL_SURFACE));
    assert_eq!(sim.driver.mode(), DisplayMode::Presentation);
}

#[test]
fn footer_feedback_tracks_mode() {
    let mut sim = SimPanel::start(snapshot_off());

    sim.press_row(FOOTER, 1);
    assert!(sim.sink().row_bool(FOOTER, 1, 1), "call active");
    assert!(!sim.sink().row_bool(FOOTER, 0, 1));

    sim.press_row(FOOTER, 0);
    assert!(sim.sink().row_bool(FOOTER, 0, 1), "share active");
    assert!(!sim.sink().row_bool(FOOTER, 1, 1));
}

#[test]
fn power_off_returns_to_start_mode() {
    let mut sim = SimPanel::start(snapshot_off());
    sim.press_row(FOOTER, 1);
    assert_eq!(sim.driver.mode(), DisplayMode::Call);

    sim.room.emit(RoomEvent::PowerChanged(false));
    sim.pump();

    assert_eq!(sim.driver.mode(), DisplayMode::Start);
    assert!(sim.sink().bool_value(joins::visible::START_PAGE));
    assert!(!sim.sink().bool_value(joins::visible::CALL_SURFACE));
    assert!(!sim.sink().bool_value(joins::visible::SOURCE_STAGING_BAR));
    assert_eq!(sim.sink().list_count(FOOTER), 2, "footer back to Share/Call");
}

#[test]
fn volume_ramp_passes_press_state_and_raises_gauge() {
    let mut sim = SimPanel::start(snapshot_off());

    sim.press(joins::press::VOLUME_UP);

    assert_eq!(sim.room.volume_ramps(), &[(true, true), (true, false)]);
    // Gauge popup followed the press edge and released with it
    assert!(!sim.sink().bool_value(joins::visible::VOLUME_GAUGE_POPUP));
}

#[test]
fn slider_sets_absolute_level_and_echo_paints_it() {
    let mut sim = SimPanel::start(snapshot_off());

    sim.slide(joins::level::VOLUME_SLIDER, 42_000);

    assert_eq!(sim.room.state().volume.map(|v| v.level), Some(42_000));
    assert_eq!(sim.sink().numeric_value(joins::level::VOLUME_SLIDER), 42_000);
}

#[test]
fn volume_device_swap_rewires_two_phase() {
    let mut sim = SimPanel::start(snapshot_off());

    // Old device detaches first; a ramp press in the gap goes nowhere
    sim.room.emit(RoomEvent::VolumeDeviceChanged {
        phase: ChangePhase::WillChange,
        previous: sim.room.state().volume,
        current: None,
    });
    sim.pump();
    sim.press(joins::press::VOLUME_UP);
    assert!(sim.room.volume_ramps().is_empty());

    // New device without feedback: buttons only, slider zeroed
    let replacement = VolumeDeviceState { has_feedback: false, level: 0, muted: false };
    sim.room.emit(RoomEvent::VolumeDeviceChanged {
        phase: ChangePhase::DidChange,
        previous: None,
        current: Some(replacement),
    });
    sim.pump();
    assert_eq!(sim.sink().numeric_value(joins::level::VOLUME_SLIDER), 0);

    sim.press(joins::press::VOLUME_UP);
    assert_eq!(sim.room.volume_ramps(), &[(true, true), (true, false)]);
}

#[test]
fn mute_toggle_round_trips_through_feedback() {
    let mut sim = SimPanel::start(snapshot_off());

    sim.press(joins::press::VOLUME_PROGRAM_MUTE);

    assert_eq!(sim.room.state().volume.map(|v| v.muted), Some(true));
    assert!(sim.sink().bool_value(joins::press::VOLUME_PROGRAM_MUTE), "feedback echo");
}
