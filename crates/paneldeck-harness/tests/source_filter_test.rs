//! Source staging list filtering and the asynchronous selection flow.

use paneldeck_core::{
    Capability, DeviceId, DeviceProfile, ListJoin, RoomEvent, RoomSnapshot, SourceEntry, SourceKey,
};
use paneldeck_driver::joins;
use paneldeck_harness::SimPanel;

const STAGING: ListJoin = joins::list::SOURCE_STAGING;
const FOOTER: ListJoin = joins::list::ACTIVITY_FOOTER;

fn entry(key: &str, name: &str, order: u32, included: bool, no_share: bool) -> SourceEntry {
    SourceEntry {
        key: SourceKey::new(key),
        preferred_name: name.into(),
        icon: "blank".into(),
        order,
        include_in_list: included,
        disable_codec_sharing: no_share,
        device: None,
    }
}

/// The canonical mixed catalog: A included and shareable, B excluded,
/// C included but not shareable.
fn mixed_catalog() -> Vec<SourceEntry> {
    vec![
        entry("a", "Source A", 1, true, false),
        entry("b", "Source B", 2, false, false),
        entry("c", "Source C", 3, true, true),
    ]
}

fn snapshot_with(sources: Vec<SourceEntry>) -> RoomSnapshot {
    RoomSnapshot { name: "Huddle".into(), sources, ..RoomSnapshot::default() }
}

fn staged_names(sim: &SimPanel) -> Vec<String> {
    let count = sim.sink().list_count(STAGING);
    (0..count).map(|slot| sim.sink().row_string(STAGING, slot, 1).to_string()).collect()
}

#[test]
fn room_off_not_in_call_shows_included_sources() {
    let sim = SimPanel::start(snapshot_with(mixed_catalog()));
    assert_eq!(staged_names(&sim), ["Source A", "Source C"]);
}

#[test]
fn entering_a_call_filters_non_sharable_sources() {
    let mut sim = SimPanel::start(snapshot_with(mixed_catalog()));

    sim.press_row(FOOTER, 1);

    assert_eq!(staged_names(&sim), ["Source A"]);
}

#[test]
fn in_call_feedback_alone_filters_too() {
    // A source can be staged while warming, before in-call flips; the
    // flip itself must re-run the filter
    let mut sim = SimPanel::start(snapshot_with(mixed_catalog()));

    sim.room.emit(RoomEvent::InCallChanged(true));
    sim.pump();

    assert_eq!(staged_names(&sim), ["Source A"]);
}

#[test]
fn ordering_follows_configured_order_not_catalog_order() {
    let mut shuffled = mixed_catalog();
    shuffled.reverse();
    let sim = SimPanel::start(snapshot_with(shuffled));

    assert_eq!(staged_names(&sim), ["Source A", "Source C"]);
}

#[test]
fn selection_is_asynchronous_relative_to_the_ui_update() {
    let mut sources = mixed_catalog();
    sources[0].device = Some(DeviceProfile {
        id: DeviceId("stb-1".into()),
        capabilities: vec![Capability::SetTopBox, Capability::Channel],
    });
    let mut sim = SimPanel::start(snapshot_with(sources));

    // Pressing the row runs the route; the page manager and header only
    // change once the room's source-change feedback lands
    sim.press_row(STAGING, 0);

    assert_eq!(sim.room.routes_run(), [SourceKey::new("a")]);
    assert_eq!(sim.room.state().current_source, Some(SourceKey::new("a")));
    assert_eq!(sim.sink().string_value(joins::text::CURRENT_SOURCE_NAME), "Source A");
    assert!(sim.sink().bool_value(joins::page::SET_TOP_BOX), "set-top-box surface raised");
}

#[test]
fn in_call_transition_reroutes_incompatible_source() {
    let mut sim = SimPanel::start(snapshot_with(mixed_catalog()));

    // Stage the non-sharable source while out of call
    sim.press_row(STAGING, 1);
    assert_eq!(sim.room.state().current_source, Some(SourceKey::new("c")));

    sim.room.emit(RoomEvent::InCallChanged(true));
    sim.pump();

    // The orchestrator re-routed away from it proactively
    assert_eq!(sim.room.state().current_source, Some(SourceKey::codec_osd()));
    assert!(sim.room.routes_run().contains(&SourceKey::codec_osd()));
}

#[test]
fn unknown_current_source_is_omitted_not_fatal() {
    let mut snapshot = snapshot_with(mixed_catalog());
    snapshot.current_source = Some(SourceKey::new("ghost"));
    snapshot.is_on = true;

    let sim = SimPanel::start(snapshot);

    // Configuration gap renders as no current source
    assert_eq!(sim.sink().string_value(joins::text::CURRENT_SOURCE_NAME), "Room is off");
    assert_eq!(sim.sink().string_value(joins::text::CURRENT_SOURCE_ICON), "Power");
}

#[test]
fn device_buttons_follow_the_routed_source() {
    let mut sources = mixed_catalog();
    sources[0].device = Some(DeviceProfile {
        id: DeviceId("stb-1".into()),
        capabilities: vec![Capability::Channel],
    });
    let mut sim = SimPanel::start(snapshot_with(sources));

    // Unrouted: capability joins are not wired
    sim.press(joins::device::CHANNEL_UP);
    assert!(sim.room.device_buttons().is_empty());

    sim.press_row(STAGING, 0);
    sim.press(joins::device::CHANNEL_UP);

    let presses = sim.room.device_buttons();
    assert_eq!(presses.len(), 2, "press and release forwarded");
    assert_eq!(presses[0].0, DeviceId("stb-1".into()));

    // Routing away unlinks the old device's buttons
    sim.press_row(STAGING, 1);
    sim.press(joins::device::CHANNEL_UP);
    assert_eq!(sim.room.device_buttons().len(), 2);
}
