//! Room binding: strict detach-before-attach ordering, subscription
//! accounting, and the immediate initial paint.

use paneldeck_core::{
    Capability, DeviceId, DeviceProfile, RoomEvent, RoomSnapshot, RoomTopic, SourceEntry,
    SourceKey, VolumeDeviceState,
};
use paneldeck_driver::joins;
use paneldeck_harness::SimPanel;

fn catalog() -> Vec<SourceEntry> {
    vec![
        SourceEntry {
            key: SourceKey::new("laptop"),
            preferred_name: "Laptop".into(),
            icon: "Laptop".into(),
            order: 1,
            include_in_list: true,
            disable_codec_sharing: false,
            device: None,
        },
        SourceEntry {
            key: SourceKey::new("stb"),
            preferred_name: "Cable TV".into(),
            icon: "TV".into(),
            order: 2,
            include_in_list: true,
            disable_codec_sharing: true,
            device: Some(DeviceProfile {
                id: DeviceId("stb-1".into()),
                capabilities: vec![Capability::SetTopBox, Capability::Channel, Capability::DPad],
            }),
        },
    ]
}

fn huddle_snapshot() -> RoomSnapshot {
    RoomSnapshot {
        name: "Huddle 1".into(),
        sources: catalog(),
        volume: Some(VolumeDeviceState { has_feedback: true, level: 20_000, muted: false }),
        has_schedule_source: true,
        ..RoomSnapshot::default()
    }
}

#[test]
fn bind_attaches_every_base_topic_exactly_once() {
    let sim = SimPanel::new(huddle_snapshot());

    for topic in RoomTopic::BASE {
        assert_eq!(sim.room.live_subscriptions(topic), 1, "{topic:?}");
    }
    assert_eq!(sim.room.live_subscriptions(RoomTopic::ShutdownTick), 0);
}

#[test]
fn bind_paints_initial_state_immediately() {
    let sim = SimPanel::new(huddle_snapshot());
    let sink = sim.sink();

    // No change event has fired; everything below came from the snapshot
    assert_eq!(sink.string_value(joins::text::CURRENT_ROOM_NAME), "Huddle 1");
    assert!(sink.bool_value(joins::visible::LOGO_DEFAULT));
    assert!(sink.bool_value(joins::visible::START_PAGE), "room off shows start page");
    assert_eq!(sink.list_count(joins::list::SOURCE_STAGING), 2);
    assert_eq!(sink.row_string(joins::list::SOURCE_STAGING, 0, 1), "Laptop");
    assert_eq!(sink.numeric_value(joins::level::VOLUME_SLIDER), 20_000);
    assert_eq!(sink.string_value(joins::text::CURRENT_SOURCE_NAME), "Room is off");
}

#[test]
fn config_change_rebind_keeps_single_subscription_per_topic() {
    let mut sim = SimPanel::new(huddle_snapshot());

    for _ in 0..3 {
        let refreshed = Box::new(sim.room.state().clone());
        sim.room.emit(RoomEvent::ConfigChanged(refreshed));
        sim.pump();
    }

    for topic in RoomTopic::BASE {
        assert_eq!(sim.room.live_subscriptions(topic), 1, "{topic:?}");
        assert_eq!(sim.room.attaches(topic), sim.room.detaches(topic) + 1, "{topic:?}");
    }
}

#[test]
fn rebinding_to_a_new_room_fully_detaches_the_old_one() {
    let mut sim = SimPanel::new(huddle_snapshot());

    let mut replacement = huddle_snapshot();
    replacement.name = "Huddle 2".into();
    replacement.logo_url = Some("http://logo.example/h2.png".into());
    let outgoing = sim.rebind(replacement);

    for topic in RoomTopic::BASE {
        assert_eq!(outgoing.live_subscriptions(topic), 0, "{topic:?} leaked");
        assert_eq!(sim.room.live_subscriptions(topic), 1, "{topic:?}");
    }
    assert_eq!(sim.sink().string_value(joins::text::CURRENT_ROOM_NAME), "Huddle 2");
    assert!(sim.sink().bool_value(joins::visible::LOGO_URL));
    assert!(!sim.sink().bool_value(joins::visible::LOGO_DEFAULT));
}

#[test]
fn show_without_a_room_aborts_with_no_partial_state() {
    use paneldeck_core::PanelConfig;
    use paneldeck_driver::AvPanelDriver;
    use paneldeck_harness::{ManualClock, RecordingSink};

    let mut driver =
        AvPanelDriver::new(RecordingSink::new(), ManualClock::new(), PanelConfig::default());
    driver.show();

    assert!(!driver.is_visible());
    assert_eq!(driver.sink().visible_bools(), 0, "nothing painted");
}
