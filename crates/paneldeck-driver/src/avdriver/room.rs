//! Room binding and feedback handling.
//!
//! Binding a room is the one place ordering is a correctness invariant,
//! not a preference: every subscription and every piece of device wiring
//! belonging to the previous room must be torn down before the new
//! room's equivalents are attached, or swapped-out handlers keep firing
//! into the new binding. After attach, every feedback-driven visual is
//! painted from the snapshot's current values immediately — the panel
//! never waits for the next change event to catch up.

use paneldeck_core::{
    ChangePhase, Clock, RoomAction, RoomEvent, RoomSnapshot, RoomTopic, ShutdownPromptState,
    SignalSink,
};
use tracing::debug;

use crate::{
    avdriver::{AvPanelDriver, DisplayMode, MEETING_POLL_PERIOD, WELCOME_RIBBON_TIMEOUT},
    capabilities, joins,
    timers::TimerPurpose,
};

impl<S: SignalSink, C: Clock> AvPanelDriver<S, C> {
    /// Bind (or rebind) the active room.
    ///
    /// Strict order: detach everything belonging to the previous room,
    /// attach the full topic set to the new one, then repaint every
    /// feedback-driven visual from the snapshot. Per-room popup
    /// suppression state (last dismissed meeting, pending dial) resets.
    pub fn bind_room(&mut self, snapshot: RoomSnapshot) -> Vec<RoomAction> {
        let mut actions = Vec::new();

        if let Some(previous) = self.room.take() {
            for topic in RoomTopic::BASE {
                actions.push(RoomAction::Detach { topic });
            }
            if self.shutdown_tick_attached {
                actions.push(RoomAction::Detach { topic: RoomTopic::ShutdownTick });
                self.shutdown_tick_attached = false;
            }
            self.modal.hide(&mut self.sink, &mut self.bindings);
            self.disconnect_source_of(&previous);
            self.clear_volume_wiring();
            self.timers.stop(TimerPurpose::MeetingPoll);
        }

        for topic in RoomTopic::BASE {
            actions.push(RoomAction::Attach { topic });
        }

        let name = snapshot.name.clone();
        let has_schedule = snapshot.has_schedule_source;
        self.room = Some(snapshot);
        self.last_dismissed_meeting = None;
        self.popup_meeting = None;
        self.pending_dial = None;

        // Initial paint: current values now, not on the next change event
        self.sink.set_string(joins::text::CURRENT_ROOM_NAME, &name);
        self.show_logo();
        self.rebuild_source_list();
        self.sync_power();
        self.refresh_footer_feedback();
        self.refresh_volume_wiring();
        self.refresh_source_info();
        self.refresh_sharing_status();
        self.refresh_privacy_feedback();
        self.refresh_meetings_list();

        if self.visible && has_schedule {
            let now = self.clock.now();
            self.timers.start_repeating(TimerPurpose::MeetingPoll, now, MEETING_POLL_PERIOD);
        }

        actions
    }

    pub(super) fn handle_room_event(&mut self, event: RoomEvent) -> Vec<RoomAction> {
        if self.room.is_none() {
            debug!(?event, "room event ignored, no room bound");
            return Vec::new();
        }
        match event {
            RoomEvent::PowerChanged(on) => self.handle_power_changed(on),
            RoomEvent::WarmingChanged(warming) => self.handle_warming_changed(warming),
            RoomEvent::CoolingChanged(cooling) => {
                self.handle_cooling_changed(cooling);
                Vec::new()
            },
            RoomEvent::InCallChanged(in_call) => self.handle_in_call_changed(in_call),
            RoomEvent::SharingContentChanged(sharing) => {
                if let Some(room) = &mut self.room {
                    room.sharing_content = sharing;
                }
                self.refresh_sharing_status();
                Vec::new()
            },
            RoomEvent::PrivacyModeChanged(on) => {
                if let Some(room) = &mut self.room {
                    room.privacy_mode_on = on;
                }
                self.refresh_privacy_feedback();
                Vec::new()
            },
            RoomEvent::SourceChanged { phase, previous, current } => {
                match phase {
                    ChangePhase::WillChange => self.disconnect_source(previous),
                    ChangePhase::DidChange => {
                        if let Some(room) = &mut self.room {
                            room.current_source = current;
                        }
                        self.refresh_source_info();
                        self.refresh_sharing_status();
                    },
                }
                Vec::new()
            },
            RoomEvent::VolumeDeviceChanged { phase, current, .. } => {
                match phase {
                    ChangePhase::WillChange => self.clear_volume_wiring(),
                    ChangePhase::DidChange => {
                        if let Some(room) = &mut self.room {
                            room.volume = current;
                        }
                        self.refresh_volume_wiring();
                    },
                }
                Vec::new()
            },
            RoomEvent::VolumeLevelChanged(level) => {
                if let Some(volume) = self.room.as_mut().and_then(|r| r.volume.as_mut()) {
                    volume.level = level;
                }
                if self.volume_slider_wired {
                    self.sink.set_numeric(joins::level::VOLUME_SLIDER, level);
                }
                Vec::new()
            },
            RoomEvent::MuteChanged(muted) => {
                if let Some(volume) = self.room.as_mut().and_then(|r| r.volume.as_mut()) {
                    volume.muted = muted;
                }
                self.sink.set_bool(joins::press::VOLUME_PROGRAM_MUTE, muted);
                Vec::new()
            },
            RoomEvent::ShutdownStarted { kind, seconds } => {
                self.handle_shutdown_started(kind, seconds)
            },
            RoomEvent::ShutdownFinished => self.handle_shutdown_terminal(),
            RoomEvent::ShutdownCancelled => self.handle_shutdown_terminal(),
            RoomEvent::ShutdownTick { seconds_remaining, percent_remaining } => {
                self.handle_shutdown_tick(seconds_remaining, percent_remaining);
                Vec::new()
            },
            RoomEvent::ScheduleChanged(meetings) => {
                if let Some(room) = &mut self.room {
                    room.meetings = meetings;
                }
                self.refresh_meetings_list();
                Vec::new()
            },
            RoomEvent::ConfigChanged(snapshot) => self.bind_room(*snapshot),
        }
    }

    /// Paint everything that depends on room power from mirror state.
    pub(super) fn sync_power(&mut self) {
        let Some(room) = &self.room else {
            return;
        };
        let on = room.is_on;
        self.sink.set_bool(joins::visible::ROOM_IS_ON, on);
        self.sink.set_bool(joins::visible::START_PAGE, !on);

        if on {
            self.setup_footer_room_on();
            // Rebuilding the footer blanks its feedback cells; repaint
            self.refresh_footer_feedback();
            self.sink.set_bool(joins::visible::SELECT_A_SOURCE, false);
            self.sink.set_bool(joins::visible::VOLUME_CONTROLS, true);
        } else {
            self.mode = DisplayMode::Start;
            self.hide_call_surface();
            self.setup_footer_room_off();
            self.show_logo();
            self.refresh_footer_feedback();
            self.sink.set_bool(joins::visible::VOLUME_CONTROLS, false);
            self.sink.set_bool(joins::visible::SOURCE_STAGING_BAR, false);
            // Clear this so the meeting prompt can resurface while off
            self.last_dismissed_meeting = None;
        }
    }

    fn handle_power_changed(&mut self, on: bool) -> Vec<RoomAction> {
        if let Some(room) = &mut self.room {
            room.is_on = on;
        }
        self.sync_power();
        // Out-of-band power-off takes the countdown modal down with it
        if !on && self.modal.is_visible() {
            self.modal.hide(&mut self.sink, &mut self.bindings);
            self.refresh_footer_feedback();
        }
        Vec::new()
    }

    fn handle_warming_changed(&mut self, warming: bool) -> Vec<RoomAction> {
        if let Some(room) = &mut self.room {
            room.is_warming = warming;
        }
        if warming {
            self.show_notification_ribbon("Room is powering on. Please wait...", 0);
            return Vec::new();
        }
        self.show_notification_ribbon("Room is powered on. Welcome.", WELCOME_RIBBON_TIMEOUT);
        // Warm-up complete releases a pending meeting dial, once
        match self.pending_dial.take() {
            Some(meeting) => {
                self.last_dismissed_meeting = Some(meeting.clone());
                vec![RoomAction::Dial { meeting }]
            },
            None => Vec::new(),
        }
    }

    fn handle_cooling_changed(&mut self, cooling: bool) {
        if let Some(room) = &mut self.room {
            room.is_cooling = cooling;
        }
        if cooling {
            self.show_notification_ribbon("Room is powering off. Please wait.", 0);
        } else {
            self.hide_notification_ribbon();
        }
    }

    fn handle_in_call_changed(&mut self, in_call: bool) -> Vec<RoomAction> {
        if let Some(room) = &mut self.room {
            room.in_call = in_call;
        }
        let mut actions = Vec::new();
        if in_call {
            // A source that disables codec sharing cannot remain selected
            // once a call starts; re-route it to the codec OSD
            let incompatible = self.room.as_ref().is_some_and(|room| {
                room.current_source
                    .as_ref()
                    .and_then(|key| room.source(key).ok())
                    .is_some_and(|entry| entry.disable_codec_sharing)
            });
            if incompatible {
                debug!("transitioning to in-call, cancelling non-sharable source");
                actions.push(RoomAction::RunRoute { key: paneldeck_core::SourceKey::codec_osd() });
            }
        }
        self.rebuild_source_list();
        actions
    }

    pub(super) fn refresh_privacy_feedback(&mut self) {
        let privacy_on = self.room.as_ref().is_some_and(|r| r.privacy_mode_on);
        self.sink.set_bool(joins::press::VOLUME_SPEECH_MUTE, privacy_on);
    }

    /// Tear down wiring for the current source of `room` (used with the
    /// outgoing snapshot during a rebind, when the mirror is already
    /// detached).
    fn disconnect_source_of(&mut self, room: &RoomSnapshot) {
        if self.visible {
            self.pages.hide_current(&mut self.sink);
        }
        if let Some(key) = &room.current_source
            && let Ok(entry) = room.source(key)
            && let Some(profile) = &entry.device
        {
            capabilities::unlink_buttons(profile, &mut self.bindings);
        }
    }

    pub(super) fn handle_shutdown_state(&mut self, state: ShutdownPromptState) {
        if let Some(room) = &mut self.room {
            room.shutdown = state;
        }
    }
}
