//! Room orchestrator.
//!
//! [`AvPanelDriver`] is the central state machine for the panel surface.
//! It consumes serially-arriving [`PanelEvent`]s — presses, room
//! feedback, timer ticks — writes UI state to its owned signal sink, and
//! returns `RoomAction` values for the embedding runtime to execute
//! against the room and its devices.
//!
//! The driver owns every piece of shared mutable panel state: the bound
//! room mirror, the display mode, the interlock, the lists, the page
//! manager cache, and the timer set. Nothing else mutates them.

mod meetings;
mod room;
mod shutdown;
mod sources;

use paneldeck_core::{
    Clock, HeaderStyle, Millis, PanelConfig, PressTarget, RoomAction, RoomSnapshot, SignalSink,
    SourceKey,
};
use tracing::{debug, error};

use crate::{
    bindings::ButtonBindings,
    command::PanelCommand,
    event::PanelEvent,
    interlock::Interlock,
    joins,
    list::{DynamicList, ListRow},
    modal::ModalDialog,
    pages::PageRegistry,
    timers::{TimerPurpose, Timers},
};

/// How often the meeting list is refreshed and the popup re-evaluated.
const MEETING_POLL_PERIOD: Millis = 60_000;

/// Ribbon display time for the powered-on welcome message.
const WELCOME_RIBBON_TIMEOUT: Millis = 2_000;

/// Which footer/staging configuration is active.
///
/// Exactly one mode is active at a time. Transitions are driven by the
/// activity buttons and by room power (off always lands on `Start`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Room off; footer offers Share and Call.
    Start,
    /// A non-call source is selected or being selected.
    Presentation,
    /// The call surface is raised full-screen.
    Call,
    /// Reserved orthogonal overlay flag (volume gauge popup only).
    AudioSetup,
}

/// Lazily created diagnostics page, cached for the session.
#[derive(Debug, Default)]
struct TechPage {
    visible: bool,
}

impl TechPage {
    fn show(&mut self, sink: &mut impl SignalSink) {
        if !self.visible {
            sink.set_bool(joins::visible::TECH_PAGE, true);
            self.visible = true;
        }
    }
}

/// Panel AV state machine for one touch panel bound to one room.
pub struct AvPanelDriver<S, C> {
    sink: S,
    clock: C,
    config: PanelConfig,
    bindings: ButtonBindings,
    popup_interlock: Interlock,
    footer_list: DynamicList,
    source_list: DynamicList,
    meetings_list: DynamicList,
    pages: PageRegistry,
    timers: Timers,
    modal: ModalDialog,
    mode: DisplayMode,
    visible: bool,
    call_surface_visible: bool,
    tech_page: Option<TechPage>,
    room: Option<RoomSnapshot>,
    last_dismissed_meeting: Option<paneldeck_core::MeetingId>,
    popup_meeting: Option<paneldeck_core::MeetingId>,
    pending_dial: Option<paneldeck_core::MeetingId>,
    shutdown_tick_attached: bool,
    volume_slider_wired: bool,
    show_volume_gauge: bool,
}

impl<S: SignalSink, C: Clock> AvPanelDriver<S, C> {
    /// Create a driver with no room bound and nothing shown.
    pub fn new(sink: S, clock: C, config: PanelConfig) -> Self {
        Self {
            sink,
            clock,
            config,
            bindings: ButtonBindings::new(),
            popup_interlock: Interlock::new(),
            footer_list: DynamicList::new(joins::list::ACTIVITY_FOOTER, 3, 1, 0, 1),
            source_list: DynamicList::new(joins::list::SOURCE_STAGING, 10, 1, 0, 2),
            meetings_list: DynamicList::new(joins::list::MEETINGS, 20, 2, 0, 5),
            pages: PageRegistry::new(),
            timers: Timers::new(),
            modal: ModalDialog::new(),
            mode: DisplayMode::Start,
            visible: false,
            call_surface_visible: false,
            tech_page: None,
            room: None,
            last_dismissed_meeting: None,
            popup_meeting: None,
            pending_dial: None,
            shutdown_tick_attached: false,
            volume_slider_wired: false,
            show_volume_gauge: true,
        }
    }

    /// Process one event and return actions for the runtime.
    pub fn handle(&mut self, event: PanelEvent) -> Vec<RoomAction> {
        match event {
            PanelEvent::Press { target, pressed } => self.handle_press(target, pressed),
            PanelEvent::Slider { join, value } => self.handle_slider(join, value),
            PanelEvent::Room(event) => self.handle_room_event(event),
            PanelEvent::Tick => self.pump_timers(),
        }
    }

    /// Show the whole panel surface.
    ///
    /// Fatal without a bound room: logged and aborted with no partial
    /// visual state.
    pub fn show(&mut self) {
        if self.room.is_none() {
            error!("cannot show panel, no room bound");
            return;
        }

        if self.config.header_style == HeaderStyle::Habanero {
            self.bindings
                .bind_release(joins::press::HEADER_ROOM_BUTTON, PanelCommand::ToggleRoomHeaderPopup);
        }

        let show_date = self.config.show_date;
        let show_time = self.config.show_time;
        self.sink.set_bool(joins::visible::DATE_AND_TIME, show_date && show_time);
        self.sink.set_bool(joins::visible::DATE_ONLY, show_date && !show_time);
        self.sink.set_bool(joins::visible::TIME_ONLY, !show_date && show_time);

        self.sink.set_bool(joins::visible::TOP_BAR, true);
        self.sink.set_bool(joins::visible::ACTIVITY_FOOTER, true);

        // Privacy mute press doubles as its own feedback join
        self.bindings
            .bind_release(joins::press::VOLUME_SPEECH_MUTE, PanelCommand::PrivacyMuteToggle);
        let privacy_on = self.room.as_ref().is_some_and(|r| r.privacy_mode_on);
        self.sink.set_bool(joins::press::VOLUME_SPEECH_MUTE, privacy_on);

        if self.room.as_ref().is_some_and(|r| r.is_on) {
            self.sink.set_bool(joins::visible::TAP_TO_BEGIN, false);
            self.setup_footer_room_on();
        } else {
            self.sink.set_bool(joins::visible::START_PAGE, true);
            self.sink.set_bool(joins::visible::TAP_TO_BEGIN, true);
            self.setup_footer_room_off();
        }

        // Generic close for interlocked popup modals
        self.bindings
            .bind_release(joins::press::INTERLOCKED_MODAL_CLOSE, PanelCommand::ClosePopup);
        self.bindings
            .bind_release(joins::press::CALENDAR_HEADER_BUTTON, PanelCommand::ToggleScheduleList);

        // Volume related things
        self.bindings.bind_release(joins::press::VOLUME_DEFAULT, PanelCommand::VolumeDefault);
        self.sink.set_string(joins::text::VOLUME_SLIDER_LABEL, "Room");

        // Power related functions
        self.bindings
            .bind_release(joins::press::SHOW_POWER_OFF, PanelCommand::EndMeetingActivity);
        self.bindings
            .bind_release(joins::press::DISPLAY_POWER_TOGGLE, PanelCommand::DisplayPowerToggle);
        self.bindings.bind_release(joins::press::CALL_STOP_SHARING, PanelCommand::StopSharing);

        if self.room.as_ref().is_some_and(|r| r.has_schedule_source) {
            let now = self.clock.now();
            self.timers.start_repeating(TimerPurpose::MeetingPoll, now, MEETING_POLL_PERIOD);
        }

        self.visible = true;
    }

    /// Hide the whole panel surface and stop its timers.
    pub fn hide(&mut self) {
        self.sink.set_bool(joins::visible::TOP_BAR, false);
        self.sink.set_bool(joins::visible::ACTIVITY_FOOTER, false);
        self.sink.set_bool(joins::visible::START_PAGE, false);
        self.sink.set_bool(joins::visible::TAP_TO_BEGIN, false);
        self.sink.set_bool(joins::visible::SELECT_A_SOURCE, false);
        self.timers.stop(TimerPurpose::MeetingPoll);
        self.hide_meeting_popup();
        self.visible = false;
    }

    /// Enter call mode.
    ///
    /// Idempotent while the call surface is already up: nothing is
    /// re-hidden and no second warm-up fires.
    pub fn activity_call_pressed(&mut self) -> Vec<RoomAction> {
        if self.call_surface_visible {
            return Vec::new();
        }
        let Some(room) = &self.room else {
            return Vec::new();
        };
        let room_on = room.is_on;

        self.hide_logo();
        self.hide_meeting_popup();
        self.sink.set_bool(joins::visible::START_PAGE, false);
        self.sink.set_bool(joins::visible::SOURCE_STAGING_BAR, false);
        self.sink.set_bool(joins::visible::SELECT_A_SOURCE, false);
        self.pages.hide_current(&mut self.sink);

        let mut actions = Vec::new();
        if !room_on {
            actions.push(RoomAction::RunDefaultCallRoute);
        }
        self.mode = DisplayMode::Call;
        // Call mode filters non-sharable sources even before in-call flips
        self.rebuild_source_list();
        self.refresh_footer_feedback();
        self.sink.set_bool(joins::visible::CALL_SURFACE, true);
        self.call_surface_visible = true;
        actions
    }

    /// Share activity: stage the source list and surface the active
    /// source, powering the default present route when the room is off.
    pub fn activity_share_pressed(&mut self) -> Vec<RoomAction> {
        let Some(room) = &self.room else {
            return Vec::new();
        };
        let room_on = room.is_on;
        let current = room.current_source.clone();
        let has_default_present = room.has_default_present_route;

        self.hide_call_surface();
        self.hide_meeting_popup();
        self.sink.set_bool(joins::visible::START_PAGE, false);
        self.sink.set_bool(joins::visible::CALL_STAGING_BAR, false);
        self.sink.set_bool(joins::visible::SOURCE_STAGING_BAR, true);

        let mut actions = Vec::new();
        if !room_on {
            // Run default source when room is off and share is pressed;
            // with no default configured, prompt instead
            if has_default_present {
                actions.push(RoomAction::RunDefaultPresentRoute);
            } else {
                self.sink.set_bool(joins::visible::SELECT_A_SOURCE, true);
            }
        } else if current.is_none() || current == Some(SourceKey::codec_osd()) {
            self.sink.set_bool(joins::visible::SELECT_A_SOURCE, true);
        } else {
            self.show_current_source();
        }

        self.mode = DisplayMode::Presentation;
        // In-call and mode filtering both changed; rebuild under the new mode
        self.rebuild_source_list();
        self.refresh_footer_feedback();
        actions
    }

    /// Puts away modals and popups that might be up when a call comes in.
    pub fn prepare_for_incoming_call(&mut self) -> Vec<RoomAction> {
        let mut actions = Vec::new();
        if self.modal.is_visible() {
            self.modal.hide(&mut self.sink, &mut self.bindings);
            actions.push(RoomAction::CancelShutdown);
        }
        self.popup_interlock.hide(&mut self.sink);
        actions
    }

    /// Reveal the diagnostics page, putting away anything in the way.
    /// The page is built on first use and cached for the session.
    pub fn show_tech(&mut self) {
        self.popup_interlock.hide_and_clear(&mut self.sink);
        let tech = self.tech_page.get_or_insert_with(TechPage::default);
        tech.show(&mut self.sink);
    }

    /// Reveal a message on the notification ribbon.
    ///
    /// A non-zero `timeout` (milliseconds) auto-hides the ribbon,
    /// replacing any auto-hide pending for a previous notification.
    /// Zero keeps the message up until hidden explicitly.
    pub fn show_notification_ribbon(&mut self, message: &str, timeout: Millis) {
        self.sink.set_string(joins::text::NOTIFICATION_RIBBON, message);
        self.sink.set_bool(joins::visible::NOTIFICATION_RIBBON, true);
        if timeout > 0 {
            let now = self.clock.now();
            self.timers.start_oneshot(TimerPurpose::RibbonAutoHide, now, timeout);
        } else {
            self.timers.stop(TimerPurpose::RibbonAutoHide);
        }
    }

    /// Hide the notification ribbon and cancel its auto-hide.
    pub fn hide_notification_ribbon(&mut self) {
        self.sink.set_bool(joins::visible::NOTIFICATION_RIBBON, false);
        self.timers.stop(TimerPurpose::RibbonAutoHide);
    }

    /// Toggle the today's-meetings popup from the header calendar button.
    pub fn calendar_pressed(&mut self) {
        self.popup_interlock.show_with_toggle(&mut self.sink, joins::popup::MEETINGS_LIST_PAGE);
    }

    /// Reveal the active-calls list. Toggles only when it is already the
    /// current popup or when a call is active.
    pub fn show_active_calls_list(&mut self) {
        self.sink.set_bool(joins::visible::CALL_END_ALL_CONFIRM, true);
        let in_call = self.room.as_ref().is_some_and(|r| r.in_call);
        if self.popup_interlock.current() == Some(joins::popup::ACTIVE_CALLS_PAGE) || in_call {
            self.popup_interlock.show_with_toggle(&mut self.sink, joins::popup::ACTIVE_CALLS_PAGE);
        }
    }

    /// Whether volume ramping shows the gauge popup.
    pub fn set_show_volume_gauge(&mut self, show: bool) {
        self.show_volume_gauge = show;
    }

    /// Current display mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Whether the panel surface is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the full-surface call UI is up.
    pub fn call_surface_visible(&self) -> bool {
        self.call_surface_visible
    }

    /// The bound room mirror. `None` before the first bind.
    pub fn room(&self) -> Option<&RoomSnapshot> {
        self.room.as_ref()
    }

    /// The owned signal sink, for inspection.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn handle_press(&mut self, target: PressTarget, pressed: bool) -> Vec<RoomAction> {
        let command = match target {
            PressTarget::Join(join) => self.bindings.resolve(join, pressed),
            PressTarget::Row { list, slot } => {
                // Row commands fire on the release transition only
                if pressed { None } else { self.row_command(list, slot) }
            },
        };
        match command {
            Some(command) => self.run_command(command, pressed),
            None => Vec::new(),
        }
    }

    fn row_command(&self, list: paneldeck_core::ListJoin, slot: u16) -> Option<PanelCommand> {
        if list == self.footer_list.join() {
            self.footer_list.command_at(slot)
        } else if list == self.source_list.join() {
            self.source_list.command_at(slot)
        } else if list == self.meetings_list.join() {
            self.meetings_list.command_at(slot)
        } else {
            None
        }
    }

    fn handle_slider(&mut self, join: paneldeck_core::NumericJoin, value: u16) -> Vec<RoomAction> {
        if join == joins::level::VOLUME_SLIDER && self.volume_slider_wired {
            vec![RoomAction::SetVolume { level: value }]
        } else {
            Vec::new()
        }
    }

    fn run_command(&mut self, command: PanelCommand, pressed: bool) -> Vec<RoomAction> {
        match command {
            PanelCommand::ShareActivity => self.activity_share_pressed(),
            PanelCommand::CallActivity => self.activity_call_pressed(),
            PanelCommand::EndMeetingActivity => self.end_meeting_pressed(),
            PanelCommand::SelectSource(key) => self.select_source(key),
            PanelCommand::JoinMeeting(id) => self.join_meeting_from_popup(id),
            PanelCommand::JoinMeetingFromSchedule(id) => self.join_meeting_from_schedule(id),
            PanelCommand::DismissMeetingPopup => {
                self.dismiss_meeting_popup();
                Vec::new()
            },
            PanelCommand::ShowScheduleList => {
                self.show_schedule_list();
                Vec::new()
            },
            PanelCommand::ToggleScheduleList => {
                self.calendar_pressed();
                Vec::new()
            },
            PanelCommand::ToggleRoomHeaderPopup => {
                self.popup_interlock
                    .show_with_toggle(&mut self.sink, joins::popup::ROOM_HEADER_PAGE);
                Vec::new()
            },
            PanelCommand::ClosePopup => {
                self.popup_interlock.hide_and_clear(&mut self.sink);
                Vec::new()
            },
            PanelCommand::ModalButton(button) => self.modal_button_pressed(button),
            PanelCommand::VolumeUp => self.volume_ramp(true, pressed),
            PanelCommand::VolumeDown => self.volume_ramp(false, pressed),
            PanelCommand::VolumeMuteToggle => vec![RoomAction::MuteToggle],
            PanelCommand::PrivacyMuteToggle => vec![RoomAction::PrivacyModeToggle],
            PanelCommand::VolumeDefault => vec![RoomAction::SetDefaultVolumeLevels],
            PanelCommand::DisplayPowerToggle => {
                if self.room.as_ref().is_some_and(|r| r.default_display_has_power) {
                    vec![RoomAction::DisplayPowerToggle]
                } else {
                    Vec::new()
                }
            },
            PanelCommand::StopSharing => {
                vec![RoomAction::RunRoute { key: SourceKey::codec_osd() }]
            },
            PanelCommand::Device { device, button } => {
                vec![RoomAction::DeviceButton { device, button, pressed }]
            },
        }
    }

    fn pump_timers(&mut self) -> Vec<RoomAction> {
        let now = self.clock.now();
        let fired = self.timers.tick(now);
        let mut actions = Vec::new();
        for purpose in fired {
            match purpose {
                TimerPurpose::MeetingPoll => actions.extend(self.meeting_poll()),
                TimerPurpose::RibbonAutoHide => {
                    self.sink.set_bool(joins::visible::NOTIFICATION_RIBBON, false);
                },
            }
        }
        actions
    }

    fn volume_ramp(&mut self, up: bool, pressed: bool) -> Vec<RoomAction> {
        if self.room.as_ref().and_then(|r| r.volume).is_none() {
            return Vec::new();
        }
        if self.show_volume_gauge {
            self.sink.set_bool(joins::visible::VOLUME_GAUGE_POPUP, pressed);
        }
        if up {
            vec![RoomAction::VolumeUp { pressed }]
        } else {
            vec![RoomAction::VolumeDown { pressed }]
        }
    }

    fn hide_call_surface(&mut self) {
        if self.call_surface_visible {
            self.sink.set_bool(joins::visible::CALL_SURFACE, false);
            self.call_surface_visible = false;
        }
    }

    fn show_logo(&mut self) {
        let logo_url = self.room.as_ref().and_then(|r| r.logo_url.clone());
        match logo_url {
            None => {
                self.sink.set_bool(joins::visible::LOGO_DEFAULT, true);
                self.sink.set_bool(joins::visible::LOGO_URL, false);
            },
            Some(url) => {
                self.sink.set_bool(joins::visible::LOGO_DEFAULT, false);
                self.sink.set_bool(joins::visible::LOGO_URL, true);
                self.sink.set_string(joins::text::LOGO_URL, &url);
            },
        }
    }

    fn hide_logo(&mut self) {
        self.sink.set_bool(joins::visible::LOGO_DEFAULT, false);
        self.sink.set_bool(joins::visible::LOGO_URL, false);
    }

    /// Footer for the room-off configuration: Share and Call.
    fn setup_footer_room_off(&mut self) {
        self.footer_list.clear(&mut self.sink);
        self.footer_list.add_item(
            &mut self.sink,
            ListRow::pressable(PanelCommand::ShareActivity).with_string(1, "Share"),
        );
        self.footer_list.add_item(
            &mut self.sink,
            ListRow::pressable(PanelCommand::CallActivity).with_string(1, "Call"),
        );
        self.footer_list.set_count(&mut self.sink, 2);
        self.sink.set_numeric(joins::level::PRESENTATION_CARET, 1);
        self.sink.set_numeric(joins::level::CALL_CARET, 5);
    }

    /// Footer for the room-on configuration: Share, Call, End Meeting.
    fn setup_footer_room_on(&mut self) {
        self.footer_list.clear(&mut self.sink);
        self.footer_list.add_item(
            &mut self.sink,
            ListRow::pressable(PanelCommand::ShareActivity).with_string(1, "Share"),
        );
        self.footer_list.add_item(
            &mut self.sink,
            ListRow::pressable(PanelCommand::CallActivity).with_string(1, "Call"),
        );
        self.footer_list.add_item(
            &mut self.sink,
            ListRow::pressable(PanelCommand::EndMeetingActivity).with_string(1, "End Meeting"),
        );
        self.footer_list.set_count(&mut self.sink, 3);
        self.sink.set_numeric(joins::level::PRESENTATION_CARET, 2);
        self.sink.set_numeric(joins::level::CALL_CARET, 0);
    }

    /// Single point for the activity button active-state feedback.
    fn refresh_footer_feedback(&mut self) {
        let in_shutdown = self.room.as_ref().is_some_and(|r| r.shutdown.is_running);
        let share = self.mode == DisplayMode::Presentation && !in_shutdown;
        let call = self.mode == DisplayMode::Call && !in_shutdown;
        self.footer_list.set_row_bool(&mut self.sink, 0, 1, share);
        self.footer_list.set_row_bool(&mut self.sink, 1, 1, call);
        self.footer_list.set_row_bool(&mut self.sink, 2, 1, in_shutdown);
    }

    /// End-meeting press. Rejected silently while the room is off or a
    /// countdown is already running.
    fn end_meeting_pressed(&mut self) -> Vec<RoomAction> {
        let Some(room) = &self.room else {
            return Vec::new();
        };
        if !room.is_on || room.shutdown.is_running {
            debug!("end meeting ignored, room off or countdown already running");
            return Vec::new();
        }
        vec![RoomAction::StartShutdown { kind: paneldeck_core::ShutdownKind::Manual }]
    }
}
