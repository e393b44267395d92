//! Meeting polling, the upcoming-meeting popup, and the schedule list.

use paneldeck_core::{Clock, Meeting, MeetingId, RoomAction, SignalSink};

use crate::{
    avdriver::AvPanelDriver,
    command::PanelCommand,
    joins,
    list::ListRow,
};

impl<S: SignalSink, C: Clock> AvPanelDriver<S, C> {
    /// Periodic schedule refresh: re-render the schedule list, then
    /// evaluate whether the upcoming-meeting popup should change.
    pub(super) fn meeting_poll(&mut self) -> Vec<RoomAction> {
        if self.room.is_none() {
            return Vec::new();
        }
        self.refresh_meetings_list();
        self.evaluate_meeting_popup();
        Vec::new()
    }

    /// Decide what the upcoming-meeting popup shows.
    ///
    /// The nearest joinable meeting is the last list entry still inside
    /// its join window (the list arrives ordered by start time). A
    /// meeting the user already dismissed while the room was on is not
    /// re-offered; an off-room dismissal never suppresses, so the prompt
    /// can pester again once someone is in the room.
    pub(super) fn evaluate_meeting_popup(&mut self) {
        let Some(room) = &self.room else {
            return;
        };
        let room_on = room.is_on;
        let meetings = room.meetings.clone();
        if meetings.is_empty() {
            self.hide_meeting_popup();
            return;
        }

        let nearest = meetings.iter().filter(|meeting| meeting.joinable).next_back().cloned();
        let dismissed = self
            .last_dismissed_meeting
            .as_ref()
            .and_then(|id| meetings.iter().find(|meeting| &meeting.id == id))
            .map(|meeting| meeting.id.clone());

        if room_on && dismissed == nearest.as_ref().map(|meeting| meeting.id.clone()) {
            return;
        }
        self.last_dismissed_meeting = None;

        match nearest {
            // Out of joinable meetings: take the popup down
            None => self.hide_meeting_popup(),
            Some(meeting) => self.show_meeting_popup(&meetings, &meeting),
        }
    }

    fn show_meeting_popup(&mut self, meetings: &[Meeting], meeting: &Meeting) {
        self.sink.set_string(joins::text::MEETINGS_LIST_TITLE, "Upcoming meeting");
        self.sink.set_string(joins::text::NEXT_MEETING_START, &meeting.starts_at);
        self.sink.set_string(joins::text::NEXT_MEETING_END, &meeting.ends_at);
        self.sink.set_string(joins::text::NEXT_MEETING_TITLE, &meeting.title);
        self.sink.set_string(joins::text::NEXT_MEETING_ORGANIZER, &meeting.organizer);
        self.sink.set_string(joins::text::NEXT_MEETING_BUTTON_LABEL, "Join");
        self.sink.set_string(joins::text::NEXT_MEETING_SECONDARY_LABEL, "Show Schedule");

        let following = meetings
            .iter()
            .position(|m| m.id == meeting.id)
            .and_then(|index| meetings.get(index + 1))
            .map_or_else(|| "No more meetings today".to_string(), |next| next.starts_at.clone());
        self.sink.set_string(joins::text::NEXT_MEETING_FOLLOWING, &following);

        self.bindings.bind_release(
            joins::press::NEXT_MEETING_JOIN,
            PanelCommand::JoinMeeting(meeting.id.clone()),
        );
        self.bindings
            .bind_release(joins::press::NEXT_MEETING_CLOSE, PanelCommand::DismissMeetingPopup);
        self.bindings
            .bind_release(joins::press::NEXT_MEETING_SHOW_SCHEDULE, PanelCommand::ShowScheduleList);

        self.popup_meeting = Some(meeting.id.clone());
        self.sink.set_bool(joins::visible::NEXT_MEETING_MODAL, true);
    }

    pub(super) fn hide_meeting_popup(&mut self) {
        self.sink.set_bool(joins::visible::NEXT_MEETING_MODAL, false);
    }

    /// Explicit dismissal. Recorded only while the room is on, so an
    /// off-room dismiss does not suppress the next on-room prompt.
    pub(super) fn dismiss_meeting_popup(&mut self) {
        if self.room.as_ref().is_some_and(|room| room.is_on) {
            self.last_dismissed_meeting = self.popup_meeting.clone();
        }
        self.hide_meeting_popup();
    }

    /// Join from the upcoming-meeting popup.
    pub(super) fn join_meeting_from_popup(&mut self, meeting: MeetingId) -> Vec<RoomAction> {
        self.hide_meeting_popup();
        self.popup_interlock.hide(&mut self.sink);
        self.warm_then_dial(meeting)
    }

    /// Join from a schedule list row: raise the call surface first, then
    /// dial (warming the room if needed).
    pub(super) fn join_meeting_from_schedule(&mut self, meeting: MeetingId) -> Vec<RoomAction> {
        self.popup_interlock.hide(&mut self.sink);
        let mut actions = self.activity_call_pressed();
        actions.extend(self.warm_then_dial(meeting));
        actions
    }

    /// Dial a meeting after turning the room on if necessary.
    ///
    /// Room on: dial now. Room off: park the meeting in the pending-dial
    /// slot, enter the call activity (which runs the default call
    /// route), and let warm-up completion release the dial. The id is
    /// recorded as dismissed either way so the popup stops prompting for
    /// a call already joined.
    pub(super) fn warm_then_dial(&mut self, meeting: MeetingId) -> Vec<RoomAction> {
        let Some(room) = &self.room else {
            return Vec::new();
        };
        if room.is_on {
            self.last_dismissed_meeting = Some(meeting.clone());
            return vec![RoomAction::Dial { meeting }];
        }
        self.pending_dial = Some(meeting);
        self.activity_call_pressed()
    }

    /// Re-render the today's-meetings modal list.
    pub(super) fn refresh_meetings_list(&mut self) {
        let Some(room) = &self.room else {
            return;
        };
        let meetings = room.meetings.clone();

        self.sink.set_string(joins::text::MEETINGS_LIST_ICON, "Calendar");
        self.sink.set_string(joins::text::MEETINGS_LIST_TITLE, "Today's Meetings");

        self.meetings_list.clear(&mut self.sink);
        for meeting in &meetings {
            let row = ListRow::pressable(PanelCommand::JoinMeetingFromSchedule(meeting.id.clone()))
                .with_string(1, meeting.starts_at.clone())
                .with_string(2, meeting.ends_at.clone())
                .with_string(3, meeting.title.clone())
                .with_string(4, meeting.organizer.clone())
                .with_string(5, "Join")
                .with_bool(2, meeting.joinable);
            self.meetings_list.add_item(&mut self.sink, row);
        }

        if meetings.is_empty() {
            // One display-only row so the modal does not render blank
            let row = ListRow::default()
                .with_string(3, "No meetings are booked for the remainder of the day.");
            self.meetings_list.add_item(&mut self.sink, row);
            self.meetings_list.set_count(&mut self.sink, 1);
        } else {
            self.meetings_list.set_count(&mut self.sink, meetings.len() as u16);
        }
    }

    /// Open the schedule list from the popup's secondary button.
    pub(super) fn show_schedule_list(&mut self) {
        self.hide_meeting_popup();
        self.refresh_meetings_list();
        self.popup_interlock.show(&mut self.sink, joins::popup::MEETINGS_LIST_PAGE);
    }
}
