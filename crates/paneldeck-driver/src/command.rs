//! Button command vocabulary.
//!
//! Every wired button resolves to one of these values. Bindings and list
//! rows carry commands, not closures, so clearing a binding detaches the
//! behavior by construction — nothing can fire after removal.

use paneldeck_core::{DeviceButton, DeviceId, MeetingId, SourceKey};

/// What a wired button does when it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelCommand {
    /// Share activity (footer).
    ShareActivity,
    /// Call activity (footer).
    CallActivity,
    /// End meeting (footer and header power button).
    EndMeetingActivity,
    /// Route a source catalog entry.
    SelectSource(SourceKey),
    /// Join a meeting from the upcoming-meeting popup.
    JoinMeeting(MeetingId),
    /// Join a meeting from the schedule list modal.
    JoinMeetingFromSchedule(MeetingId),
    /// Dismiss the upcoming-meeting popup.
    DismissMeetingPopup,
    /// Open the schedule list from the popup's secondary button.
    ShowScheduleList,
    /// Toggle the schedule list from the header calendar button.
    ToggleScheduleList,
    /// Toggle the room header popup.
    ToggleRoomHeaderPopup,
    /// Close whatever interlocked popup is up.
    ClosePopup,
    /// Modal dialog button by position (1-based).
    ModalButton(u8),
    /// Volume ramp up. Dispatched with press state.
    VolumeUp,
    /// Volume ramp down. Dispatched with press state.
    VolumeDown,
    /// Toggle program mute.
    VolumeMuteToggle,
    /// Toggle privacy (speech) mute.
    PrivacyMuteToggle,
    /// Restore default volume levels.
    VolumeDefault,
    /// Toggle power on the room's default display.
    DisplayPowerToggle,
    /// Stop sharing content; lands the route on the codec OSD.
    StopSharing,
    /// Capability button forwarded to a source device.
    Device {
        /// Target device.
        device: DeviceId,
        /// Which button.
        button: DeviceButton,
    },
}
