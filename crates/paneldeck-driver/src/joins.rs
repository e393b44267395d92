//! Declarative join tables for the panel surface.
//!
//! One place owns the numbering; orchestration logic only ever speaks in
//! these names. The numbers here are the panel project's defaults — the
//! signal transport is free to remap them, which is why nothing outside
//! this module carries a literal join id.

use paneldeck_core::{BoolJoin, ListJoin, NumericJoin, StringJoin};

/// Visibility flags for panel chrome and staged regions.
pub mod visible {
    use super::BoolJoin;

    /// Dynamic top bar.
    pub const TOP_BAR: BoolJoin = BoolJoin(1201);
    /// Activity footer strip.
    pub const ACTIVITY_FOOTER: BoolJoin = BoolJoin(1202);
    /// Start page shown while the room is off.
    pub const START_PAGE: BoolJoin = BoolJoin(1203);
    /// "Tap to begin" prompt on the start page.
    pub const TAP_TO_BEGIN: BoolJoin = BoolJoin(1204);
    /// "Select a source" prompt.
    pub const SELECT_A_SOURCE: BoolJoin = BoolJoin(1205);
    /// Source staging bar above the footer.
    pub const SOURCE_STAGING_BAR: BoolJoin = BoolJoin(1206);
    /// Call staging bar above the footer.
    pub const CALL_STAGING_BAR: BoolJoin = BoolJoin(1207);
    /// Built-in default logo.
    pub const LOGO_DEFAULT: BoolJoin = BoolJoin(1208);
    /// Configured logo image.
    pub const LOGO_URL: BoolJoin = BoolJoin(1209);
    /// Date and time together in the top bar.
    pub const DATE_AND_TIME: BoolJoin = BoolJoin(1210);
    /// Date only.
    pub const DATE_ONLY: BoolJoin = BoolJoin(1211);
    /// Time only.
    pub const TIME_ONLY: BoolJoin = BoolJoin(1212);
    /// Room-is-on indicator.
    pub const ROOM_IS_ON: BoolJoin = BoolJoin(1213);
    /// Volume mute/level control cluster.
    pub const VOLUME_CONTROLS: BoolJoin = BoolJoin(1214);
    /// Transient volume gauge popup shown while ramping.
    pub const VOLUME_GAUGE_POPUP: BoolJoin = BoolJoin(1215);
    /// Notification ribbon.
    pub const NOTIFICATION_RIBBON: BoolJoin = BoolJoin(1216);
    /// Full-surface call UI.
    pub const CALL_SURFACE: BoolJoin = BoolJoin(1217);
    /// Diagnostics/tech page.
    pub const TECH_PAGE: BoolJoin = BoolJoin(1218);
    /// Shared-source info block on the active-calls list.
    pub const CALL_SHARED_SOURCE_INFO: BoolJoin = BoolJoin(1219);
    /// End-all-calls confirmation block.
    pub const CALL_END_ALL_CONFIRM: BoolJoin = BoolJoin(1220);
    /// Upcoming-meeting popup modal.
    pub const NEXT_MEETING_MODAL: BoolJoin = BoolJoin(1221);
}

/// Popup regions managed by the popup interlock.
pub mod popup {
    use super::BoolJoin;

    /// Room header page.
    pub const ROOM_HEADER_PAGE: BoolJoin = BoolJoin(1301);
    /// Today's-meetings list modal.
    pub const MEETINGS_LIST_PAGE: BoolJoin = BoolJoin(1302);
    /// Active-calls list.
    pub const ACTIVE_CALLS_PAGE: BoolJoin = BoolJoin(1303);
}

/// Two-button modal dialog surface.
pub mod modal {
    use super::{BoolJoin, NumericJoin, StringJoin};

    /// Modal visible.
    pub const VISIBLE: BoolJoin = BoolJoin(1401);
    /// First (left) button press.
    pub const BUTTON_1: BoolJoin = BoolJoin(1402);
    /// Second (right) button press.
    pub const BUTTON_2: BoolJoin = BoolJoin(1403);
    /// Title text.
    pub const TITLE: StringJoin = StringJoin(1931);
    /// Message body text.
    pub const MESSAGE: StringJoin = StringJoin(1932);
    /// Icon key.
    pub const ICON: StringJoin = StringJoin(1933);
    /// First button label.
    pub const BUTTON_1_LABEL: StringJoin = StringJoin(1934);
    /// Second button label.
    pub const BUTTON_2_LABEL: StringJoin = StringJoin(1935);
    /// Countdown gauge, 0-65535.
    pub const TIMER_GAUGE: NumericJoin = NumericJoin(502);
}

/// Press joins for panel-owned buttons.
pub mod press {
    use super::BoolJoin;

    /// Header room button.
    pub const HEADER_ROOM_BUTTON: BoolJoin = BoolJoin(2801);
    /// Generic close for interlocked popup modals.
    pub const INTERLOCKED_MODAL_CLOSE: BoolJoin = BoolJoin(2802);
    /// Power-off / end-meeting header button.
    pub const SHOW_POWER_OFF: BoolJoin = BoolJoin(2803);
    /// Default display power toggle.
    pub const DISPLAY_POWER_TOGGLE: BoolJoin = BoolJoin(2804);
    /// Volume ramp up. Carries press state.
    pub const VOLUME_UP: BoolJoin = BoolJoin(2805);
    /// Volume ramp down. Carries press state.
    pub const VOLUME_DOWN: BoolJoin = BoolJoin(2806);
    /// Program mute toggle; doubles as mute feedback.
    pub const VOLUME_PROGRAM_MUTE: BoolJoin = BoolJoin(2807);
    /// Privacy (speech) mute toggle; doubles as feedback.
    pub const VOLUME_SPEECH_MUTE: BoolJoin = BoolJoin(2808);
    /// Restore default volume levels.
    pub const VOLUME_DEFAULT: BoolJoin = BoolJoin(2809);
    /// Join button on the upcoming-meeting popup.
    pub const NEXT_MEETING_JOIN: BoolJoin = BoolJoin(2810);
    /// Close/dismiss button on the upcoming-meeting popup.
    pub const NEXT_MEETING_CLOSE: BoolJoin = BoolJoin(2811);
    /// Show-schedule button on the upcoming-meeting popup.
    pub const NEXT_MEETING_SHOW_SCHEDULE: BoolJoin = BoolJoin(2812);
    /// Header calendar button.
    pub const CALENDAR_HEADER_BUTTON: BoolJoin = BoolJoin(2813);
    /// Stop-sharing button on the call surface.
    pub const CALL_STOP_SHARING: BoolJoin = BoolJoin(2814);
}

/// Press joins contributed by device capability surfaces.
pub mod device {
    use super::BoolJoin;

    /// Device power toggle.
    pub const POWER_TOGGLE: BoolJoin = BoolJoin(3101);
    /// Channel up.
    pub const CHANNEL_UP: BoolJoin = BoolJoin(3102);
    /// Channel down.
    pub const CHANNEL_DOWN: BoolJoin = BoolJoin(3103);
    /// Last channel.
    pub const LAST_CHANNEL: BoolJoin = BoolJoin(3104);
    /// Red color key.
    pub const RED: BoolJoin = BoolJoin(3105);
    /// Green color key.
    pub const GREEN: BoolJoin = BoolJoin(3106);
    /// Yellow color key.
    pub const YELLOW: BoolJoin = BoolJoin(3107);
    /// Blue color key.
    pub const BLUE: BoolJoin = BoolJoin(3108);
    /// D-pad up.
    pub const DPAD_UP: BoolJoin = BoolJoin(3111);
    /// D-pad down.
    pub const DPAD_DOWN: BoolJoin = BoolJoin(3112);
    /// D-pad left.
    pub const DPAD_LEFT: BoolJoin = BoolJoin(3113);
    /// D-pad right.
    pub const DPAD_RIGHT: BoolJoin = BoolJoin(3114);
    /// D-pad select.
    pub const DPAD_SELECT: BoolJoin = BoolJoin(3115);
    /// Menu.
    pub const MENU: BoolJoin = BoolJoin(3116);
    /// Exit.
    pub const EXIT: BoolJoin = BoolJoin(3117);
    /// Program guide.
    pub const GUIDE: BoolJoin = BoolJoin(3118);
    /// DVR recordings list.
    pub const DVR_LIST: BoolJoin = BoolJoin(3121);
    /// Record.
    pub const RECORD: BoolJoin = BoolJoin(3122);
    /// Keypad digits 0-9 occupy a contiguous block starting here.
    pub const DIGIT_BASE: BoolJoin = BoolJoin(3131);
    /// Keypad dash.
    pub const DIGIT_DASH: BoolJoin = BoolJoin(3141);
    /// Keypad enter.
    pub const KEYPAD_ENTER: BoolJoin = BoolJoin(3142);
    /// Play.
    pub const PLAY: BoolJoin = BoolJoin(3151);
    /// Pause.
    pub const PAUSE: BoolJoin = BoolJoin(3152);
    /// Stop.
    pub const STOP: BoolJoin = BoolJoin(3153);
    /// Scan backward.
    pub const REWIND: BoolJoin = BoolJoin(3154);
    /// Scan forward.
    pub const FAST_FORWARD: BoolJoin = BoolJoin(3155);
    /// Previous chapter.
    pub const CHAPTER_MINUS: BoolJoin = BoolJoin(3156);
    /// Next chapter.
    pub const CHAPTER_PLUS: BoolJoin = BoolJoin(3157);
}

/// Page manager surfaces, one visibility join per manager flavor.
pub mod page {
    use super::BoolJoin;

    /// Three-panel set-top-box control surface.
    pub const SET_TOP_BOX: BoolJoin = BoolJoin(1501);
    /// Medium disc-player control surface.
    pub const DISC_PLAYER: BoolJoin = BoolJoin(1502);
    /// Generic default control surface.
    pub const DEFAULT: BoolJoin = BoolJoin(1503);
}

/// String value joins.
pub mod text {
    use super::StringJoin;

    /// Current room name in the header.
    pub const CURRENT_ROOM_NAME: StringJoin = StringJoin(1901);
    /// Logo image URL.
    pub const LOGO_URL: StringJoin = StringJoin(1902);
    /// Notification ribbon message.
    pub const NOTIFICATION_RIBBON: StringJoin = StringJoin(1903);
    /// Current source name.
    pub const CURRENT_SOURCE_NAME: StringJoin = StringJoin(1904);
    /// Current source icon key.
    pub const CURRENT_SOURCE_ICON: StringJoin = StringJoin(1905);
    /// Label above the room volume slider.
    pub const VOLUME_SLIDER_LABEL: StringJoin = StringJoin(1906);
    /// Upcoming-meeting popup: start time.
    pub const NEXT_MEETING_START: StringJoin = StringJoin(1911);
    /// Upcoming-meeting popup: end time.
    pub const NEXT_MEETING_END: StringJoin = StringJoin(1912);
    /// Upcoming-meeting popup: title.
    pub const NEXT_MEETING_TITLE: StringJoin = StringJoin(1913);
    /// Upcoming-meeting popup: organizer.
    pub const NEXT_MEETING_ORGANIZER: StringJoin = StringJoin(1914);
    /// Upcoming-meeting popup: primary button label.
    pub const NEXT_MEETING_BUTTON_LABEL: StringJoin = StringJoin(1915);
    /// Upcoming-meeting popup: secondary button label.
    pub const NEXT_MEETING_SECONDARY_LABEL: StringJoin = StringJoin(1916);
    /// Upcoming-meeting popup: following-meeting hint.
    pub const NEXT_MEETING_FOLLOWING: StringJoin = StringJoin(1917);
    /// Meetings list modal title.
    pub const MEETINGS_LIST_TITLE: StringJoin = StringJoin(1921);
    /// Meetings list modal icon key.
    pub const MEETINGS_LIST_ICON: StringJoin = StringJoin(1922);
    /// Shared-source name on the active-calls list.
    pub const CALL_SHARED_SOURCE_NAME: StringJoin = StringJoin(1923);
}

/// Numeric value joins.
pub mod level {
    use super::NumericJoin;

    /// Room volume slider, 0-65535.
    pub const VOLUME_SLIDER: NumericJoin = NumericJoin(501);
    /// Caret position under the presentation staging bar.
    pub const PRESENTATION_CARET: NumericJoin = NumericJoin(503);
    /// Caret position under the call staging bar.
    pub const CALL_CARET: NumericJoin = NumericJoin(504);
}

/// List regions with indexed row sub-regions.
pub mod list {
    use super::ListJoin;

    /// Source staging list.
    pub const SOURCE_STAGING: ListJoin = ListJoin(3200);
    /// Activity footer list.
    pub const ACTIVITY_FOOTER: ListJoin = ListJoin(15022);
    /// Today's-meetings modal list.
    pub const MEETINGS: ListJoin = ListJoin(3300);
}
