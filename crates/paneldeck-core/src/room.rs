//! Room feedback and action contract.
//!
//! The room is an external collaborator: it owns power, call, routing,
//! volume, shutdown, and schedule state. The panel consumes that state two
//! ways — an initial [`RoomSnapshot`] painted at bind time, and a serial
//! stream of [`RoomEvent`] feedback afterwards — and influences it only
//! through [`RoomAction`] values executed by the embedding runtime.
//!
//! Changes that swap an attached resource (current source, current volume
//! device) arrive twice, tagged with an explicit [`ChangePhase`], so one
//! handler can tear down old wiring before the replacement lands.

use serde::{Deserialize, Serialize};

use crate::{
    device::{DeviceButton, DeviceId},
    meeting::{Meeting, MeetingId},
    source::{SourceEntry, SourceKey},
};

/// Phase tag for two-phase resource-change events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangePhase {
    /// The old resource is still attached; detach wiring now.
    WillChange,
    /// The new resource is attached; rewire now.
    DidChange,
}

/// How a shutdown was initiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShutdownKind {
    /// User pressed the end-meeting control.
    Manual,
    /// Room vacancy detection.
    Vacancy,
    /// Initiated outside the panel (no prompt modal raised).
    External,
}

/// State of the room's shutdown prompt timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShutdownPromptState {
    /// Kind of the in-flight or last-started shutdown. `None` when idle.
    pub kind: Option<ShutdownKind>,
    /// Configured countdown length in seconds.
    pub prompt_seconds: u16,
    /// Whether the countdown is currently running.
    pub is_running: bool,
}

/// Observable state of the room's current volume-control device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeDeviceState {
    /// Whether the device reports level/mute feedback.
    pub has_feedback: bool,
    /// Current level, 0-65535 scale. Meaningless without feedback.
    pub level: u16,
    /// Current mute state. Meaningless without feedback.
    pub muted: bool,
}

/// Feedback topics the panel can attach to.
///
/// Attach/detach is topic-granular so short-lived interests (the shutdown
/// modal's live countdown feed) can come and go without touching the
/// session-long set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoomTopic {
    /// Room on/off.
    Power,
    /// Warm-up in progress.
    Warming,
    /// Cool-down in progress.
    Cooling,
    /// Call active.
    InCall,
    /// Codec content sharing active.
    SharingContent,
    /// Privacy mute.
    PrivacyMode,
    /// Current source swap (two-phase).
    SourceChange,
    /// Current volume device swap (two-phase).
    VolumeDeviceChange,
    /// Volume level echo.
    VolumeLevel,
    /// Mute echo.
    Mute,
    /// Shutdown prompt started/finished/cancelled.
    ShutdownPrompt,
    /// Live countdown feed for the shutdown prompt. Modal-scoped.
    ShutdownTick,
    /// Meeting list replaced.
    Schedule,
    /// Room configuration replaced.
    Config,
}

impl RoomTopic {
    /// The session-long set attached at room bind time.
    ///
    /// [`RoomTopic::ShutdownTick`] is deliberately absent: it is attached
    /// while the countdown modal is up and detached on every terminal
    /// transition.
    pub const BASE: [Self; 13] = [
        Self::Power,
        Self::Warming,
        Self::Cooling,
        Self::InCall,
        Self::SharingContent,
        Self::PrivacyMode,
        Self::SourceChange,
        Self::VolumeDeviceChange,
        Self::VolumeLevel,
        Self::Mute,
        Self::ShutdownPrompt,
        Self::Schedule,
        Self::Config,
    ];
}

/// Feedback delivered serially from the bound room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomEvent {
    /// Room turned on or off.
    PowerChanged(bool),
    /// Warm-up started or completed.
    WarmingChanged(bool),
    /// Cool-down started or completed.
    CoolingChanged(bool),
    /// Call became active or ended.
    InCallChanged(bool),
    /// Codec content sharing started or stopped.
    SharingContentChanged(bool),
    /// Privacy mute toggled.
    PrivacyModeChanged(bool),
    /// Current source is being swapped.
    SourceChanged {
        /// Detach-then-rewire phase tag.
        phase: ChangePhase,
        /// Source before the swap. `None` when nothing was routed.
        previous: Option<SourceKey>,
        /// Source after the swap. `None` when the route was cleared.
        current: Option<SourceKey>,
    },
    /// Current volume-control device is being swapped.
    VolumeDeviceChanged {
        /// Detach-then-rewire phase tag.
        phase: ChangePhase,
        /// Device state before the swap.
        previous: Option<VolumeDeviceState>,
        /// Device state after the swap.
        current: Option<VolumeDeviceState>,
    },
    /// Volume level echo from the current device.
    VolumeLevelChanged(u16),
    /// Mute echo from the current device.
    MuteChanged(bool),
    /// Shutdown countdown started.
    ShutdownStarted {
        /// How the shutdown was initiated.
        kind: ShutdownKind,
        /// Countdown length in seconds.
        seconds: u16,
    },
    /// Countdown ran to completion; the room is powering off.
    ShutdownFinished,
    /// Countdown was cancelled; the room stays on.
    ShutdownCancelled,
    /// Live countdown feed. Delivered only while the tick topic is attached.
    ShutdownTick {
        /// Whole seconds remaining.
        seconds_remaining: u16,
        /// Percent of the countdown remaining, 0-100.
        percent_remaining: u16,
    },
    /// The schedule source replaced today's meeting list.
    ScheduleChanged(Vec<Meeting>),
    /// Room configuration changed; carries a fresh snapshot to re-sync from.
    ConfigChanged(Box<RoomSnapshot>),
}

/// Instructions for the embedding runtime to execute against the room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomAction {
    /// Attach a feedback topic on the bound room.
    Attach {
        /// Topic to attach.
        topic: RoomTopic,
    },
    /// Detach a feedback topic from the previously bound room.
    Detach {
        /// Topic to detach.
        topic: RoomTopic,
    },
    /// Run the routing action for a catalog key.
    RunRoute {
        /// Route key from the source catalog.
        key: SourceKey,
    },
    /// Run the room's configured default presentation route.
    RunDefaultPresentRoute,
    /// Run the room's default call route, warming the room if needed.
    RunDefaultCallRoute,
    /// Begin a shutdown countdown.
    StartShutdown {
        /// How the shutdown is being initiated.
        kind: ShutdownKind,
    },
    /// Cancel the running shutdown countdown.
    CancelShutdown,
    /// Skip the countdown and finish the shutdown immediately.
    FinishShutdown,
    /// Dial into a meeting.
    Dial {
        /// Meeting to join.
        meeting: MeetingId,
    },
    /// Volume ramp up. Carries press state for ramping hardware.
    VolumeUp {
        /// True on press, false on release.
        pressed: bool,
    },
    /// Volume ramp down. Carries press state for ramping hardware.
    VolumeDown {
        /// True on press, false on release.
        pressed: bool,
    },
    /// Toggle program mute on the current volume device.
    MuteToggle,
    /// Set an absolute level on the current volume device.
    SetVolume {
        /// Level, 0-65535 scale.
        level: u16,
    },
    /// Restore the room's configured default levels.
    SetDefaultVolumeLevels,
    /// Toggle privacy mute.
    PrivacyModeToggle,
    /// Toggle power on the room's default display.
    DisplayPowerToggle,
    /// Forward a capability button to a source device driver.
    DeviceButton {
        /// Target device.
        device: DeviceId,
        /// Which button.
        button: DeviceButton,
        /// True on press, false on release.
        pressed: bool,
    },
}

/// Complete observable room state, painted at bind time.
///
/// The panel mirrors this and keeps the mirror current from events; visual
/// elements are re-synced from mirror values immediately on bind rather
/// than waiting for the next change event.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoomSnapshot {
    /// Room display name.
    pub name: String,
    /// Logo image URL. `None` renders the built-in default logo.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Room is on.
    #[serde(default)]
    pub is_on: bool,
    /// Warm-up in progress.
    #[serde(default)]
    pub is_warming: bool,
    /// Cool-down in progress.
    #[serde(default)]
    pub is_cooling: bool,
    /// Call active.
    #[serde(default)]
    pub in_call: bool,
    /// Codec content sharing active.
    #[serde(default)]
    pub sharing_content: bool,
    /// Privacy mute engaged.
    #[serde(default)]
    pub privacy_mode_on: bool,
    /// Shutdown prompt timer state.
    #[serde(default)]
    pub shutdown: ShutdownPromptState,
    /// Currently routed source. `None` when nothing is routed.
    #[serde(default)]
    pub current_source: Option<SourceKey>,
    /// Source catalog for this room, unordered; display order is per-entry.
    #[serde(default)]
    pub sources: Vec<SourceEntry>,
    /// A default presentation route is configured.
    #[serde(default)]
    pub has_default_present_route: bool,
    /// The default display implements power control.
    #[serde(default)]
    pub default_display_has_power: bool,
    /// Current volume-control device. `None` when the room has none.
    #[serde(default)]
    pub volume: Option<VolumeDeviceState>,
    /// Today's meetings, ordered by start time by the schedule source.
    #[serde(default)]
    pub meetings: Vec<Meeting>,
    /// A schedule source is present; enables meeting polling.
    #[serde(default)]
    pub has_schedule_source: bool,
}

impl RoomSnapshot {
    /// Look up a catalog entry by route key.
    ///
    /// # Errors
    ///
    /// [`CatalogError::UnknownSourceKey`](crate::CatalogError) when no entry
    /// matches; callers omit the entry rather than failing the operation.
    pub fn source(&self, key: &SourceKey) -> Result<&SourceEntry, crate::CatalogError> {
        self.sources
            .iter()
            .find(|entry| &entry.key == key)
            .ok_or_else(|| crate::CatalogError::UnknownSourceKey { key: key.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_topics_exclude_modal_tick() {
        assert!(!RoomTopic::BASE.contains(&RoomTopic::ShutdownTick));
        assert_eq!(RoomTopic::BASE.len(), 13);
    }

    #[test]
    fn source_lookup_reports_configuration_gap() {
        let snapshot = RoomSnapshot::default();
        let missing = snapshot.source(&SourceKey::new("pc-1"));
        assert!(matches!(
            missing,
            Err(crate::CatalogError::UnknownSourceKey { .. })
        ));
    }
}
