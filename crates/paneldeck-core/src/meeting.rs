//! Meeting schedule types.
//!
//! Today's meetings as delivered by the room's schedule source. Join-window
//! logic ("joinable") is owned by that source; the panel only renders and
//! reacts. Start/end times arrive preformatted for display since the list
//! is already ordered by start time upstream.

use serde::{Deserialize, Serialize};

/// Identity of a scheduled meeting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeetingId(pub String);

impl MeetingId {
    /// Meeting id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MeetingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry in today's meeting list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Schedule-source identity, stable across refreshes.
    pub id: MeetingId,
    /// Meeting title.
    pub title: String,
    /// Organizer display name.
    #[serde(default)]
    pub organizer: String,
    /// Start time, preformatted for display.
    pub starts_at: String,
    /// End time, preformatted for display.
    pub ends_at: String,
    /// Within the join window, per the schedule source.
    #[serde(default)]
    pub joinable: bool,
}
