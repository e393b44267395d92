//! Device capability model.
//!
//! A control-capable source device declares the control surfaces it
//! implements as an explicit capability set. Capability presence, not a
//! device registry, drives button wiring: for each declared capability the
//! panel binds that capability's join table, and absence is a normal
//! branch, never an error.

use serde::{Deserialize, Serialize};

/// Identity of a control-capable device, from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeviceId(pub String);

impl DeviceId {
    /// Device key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Optional control surfaces a device may implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    /// Power on/off/toggle buttons.
    Power,
    /// Channel up/down and last-channel.
    Channel,
    /// Red/green/yellow/blue color keys.
    Color,
    /// Directional pad with select/menu/exit.
    DPad,
    /// DVR list and record controls.
    Dvr,
    /// Numeric keypad with dash and enter.
    NumericKeypad,
    /// Transport controls (play, pause, scan, chapter skip).
    Transport,
    /// Set-top-box composite surface (guide and page navigation).
    SetTopBox,
    /// Disc-player composite surface.
    DiscPlayer,
}

impl Capability {
    /// All capabilities, in wiring order.
    pub const ALL: [Self; 9] = [
        Self::Power,
        Self::Channel,
        Self::Color,
        Self::DPad,
        Self::Dvr,
        Self::NumericKeypad,
        Self::Transport,
        Self::SetTopBox,
        Self::DiscPlayer,
    ];
}

/// Declared capability set for one device.
///
/// Immutable catalog data; instantiated from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Device identity. Page managers and button wiring key off this.
    pub id: DeviceId,
    /// Control surfaces the device implements.
    #[serde(default)]
    pub capabilities: Vec<Capability>,
}

impl DeviceProfile {
    /// Whether the device declares `capability`.
    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

/// Buttons contributed by device capabilities.
///
/// The vocabulary is closed so wiring decisions stay statically
/// enumerable; a capability's join table maps panel joins to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceButton {
    /// Toggle device power.
    PowerToggle,
    /// Channel up.
    ChannelUp,
    /// Channel down.
    ChannelDown,
    /// Return to previous channel.
    LastChannel,
    /// Red color key.
    Red,
    /// Green color key.
    Green,
    /// Yellow color key.
    Yellow,
    /// Blue color key.
    Blue,
    /// D-pad up.
    Up,
    /// D-pad down.
    Down,
    /// D-pad left.
    Left,
    /// D-pad right.
    Right,
    /// D-pad select/OK.
    Select,
    /// Menu key.
    Menu,
    /// Exit key.
    Exit,
    /// Recorded-programs list.
    DvrList,
    /// Record.
    Record,
    /// Keypad digit 0-9.
    Digit(u8),
    /// Keypad dash.
    Dash,
    /// Keypad enter.
    KeypadEnter,
    /// Play.
    Play,
    /// Pause.
    Pause,
    /// Stop.
    Stop,
    /// Scan backward.
    Rewind,
    /// Scan forward.
    FastForward,
    /// Previous chapter/track.
    ChapterMinus,
    /// Next chapter/track.
    ChapterPlus,
    /// Program guide.
    Guide,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_capability_query() {
        let profile = DeviceProfile {
            id: DeviceId("stb-1".into()),
            capabilities: vec![Capability::SetTopBox, Capability::DPad, Capability::Channel],
        };

        assert!(profile.has(Capability::SetTopBox));
        assert!(profile.has(Capability::Channel));
        assert!(!profile.has(Capability::DiscPlayer));
        assert!(!profile.has(Capability::Transport));
    }

    #[test]
    fn capability_deserializes_kebab_case() {
        let parsed: Capability = serde_json::from_str("\"set-top-box\"").unwrap();
        assert_eq!(parsed, Capability::SetTopBox);
    }
}
