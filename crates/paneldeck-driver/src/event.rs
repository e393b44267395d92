//! Inbound panel events.
//!
//! Everything that drives the orchestrator arrives serially through this
//! one type: presses from the signal surface, feedback from the bound
//! room, slider moves, and the cooperative timer tick.

use paneldeck_core::{NumericJoin, PressTarget, RoomEvent};

/// Events processed by the panel driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// Press or release on the signal surface.
    Press {
        /// Which join or list row.
        target: PressTarget,
        /// True on press, false on release.
        pressed: bool,
    },
    /// User moved a numeric input (volume slider).
    Slider {
        /// Which numeric join.
        join: NumericJoin,
        /// New value.
        value: u16,
    },
    /// Feedback from the bound room.
    Room(RoomEvent),
    /// Timer pump; fires due cooperative timers against the clock.
    Tick,
}
