//! Mutually exclusive visible regions.
//!
//! An interlock owns a family of popup/region joins of which at most one
//! may be visible at a time. Exclusivity is enforced purely by sequencing
//! — hide before show — which is sufficient because the whole panel runs
//! on one logical thread.

use paneldeck_core::{BoolJoin, SignalSink};

/// Tracks and switches a set of mutually exclusive regions.
///
/// `current` remembers the last shown join even while hidden, so a
/// toggle-show of the same region after a plain [`Interlock::hide`] still
/// reads as a toggle-off. [`Interlock::hide_and_clear`] forgets it.
#[derive(Debug, Default)]
pub struct Interlock {
    current: Option<BoolJoin>,
    visible: bool,
}

impl Interlock {
    /// Create an interlock with nothing shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `join`, hiding the previously visible region first.
    ///
    /// Showing the join that is already current and visible is a no-op —
    /// no hide/show cycle, no flicker.
    pub fn show(&mut self, sink: &mut impl SignalSink, join: BoolJoin) {
        if self.visible && self.current == Some(join) {
            return;
        }
        if let Some(previous) = self.current
            && previous != join
        {
            sink.set_bool(previous, false);
        }
        sink.set_bool(join, true);
        self.current = Some(join);
        self.visible = true;
    }

    /// Show `join`, or hide-and-clear if it is already the current region.
    pub fn show_with_toggle(&mut self, sink: &mut impl SignalSink, join: BoolJoin) {
        if self.current == Some(join) && self.visible {
            self.hide_and_clear(sink);
        } else {
            self.show(sink, join);
        }
    }

    /// Hide the current region but keep it as current.
    pub fn hide(&mut self, sink: &mut impl SignalSink) {
        if let Some(current) = self.current {
            sink.set_bool(current, false);
        }
        self.visible = false;
    }

    /// Hide the current region and forget it; the next show is a fresh
    /// show, never a toggle-off.
    pub fn hide_and_clear(&mut self, sink: &mut impl SignalSink) {
        self.hide(sink);
        self.current = None;
    }

    /// The current region join, shown or not. `None` after a clear.
    pub fn current(&self) -> Option<BoolJoin> {
        self.current
    }

    /// Whether the current region is visible.
    pub fn is_visible(&self) -> bool {
        self.visible && self.current.is_some()
    }
}
