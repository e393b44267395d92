//! Page manager selection and caching.
//!
//! Every control-capable source device gets a page manager: the adapter
//! owning that device's control surface region. Managers are selected by
//! probing the device's declared capabilities in fixed priority order,
//! cached by device identity, and kept for the life of the panel session
//! — memory is traded against the cost of rebuilding a surface on every
//! source switch. At most one manager is shown at a time across the
//! whole panel.

use std::collections::HashMap;

use paneldeck_core::{BoolJoin, Capability, DeviceId, DeviceProfile, SignalSink};
use tracing::debug;

use crate::joins;

/// Which control surface flavor a device resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Three-panel set-top-box surface.
    SetTopBox,
    /// Medium disc-player surface.
    DiscPlayer,
    /// Generic default surface.
    Default,
}

impl PageKind {
    /// Probe a capability set in fixed priority order.
    fn for_profile(profile: &DeviceProfile) -> Self {
        if profile.has(Capability::SetTopBox) {
            Self::SetTopBox
        } else if profile.has(Capability::DiscPlayer) {
            Self::DiscPlayer
        } else {
            Self::Default
        }
    }

    /// The visibility join for this surface flavor.
    fn visibility_join(self) -> BoolJoin {
        match self {
            Self::SetTopBox => joins::page::SET_TOP_BOX,
            Self::DiscPlayer => joins::page::DISC_PLAYER,
            Self::Default => joins::page::DEFAULT,
        }
    }
}

/// A cached page manager bound to exactly one device.
#[derive(Debug)]
struct PageManager {
    kind: PageKind,
}

/// Identity-keyed page manager cache with a single-shown invariant.
#[derive(Debug, Default)]
pub struct PageRegistry {
    managers: HashMap<DeviceId, PageManager>,
    shown: Option<DeviceId>,
}

impl PageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the page kind for `profile`, creating and caching the
    /// manager on first sight of the device.
    pub fn resolve(&mut self, profile: &DeviceProfile) -> PageKind {
        if let Some(existing) = self.managers.get(&profile.id) {
            return existing.kind;
        }
        let kind = PageKind::for_profile(profile);
        debug!(device = %profile.id, ?kind, "page manager created");
        self.managers.insert(profile.id.clone(), PageManager { kind });
        kind
    }

    /// Show the manager for `profile`, hiding whichever manager was
    /// shown before. Showing the already-shown device is a no-op.
    pub fn show(&mut self, sink: &mut impl SignalSink, profile: &DeviceProfile) {
        if self.shown.as_ref() == Some(&profile.id) {
            return;
        }
        self.hide_current(sink);
        let kind = self.resolve(profile);
        sink.set_bool(kind.visibility_join(), true);
        self.shown = Some(profile.id.clone());
    }

    /// Hide the shown manager, if any. Idempotent.
    pub fn hide_current(&mut self, sink: &mut impl SignalSink) {
        if let Some(device) = self.shown.take()
            && let Some(manager) = self.managers.get(&device)
        {
            sink.set_bool(manager.kind.visibility_join(), false);
        }
    }

    /// Device whose manager is currently shown.
    pub fn shown(&self) -> Option<&DeviceId> {
        self.shown.as_ref()
    }

    /// Number of cached managers.
    pub fn cached(&self) -> usize {
        self.managers.len()
    }
}
