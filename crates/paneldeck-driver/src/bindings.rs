//! Press-action registry.
//!
//! Maps boolean joins to [`PanelCommand`] values. The registry lives on
//! the driver side of the sink boundary: a binding cleared here can never
//! fire again, which is what makes room swaps and list rebuilds safe from
//! stale handlers.

use std::collections::HashMap;

use paneldeck_core::BoolJoin;

use crate::command::PanelCommand;

/// When a bound command fires relative to the press cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BindingKind {
    /// Fire once, on the release transition. The common case; avoids
    /// duplicate actions on press-and-hold hardware.
    Release,
    /// Fire on both edges with the press state. Used for ramping
    /// controls and device transport buttons.
    State,
}

/// Join-to-command registry for panel buttons.
#[derive(Debug, Default)]
pub struct ButtonBindings {
    map: HashMap<BoolJoin, (BindingKind, PanelCommand)>,
}

impl ButtonBindings {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `command` to fire on the release transition of `join`.
    /// Replaces any existing binding on the join.
    pub fn bind_release(&mut self, join: BoolJoin, command: PanelCommand) {
        self.map.insert(join, (BindingKind::Release, command));
    }

    /// Bind `command` to fire on both edges of `join` with press state.
    /// Replaces any existing binding on the join.
    pub fn bind_state(&mut self, join: BoolJoin, command: PanelCommand) {
        self.map.insert(join, (BindingKind::State, command));
    }

    /// Remove the binding on `join`, if any.
    pub fn clear(&mut self, join: BoolJoin) {
        self.map.remove(&join);
    }

    /// Resolve a press edge to the command that should run now.
    ///
    /// Release bindings only resolve when `pressed` is false; state
    /// bindings resolve on both edges. Unbound joins resolve to `None` —
    /// a stray press during a transition is expected, not an error.
    pub fn resolve(&self, join: BoolJoin, pressed: bool) -> Option<PanelCommand> {
        let (kind, command) = self.map.get(&join)?;
        match kind {
            BindingKind::Release if pressed => None,
            BindingKind::Release | BindingKind::State => Some(command.clone()),
        }
    }

    /// Number of live bindings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no bindings are registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
