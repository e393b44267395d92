//! Two-button modal dialog.
//!
//! One reusable modal surface: title, icon, message, two labelled
//! buttons, and an optional countdown gauge. Button presses route through
//! the driver's command map as [`PanelCommand::ModalButton`], so hiding
//! the modal unbinds them and a late press cannot fire into a dialog
//! that is no longer up.

use paneldeck_core::SignalSink;

use crate::{bindings::ButtonBindings, command::PanelCommand, joins};

/// Content for one presentation of the modal.
#[derive(Debug, Clone)]
pub struct ModalSpec {
    /// Title text.
    pub title: String,
    /// Icon key.
    pub icon: String,
    /// Message body.
    pub message: String,
    /// First (left) button label.
    pub button_1: String,
    /// Second (right) button label.
    pub button_2: String,
}

/// Reusable two-button modal dialog surface.
#[derive(Debug, Default)]
pub struct ModalDialog {
    visible: bool,
}

impl ModalDialog {
    /// Create a hidden modal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Present the modal with `spec`, binding both buttons.
    pub fn present(
        &mut self,
        sink: &mut impl SignalSink,
        bindings: &mut ButtonBindings,
        spec: &ModalSpec,
    ) {
        sink.set_string(joins::modal::TITLE, &spec.title);
        sink.set_string(joins::modal::ICON, &spec.icon);
        sink.set_string(joins::modal::MESSAGE, &spec.message);
        sink.set_string(joins::modal::BUTTON_1_LABEL, &spec.button_1);
        sink.set_string(joins::modal::BUTTON_2_LABEL, &spec.button_2);
        bindings.bind_release(joins::modal::BUTTON_1, PanelCommand::ModalButton(1));
        bindings.bind_release(joins::modal::BUTTON_2, PanelCommand::ModalButton(2));
        sink.set_bool(joins::modal::VISIBLE, true);
        self.visible = true;
    }

    /// Replace the message body while the modal is up.
    pub fn update_message(&self, sink: &mut impl SignalSink, message: &str) {
        if self.visible {
            sink.set_string(joins::modal::MESSAGE, message);
        }
    }

    /// Drive the countdown gauge, 0-65535.
    pub fn set_gauge(&self, sink: &mut impl SignalSink, value: u16) {
        if self.visible {
            sink.set_numeric(joins::modal::TIMER_GAUGE, value);
        }
    }

    /// Hide the modal and unbind both buttons. Idempotent.
    pub fn hide(&mut self, sink: &mut impl SignalSink, bindings: &mut ButtonBindings) {
        if !self.visible {
            return;
        }
        sink.set_bool(joins::modal::VISIBLE, false);
        bindings.clear(joins::modal::BUTTON_1);
        bindings.clear(joins::modal::BUTTON_2);
        self.visible = false;
    }

    /// Whether the modal is up.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
