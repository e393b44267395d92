//! Shutdown countdown sub-machine.
//!
//! A started countdown of the prompting kinds raises a two-button modal
//! with live remaining-seconds text and a percent gauge. The live feed
//! rides a dedicated tick topic attached only for the modal's lifetime;
//! all three terminal transitions (finished, cancelled, out-of-band
//! power-off) take the modal down, detach the feed, and refresh the
//! footer feedback.

use paneldeck_core::{Clock, RoomAction, RoomTopic, ShutdownKind, ShutdownPromptState, SignalSink};

use crate::{avdriver::AvPanelDriver, modal::ModalSpec};

impl<S: SignalSink, C: Clock> AvPanelDriver<S, C> {
    pub(super) fn handle_shutdown_started(
        &mut self,
        kind: ShutdownKind,
        seconds: u16,
    ) -> Vec<RoomAction> {
        self.handle_shutdown_state(ShutdownPromptState {
            kind: Some(kind),
            prompt_seconds: seconds,
            is_running: true,
        });
        self.refresh_footer_feedback();

        if !matches!(kind, ShutdownKind::Manual | ShutdownKind::Vacancy) {
            return Vec::new();
        }

        let spec = ModalSpec {
            title: "End Meeting".into(),
            icon: "Power".into(),
            message: format!("Meeting will end in {seconds} seconds"),
            button_1: "Cancel".into(),
            button_2: "End Meeting Now".into(),
        };
        self.modal.present(&mut self.sink, &mut self.bindings, &spec);

        self.shutdown_tick_attached = true;
        vec![RoomAction::Attach { topic: RoomTopic::ShutdownTick }]
    }

    /// Countdown finished or cancelled: same teardown either way; the
    /// room's power feedback tells the rest of the story.
    pub(super) fn handle_shutdown_terminal(&mut self) -> Vec<RoomAction> {
        self.handle_shutdown_state(ShutdownPromptState::default());
        self.modal.hide(&mut self.sink, &mut self.bindings);
        self.refresh_footer_feedback();

        if self.shutdown_tick_attached {
            self.shutdown_tick_attached = false;
            return vec![RoomAction::Detach { topic: RoomTopic::ShutdownTick }];
        }
        Vec::new()
    }

    pub(super) fn handle_shutdown_tick(&mut self, seconds_remaining: u16, percent_remaining: u16) {
        let message = format!("Meeting will end in {seconds_remaining} seconds");
        self.modal.update_message(&mut self.sink, &message);
        let gauge = ((u32::from(percent_remaining) * 65_535) / 100).min(65_535) as u16;
        self.modal.set_gauge(&mut self.sink, gauge);
    }

    /// Modal button resolution: any button except the second cancels;
    /// the second forces the shutdown to finish now. Late presses after
    /// the modal is down resolve to nothing.
    pub(super) fn modal_button_pressed(&mut self, button: u8) -> Vec<RoomAction> {
        if !self.modal.is_visible() {
            return Vec::new();
        }
        self.modal.hide(&mut self.sink, &mut self.bindings);
        if button == 2 {
            vec![RoomAction::FinishShutdown]
        } else {
            vec![RoomAction::CancelShutdown]
        }
    }
}
