//! Source staging, per-source control surfaces, and volume wiring.

use paneldeck_core::{Clock, RoomAction, SignalSink, SourceKey};
use tracing::debug;

use crate::{
    avdriver::AvPanelDriver,
    capabilities,
    command::PanelCommand,
    joins,
    list::ListRow,
};

impl<S: SignalSink, C: Clock> AvPanelDriver<S, C> {
    /// Route a catalog entry. The visible page-manager update comes from
    /// the room's source-change feedback, not from this call — selection
    /// is asynchronous relative to the UI update.
    pub(super) fn select_source(&mut self, key: SourceKey) -> Vec<RoomAction> {
        if self.room.is_none() {
            return Vec::new();
        }
        vec![RoomAction::RunRoute { key }]
    }

    /// Rebuild the staging list from the catalog under the current
    /// filtering rules.
    ///
    /// An entry is excluded when it is marked not included, when a call
    /// is active and it disables codec sharing, or when the panel is in
    /// call mode and it disables codec sharing — both call conditions
    /// matter because a source can be staged while the room is still
    /// warming, before in-call flips.
    pub(super) fn rebuild_source_list(&mut self) {
        let Some(room) = &self.room else {
            return;
        };
        let in_call = room.in_call;
        let call_mode = self.mode == super::DisplayMode::Call;

        let mut entries = room.sources.clone();
        entries.sort_by_key(|entry| entry.order);

        self.source_list.clear(&mut self.sink);
        let mut revealed: u16 = 0;
        for entry in entries {
            if !entry.include_in_list
                || (in_call && entry.disable_codec_sharing)
                || (call_mode && entry.disable_codec_sharing)
            {
                debug!(source = %entry.key, "skipping source");
                continue;
            }
            let row = ListRow::pressable(PanelCommand::SelectSource(entry.key.clone()))
                .with_string(1, entry.preferred_name.clone())
                .with_string(2, entry.icon.clone());
            self.source_list.add_item(&mut self.sink, row);
            revealed = revealed.saturating_add(1);
        }
        self.source_list.set_count(&mut self.sink, revealed);
    }

    /// Raise the page manager for the room's current source, prompting
    /// for a selection when the source has no control surface to show.
    pub(super) fn show_current_source(&mut self) {
        let Some(room) = &self.room else {
            return;
        };
        let Some(key) = &room.current_source else {
            return;
        };
        let Ok(entry) = room.source(key) else {
            debug!(%key, "current source missing from catalog, omitted");
            return;
        };
        match &entry.device {
            None => {
                self.sink.set_bool(joins::visible::SELECT_A_SOURCE, true);
            },
            Some(profile) => {
                self.sink.set_bool(joins::visible::SELECT_A_SOURCE, false);
                self.pages.show(&mut self.sink, profile);
            },
        }
    }

    /// Repaint the current-source header and rewire the source device
    /// after a did-change notification or a room bind.
    pub(super) fn refresh_source_info(&mut self) {
        // This raises the page manager too, unless the call surface owns
        // the screen
        if self.visible && !self.call_surface_visible {
            self.show_current_source();
        }

        let Some(room) = &self.room else {
            return;
        };
        match room.current_source.as_ref().and_then(|key| room.source(key).ok()) {
            None => {
                self.sink.set_string(joins::text::CURRENT_SOURCE_NAME, "Room is off");
                self.sink.set_string(joins::text::CURRENT_SOURCE_ICON, "Power");
            },
            Some(entry) => {
                self.sink.set_string(joins::text::CURRENT_SOURCE_NAME, &entry.preferred_name);
                self.sink.set_string(joins::text::CURRENT_SOURCE_ICON, &entry.icon);
                if let Some(profile) = &entry.device {
                    capabilities::link_buttons(profile, &mut self.bindings);
                }
            },
        }
    }

    /// Tear down the previous source's surface and wiring ahead of a
    /// route change landing.
    pub(super) fn disconnect_source(&mut self, previous: Option<SourceKey>) {
        let Some(previous) = previous else {
            return;
        };
        if self.visible {
            self.pages.hide_current(&mut self.sink);
        }
        let Some(room) = &self.room else {
            return;
        };
        if let Ok(entry) = room.source(&previous)
            && let Some(profile) = &entry.device
        {
            capabilities::unlink_buttons(profile, &mut self.bindings);
        }
    }

    /// Wire volume buttons and slider to the room's current volume
    /// device, painting current level and mute immediately. Devices
    /// without feedback get buttons only and a zeroed slider.
    pub(super) fn refresh_volume_wiring(&mut self) {
        let Some(volume) = self.room.as_ref().and_then(|room| room.volume) else {
            self.volume_slider_wired = false;
            self.sink.set_numeric(joins::level::VOLUME_SLIDER, 0);
            return;
        };

        self.bindings.bind_state(joins::press::VOLUME_UP, PanelCommand::VolumeUp);
        self.bindings.bind_state(joins::press::VOLUME_DOWN, PanelCommand::VolumeDown);
        self.bindings
            .bind_release(joins::press::VOLUME_PROGRAM_MUTE, PanelCommand::VolumeMuteToggle);

        if volume.has_feedback {
            self.volume_slider_wired = true;
            self.sink.set_bool(joins::press::VOLUME_PROGRAM_MUTE, volume.muted);
            self.sink.set_numeric(joins::level::VOLUME_SLIDER, volume.level);
        } else {
            self.volume_slider_wired = false;
            self.sink.set_numeric(joins::level::VOLUME_SLIDER, 0);
        }
    }

    /// Detach volume buttons and slider from the outgoing device.
    pub(super) fn clear_volume_wiring(&mut self) {
        self.bindings.clear(joins::press::VOLUME_UP);
        self.bindings.clear(joins::press::VOLUME_DOWN);
        self.bindings.clear(joins::press::VOLUME_PROGRAM_MUTE);
        self.volume_slider_wired = false;
    }

    /// Shared-source status on the active-calls list: the current
    /// source's name while content is being shared, "None" otherwise.
    pub(super) fn refresh_sharing_status(&mut self) {
        let Some(room) = &self.room else {
            return;
        };
        let sharing = room.sharing_content;
        let label = if sharing {
            room.current_source
                .as_ref()
                .and_then(|key| room.source(key).ok())
                .map_or_else(|| "None".to_string(), |entry| entry.preferred_name.clone())
        } else {
            "None".to_string()
        };
        self.sink.set_bool(joins::visible::CALL_SHARED_SOURCE_INFO, sharing);
        self.sink.set_string(joins::text::CALL_SHARED_SOURCE_NAME, &label);
    }
}
