//! Scripted room.
//!
//! Executes `RoomAction`s the way a real room would — routes flip power
//! and the current source, shutdown actions drive the prompt timer,
//! dialing flips in-call — and queues the feedback events those changes
//! produce. Delivery is subscription-faithful: an event is queued once
//! per live attachment of its topic, so a missing detach shows up in
//! tests as duplicate delivery, exactly the bug the bind ordering
//! invariant exists to prevent.

use std::collections::{HashMap, VecDeque};

use paneldeck_core::{
    ChangePhase, DeviceButton, DeviceId, MeetingId, Meeting, RoomAction, RoomEvent, RoomSnapshot,
    RoomTopic, ShutdownKind, ShutdownPromptState, SourceKey,
};
use tracing::debug;

/// Which topic an event rides on.
fn topic_of(event: &RoomEvent) -> RoomTopic {
    match event {
        RoomEvent::PowerChanged(_) => RoomTopic::Power,
        RoomEvent::WarmingChanged(_) => RoomTopic::Warming,
        RoomEvent::CoolingChanged(_) => RoomTopic::Cooling,
        RoomEvent::InCallChanged(_) => RoomTopic::InCall,
        RoomEvent::SharingContentChanged(_) => RoomTopic::SharingContent,
        RoomEvent::PrivacyModeChanged(_) => RoomTopic::PrivacyMode,
        RoomEvent::SourceChanged { .. } => RoomTopic::SourceChange,
        RoomEvent::VolumeDeviceChanged { .. } => RoomTopic::VolumeDeviceChange,
        RoomEvent::VolumeLevelChanged(_) => RoomTopic::VolumeLevel,
        RoomEvent::MuteChanged(_) => RoomTopic::Mute,
        RoomEvent::ShutdownStarted { .. }
        | RoomEvent::ShutdownFinished
        | RoomEvent::ShutdownCancelled => RoomTopic::ShutdownPrompt,
        RoomEvent::ShutdownTick { .. } => RoomTopic::ShutdownTick,
        RoomEvent::ScheduleChanged(_) => RoomTopic::Schedule,
        RoomEvent::ConfigChanged(_) => RoomTopic::Config,
    }
}

/// Simulated room with subscription accounting.
#[derive(Debug)]
pub struct ScriptedRoom {
    state: RoomSnapshot,
    live: HashMap<RoomTopic, i64>,
    attach_total: HashMap<RoomTopic, u64>,
    detach_total: HashMap<RoomTopic, u64>,
    pending: VecDeque<RoomEvent>,
    /// Route key run for the default presentation route.
    pub default_present_key: Option<SourceKey>,
    /// Countdown length reported on shutdown start.
    pub prompt_seconds: u16,
    dialed: Vec<MeetingId>,
    routes_run: Vec<SourceKey>,
    default_call_routes: u32,
    default_present_routes: u32,
    device_buttons: Vec<(DeviceId, DeviceButton, bool)>,
    volume_ramps: Vec<(bool, bool)>,
}

impl ScriptedRoom {
    /// Create a room whose authoritative state starts at `state`.
    pub fn new(state: RoomSnapshot) -> Self {
        Self {
            state,
            live: HashMap::new(),
            attach_total: HashMap::new(),
            detach_total: HashMap::new(),
            pending: VecDeque::new(),
            default_present_key: None,
            prompt_seconds: 30,
            dialed: Vec::new(),
            routes_run: Vec::new(),
            default_call_routes: 0,
            default_present_routes: 0,
            device_buttons: Vec::new(),
            volume_ramps: Vec::new(),
        }
    }

    /// Current authoritative state.
    pub fn state(&self) -> &RoomSnapshot {
        &self.state
    }

    /// Live attachment count for a topic.
    pub fn live_subscriptions(&self, topic: RoomTopic) -> i64 {
        self.live.get(&topic).copied().unwrap_or(0)
    }

    /// Total attaches seen for a topic.
    pub fn attaches(&self, topic: RoomTopic) -> u64 {
        self.attach_total.get(&topic).copied().unwrap_or(0)
    }

    /// Total detaches seen for a topic.
    pub fn detaches(&self, topic: RoomTopic) -> u64 {
        self.detach_total.get(&topic).copied().unwrap_or(0)
    }

    /// Meetings dialed, in order.
    pub fn dialed(&self) -> &[MeetingId] {
        &self.dialed
    }

    /// Routes run via explicit key, in order.
    pub fn routes_run(&self) -> &[SourceKey] {
        &self.routes_run
    }

    /// Times the default call route ran.
    pub fn default_call_routes(&self) -> u32 {
        self.default_call_routes
    }

    /// Times the default presentation route ran.
    pub fn default_present_routes(&self) -> u32 {
        self.default_present_routes
    }

    /// Device buttons forwarded, in order.
    pub fn device_buttons(&self) -> &[(DeviceId, DeviceButton, bool)] {
        &self.device_buttons
    }

    /// Volume ramps as (up, pressed), in order.
    pub fn volume_ramps(&self) -> &[(bool, bool)] {
        &self.volume_ramps
    }

    /// Drain queued feedback events.
    pub fn take_events(&mut self) -> Vec<RoomEvent> {
        self.pending.drain(..).collect()
    }

    /// Queue `event` once per live attachment of its topic. With no
    /// attachment the event is dropped, exactly like an unsubscribed
    /// feedback line.
    pub fn emit(&mut self, event: RoomEvent) {
        let copies = self.live_subscriptions(topic_of(&event)).max(0);
        for _ in 0..copies {
            self.pending.push_back(event.clone());
        }
    }

    /// Execute one action from the driver.
    pub fn execute(&mut self, action: RoomAction) {
        match action {
            RoomAction::Attach { topic } => {
                *self.live.entry(topic).or_insert(0) += 1;
                *self.attach_total.entry(topic).or_insert(0) += 1;
            },
            RoomAction::Detach { topic } => {
                *self.live.entry(topic).or_insert(0) -= 1;
                *self.detach_total.entry(topic).or_insert(0) += 1;
            },
            RoomAction::RunRoute { key } => {
                self.routes_run.push(key.clone());
                self.power_on();
                self.route_to(Some(key));
            },
            RoomAction::RunDefaultPresentRoute => {
                self.default_present_routes += 1;
                self.power_on();
                if let Some(key) = self.default_present_key.clone() {
                    self.route_to(Some(key));
                }
            },
            RoomAction::RunDefaultCallRoute => {
                self.default_call_routes += 1;
                self.power_on();
                self.route_to(Some(SourceKey::codec_osd()));
            },
            RoomAction::StartShutdown { kind } => self.start_shutdown(kind),
            RoomAction::CancelShutdown => {
                if self.state.shutdown.is_running {
                    self.state.shutdown = ShutdownPromptState::default();
                    self.emit(RoomEvent::ShutdownCancelled);
                }
            },
            RoomAction::FinishShutdown => {
                if self.state.shutdown.is_running {
                    self.state.shutdown = ShutdownPromptState::default();
                    self.emit(RoomEvent::ShutdownFinished);
                    self.power_off();
                }
            },
            RoomAction::Dial { meeting } => {
                self.dialed.push(meeting);
                if !self.state.in_call {
                    self.state.in_call = true;
                    self.emit(RoomEvent::InCallChanged(true));
                }
            },
            RoomAction::VolumeUp { pressed } => self.volume_ramps.push((true, pressed)),
            RoomAction::VolumeDown { pressed } => self.volume_ramps.push((false, pressed)),
            RoomAction::MuteToggle => {
                if let Some(volume) = &mut self.state.volume {
                    volume.muted = !volume.muted;
                    let muted = volume.muted;
                    self.emit(RoomEvent::MuteChanged(muted));
                }
            },
            RoomAction::SetVolume { level } => {
                if let Some(volume) = &mut self.state.volume {
                    volume.level = level;
                    self.emit(RoomEvent::VolumeLevelChanged(level));
                }
            },
            RoomAction::SetDefaultVolumeLevels => {
                debug!("default volume levels restored");
            },
            RoomAction::PrivacyModeToggle => {
                self.state.privacy_mode_on = !self.state.privacy_mode_on;
                let on = self.state.privacy_mode_on;
                self.emit(RoomEvent::PrivacyModeChanged(on));
            },
            RoomAction::DisplayPowerToggle => {
                debug!("display power toggled");
            },
            RoomAction::DeviceButton { device, button, pressed } => {
                self.device_buttons.push((device, button, pressed));
            },
        }
    }

    /// Replace today's meeting list and notify.
    pub fn set_meetings(&mut self, meetings: Vec<Meeting>) {
        self.state.meetings = meetings.clone();
        self.emit(RoomEvent::ScheduleChanged(meetings));
    }

    /// Flip codec content sharing and notify.
    pub fn set_sharing(&mut self, sharing: bool) {
        self.state.sharing_content = sharing;
        self.emit(RoomEvent::SharingContentChanged(sharing));
    }

    /// Complete a pending warm-up.
    pub fn complete_warmup(&mut self) {
        if self.state.is_warming {
            self.state.is_warming = false;
            self.emit(RoomEvent::WarmingChanged(false));
        }
    }

    /// Deliver the live countdown feed, honoring topic attachment.
    pub fn tick_shutdown(&mut self, seconds_remaining: u16, percent_remaining: u16) {
        self.emit(RoomEvent::ShutdownTick { seconds_remaining, percent_remaining });
    }

    fn power_on(&mut self) {
        if self.state.is_on {
            return;
        }
        self.state.is_warming = true;
        self.emit(RoomEvent::WarmingChanged(true));
        self.state.is_on = true;
        self.emit(RoomEvent::PowerChanged(true));
    }

    fn power_off(&mut self) {
        if !self.state.is_on {
            return;
        }
        self.route_to(None);
        self.state.is_on = false;
        self.emit(RoomEvent::PowerChanged(false));
    }

    fn route_to(&mut self, key: Option<SourceKey>) {
        if self.state.current_source == key {
            return;
        }
        let previous = self.state.current_source.clone();
        self.emit(RoomEvent::SourceChanged {
            phase: ChangePhase::WillChange,
            previous: previous.clone(),
            current: key.clone(),
        });
        self.state.current_source = key.clone();
        self.emit(RoomEvent::SourceChanged {
            phase: ChangePhase::DidChange,
            previous,
            current: key,
        });
    }

    fn start_shutdown(&mut self, kind: ShutdownKind) {
        if self.state.shutdown.is_running {
            return;
        }
        let seconds = self.prompt_seconds;
        self.state.shutdown =
            ShutdownPromptState { kind: Some(kind), prompt_seconds: seconds, is_running: true };
        self.emit(RoomEvent::ShutdownStarted { kind, seconds });
    }
}
