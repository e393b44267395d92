//! The simulation pump.
//!
//! Wires a real [`AvPanelDriver`] to the scripted room and virtual
//! clock, and pumps actions and feedback through the single serial
//! event context until nothing is left in flight — the simulated
//! equivalent of the panel's event loop going idle.

use paneldeck_core::{BoolJoin, ListJoin, Millis, NumericJoin, PressTarget, RoomAction, RoomSnapshot};
use paneldeck_driver::{AvPanelDriver, PanelEvent};

use crate::{clock::ManualClock, room::ScriptedRoom, sink::RecordingSink};

/// One panel, one room, one clock.
pub struct SimPanel {
    /// The driver under test.
    pub driver: AvPanelDriver<RecordingSink, ManualClock>,
    /// The scripted room executing the driver's actions.
    pub room: ScriptedRoom,
    clock: ManualClock,
}

impl SimPanel {
    /// Bind a panel to `snapshot` without showing it.
    pub fn new(snapshot: RoomSnapshot) -> Self {
        let clock = ManualClock::new();
        let mut sim = Self {
            driver: AvPanelDriver::new(
                RecordingSink::new(),
                clock.clone(),
                paneldeck_core::PanelConfig::default(),
            ),
            room: ScriptedRoom::new(snapshot.clone()),
            clock,
        };
        let actions = sim.driver.bind_room(snapshot);
        sim.settle(actions);
        sim
    }

    /// Bind and show, then pump the first timer tick so the meeting
    /// poll's immediate fire lands.
    pub fn start(snapshot: RoomSnapshot) -> Self {
        let mut sim = Self::new(snapshot);
        sim.driver.show();
        sim.advance(0);
        sim
    }

    /// Full press-and-release on a join.
    pub fn press(&mut self, join: BoolJoin) {
        let down = self.driver.handle(PanelEvent::Press {
            target: PressTarget::Join(join),
            pressed: true,
        });
        self.settle(down);
        let up = self.driver.handle(PanelEvent::Press {
            target: PressTarget::Join(join),
            pressed: false,
        });
        self.settle(up);
    }

    /// Full press-and-release on a list row.
    pub fn press_row(&mut self, list: ListJoin, slot: u16) {
        let down = self.driver.handle(PanelEvent::Press {
            target: PressTarget::Row { list, slot },
            pressed: true,
        });
        self.settle(down);
        let up = self.driver.handle(PanelEvent::Press {
            target: PressTarget::Row { list, slot },
            pressed: false,
        });
        self.settle(up);
    }

    /// Move a slider.
    pub fn slide(&mut self, join: NumericJoin, value: u16) {
        let actions = self.driver.handle(PanelEvent::Slider { join, value });
        self.settle(actions);
    }

    /// Advance virtual time and pump the timer tick.
    pub fn advance(&mut self, delta: Millis) {
        self.clock.advance(delta);
        let actions = self.driver.handle(PanelEvent::Tick);
        self.settle(actions);
    }

    /// Rebind the panel to a different room. Detach actions are routed
    /// to the outgoing room, the rest to the incoming one, the way an
    /// embedding runtime would. The outgoing room is kept for
    /// subscription-accounting assertions.
    pub fn rebind(&mut self, snapshot: RoomSnapshot) -> ScriptedRoom {
        let actions = self.driver.bind_room(snapshot.clone());
        let mut outgoing = std::mem::replace(&mut self.room, ScriptedRoom::new(snapshot));
        let mut remaining = Vec::new();
        for action in actions {
            match action {
                RoomAction::Detach { .. } => outgoing.execute(action),
                other => remaining.push(other),
            }
        }
        self.settle(remaining);
        outgoing
    }

    /// Execute driver actions and deliver resulting room feedback until
    /// nothing is left in flight.
    pub fn settle(&mut self, mut actions: Vec<RoomAction>) {
        loop {
            for action in actions.drain(..) {
                self.room.execute(action);
            }
            let events = self.room.take_events();
            if events.is_empty() {
                break;
            }
            for event in events {
                actions.extend(self.driver.handle(PanelEvent::Room(event)));
            }
        }
    }

    /// Pump any feedback the room has queued (after direct `room` calls).
    pub fn pump(&mut self) {
        self.settle(Vec::new());
    }

    /// The recording sink, for assertions.
    pub fn sink(&self) -> &RecordingSink {
        self.driver.sink()
    }
}
