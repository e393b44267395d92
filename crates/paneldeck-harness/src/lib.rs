//! Simulation harness for Paneldeck
//!
//! Deterministic stand-ins for everything outside the orchestration
//! layer, so the exact production state machine runs under test: a
//! recording signal sink, a scripted room that executes `RoomAction`s
//! and emits the feedback a real room would, a manual clock, and a
//! [`SimPanel`] loop that pumps the serial event context to quiescence.
//!
//! # Components
//!
//! - [`RecordingSink`]: last-written value per join, with query helpers
//! - [`ScriptedRoom`]: action execution + topic-gated event delivery
//! - [`ManualClock`]: settable virtual time
//! - [`SimPanel`]: driver + room + clock wired into one pump

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod clock;
mod room;
mod sim;
mod sink;

pub use clock::ManualClock;
pub use room::ScriptedRoom;
pub use sim::SimPanel;
pub use sink::RecordingSink;
