//! Panel orchestration layer for Paneldeck
//!
//! The state machine that decides what a single-room AV touch panel shows,
//! mediates button presses into room/device actions, and keeps on-screen
//! state synchronized with asynchronous hardware feedback — with no
//! flicker, no orphaned visible regions, and no double-registered
//! handlers.
//!
//! # Components
//!
//! - [`AvPanelDriver`]: the central room-state-driven UI machine
//! - [`Interlock`]: mutually exclusive visible regions
//! - [`DynamicList`]: capacity-bounded content lists with deferred reveal
//! - [`PageRegistry`]: per-device page manager selection and caching
//! - [`Timers`]: cooperative, cancellable timer entries
//!
//! Everything is driven by serially-arriving [`PanelEvent`]s; room and
//! device side-effects come back out as `RoomAction` values for the
//! embedding runtime to execute.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod avdriver;
mod bindings;
mod capabilities;
mod command;
mod event;
mod interlock;
mod list;
mod modal;
mod pages;
mod timers;

pub mod joins;

pub use avdriver::{AvPanelDriver, DisplayMode};
pub use bindings::ButtonBindings;
pub use command::PanelCommand;
pub use event::PanelEvent;
pub use interlock::Interlock;
pub use list::{DynamicList, ListRow};
pub use modal::{ModalDialog, ModalSpec};
pub use pages::{PageKind, PageRegistry};
pub use timers::{TimerPurpose, Timers};
