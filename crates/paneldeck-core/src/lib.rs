//! Core contracts for Paneldeck
//!
//! Leaf types shared by the panel orchestration layer and its embedders:
//! the signal sink surface, the room feedback/action contract, the device
//! capability model, and the source/meeting catalog data.
//!
//! Everything here is plain data or an object-safe trait. I/O, join
//! numbering, and rendering policy live with the consumers.
//!
//! # Components
//!
//! - [`SignalSink`]: abstract display surface accepting value writes
//! - [`RoomEvent`] / [`RoomAction`] / [`RoomSnapshot`]: the room contract
//! - [`Capability`] / [`DeviceProfile`]: declared device control surfaces
//! - [`SourceEntry`] / [`Meeting`]: catalog data consumed read-only

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod clock;
mod config;
mod device;
mod error;
mod meeting;
mod room;
mod sink;
mod source;

pub use clock::{Clock, Millis, SystemClock};
pub use config::{HeaderStyle, PanelConfig};
pub use device::{Capability, DeviceButton, DeviceId, DeviceProfile};
pub use error::CatalogError;
pub use meeting::{Meeting, MeetingId};
pub use room::{
    ChangePhase, RoomAction, RoomEvent, RoomSnapshot, RoomTopic, ShutdownKind, ShutdownPromptState,
    VolumeDeviceState,
};
pub use sink::{BoolJoin, ListJoin, NumericJoin, PressTarget, SignalSink, StringJoin};
pub use source::{SourceEntry, SourceKey};
