//! Signal sink contract.
//!
//! The sink is the abstract surface a panel writes to: boolean visibility
//! flags, text labels, numeric gauge values, and indexed sub-regions for
//! list rows. Writes are fire-and-forget; there is no retry logic, and
//! consistency is reached through feedback echo from the hardware side.
//!
//! Join numbering is owned by the consumer's declarative join tables, not
//! by this contract. Joins are opaque ids here.

use serde::{Deserialize, Serialize};

/// Join id for a boolean signal (visibility, press feedback).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoolJoin(pub u16);

/// Join id for a string signal (labels, icons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StringJoin(pub u16);

/// Join id for a numeric signal (sliders, gauges).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NumericJoin(pub u16);

/// Join id for a list region with indexed row sub-regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListJoin(pub u16);

/// Origin of an inbound press/release event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressTarget {
    /// A plain boolean join.
    Join(BoolJoin),
    /// A row inside a list region.
    Row {
        /// The list the row belongs to.
        list: ListJoin,
        /// Zero-based slot index within the list.
        slot: u16,
    },
}

/// Abstract display surface accepting value writes.
///
/// Implementations are external: a hardware transport in production, a
/// recording sink in simulation. All methods are infallible by contract;
/// delivery failures are the transport's problem and are never surfaced
/// to orchestration logic.
pub trait SignalSink {
    /// Write a boolean value.
    fn set_bool(&mut self, join: BoolJoin, value: bool);

    /// Write a string value.
    fn set_string(&mut self, join: StringJoin, value: &str);

    /// Write a numeric value.
    fn set_numeric(&mut self, join: NumericJoin, value: u16);

    /// Write a boolean into a list row cell.
    fn set_row_bool(&mut self, list: ListJoin, slot: u16, column: u16, value: bool);

    /// Write a string into a list row cell.
    fn set_row_string(&mut self, list: ListJoin, slot: u16, column: u16, value: &str);

    /// Write a numeric value into a list row cell.
    fn set_row_numeric(&mut self, list: ListJoin, slot: u16, column: u16, value: u16);

    /// Set the number of revealed rows in a list region.
    fn set_list_count(&mut self, list: ListJoin, count: u16);
}
