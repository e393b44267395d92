//! Recording signal sink.

use std::collections::HashMap;

use paneldeck_core::{BoolJoin, ListJoin, NumericJoin, SignalSink, StringJoin};

/// Sink that stores the last value written to every join and list cell.
#[derive(Debug, Default)]
pub struct RecordingSink {
    bools: HashMap<BoolJoin, bool>,
    strings: HashMap<StringJoin, String>,
    numerics: HashMap<NumericJoin, u16>,
    row_bools: HashMap<(ListJoin, u16, u16), bool>,
    row_strings: HashMap<(ListJoin, u16, u16), String>,
    row_numerics: HashMap<(ListJoin, u16, u16), u16>,
    counts: HashMap<ListJoin, u16>,
}

impl RecordingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last boolean written to `join`; false if never written.
    pub fn bool_value(&self, join: BoolJoin) -> bool {
        self.bools.get(&join).copied().unwrap_or(false)
    }

    /// Last string written to `join`; empty if never written.
    pub fn string_value(&self, join: StringJoin) -> &str {
        self.strings.get(&join).map_or("", String::as_str)
    }

    /// Last numeric written to `join`; zero if never written.
    pub fn numeric_value(&self, join: NumericJoin) -> u16 {
        self.numerics.get(&join).copied().unwrap_or(0)
    }

    /// Last boolean written to a list cell.
    pub fn row_bool(&self, list: ListJoin, slot: u16, column: u16) -> bool {
        self.row_bools.get(&(list, slot, column)).copied().unwrap_or(false)
    }

    /// Last string written to a list cell.
    pub fn row_string(&self, list: ListJoin, slot: u16, column: u16) -> &str {
        self.row_strings.get(&(list, slot, column)).map_or("", String::as_str)
    }

    /// Last numeric written to a list cell.
    pub fn row_numeric(&self, list: ListJoin, slot: u16, column: u16) -> u16 {
        self.row_numerics.get(&(list, slot, column)).copied().unwrap_or(0)
    }

    /// Revealed row count of a list region.
    pub fn list_count(&self, list: ListJoin) -> u16 {
        self.counts.get(&list).copied().unwrap_or(0)
    }

    /// Number of boolean joins currently true.
    pub fn visible_bools(&self) -> usize {
        self.bools.values().filter(|v| **v).count()
    }
}

impl SignalSink for RecordingSink {
    fn set_bool(&mut self, join: BoolJoin, value: bool) {
        self.bools.insert(join, value);
    }

    fn set_string(&mut self, join: StringJoin, value: &str) {
        self.strings.insert(join, value.to_string());
    }

    fn set_numeric(&mut self, join: NumericJoin, value: u16) {
        self.numerics.insert(join, value);
    }

    fn set_row_bool(&mut self, list: ListJoin, slot: u16, column: u16, value: bool) {
        self.row_bools.insert((list, slot, column), value);
    }

    fn set_row_string(&mut self, list: ListJoin, slot: u16, column: u16, value: &str) {
        self.row_strings.insert((list, slot, column), value.to_string());
    }

    fn set_row_numeric(&mut self, list: ListJoin, slot: u16, column: u16, value: u16) {
        self.row_numerics.insert((list, slot, column), value);
    }

    fn set_list_count(&mut self, list: ListJoin, count: u16) {
        self.counts.insert(list, count);
    }
}
