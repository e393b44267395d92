//! Capacity-bounded dynamic content lists.
//!
//! A list binds one list region to an ordered set of rows. Building a
//! list is two-phase: rows are added (content written, command attached)
//! without being revealed, then [`DynamicList::set_count`] reveals exactly
//! the first `n` in one write — so an incrementally built list never
//! partially renders.

use paneldeck_core::{ListJoin, SignalSink};
use tracing::warn;

use crate::command::PanelCommand;

/// One row to append to a list.
#[derive(Debug, Clone, Default)]
pub struct ListRow {
    /// Command fired when the row is pressed and released. `None` for
    /// display-only rows.
    pub command: Option<PanelCommand>,
    /// String cells as (column, value).
    pub strings: Vec<(u16, String)>,
    /// Boolean cells as (column, value).
    pub bools: Vec<(u16, bool)>,
}

impl ListRow {
    /// Row that fires `command` on release.
    pub fn pressable(command: PanelCommand) -> Self {
        Self { command: Some(command), ..Self::default() }
    }

    /// Attach a string cell.
    #[must_use]
    pub fn with_string(mut self, column: u16, value: impl Into<String>) -> Self {
        self.strings.push((column, value.into()));
        self
    }

    /// Attach a boolean cell.
    #[must_use]
    pub fn with_bool(mut self, column: u16, value: bool) -> Self {
        self.bools.push((column, value));
        self
    }
}

/// Ordered, capacity-bounded row collection bound to a list region.
#[derive(Debug)]
pub struct DynamicList {
    join: ListJoin,
    capacity: u16,
    bool_columns: u16,
    numeric_columns: u16,
    string_columns: u16,
    commands: Vec<Option<PanelCommand>>,
    revealed: u16,
}

impl DynamicList {
    /// Create a list bound to `join` with a fixed slot capacity and
    /// per-row cell counts (used to blank slots on clear).
    pub fn new(
        join: ListJoin,
        capacity: u16,
        bool_columns: u16,
        numeric_columns: u16,
        string_columns: u16,
    ) -> Self {
        Self {
            join,
            capacity,
            bool_columns,
            numeric_columns,
            string_columns,
            commands: Vec::new(),
            revealed: 0,
        }
    }

    /// The bound list region.
    pub fn join(&self) -> ListJoin {
        self.join
    }

    /// Detach every row command and visually empty all slots up to
    /// capacity. The revealed count drops to zero before any repopulation
    /// can begin.
    pub fn clear(&mut self, sink: &mut impl SignalSink) {
        self.commands.clear();
        self.revealed = 0;
        sink.set_list_count(self.join, 0);
        for slot in 0..self.capacity {
            for column in 1..=self.bool_columns {
                sink.set_row_bool(self.join, slot, column, false);
            }
            for column in 1..=self.numeric_columns {
                sink.set_row_numeric(self.join, slot, column, 0);
            }
            for column in 1..=self.string_columns {
                sink.set_row_string(self.join, slot, column, "");
            }
        }
    }

    /// Append a row without revealing it. Content cells are written to
    /// the row's slot immediately; the slot stays hidden until
    /// [`DynamicList::set_count`] reaches it. Rows beyond capacity are
    /// dropped with a warning, never a panic.
    pub fn add_item(&mut self, sink: &mut impl SignalSink, row: ListRow) {
        let slot = self.commands.len() as u16;
        if slot >= self.capacity {
            warn!(list = self.join.0, slot, capacity = self.capacity, "list over capacity, row dropped");
            return;
        }
        for (column, value) in &row.strings {
            sink.set_row_string(self.join, slot, *column, value);
        }
        for (column, value) in &row.bools {
            sink.set_row_bool(self.join, slot, *column, *value);
        }
        self.commands.push(row.command);
    }

    /// Reveal exactly the first `count` added rows and hide the rest.
    /// Clamped to the number of added rows and to capacity; the reported
    /// count can never exceed either.
    pub fn set_count(&mut self, sink: &mut impl SignalSink, count: u16) {
        let added = self.commands.len() as u16;
        self.revealed = count.min(added).min(self.capacity);
        sink.set_list_count(self.join, self.revealed);
    }

    /// Number of rows currently revealed.
    pub fn count(&self) -> u16 {
        self.revealed
    }

    /// Number of rows added since the last clear.
    pub fn added(&self) -> u16 {
        self.commands.len() as u16
    }

    /// Fixed slot capacity.
    pub fn capacity(&self) -> u16 {
        self.capacity
    }

    /// Command for a pressed row. Hidden rows never fire: only slots
    /// below the revealed count resolve.
    pub fn command_at(&self, slot: u16) -> Option<PanelCommand> {
        if slot >= self.revealed {
            return None;
        }
        self.commands.get(slot as usize)?.clone()
    }

    /// Owner-settable per-row boolean feedback.
    pub fn set_row_bool(&self, sink: &mut impl SignalSink, slot: u16, column: u16, value: bool) {
        sink.set_row_bool(self.join, slot, column, value);
    }

    /// Owner-settable per-row string feedback.
    pub fn set_row_string(&self, sink: &mut impl SignalSink, slot: u16, column: u16, value: &str) {
        sink.set_row_string(self.join, slot, column, value);
    }

    /// Owner-settable per-row numeric feedback.
    pub fn set_row_numeric(&self, sink: &mut impl SignalSink, slot: u16, column: u16, value: u16) {
        sink.set_row_numeric(self.join, slot, column, value);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use paneldeck_core::{BoolJoin, NumericJoin, StringJoin};

    use super::*;

    #[derive(Default)]
    struct TestSink {
        counts: HashMap<ListJoin, u16>,
        row_strings: HashMap<(ListJoin, u16, u16), String>,
        row_bools: HashMap<(ListJoin, u16, u16), bool>,
    }

    impl SignalSink for TestSink {
        fn set_bool(&mut self, _: BoolJoin, _: bool) {}
        fn set_string(&mut self, _: StringJoin, _: &str) {}
        fn set_numeric(&mut self, _: NumericJoin, _: u16) {}
        fn set_row_bool(&mut self, list: ListJoin, slot: u16, column: u16, value: bool) {
            self.row_bools.insert((list, slot, column), value);
        }
        fn set_row_string(&mut self, list: ListJoin, slot: u16, column: u16, value: &str) {
            self.row_strings.insert((list, slot, column), value.to_string());
        }
        fn set_row_numeric(&mut self, _: ListJoin, _: u16, _: u16, _: u16) {}
        fn set_list_count(&mut self, list: ListJoin, count: u16) {
            self.counts.insert(list, count);
        }
    }

    const LIST: ListJoin = ListJoin(900);

    fn row(label: &str) -> ListRow {
        ListRow::pressable(PanelCommand::ClosePopup).with_string(1, label)
    }

    #[test]
    fn populate_then_reveal() {
        let mut sink = TestSink::default();
        let mut list = DynamicList::new(LIST, 5, 1, 0, 1);

        list.add_item(&mut sink, row("a"));
        list.add_item(&mut sink, row("b"));
        assert_eq!(sink.counts.get(&LIST), None, "no reveal before set_count");

        list.set_count(&mut sink, 2);
        assert_eq!(sink.counts.get(&LIST), Some(&2));
        assert_eq!(sink.row_strings.get(&(LIST, 0, 1)).map(String::as_str), Some("a"));
    }

    #[test]
    fn count_never_exceeds_capacity_or_added() {
        let mut sink = TestSink::default();
        let mut list = DynamicList::new(LIST, 3, 1, 0, 1);

        for label in ["a", "b", "c", "d", "e"] {
            list.add_item(&mut sink, row(label));
        }
        assert_eq!(list.added(), 3, "rows beyond capacity are dropped");

        list.set_count(&mut sink, 10);
        assert_eq!(list.count(), 3);
        assert_eq!(sink.counts.get(&LIST), Some(&3));
    }

    #[test]
    fn clear_detaches_commands_and_blanks_slots() {
        let mut sink = TestSink::default();
        let mut list = DynamicList::new(LIST, 3, 1, 0, 1);

        list.add_item(&mut sink, row("a"));
        list.set_count(&mut sink, 1);
        assert!(list.command_at(0).is_some());

        list.clear(&mut sink);
        assert_eq!(list.command_at(0), None);
        assert_eq!(sink.counts.get(&LIST), Some(&0));
        assert_eq!(sink.row_strings.get(&(LIST, 0, 1)).map(String::as_str), Some(""));
        assert_eq!(sink.row_bools.get(&(LIST, 2, 1)), Some(&false));
    }

    #[test]
    fn hidden_rows_never_fire() {
        let mut sink = TestSink::default();
        let mut list = DynamicList::new(LIST, 5, 1, 0, 1);

        list.add_item(&mut sink, row("a"));
        list.add_item(&mut sink, row("b"));
        list.set_count(&mut sink, 1);

        assert!(list.command_at(0).is_some());
        assert_eq!(list.command_at(1), None, "populated but unrevealed");
        assert_eq!(list.command_at(4), None, "empty slot");
    }
}
