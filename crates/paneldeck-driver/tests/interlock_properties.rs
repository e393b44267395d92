//! Property tests for the interlock and dynamic list invariants.
//!
//! The interlock promises that no sequence of operations can leave more
//! than one region visible; the list promises its reported count can
//! never exceed capacity. Both are exercised under arbitrary operation
//! sequences rather than hand-picked scenarios.

use std::collections::HashMap;

use paneldeck_core::{BoolJoin, ListJoin, NumericJoin, SignalSink, StringJoin};
use paneldeck_driver::{DynamicList, Interlock, ListRow, PanelCommand};
use proptest::prelude::*;

/// Sink that tracks last-written values.
#[derive(Default)]
struct RecordingSink {
    bools: HashMap<BoolJoin, bool>,
    counts: HashMap<ListJoin, u16>,
}

impl RecordingSink {
    fn visible_regions(&self) -> usize {
        self.bools.values().filter(|v| **v).count()
    }
}

impl SignalSink for RecordingSink {
    fn set_bool(&mut self, join: BoolJoin, value: bool) {
        self.bools.insert(join, value);
    }
    fn set_string(&mut self, _: StringJoin, _: &str) {}
    fn set_numeric(&mut self, _: NumericJoin, _: u16) {}
    fn set_row_bool(&mut self, _: ListJoin, _: u16, _: u16, _: bool) {}
    fn set_row_string(&mut self, _: ListJoin, _: u16, _: u16, _: &str) {}
    fn set_row_numeric(&mut self, _: ListJoin, _: u16, _: u16, _: u16) {}
    fn set_list_count(&mut self, list: ListJoin, count: u16) {
        self.counts.insert(list, count);
    }
}

#[derive(Debug, Clone)]
enum InterlockOp {
    Show(u16),
    ShowWithToggle(u16),
    Hide,
    HideAndClear,
}

fn interlock_op() -> impl Strategy<Value = InterlockOp> {
    prop_oneof![
        (0u16..5).prop_map(InterlockOp::Show),
        (0u16..5).prop_map(InterlockOp::ShowWithToggle),
        Just(InterlockOp::Hide),
        Just(InterlockOp::HideAndClear),
    ]
}

proptest! {
    #[test]
    fn at_most_one_region_visible(ops in proptest::collection::vec(interlock_op(), 1..64)) {
        let mut sink = RecordingSink::default();
        let mut interlock = Interlock::new();

        for op in ops {
            match op {
                InterlockOp::Show(region) => interlock.show(&mut sink, BoolJoin(region)),
                InterlockOp::ShowWithToggle(region) => {
                    interlock.show_with_toggle(&mut sink, BoolJoin(region));
                },
                InterlockOp::Hide => interlock.hide(&mut sink),
                InterlockOp::HideAndClear => interlock.hide_and_clear(&mut sink),
            }
            // Invariant holds after every single operation
            prop_assert!(sink.visible_regions() <= 1);
            prop_assert_eq!(sink.visible_regions() == 1, interlock.is_visible());
        }
    }

    #[test]
    fn list_count_never_exceeds_capacity(
        capacity in 1u16..8,
        adds in 0usize..16,
        count_request in 0u16..32,
    ) {
        let mut sink = RecordingSink::default();
        let mut list = DynamicList::new(ListJoin(700), capacity, 1, 0, 1);

        for index in 0..adds {
            let row = ListRow::pressable(PanelCommand::ClosePopup)
                .with_string(1, format!("row {index}"));
            list.add_item(&mut sink, row);
        }
        list.set_count(&mut sink, count_request);

        prop_assert!(list.count() <= capacity);
        prop_assert!(list.count() <= adds as u16);
        prop_assert_eq!(sink.counts.get(&ListJoin(700)).copied(), Some(list.count()));

        // Clearing always detaches every slot's command
        list.clear(&mut sink);
        for slot in 0..capacity {
            prop_assert_eq!(list.command_at(slot), None);
        }
    }
}
