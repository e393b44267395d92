//! Cooperative timers.
//!
//! Timers here are not threads: they are purpose-keyed deadline entries
//! drained by the owner's serial [`tick`](Timers::tick) pump, so a firing
//! timer re-enters the same event context as every other input. Starting
//! a purpose replaces any live entry of the same purpose — there is never
//! more than one meeting poll or one ribbon auto-hide in flight.

use paneldeck_core::Millis;

/// What a timer entry is for. One live entry per purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPurpose {
    /// Periodic meeting list refresh and popup evaluation.
    MeetingPoll,
    /// Auto-hide for the notification ribbon.
    RibbonAutoHide,
}

#[derive(Debug)]
struct TimerEntry {
    purpose: TimerPurpose,
    deadline: Millis,
    period: Option<Millis>,
}

/// Purpose-keyed set of cooperative timer entries.
#[derive(Debug, Default)]
pub struct Timers {
    entries: Vec<TimerEntry>,
}

impl Timers {
    /// Create an empty timer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a one-shot timer due at `now + delay`, replacing any live
    /// entry of the same purpose.
    pub fn start_oneshot(&mut self, purpose: TimerPurpose, now: Millis, delay: Millis) {
        self.stop(purpose);
        self.entries.push(TimerEntry { purpose, deadline: now.saturating_add(delay), period: None });
    }

    /// Arm a repeating timer with the first fire due immediately,
    /// replacing any live entry of the same purpose.
    pub fn start_repeating(&mut self, purpose: TimerPurpose, now: Millis, period: Millis) {
        self.stop(purpose);
        self.entries.push(TimerEntry { purpose, deadline: now, period: Some(period) });
    }

    /// Cancel the entry for `purpose`, if armed.
    pub fn stop(&mut self, purpose: TimerPurpose) {
        self.entries.retain(|entry| entry.purpose != purpose);
    }

    /// Whether `purpose` has a live entry.
    pub fn is_running(&self, purpose: TimerPurpose) -> bool {
        self.entries.iter().any(|entry| entry.purpose == purpose)
    }

    /// Earliest pending deadline, for pump scheduling.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Fire every entry whose deadline has passed. One-shot entries are
    /// removed; repeating entries re-arm relative to `now` so a stalled
    /// pump cannot cause a burst of catch-up fires.
    pub fn tick(&mut self, now: Millis) -> Vec<TimerPurpose> {
        let mut fired = Vec::new();
        self.entries.retain_mut(|entry| {
            if entry.deadline > now {
                return true;
            }
            fired.push(entry.purpose);
            match entry.period {
                Some(period) => {
                    entry.deadline = now.saturating_add(period);
                    true
                },
                None => false,
            }
        });
        fired
    }
}
