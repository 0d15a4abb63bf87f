use std::{cell::Cell, collections::BTreeMap, rc::Rc};

use crate::{
    foundation::core::{TimeMs, TimerId},
    timer::handle::{Scheduler, TimerHandle},
};

/// Deterministic simulated clock.
///
/// Time only moves when the host says so. Due timers are handed out one at a time by
/// [`ManualClock::pop_due`] so that each firing is observed at its own deadline.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: TimeMs,
    next_id: u64,
    queue: BTreeMap<(TimeMs, TimerId), Rc<Cell<bool>>>, // (deadline, id) orders ties by scheduling
}

impl ManualClock {
    /// A clock at `TimeMs(0)` with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers that are still going to fire.
    pub fn pending(&self) -> usize {
        self.queue.values().filter(|live| live.get()).count()
    }

    /// Earliest deadline among live timers.
    pub fn next_deadline(&self) -> Option<TimeMs> {
        self.queue
            .iter()
            .find(|(_, live)| live.get())
            .map(|((deadline, _), _)| *deadline)
    }

    /// Fire the next live timer due at or before `until`, moving `now` to its deadline.
    ///
    /// Cancelled entries met on the way are discarded.
    pub fn pop_due(&mut self, until: TimeMs) -> Option<TimerId> {
        loop {
            let entry = self.queue.first_entry()?;
            if entry.key().0 > until {
                return None;
            }
            let ((deadline, id), live) = entry.remove_entry();
            if !live.get() {
                continue;
            }
            live.set(false);
            self.now = self.now.max(deadline);
            tracing::trace!(timer = id.0, at = deadline.0, "timer fired");
            return Some(id);
        }
    }

    /// Move `now` forward to `t`. Never moves backward and never fires anything.
    pub fn advance_to(&mut self, t: TimeMs) {
        self.now = self.now.max(t);
    }
}

impl Scheduler for ManualClock {
    fn now(&self) -> TimeMs {
        self.now
    }

    fn schedule(&mut self, delay_ms: u64) -> TimerHandle {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let deadline = self.now.after(delay_ms);
        let live = Rc::new(Cell::new(true));
        self.queue.insert((deadline, id), Rc::clone(&live));
        tracing::trace!(timer = id.0, at = deadline.0, "timer scheduled");
        TimerHandle::new(id, deadline, live)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timer/clock.rs"]
mod tests;
