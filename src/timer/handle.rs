use std::{cell::Cell, rc::Rc};

use crate::foundation::core::{TimeMs, TimerId};

/// Source of time and one-shot timers for a control.
///
/// Implementations deliver a fired timer by id to whoever owns the matching
/// [`TimerHandle`]; a timer whose handle was cancelled or dropped never fires.
pub trait Scheduler {
    /// Current time.
    fn now(&self) -> TimeMs;

    /// Schedule a one-shot timer `delay_ms` from now.
    fn schedule(&mut self, delay_ms: u64) -> TimerHandle;
}

/// Owned reference to one pending timer. Dropping it cancels the timer.
#[derive(Debug)]
pub struct TimerHandle {
    id: TimerId,
    deadline: TimeMs,
    live: Rc<Cell<bool>>,
}

impl TimerHandle {
    pub(crate) fn new(id: TimerId, deadline: TimeMs, live: Rc<Cell<bool>>) -> Self {
        Self { id, deadline, live }
    }

    /// Timer id as reported by the scheduler when it fires.
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// When the timer is due.
    pub fn deadline(&self) -> TimeMs {
        self.deadline
    }

    /// True until the timer fires or is cancelled.
    pub fn is_pending(&self) -> bool {
        self.live.get()
    }

    /// Cancel explicitly. Equivalent to dropping the handle.
    pub fn cancel(self) {
        tracing::trace!(timer = self.id.0, "timer cancelled");
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.live.set(false);
    }
}
