use crate::{
    control::{config::ControlConfig, state::Effect, unlock::UnlockControl},
    foundation::core::{TimeMs, TimerId},
    foundation::error::SlideResult,
    session::input::Input,
    timer::{clock::ManualClock, handle::Scheduler},
    view::ControlView,
};

/// A timer delivered by [`Session::advance_to`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TimerFiring {
    /// Deadline the timer fired at.
    pub at: TimeMs,
    /// Fired timer.
    pub timer: TimerId,
    /// What the control did with it.
    pub effect: Effect,
}

/// Host for one control on a simulated clock.
///
/// Routes input and timer firings to the control and models unmounting.
#[derive(Debug)]
pub struct Session {
    clock: ManualClock,
    control: Option<UnlockControl>,
}

impl Session {
    /// Mount a new control built from `config`.
    pub fn new(config: ControlConfig, on_unlock: impl FnMut() + 'static) -> SlideResult<Self> {
        Ok(Self {
            clock: ManualClock::new(),
            control: Some(UnlockControl::new(config, on_unlock)?),
        })
    }

    /// Current simulated time.
    pub fn now(&self) -> TimeMs {
        self.clock.now()
    }

    /// The mounted control, if any.
    pub fn control(&self) -> Option<&UnlockControl> {
        self.control.as_ref()
    }

    /// Whether a control is mounted.
    pub fn is_mounted(&self) -> bool {
        self.control.is_some()
    }

    /// Timers that are still going to fire.
    pub fn pending_timers(&self) -> usize {
        self.clock.pending()
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<TimeMs> {
        self.clock.next_deadline()
    }

    /// Deliver one input at the current time. Input after unmount is ignored.
    pub fn dispatch(&mut self, input: &Input) -> Effect {
        if let Input::Unmount = input {
            self.unmount();
            return Effect::Ignore;
        }
        let Some(control) = self.control.as_mut() else {
            tracing::debug!(?input, "input after unmount ignored");
            return Effect::Ignore;
        };
        match input {
            Input::DragMove { dx } => {
                control.drag_move(*dx);
                Effect::Ignore
            }
            Input::DragRelease => control.drag_release(&mut self.clock),
            Input::KeyDown { key } => control.key_down(*key, &mut self.clock),
            Input::Unmount => Effect::Ignore,
        }
    }

    /// Fire every timer due by `t`, each at its own deadline, then move the clock to `t`.
    pub fn advance_to(&mut self, t: TimeMs) -> Vec<TimerFiring> {
        let mut fired = Vec::new();
        while let Some(timer) = self.clock.pop_due(t) {
            let at = self.clock.now();
            let effect = match self.control.as_mut() {
                Some(control) => control.on_timer(timer, &mut self.clock),
                None => Effect::Ignore,
            };
            fired.push(TimerFiring { at, timer, effect });
        }
        self.clock.advance_to(t);
        fired
    }

    /// [`Self::advance_to`] relative to now.
    pub fn advance_by(&mut self, ms: u64) -> Vec<TimerFiring> {
        let t = self.clock.now().after(ms);
        self.advance_to(t)
    }

    /// Tear the control down. Returns false if nothing was mounted.
    pub fn unmount(&mut self) -> bool {
        match self.control.take() {
            Some(control) => {
                tracing::info!(at = self.clock.now().0, "control unmounted");
                control.teardown();
                true
            }
            None => false,
        }
    }

    /// Snapshot of the mounted control at the current time.
    pub fn view(&self) -> Option<ControlView> {
        self.control
            .as_ref()
            .map(|c| ControlView::capture(c, self.clock.now()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/host.rs"]
mod tests;
