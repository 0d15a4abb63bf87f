use crate::{
    animation::snap::Snap,
    control::{
        config::ControlConfig,
        key::Key,
        state::{Effect, Trigger, UnlockState, step},
    },
    foundation::core::{TimeMs, TimerId},
    foundation::error::SlideResult,
    timer::handle::{Scheduler, TimerHandle},
};

/// Slide-to-unlock control.
///
/// Owns the drag position, the unlock state machine and the re-lock timer. Input
/// outside the `Locked` state is ignored, so the callback fires at most once per
/// gesture. Dropping the control (or calling [`UnlockControl::teardown`]) cancels a
/// pending re-lock.
pub struct UnlockControl {
    config: ControlConfig,
    track_length: f64,
    position: f64,
    state: UnlockState,
    snap: Snap,
    reset: Option<TimerHandle>,
    unlocks: u64,
    on_unlock: Box<dyn FnMut()>,
}

impl std::fmt::Debug for UnlockControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnlockControl")
            .field("state", &self.state)
            .field("position", &self.position)
            .field("track_length", &self.track_length)
            .field("reset", &self.reset)
            .field("unlocks", &self.unlocks)
            .finish_non_exhaustive()
    }
}

impl UnlockControl {
    /// Validate `config` and build a locked control at position 0.
    pub fn new(config: ControlConfig, on_unlock: impl FnMut() + 'static) -> SlideResult<Self> {
        config.validate()?;
        let track_length = config.track_length();
        if track_length == 0.0 {
            tracing::warn!(
                track_width = config.track_width,
                handle_width = config.handle_width,
                "handle fills the track; drag gestures cannot unlock"
            );
        }
        Ok(Self {
            config,
            track_length,
            position: 0.0,
            state: UnlockState::Locked,
            snap: Snap::settled(0.0),
            reset: None,
            unlocks: 0,
            on_unlock: Box::new(on_unlock),
        })
    }

    /// Control with the default geometry and label.
    pub fn with_defaults(on_unlock: impl FnMut() + 'static) -> Self {
        let config = ControlConfig::default();
        let track_length = config.track_length();
        Self {
            config,
            track_length,
            position: 0.0,
            state: UnlockState::Locked,
            snap: Snap::settled(0.0),
            reset: None,
            unlocks: 0,
            on_unlock: Box::new(on_unlock),
        }
    }

    /// Configuration the control was built with.
    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// Current resting state.
    pub fn state(&self) -> UnlockState {
        self.state
    }

    /// Logical handle offset in `[0, track_length]`.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Travel available to the handle.
    pub fn track_length(&self) -> f64 {
        self.track_length
    }

    /// Number of times the callback has fired.
    pub fn unlock_count(&self) -> u64 {
        self.unlocks
    }

    /// Deadline of the armed re-lock, if any.
    pub fn reset_deadline(&self) -> Option<TimeMs> {
        self.reset
            .as_ref()
            .filter(|h| h.is_pending())
            .map(TimerHandle::deadline)
    }

    /// `position / track_length`, or 0 for a degenerate track.
    pub fn progress_fraction(&self) -> f64 {
        fraction(self.position, self.track_length)
    }

    /// Progress rounded to an integer percentage in `[0, 100]`.
    pub fn progress_percent(&self) -> u8 {
        (self.progress_fraction() * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// Label to display; empty while unlocked.
    pub fn label(&self) -> &str {
        match self.state {
            UnlockState::Unlocked => "",
            _ => &self.config.display_label,
        }
    }

    /// Handle offset a presentation layer should draw at `now`.
    pub fn visual_offset(&self, now: TimeMs) -> f64 {
        self.snap.sample(now).clamp(0.0, self.track_length)
    }

    /// [`Self::visual_offset`] normalized to `[0, 1]`.
    pub fn visual_fraction(&self, now: TimeMs) -> f64 {
        fraction(self.visual_offset(now), self.track_length)
    }

    /// Move the handle by `dx`, clamped to the track. Only honored while locked.
    pub fn drag_move(&mut self, dx: f64) {
        if self.state != UnlockState::Locked {
            tracing::trace!(state = ?self.state, "drag move ignored");
            return;
        }
        if !dx.is_finite() {
            tracing::warn!(dx, "ignoring non-finite drag delta");
            return;
        }
        self.position = (self.position + dx).clamp(0.0, self.track_length);
        self.snap = Snap::settled(self.position);
    }

    /// End a drag: unlock if the handle is past the threshold, otherwise snap back.
    pub fn drag_release(&mut self, sched: &mut dyn Scheduler) -> Effect {
        let crossed = self.crosses_threshold();
        tracing::debug!(position = self.position, crossed, "drag released");
        self.apply(Trigger::Release { crossed }, sched)
    }

    /// Keyboard unlock. Same as a successful release but arms no re-lock.
    pub fn activate_via_keyboard(&mut self, sched: &mut dyn Scheduler) -> Effect {
        self.apply(Trigger::Activate, sched)
    }

    /// Route a key press; only activation keys do anything.
    pub fn key_down(&mut self, key: Key, sched: &mut dyn Scheduler) -> Effect {
        if !key.activates() {
            tracing::trace!(?key, "key ignored");
            return Effect::Ignore;
        }
        self.activate_via_keyboard(sched)
    }

    /// Deliver a fired timer. Ids other than the armed re-lock are stale and ignored.
    pub fn on_timer(&mut self, id: TimerId, sched: &mut dyn Scheduler) -> Effect {
        match self.reset.take_if(|h| h.id() == id) {
            Some(_fired) => self.apply(Trigger::ResetDue, sched),
            None => {
                tracing::debug!(timer = id.0, "stale timer ignored");
                Effect::Ignore
            }
        }
    }

    /// Unmount. Cancels the pending re-lock; nothing fires afterwards.
    pub fn teardown(mut self) {
        if let Some(handle) = self.reset.take() {
            tracing::debug!(timer = handle.id().0, "teardown cancels pending re-lock");
            handle.cancel();
        }
    }

    fn crosses_threshold(&self) -> bool {
        self.position > 0.0 && self.position > self.track_length - self.config.release_threshold
    }

    fn apply(&mut self, trigger: Trigger, sched: &mut dyn Scheduler) -> Effect {
        let outcome = step(self.state, trigger);
        for &next in outcome.path {
            tracing::debug!(from = ?self.state, to = ?next, ?trigger, "state transition");
            self.state = next;
        }

        let now = sched.now();
        match outcome.effect {
            Effect::Unlock { arm_reset } => {
                self.snap_to(self.track_length, now);
                self.unlocks += 1;
                tracing::info!(unlocks = self.unlocks, arm_reset, "unlocked");
                (self.on_unlock)();
                if arm_reset {
                    self.arm_reset(sched);
                }
            }
            Effect::SnapBack | Effect::Relock => self.snap_to(0.0, now),
            Effect::Ignore => {
                tracing::trace!(state = ?self.state, ?trigger, "trigger ignored");
            }
        }
        outcome.effect
    }

    fn snap_to(&mut self, target: f64, now: TimeMs) {
        self.snap = Snap {
            from: self.snap.sample(now),
            to: target,
            start: now,
            duration_ms: self.config.snap_ms,
            ease: self.config.snap_ease,
        };
        self.position = target;
    }

    // At most one re-lock is pending: arming again restarts it.
    fn arm_reset(&mut self, sched: &mut dyn Scheduler) {
        if let Some(prev) = self.reset.take() {
            prev.cancel();
        }
        let handle = sched.schedule(self.config.reset_delay_ms);
        tracing::debug!(
            timer = handle.id().0,
            at = handle.deadline().0,
            "re-lock armed"
        );
        self.reset = Some(handle);
    }
}

fn fraction(offset: f64, track_length: f64) -> f64 {
    if track_length <= 0.0 {
        return 0.0;
    }
    (offset / track_length).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/control/unlock.rs"]
mod tests;
