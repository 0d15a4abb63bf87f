//! Pure transition function of the unlock control.

/// Lifecycle state of an unlock control.
///
/// `Unlocking` and `Resetting` are pass-through: they are entered and left within a
/// single operation and show up only in transition logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum UnlockState {
    /// Idle; the handle can be dragged.
    Locked,
    /// Transient state between a successful gesture and `Unlocked`.
    Unlocking,
    /// Unlock fired; waiting for the re-lock (if one is armed).
    Unlocked,
    /// Transient state between the re-lock timer and `Locked`.
    Resetting,
}

/// Discrete event fed into [`step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Drag released; `crossed` is true when the handle was past the threshold.
    Release {
        /// Handle was past the unlock threshold.
        crossed: bool,
    },
    /// Keyboard activation.
    Activate,
    /// The armed re-lock timer fired.
    ResetDue,
}

/// What the control has to do after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Effect {
    /// Nothing changes.
    Ignore,
    /// Stay locked, return the handle to the start.
    SnapBack,
    /// Move the handle to the end and invoke the callback once.
    Unlock {
        /// Arm the automatic re-lock.
        arm_reset: bool,
    },
    /// Return the handle to the start after an unlock.
    Relock,
}

/// Result of [`step`]: the states entered, in order, and the effect to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// States entered, in order. Empty when the state does not change.
    pub path: &'static [UnlockState],
    /// Effect to apply once the path has been walked.
    pub effect: Effect,
}

const STAY: &[UnlockState] = &[];
const TO_UNLOCKED: &[UnlockState] = &[UnlockState::Unlocking, UnlockState::Unlocked];
const TO_LOCKED: &[UnlockState] = &[UnlockState::Resetting, UnlockState::Locked];

/// Transition table. Total over all `(state, trigger)` pairs.
pub fn step(state: UnlockState, trigger: Trigger) -> Step {
    use UnlockState::*;

    let (path, effect) = match (state, trigger) {
        (Locked, Trigger::Release { crossed: true }) => {
            (TO_UNLOCKED, Effect::Unlock { arm_reset: true })
        }
        (Locked, Trigger::Release { crossed: false }) => (STAY, Effect::SnapBack),
        // Keyboard unlocks do not arm the re-lock.
        (Locked, Trigger::Activate) => (TO_UNLOCKED, Effect::Unlock { arm_reset: false }),
        (Unlocked, Trigger::ResetDue) => (TO_LOCKED, Effect::Relock),
        _ => (STAY, Effect::Ignore),
    };
    Step { path, effect }
}

#[cfg(test)]
#[path = "../../tests/unit/control/state.rs"]
mod tests;
