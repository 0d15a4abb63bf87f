use std::{cell::Cell, rc::Rc};

use crate::{
    control::{config::ControlConfig, state::Effect, state::UnlockState},
    foundation::core::{TimeMs, TimerId},
    foundation::error::{SlideError, SlideResult},
    session::{host::Session, input::Input},
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// A timed sequence of inputs replayed against a fresh control.
pub struct Script {
    /// Control configuration; defaults when omitted.
    #[serde(default)]
    pub config: ControlConfig,
    /// Steps in non-decreasing time order.
    pub steps: Vec<ScriptStep>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// One input at a point in simulated time.
pub struct ScriptStep {
    /// Time the input is delivered.
    pub at_ms: u64,
    /// The input.
    pub input: Input,
}

impl Script {
    /// Check the config and step ordering.
    pub fn validate(&self) -> SlideResult<()> {
        self.config.validate()?;
        for (i, pair) in self.steps.windows(2).enumerate() {
            if pair[1].at_ms < pair[0].at_ms {
                return Err(SlideError::script(format!(
                    "step {} at {} ms precedes step {} at {} ms",
                    i + 1,
                    pair[1].at_ms,
                    i,
                    pair[0].at_ms
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON script.
    pub fn from_json_str(s: &str) -> SlideResult<Self> {
        let script: Self = serde_json::from_str(s)?;
        script.validate()?;
        Ok(script)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// What produced a trace entry.
pub enum TraceEvent {
    /// A script step.
    Input {
        /// The delivered input.
        input: Input,
    },
    /// A timer firing.
    Timer {
        /// The fired timer.
        timer: TimerId,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Control state right after one event.
pub struct TraceEntry {
    /// Event time.
    pub at_ms: u64,
    /// The event.
    pub event: TraceEvent,
    /// Effect the control applied.
    pub effect: Effect,
    /// Resting state; `None` once unmounted.
    pub state: Option<UnlockState>,
    /// Logical position; `None` once unmounted.
    pub position: Option<f64>,
    /// Progress percentage; `None` once unmounted.
    pub progress_percent: Option<u8>,
    /// Callback invocations so far.
    pub unlocks: u64,
}

/// Outcome of [`replay`]: the trace and the session left at the final time.
#[derive(Debug)]
pub struct Replay {
    /// One entry per step and per timer firing, in time order.
    pub trace: Vec<TraceEntry>,
    /// Session after the last event.
    pub session: Session,
}

/// Replay `script` on a fresh session.
///
/// With `until`, steps after it are skipped and the clock stops at `until`. Without it,
/// the replay runs until no timer is pending.
#[tracing::instrument(skip(script), fields(steps = script.steps.len()))]
pub fn replay(script: &Script, until: Option<TimeMs>) -> SlideResult<Replay> {
    script.validate()?;

    let unlocks = Rc::new(Cell::new(0u64));
    let counter = Rc::clone(&unlocks);
    let mut session = Session::new(script.config.clone(), move || {
        counter.set(counter.get() + 1);
    })?;

    let mut trace = Vec::with_capacity(script.steps.len());
    for step in &script.steps {
        let at = TimeMs(step.at_ms);
        if until.is_some_and(|u| at > u) {
            break;
        }
        advance(&mut session, at, &unlocks, &mut trace);
        let effect = session.dispatch(&step.input);
        trace.push(entry(
            &session,
            at,
            TraceEvent::Input {
                input: step.input.clone(),
            },
            effect,
            unlocks.get(),
        ));
    }

    match until {
        Some(u) => advance(&mut session, u, &unlocks, &mut trace),
        None => {
            while let Some(deadline) = session.next_deadline() {
                advance(&mut session, deadline, &unlocks, &mut trace);
            }
        }
    }

    tracing::debug!(
        entries = trace.len(),
        unlocks = unlocks.get(),
        end = session.now().0,
        "replay finished"
    );
    Ok(Replay { trace, session })
}

fn advance(session: &mut Session, to: TimeMs, unlocks: &Cell<u64>, trace: &mut Vec<TraceEntry>) {
    for firing in session.advance_to(to) {
        trace.push(entry(
            session,
            firing.at,
            TraceEvent::Timer {
                timer: firing.timer,
            },
            firing.effect,
            unlocks.get(),
        ));
    }
}

fn entry(
    session: &Session,
    at: TimeMs,
    event: TraceEvent,
    effect: Effect,
    unlocks: u64,
) -> TraceEntry {
    let control = session.control();
    TraceEntry {
        at_ms: at.0,
        event,
        effect,
        state: control.map(|c| c.state()),
        position: control.map(|c| c.position()),
        progress_percent: control.map(|c| c.progress_percent()),
        unlocks,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/script.rs"]
mod tests;
