use super::*;
use crate::control::key::Key;

fn step(at_ms: u64, input: Input) -> ScriptStep {
    ScriptStep { at_ms, input }
}

fn drag_unlock_script() -> Script {
    Script {
        config: ControlConfig::default(),
        steps: vec![
            step(0, Input::DragMove { dx: 200.0 }),
            step(50, Input::DragMove { dx: 200.0 }),
            step(100, Input::DragRelease),
        ],
    }
}

#[test]
fn out_of_order_steps_are_rejected() {
    let script = Script {
        config: ControlConfig::default(),
        steps: vec![step(10, Input::DragRelease), step(5, Input::DragRelease)],
    };
    let err = script.validate().unwrap_err();
    assert!(matches!(err, SlideError::Script(_)));
    assert!(err.to_string().contains("step 1 at 5 ms"));
}

#[test]
fn json_script_parses_with_default_config() {
    let script = Script::from_json_str(
        r#"{
            "steps": [
                { "at_ms": 0, "input": { "type": "drag_move", "dx": 340 } },
                { "at_ms": 10, "input": { "type": "drag_release" } },
                { "at_ms": 20, "input": { "type": "key_down", "key": "Enter" } },
                { "at_ms": 30, "input": { "type": "key_down", "key": "F5" } },
                { "at_ms": 40, "input": { "type": "unmount" } }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(script.config, ControlConfig::default());
    assert_eq!(script.steps.len(), 5);
    assert_eq!(script.steps[0].input, Input::DragMove { dx: 340.0 });
    assert_eq!(script.steps[3].input, Input::KeyDown { key: Key::Other });
}

#[test]
fn replay_runs_until_timers_drain() {
    let out = replay(&drag_unlock_script(), None).unwrap();
    let trace = out.trace;
    assert_eq!(trace.len(), 4);

    let release = &trace[2];
    assert_eq!(release.effect, Effect::Unlock { arm_reset: true });
    assert_eq!(release.state, Some(UnlockState::Unlocked));
    assert_eq!(release.unlocks, 1);

    let relock = &trace[3];
    assert!(matches!(relock.event, TraceEvent::Timer { .. }));
    assert_eq!(relock.at_ms, 1_100);
    assert_eq!(relock.state, Some(UnlockState::Locked));
    assert_eq!(relock.position, Some(0.0));
    assert_eq!(relock.unlocks, 1);
    assert_eq!(out.session.now(), TimeMs(1_100));
}

#[test]
fn replay_until_stops_the_clock() {
    let out = replay(&drag_unlock_script(), Some(TimeMs(600))).unwrap();
    assert_eq!(out.trace.len(), 3);
    assert_eq!(out.session.now(), TimeMs(600));
    assert_eq!(
        out.session.control().unwrap().state(),
        UnlockState::Unlocked
    );
}

#[test]
fn replay_until_skips_later_steps() {
    let out = replay(&drag_unlock_script(), Some(TimeMs(60))).unwrap();
    assert_eq!(out.trace.len(), 2);
    assert_eq!(out.trace[1].progress_percent, Some(100));
}

#[test]
fn unmount_mid_reset_leaves_no_timer_entry() {
    let mut script = drag_unlock_script();
    script.steps.push(step(500, Input::Unmount));
    let out = replay(&script, None).unwrap();

    let last = out.trace.last().unwrap();
    assert!(matches!(last.event, TraceEvent::Input { input: Input::Unmount }));
    assert_eq!(last.state, None);
    assert_eq!(last.unlocks, 1);
    assert!(
        !out.trace
            .iter()
            .any(|e| matches!(e.event, TraceEvent::Timer { .. }))
    );
}

#[test]
fn trace_serializes_as_tagged_json() {
    let out = replay(&drag_unlock_script(), None).unwrap();
    let json = serde_json::to_value(&out.trace[2]).unwrap();
    assert_eq!(json["event"]["kind"], "input");
    assert_eq!(json["event"]["input"]["type"], "drag_release");
    assert_eq!(json["state"], "Unlocked");
}
