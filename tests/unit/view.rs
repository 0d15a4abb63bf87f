use super::*;
use crate::{control::config::ControlConfig, timer::clock::ManualClock};

#[test]
fn locked_view_shows_label_and_idle_tint() {
    let c = UnlockControl::with_defaults(|| {});
    let v = ControlView::capture(&c, TimeMs(0));

    assert_eq!(v.state, UnlockState::Locked);
    assert_eq!(v.label, "Slide To Unlock");
    assert_eq!(v.label_opacity, 1.0);
    assert_eq!(v.track, Rect::new(0.0, 0.0, 400.0, 60.0));
    assert_eq!(v.handle, Rect::new(0.0, 0.0, 60.0, 60.0));
    assert_eq!(v.track_tint, IDLE_TINT);
    assert_eq!(
        v.aria,
        AriaSlider {
            role: "slider",
            value_min: 0,
            value_max: 100,
            value_now: 0,
            focusable: true,
        }
    );
}

#[test]
fn unlocked_view_hides_label_once_snap_settles() {
    let mut clock = ManualClock::new();
    let mut c = UnlockControl::with_defaults(|| {});
    c.drag_move(400.0);
    c.drag_release(&mut clock);

    let v = ControlView::capture(&c, TimeMs(500));
    assert_eq!(v.state, UnlockState::Unlocked);
    assert_eq!(v.label, "");
    assert_eq!(v.label_opacity, 0.0);
    assert_eq!(v.aria.value_now, 100);
    assert_eq!(v.visual_offset, 340.0);
    assert_eq!(v.handle.x0, 340.0);
    assert_eq!(v.track_tint, ACTIVE_TINT);
}

#[test]
fn mid_drag_tint_is_between_endpoints() {
    let mut c = UnlockControl::with_defaults(|| {});
    c.drag_move(170.0);
    let v = ControlView::capture(&c, TimeMs(0));
    assert_eq!(v.aria.value_now, 50);
    assert!(v.track_tint.b > IDLE_TINT.b && v.track_tint.b < ACTIVE_TINT.b);
}

#[test]
fn degenerate_track_is_at_least_handle_sized() {
    let c = UnlockControl::new(
        ControlConfig {
            track_width: 10.0,
            ..ControlConfig::default()
        },
        || {},
    )
    .unwrap();
    let v = ControlView::capture(&c, TimeMs(0));
    assert_eq!(v.track.width(), 60.0);
    assert_eq!(v.progress_percent, 0);
}

#[test]
fn view_serializes_to_json() {
    let c = UnlockControl::with_defaults(|| {});
    let json = serde_json::to_value(ControlView::capture(&c, TimeMs(0))).unwrap();
    assert_eq!(json["state"], "Locked");
    assert_eq!(json["aria"]["role"], "slider");
    assert_eq!(json["label"], "Slide To Unlock");
}
