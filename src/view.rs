use crate::{
    control::{state::UnlockState, unlock::UnlockControl},
    foundation::core::{Rect, Rgba8, TimeMs},
};

/// Track tint at zero progress.
pub const IDLE_TINT: Rgba8 = Rgba8::from_hex(0x222222);
/// Track tint at full progress.
pub const ACTIVE_TINT: Rgba8 = Rgba8::from_hex(0x5e5ff5);

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Slider semantics exposed to assistive technology.
pub struct AriaSlider {
    /// Always `"slider"`.
    pub role: &'static str,
    /// Lower bound of `value_now`.
    pub value_min: u8,
    /// Upper bound of `value_now`.
    pub value_max: u8,
    /// Current progress percentage.
    pub value_now: u8,
    /// The handle takes keyboard focus.
    pub focusable: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything a presentation layer needs to draw the control at one instant.
pub struct ControlView {
    /// Snapshot time.
    pub at: TimeMs,
    /// Resting state.
    pub state: UnlockState,
    /// Logical handle offset.
    pub position: f64,
    /// Travel available to the handle.
    pub track_length: f64,
    /// Logical progress in `[0, 100]`.
    pub progress_percent: u8,
    /// Accessibility attributes.
    pub aria: AriaSlider,
    /// Label text; empty while unlocked.
    pub label: String,
    /// 0 while unlocked, otherwise 1.
    pub label_opacity: f64,
    /// Drawn handle offset (follows the snap animation).
    pub visual_offset: f64,
    /// Track bounds, origin at the top-left corner.
    pub track: Rect,
    /// Handle bounds at `visual_offset`.
    pub handle: Rect,
    /// Track fill, tinted by visual progress.
    pub track_tint: Rgba8,
}

impl ControlView {
    /// Snapshot `control` at `now`.
    pub fn capture(control: &UnlockControl, now: TimeMs) -> Self {
        let cfg = control.config();
        let side = cfg.handle_width;
        let offset = control.visual_offset(now);
        let progress = control.progress_percent();

        Self {
            at: now,
            state: control.state(),
            position: control.position(),
            track_length: control.track_length(),
            progress_percent: progress,
            aria: AriaSlider {
                role: "slider",
                value_min: 0,
                value_max: 100,
                value_now: progress,
                focusable: true,
            },
            label: control.label().to_owned(),
            label_opacity: if control.state() == UnlockState::Unlocked {
                0.0
            } else {
                1.0
            },
            visual_offset: offset,
            track: Rect::new(0.0, 0.0, cfg.track_width.max(side), side),
            handle: Rect::new(offset, 0.0, offset + side, side),
            track_tint: Rgba8::lerp(IDLE_TINT, ACTIVE_TINT, control.visual_fraction(now)),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/view.rs"]
mod tests;
