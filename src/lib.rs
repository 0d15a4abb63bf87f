//! slidelock is a headless slide-to-unlock control.
//!
//! The control tracks a horizontal drag, decides on release whether the handle
//! crossed the unlock threshold, invokes a caller-supplied callback once per unlock,
//! and re-locks itself after a fixed delay.
//!
//! # Layers
//!
//! 1. **State machine**: [`step`] is the pure transition table over [`UnlockState`].
//! 2. **Control**: [`UnlockControl`] owns position, state and the re-lock [`TimerHandle`].
//! 3. **Scheduling**: [`Scheduler`] is the time seam; [`ManualClock`] simulates it.
//! 4. **Presentation**: [`ControlView`] snapshots, [`render_view`] rasterizes them.
//! 5. **Hosting**: [`Session`] mounts a control on a clock; [`replay`] drives a [`Script`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: time only advances through the scheduler, so every gesture
//!   replays identically.
//! - **No stray timers**: dropping a control cancels its pending re-lock.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod control;
mod foundation;
mod render;
mod session;
mod timer;
mod view;

pub use animation::ease::Ease;
pub use animation::snap::Snap;
pub use control::config::{
    ControlConfig, DEFAULT_HANDLE_WIDTH, DEFAULT_LABEL, DEFAULT_RELEASE_THRESHOLD,
    DEFAULT_RESET_DELAY_MS, DEFAULT_SNAP_MS, DEFAULT_TRACK_WIDTH,
};
pub use control::key::Key;
pub use control::state::{Effect, Step, Trigger, UnlockState, step};
pub use control::unlock::UnlockControl;
pub use foundation::core::{Point, Rect, Rgba8, TimeMs, TimerId, Vec2};
pub use foundation::error::{SlideError, SlideResult};
pub use render::cpu::{FrameRGBA, RenderSettings, render_view};
pub use render::png::write_png;
pub use session::host::{Session, TimerFiring};
pub use session::input::Input;
pub use session::script::{Replay, Script, ScriptStep, TraceEntry, TraceEvent, replay};
pub use timer::clock::ManualClock;
pub use timer::handle::{Scheduler, TimerHandle};
pub use view::{ACTIVE_TINT, AriaSlider, ControlView, IDLE_TINT};
