use crate::{
    animation::ease::Ease,
    foundation::error::{SlideError, SlideResult},
};

/// Default track width in pixels.
pub const DEFAULT_TRACK_WIDTH: f64 = 400.0;
/// Default handle width (and track height) in pixels.
pub const DEFAULT_HANDLE_WIDTH: f64 = 60.0;
/// Default label shown while locked.
pub const DEFAULT_LABEL: &str = "Slide To Unlock";
/// Default margin from full travel that still counts as an unlock.
pub const DEFAULT_RELEASE_THRESHOLD: f64 = 20.0;
/// Default delay before a drag unlock re-locks.
pub const DEFAULT_RESET_DELAY_MS: u64 = 1_000;
/// Default duration of a visual handle snap.
pub const DEFAULT_SNAP_MS: u64 = 250;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Construction inputs of an [`crate::UnlockControl`].
///
/// Every field is optional in JSON and falls back to the defaults above.
pub struct ControlConfig {
    /// Total track width.
    pub track_width: f64,
    /// Handle width; the track is as tall as the handle is wide.
    pub handle_width: f64,
    /// Label shown on the track while not unlocked.
    pub display_label: String,
    /// A release unlocks when `position > track_length - release_threshold`.
    pub release_threshold: f64,
    /// Delay between a drag unlock and the automatic re-lock.
    pub reset_delay_ms: u64,
    /// Duration of the visual snap after release, unlock and re-lock.
    pub snap_ms: u64,
    /// Easing of the visual snap.
    pub snap_ease: Ease,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            track_width: DEFAULT_TRACK_WIDTH,
            handle_width: DEFAULT_HANDLE_WIDTH,
            display_label: DEFAULT_LABEL.to_owned(),
            release_threshold: DEFAULT_RELEASE_THRESHOLD,
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
            snap_ms: DEFAULT_SNAP_MS,
            snap_ease: Ease::OutCubic,
        }
    }
}

impl ControlConfig {
    /// Check numeric fields. Degenerate geometry (`handle_width >= track_width`) is valid.
    pub fn validate(&self) -> SlideResult<()> {
        for (name, value) in [
            ("track_width", self.track_width),
            ("handle_width", self.handle_width),
            ("release_threshold", self.release_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SlideError::validation(format!(
                    "{name} must be finite and >= 0",
                )));
            }
        }
        Ok(())
    }

    /// Horizontal travel available to the handle; zero for a degenerate track.
    pub fn track_length(&self) -> f64 {
        (self.track_width - self.handle_width).max(0.0)
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> SlideResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/control/config.rs"]
mod tests;
