use crate::{animation::ease::Ease, foundation::core::TimeMs};

/// An eased move of the visual handle offset from `from` to `to`.
///
/// Snaps are purely visual: the control's logical position jumps to `to` at `start`,
/// and the snap only describes how a presentation layer gets there.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Snap {
    /// Offset at `start`.
    pub from: f64,
    /// Offset once the snap completes.
    pub to: f64,
    /// Time the snap began.
    pub start: TimeMs,
    /// Length of the snap; zero means "jump".
    pub duration_ms: u64,
    /// Curve applied over the duration.
    pub ease: Ease,
}

impl Snap {
    /// A snap that has already settled at `at`.
    pub fn settled(at: f64) -> Self {
        Self {
            from: at,
            to: at,
            start: TimeMs(0),
            duration_ms: 0,
            ease: Ease::Linear,
        }
    }

    /// Sampled offset at `now`. Times before `start` hold `from`.
    pub fn sample(&self, now: TimeMs) -> f64 {
        if now < self.start {
            return self.from;
        }
        if self.duration_ms == 0 {
            return self.to;
        }
        let elapsed = now.since(self.start);
        if elapsed >= self.duration_ms {
            return self.to;
        }
        let t = (elapsed as f64) / (self.duration_ms as f64);
        let te = self.ease.apply(t);
        self.from + (self.to - self.from) * te
    }

    /// Whether the snap has reached `to` at `now`.
    pub fn is_done(&self, now: TimeMs) -> bool {
        now.since(self.start) >= self.duration_ms && now >= self.start
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/snap.rs"]
mod tests;
