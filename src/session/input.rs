use crate::control::key::Key;

/// One discrete event delivered to a mounted control.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Input {
    /// Pointer moved horizontally while dragging the handle.
    DragMove {
        /// Horizontal delta in pixels.
        dx: f64,
    },
    /// Pointer released.
    DragRelease,
    /// Key pressed while the handle has focus.
    KeyDown {
        /// Pressed key.
        key: Key,
    },
    /// Remove the control from the view.
    Unmount,
}
