/// Keyboard keys the control distinguishes, named after DOM `KeyboardEvent.key` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Key {
    /// Activates the control.
    ArrowRight,
    /// Activates the control.
    Enter,
    /// Ignored.
    ArrowLeft,
    /// Ignored.
    Space,
    /// Ignored.
    Escape,
    /// Ignored.
    Tab,
    /// Any other key; ignored.
    #[serde(other)]
    Other,
}

impl Key {
    /// Whether pressing this key is a keyboard unlock.
    pub fn activates(self) -> bool {
        matches!(self, Self::ArrowRight | Self::Enter)
    }
}
