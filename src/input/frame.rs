//! Per-frame input snapshot
//!
//! Collected once per frame by [`super::InputState::snapshot`] and handed to
//! the simulation, which never touches the keyboard or gamepad directly.

/// Held state of every gameplay action for one frame. The default is no
/// keys held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub dash: bool,
    pub attack: bool,
    /// Debug overlay toggle (edge-triggered, true only on the press frame)
    pub toggle_debug: bool,
}
