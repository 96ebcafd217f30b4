//! Game action definitions
//!
//! Fixed bindings, no rebinding.
//!
//! Keyboard:
//! - A / Left = MoveLeft, D / Right = MoveRight
//! - Space = Jump, Left Shift = Dash, J = Attack
//! - F3 = ToggleDebug
//!
//! Gamepad (Xbox labels):
//! - Left stick / D-pad = move
//! - A = Jump, B = Dash, X or RB = Attack
//! - Select = ToggleDebug

/// All actions the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Dash,
    Attack,
    ToggleDebug,
}
