//! Input state management
//!
//! Polls the keyboard (macroquad) and gamepad, combining them into an
//! action-based API, and packs everything into one [`InputFrame`] per frame.

use macroquad::prelude::{is_key_down, is_key_pressed, KeyCode};
use super::gamepad::{button, is_set, Gamepad};
use super::{Action, InputFrame};

/// Stick deflection past which it counts as a held direction
const STICK_THRESHOLD: f32 = 0.5;

/// Unified input state that handles both keyboard and gamepad
pub struct InputState {
    gamepad: Gamepad,
    /// Gamepad buttons held last frame (for edge detection)
    last_buttons: u32,
    buttons: u32,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepad: Gamepad::new(0.15),
            last_buttons: 0,
            buttons: 0,
        }
    }

    /// Call once per frame before checking actions
    pub fn poll(&mut self) {
        self.gamepad.poll();
        self.last_buttons = self.buttons;
        self.buttons = self.gamepad.button_mask();
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        keyboard_down(action) || self.gamepad_down(action)
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        keyboard_pressed(action) || self.gamepad_pressed(action)
    }

    /// Everything the simulation needs for this frame
    pub fn snapshot(&self) -> InputFrame {
        InputFrame {
            left: self.action_down(Action::MoveLeft),
            right: self.action_down(Action::MoveRight),
            jump: self.action_down(Action::Jump),
            dash: self.action_down(Action::Dash),
            attack: self.action_down(Action::Attack),
            toggle_debug: self.action_pressed(Action::ToggleDebug),
        }
    }

    /// Check if any gamepad is connected
    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }

    fn gamepad_down(&self, action: Action) -> bool {
        let stick = self.gamepad.left_stick();
        gamepad_action(self.buttons, stick.x, action)
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        let now = gamepad_action(self.buttons, 0.0, action);
        let before = gamepad_action(self.last_buttons, 0.0, action);
        now && !before
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn keyboard_down(action: Action) -> bool {
    match action {
        Action::MoveLeft => is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
        Action::MoveRight => is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
        Action::Jump => is_key_down(KeyCode::Space),
        Action::Dash => is_key_down(KeyCode::LeftShift),
        Action::Attack => is_key_down(KeyCode::J),
        // Only read on the press edge
        Action::ToggleDebug => false,
    }
}

fn keyboard_pressed(action: Action) -> bool {
    action == Action::ToggleDebug && is_key_pressed(KeyCode::F3)
}

/// Map a button mask plus horizontal stick value to an action
fn gamepad_action(buttons: u32, stick_x: f32, action: Action) -> bool {
    match action {
        Action::MoveLeft => is_set(buttons, button::DPAD_LEFT) || stick_x < -STICK_THRESHOLD,
        Action::MoveRight => is_set(buttons, button::DPAD_RIGHT) || stick_x > STICK_THRESHOLD,
        Action::Jump => is_set(buttons, button::A),
        Action::Dash => is_set(buttons, button::B),
        Action::Attack => is_set(buttons, button::X) || is_set(buttons, button::RB),
        Action::ToggleDebug => is_set(buttons, button::SELECT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamepad_mapping() {
        let mask = (1 << button::A) | (1 << button::RB);
        assert!(gamepad_action(mask, 0.0, Action::Jump));
        assert!(gamepad_action(mask, 0.0, Action::Attack));
        assert!(!gamepad_action(mask, 0.0, Action::Dash));
    }

    #[test]
    fn test_stick_threshold() {
        assert!(gamepad_action(0, -0.8, Action::MoveLeft));
        assert!(!gamepad_action(0, -0.3, Action::MoveLeft));
        assert!(gamepad_action(0, 0.6, Action::MoveRight));
        assert!(!gamepad_action(0, 0.6, Action::MoveLeft));
    }

    #[test]
    fn test_every_action_has_a_gamepad_binding() {
        let all = [
            Action::MoveLeft,
            Action::MoveRight,
            Action::Jump,
            Action::Dash,
            Action::Attack,
            Action::ToggleDebug,
        ];
        for action in all {
            assert!(gamepad_action(u32::MAX, 0.0, action), "{:?} unbound", action);
        }
    }
}
