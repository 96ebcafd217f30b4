//! Input handling with gamepad support
//!
//! Keyboard through macroquad, gamepad through gilrs (native only).
//! The rest of the game only sees the per-frame [`InputFrame`] snapshot.

mod actions;
mod frame;
mod gamepad;
mod state;

pub use actions::Action;
pub use frame::InputFrame;
pub use state::InputState;
