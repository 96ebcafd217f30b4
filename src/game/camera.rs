//! Follow camera
//!
//! Tracks the player with a look-ahead in the facing direction and tilts
//! with horizontal speed. Both position and angle approach their targets
//! through the same first-order low-pass:
//!
//! `current += (target - current) * lag`
//!
//! With `lag` in (0, 1) the camera never overshoots a stationary target.

use macroquad::math::Vec2;

use super::player::Player;
use super::settings::CameraSettings;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    /// World position of the viewport's top-left corner
    pub position: Vec2,
    /// Screen rotation in degrees (positive = clockwise on screen)
    pub angle: f32,
    settings: CameraSettings,
}

impl FollowCamera {
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            position: Vec2::ZERO,
            angle: 0.0,
            settings,
        }
    }

    /// Where the camera wants to be for this player, and at what angle
    pub fn target_for(&self, player: &Player, viewport: Vec2) -> (Vec2, f32) {
        let s = &self.settings;
        let position = Vec2::new(
            player.rect.center_x() - viewport.x * 0.5 + player.facing.sign() * s.look_ahead,
            player.rect.center_y() - viewport.y * 0.5,
        );
        let angle = player.velocity.x * s.rotate_strength * s.rotate_scale;
        (position, angle)
    }

    /// Move one step toward an explicit target
    pub fn approach(&mut self, target: Vec2, target_angle: f32) {
        let lag = self.settings.lag;
        self.position += (target - self.position) * lag;
        self.angle += (target_angle - self.angle) * lag;
    }

    /// Per-tick follow
    pub fn update(&mut self, player: &Player, viewport: Vec2) {
        let (target, angle) = self.target_for(player, viewport);
        self.approach(target, angle);
    }
}
