//! Game World
//!
//! Owns everything that lives in the scene and runs one simulation tick:
//! player physics, attack hit testing, enemy removal, camera follow.
//!
//! Platforms are an ordered `Vec`. Collision resolution uses the first
//! overlapping platform in that order, so the order is part of the level.

use macroquad::math::Vec2;

use super::camera::FollowCamera;
use super::combat;
use super::enemy::Enemy;
use super::event::Events;
use super::platform::Platform;
use super::player::Player;
use super::settings::{GameSettings, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::input::InputFrame;

pub struct World {
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub player: Player,
    pub camera: FollowCamera,
    /// Events raised during the current tick
    pub events: Events,
    viewport: Vec2,
}

impl World {
    /// Empty world with the player at `spawn`
    pub fn new(settings: &GameSettings, spawn: Vec2) -> Self {
        Self {
            platforms: Vec::new(),
            enemies: Vec::new(),
            player: Player::new(spawn.x, spawn.y, settings.player),
            camera: FollowCamera::new(settings.camera),
            events: Events::new(),
            viewport: Vec2::new(VIEWPORT_WIDTH as f32, VIEWPORT_HEIGHT as f32),
        }
    }

    /// The single-screen prototype level
    pub fn prototype(settings: &GameSettings) -> Self {
        let mut world = Self::new(settings, Vec2::new(100.0, 300.0));
        world.platforms = vec![
            Platform::new(0.0, 500.0, 1000.0, 40.0),
            Platform::new(300.0, 400.0, 100.0, 20.0),
            Platform::new(700.0, 350.0, 100.0, 20.0),
        ];
        world.enemies = vec![Enemy::new(500.0, 380.0, &settings.enemy)];
        world
    }

    /// Size of the visible area in world pixels
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Advance the simulation by one tick.
    ///
    /// `dt_ms` only feeds the timers (dash cooldown, attack duration);
    /// movement is per tick.
    pub fn tick(&mut self, input: &InputFrame, dt_ms: f64) {
        self.player.update(input, &self.platforms, dt_ms, &mut self.events);
        combat::resolve_attack(&self.player, &mut self.enemies, &mut self.events);
        self.camera.update(&self.player, self.viewport);
    }
}
