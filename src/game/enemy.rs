//! Enemy
//!
//! A stationary target with a hit-point counter. It does not move or
//! attack; it only takes hits until it is defeated.

use super::rect::Rect;
use super::settings::EnemySettings;

/// What a call to [`Enemy::hit`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Enemy was already defeated, nothing changed
    Ignored,
    /// Health went down but the enemy is still standing
    Damaged { remaining: i32 },
    /// This hit brought health to zero or below
    Defeated,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    rect: Rect,
    health: i32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, settings: &EnemySettings) -> Self {
        Self {
            rect: Rect::new(x, y, settings.width, settings.height),
            health: settings.health,
        }
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Take one point of damage
    pub fn hit(&mut self) -> HitOutcome {
        if !self.is_alive() {
            return HitOutcome::Ignored;
        }
        self.health -= 1;
        if self.health <= 0 {
            HitOutcome::Defeated
        } else {
            HitOutcome::Damaged { remaining: self.health }
        }
    }
}
