//! Combat
//!
//! While an attack is active a square hit region sits in front of the
//! player. Every tick it overlaps an enemy, that enemy takes one hit.

use super::enemy::{Enemy, HitOutcome};
use super::event::{EnemyDefeatedEvent, EnemyHitEvent, Events};
use super::player::Player;
use super::rect::Rect;

/// Hit region of the player's current attack, if one is running.
///
/// Anchored at the player's center: shifted `attack_reach` along the facing
/// direction and raised by half its size.
pub fn attack_region(player: &Player) -> Option<Rect> {
    if !player.is_attacking() {
        return None;
    }
    let s = player.settings();
    Some(Rect::new(
        player.rect.center_x() + player.facing.sign() * s.attack_reach,
        player.rect.center_y() - s.attack_size * 0.5,
        s.attack_size,
        s.attack_size,
    ))
}

/// Test the attack region against all enemies and apply hits.
///
/// Defeated enemies are removed from `enemies`. Returns the number of hits
/// landed this tick.
pub fn resolve_attack(player: &Player, enemies: &mut Vec<Enemy>, events: &mut Events) -> usize {
    let Some(region) = attack_region(player) else {
        return 0;
    };

    let mut hits = 0;
    for (index, enemy) in enemies.iter_mut().enumerate() {
        if !region.overlaps(enemy.rect()) {
            continue;
        }
        match enemy.hit() {
            HitOutcome::Ignored => {}
            HitOutcome::Damaged { remaining } => {
                hits += 1;
                events.enemy_hit.send(EnemyHitEvent { enemy: index, remaining });
            }
            HitOutcome::Defeated => {
                hits += 1;
                events.enemy_hit.send(EnemyHitEvent { enemy: index, remaining: 0 });
                events.enemy_defeated.send(EnemyDefeatedEvent {
                    enemy: index,
                    position: (enemy.rect().center_x(), enemy.rect().center_y()),
                });
            }
        }
    }

    enemies.retain(Enemy::is_alive);
    hits
}
