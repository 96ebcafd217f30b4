//! Player character controller
//!
//! Axis-separated box collision against the platform list:
//! move on X and resolve, then move on Y and resolve. Gravity is added every
//! tick, even while standing; the Y pass cancels it again.
//!
//! State ownership between the two passes:
//! - `on_wall` is an X-axis contact fact. It is cleared at the start of the
//!   X pass only, so it survives the Y pass and a wall jump can read it on
//!   the next tick.
//! - `grounded` is a Y-axis contact fact. Only the Y pass writes it. The X
//!   pass reads the value left by the previous tick's Y pass.
//!
//! Timers run on `clock_ms`, an accumulator advanced by the frame delta
//! handed to [`Player::update`]. Nothing here reads the wall clock.

use macroquad::math::Vec2;

use super::event::{Events, MovementEvent};
use super::platform::Platform;
use super::rect::Rect;
use super::settings::PlayerSettings;
use crate::input::InputFrame;

/// Collision pass selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Horizontal facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, 1.0 for right
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub velocity: Vec2,
    pub facing: Facing,
    /// Standing on a platform (set by the Y pass)
    pub grounded: bool,
    /// Sliding down a wall (set by the X pass)
    pub on_wall: bool,
    attacking: bool,
    /// Elapsed simulation time
    clock_ms: f64,
    last_dash_ms: Option<f64>,
    attack_started_ms: f64,
    settings: PlayerSettings,
}

impl Player {
    pub fn new(x: f32, y: f32, settings: PlayerSettings) -> Self {
        Self {
            rect: Rect::new(x, y, settings.width, settings.height),
            velocity: Vec2::ZERO,
            facing: Facing::Right,
            grounded: false,
            on_wall: false,
            attacking: false,
            clock_ms: 0.0,
            last_dash_ms: None,
            attack_started_ms: 0.0,
            settings,
        }
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    pub fn is_attacking(&self) -> bool {
        self.attacking
    }

    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// True when the dash cooldown has run out (or no dash happened yet)
    pub fn can_dash(&self) -> bool {
        self.last_dash_ms
            .map_or(true, |last| self.clock_ms - last >= self.settings.dash_cooldown_ms)
    }

    /// Translate held actions into velocity, facing and action triggers.
    ///
    /// Right is checked after left, so holding both resolves to right.
    pub fn apply_input(&mut self, input: &InputFrame, events: &mut Events) {
        let s = self.settings;

        self.velocity.x = 0.0;
        if input.left {
            self.velocity.x = -s.move_speed;
            self.facing = Facing::Left;
        }
        if input.right {
            self.velocity.x = s.move_speed;
            self.facing = Facing::Right;
        }

        if input.jump {
            if self.grounded {
                self.velocity.y = -s.jump_force;
                events.movement.send(MovementEvent::Jump);
            } else if self.on_wall {
                // Push away from the wall we are facing
                self.velocity.y = -s.jump_force;
                self.velocity.x = self.facing.sign() * -s.move_speed * s.wall_jump_push;
                self.on_wall = false;
                events.movement.send(MovementEvent::WallJump);
            }
        }

        if input.dash && self.dash() {
            events.movement.send(MovementEvent::Dash);
        }

        if input.attack && self.attack() {
            events.movement.send(MovementEvent::AttackStarted);
        }
    }

    /// Burst of horizontal speed in the facing direction. Returns false while
    /// on cooldown.
    pub fn dash(&mut self) -> bool {
        if !self.can_dash() {
            return false;
        }
        self.velocity.x = self.settings.dash_force * self.facing.sign();
        self.velocity.y *= self.settings.dash_vertical_damping;
        self.last_dash_ms = Some(self.clock_ms);
        true
    }

    /// Start an attack. Returns false if one is already running.
    pub fn attack(&mut self) -> bool {
        if self.attacking {
            return false;
        }
        self.attacking = true;
        self.attack_started_ms = self.clock_ms;
        true
    }

    /// One simulation tick
    pub fn update(
        &mut self,
        input: &InputFrame,
        platforms: &[Platform],
        dt_ms: f64,
        events: &mut Events,
    ) {
        self.clock_ms += dt_ms;
        self.apply_input(input, events);

        self.velocity.y += self.settings.gravity;

        self.rect.x += self.velocity.x;
        self.resolve_collision(platforms, Axis::X);
        self.rect.y += self.velocity.y;
        self.resolve_collision(platforms, Axis::Y);

        if self.attacking && self.clock_ms - self.attack_started_ms >= self.settings.attack_duration_ms {
            self.attacking = false;
        }
    }

    /// Push the player out of any platform it overlaps on one axis.
    ///
    /// Platforms are scanned in slice order. On Y the first overlapping
    /// platform wins and the scan stops.
    pub fn resolve_collision(&mut self, platforms: &[Platform], axis: Axis) {
        match axis {
            Axis::X => self.resolve_x(platforms),
            Axis::Y => self.resolve_y(platforms),
        }
    }

    fn resolve_x(&mut self, platforms: &[Platform]) {
        self.on_wall = false;
        for platform in platforms {
            let p = platform.rect();
            if !self.rect.overlaps(p) {
                continue;
            }
            if self.velocity.x > 0.0 {
                self.rect.set_right(p.left());
                self.try_wall_slide();
            } else if self.velocity.x < 0.0 {
                self.rect.set_left(p.right());
                self.try_wall_slide();
            }
            self.velocity.x = 0.0;
        }
    }

    fn resolve_y(&mut self, platforms: &[Platform]) {
        let contact = platforms
            .iter()
            .find(|p| self.rect.overlaps(p.rect()))
            .map(|p| *p.rect());

        let Some(p) = contact else {
            self.grounded = false;
            return;
        };

        if self.velocity.y > 0.0 {
            self.rect.set_bottom(p.top());
            self.grounded = true;
        } else {
            if self.velocity.y < 0.0 {
                // Head bump
                self.rect.set_top(p.bottom());
            }
            self.grounded = false;
        }
        self.velocity.y = 0.0;
    }

    /// Airborne and falling against a wall: cap the fall speed
    fn try_wall_slide(&mut self) {
        if !self.grounded && self.velocity.y > 0.0 {
            self.on_wall = true;
            self.velocity.y = self.settings.wall_slide_speed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-4;

    fn floor() -> Vec<Platform> {
        vec![Platform::new(0.0, 500.0, 1000.0, 40.0)]
    }

    /// Player standing on the floor at x
    fn standing_player(x: f32) -> Player {
        let mut player = Player::new(x, 440.0, PlayerSettings::default());
        player.grounded = true;
        player
    }

    fn held(f: impl FnOnce(&mut InputFrame)) -> InputFrame {
        let mut input = InputFrame::default();
        f(&mut input);
        input
    }

    #[test]
    fn test_rest_on_platform_cancels_gravity() {
        let mut player = standing_player(100.0);
        let mut events = Events::new();

        // Gravity lands in vy before the Y pass runs
        player.apply_input(&InputFrame::default(), &mut events);
        player.velocity.y += player.settings().gravity;
        assert!((player.velocity.y - 0.6).abs() < EPS);
        player.rect.y += player.velocity.y;
        player.resolve_collision(&floor(), Axis::Y);
        assert_eq!(player.velocity.y, 0.0);
        assert!(player.grounded);

        // Same thing through a full tick
        let mut player = standing_player(100.0);
        player.update(&InputFrame::default(), &floor(), 16.0, &mut events);

        assert_eq!(player.velocity.y, 0.0);
        assert!(player.grounded);
        assert!((player.rect.bottom() - 500.0).abs() < EPS);
    }

    #[test]
    fn test_jump_from_ground() {
        let mut player = standing_player(100.0);
        let mut events = Events::new();

        player.apply_input(&held(|i| i.jump = true), &mut events);

        assert!((player.velocity.y + 12.0).abs() < EPS);
        // Still grounded until the next Y pass
        assert!(player.grounded);
        assert_eq!(events.movement.iter().copied().collect::<Vec<_>>(), vec![MovementEvent::Jump]);

        player.update(&InputFrame::default(), &floor(), 16.0, &mut events);
        assert!(!player.grounded);
        assert!(player.rect.bottom() < 500.0);
    }

    #[test]
    fn test_no_jump_in_air() {
        let mut player = Player::new(100.0, 100.0, PlayerSettings::default());
        let mut events = Events::new();
        player.velocity.y = 3.0;

        player.apply_input(&held(|i| i.jump = true), &mut events);

        assert_eq!(player.velocity.y, 3.0);
        assert!(events.movement.is_empty());
    }

    #[test]
    fn test_left_and_right_resolves_to_right() {
        let mut player = standing_player(100.0);
        let mut events = Events::new();
        player.facing = Facing::Left;

        player.apply_input(&held(|i| { i.left = true; i.right = true; }), &mut events);

        assert_eq!(player.velocity.x, 5.0);
        assert_eq!(player.facing, Facing::Right);
    }

    #[test]
    fn test_facing_persists_without_input() {
        let mut player = standing_player(100.0);
        let mut events = Events::new();

        player.apply_input(&held(|i| i.left = true), &mut events);
        assert_eq!(player.facing, Facing::Left);

        player.apply_input(&InputFrame::default(), &mut events);
        assert_eq!(player.velocity.x, 0.0);
        assert_eq!(player.facing, Facing::Left);
    }

    #[test]
    fn test_dash_cooldown() {
        let mut player = Player::new(100.0, 100.0, PlayerSettings::default());
        let mut events = Events::new();
        let dash = held(|i| i.dash = true);

        // t = 0: first dash of the session always goes through
        player.update(&dash, &[], 0.0, &mut events);
        assert_eq!(player.velocity.x, 14.0);
        assert!(!player.can_dash());

        // t = 500: still cooling down, input resets vx to 0
        player.update(&dash, &[], 500.0, &mut events);
        assert_eq!(player.velocity.x, 0.0);

        // t = 600: cooldown over
        player.update(&dash, &[], 100.0, &mut events);
        assert_eq!(player.velocity.x, 14.0);

        let dashes = events.movement.iter().filter(|e| **e == MovementEvent::Dash).count();
        assert_eq!(dashes, 2);
    }

    #[test]
    fn test_dash_follows_facing_and_bleeds_vertical_speed() {
        let mut player = Player::new(100.0, 100.0, PlayerSettings::default());
        player.facing = Facing::Left;
        player.velocity.y = 10.0;

        assert!(player.dash());

        assert_eq!(player.velocity.x, -14.0);
        assert!((player.velocity.y - 3.0).abs() < EPS);
    }

    #[test]
    fn test_attack_clears_after_duration() {
        let mut player = standing_player(100.0);
        let mut events = Events::new();
        let attack = held(|i| i.attack = true);

        player.update(&attack, &floor(), 0.0, &mut events);
        assert!(player.is_attacking());

        // Re-presses while attacking do not restart the timer
        player.update(&attack, &floor(), 100.0, &mut events);
        player.update(&attack, &floor(), 100.0, &mut events);
        assert!(player.is_attacking());

        // 299.5 ms in
        player.update(&InputFrame::default(), &floor(), 99.5, &mut events);
        assert!(player.is_attacking());

        // 300 ms in
        player.update(&InputFrame::default(), &floor(), 0.5, &mut events);
        assert!(!player.is_attacking());

        let started = events
            .movement
            .iter()
            .filter(|e| **e == MovementEvent::AttackStarted)
            .count();
        assert_eq!(started, 1);
    }

    #[test]
    fn test_attack_ignored_while_attacking() {
        let mut player = standing_player(100.0);
        assert!(player.attack());
        assert!(!player.attack());
    }

    #[test]
    fn test_head_bump() {
        let ceiling = vec![Platform::new(0.0, 100.0, 200.0, 20.0)];
        let mut player = Player::new(50.0, 125.0, PlayerSettings::default());
        player.velocity.y = -12.0;

        player.rect.y += player.velocity.y;
        player.resolve_collision(&ceiling, Axis::Y);

        assert!((player.rect.top() - 120.0).abs() < EPS);
        assert_eq!(player.velocity.y, 0.0);
        assert!(!player.grounded);
    }

    #[test]
    fn test_first_platform_wins_on_y() {
        // Two overlapping platforms; the earlier one in the list resolves
        let platforms = vec![
            Platform::new(0.0, 500.0, 200.0, 40.0),
            Platform::new(0.0, 495.0, 200.0, 40.0),
        ];
        let mut player = Player::new(50.0, 445.0, PlayerSettings::default());
        player.velocity.y = 5.0;

        player.resolve_collision(&platforms, Axis::Y);

        assert!((player.rect.bottom() - 500.0).abs() < EPS);
        assert!(player.grounded);
    }

    #[test]
    fn test_walk_into_wall_while_grounded() {
        let mut platforms = floor();
        platforms.push(Platform::new(200.0, 300.0, 40.0, 200.0));
        let mut player = standing_player(158.0);
        let mut events = Events::new();

        player.update(&held(|i| i.right = true), &platforms, 16.0, &mut events);

        assert!((player.rect.right() - 200.0).abs() < EPS);
        assert_eq!(player.velocity.x, 0.0);
        assert!(!player.on_wall);
        assert!(player.grounded);
    }

    #[test]
    fn test_wall_slide_then_wall_jump() {
        let wall = vec![Platform::new(200.0, 0.0, 40.0, 500.0)];
        let mut player = Player::new(158.0, 200.0, PlayerSettings::default());
        let mut events = Events::new();
        player.velocity.y = 4.0;

        player.update(&held(|i| i.right = true), &wall, 16.0, &mut events);

        assert!(player.on_wall);
        assert!((player.velocity.y - 2.5).abs() < EPS);
        assert!((player.rect.right() - 200.0).abs() < EPS);
        assert!(!player.grounded);

        // Jump off the wall: away from it, i.e. to the left
        player.update(&held(|i| { i.right = true; i.jump = true; }), &wall, 16.0, &mut events);

        assert!((player.velocity.x + 6.0).abs() < EPS);
        assert!((player.velocity.y - (-12.0 + 0.6)).abs() < EPS);
        assert!(!player.on_wall);
        assert!(events.movement.iter().any(|e| *e == MovementEvent::WallJump));
    }

    #[test]
    fn test_rising_against_wall_does_not_slide() {
        let wall = vec![Platform::new(200.0, 0.0, 40.0, 500.0)];
        let mut player = Player::new(158.0, 200.0, PlayerSettings::default());
        player.velocity = Vec2::new(5.0, -8.0);

        player.rect.x += player.velocity.x;
        player.resolve_collision(&wall, Axis::X);

        assert!(!player.on_wall);
        assert_eq!(player.velocity.y, -8.0);
        assert_eq!(player.velocity.x, 0.0);
    }

    #[test]
    fn test_falls_onto_floor() {
        let mut player = Player::new(100.0, 300.0, PlayerSettings::default());
        let mut events = Events::new();

        for _ in 0..120 {
            player.update(&InputFrame::default(), &floor(), 1000.0 / 60.0, &mut events);
        }

        assert!(player.grounded);
        assert!((player.rect.bottom() - 500.0).abs() < EPS);
        assert_eq!(player.velocity.y, 0.0);
    }

    proptest! {
        #[test]
        fn prop_landing_never_penetrates(
            plat_x in -500.0f32..500.0,
            plat_w in 20.0f32..400.0,
            plat_top in 0.0f32..600.0,
            along in 0.0f32..1.0,
            depth in 0.1f32..10.0,
            vy in 0.1f32..20.0,
        ) {
            let platforms = vec![Platform::new(plat_x, plat_top, plat_w, 40.0)];
            let settings = PlayerSettings::default();
            let x = plat_x - settings.width + 1.0 + along * (plat_w + settings.width - 2.0);
            let mut player = Player::new(x, plat_top - settings.height + depth, settings);
            player.velocity.y = vy;

            player.resolve_collision(&platforms, Axis::Y);

            prop_assert!(player.rect.bottom() <= plat_top + 1e-3);
            prop_assert!(player.grounded);
            prop_assert_eq!(player.velocity.y, 0.0);
        }

        #[test]
        fn prop_dash_suppressed_within_cooldown(
            mut offsets in prop::collection::vec(1.0f64..590.0, 1..8),
        ) {
            offsets.sort_by(|a, b| a.partial_cmp(b).unwrap());
            let mut player = Player::new(0.0, 0.0, PlayerSettings::default());
            let mut events = Events::new();
            let dash = InputFrame { dash: true, ..Default::default() };

            player.update(&dash, &[], 0.0, &mut events);
            let mut now = 0.0;
            for t in offsets {
                player.update(&dash, &[], t - now, &mut events);
                now = t;
                prop_assert_eq!(player.velocity.x, 0.0);
            }

            let dashes = events.movement.iter().filter(|e| **e == MovementEvent::Dash).count();
            prop_assert_eq!(dashes, 1);
        }
    }
}
