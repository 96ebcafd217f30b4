//! Scene Renderer
//!
//! Two stages:
//! 1. `compose_scene` turns the world into a flat list of screen-space
//!    sprites, already shifted by the camera position. Pure, no GPU.
//! 2. `SceneRenderer::draw` paints that list into an offscreen render
//!    target, then draws the target to the window rotated by the camera
//!    angle about the screen center. The rotation applies to the finished
//!    frame, not per sprite.

use macroquad::color::{Color, WHITE};
use macroquad::math::{vec2, Rect as MqRect, Vec2};
use macroquad::prelude::{
    clear_background, draw_rectangle, draw_rectangle_lines, draw_text, draw_texture_ex,
    render_target, screen_height, screen_width, set_camera, set_default_camera, Camera2D,
    DrawTextureParams, FilterMode, RenderTarget,
};

use super::combat::attack_region;
use super::rect::Rect;
use super::world::World;

pub const BACKGROUND: Color = Color::new(25.0 / 255.0, 25.0 / 255.0, 35.0 / 255.0, 1.0);
pub const PLATFORM_COLOR: Color = Color::new(100.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0, 1.0);
pub const ENEMY_COLOR: Color = Color::new(220.0 / 255.0, 60.0 / 255.0, 60.0 / 255.0, 1.0);
pub const PLAYER_COLOR: Color = Color::new(80.0 / 255.0, 80.0 / 255.0, 220.0 / 255.0, 1.0);
pub const ATTACK_COLOR: Color = Color::new(1.0, 1.0, 0.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpriteStyle {
    Filled,
    Outline { thickness: f32 },
}

/// One rectangle to draw, in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub rect: Rect,
    pub color: Color,
    pub style: SpriteStyle,
}

/// Build the draw list for the current frame: platforms, enemies, player,
/// then the attack outline if an attack is running.
pub fn compose_scene(world: &World) -> Vec<Sprite> {
    let cam = world.camera.position;
    let to_screen = |r: &Rect| r.offset(-cam.x, -cam.y);
    let filled = |rect: Rect, color: Color| Sprite { rect, color, style: SpriteStyle::Filled };

    let mut sprites = Vec::with_capacity(world.platforms.len() + world.enemies.len() + 2);
    sprites.extend(world.platforms.iter().map(|p| filled(to_screen(p.rect()), PLATFORM_COLOR)));
    sprites.extend(
        world
            .enemies
            .iter()
            .filter(|e| e.is_alive())
            .map(|e| filled(to_screen(e.rect()), ENEMY_COLOR)),
    );
    sprites.push(filled(to_screen(&world.player.rect), PLAYER_COLOR));

    if let Some(region) = attack_region(&world.player) {
        sprites.push(Sprite {
            rect: to_screen(&region),
            color: ATTACK_COLOR,
            style: SpriteStyle::Outline { thickness: 1.0 },
        });
    }

    sprites
}

/// Text lines for the debug overlay
pub fn debug_lines(world: &World, fps: i32) -> Vec<String> {
    let p = &world.player;
    let mut lines = vec![
        format!("FPS: {}  t: {:.0} ms", fps, p.clock_ms()),
        format!("pos: ({:.1}, {:.1})", p.rect.x, p.rect.y),
        format!("vel: ({:.2}, {:.2})", p.velocity.x, p.velocity.y),
        format!(
            "grounded: {}  wall: {}  dash: {}  attack: {}",
            p.grounded,
            p.on_wall,
            if p.can_dash() { "ready" } else { "cooldown" },
            p.is_attacking()
        ),
        format!(
            "camera: ({:.1}, {:.1}) {:.2} deg",
            world.camera.position.x, world.camera.position.y, world.camera.angle
        ),
    ];
    if world.enemies.is_empty() {
        lines.push("enemies: none".to_string());
    }
    for (i, enemy) in world.enemies.iter().enumerate() {
        lines.push(format!("enemy {}: hp {}", i, enemy.health()));
    }
    lines
}

/// Offscreen target plus the camera that renders into it
pub struct SceneRenderer {
    target: RenderTarget,
    width: f32,
    height: f32,
}

impl SceneRenderer {
    /// Sized to the world's viewport. Must be called after the window
    /// exists (inside the macroquad main).
    pub fn new(viewport: Vec2) -> Self {
        let target = render_target(viewport.x as u32, viewport.y as u32);
        target.texture.set_filter(FilterMode::Nearest);
        Self {
            target,
            width: viewport.x,
            height: viewport.y,
        }
    }

    pub fn draw(&self, world: &World, debug: Option<&[String]>) {
        // Stage 1: compose into the offscreen frame
        let mut camera = Camera2D::from_display_rect(MqRect::new(0.0, 0.0, self.width, self.height));
        camera.render_target = Some(self.target.clone());
        set_camera(&camera);

        clear_background(BACKGROUND);
        for sprite in compose_scene(world) {
            let r = sprite.rect;
            match sprite.style {
                SpriteStyle::Filled => draw_rectangle(r.x, r.y, r.w, r.h, sprite.color),
                SpriteStyle::Outline { thickness } => {
                    draw_rectangle_lines(r.x, r.y, r.w, r.h, thickness, sprite.color)
                }
            }
        }

        // Stage 2: rotate the whole frame onto the window
        set_default_camera();
        clear_background(BACKGROUND);
        draw_texture_ex(
            &self.target.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(screen_width(), screen_height())),
                rotation: world.camera.angle.to_radians(),
                flip_y: true,
                ..Default::default()
            },
        );

        if let Some(lines) = debug {
            draw_debug_overlay(lines);
        }
    }
}

fn draw_debug_overlay(lines: &[String]) {
    let line_height = 18.0;
    let panel_h = line_height * lines.len() as f32 + 8.0;
    draw_rectangle(4.0, 4.0, 380.0, panel_h, Color::new(0.0, 0.0, 0.0, 0.6));
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 10.0, 20.0 + i as f32 * line_height, 18.0, WHITE);
    }
}
