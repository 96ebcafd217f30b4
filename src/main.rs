//! Knightlike: a single-screen 2D platformer prototype
//!
//! Run, jump, slide down and jump off walls, dash, and hit the one enemy
//! until it drops. The camera trails the player and tilts with speed.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod game;
mod input;

use app::{AppState, FrameLimiter, RunState};
use game::renderer::debug_lines;
use game::settings::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use game::{GameSettings, SceneRenderer};
use input::InputState;
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Knightlike Prototype v2".to_string(),
        window_width: VIEWPORT_WIDTH as i32,
        window_height: VIEWPORT_HEIGHT as i32,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

fn load_settings() -> GameSettings {
    match GameSettings::builtin() {
        Ok(settings) => {
            log::info!("Loaded built-in settings");
            settings
        }
        Err(e) => {
            log::error!("Built-in settings rejected ({}), using defaults", e);
            GameSettings::default()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("=== Knightlike v{} ===", VERSION);

    // Window close becomes a quit request we handle at the top of the frame
    prevent_quit();

    let settings = load_settings();
    let mut app = AppState::new(&settings);
    let mut input = InputState::new();
    let renderer = SceneRenderer::new(app.world.viewport());
    let limiter = FrameLimiter::new(&settings.display);
    log::info!("Frame cap {:.2} ms", limiter.frame_time() * 1000.0);

    if input.has_gamepad() {
        log::info!("Gamepad detected");
    }

    loop {
        // Track frame start time for FPS limiting
        let frame_start = get_time();

        input.poll();
        let frame_input = input.snapshot();
        let dt_ms = get_frame_time() as f64 * 1000.0;

        app.tick(&frame_input, is_quit_requested(), dt_ms);
        if app.run_state() == RunState::Stopped {
            break;
        }
        app.end_frame();

        let overlay = app.show_debug.then(|| debug_lines(&app.world, get_fps()));
        renderer.draw(&app.world, overlay.as_deref());

        limiter.wait(frame_start);
        next_frame().await;
    }

    log::info!("Shutting down");
}
