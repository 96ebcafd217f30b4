//! Game Module
//!
//! Everything that happens inside the play field:
//! - Platforms: static obstacles, kept in a fixed order
//! - Player: input, gravity, axis-separated collision, dash and attack timers
//! - Enemy: hit-point target removed at zero health
//! - Camera: low-pass follow with velocity tilt
//! - World: owns all of the above and runs one tick
//! - Renderer: draw-list composition and the rotated frame blit
//!
//! Simulation code is free of window and clock access; time comes in as a
//! frame delta and input as an `InputFrame`.

pub mod camera;
pub mod combat;
pub mod enemy;
pub mod event;
pub mod platform;
pub mod player;
pub mod rect;
pub mod renderer;
pub mod settings;
pub mod world;

// Re-export main types
pub use renderer::SceneRenderer;
pub use settings::GameSettings;
pub use world::World;
