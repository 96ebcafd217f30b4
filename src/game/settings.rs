//! Game Settings
//!
//! Tuning constants for the player, enemies, camera and display.
//! Velocities are in pixels per tick (the simulation is stepped at a fixed
//! 60 Hz), timers are in milliseconds.
//!
//! A built-in table is embedded as RON and parsed at startup. Every struct
//! uses `#[serde(default)]` so a table only needs to list what it changes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed logical resolution of the window and the camera viewport
pub const VIEWPORT_WIDTH: u32 = 960;
pub const VIEWPORT_HEIGHT: u32 = 540;

/// The built-in tuning table shipped with the game
pub const BUILTIN_SETTINGS: &str = include_str!("../../assets/settings.ron");

/// Settings error types
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// RON text could not be parsed
    Parse { line: usize, col: usize, msg: String },
    /// Parsed fine but a value is out of range
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse { line, col, msg } => {
                write!(f, "settings parse error at {}:{}: {}", line, col, msg)
            }
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<ron::error::SpannedError> for SettingsError {
    fn from(e: ron::error::SpannedError) -> Self {
        SettingsError::Parse {
            line: e.position.line,
            col: e.position.col,
            msg: e.code.to_string(),
        }
    }
}

/// Player character controller parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Collision box width
    pub width: f32,
    /// Collision box height
    pub height: f32,
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Horizontal run speed
    pub move_speed: f32,
    /// Initial upward velocity of a jump
    pub jump_force: f32,
    /// Downward speed while sliding along a wall (slower than free-fall)
    pub wall_slide_speed: f32,
    /// Horizontal push of a wall jump, as a multiple of `move_speed`
    pub wall_jump_push: f32,
    /// Horizontal velocity of a dash
    pub dash_force: f32,
    /// Minimum time between two dashes
    pub dash_cooldown_ms: f64,
    /// Vertical velocity is scaled by this when a dash starts
    pub dash_vertical_damping: f32,
    /// How long an attack stays active
    pub attack_duration_ms: f64,
    /// Horizontal offset of the hit region from the player's center
    pub attack_reach: f32,
    /// Hit region edge length (square)
    pub attack_size: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            width: 40.0,
            height: 60.0,
            gravity: 0.6,
            move_speed: 5.0,
            jump_force: 12.0,
            wall_slide_speed: 2.5,
            wall_jump_push: 1.2,
            dash_force: 14.0,
            dash_cooldown_ms: 600.0,
            dash_vertical_damping: 0.3,
            attack_duration_ms: 300.0,
            attack_reach: 40.0,
            attack_size: 40.0,
        }
    }
}

/// Enemy parameters (one archetype)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemySettings {
    pub width: f32,
    pub height: f32,
    /// Hit points at spawn
    pub health: i32,
}

impl Default for EnemySettings {
    fn default() -> Self {
        Self {
            width: 40.0,
            height: 40.0,
            health: 3,
        }
    }
}

/// Follow camera parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Fraction of the remaining distance covered each tick (0..1)
    pub lag: f32,
    /// How far ahead of the player the camera looks, in facing direction
    pub look_ahead: f32,
    /// Rotation per unit of horizontal velocity (before `rotate_scale`)
    pub rotate_strength: f32,
    pub rotate_scale: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            lag: 0.08,
            look_ahead: 100.0,
            rotate_strength: 4.0,
            rotate_scale: 0.02,
        }
    }
}

/// Frame pacing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Simulation and render ticks per second
    pub tick_rate: f64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { tick_rate: 60.0 }
    }
}

impl DisplaySettings {
    /// Target frame time in seconds
    pub fn frame_time(&self) -> f64 {
        1.0 / self.tick_rate
    }
}

/// All tuning for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub player: PlayerSettings,
    pub enemy: EnemySettings,
    pub camera: CameraSettings,
    pub display: DisplaySettings,
}

impl GameSettings {
    /// Parse a RON table, filling missing fields with defaults
    pub fn from_ron(text: &str) -> Result<Self, SettingsError> {
        let settings: GameSettings = ron::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load the table embedded in the binary
    pub fn builtin() -> Result<Self, SettingsError> {
        Self::from_ron(BUILTIN_SETTINGS)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let lag = self.camera.lag;
        if !(lag > 0.0 && lag < 1.0) {
            return Err(SettingsError::Invalid(format!(
                "camera.lag must be in (0, 1), got {}",
                lag
            )));
        }
        if self.display.tick_rate <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "display.tick_rate must be positive, got {}",
                self.display.tick_rate
            )));
        }
        if self.player.width <= 0.0 || self.player.height <= 0.0 {
            return Err(SettingsError::Invalid("player size must be positive".to_string()));
        }
        Ok(())
    }
}
