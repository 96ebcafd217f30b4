//! Static platforms
//!
//! Platforms never move. They block the player and get drawn, nothing else.

use super::rect::Rect;

/// A static obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    rect: Rect,
}

impl Platform {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { rect: Rect::new(x, y, w, h) }
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }
}
