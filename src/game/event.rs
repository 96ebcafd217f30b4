//! Event System
//!
//! The simulation queues what happened during a tick; the frame loop reads
//! the queues (for logging) and clears them at the end of the frame.

/// A queue for events of a single type.
/// Events are collected during the frame and cleared at its end.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all game events.
#[derive(Debug, Default)]
pub struct Events {
    /// Player movement actions that took effect
    pub movement: EventQueue<MovementEvent>,

    /// An enemy lost a hit point
    pub enemy_hit: EventQueue<EnemyHitEvent>,

    /// An enemy reached zero health and left the world
    pub enemy_defeated: EventQueue<EnemyDefeatedEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total events across all queues
    pub fn len(&self) -> usize {
        self.movement.len() + self.enemy_hit.len() + self.enemy_defeated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movement.is_empty() && self.enemy_hit.is_empty() && self.enemy_defeated.is_empty()
    }

    /// Clear all event queues. Call at end of frame.
    pub fn clear_all(&mut self) {
        self.movement.clear();
        self.enemy_hit.clear();
        self.enemy_defeated.clear();
    }
}

// =============================================================================
// Event Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementEvent {
    Jump,
    /// Jump off a wall, pushing away from it
    WallJump,
    Dash,
    AttackStarted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyHitEvent {
    /// Index into the world's enemy list at the time of the hit
    pub enemy: usize,
    pub remaining: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyDefeatedEvent {
    pub enemy: usize,
    /// Where it stood (center)
    pub position: (f32, f32),
}
