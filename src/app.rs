//! Application state and frame loop control
//!
//! `AppState` is created once in `main` and owns the world plus the loop's
//! own state. It never touches the window, so the loop logic runs in tests.
//!
//! Loop states: Running -> Stopped. Stopped is terminal.

use crate::game::event::{Events, MovementEvent};
use crate::game::settings::DisplaySettings;
use crate::game::{GameSettings, World};
use crate::input::InputFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    /// Quit was requested; the loop exits and nothing else runs
    Stopped,
}

pub struct AppState {
    pub world: World,
    run_state: RunState,
    /// Debug overlay visible
    pub show_debug: bool,
    /// Ticks simulated so far
    pub frame: u64,
}

impl AppState {
    pub fn new(settings: &GameSettings) -> Self {
        Self {
            world: World::prototype(settings),
            run_state: RunState::Running,
            show_debug: false,
            frame: 0,
        }
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// One frame of simulation. The quit request is checked first; once
    /// stopped, further calls do nothing.
    pub fn tick(&mut self, input: &InputFrame, quit_requested: bool, dt_ms: f64) -> RunState {
        if self.run_state == RunState::Stopped {
            return RunState::Stopped;
        }
        if quit_requested {
            log::info!("Quit requested after {} frames", self.frame);
            self.run_state = RunState::Stopped;
            return RunState::Stopped;
        }

        if input.toggle_debug {
            self.show_debug = !self.show_debug;
        }

        self.world.tick(input, dt_ms);
        self.frame += 1;
        RunState::Running
    }

    /// Log this frame's events and clear the queues. Returns how many were
    /// logged.
    pub fn end_frame(&mut self) -> usize {
        if self.world.events.is_empty() {
            return 0;
        }
        let count = self.world.events.len();
        log_events(&self.world.events, self.frame);
        self.world.events.clear_all();
        count
    }
}

fn log_events(events: &Events, frame: u64) {
    for event in events.movement.iter() {
        match event {
            MovementEvent::Jump => log::debug!("[{}] jump", frame),
            MovementEvent::WallJump => log::debug!("[{}] wall jump", frame),
            MovementEvent::Dash => log::debug!("[{}] dash", frame),
            MovementEvent::AttackStarted => log::debug!("[{}] attack", frame),
        }
    }
    for hit in events.enemy_hit.iter() {
        log::debug!("[{}] enemy {} hit, {} hp left", frame, hit.enemy, hit.remaining);
    }
    for defeated in events.enemy_defeated.iter() {
        log::info!(
            "[{}] enemy {} defeated at ({:.0}, {:.0})",
            frame, defeated.enemy, defeated.position.0, defeated.position.1
        );
    }
}

/// Caps the loop at a fixed tick rate
#[derive(Debug, Clone, Copy)]
pub struct FrameLimiter {
    /// Target frame time in seconds
    frame_time: f64,
}

impl FrameLimiter {
    pub fn new(display: &DisplaySettings) -> Self {
        Self { frame_time: display.frame_time() }
    }

    pub fn frame_time(&self) -> f64 {
        self.frame_time
    }

    /// Time left in this frame, given seconds elapsed since it started
    pub fn remaining(&self, elapsed: f64) -> Option<f64> {
        let remaining = self.frame_time - elapsed;
        (remaining > 0.0).then_some(remaining)
    }

    /// Block until the frame that began at `frame_start` (macroquad time)
    /// has used up its time slice.
    pub fn wait(&self, frame_start: f64) {
        use macroquad::time::get_time;

        if self.remaining(get_time() - frame_start).is_none() {
            return;
        }

        // Native: use sleep for bulk, then spin-wait for precision
        #[cfg(not(target_arch = "wasm32"))]
        {
            let spin_margin = 0.002; // 2ms
            while get_time() - frame_start + spin_margin < self.frame_time {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
            while get_time() - frame_start < self.frame_time {
                std::hint::spin_loop();
            }
        }
        // WASM: just spin-wait (no thread::sleep available)
        #[cfg(target_arch = "wasm32")]
        {
            while get_time() - frame_start < self.frame_time {}
        }
    }
}
