//! Dragon Flight - A side-scrolling arcade flight game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `input`: Held keys and edge-triggered actions, sampled once per frame
//! - `session`: Frame driver tying the simulation to input and persistence
//! - `persistence`: High-score storage backends
//! - `platform`: Browser/native platform abstraction
//! - `tuning`: Data-driven game balance

pub mod autopilot;
pub mod highscores;
pub mod input;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use highscores::{HighScoreEntry, HighScores};
pub use input::{Action, InputState};
pub use session::Session;
pub use snapshot::Snapshot;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal frame tick (ms) the reference cadence assumes
    pub const TICK_MS: f32 = 16.0;

    /// Player craft dimensions
    pub const PLAYER_WIDTH: f32 = 80.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;
    /// Downward acceleration per tick (not scaled by game speed)
    pub const PLAYER_GRAVITY: f32 = 0.3;
    /// Velocity forced every tick the ascend key is held
    pub const PLAYER_LIFT: f32 = -8.0;
    /// Rotation (degrees) pinned while ascending
    pub const PLAYER_NOSE_UP: f32 = -15.0;
    /// Rotation (degrees) per unit of vertical velocity while gliding
    pub const PLAYER_TILT_PER_VELOCITY: f32 = 2.0;

    pub const START_LIVES: u8 = 3;

    /// Global speed multiplier bounds
    pub const SPEED_MIN: f32 = 0.5;
    pub const SPEED_MAX: f32 = 2.0;
    pub const SPEED_STEP: f32 = 0.2;

    /// Entity extents (the "diameters" used by collision tests)
    pub const DRAGON_SIZE: f32 = 40.0;
    pub const FIRE_DRAGON_SIZE: f32 = 50.0;
    pub const FIREBALL_SIZE: f32 = 15.0;
    pub const VOLCANO_WIDTH: f32 = 160.0;
    pub const VOLCANO_HEIGHT: f32 = 220.0;
    pub const LAVA_BALL_SIZE: f32 = 20.0;
    pub const MISSILE_SIZE: f32 = 8.0;

    /// Peak dragon roll (degrees) along its wave path
    pub const DRAGON_MAX_ROLL: f32 = 15.0;

    /// Score awards
    pub const DRAGON_PASS_POINTS: u32 = 1;
    pub const DRAGON_KILL_POINTS: u32 = 2;
    pub const FIRE_DRAGON_PASS_POINTS: u32 = 2;
    pub const FIRE_DRAGON_KILL_POINTS: u32 = 3;
}

/// Centre of a square extent whose top-left corner is `pos`
#[inline]
pub fn square_center(pos: Vec2, size: f32) -> Vec2 {
    pos + Vec2::splat(size / 2.0)
}

/// Step the global speed multiplier, clamped to `[SPEED_MIN, SPEED_MAX]`
#[inline]
pub fn step_speed(speed: f32, steps: f32) -> f32 {
    (speed + steps * consts::SPEED_STEP).clamp(consts::SPEED_MIN, consts::SPEED_MAX)
}
