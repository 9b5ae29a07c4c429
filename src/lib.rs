//! Fetch - throw a ball, the dog brings it back
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, dog state machine, scoring)
//! - `tuning`: Data-driven game constants
//! - `platform`: Browser binding for the canvas front end

pub mod error;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use error::TuningError;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// World dimensions
    pub const WORLD_WIDTH: f32 = 900.0;
    pub const WORLD_HEIGHT: f32 = 560.0;
    /// Ground line (y grows downward)
    pub const GROUND_Y: f32 = 480.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Gravity (units/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Vertical velocity kept (and flipped) on a ground bounce
    pub const GROUND_RESTITUTION: f32 = 0.55;
    /// Horizontal velocity kept on ground contact
    pub const GROUND_FRICTION: f32 = 0.985;
    /// Bounces slower than this are killed (no micro-bounce jitter)
    pub const BOUNCE_CUTOFF: f32 = 1.2;
    /// Horizontal velocity kept per tick while rolling
    pub const ROLL_FRICTION: f32 = 0.985;
    /// Rolling speed snapped to zero below this
    pub const ROLL_CUTOFF: f32 = 0.08;
    /// How close to the ground line counts as grounded
    pub const SETTLE_TOLERANCE: f32 = 0.5;
    /// Speed below which a grounded ball comes to rest
    pub const REST_SPEED: f32 = 0.12;
    /// Horizontal velocity kept (and flipped) on a side wall hit
    pub const WALL_RESTITUTION: f32 = 0.4;

    /// Player / throw defaults
    pub const PLAYER_X: f32 = 120.0;
    /// Hand height above the ground line
    pub const HAND_HEIGHT: f32 = 30.0;
    /// Pointer must be this close to the hand to start aiming
    pub const AIM_GRAB_RADIUS: f32 = 100.0;
    pub const MAX_DRAG: f32 = 420.0;
    pub const POWER_SCALE: f32 = 0.12;
    /// Handed-over ball sits this far right of the hand
    pub const DROP_OFFSET_X: f32 = 8.0;

    /// Dog defaults
    pub const DOG_START_X: f32 = 180.0;
    /// Dog origin sits this far above the ground line
    pub const DOG_HEIGHT: f32 = 10.0;
    pub const DOG_SPEED: f32 = 4.6;
    pub const RETURN_SPEED_MULTIPLIER: f32 = 1.08;
    pub const PICKUP_RADIUS: f32 = 16.0;
    pub const DROP_RADIUS: f32 = 18.0;
    /// Ball position relative to the dog while carried (mouth)
    pub const CARRY_OFFSET_X: f32 = 12.0;
    pub const CARRY_OFFSET_Y: f32 = -18.0;

    /// Idle wiggle (presentational only)
    pub const WIGGLE_FREQUENCY: f32 = 0.07;
    pub const WIGGLE_AMPLITUDE: f32 = 1.2;
}

/// Clamp a vector's magnitude to `max`, keeping its direction
#[inline]
pub fn limit(v: Vec2, max: f32) -> Vec2 {
    v.clamp_length_max(max)
}

/// Unit vector along `v`, or `None` for a zero-length vector
#[inline]
pub fn direction(v: Vec2) -> Option<Vec2> {
    let len = v.length();
    if len > 0.0 { Some(v / len) } else { None }
}
