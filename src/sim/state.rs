//! Game state and core simulation types
//!
//! The whole world lives in one [`GameState`] value: replace it to reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::latch::ScoreLatch;
use crate::tuning::Tuning;

/// What the dog is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mood {
    /// Idle by the player, nothing to fetch
    #[default]
    Ready,
    /// Running to a ball lying in the field
    Chasing,
    /// Carrying the ball back to the player's hand
    Returning,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Ready => "ready",
            Mood::Chasing => "chasing",
            Mood::Returning => "returning",
        }
    }
}

/// Something that happened during the last tick (for audio/HUD feedback)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A throw was released
    Thrown,
    /// Ball came to rest on the ground
    BallSettled,
    /// Dog set off after the ball
    ChaseStarted,
    /// Dog picked the ball up
    PickedUp,
    /// Dog handed the ball over; `scored` is false when the latch was already set
    Delivered { scored: bool },
    /// World was reset
    Reset,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Actively simulated by the integrator
    pub in_air: bool,
    /// Settled; velocity is zero
    pub at_rest: bool,
    /// Slaved to the dog's mouth
    pub carried: bool,
}

impl Ball {
    /// A settled ball lying at `pos`
    pub fn resting_at(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            in_air: false,
            at_rest: true,
            carried: false,
        }
    }

    /// Settled, not flying and not in the dog's mouth
    pub fn is_idle(&self) -> bool {
        self.at_rest && !self.in_air && !self.carried
    }
}

/// The retrieving dog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dog {
    /// Logical position used for every distance check
    pub pos: Vec2,
    /// Chase speed (units/tick)
    pub speed: f32,
    pub has_ball: bool,
    pub mood: Mood,
}

impl Dog {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.dog_start_x, tuning.dog_ground_y()),
            speed: tuning.dog_speed,
            has_ball: false,
            mood: Mood::Ready,
        }
    }

    /// Speed for the trip back to the player
    pub fn return_speed(&self, tuning: &Tuning) -> f32 {
        self.speed * tuning.return_speed_multiplier
    }
}

/// Pending throw while the pointer is being dragged
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Aim {
    /// A drag is in progress
    pub active: bool,
    /// Drag vector from the hand to the pointer, already clamped
    pub drag: Vec2,
}

impl Aim {
    /// Throw power readout (drag magnitude)
    pub fn power(&self) -> f32 {
        self.drag.length()
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub ball: Ball,
    pub dog: Dog,
    /// Completed fetches
    pub score: u64,
    /// Guards the score against repeat handoffs
    pub latch: ScoreLatch,
    pub aim: Aim,
    /// Frame counter (presentation only)
    pub time_ticks: u64,
    /// Events raised during the last tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Fresh world: ball in the player's hand, dog waiting beside them
    pub fn new(tuning: Tuning) -> Self {
        Self {
            ball: Ball::resting_at(tuning.handoff_spot()),
            dog: Dog::new(&tuning),
            score: 0,
            latch: ScoreLatch::default(),
            aim: Aim::default(),
            time_ticks: 0,
            events: Vec::new(),
            tuning,
        }
    }

    /// Replace the world wholesale, keeping tuning and optionally the score
    pub fn reset(&mut self, preserve_score: bool) {
        let score = if preserve_score { self.score } else { 0 };
        *self = GameState::new(self.tuning.clone());
        self.score = score;
        self.events.push(GameEvent::Reset);
        log::info!("World reset (score {})", self.score);
    }

    /// The player's hand
    pub fn anchor(&self) -> Vec2 {
        self.tuning.anchor()
    }

    /// Ball is close enough to the hand that there is nothing to fetch
    pub fn ball_at_anchor(&self) -> bool {
        self.ball.pos.distance(self.anchor()) < self.tuning.drop_radius
    }

    /// A new throw may start: ball idle in the hand and the dog not holding it
    pub fn can_throw(&self) -> bool {
        self.ball.is_idle() && !self.dog.has_ball && self.ball_at_anchor()
    }
}
