//! Read-only view of the world for the renderer and HUD

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameState, Mood};

/// Everything the front end needs to draw a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub ball_carried: bool,
    pub ball_in_air: bool,
    pub dog_pos: Vec2,
    /// Dog position including the idle wiggle; draw this, never simulate with it
    pub dog_display_pos: Vec2,
    pub dog_mood: Mood,
    pub dog_has_ball: bool,
    pub score: u64,
    pub anchor: Vec2,
    pub aiming: bool,
    pub aim: Vec2,
    /// Throw power readout (drag magnitude)
    pub power: f32,
    pub ground_y: f32,
    pub time_ticks: u64,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let tuning = &state.tuning;
        let wiggle = match state.dog.mood {
            Mood::Ready => {
                let phase = state.time_ticks as f32 * tuning.wiggle_frequency;
                Vec2::new(0.0, phase.sin() * tuning.wiggle_amplitude)
            }
            Mood::Chasing | Mood::Returning => Vec2::ZERO,
        };

        Self {
            ball_pos: state.ball.pos,
            ball_radius: tuning.ball_radius,
            ball_carried: state.ball.carried,
            ball_in_air: state.ball.in_air,
            dog_pos: state.dog.pos,
            dog_display_pos: state.dog.pos + wiggle,
            dog_mood: state.dog.mood,
            dog_has_ball: state.dog.has_ball,
            score: state.score,
            anchor: state.anchor(),
            aiming: state.aim.active,
            aim: state.aim.drag,
            power: state.aim.power(),
            ground_y: tuning.ground_y,
            time_ticks: state.time_ticks,
        }
    }

    pub fn to_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to serialize snapshot: {}", e);
                String::new()
            }
        }
    }
}
