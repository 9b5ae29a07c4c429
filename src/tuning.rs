//! Game tuning
//!
//! Every physics and gameplay constant in one serializable struct. Defaults
//! mirror [`crate::consts`]; a JSON document may override any subset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{TuningError, TuningResult};

/// Data-driven game constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    pub ground_y: f32,

    // === Ball physics ===
    pub ball_radius: f32,
    pub gravity: f32,
    pub ground_restitution: f32,
    pub ground_friction: f32,
    pub bounce_cutoff: f32,
    pub roll_friction: f32,
    pub roll_cutoff: f32,
    pub settle_tolerance: f32,
    pub rest_speed: f32,
    pub wall_restitution: f32,

    // === Throwing ===
    pub player_x: f32,
    pub hand_height: f32,
    pub aim_grab_radius: f32,
    pub max_drag: f32,
    pub power_scale: f32,
    pub drop_offset_x: f32,

    // === Dog ===
    pub dog_start_x: f32,
    pub dog_height: f32,
    pub dog_speed: f32,
    pub return_speed_multiplier: f32,
    pub pickup_radius: f32,
    pub drop_radius: f32,
    pub carry_offset: Vec2,

    // === Presentation ===
    pub wiggle_frequency: f32,
    pub wiggle_amplitude: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            ground_y: GROUND_Y,

            ball_radius: BALL_RADIUS,
            gravity: GRAVITY,
            ground_restitution: GROUND_RESTITUTION,
            ground_friction: GROUND_FRICTION,
            bounce_cutoff: BOUNCE_CUTOFF,
            roll_friction: ROLL_FRICTION,
            roll_cutoff: ROLL_CUTOFF,
            settle_tolerance: SETTLE_TOLERANCE,
            rest_speed: REST_SPEED,
            wall_restitution: WALL_RESTITUTION,

            player_x: PLAYER_X,
            hand_height: HAND_HEIGHT,
            aim_grab_radius: AIM_GRAB_RADIUS,
            max_drag: MAX_DRAG,
            power_scale: POWER_SCALE,
            drop_offset_x: DROP_OFFSET_X,

            dog_start_x: DOG_START_X,
            dog_height: DOG_HEIGHT,
            dog_speed: DOG_SPEED,
            return_speed_multiplier: RETURN_SPEED_MULTIPLIER,
            pickup_radius: PICKUP_RADIUS,
            drop_radius: DROP_RADIUS,
            carry_offset: Vec2::new(CARRY_OFFSET_X, CARRY_OFFSET_Y),

            wiggle_frequency: WIGGLE_FREQUENCY,
            wiggle_amplitude: WIGGLE_AMPLITUDE,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> TuningResult<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load from a JSON file on disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> TuningResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> String {
        match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to serialize tuning: {}", e);
                String::new()
            }
        }
    }

    /// Reject values that would break termination or put the scene out of bounds
    pub fn validate(&self) -> TuningResult<()> {
        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("ball_radius", self.ball_radius),
            ("gravity", self.gravity),
            ("bounce_cutoff", self.bounce_cutoff),
            ("roll_cutoff", self.roll_cutoff),
            ("settle_tolerance", self.settle_tolerance),
            ("rest_speed", self.rest_speed),
            ("max_drag", self.max_drag),
            ("power_scale", self.power_scale),
            ("dog_speed", self.dog_speed),
            ("return_speed_multiplier", self.return_speed_multiplier),
            ("pickup_radius", self.pickup_radius),
            ("drop_radius", self.drop_radius),
            ("aim_grab_radius", self.aim_grab_radius),
        ];
        for (name, value) in positive {
            check(name, value, value.is_finite() && value > 0.0, "(0, ∞)")?;
        }

        let factors = [
            ("ground_restitution", self.ground_restitution),
            ("ground_friction", self.ground_friction),
            ("roll_friction", self.roll_friction),
            ("wall_restitution", self.wall_restitution),
        ];
        for (name, value) in factors {
            check(name, value, value > 0.0 && value < 1.0, "(0, 1)")?;
        }

        let ground_ok = self.ground_y > self.ball_radius && self.ground_y <= self.world_height;
        check("ground_y", self.ground_y, ground_ok, "(ball_radius, world_height]")?;

        let width_ok = self.world_width > 2.0 * self.ball_radius;
        check("world_width", self.world_width, width_ok, "(2 * ball_radius, ∞)")?;

        let player_ok = self.player_x >= 0.0 && self.player_x <= self.world_width;
        check("player_x", self.player_x, player_ok, "[0, world_width]")?;

        let dog_ok = self.dog_start_x >= 0.0 && self.dog_start_x <= self.world_width;
        check("dog_start_x", self.dog_start_x, dog_ok, "[0, world_width]")?;

        let hand_ok = self.hand_height.is_finite() && self.hand_height >= 0.0;
        check("hand_height", self.hand_height, hand_ok, "[0, ∞)")?;

        let finite = [
            ("dog_height", self.dog_height),
            ("carry_offset.x", self.carry_offset.x),
            ("carry_offset.y", self.carry_offset.y),
            ("wiggle_frequency", self.wiggle_frequency),
            ("wiggle_amplitude", self.wiggle_amplitude),
        ];
        for (name, value) in finite {
            check(name, value, value.is_finite(), "finite")?;
        }

        // A handed-over ball must count as in the hand, or the dog fetches it forever
        let handoff_ok = self.drop_offset_x.is_finite() && self.drop_offset_x.abs() < self.drop_radius;
        check("drop_offset_x", self.drop_offset_x, handoff_ok, "(-drop_radius, drop_radius)")?;

        Ok(())
    }

    /// Where the player's hand is: throws start and fetches end here
    pub fn anchor(&self) -> Vec2 {
        Vec2::new(self.player_x, self.ground_y - self.hand_height)
    }

    /// Resting spot of a handed-over ball
    pub fn handoff_spot(&self) -> Vec2 {
        self.anchor() + Vec2::new(self.drop_offset_x, 0.0)
    }

    /// Dog origin height while standing on the ground
    pub fn dog_ground_y(&self) -> f32 {
        self.ground_y - self.dog_height
    }

    /// Ball center height when lying on the ground
    pub fn ball_floor_y(&self) -> f32 {
        self.ground_y - self.ball_radius
    }
}

fn check(name: &'static str, value: f32, ok: bool, safe_range: &'static str) -> TuningResult<()> {
    if ok {
        Ok(())
    } else {
        Err(TuningError::UnsafeConstant {
            name,
            value,
            safe_range,
        })
    }
}
