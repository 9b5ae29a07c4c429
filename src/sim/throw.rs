//! Aiming and throwing
//!
//! The input layer drives a drag from the player's hand; releasing it turns
//! the clamped drag vector into the ball's launch velocity. Commands that are
//! not allowed right now are ignored and report `false`.

use glam::Vec2;

use super::state::{Aim, GameEvent, GameState, Mood};
use crate::limit;

impl GameState {
    /// Start a drag if the pointer is near the hand and the ball is ready to throw
    pub fn begin_aim(&mut self, pointer: Vec2) -> bool {
        let near_hand = pointer.distance(self.anchor()) < self.tuning.aim_grab_radius;
        if !near_hand || !self.can_throw() {
            log::trace!("Aim refused at ({:.1}, {:.1})", pointer.x, pointer.y);
            return false;
        }
        self.aim = Aim {
            active: true,
            drag: Vec2::ZERO,
        };
        true
    }

    /// Update the pending drag vector (clamped to the max drag)
    pub fn update_aim(&mut self, drag: Vec2) {
        if self.aim.active {
            self.aim.drag = limit(drag, self.tuning.max_drag);
        }
    }

    /// Update the drag from an absolute pointer position
    pub fn aim_at(&mut self, pointer: Vec2) {
        let drag = pointer - self.anchor();
        self.update_aim(drag);
    }

    /// Drop the drag without throwing
    pub fn cancel_aim(&mut self) {
        self.aim = Aim::default();
    }

    /// Release the pending drag as a throw
    pub fn release_throw(&mut self) -> bool {
        if !self.aim.active {
            return false;
        }
        let drag = self.aim.drag;
        if !self.launch(drag) {
            return false;
        }
        self.aim = Aim::default();
        true
    }

    /// Throw with the given drag vector directly (autoplay, replays)
    pub fn throw_with(&mut self, drag: Vec2) -> bool {
        let launched = self.launch(limit(drag, self.tuning.max_drag));
        if launched {
            self.aim = Aim::default();
        }
        launched
    }

    fn launch(&mut self, drag: Vec2) -> bool {
        if !self.can_throw() {
            log::trace!("Throw ignored: ball not in hand");
            return false;
        }

        self.ball.pos = self.anchor();
        self.ball.vel = drag * self.tuning.power_scale;
        self.ball.in_air = true;
        self.ball.at_rest = false;
        self.ball.carried = false;
        self.latch.arm();
        self.dog.mood = Mood::Ready;
        self.events.push(GameEvent::Thrown);
        log::debug!(
            "Ball thrown with velocity ({:.2}, {:.2})",
            self.ball.vel.x,
            self.ball.vel.y
        );
        true
    }
}
