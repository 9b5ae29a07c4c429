//! The retrieving dog
//!
//! Cyclic state machine: `Ready -> Chasing -> Returning -> Ready`. At most one
//! transition happens per tick, and the dog always reads the ball's
//! post-physics state.

use glam::Vec2;

use super::physics::carry_position;
use super::state::{GameEvent, GameState, Mood};
use crate::direction;

/// Step `pos` toward `target` by at most `speed`.
///
/// Snaps onto the target when it is closer than one step, so the dog never
/// overshoots and oscillates around it.
pub fn move_toward(pos: Vec2, target: Vec2, speed: f32) -> Vec2 {
    let to_target = target - pos;
    if to_target.length() < speed {
        return target;
    }
    match direction(to_target) {
        Some(dir) => pos + dir * speed,
        None => target,
    }
}

/// Advance the dog one tick
pub fn update_dog(state: &mut GameState) {
    let anchor = state.anchor();
    let ball_at_anchor = state.ball_at_anchor();
    let GameState {
        tuning,
        ball,
        dog,
        score,
        latch,
        events,
        ..
    } = state;

    match dog.mood {
        Mood::Ready => {
            // Stand on the ground; idle wiggle is drawn, never simulated
            dog.pos.y = tuning.dog_ground_y();

            if !dog.has_ball && ball.is_idle() && !ball_at_anchor {
                log::debug!(
                    "Dog {} -> {}: ball at ({:.1}, {:.1})",
                    dog.mood.as_str(),
                    Mood::Chasing.as_str(),
                    ball.pos.x,
                    ball.pos.y
                );
                dog.mood = Mood::Chasing;
                events.push(GameEvent::ChaseStarted);
            }
        }

        Mood::Chasing => {
            if !ball.is_idle() {
                // Ball was thrown again or reset under us
                dog.mood = Mood::Ready;
                return;
            }

            dog.pos = move_toward(dog.pos, ball.pos, dog.speed);
            if dog.pos.distance(ball.pos) < tuning.pickup_radius {
                dog.has_ball = true;
                ball.carried = true;
                ball.in_air = false;
                ball.at_rest = false;
                ball.vel = Vec2::ZERO;
                ball.pos = carry_position(dog.pos, tuning);
                log::debug!(
                    "Dog {} -> {}: picked up the ball",
                    dog.mood.as_str(),
                    Mood::Returning.as_str()
                );
                dog.mood = Mood::Returning;
                events.push(GameEvent::PickedUp);
            }
        }

        Mood::Returning => {
            let speed = dog.return_speed(tuning);
            dog.pos = move_toward(dog.pos, anchor, speed);
            if dog.pos.distance(anchor) < tuning.drop_radius {
                dog.has_ball = false;
                ball.carried = false;
                ball.at_rest = true;
                ball.in_air = false;
                ball.vel = Vec2::ZERO;
                ball.pos = tuning.handoff_spot();
                dog.mood = Mood::Ready;

                let scored = latch.award(score);
                events.push(GameEvent::Delivered { scored });
                if scored {
                    log::info!("Fetch complete! Score: {}", score);
                } else {
                    log::trace!("Repeat handoff ignored (already scored)");
                }
            }
        }
    }
}
