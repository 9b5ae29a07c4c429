//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically. Ball
//! physics always runs before the dog, which reacts to where the ball ended up.

use glam::Vec2;

use super::agent::update_dog;
use super::physics::integrate_ball;
use super::state::{GameEvent, GameState};

/// One-shot commands applied before the step (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Throw with this drag vector (hand to pointer)
    pub throw: Option<Vec2>,
    /// Reset the world; the flag says whether to keep the score
    pub reset: Option<bool>,
}

/// Apply queued input, then advance the game state by one tick
///
/// `state.events` holds the events of this input and step only.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if let Some(preserve_score) = input.reset {
        state.reset(preserve_score);
    }
    if let Some(drag) = input.throw {
        state.throw_with(drag);
    }

    advance(state);
}

/// Advance the world one tick with no input: ball first, then dog
///
/// Clears `state.events` first, so it holds only this step's events.
pub fn step(state: &mut GameState) {
    state.events.clear();
    advance(state);
}

fn advance(state: &mut GameState) {
    state.time_ticks += 1;

    if integrate_ball(&mut state.ball, state.dog.pos, &state.tuning) {
        state.events.push(GameEvent::BallSettled);
        log::debug!(
            "Ball settled at ({:.1}, {:.1}) after {} ticks",
            state.ball.pos.x,
            state.ball.pos.y,
            state.time_ticks
        );
    }

    update_dog(state);
}
