//! Demo mode: an automatic thrower
//!
//! Throws a random (seeded) ball whenever the player has it in hand, so the
//! simulation can run unattended for demos and soak tests.

use std::f32::consts::PI;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::GameState;
use super::tick::TickInput;

/// Seeded random thrower
#[derive(Debug, Clone)]
pub struct Autoplay {
    rng: Pcg32,
    /// Ticks to wait with the ball in hand before throwing
    pub wind_up_ticks: u32,
    waited: u32,
}

impl Autoplay {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            wind_up_ticks: 30,
            waited: 0,
        }
    }

    /// Pick a drag vector aimed up and into the field
    pub fn next_drag(&mut self, max_drag: f32) -> Vec2 {
        // Screen y grows downward: negative angles point up
        let angle = self.rng.random_range(-0.45 * PI..-0.05 * PI);
        let power = self.rng.random_range(0.3..1.0) * max_drag;
        Vec2::new(angle.cos(), angle.sin()) * power
    }

    /// Input for the next tick
    pub fn input_for(&mut self, state: &GameState) -> TickInput {
        if !state.can_throw() {
            self.waited = 0;
            return TickInput::default();
        }
        if self.waited < self.wind_up_ticks {
            self.waited += 1;
            return TickInput::default();
        }

        self.waited = 0;
        TickInput {
            throw: Some(self.next_drag(state.tuning.max_drag)),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::tick;

    #[test]
    fn test_drags_point_up_and_right() {
        let mut auto = Autoplay::new(7);
        for _ in 0..100 {
            let drag = auto.next_drag(420.0);
            assert!(drag.x > 0.0);
            assert!(drag.y < 0.0);
            assert!(drag.length() <= 420.0 + 1e-3);
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = (GameState::default(), Autoplay::new(42));
        let mut b = (GameState::default(), Autoplay::new(42));
        for _ in 0..3000 {
            let input = a.1.input_for(&a.0);
            tick(&mut a.0, &input);
            let input = b.1.input_for(&b.0);
            tick(&mut b.0, &input);
        }
        assert_eq!(a.0.score, b.0.score);
        assert_eq!(a.0.ball.pos, b.0.ball.pos);
        assert!(a.0.score >= 1);
    }
}
