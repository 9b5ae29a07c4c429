//! Exactly-once scoring latch
//!
//! The handoff condition can stay true for several consecutive ticks while the
//! dog lingers by the player's hand. The latch turns that level into a single
//! rising edge: only the first handoff after a throw awards a point.

use serde::{Deserialize, Serialize};

/// Rising-edge detector guarding the score counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLatch {
    just_scored: bool,
}

impl ScoreLatch {
    /// Re-arm for the next retrieval (a new throw started)
    pub fn arm(&mut self) {
        self.just_scored = false;
    }

    /// Returns true exactly once between two calls to [`ScoreLatch::arm`]
    pub fn fire(&mut self) -> bool {
        if self.just_scored {
            return false;
        }
        self.just_scored = true;
        true
    }

    pub fn is_latched(&self) -> bool {
        self.just_scored
    }

    /// Fire the latch and bump `score` if this is the first handoff
    pub fn award(&mut self, score: &mut u64) -> bool {
        let fired = self.fire();
        if fired {
            *score += 1;
        }
        fired
    }
}
