//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only (units are per tick)
//! - Ball physics before dog, every tick
//! - Presentation-only values never feed back into the state machine
//! - No rendering or platform dependencies

pub mod agent;
pub mod autoplay;
pub mod latch;
pub mod physics;
pub mod snapshot;
pub mod state;
pub mod throw;
pub mod tick;

pub use agent::{move_toward, update_dog};
pub use autoplay::Autoplay;
pub use latch::ScoreLatch;
pub use physics::integrate_ball;
pub use snapshot::Snapshot;
pub use state::{Aim, Ball, Dog, GameEvent, GameState, Mood};
pub use tick::{TickInput, step, tick};
