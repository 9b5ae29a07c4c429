//! Browser binding
//!
//! Exposes the simulation to the JS canvas front end. JS owns the frame loop
//! and input events; it calls into [`FetchGame`] between frames and draws
//! from the JSON snapshot.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::sim::{GameState, Snapshot, step};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Already initialized if the module was loaded twice
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Fetch! starting...");
}

/// Game instance owned by the JS side
#[wasm_bindgen]
pub struct FetchGame {
    state: GameState,
}

#[wasm_bindgen]
impl FetchGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FetchGame {
        FetchGame {
            state: GameState::default(),
        }
    }

    /// Build a game from a JSON tuning override
    pub fn with_tuning(json: &str) -> Result<FetchGame, JsValue> {
        let tuning = Tuning::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(FetchGame {
            state: GameState::new(tuning),
        })
    }

    /// Pointer pressed at canvas coordinates
    pub fn begin_aim(&mut self, x: f32, y: f32) -> bool {
        self.state.begin_aim(Vec2::new(x, y))
    }

    /// Pointer dragged to canvas coordinates
    pub fn drag_to(&mut self, x: f32, y: f32) {
        self.state.aim_at(Vec2::new(x, y));
    }

    /// Pointer released
    pub fn release_throw(&mut self) -> bool {
        self.state.release_throw()
    }

    pub fn cancel_aim(&mut self) {
        self.state.cancel_aim();
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        step(&mut self.state);
    }

    /// 'R' key
    pub fn reset(&mut self, preserve_score: bool) {
        self.state.reset(preserve_score);
    }

    pub fn score(&self) -> f64 {
        self.state.score as f64
    }

    /// Current frame as JSON (see `Snapshot`)
    pub fn snapshot_json(&self) -> String {
        Snapshot::capture(&self.state).to_json()
    }
}

impl Default for FetchGame {
    fn default() -> Self {
        Self::new()
    }
}
