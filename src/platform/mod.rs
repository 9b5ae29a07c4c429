//! Platform abstraction layer
//!
//! The browser front end (canvas drawing, pointer and keyboard wiring) lives in
//! JavaScript and talks to the simulation through the `web` binding.

#[cfg(target_arch = "wasm32")]
pub mod web;
