//! Propwash - Terminal Side-Scrolling Plane Game Library
//!
//! Exposes the simulation core for integration tests and external use.

// Allow dead code in library - some accessors are only used by the binary
#![allow(dead_code)]

pub mod audio;
pub mod constants;
pub mod game;
pub mod input;
pub mod scene;
pub mod tuning;
pub mod ui;

pub use constants::TICK_INTERVAL_MS;
pub use game::{Game, RunState, Scoreboard, SoundCue};
pub use tuning::Tuning;
