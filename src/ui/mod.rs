//! Terminal rendering. Tightly coupled to ratatui; kept out of the logic
//! modules so the game core stays engine-agnostic.

pub mod effects;
pub mod game_common;
pub mod scene;

pub use scene::draw;
