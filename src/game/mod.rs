//! Side-scroll game loop: parallax layers, obstacle spawner, player
//! controller, contact resolver.

pub mod contact;
pub mod parallax;
pub mod player;
pub mod spawner;
pub mod types;

pub use contact::Contact;
pub use spawner::{ObstacleIds, SpawnTimer};
pub use types::{Game, RunState, Scoreboard, SoundCue};
