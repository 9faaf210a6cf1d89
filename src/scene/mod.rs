//! Engine-agnostic scene primitives: the entity arena and motion programs.

pub mod arena;
pub mod entity;
pub mod motion;

pub use arena::{Arena, EntityId};
pub use entity::{Anchor, Entity, Rect, Role, Sprite, Vec2};
pub use motion::{MotionProgram, MoveBy, Repeat};
