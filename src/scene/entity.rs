//! Entity records: position, depth, anchor, collision rect, role.

use crate::scene::motion::MotionProgram;

/// 2D vector in world units. The world is y-up; the renderer flips.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned rectangle in world units (min/max corners).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Where an entity's position sits inside its rectangle.
///
/// The ground and rocks are center-anchored (collision alignment), the
/// mountains hang from their bottom-left corner, the sky from its top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Center,
    BottomLeft,
    TopCenter,
}

/// What an entity is, for contact classification. A closed enum instead of
/// name-string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Player,
    Barrier,
    ScoreTrigger,
    Terrain,
    Backdrop,
    Effect,
}

/// Which character art the renderer uses for an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Plane,
    SkyTop,
    SkyBottom,
    Mountains,
    Ground,
    RockTop,
    RockBottom,
    Explosion,
}

/// A positioned, optionally collidable, optionally animated object.
#[derive(Debug, Clone)]
pub struct Entity {
    pub pos: Vec2,
    pub size: Vec2,
    pub anchor: Anchor,
    /// Render order; lower values are painted first.
    pub depth: i32,
    pub role: Role,
    /// `None` draws nothing (score triggers, the ceiling strip).
    pub sprite: Option<Sprite>,
    /// Whether the entity participates in contact detection.
    pub solid: bool,
    /// Cosmetic tilt in radians; never used in collision.
    pub rotation: f64,
    /// Remaining lifetime for one-shot effects.
    pub ttl: Option<f64>,
    pub motion: Option<MotionProgram>,
}

impl Entity {
    pub fn new(role: Role, pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            anchor: Anchor::Center,
            depth: 0,
            role,
            sprite: None,
            solid: false,
            rotation: 0.0,
            ttl: None,
            motion: None,
        }
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn depth(mut self, depth: i32) -> Self {
        self.depth = depth;
        self
    }

    pub fn sprite(mut self, sprite: Sprite) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn solid(mut self) -> Self {
        self.solid = true;
        self
    }

    pub fn motion(mut self, motion: MotionProgram) -> Self {
        self.motion = Some(motion);
        self
    }

    pub fn ttl(mut self, ttl: f64) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// World-space collision rectangle derived from position, size, anchor.
    pub fn rect(&self) -> Rect {
        let min = match self.anchor {
            Anchor::Center => Vec2::new(self.pos.x - self.size.x / 2.0, self.pos.y - self.size.y / 2.0),
            Anchor::BottomLeft => self.pos,
            Anchor::TopCenter => Vec2::new(self.pos.x - self.size.x / 2.0, self.pos.y - self.size.y),
        };
        Rect {
            min,
            max: min + self.size,
        }
    }
}
