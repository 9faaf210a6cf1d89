//! Obstacle spawner: paired rock barriers plus an invisible score trigger.

use crate::constants::GAP_DRAW_MIN;
use crate::game::types::{Game, RunState};
use crate::scene::{Entity, EntityId, MotionProgram, Role, Sprite, Vec2};
use rand::Rng;

/// Accumulator timer for the fixed spawn cadence. Catch-up safe: a long
/// frame can fire more than once.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval: f64,
    elapsed: f64,
}

impl SpawnTimer {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt`; returns how many times the timer fired.
    /// A non-positive interval never fires instead of spinning.
    pub fn tick(&mut self, dt: f64) -> u32 {
        if self.interval <= 0.0 {
            return 0;
        }
        self.elapsed += dt;
        let mut fires = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fires += 1;
        }
        fires
    }
}

/// Handles of one spawned obstacle set, treated as a unit at spawn time and
/// resolved independently on contact.
#[derive(Debug, Clone, Copy)]
pub struct ObstacleIds {
    pub top: EntityId,
    pub bottom: EntityId,
    pub trigger: EntityId,
}

/// Tick the spawner. Only called while the run is in progress; after a
/// crash the timer is simply never advanced again, so no obstacles are
/// constructed for a dead run.
pub fn tick(game: &mut Game, dt: f64, rng: &mut impl Rng) {
    debug_assert_eq!(game.run_state, RunState::Running);
    let fires = game.spawn_timer.tick(dt);
    for _ in 0..fires {
        spawn_obstacle(game, rng);
    }
}

/// Build one obstacle set just off the right edge and start it moving.
///
/// The gap center is drawn uniformly from `[-50, floor(world_h/3)]`,
/// independently per spawn. The top rock sits `barrier_height + gap_margin`
/// above the draw, the bottom rock `gap_margin` below it, so the rock
/// spacing is a constant `2*gap_margin + barrier_height` regardless of the
/// draw. The draw range is not clamped against short worlds; gaps may be
/// unreachable there (accepted tuning behavior).
pub fn spawn_obstacle(game: &mut Game, rng: &mut impl Rng) -> ObstacleIds {
    let t = game.tuning.clone();
    let gap_y = f64::from(rng.gen_range(GAP_DRAW_MIN..=t.gap_draw_max()));

    let spawn_x = t.world_w + t.barrier_width;
    let travel = -(t.world_w + 2.0 * t.barrier_width);
    let motion = || MotionProgram::traverse_once(travel, t.traverse_duration);
    let rock_size = Vec2::new(t.barrier_width, t.barrier_height);

    let top = game.scene.insert(
        Entity::new(
            Role::Barrier,
            Vec2::new(spawn_x, gap_y + t.barrier_height + t.gap_margin),
            rock_size,
        )
        .depth(-20)
        .sprite(Sprite::RockTop)
        .solid()
        .motion(motion()),
    );

    let bottom = game.scene.insert(
        Entity::new(
            Role::Barrier,
            Vec2::new(spawn_x, gap_y - t.gap_margin),
            rock_size,
        )
        .depth(-20)
        .sprite(Sprite::RockBottom)
        .solid()
        .motion(motion()),
    );

    // Full-height invisible strip, a little to the right of the rocks so it
    // is touched only after the plane has cleared them.
    let trigger = game.scene.insert(
        Entity::new(
            Role::ScoreTrigger,
            Vec2::new(spawn_x + t.trigger_width * 2.0, t.world_h / 2.0),
            Vec2::new(t.trigger_width, t.world_h),
        )
        .depth(-20)
        .solid()
        .motion(motion()),
    );

    ObstacleIds {
        top,
        bottom,
        trigger,
    }
}
