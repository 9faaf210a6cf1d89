//! Scrolling backdrop: sky, mountains, ground, and the ceiling strip.
//!
//! Each scrolling layer is two adjacent tiles of width W running the same
//! infinite loop -- drift left by W, snap back instantly -- phase-shifted by
//! their starting offsets so the pair always covers the visible width.

use crate::constants::{CEILING_THICKNESS, MOUNTAIN_BASE_Y, MOUNTAIN_HEIGHT};
use crate::scene::{Anchor, Arena, Entity, MotionProgram, Role, Sprite, Vec2};
use crate::tuning::Tuning;

pub fn build_layers(scene: &mut Arena, tuning: &Tuning) {
    build_sky(scene, tuning);
    build_mountains(scene, tuning);
    build_ground(scene, tuning);
    build_ceiling(scene, tuning);
}

/// Two static color bands, hung from the top so they stack cleanly.
fn build_sky(scene: &mut Arena, tuning: &Tuning) {
    let w = tuning.world_w;
    let h = tuning.world_h;

    scene.insert(
        Entity::new(Role::Backdrop, Vec2::new(w / 2.0, h), Vec2::new(w, h * 0.67))
            .anchor(Anchor::TopCenter)
            .depth(-40)
            .sprite(Sprite::SkyTop),
    );
    scene.insert(
        Entity::new(
            Role::Backdrop,
            Vec2::new(w / 2.0, h * 0.33),
            Vec2::new(w, h * 0.33),
        )
        .anchor(Anchor::TopCenter)
        .depth(-40)
        .sprite(Sprite::SkyBottom),
    );
}

/// Distant mountains: slow drift for the depth cue. The second tile starts
/// one unit short of a full width to hide the seam.
fn build_mountains(scene: &mut Arena, tuning: &Tuning) {
    let w = tuning.world_w;
    for i in 0..2u32 {
        let x = w * f64::from(i) - f64::from(i);
        scene.insert(
            Entity::new(
                Role::Backdrop,
                Vec2::new(x, MOUNTAIN_BASE_Y),
                Vec2::new(w, MOUNTAIN_HEIGHT),
            )
            .anchor(Anchor::BottomLeft)
            .depth(-30)
            .sprite(Sprite::Mountains)
            .motion(MotionProgram::scroll_loop(
                w,
                tuning.background_scroll_duration,
            )),
        );
    }
}

/// Ground tiles scroll faster than the mountains and keep the default
/// center anchor so their collision rects line up with what is drawn.
fn build_ground(scene: &mut Arena, tuning: &Tuning) {
    let w = tuning.world_w;
    let h = tuning.ground_height;
    for i in 0..2u32 {
        scene.insert(
            Entity::new(
                Role::Terrain,
                Vec2::new(w / 2.0 + w * f64::from(i), h / 2.0),
                Vec2::new(w, h),
            )
            .depth(-10)
            .sprite(Sprite::Ground)
            .solid()
            .motion(MotionProgram::scroll_loop(w, tuning.ground_scroll_duration)),
        );
    }
}

/// Invisible solid strip just above the world: flying off the top is as
/// fatal as hitting the ground.
fn build_ceiling(scene: &mut Arena, tuning: &Tuning) {
    let w = tuning.world_w;
    scene.insert(
        Entity::new(
            Role::Terrain,
            Vec2::new(w / 2.0, tuning.world_h + CEILING_THICKNESS / 2.0),
            Vec2::new(w * 3.0, CEILING_THICKNESS),
        )
        .solid(),
    );
}
