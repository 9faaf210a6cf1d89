//! Player controller: gravity, tap impulses, cosmetic tilt, propeller spin.

use crate::constants::{PROPELLER_FRAMES, PROPELLER_FRAME_TIME};
use crate::game::types::Game;
use crate::scene::{Arena, Entity, EntityId, Role, Sprite, Vec2};
use crate::tuning::Tuning;

/// Plane sprite footprint in world units; doubles as the collision rect.
pub const PLANE_WIDTH: f64 = 88.0;
pub const PLANE_HEIGHT: f64 = 36.0;

/// Create the one player entity: a sixth of the way in, three quarters up.
pub fn spawn(scene: &mut Arena, tuning: &Tuning) -> EntityId {
    scene.insert(
        Entity::new(
            Role::Player,
            Vec2::new(tuning.world_w / 6.0, tuning.world_h * 0.75),
            Vec2::new(PLANE_WIDTH, PLANE_HEIGHT),
        )
        .depth(10)
        .sprite(Sprite::Plane)
        .solid(),
    )
}

/// One simulation step: integrate vertical motion, ease the tilt toward the
/// velocity-proportional target, spin the propeller.
pub fn step(game: &mut Game, dt: f64) {
    let Some(id) = game.player else {
        return;
    };

    game.plane_vel_y += game.tuning.gravity_y * dt;
    let vel = game.plane_vel_y;
    let tilt_target = vel * game.tuning.tilt_scale;
    let tilt_rate = (dt / game.tuning.tilt_duration).min(1.0);

    if let Some(plane) = game.scene.get_mut(id) {
        plane.pos.y += vel * dt;
        // Short smooth rotate toward the target; purely cosmetic
        plane.rotation += (tilt_target - plane.rotation) * tilt_rate;
    }

    // The propeller cycle ignores vertical state entirely
    game.propeller_clock += dt;
    while game.propeller_clock >= PROPELLER_FRAME_TIME {
        game.propeller_clock -= PROPELLER_FRAME_TIME;
        game.propeller_frame = (game.propeller_frame + 1) % PROPELLER_FRAMES;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Game;
    use crate::tuning::Tuning;

    #[test]
    fn test_spawn_position() {
        let tuning = Tuning::default();
        let mut scene = Arena::new();
        let id = spawn(&mut scene, &tuning);
        let plane = scene.get(id).unwrap();
        assert!((plane.pos.x - tuning.world_w / 6.0).abs() < f64::EPSILON);
        assert!((plane.pos.y - tuning.world_h * 0.75).abs() < f64::EPSILON);
        assert_eq!(plane.role, Role::Player);
        assert!(plane.solid);
    }

    #[test]
    fn test_gravity_pulls_plane_down() {
        let mut game = Game::new(Tuning::default());
        let id = game.player.unwrap();
        let start_y = game.scene.get(id).unwrap().pos.y;

        step(&mut game, 0.1);
        step(&mut game, 0.1);

        assert!(game.plane_vel_y < 0.0);
        assert!(game.scene.get(id).unwrap().pos.y < start_y);
    }

    #[test]
    fn test_tilt_follows_velocity_sign() {
        let mut game = Game::new(Tuning::default());
        game.plane_vel_y = 200.0;
        step(&mut game, 0.05);
        let up_tilt = game.scene.get(game.player.unwrap()).unwrap().rotation;
        assert!(up_tilt > 0.0);

        game.plane_vel_y = -400.0;
        for _ in 0..20 {
            step(&mut game, 0.05);
        }
        let down_tilt = game.scene.get(game.player.unwrap()).unwrap().rotation;
        assert!(down_tilt < 0.0);
    }

    #[test]
    fn test_propeller_cycles_through_frames() {
        let mut game = Game::new(Tuning::default());
        let mut seen = [false; PROPELLER_FRAMES];
        for _ in 0..PROPELLER_FRAMES {
            seen[game.propeller_frame] = true;
            step(&mut game, PROPELLER_FRAME_TIME);
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_step_without_player_is_noop() {
        let mut game = Game::new(Tuning::default());
        game.player = None;
        step(&mut game, 0.1);
        assert!((game.plane_vel_y).abs() < f64::EPSILON);
    }
}
