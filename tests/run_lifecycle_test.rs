//! Integration test: Run lifecycle
//!
//! A run starts in Running, scores through trigger contacts, ends exactly
//! once on a fatal contact, and stays frozen afterward.

use propwash::game::Game;
use propwash::scene::{Entity, Role, Vec2};
use propwash::{RunState, SoundCue, Tuning};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A game whose spawner never fires, for scenarios that stage their own
/// obstacles.
fn quiet_game() -> Game {
    let tuning = Tuning {
        spawn_interval: 1e9,
        ..Tuning::default()
    };
    Game::new(tuning)
}

fn count_role(game: &Game, role: Role) -> usize {
    game.scene.iter().filter(|(_, e)| e.role == role).count()
}

// =============================================================================
// Input and physics
// =============================================================================

#[test]
fn test_tap_while_diving_yields_fixed_impulse() {
    let mut game = quiet_game();
    game.plane_vel_y = -40.0;
    game.tap();
    assert!((game.plane_vel_y - 20.0).abs() < f64::EPSILON);
}

#[test]
fn test_gravity_eventually_grounds_the_plane() {
    let mut game = quiet_game();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let mut ticks = 0;
    while game.run_state == RunState::Running && ticks < 5000 {
        game.tick(0.05, &mut rng);
        ticks += 1;
    }

    assert_eq!(game.run_state, RunState::Ended);
    assert!(game.player.is_none());
    assert_eq!(count_role(&game, Role::Player), 0);
}

#[test]
fn test_taps_keep_the_plane_flying() {
    let mut game = quiet_game();
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    // Tap whenever the dive matches the climb; the resulting hover is
    // symmetric, so the plane neither grounds nor hits the ceiling
    for _ in 0..2000 {
        if game.plane_vel_y < -20.0 {
            game.tap();
        }
        game.tick(0.05, &mut rng);
    }
    assert_eq!(game.run_state, RunState::Running);
    assert!(game.player.is_some());
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_trigger_pass_scores_once_and_spares_the_plane() {
    let mut game = quiet_game();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let player_pos = game.scene.get(game.player.unwrap()).unwrap().pos;

    let trigger = game.scene.insert(
        Entity::new(
            Role::ScoreTrigger,
            Vec2::new(player_pos.x, game.tuning.world_h / 2.0),
            Vec2::new(game.tuning.trigger_width, game.tuning.world_h),
        )
        .solid(),
    );

    game.tick(0.016, &mut rng);

    assert_eq!(game.scoreboard.value(), 1);
    assert!(!game.scene.contains(trigger));
    assert!(game.player.is_some());
    assert_eq!(game.run_state, RunState::Running);
    assert_eq!(game.take_sounds(), vec![SoundCue::Score]);

    // The trigger is consumed: further ticks do not re-score
    game.tick(0.016, &mut rng);
    assert_eq!(game.scoreboard.value(), 1);
}

#[test]
fn test_full_run_through_a_gap_scores() {
    // Let the spawner run and hover through with taps. A wide training gap
    // makes every drawn gap overlap the hover band, so clearing the rocks is
    // a matter of holding altitude until the trigger sweeps past.
    let tuning = Tuning {
        gap_margin: 300.0,
        ..Tuning::default()
    };
    let mut game = Game::new(tuning);
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    // Start at hover altitude so the first set is already survivable
    let player = game.player.unwrap();
    game.scene.get_mut(player).unwrap().pos.y = 250.0;

    let mut ticks = 0;
    while game.run_state == RunState::Running
        && game.scoreboard.value() == 0
        && ticks < 20_000
    {
        // Hold altitude around y = 250, inside every possible gap
        let y = game
            .player
            .and_then(|id| game.scene.get(id))
            .map(|e| e.pos.y)
            .unwrap_or(0.0);
        if y < 250.0 && game.plane_vel_y < 0.0 {
            game.tap();
        }
        game.tick(0.016, &mut rng);
        ticks += 1;
    }

    assert_eq!(game.run_state, RunState::Running);
    assert!(game.scoreboard.value() >= 1);
}

// =============================================================================
// Fatal contacts
// =============================================================================

#[test]
fn test_fatal_contact_freezes_the_world() {
    let mut game = Game::new(Tuning::default());
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    // Run past a few spawn intervals, never tapping: the plane falls and
    // dies, either on a rock or on the ground.
    let mut ticks = 0;
    while game.run_state == RunState::Running && ticks < 5000 {
        game.tick(0.05, &mut rng);
        ticks += 1;
    }
    assert_eq!(game.run_state, RunState::Ended);

    // Everything stops: obstacle positions hold and no new sets spawn
    let barriers_at_end = count_role(&game, Role::Barrier);
    let positions: Vec<Vec2> = game
        .scene
        .iter()
        .filter(|(_, e)| e.role == Role::Barrier)
        .map(|(_, e)| e.pos)
        .collect();

    for _ in 0..200 {
        game.tick(0.05, &mut rng);
    }
    assert_eq!(count_role(&game, Role::Barrier), barriers_at_end);
    let positions_after: Vec<Vec2> = game
        .scene
        .iter()
        .filter(|(_, e)| e.role == Role::Barrier)
        .map(|(_, e)| e.pos)
        .collect();
    assert_eq!(positions, positions_after);

    // Score is frozen too
    let score = game.scoreboard.value();
    game.tap();
    for _ in 0..50 {
        game.tick(0.05, &mut rng);
    }
    assert_eq!(game.scoreboard.value(), score);
}

#[test]
fn test_explosion_spawns_then_burns_out() {
    let mut game = quiet_game();
    let mut rng = ChaCha8Rng::seed_from_u64(6);

    // Drop the plane straight onto the ground band
    let player = game.player.unwrap();
    let crash_x = game.scene.get(player).unwrap().pos.x;
    game.scene.get_mut(player).unwrap().pos.y = game.tuning.ground_height + 1.0;
    game.plane_vel_y = -100.0;

    let mut ticks = 0;
    while game.run_state == RunState::Running && ticks < 100 {
        game.tick(0.016, &mut rng);
        ticks += 1;
    }
    assert_eq!(game.run_state, RunState::Ended);
    assert_eq!(game.take_sounds(), vec![SoundCue::Explosion]);

    // The explosion sits where the plane was and keeps aging after the end
    let effects: Vec<Vec2> = game
        .scene
        .iter()
        .filter(|(_, e)| e.role == Role::Effect)
        .map(|(_, e)| e.pos)
        .collect();
    assert_eq!(effects.len(), 1);
    assert!((effects[0].x - crash_x).abs() < f64::EPSILON);

    for _ in 0..100 {
        game.tick(0.016, &mut rng);
    }
    assert_eq!(count_role(&game, Role::Effect), 0);
}

#[test]
fn test_second_fatal_event_is_ignored() {
    let mut game = quiet_game();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    // Two overlapping terrain blocks at the plane's position produce two
    // contact events in the same tick; only the first may resolve.
    let player_pos = game.scene.get(game.player.unwrap()).unwrap().pos;
    for _ in 0..2 {
        game.scene
            .insert(Entity::new(Role::Terrain, player_pos, Vec2::new(50.0, 50.0)).solid());
    }

    game.tick(0.016, &mut rng);

    assert_eq!(game.run_state, RunState::Ended);
    assert_eq!(count_role(&game, Role::Effect), 1);
    assert_eq!(game.take_sounds(), vec![SoundCue::Explosion]);
}
