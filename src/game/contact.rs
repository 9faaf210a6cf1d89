//! Contact detection and resolution.
//!
//! Detection is a per-tick AABB sweep of the player against every solid
//! entity. Resolution classifies each event by role: score triggers take
//! strict priority over fatal handling, and a lookup miss on either handle
//! means the event is a stale double delivery and is ignored.

use crate::game::types::{Game, RunState, SoundCue};
use crate::scene::{Entity, EntityId, Role, Sprite, Vec2};

/// One pairwise overlap event. Participant order is not meaningful; the
/// resolver checks both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub a: EntityId,
    pub b: EntityId,
}

/// All player-vs-solid overlaps this tick.
pub fn detect(game: &Game) -> Vec<Contact> {
    let Some(player_id) = game.player else {
        return Vec::new();
    };
    let Some(player) = game.scene.get(player_id) else {
        return Vec::new();
    };
    let player_rect = player.rect();

    game.scene
        .iter()
        .filter(|(id, e)| *id != player_id && e.solid && e.rect().overlaps(&player_rect))
        .map(|(id, _)| Contact {
            a: player_id,
            b: id,
        })
        .collect()
}

/// Resolve a batch of contact events in order.
pub fn resolve(game: &mut Game, contacts: &[Contact]) {
    for contact in contacts {
        resolve_one(game, *contact);
    }
}

fn resolve_one(game: &mut Game, contact: Contact) {
    let role_a = game.scene.get(contact.a).map(|e| e.role);
    let role_b = game.scene.get(contact.b).map(|e| e.role);

    // 1. Trigger-zone contacts score and are never fatal, whichever side of
    //    the event the trigger landed on.
    if role_a == Some(Role::ScoreTrigger) || role_b == Some(Role::ScoreTrigger) {
        let victim = if game.player == Some(contact.a) {
            contact.b
        } else {
            contact.a
        };
        game.scene.remove(victim);
        game.push_sound(SoundCue::Score);
        game.scoreboard.award_point();
        return;
    }

    // 2. Stale event: a participant was already removed by an earlier event
    //    this tick.
    if !game.scene.contains(contact.a) || !game.scene.contains(contact.b) {
        return;
    }

    // 3. Anything else touching the player is fatal.
    if game.player == Some(contact.a) || game.player == Some(contact.b) {
        fatal(game);
    }
}

/// First fatal contact: explosion where the plane was, sound, remove the
/// player, end the run. The spawner and all motion stop with the run state.
fn fatal(game: &mut Game) {
    let Some(player_id) = game.player.take() else {
        return;
    };
    let last_pos = game
        .scene
        .get(player_id)
        .map(|e| e.pos)
        .unwrap_or(Vec2::ZERO);

    game.scene.remove(player_id);
    game.scene.insert(
        Entity::new(Role::Effect, last_pos, Vec2::new(80.0, 80.0))
            .depth(20)
            .sprite(Sprite::Explosion)
            .ttl(game.tuning.explosion_lifetime),
    );
    game.push_sound(SoundCue::Explosion);
    game.run_state = RunState::Ended;
}
