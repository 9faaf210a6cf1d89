//! Core game state: the scene arena, run state, scoreboard, sound cues.

use crate::game::spawner::SpawnTimer;
use crate::game::{contact, parallax, player, spawner};
use crate::scene::{Arena, EntityId};
use crate::tuning::Tuning;
use rand::Rng;

/// Lifecycle of one run. `Running -> Ended` happens exactly once, on the
/// first fatal contact; there is no way back (no restart).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Ended,
}

/// Fire-and-forget sound requests, drained by the binary each frame.
/// The core never touches an audio device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Score,
    Explosion,
}

/// Score plus its bound display text. The value only moves through
/// `award_point`, which refreshes the label in the same step -- no observer
/// hook between the two.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    value: u32,
    label: String,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            value: 0,
            label: "SCORE: 0".to_string(),
        }
    }

    pub fn award_point(&mut self) {
        self.value += 1;
        self.label = format!("SCORE: {}", self.value);
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

/// One run of the game: world entities plus the handful of scalars that are
/// not per-entity (plane velocity, score, timers).
#[derive(Debug, Clone)]
pub struct Game {
    pub tuning: Tuning,
    pub scene: Arena,
    pub run_state: RunState,
    pub scoreboard: Scoreboard,
    /// The single player entity; `None` once a fatal contact removed it.
    pub player: Option<EntityId>,
    /// Vertical velocity in world units per second (positive = up).
    pub plane_vel_y: f64,
    /// Current propeller animation frame.
    pub propeller_frame: usize,
    pub(crate) propeller_clock: f64,
    pub spawn_timer: SpawnTimer,
    sounds: Vec<SoundCue>,
    pub tick_count: u64,
}

impl Game {
    pub fn new(tuning: Tuning) -> Self {
        let mut scene = Arena::new();
        parallax::build_layers(&mut scene, &tuning);
        let player = player::spawn(&mut scene, &tuning);
        let spawn_timer = SpawnTimer::new(tuning.spawn_interval);
        Self {
            tuning,
            scene,
            run_state: RunState::Running,
            scoreboard: Scoreboard::new(),
            player: Some(player),
            plane_vel_y: 0.0,
            propeller_frame: 0,
            propeller_clock: 0.0,
            spawn_timer,
            sounds: Vec::new(),
            tick_count: 0,
        }
    }

    /// Advance the whole world by `dt` seconds.
    ///
    /// Order per tick: effects age (even after the run ends, so the explosion
    /// finishes playing), then -- only while running -- player physics,
    /// motion programs, the spawner, and contact resolution.
    pub fn tick(&mut self, dt: f64, rng: &mut impl Rng) {
        self.tick_count += 1;
        self.age_effects(dt);

        if self.run_state != RunState::Running {
            return;
        }

        player::step(self, dt);
        self.advance_motion(dt);
        spawner::tick(self, dt, rng);

        let contacts = contact::detect(self);
        contact::resolve(self, &contacts);
    }

    /// Tap input: reset vertical velocity to zero, then apply the fixed
    /// upward impulse. The reset makes every tap worth exactly the same.
    pub fn tap(&mut self) {
        if self.run_state != RunState::Running || self.player.is_none() {
            return;
        }
        self.plane_vel_y = 0.0;
        self.plane_vel_y += self.tuning.flap_impulse;
    }

    pub fn push_sound(&mut self, cue: SoundCue) {
        self.sounds.push(cue);
    }

    /// Drain pending sound cues (called by the frame loop).
    pub fn take_sounds(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.sounds)
    }

    /// Advance every motion program, translating its entity and despawning
    /// entities whose one-shot program finished.
    fn advance_motion(&mut self, dt: f64) {
        for id in self.scene.ids() {
            let mut finished = false;
            if let Some(entity) = self.scene.get_mut(id) {
                if let Some(motion) = entity.motion.as_mut() {
                    let tick = motion.advance(dt);
                    entity.pos += tick.displacement;
                    finished = tick.finished;
                }
            }
            if finished {
                self.scene.remove(id);
            }
        }
    }

    /// Age one-shot effect entities and drop the expired ones.
    fn age_effects(&mut self, dt: f64) {
        for id in self.scene.ids() {
            let mut expired = false;
            if let Some(entity) = self.scene.get_mut(id) {
                if let Some(ttl) = entity.ttl.as_mut() {
                    *ttl -= dt;
                    expired = *ttl <= 0.0;
                }
            }
            if expired {
                self.scene.remove(id);
            }
        }
    }
}
