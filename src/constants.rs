// Frame timing
pub const TICK_INTERVAL_MS: u64 = 16;

// World dimensions (world units, y-up)
pub const WORLD_W: f64 = 1024.0;
pub const WORLD_H: f64 = 768.0;

// Player physics
pub const GRAVITY_Y: f64 = -5.0;
pub const FLAP_IMPULSE: f64 = 20.0;

// Cosmetic tilt: rotation target is vertical velocity times this scale,
// approached smoothly over the duration below
pub const TILT_SCALE: f64 = 0.001;
pub const TILT_DURATION: f64 = 0.1;

// Propeller sprite cycle (3 frames, effectively every frame)
pub const PROPELLER_FRAMES: usize = 3;
pub const PROPELLER_FRAME_TIME: f64 = 0.01;

// Obstacles
pub const SPAWN_INTERVAL: f64 = 3.0;
pub const TRAVERSE_DURATION: f64 = 6.2;
pub const GAP_MARGIN: f64 = 70.0;
pub const BARRIER_WIDTH: f64 = 100.0;
pub const BARRIER_HEIGHT: f64 = 300.0;
pub const TRIGGER_WIDTH: f64 = 32.0;
pub const GAP_DRAW_MIN: i32 = -50;

// Scroll layers
pub const BACKGROUND_SCROLL_DURATION: f64 = 20.0;
pub const GROUND_SCROLL_DURATION: f64 = 5.0;
pub const GROUND_HEIGHT: f64 = 60.0;
pub const MOUNTAIN_HEIGHT: f64 = 300.0;
pub const MOUNTAIN_BASE_Y: f64 = 100.0;
pub const CEILING_THICKNESS: f64 = 20.0;

// Effects
pub const EXPLOSION_LIFETIME: f64 = 0.6;
