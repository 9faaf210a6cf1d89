//! Gameplay tuning, optionally loaded from a JSON file.

use crate::constants::*;
use serde::Deserialize;
use std::io;
use std::path::Path;

/// Every gameplay constant in one struct. Defaults mirror `constants.rs`;
/// a tuning file only needs the fields it wants to change.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub world_w: f64,
    pub world_h: f64,
    pub gravity_y: f64,
    pub flap_impulse: f64,
    pub tilt_scale: f64,
    pub tilt_duration: f64,
    pub spawn_interval: f64,
    pub traverse_duration: f64,
    /// Vertical clearance around the drawn gap center. Smaller = harder.
    pub gap_margin: f64,
    pub barrier_width: f64,
    pub barrier_height: f64,
    pub trigger_width: f64,
    pub background_scroll_duration: f64,
    pub ground_scroll_duration: f64,
    pub ground_height: f64,
    pub explosion_lifetime: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_w: WORLD_W,
            world_h: WORLD_H,
            gravity_y: GRAVITY_Y,
            flap_impulse: FLAP_IMPULSE,
            tilt_scale: TILT_SCALE,
            tilt_duration: TILT_DURATION,
            spawn_interval: SPAWN_INTERVAL,
            traverse_duration: TRAVERSE_DURATION,
            gap_margin: GAP_MARGIN,
            barrier_width: BARRIER_WIDTH,
            barrier_height: BARRIER_HEIGHT,
            trigger_width: TRIGGER_WIDTH,
            background_scroll_duration: BACKGROUND_SCROLL_DURATION,
            ground_scroll_duration: GROUND_SCROLL_DURATION,
            ground_height: GROUND_HEIGHT,
            explosion_lifetime: EXPLOSION_LIFETIME,
        }
    }
}

impl Tuning {
    /// Upper bound of the gap-center draw: floor(world_h / 3).
    /// The lower bound is fixed at -50. No clamp keeps the gap reachable on
    /// very short worlds; that is accepted tuning behavior.
    pub fn gap_draw_max(&self) -> i32 {
        (self.world_h / 3.0).floor() as i32
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let tuning: Tuning =
            serde_json::from_str(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        tuning
            .validate()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(tuning)
    }

    /// Durations and dimensions must be positive; a zero interval would
    /// stall the accumulator timers. Also rejects NaN.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("world_w", self.world_w),
            ("world_h", self.world_h),
            ("tilt_duration", self.tilt_duration),
            ("spawn_interval", self.spawn_interval),
            ("traverse_duration", self.traverse_duration),
            ("barrier_width", self.barrier_width),
            ("barrier_height", self.barrier_height),
            ("trigger_width", self.trigger_width),
            ("background_scroll_duration", self.background_scroll_duration),
            ("ground_scroll_duration", self.ground_scroll_duration),
            ("ground_height", self.ground_height),
            ("explosion_lifetime", self.explosion_lifetime),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(format!("{} must be positive (got {})", name, value));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let t = Tuning::default();
        assert_eq!(t.gap_margin, GAP_MARGIN);
        assert_eq!(t.flap_impulse, FLAP_IMPULSE);
        assert_eq!(t.spawn_interval, SPAWN_INTERVAL);
        assert_eq!(t.traverse_duration, TRAVERSE_DURATION);
    }

    #[test]
    fn test_gap_draw_max() {
        let t = Tuning::default();
        assert_eq!(t.gap_draw_max(), 256);

        let short = Tuning {
            world_h: 100.0,
            ..Tuning::default()
        };
        assert_eq!(short.gap_draw_max(), 33);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let t: Tuning = serde_json::from_str(r#"{"gap_margin": 40.0}"#).unwrap();
        assert_eq!(t.gap_margin, 40.0);
        assert_eq!(t.world_w, WORLD_W);
    }

    #[test]
    fn test_validate_rejects_zero_spawn_interval() {
        // A zero interval would make the spawn timer spin forever
        let t: Tuning = serde_json::from_str(r#"{"spawn_interval": 0.0}"#).unwrap();
        let err = t.validate().unwrap_err();
        assert!(err.contains("spawn_interval"));
    }

    #[test]
    fn test_validate_rejects_negative_durations() {
        let t = Tuning {
            traverse_duration: -1.0,
            ..Tuning::default()
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(Tuning::default().validate().is_ok());
    }
}
