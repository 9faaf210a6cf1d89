//! Explosion burst glyphs, keyed off the effect entity's remaining lifetime.

use ratatui::style::Color;

/// Glyph and color for an explosion at `progress` through its lifetime
/// (0.0 = just spawned, 1.0 = about to expire).
pub fn explosion_frame(progress: f64) -> (char, Color) {
    if progress < 0.3 {
        ('✶', Color::White)
    } else if progress < 0.6 {
        ('*', Color::Yellow)
    } else {
        ('·', Color::Red)
    }
}
