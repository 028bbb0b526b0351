// Math utilities and helper functions

use glam::Vec2;

/// Linear interpolation
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Build a direction vector from four axis strengths (0.0 to 1.0 each).
/// The result is unit length, or zero when the axes cancel out.
pub fn direction_from_axes(left: f32, right: f32, up: f32, down: f32) -> Vec2 {
    Vec2::new(right - left, down - up).normalize_or_zero()
}
