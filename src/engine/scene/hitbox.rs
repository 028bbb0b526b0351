// Attack hit-detection area

use glam::Vec2;

/// Axis-aligned area in front of a character where its attacks land.
/// A negative `scale.x` mirrors the area to the character's left.
#[derive(Debug, Clone, PartialEq)]
pub struct HitBox {
    /// Center of the area relative to the character, before scaling
    pub offset: Vec2,
    /// Full extents of the area
    pub size: Vec2,
    pub scale: Vec2,
}

impl HitBox {
    pub fn new(offset: Vec2, size: Vec2) -> Self {
        Self {
            offset,
            size,
            scale: Vec2::ONE,
        }
    }

    /// (min, max) corners relative to the character, after scaling
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let center = self.offset * self.scale;
        let half = (self.size * self.scale).abs() / 2.0;
        (center - half, center + half)
    }
}

impl Default for HitBox {
    fn default() -> Self {
        Self::new(Vec2::new(12.0, 0.0), Vec2::new(14.0, 10.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmirrored_bounds() {
        let hitbox = HitBox::new(Vec2::new(10.0, 0.0), Vec2::new(4.0, 2.0));
        let (min, max) = hitbox.bounds();
        assert_eq!(min, Vec2::new(8.0, -1.0));
        assert_eq!(max, Vec2::new(12.0, 1.0));
    }

    #[test]
    fn test_mirrored_bounds_swap_sides() {
        let mut hitbox = HitBox::new(Vec2::new(10.0, 0.0), Vec2::new(4.0, 2.0));
        hitbox.scale.x = -1.0;

        let (min, max) = hitbox.bounds();
        assert_eq!(min, Vec2::new(-12.0, -1.0));
        assert_eq!(max, Vec2::new(-8.0, 1.0));
    }
}
