// Sprite presentation state

/// A 2D sprite as seen by gameplay code: only which way it faces.
/// Drawing is somebody else's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sprite {
    /// Mirror the image horizontally
    pub flip_h: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_defaults_face_right() {
        assert!(!Sprite::default().flip_h);
    }
}
