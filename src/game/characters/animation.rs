// Character animation playback

use std::collections::HashMap;

/// Clip names every player animation set must provide
pub const REQUIRED_ANIMATIONS: [&str; 5] =
    ["idle", "walk", "punch_animation", "low_kick", "high_kick"];

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Name of the animation (e.g., "idle", "walk", "low_kick")
    pub name: String,
    /// Number of frames in the animation
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Whether the animation loops
    pub looping: bool,
}

impl AnimationClip {
    pub fn new(name: &str, frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            frame_count: frame_count.max(1),
            frame_duration: 1.0 / fps,
            looping,
        }
    }

    /// Create a looping animation
    pub fn looping(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, true)
    }

    /// Create a one-shot animation (plays once, then reports finished)
    pub fn one_shot(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, false)
    }
}

/// Manages animation playback for a character
#[derive(Debug)]
pub struct AnimationPlayer {
    animations: HashMap<String, AnimationClip>,
    current_animation: String,
    current_frame: usize,
    /// Time elapsed in current frame
    frame_timer: f32,
    playing: bool,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            animations: HashMap::new(),
            current_animation: String::new(),
            current_frame: 0,
            frame_timer: 0.0,
            playing: false,
        }
    }

    /// Create an animation player with the player character's clips
    pub fn with_player_animations() -> Self {
        let mut player = Self::new();

        player.add_animation(AnimationClip::looping("idle", 4, 8.0));
        player.add_animation(AnimationClip::looping("walk", 6, 10.0));

        // Attacks play once; finishing one advances the combo
        player.add_animation(AnimationClip::one_shot("punch_animation", 4, 12.0));
        player.add_animation(AnimationClip::one_shot("low_kick", 5, 12.0));
        player.add_animation(AnimationClip::one_shot("high_kick", 6, 12.0));

        player.play("idle");
        player
    }

    pub fn add_animation(&mut self, clip: AnimationClip) {
        self.animations.insert(clip.name.clone(), clip);
    }

    pub fn has_animation(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    /// Play an animation by name.
    /// Keeps going if it is already playing; starts over if it is different or has stopped.
    pub fn play(&mut self, name: &str) {
        if self.current_animation != name || !self.playing {
            if !self.has_animation(name) {
                log::warn!("Unknown animation '{}'", name);
            }
            self.current_animation = name.to_string();
            self.current_frame = 0;
            self.frame_timer = 0.0;
            self.playing = true;
        }
    }

    /// Advance playback. Returns the clip name when a one-shot clip reaches its end.
    pub fn update(&mut self, dt: f32) -> Option<String> {
        if !self.playing {
            return None;
        }

        let clip = self.animations.get(&self.current_animation)?;

        self.frame_timer += dt;

        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frame_count {
                if clip.looping {
                    self.current_frame = 0;
                } else {
                    // Stay on last frame
                    self.current_frame = clip.frame_count - 1;
                    self.playing = false;
                    return Some(clip.name.clone());
                }
            }
        }

        None
    }

    pub fn current_animation(&self) -> &str {
        &self.current_animation
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_animation_clip_creation() {
        let clip = AnimationClip::looping("idle", 4, 8.0);
        assert_eq!(clip.name, "idle");
        assert_eq!(clip.frame_count, 4);
        assert_eq!(clip.frame_duration, 0.125); // 1/8
        assert!(clip.looping);
    }

    #[test]
    fn test_one_shot_clip_timing() {
        let clip = AnimationClip::one_shot("low_kick", 6, 10.0);
        assert!(!clip.looping);
        assert_relative_eq!(clip.frame_duration, 0.1, epsilon = 1e-6);
    }

    #[test]
    fn test_player_animations_complete() {
        let player = AnimationPlayer::with_player_animations();
        for name in REQUIRED_ANIMATIONS {
            assert!(player.has_animation(name), "missing {}", name);
        }
        assert_eq!(player.current_animation(), "idle");
    }

    #[test]
    fn test_play_same_animation_keeps_frame() {
        let mut player = AnimationPlayer::new();
        player.add_animation(AnimationClip::looping("walk", 4, 10.0));
        player.play("walk");
        player.update(0.15);
        assert_eq!(player.current_frame(), 1);

        player.play("walk");
        assert_eq!(player.current_frame(), 1);
    }

    #[test]
    fn test_play_different_animation_restarts() {
        let mut player = AnimationPlayer::with_player_animations();
        player.update(0.2);
        player.play("walk");
        assert_eq!(player.current_animation(), "walk");
        assert_eq!(player.current_frame(), 0);
    }

    #[test]
    fn test_animation_looping() {
        let mut player = AnimationPlayer::new();
        player.add_animation(AnimationClip::looping("test", 3, 10.0));
        player.play("test");

        assert_eq!(player.update(0.35), None); // 3.5 frames
        assert_eq!(player.current_frame(), 0);
    }

    #[test]
    fn test_one_shot_reports_finish_once() {
        let mut player = AnimationPlayer::new();
        player.add_animation(AnimationClip::one_shot("punch_animation", 3, 10.0));
        player.play("punch_animation");

        assert_eq!(player.update(0.15), None);
        assert_eq!(player.update(0.2), Some("punch_animation".to_string()));
        assert_eq!(player.current_frame(), 2); // Last frame

        assert_eq!(player.update(0.2), None);
    }

    #[test]
    fn test_finished_one_shot_replays() {
        let mut player = AnimationPlayer::new();
        player.add_animation(AnimationClip::one_shot("high_kick", 2, 10.0));
        player.play("high_kick");
        assert!(player.update(0.5).is_some());

        player.play("high_kick");
        assert_eq!(player.current_frame(), 0);
        assert_eq!(player.update(0.1), None);
        assert_eq!(player.current_frame(), 1);
    }
}
