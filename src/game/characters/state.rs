// Player states, attack combo steps and facing

use std::fmt;

/// What the player is doing this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    /// Standing still
    #[default]
    Idle,
    /// Moving in any of the eight directions
    Walk,
    /// Playing an attack; only the animation finishing ends it
    Attack,
}

impl PlayerState {
    /// Name shown on the debug label
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Walk => "Walk",
            Self::Attack => "Attack",
        }
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Step of the three-hit combo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttackMove {
    #[default]
    Punch,
    LowKick,
    HighKick,
}

impl AttackMove {
    const ORDER: [AttackMove; 3] = [Self::Punch, Self::LowKick, Self::HighKick];

    /// Position in the combo, always in 0..3
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The following combo step, wrapping back to `Punch`
    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// Animation clip played for this move
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Punch => "punch_animation",
            Self::LowKick => "low_kick",
            Self::HighKick => "high_kick",
        }
    }
}

/// Horizontal facing, shared by the sprite and the hitbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing implied by a sprite's horizontal flip
    pub fn from_flip(flip_h: bool) -> Self {
        if flip_h {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Facing after moving horizontally by `motion_x`; no horizontal motion keeps the current one
    pub fn after_motion(self, motion_x: f32) -> Self {
        if motion_x > 0.0 {
            Self::Right
        } else if motion_x < 0.0 {
            Self::Left
        } else {
            self
        }
    }

    pub fn flip_h(&self) -> bool {
        matches!(self, Self::Left)
    }

    /// -1.0 for left, 1.0 for right
    pub fn direction(&self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// Horizontal scale that mirrors a hitbox to this side
    pub fn hitbox_scale_x(&self) -> f32 {
        self.direction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(PlayerState::default(), PlayerState::Idle);
        assert_eq!(AttackMove::default(), AttackMove::Punch);
    }

    #[test]
    fn test_state_names() {
        assert_eq!(PlayerState::Idle.to_string(), "Idle");
        assert_eq!(PlayerState::Walk.to_string(), "Walk");
        assert_eq!(PlayerState::Attack.to_string(), "Attack");
    }

    #[test]
    fn test_combo_cycles_through_three_moves() {
        let punch = AttackMove::Punch;
        assert_eq!(punch.next(), AttackMove::LowKick);
        assert_eq!(punch.next().next(), AttackMove::HighKick);
        assert_eq!(punch.next().next().next(), AttackMove::Punch);
    }

    #[test]
    fn test_combo_index_in_range() {
        let mut attack = AttackMove::Punch;
        for _ in 0..10 {
            assert!(attack.index() < 3);
            attack = attack.next();
        }
    }

    #[test]
    fn test_animation_names() {
        assert_eq!(AttackMove::Punch.animation_name(), "punch_animation");
        assert_eq!(AttackMove::LowKick.animation_name(), "low_kick");
        assert_eq!(AttackMove::HighKick.animation_name(), "high_kick");
    }

    #[test]
    fn test_facing_after_motion() {
        assert_eq!(Facing::Left.after_motion(0.5), Facing::Right);
        assert_eq!(Facing::Right.after_motion(-0.5), Facing::Left);
        assert_eq!(Facing::Left.after_motion(0.0), Facing::Left);
        assert_eq!(Facing::Right.after_motion(0.0), Facing::Right);
    }

    #[test]
    fn test_facing_flip_and_scale_agree() {
        for facing in [Facing::Left, Facing::Right] {
            assert_eq!(Facing::from_flip(facing.flip_h()), facing);
            assert_eq!(facing.flip_h(), facing.hitbox_scale_x() < 0.0);
        }
    }
}
