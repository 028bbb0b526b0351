use rapier2d::prelude::*;

/// Collision groups for filtering what objects can collide with each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Player characters
    Player = 0b0000_0001,

    /// Static arena walls and props
    Wall = 0b0000_0010,
}

impl CollisionGroups {
    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // Players are blocked by walls but walk through each other
            CollisionGroups::Player => Group::from_bits_truncate(CollisionGroups::Wall as u32),

            CollisionGroups::Wall => Group::from_bits_truncate(CollisionGroups::Player as u32),
        };

        InteractionGroups::new(memberships, filter)
    }
}
