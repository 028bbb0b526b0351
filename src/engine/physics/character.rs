// Kinematic character movement seam between gameplay and the physics world

use glam::Vec2;

use super::body::{presets, ColliderHandle, RigidBodyHandle};
use super::world::{KinematicCollision, PhysicsWorld};

/// Anything that can be displaced with collision resolution
pub trait MoveAndCollide {
    /// Apply `motion` as this tick's displacement, stopping at obstacles
    fn move_and_collide(&mut self, motion: Vec2) -> Option<KinematicCollision>;
}

/// Handles of a character's body and collider inside a `PhysicsWorld`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterHandles {
    pub body: RigidBodyHandle,
    pub collider: ColliderHandle,
}

impl CharacterHandles {
    /// Spawn a kinematic character at (x, y)
    pub fn spawn(world: &mut PhysicsWorld, x: f32, y: f32, width: f32, height: f32) -> Self {
        let body = world.add_rigid_body(presets::player_body(x, y));
        let collider = world.add_collider(presets::player_collider(width, height), body);
        Self { body, collider }
    }
}

/// A character's handles borrowed together with the world they live in
pub struct CharacterBody<'w> {
    world: &'w mut PhysicsWorld,
    handles: CharacterHandles,
}

impl<'w> CharacterBody<'w> {
    pub fn new(world: &'w mut PhysicsWorld, handles: CharacterHandles) -> Self {
        Self { world, handles }
    }
}

impl MoveAndCollide for CharacterBody<'_> {
    fn move_and_collide(&mut self, motion: Vec2) -> Option<KinematicCollision> {
        self.world
            .move_and_collide(self.handles.body, self.handles.collider, motion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_body_moves() {
        let mut world = PhysicsWorld::new();
        let handles = CharacterHandles::spawn(&mut world, 10.0, 10.0, 16.0, 6.0);
        world.step();

        assert_eq!(world.translation(handles.body), Some(Vec2::new(10.0, 10.0)));

        let mut body = CharacterBody::new(&mut world, handles);
        assert!(body.move_and_collide(Vec2::new(-2.0, 0.0)).is_none());

        world.step();
        let pos = world.translation(handles.body).unwrap();
        assert!((pos.x - 8.0).abs() < 0.01);
    }
}
