// Walled arena the player moves around in

use glam::Vec2;

use crate::engine::physics::{presets, CharacterHandles, PhysicsWorld};

/// Playfield size in pixels (y grows downward)
pub const ARENA_WIDTH: f32 = 320.0;
pub const ARENA_HEIGHT: f32 = 180.0;
const WALL_THICKNESS: f32 = 16.0;

/// Physics world with four walls around the playfield
pub struct Arena {
    world: PhysicsWorld,
}

impl Arena {
    pub fn new() -> Self {
        let mut world = PhysicsWorld::new();

        let half_w = ARENA_WIDTH / 2.0;
        let half_h = ARENA_HEIGHT / 2.0;
        let half_t = WALL_THICKNESS / 2.0;
        let walls = [
            // (center x, center y, width, height)
            (half_w, -half_t, ARENA_WIDTH, WALL_THICKNESS),
            (half_w, ARENA_HEIGHT + half_t, ARENA_WIDTH, WALL_THICKNESS),
            (-half_t, half_h, WALL_THICKNESS, ARENA_HEIGHT),
            (ARENA_WIDTH + half_t, half_h, WALL_THICKNESS, ARENA_HEIGHT),
        ];

        for (x, y, width, height) in walls {
            let body = world.add_rigid_body(presets::wall_body(x, y));
            world.add_collider(presets::wall_collider(width, height), body);
        }

        // Populate the query pipeline before the first move
        world.step();

        log::info!("Arena ready ({}x{})", ARENA_WIDTH, ARENA_HEIGHT);
        Self { world }
    }

    /// Place a character in the middle of the arena
    pub fn spawn_character(&mut self, width: f32, height: f32) -> CharacterHandles {
        let handles = CharacterHandles::spawn(
            &mut self.world,
            ARENA_WIDTH / 2.0,
            ARENA_HEIGHT / 2.0,
            width,
            height,
        );
        self.world.step();
        handles
    }

    pub fn world_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.world
    }

    pub fn position(&self, handles: CharacterHandles) -> Option<Vec2> {
        self.world.translation(handles.body)
    }

    pub fn step(&mut self) {
        self.world.step();
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
