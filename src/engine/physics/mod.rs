// Physics system using rapier2d

mod body;
mod character;
mod collision;
mod world;

pub use body::presets;
pub use character::{CharacterBody, CharacterHandles, MoveAndCollide};
pub use world::{KinematicCollision, PhysicsWorld};
