// Gameplay: the arena and the characters in it

pub mod arena;
pub mod characters;
