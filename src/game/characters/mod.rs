// Character system
//
// This module contains everything related to the playable brawler:
// - Player controller driving movement and the attack combo
// - Player tuning values
// - States, combo steps and facing
// - Animation playback for sprites

pub mod animation;
pub mod player;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use player::{Player, PlayerBuilder};
