// Engine modules: fixed-step loop, input, physics, scene collaborators, state base

pub mod game_loop;
pub mod input;
pub mod physics;
pub mod scene;
pub mod state;
