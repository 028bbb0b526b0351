// Input handling system
//
// Turns window keyboard events into per-player action state that gameplay
// code polls once per fixed tick.
//
// ## Architecture
//
// - `action`: Defines game actions, input events and default key bindings
// - `player`: Per-key held state and the `ActionSource` polling trait
// - `config`: Input configuration and remapping system
// - `manager`: Routes winit key events to the player
//
// ## Usage Example
//
// ```rust
// use engine::input::{InputManager, Action, ActionSource};
//
// let mut input_manager = InputManager::new();
//
// // In your event loop, process keyboard events
// input_manager.process_keyboard_event(&key_event);
//
// // Each fixed tick, poll the player's actions ...
// if input_manager.player().is_action_just_pressed(Action::Attack) {
//     // Attack went down this tick
// }
//
// // ... then clear edge state
// input_manager.update();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::{Action, InputEvent};
pub use manager::InputManager;
pub use player::ActionSource;
