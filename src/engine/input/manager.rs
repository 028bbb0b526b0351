// Input manager - routes window key events to player input state

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::player::PlayerInput;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Turns key events into the local player's action state
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,
    player: PlayerInput,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only physical keys carry a binding
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(
                key_code,
                event.state == ElementState::Pressed,
                event.repeat,
            );
        }
    }

    /// Apply a key transition to the action bound to that key
    pub fn process_key(&mut self, key_code: KeyCode, pressed: bool, repeat: bool) {
        // OS key repeat must not re-trigger edge actions
        if pressed && repeat {
            return;
        }

        let source = InputSource::key(key_code);
        let Some(action) = self.config.get_action(source) else {
            return;
        };

        if pressed {
            self.player.press(action, source);
        } else {
            self.player.release(action, source);
        }
    }

    /// Clear per-tick edge state.
    /// Call once after each fixed tick has consumed the input.
    pub fn update(&mut self) {
        self.player.update();
    }

    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    /// Check if an action went down this tick
    pub fn just_pressed(&self, action: Action) -> bool {
        self.player.just_pressed(action)
    }

    /// Reset all input state (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.player.reset();
    }
}
