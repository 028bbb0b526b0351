// Player input state management

use super::action::{Action, InputEvent, InputSource};
use std::collections::{HashMap, HashSet};

/// Read-only view of action state, polled by gameplay code each tick
pub trait ActionSource {
    /// Strength of an action from 0.0 (released) to 1.0 (fully pressed)
    fn action_strength(&self, action: Action) -> f32;

    /// Whether the action went down since the last tick (edge-triggered)
    fn is_action_just_pressed(&self, action: Action) -> bool;
}

/// Action state for the local player
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Keys currently held down, grouped by the action they are bound to.
    /// An action stays pressed while any of its keys is held.
    held: HashMap<Action, HashSet<InputSource>>,

    /// Actions that were pressed since the last update
    just_pressed: HashSet<Action>,

    /// Press/release events in arrival order since the last update
    events: Vec<InputEvent>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.held.contains_key(&action)
    }

    /// Check if an action was just pressed
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Events received since the last update, oldest first
    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }

    /// Register a key going down. The action is pressed by its first held key.
    pub(crate) fn press(&mut self, action: Action, source: InputSource) {
        let keys = self.held.entry(action).or_default();
        let was_up = keys.is_empty();
        keys.insert(source);

        if was_up {
            self.just_pressed.insert(action);
            self.events.push(InputEvent::pressed(action));
        }
    }

    /// Register a key going up. The action is released with its last held key.
    pub(crate) fn release(&mut self, action: Action, source: InputSource) {
        let Some(keys) = self.held.get_mut(&action) else {
            return;
        };
        if !keys.remove(&source) || !keys.is_empty() {
            return;
        }

        self.held.remove(&action);
        self.events.push(InputEvent::released(action));
    }

    /// Clear edge state. Call once per consumed tick.
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
        self.events.clear();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.held.clear();
        self.update();
    }
}

impl ActionSource for PlayerInput {
    fn action_strength(&self, action: Action) -> f32 {
        // Keyboard keys are digital
        if self.is_pressed(action) {
            1.0
        } else {
            0.0
        }
    }

    fn is_action_just_pressed(&self, action: Action) -> bool {
        self.just_pressed(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    const J: InputSource = InputSource::Keyboard(KeyCode::KeyJ);
    const SPACE: InputSource = InputSource::Keyboard(KeyCode::Space);
    const A: InputSource = InputSource::Keyboard(KeyCode::KeyA);
    const LEFT: InputSource = InputSource::Keyboard(KeyCode::ArrowLeft);

    #[test]
    fn test_player_input_creation() {
        let input = PlayerInput::new();
        assert!(!input.is_pressed(Action::Attack));
        assert!(input.events().is_empty());
    }

    #[test]
    fn test_press_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Attack, J);
        assert!(input.is_pressed(Action::Attack));
        assert!(input.just_pressed(Action::Attack));
        assert!(input.is_action_just_pressed(Action::Attack));
    }

    #[test]
    fn test_release_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Attack, J);
        input.update();
        input.release(Action::Attack, J);
        assert!(!input.is_pressed(Action::Attack));
        assert_eq!(input.events(), &[InputEvent::released(Action::Attack)]);
    }

    #[test]
    fn test_just_pressed_cleared_on_update() {
        let mut input = PlayerInput::new();
        input.press(Action::Attack, J);
        input.update();
        assert!(input.is_pressed(Action::Attack));
        assert!(!input.just_pressed(Action::Attack));
    }

    #[test]
    fn test_held_key_is_not_pressed_again() {
        let mut input = PlayerInput::new();
        input.press(Action::Attack, J);
        input.update();
        // OS key repeat would report another press
        input.press(Action::Attack, J);
        assert!(!input.just_pressed(Action::Attack));
        assert!(input.events().is_empty());
    }

    #[test]
    fn test_second_key_for_held_action_is_not_a_new_press() {
        let mut input = PlayerInput::new();
        input.press(Action::Attack, J);
        input.update();

        input.press(Action::Attack, SPACE);
        assert!(!input.just_pressed(Action::Attack));
        assert!(input.events().is_empty());
    }

    #[test]
    fn test_action_held_until_last_key_released() {
        let mut input = PlayerInput::new();
        input.press(Action::MoveLeft, A);
        input.press(Action::MoveLeft, LEFT);
        input.update();

        input.release(Action::MoveLeft, A);
        assert!(input.is_pressed(Action::MoveLeft));
        assert_eq!(input.action_strength(Action::MoveLeft), 1.0);
        assert!(input.events().is_empty());

        input.release(Action::MoveLeft, LEFT);
        assert!(!input.is_pressed(Action::MoveLeft));
        assert_eq!(input.action_strength(Action::MoveLeft), 0.0);
        assert_eq!(input.events(), &[InputEvent::released(Action::MoveLeft)]);
    }

    #[test]
    fn test_action_strength() {
        let mut input = PlayerInput::new();
        assert_eq!(input.action_strength(Action::MoveRight), 0.0);
        input.press(Action::MoveRight, InputSource::key(KeyCode::KeyD));
        assert_eq!(input.action_strength(Action::MoveRight), 1.0);
    }

    #[test]
    fn test_events_in_order() {
        let mut input = PlayerInput::new();
        input.press(Action::MoveLeft, A);
        input.press(Action::Attack, J);
        input.release(Action::MoveLeft, A);

        assert_eq!(
            input.events(),
            &[
                InputEvent::pressed(Action::MoveLeft),
                InputEvent::pressed(Action::Attack),
                InputEvent::released(Action::MoveLeft),
            ]
        );

        input.update();
        assert!(input.events().is_empty());
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = PlayerInput::new();
        input.release(Action::Attack, J);
        assert!(input.events().is_empty());

        // Releasing a key that isn't the one holding the action changes nothing
        input.press(Action::Attack, J);
        input.release(Action::Attack, SPACE);
        assert!(input.is_pressed(Action::Attack));
    }

    #[test]
    fn test_reset() {
        let mut input = PlayerInput::new();
        input.press(Action::MoveUp, InputSource::key(KeyCode::KeyW));
        input.press(Action::Attack, J);
        input.reset();

        assert!(!input.is_pressed(Action::MoveUp));
        assert!(!input.just_pressed(Action::Attack));
    }
}
