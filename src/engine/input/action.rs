// Game action definitions and mappings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (four directional axes)
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,

    // Combat
    Attack,

    // Meta actions
    Menu,
}

/// Represents an input source (keyboard key for now)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// A single press or release of an action, as seen by a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub action: Action,
    pub pressed: bool,
}

impl InputEvent {
    pub fn pressed(action: Action) -> Self {
        Self {
            action,
            pressed: true,
        }
    }

    pub fn released(action: Action) -> Self {
        Self {
            action,
            pressed: false,
        }
    }
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        // Arrow keys
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowUp), Action::MoveUp),
        (InputSource::key(KeyCode::ArrowDown), Action::MoveDown),
        // WASD
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::KeyW), Action::MoveUp),
        (InputSource::key(KeyCode::KeyS), Action::MoveDown),
        // Attack
        (InputSource::key(KeyCode::KeyJ), Action::Attack),
        (InputSource::key(KeyCode::Space), Action::Attack),
        // Meta
        (InputSource::key(KeyCode::Escape), Action::Menu),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_source_keyboard_creation() {
        let source = InputSource::key(KeyCode::KeyA);
        assert_eq!(source, InputSource::Keyboard(KeyCode::KeyA));
    }

    #[test]
    fn test_input_event_constructors() {
        assert!(InputEvent::pressed(Action::Attack).pressed);
        assert!(!InputEvent::released(Action::Attack).pressed);
    }

    #[test]
    fn test_default_bindings_cover_all_actions() {
        let bindings = default_bindings();
        for action in [
            Action::MoveLeft,
            Action::MoveRight,
            Action::MoveUp,
            Action::MoveDown,
            Action::Attack,
            Action::Menu,
        ] {
            assert!(
                bindings.iter().any(|(_, a)| *a == action),
                "{:?} has no default binding",
                action
            );
        }
    }

    #[test]
    fn test_no_duplicate_inputs() {
        let bindings = default_bindings();
        let mut seen_sources = std::collections::HashSet::new();
        for (source, _) in bindings {
            assert!(
                seen_sources.insert(source),
                "Duplicate input source found in default bindings"
            );
        }
    }

    #[test]
    fn test_every_action_has_two_keys_except_menu() {
        let bindings = default_bindings();
        let count = |action| bindings.iter().filter(|(_, a)| *a == action).count();
        assert_eq!(count(Action::MoveLeft), 2);
        assert_eq!(count(Action::Attack), 2);
        assert_eq!(count(Action::Menu), 1);
    }
}
