// State node base for finite state machines
//
// Concrete states override only the hooks they care about. The machine that
// owns a set of states decides which single state is active and forwards the
// lifecycle calls to it; nothing here enforces that.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::input::InputEvent;

/// Lifecycle hooks of a state. Every hook defaults to doing nothing.
#[allow(dead_code)]
pub trait State {
    /// Called once after the owning machine has been set up
    fn ready(&mut self) {}

    /// Called when the machine switches to this state
    fn enter(&mut self) {}

    /// Called when the machine switches away from this state
    fn exit(&mut self) {}

    /// Per-frame update while active
    fn update(&mut self, _dt: f32) {}

    /// Per-physics-tick update while active
    fn physics_update(&mut self, _dt: f32) {}

    /// Raw input routed to the active state
    fn handle_input(&mut self, _event: &InputEvent) {}
}

/// Common data for a state: a back-reference to the machine that owns it.
///
/// The machine owns its states, so the reference is weak and never keeps the
/// machine alive.
#[allow(dead_code)]
#[derive(Debug)]
pub struct StateNode<M> {
    machine: Weak<RefCell<M>>,
}

#[allow(dead_code)]
impl<M> StateNode<M> {
    /// A node not yet attached to any machine
    pub fn new() -> Self {
        Self {
            machine: Weak::new(),
        }
    }

    pub fn attach(&mut self, machine: &Rc<RefCell<M>>) {
        self.machine = Rc::downgrade(machine);
    }

    pub fn detach(&mut self) {
        self.machine = Weak::new();
    }

    /// The owning machine, if attached and still alive
    pub fn machine(&self) -> Option<Rc<RefCell<M>>> {
        self.machine.upgrade()
    }
}

impl<M> Default for StateNode<M> {
    fn default() -> Self {
        Self::new()
    }
}
