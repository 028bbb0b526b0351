// Scene collaborators attached to a character
//
// Plain data nodes that gameplay code drives each tick: the sprite's facing,
// the attack hitbox, a debug label, and one-shot timers.

mod hitbox;
mod label;
mod sprite;
mod timer;

pub use hitbox::HitBox;
pub use label::Label;
pub use sprite::Sprite;
pub use timer::Timer;
