// Player character controller
//
// Each physics tick the controller samples input, picks a state, runs that
// state's behaviour, mirrors the sprite and hitbox, then smooths velocity and
// moves the body. Animation and cooldown timer completions come back as
// queued events handled after the tick.

use std::collections::VecDeque;

use glam::Vec2;
use log::debug;

use crate::core::math::{direction_from_axes, lerp};
use crate::engine::input::{Action, ActionSource};
use crate::engine::physics::{KinematicCollision, MoveAndCollide};
use crate::engine::scene::{HitBox, Label, Sprite, Timer};

use super::animation::{AnimationPlayer, REQUIRED_ANIMATIONS};
use super::state::{AttackMove, Facing, PlayerState};
use super::stats::{PlayerStats, StatsError};

/// Errors raised while assembling a player
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("Required node missing: {0}")]
    MissingNode(&'static str),

    #[error("Animation player has no '{0}' animation")]
    MissingAnimation(&'static str),

    #[error("Invalid player stats: {0}")]
    InvalidStats(#[from] StatsError),
}

/// Completion signals delivered back to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    /// A one-shot animation reached its end
    AnimationFinished(String),
    /// The attack cooldown ran out without another attack
    AttackCooldownElapsed,
}

/// Collects a player's collaborators and validates them once.
#[derive(Debug, Default)]
pub struct PlayerBuilder {
    stats: PlayerStats,
    sprite: Option<Sprite>,
    animation: Option<AnimationPlayer>,
    hit_box: Option<HitBox>,
    label: Option<Label>,
    attack_cooldown: Option<Timer>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with every collaborator set to its standard configuration
    pub fn standard() -> Self {
        let stats = PlayerStats::standard();
        let cooldown = Timer::new(stats.attack_cooldown);
        Self::new()
            .stats(stats)
            .sprite(Sprite::default())
            .animation_player(AnimationPlayer::with_player_animations())
            .hit_box(HitBox::default())
            .label(Label::default())
            .attack_cooldown(cooldown)
    }

    pub fn stats(mut self, stats: PlayerStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn sprite(mut self, sprite: Sprite) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn animation_player(mut self, animation: AnimationPlayer) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn hit_box(mut self, hit_box: HitBox) -> Self {
        self.hit_box = Some(hit_box);
        self
    }

    pub fn label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    /// Timer node for the combo reset; its length comes from `PlayerStats::attack_cooldown`
    pub fn attack_cooldown(mut self, timer: Timer) -> Self {
        self.attack_cooldown = Some(timer);
        self
    }

    pub fn build(self) -> Result<Player, SetupError> {
        let sprite = self.sprite.ok_or(SetupError::MissingNode("Sprites"))?;
        let animation = self
            .animation
            .ok_or(SetupError::MissingNode("AnimationPlayer"))?;
        let mut hit_box = self.hit_box.ok_or(SetupError::MissingNode("HitBox"))?;
        let label = self.label.ok_or(SetupError::MissingNode("Label"))?;
        let mut attack_cooldown = self
            .attack_cooldown
            .ok_or(SetupError::MissingNode("AttackCooldown"))?;

        if let Some(&name) = REQUIRED_ANIMATIONS
            .iter()
            .find(|name| !animation.has_animation(name))
        {
            return Err(SetupError::MissingAnimation(name));
        }

        self.stats.validate()?;

        attack_cooldown.set_wait_time(self.stats.attack_cooldown);
        hit_box.scale.x = Facing::from_flip(sprite.flip_h).hitbox_scale_x();

        Ok(Player {
            stats: self.stats,
            state: PlayerState::Idle,
            current_attack: AttackMove::Punch,
            motion: Vec2::ZERO,
            velocity: Vec2::ZERO,
            sprite,
            animation,
            hit_box,
            label,
            attack_cooldown,
            events: VecDeque::new(),
        })
    }
}

/// The player-controlled brawler
#[derive(Debug)]
pub struct Player {
    stats: PlayerStats,

    state: PlayerState,
    current_attack: AttackMove,

    /// Normalized input direction for this tick
    motion: Vec2,
    /// Smoothed per-tick displacement
    velocity: Vec2,

    // Collaborators
    sprite: Sprite,
    animation: AnimationPlayer,
    hit_box: HitBox,
    label: Label,
    attack_cooldown: Timer,

    /// Completion signals waiting to be handled
    events: VecDeque<PlayerEvent>,
}

impl Player {
    /// Run one full tick: physics update, then animation/timer advance and event handling
    pub fn tick(
        &mut self,
        input: &impl ActionSource,
        body: &mut impl MoveAndCollide,
        dt: f32,
    ) -> Option<KinematicCollision> {
        let collision = self.physics_update(input, body, dt);
        self.advance(dt);
        self.process_events();
        collision
    }

    /// Sample input, run the current state, mirror presentation and move the body
    pub fn physics_update(
        &mut self,
        input: &impl ActionSource,
        body: &mut impl MoveAndCollide,
        dt: f32,
    ) -> Option<KinematicCollision> {
        self.handle_input(input);

        if self.label.set_text(self.state.name()) {
            debug!("Player state -> {}", self.state);
        }

        match self.state {
            PlayerState::Idle => self.idle(),
            PlayerState::Walk => self.walk(),
            PlayerState::Attack => self.attack(dt),
        }

        let facing = self.facing().after_motion(self.motion.x);
        self.sprite.flip_h = facing.flip_h();
        self.hit_box.scale.x = facing.hitbox_scale_x();

        let target = self.motion * self.stats.speed * dt;
        self.velocity.x = lerp(self.velocity.x, target.x, self.stats.friction);
        self.velocity.y = lerp(self.velocity.y, target.y, self.stats.friction);

        body.move_and_collide(self.velocity)
    }

    /// Advance the animation player and cooldown timer, queueing their completions
    pub fn advance(&mut self, dt: f32) {
        if let Some(name) = self.animation.update(dt) {
            self.push_event(PlayerEvent::AnimationFinished(name));
        }
        if self.attack_cooldown.update(dt) {
            self.push_event(PlayerEvent::AttackCooldownElapsed);
        }
    }

    /// Queue an event for the next `process_events`
    pub fn push_event(&mut self, event: PlayerEvent) {
        self.events.push_back(event);
    }

    /// Handle queued events in arrival order
    pub fn process_events(&mut self) {
        while let Some(event) = self.events.pop_front() {
            match event {
                PlayerEvent::AnimationFinished(name) => self.on_animation_finished(&name),
                PlayerEvent::AttackCooldownElapsed => self.on_attack_cooldown_timeout(),
            }
        }
    }

    /// The combo breaks if the player waits too long between attacks
    pub fn on_attack_cooldown_timeout(&mut self) {
        self.current_attack = AttackMove::Punch;
    }

    /// Any finished animation ends the attack and readies the next combo step
    pub fn on_animation_finished(&mut self, name: &str) {
        debug!("Animation finished: {}", name);
        self.current_attack = self.current_attack.next();
        self.state = PlayerState::Idle;
    }

    fn handle_input(&mut self, input: &impl ActionSource) {
        self.motion = direction_from_axes(
            input.action_strength(Action::MoveLeft),
            input.action_strength(Action::MoveRight),
            input.action_strength(Action::MoveUp),
            input.action_strength(Action::MoveDown),
        );

        if input.is_action_just_pressed(Action::Attack) {
            self.state = PlayerState::Attack;
            return;
        }

        // An attack runs until its animation finishes
        if self.state == PlayerState::Attack {
            return;
        }

        self.state = if self.motion.length() > 0.0 {
            PlayerState::Walk
        } else {
            PlayerState::Idle
        };
    }

    fn idle(&mut self) {
        self.motion = Vec2::ZERO;
        self.animation.play("idle");
    }

    fn walk(&mut self) {
        self.animation.play("walk");
    }

    fn attack(&mut self, dt: f32) {
        self.attack_cooldown.start();

        // The lunge target is scaled by dt after smoothing, unlike the walk target
        let direction = self.facing().direction();
        self.velocity.x =
            lerp(self.velocity.x, self.stats.lunge_speed * direction, self.stats.friction) * dt;
        self.velocity.y = lerp(self.velocity.y, 0.0, self.stats.friction);

        self.animation.play(self.current_attack.animation_name());
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn current_attack(&self) -> AttackMove {
        self.current_attack
    }

    pub fn motion(&self) -> Vec2 {
        self.motion
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn facing(&self) -> Facing {
        Facing::from_flip(self.sprite.flip_h)
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn hit_box(&self) -> &HitBox {
        &self.hit_box
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn animation(&self) -> &AnimationPlayer {
        &self.animation
    }

    pub fn attack_cooldown(&self) -> &Timer {
        &self.attack_cooldown
    }
}
