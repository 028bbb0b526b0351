use glam::Vec2;
use rapier2d::control::KinematicCharacterController;
use rapier2d::prelude::*;

/// Result of a blocked kinematic move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicCollision {
    /// First collider the mover ran into
    pub collider: ColliderHandle,
    /// Part of the requested motion that could not be applied
    pub remainder: Vec2,
}

/// Physics world for a top-down arena: no gravity, kinematic characters, fixed walls
pub struct PhysicsWorld {
    gravity: Vector<Real>,

    /// Integration parameters for the physics simulation
    integration_parameters: IntegrationParameters,

    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,

    /// Query pipeline for character shape casts
    query_pipeline: QueryPipeline,

    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,

    /// Slide-along-walls mover shared by all characters
    character_controller: KinematicCharacterController,
}

impl PhysicsWorld {
    /// Create a new physics world with default settings
    pub fn new() -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        // Fixed timestep of 1/60 seconds (60 FPS)
        integration_parameters.dt = 1.0 / 60.0;

        // Top-down: there is no floor to snap to or steps to climb
        let character_controller = KinematicCharacterController {
            snap_to_ground: None,
            autostep: None,
            ..KinematicCharacterController::default()
        };

        Self {
            gravity: vector![0.0, 0.0],
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            character_controller,
        }
    }

    /// Step the physics simulation forward by one timestep.
    /// Applies pending kinematic moves and refreshes the query pipeline.
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Add a rigid body to the physics world
    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Add a collider attached to a rigid body
    pub fn add_collider(
        &mut self,
        collider: Collider,
        parent_handle: RigidBodyHandle,
    ) -> ColliderHandle {
        self.collider_set
            .insert_with_parent(collider, parent_handle, &mut self.rigid_body_set)
    }

    /// Current position of a body
    pub fn translation(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.rigid_body_set.get(handle).map(|body| {
            let t = body.translation();
            Vec2::new(t.x, t.y)
        })
    }

    /// Move a kinematic body by `motion`, sliding along and stopping at whatever it hits.
    /// The new position takes effect on the next `step`.
    /// Returns the first collision, if the move was blocked at all.
    pub fn move_and_collide(
        &mut self,
        body_handle: RigidBodyHandle,
        collider_handle: ColliderHandle,
        motion: Vec2,
    ) -> Option<KinematicCollision> {
        let Some(collider) = self.collider_set.get(collider_handle) else {
            log::warn!("move_and_collide: unknown collider {:?}", collider_handle);
            return None;
        };

        let desired = vector![motion.x, motion.y];
        let mut first_hit = None;
        let movement = self.character_controller.move_shape(
            self.integration_parameters.dt,
            &self.rigid_body_set,
            &self.collider_set,
            &self.query_pipeline,
            collider.shape(),
            collider.position(),
            desired,
            QueryFilter::default()
                .exclude_rigid_body(body_handle)
                .exclude_sensors()
                .groups(collider.collision_groups()),
            |collision| {
                if first_hit.is_none() {
                    first_hit = Some(collision.handle);
                }
            },
        );

        let Some(body) = self.rigid_body_set.get_mut(body_handle) else {
            log::warn!("move_and_collide: unknown body {:?}", body_handle);
            return None;
        };

        let next = body.translation() + movement.translation;
        body.set_next_kinematic_translation(next);

        first_hit.map(|collider| KinematicCollision {
            collider,
            remainder: motion - Vec2::new(movement.translation.x, movement.translation.y),
        })
    }

    /// Set the timestep for physics simulation
    pub fn set_timestep(&mut self, dt: Real) {
        self.integration_parameters.dt = dt;
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
