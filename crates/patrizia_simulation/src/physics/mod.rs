//! Physics simulation module
//!
//! Kinematic character movement, crouch state machine, collision profiles.

pub mod collision;
pub mod crouch;
pub mod movement;

use bevy::prelude::*;

pub use collision::{actor_groups, projectile_groups, ACTOR_GROUP, PROJECTILE_GROUP, WORLD_GROUP};
pub use crouch::{crouch, uncrouch, CrouchChanged, CrouchState};
pub use movement::{
    apply_gravity, apply_movement_input, character_body_bundle, ground_detection,
    integrate_character_velocity, movement_yaw, orient_rotation_to_movement, step_yaw_towards,
    sync_capsule_collider,
    CharacterCapsule, CharacterMovement, PendingMovementInput, GROUND_TOLERANCE,
};

/// Plugin для character movement
///
/// Frame-driven: input копится в Update, здесь же и потребляется
/// (GameplaySet::Movement, после Input и Controller).
pub struct CharacterMovementPlugin;

impl Plugin for CharacterMovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<crate::config::WorldSettings>();

        app.add_systems(
            Update,
            (
                ground_detection,
                apply_movement_input,
                apply_gravity,
                orient_rotation_to_movement,
                integrate_character_velocity,
                sync_capsule_collider,
            )
                .chain() // Последовательное выполнение
                .in_set(crate::GameplaySet::Movement),
        );
    }
}
