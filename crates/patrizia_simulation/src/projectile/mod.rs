//! Projectile domain — spawn descriptor снаряда
//!
//! Снаряд = сфера коллизии (root) + зацикленный trail (child) + movement:
//! - начальная скорость вдоль forward spawn transform
//! - гравитация мира × gravity_scale (по умолчанию 0: летит прямо)
//!
//! Collision response, lifetime и despawn — забота уровня, не снаряда.

use bevy::prelude::*;

pub mod components;
pub mod systems;

pub use components::*;
pub use systems::*;

/// Projectile Plugin
///
/// - Update: SpawnProjectile events → spawn
/// - FixedUpdate: init velocity → gravity → интеграция
pub struct ProjectilePlugin;

impl Plugin for ProjectilePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SpawnProjectile>();

        app.add_systems(
            Update,
            spawn_requested_projectiles.in_set(crate::GameplaySet::Spawn),
        );

        app.add_systems(
            FixedUpdate,
            (
                initialize_projectile_velocity,
                apply_projectile_gravity,
                integrate_projectile_motion,
            )
                .chain(),
        );
    }
}
