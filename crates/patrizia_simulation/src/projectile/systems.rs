//! Projectile systems
//!
//! Поведение снаряда целиком — это movement:
//! velocity из config при spawn, гравитация × scale, линейная интеграция.
//! Collision response / lifetime / despawn здесь не определены.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::{
    Projectile, ProjectileConfig, ProjectileMovement, ProjectileTrail, SpawnProjectile,
};
use crate::config::{GameplayConfig, WorldSettings};
use crate::logger::log;
use crate::physics::projectile_groups;

/// Spawn снаряда: сфера (root) + child trail
///
/// Velocity выставит `initialize_projectile_velocity` из config и forward
/// переданного transform.
pub fn spawn_projectile(
    commands: &mut Commands,
    config: ProjectileConfig,
    transform: Transform,
) -> Entity {
    let entity = commands
        .spawn((
            transform,
            Projectile::new(config),
            Collider::ball(config.collision_radius),
            Sensor,
            RigidBody::KinematicPositionBased,
            projectile_groups(),
            Name::new("Projectile"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Transform::default(),
                ProjectileTrail::default(),
                Name::new("LoopedTrail"),
            ));
        })
        .id();

    log(&format!(
        "Projectile spawned {:?}: at {:?}, speed={} gravity_scale={} radius={}",
        entity,
        transform.translation,
        config.initial_speed,
        config.gravity_scale,
        config.collision_radius
    ));

    entity
}

/// Обработка `SpawnProjectile` events
pub fn spawn_requested_projectiles(
    mut commands: Commands,
    mut requests: EventReader<SpawnProjectile>,
    config: Res<GameplayConfig>,
) {
    for request in requests.read() {
        let projectile_config = request.config.unwrap_or(config.projectile);
        spawn_projectile(&mut commands, projectile_config, request.transform);
    }
}

/// velocity = forward spawn transform × initial_speed (один раз)
pub fn initialize_projectile_velocity(
    mut query: Query<(&Projectile, &Transform, &mut ProjectileMovement)>,
) {
    for (projectile, transform, mut movement) in query.iter_mut() {
        if movement.initialized {
            continue;
        }
        movement.velocity = transform.forward().as_vec3() * projectile.config().initial_speed;
        movement.initialized = true;
    }
}

pub fn apply_projectile_gravity(
    world: Res<WorldSettings>,
    time: Res<Time>,
    mut query: Query<(&Projectile, &mut ProjectileMovement)>,
) {
    let delta = time.delta_secs();

    for (projectile, mut movement) in query.iter_mut() {
        let scale = projectile.config().gravity_scale;
        if scale != 0.0 {
            movement.velocity.y += world.gravity_y * scale * delta;
        }
    }
}

pub fn integrate_projectile_motion(
    time: Res<Time>,
    mut query: Query<(&ProjectileMovement, &mut Transform), With<Projectile>>,
) {
    let delta = time.delta_secs();

    for (movement, mut transform) in query.iter_mut() {
        transform.translation += movement.velocity * delta;
    }
}
