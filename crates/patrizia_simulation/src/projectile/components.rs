//! Projectile компоненты

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Параметры снаряда на момент spawn
///
/// После spawn не меняются: `Projectile` хранит копию, системы только читают.
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Радиус сферы коллизии (units)
    pub collision_radius: f32,
    /// Начальная скорость вдоль forward spawn transform (units/sec)
    pub initial_speed: f32,
    /// Множитель гравитации мира (0 = летит прямо)
    pub gravity_scale: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            collision_radius: 5.0,
            initial_speed: 1500.0,
            gravity_scale: 0.0,
        }
    }
}

/// Снаряд: root entity со сферой коллизии
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
#[require(ProjectileMovement)]
pub struct Projectile {
    config: ProjectileConfig,
}

impl Projectile {
    pub fn new(config: ProjectileConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectileConfig {
        &self.config
    }
}

/// Скорость снаряда (world space, units/sec)
///
/// `initialized == false` → velocity ещё не выставлена из config
/// (выставляется ровно один раз, см. `initialize_projectile_velocity`).
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct ProjectileMovement {
    pub velocity: Vec3,
    pub initialized: bool,
}

/// Зацикленный visual trail, прикреплён child'ом к сфере
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ProjectileTrail {
    pub looping: bool,
}

impl Default for ProjectileTrail {
    fn default() -> Self {
        Self { looping: true }
    }
}

/// Event: запрос на spawn снаряда (level/скриптовый trigger)
///
/// `config: None` → берётся `GameplayConfig::projectile`.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SpawnProjectile {
    pub transform: Transform,
    pub config: Option<ProjectileConfig>,
}
