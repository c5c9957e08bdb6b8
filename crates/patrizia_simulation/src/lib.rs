//! Patrizia Simulation Core
//!
//! Gameplay-слой на Bevy 0.16 ECS (headless):
//! - персонаж игрока: camera-relative movement, look, crouch
//! - снаряд: spawn descriptor (сфера, скорость, гравитация, trail)
//!
//! Host-стороны, которые в движке были бы встроенными (movement integrator,
//! control rotation, spring arm, projectile movement), реализованы здесь же
//! тонкими системами. Рендер и реальный input — в `patrizia_client`.
//!
//! # Кадр (Update)
//! ```text
//! Spawn      — SpawnProjectile → снаряды
//! Input      — ActionEvent → CharacterCommand → accumulators / crouch
//! Controller — RotationInput → ViewOrientation
//! Movement   — PendingMovementInput → velocity → Transform
//! Camera     — spring arm → ViewCamera transform
//! ```
//! Снаряды двигаются в FixedUpdate (60Hz).

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

// Публичные модули
pub mod camera;
pub mod character;
pub mod config;
pub mod controller;
pub mod input;
pub mod locomotion;
pub mod logger;
pub mod physics;
pub mod projectile;

// Re-export базовых типов для удобства
pub use camera::{SpringArm, SpringArmCameraPlugin, ViewCamera};
pub use character::{
    spawn_enemy_character, spawn_player_character, Enemy, Player, PlayerCharacter,
    WeaponAttachment,
};
pub use config::{ConfigError, GameplayConfig, WorldSettings};
pub use controller::{ControllerPlugin, RotationInput, ViewOrientation, ViewPitchLimits};
pub use input::{
    ActionEvent, ActionInputPlugin, ActionValue, CharacterCommand, InputAction, TriggerEvent,
};
pub use locomotion::{map_look, map_move, LocomotionPlugin, MovementContribution, MovementIntent};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, LogLevel};
pub use physics::{
    CharacterCapsule, CharacterMovement, CharacterMovementPlugin, CrouchChanged, CrouchState,
    PendingMovementInput,
};
pub use projectile::{
    spawn_projectile, Projectile, ProjectileConfig, ProjectileMovement, ProjectilePlugin,
    ProjectileTrail, SpawnProjectile,
};

/// Порядок gameplay систем внутри Update
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameplaySet {
    Spawn,
    Input,
    Controller,
    Movement,
    Camera,
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Если `GameplayConfig` уже вставлен до plugin — используется он,
/// иначе defaults.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<GameplayConfig>()
            .cloned()
            .unwrap_or_default();

        app
            // Fixed timestep 60Hz для projectile movement
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .insert_resource(config.world)
            .insert_resource(config)
            .configure_sets(
                Update,
                (
                    GameplaySet::Spawn,
                    GameplaySet::Input,
                    GameplaySet::Controller,
                    GameplaySet::Movement,
                    GameplaySet::Camera,
                )
                    .chain(),
            )
            .add_plugins((
                ActionInputPlugin,
                LocomotionPlugin,
                ControllerPlugin,
                CharacterMovementPlugin,
                SpringArmCameraPlugin,
                ProjectilePlugin,
            ));
    }
}

/// Создаёт minimal Bevy App для headless симуляции (real time)
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins);
    app
}

/// Headless App с фиксированным шагом кадра
///
/// Каждый `app.update()` продвигает время ровно на `step`, fixed timestep
/// равен `step` → ровно один FixedUpdate на кадр (кроме самого первого
/// кадра, у которого delta = 0).
pub fn create_stepped_app(step: Duration) -> App {
    create_stepped_app_with_config(step, GameplayConfig::default())
}

pub fn create_stepped_app_with_config(step: Duration, config: GameplayConfig) -> App {
    let mut app = create_headless_app();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(step));
    app.insert_resource(config);
    app.add_plugins(SimulationPlugin);
    // После SimulationPlugin: перезаписываем его 60Hz
    app.insert_resource(Time::<Fixed>::from_duration(step));
    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
