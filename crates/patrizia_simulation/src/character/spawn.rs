//! Spawn helpers для персонажей
//!
//! Персонаж игрока:
//! - тело (капсула, CharacterMovement, crouch) — `character_body_bundle`
//! - ViewOrientation + RotationInput + ViewPitchLimits (controller)
//! - ActionBindings (стандартная раскладка, `bind_player_actions`)
//! - SpringArm + отдельный ViewCamera entity
//! - WeaponAttachment child на WeaponSocket
//!
//! Враг: только тело.

use bevy::prelude::*;

use super::components::{
    Enemy, Player, PlayerCharacter, WeaponAttachment, WEAPON_SOCKET_OFFSET,
};
use crate::camera::{spring_arm_transform, SpringArm, ViewCamera};
use crate::config::GameplayConfig;
use crate::controller::{RotationInput, ViewOrientation, ViewPitchLimits};
use crate::input::{bind_player_actions, ActionBindings};
use crate::logger::log_info;
use crate::physics::character_body_bundle;

/// Spawn игрока ступнями в `feet_position`
pub fn spawn_player_character(
    commands: &mut Commands,
    config: &GameplayConfig,
    feet_position: Vec3,
) -> PlayerCharacter {
    let position = feet_position + Vec3::Y * config.character.capsule_half_height;

    let mut bindings = ActionBindings::default();
    bind_player_actions(&mut bindings);

    let arm = SpringArm::from_settings(&config.camera);
    let limits = ViewPitchLimits {
        min: config.camera.view_pitch_min,
        max: config.camera.view_pitch_max,
    };

    let body = commands
        .spawn((
            character_body_bundle(&config.character, position),
            Player,
            ViewOrientation::default(),
            RotationInput::default(),
            limits,
            bindings,
            arm,
            Name::new("PlayerCharacter"),
        ))
        .id();

    let weapon = commands
        .spawn((
            Transform::from_translation(WEAPON_SOCKET_OFFSET),
            WeaponAttachment::default(),
            Name::new("Weapon"),
            ChildOf(body),
        ))
        .id();

    let camera_transform = spring_arm_transform(
        position + arm.socket_offset,
        ViewOrientation::default().to_quat(),
        &arm,
    );
    let camera = commands
        .spawn((
            camera_transform,
            ViewCamera { target: body },
            Name::new("PlayerCamera"),
        ))
        .id();

    log_info(&format!(
        "Player character spawned {:?} at {:?} (camera {:?})",
        body, position, camera
    ));

    PlayerCharacter {
        body,
        camera,
        weapon,
    }
}

/// Spawn врага ступнями в `feet_position`
pub fn spawn_enemy_character(
    commands: &mut Commands,
    config: &GameplayConfig,
    feet_position: Vec3,
) -> Entity {
    let position = feet_position + Vec3::Y * config.character.capsule_half_height;

    let enemy = commands
        .spawn((
            character_body_bundle(&config.character, position),
            Enemy,
            Name::new("EnemyCharacter"),
        ))
        .id();

    log_info(&format!("Enemy character spawned {:?} at {:?}", enemy, position));
    enemy
}
