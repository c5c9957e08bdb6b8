//! Camera domain — spring arm за спиной персонажа
//!
//! Симуляция считает только transform камеры; сам `Camera3d` вешает client.
//!
//! # Flow
//! 1. `SpringArm` на персонаже (длина, сокет, чья rotation)
//! 2. `ViewCamera { target }` на отдельном entity
//! 3. `update_spring_arm_cameras` ставит камеру на конец рычага
//!
//! Collision probe рычага нет: камера может уйти в геометрию.

use bevy::prelude::*;

use crate::config::CameraSettings;
use crate::controller::ViewOrientation;

#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct SpringArm {
    pub target_arm_length: f32,
    /// Смещение pivot от центра персонажа (world space)
    pub socket_offset: Vec3,
    /// true → рычаг вращается по ViewOrientation, false → по телу
    pub use_pawn_control_rotation: bool,
}

impl Default for SpringArm {
    fn default() -> Self {
        Self::from_settings(&CameraSettings::default())
    }
}

impl SpringArm {
    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self {
            target_arm_length: settings.arm_length,
            socket_offset: Vec3::new(0.0, settings.socket_height, 0.0),
            use_pawn_control_rotation: settings.use_pawn_control_rotation,
        }
    }
}

/// Камера, привязанная к spring arm персонажа
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCamera {
    pub target: Entity,
}

/// Transform камеры на конце рычага
///
/// pivot + arm_rotation * (+Z * length): рычаг тянется назад от направления
/// взгляда, камера смотрит вдоль того же направления.
pub fn spring_arm_transform(pivot: Vec3, arm_rotation: Quat, arm: &SpringArm) -> Transform {
    let offset = arm_rotation * (Vec3::Z * arm.target_arm_length);
    Transform {
        translation: pivot + offset,
        rotation: arm_rotation,
        ..default()
    }
}

pub fn update_spring_arm_cameras(
    targets: Query<(&Transform, &SpringArm, Option<&ViewOrientation>), Without<ViewCamera>>,
    mut cameras: Query<(&ViewCamera, &mut Transform)>,
) {
    for (camera, mut camera_transform) in cameras.iter_mut() {
        let Ok((target_transform, arm, view)) = targets.get(camera.target) else {
            continue;
        };

        let arm_rotation = match (arm.use_pawn_control_rotation, view) {
            (true, Some(view)) => view.to_quat(),
            _ => target_transform.rotation,
        };
        let pivot = target_transform.translation + arm.socket_offset;

        *camera_transform = spring_arm_transform(pivot, arm_rotation, arm);
    }
}

pub struct SpringArmCameraPlugin;

impl Plugin for SpringArmCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            update_spring_arm_cameras.in_set(crate::GameplaySet::Camera),
        );
    }
}
