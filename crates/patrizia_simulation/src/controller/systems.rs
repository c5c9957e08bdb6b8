//! Controller systems

use bevy::prelude::*;

use super::components::{RotationInput, ViewPitchLimits};
use super::rotation::ViewOrientation;

/// Применяет накопленный look input к view orientation
///
/// Host-шаг (аналог update rotation у player controller):
/// - yaw/pitch += накопленное
/// - pitch → clamp по `ViewPitchLimits` (если компонента нет — без clamp)
/// - yaw → [0, 360)
/// - накопитель обнуляется
pub fn apply_rotation_input(
    mut query: Query<(
        &mut ViewOrientation,
        &mut RotationInput,
        Option<&ViewPitchLimits>,
    )>,
) {
    for (mut orientation, mut input, limits) in query.iter_mut() {
        if input.is_zero() {
            continue;
        }

        let delta = input.take();
        let mut next = *orientation;
        next.yaw += delta.yaw;
        next.pitch += delta.pitch;

        if let Some(limits) = limits {
            next.pitch = limits.clamp(next.pitch);
        }

        *orientation = next.with_wrapped_yaw();
    }
}
