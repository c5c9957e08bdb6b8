//! Controller domain — ориентация взгляда игрока
//!
//! Содержит:
//! - ViewOrientation (control rotation, система отсчёта для movement)
//! - RotationInput (per-frame look accumulator)
//! - ViewPitchLimits + apply_rotation_input (host-шаг применения look)

pub mod components;
pub mod rotation;
pub mod systems;

use bevy::prelude::*;

pub use components::*;
pub use rotation::*;
pub use systems::*;

pub struct ControllerPlugin;

impl Plugin for ControllerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            apply_rotation_input.in_set(crate::GameplaySet::Controller),
        );
    }
}
