//! Locomotion domain — input mapper персонажа
//!
//! Содержит:
//! - MovementIntent / MovementContribution + map_move / map_look (чистая математика)
//! - handle_character_commands (ECS: команды → accumulators / crouch)

pub mod mapping;
pub mod systems;

#[cfg(test)]
mod systems_tests;

use bevy::prelude::*;

pub use mapping::*;
pub use systems::*;

use crate::input::dispatch_actions;
use crate::physics::CrouchChanged;

/// Locomotion Plugin: команды обрабатываются сразу после dispatch
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CrouchChanged>();

        app.add_systems(
            Update,
            handle_character_commands
                .after(dispatch_actions)
                .in_set(crate::GameplaySet::Input),
        );
    }
}
