//! Locomotion systems: CharacterCommand → movement/look/crouch

use bevy::prelude::*;

use super::mapping::{map_look, map_move};
use crate::controller::{RotationInput, ViewOrientation};
use crate::input::{CharacterCommand, CharacterHandler};
use crate::logger::log;
use crate::physics::{
    crouch, uncrouch, CharacterCapsule, CharacterMovement, CrouchChanged, CrouchState,
    PendingMovementInput,
};

/// Player character: всё, что нужно обработчикам команд
type LocomotionQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static ViewOrientation,
        &'static mut RotationInput,
        &'static mut PendingMovementInput,
        &'static mut CrouchState,
        &'static CharacterMovement,
        &'static mut CharacterCapsule,
        &'static mut Transform,
    ),
>;

/// Обработка команд персонажа
///
/// # Handlers
/// - Move → два вклада в PendingMovementInput (forward × x, right × y)
/// - Look → RotationInput += (x, y)
/// - Crouch / UnCrouch → запрос в crouch state machine (idempotent)
///
/// Move использует ориентацию на момент команды (look этого кадра ещё
/// не применён — он применяется в `apply_rotation_input` после).
pub fn handle_character_commands(
    mut commands_in: EventReader<CharacterCommand>,
    mut crouch_events: EventWriter<CrouchChanged>,
    mut characters: LocomotionQuery,
) {
    for command in commands_in.read() {
        let Ok((
            orientation,
            mut rotation_input,
            mut pending,
            mut state,
            movement,
            mut capsule,
            mut transform,
        )) = characters.get_mut(command.entity)
        else {
            continue;
        };

        match command.handler {
            CharacterHandler::Move => {
                for contribution in map_move(*orientation, command.value.as_axis2d()) {
                    pending.add(contribution.direction, contribution.scale);
                }
            }
            CharacterHandler::Look => {
                map_look(&mut rotation_input, command.value.as_axis2d());
            }
            CharacterHandler::Crouch => {
                if crouch(&mut state, movement, &mut capsule, &mut transform) {
                    log(&format!("{:?} crouched", command.entity));
                    crouch_events.write(CrouchChanged {
                        entity: command.entity,
                        state: *state,
                    });
                }
            }
            CharacterHandler::UnCrouch => {
                if uncrouch(&mut state, &mut capsule, &mut transform) {
                    log(&format!("{:?} stood up", command.entity));
                    crouch_events.write(CrouchChanged {
                        entity: command.entity,
                        state: *state,
                    });
                }
            }
        }
    }
}
