//! Crouch state machine персонажа
//!
//! Переходы только по запросу (crouch / uncrouch), без таймеров.
//! Оба запроса идемпотентны: повторный crouch в Crouching и uncrouch в
//! Standing ничего не меняют и event не шлют.

use bevy::prelude::*;

use super::movement::{CharacterCapsule, CharacterMovement};

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub enum CrouchState {
    #[default]
    Standing,
    Crouching,
}

impl CrouchState {
    pub fn is_crouching(&self) -> bool {
        matches!(self, CrouchState::Crouching)
    }
}

/// Event: состояние crouch сменилось
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CrouchChanged {
    pub entity: Entity,
    pub state: CrouchState,
}

/// Запрос на приседание
///
/// Standing → Crouching если `can_crouch`. Капсула укорачивается (не ниже
/// радиуса), тело опускается на разницу высот (ступни остаются на месте).
/// Возвращает true только при реальном переходе.
pub fn crouch(
    state: &mut CrouchState,
    movement: &CharacterMovement,
    capsule: &mut CharacterCapsule,
    transform: &mut Transform,
) -> bool {
    if state.is_crouching() || !movement.can_crouch {
        return false;
    }

    let crouched = movement.crouched_half_height.max(capsule.radius);
    let shrink = capsule.standing_half_height - crouched;
    capsule.half_height = crouched;
    transform.translation.y -= shrink;
    *state = CrouchState::Crouching;
    true
}

/// Запрос на вставание: Crouching → Standing, зеркально `crouch`
pub fn uncrouch(
    state: &mut CrouchState,
    capsule: &mut CharacterCapsule,
    transform: &mut Transform,
) -> bool {
    if !state.is_crouching() {
        return false;
    }

    let grow = capsule.standing_half_height - capsule.half_height;
    capsule.half_height = capsule.standing_half_height;
    transform.translation.y += grow;
    *state = CrouchState::Standing;
    true
}
