//! Input actions: что пришло от action source (клавиатура/мышь, тест, скрипт)
//!
//! Action source не знает про персонажа — он только сообщает
//! "action X в фазе Y со значением Z". Кому это адресовано, решают
//! `ActionBindings` на player entity.

use bevy::prelude::*;

/// Логические actions игрока
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum InputAction {
    /// 2D axis: x = вперёд/назад, y = strafe
    Move,
    /// 2D axis: x = yaw delta, y = pitch delta
    Look,
    /// Дискретный, двухфазный (Started / Completed)
    Crouch,
}

/// Фаза action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum TriggerEvent {
    /// Первый кадр нажатия
    Started,
    /// Каждый кадр пока action активен
    Triggered,
    /// Отпускание
    Completed,
}

/// Значение action
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum ActionValue {
    Digital(bool),
    Axis1D(f32),
    Axis2D(Vec2),
}

impl Default for ActionValue {
    fn default() -> Self {
        Self::Digital(false)
    }
}

impl ActionValue {
    /// Значение как 2D axis
    ///
    /// - Digital(true) → (1, 0), Digital(false) → (0, 0)
    /// - Axis1D(v) → (v, 0)
    pub fn as_axis2d(&self) -> Vec2 {
        match *self {
            ActionValue::Digital(pressed) => {
                if pressed {
                    Vec2::X
                } else {
                    Vec2::ZERO
                }
            }
            ActionValue::Axis1D(v) => Vec2::new(v, 0.0),
            ActionValue::Axis2D(v) => v,
        }
    }

    pub fn is_active(&self) -> bool {
        match *self {
            ActionValue::Digital(pressed) => pressed,
            ActionValue::Axis1D(v) => v != 0.0,
            ActionValue::Axis2D(v) => v != Vec2::ZERO,
        }
    }
}

/// Event: action source сообщает о фазе action
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ActionEvent {
    pub action: InputAction,
    pub trigger: TriggerEvent,
    pub value: ActionValue,
}

impl ActionEvent {
    pub fn axis(action: InputAction, value: Vec2) -> Self {
        Self {
            action,
            trigger: TriggerEvent::Triggered,
            value: ActionValue::Axis2D(value),
        }
    }

    pub fn started(action: InputAction) -> Self {
        Self {
            action,
            trigger: TriggerEvent::Started,
            value: ActionValue::Digital(true),
        }
    }

    pub fn completed(action: InputAction) -> Self {
        Self {
            action,
            trigger: TriggerEvent::Completed,
            value: ActionValue::Digital(false),
        }
    }
}
