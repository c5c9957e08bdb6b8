//! Action bindings + dispatch
//!
//! Bindings регистрируются один раз при spawn персонажа
//! (`bind_player_actions`) и живут компонентом на самом entity.
//! Dispatcher типизирован: никакого runtime-cast от "общего" input
//! компонента к конкретному — что не привязано, то игнорируется.

use bevy::prelude::*;

use super::actions::{ActionEvent, ActionValue, InputAction, TriggerEvent};
use crate::character::Player;
use crate::logger::log;

/// Обработчик персонажа, к которому привязывается action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum CharacterHandler {
    Move,
    Look,
    Crouch,
    UnCrouch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub struct ActionBinding {
    pub action: InputAction,
    pub trigger: TriggerEvent,
    pub handler: CharacterHandler,
}

/// Таблица bindings конкретного персонажа
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct ActionBindings {
    bindings: Vec<ActionBinding>,
}

impl ActionBindings {
    pub fn bind(&mut self, action: InputAction, trigger: TriggerEvent, handler: CharacterHandler) {
        let binding = ActionBinding {
            action,
            trigger,
            handler,
        };
        // Повторный bind той же тройки не дублирует вызов
        if !self.bindings.contains(&binding) {
            self.bindings.push(binding);
        }
    }

    pub fn handlers_for(
        &self,
        action: InputAction,
        trigger: TriggerEvent,
    ) -> impl Iterator<Item = CharacterHandler> + '_ {
        self.bindings
            .iter()
            .filter(move |b| b.action == action && b.trigger == trigger)
            .map(|b| b.handler)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Стандартная раскладка игрока
///
/// - Move / Triggered → Move
/// - Look / Triggered → Look
/// - Crouch / Started → Crouch
/// - Crouch / Completed → UnCrouch
pub fn bind_player_actions(bindings: &mut ActionBindings) {
    bindings.bind(InputAction::Move, TriggerEvent::Triggered, CharacterHandler::Move);
    bindings.bind(InputAction::Look, TriggerEvent::Triggered, CharacterHandler::Look);
    bindings.bind(InputAction::Crouch, TriggerEvent::Started, CharacterHandler::Crouch);
    bindings.bind(InputAction::Crouch, TriggerEvent::Completed, CharacterHandler::UnCrouch);
}

/// Команда конкретному персонажу (результат dispatch)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CharacterCommand {
    pub entity: Entity,
    pub handler: CharacterHandler,
    pub value: ActionValue,
}

/// Dispatch: ActionEvent → CharacterCommand для каждого привязанного handler
///
/// # Архитектура
/// - Читает: ActionEvent (от action source)
/// - Пишет: CharacterCommand (обрабатывает locomotion)
/// - Query: With<Player> (AI/враги bindings не имеют)
pub fn dispatch_actions(
    mut actions: EventReader<ActionEvent>,
    mut commands_out: EventWriter<CharacterCommand>,
    players: Query<(Entity, &ActionBindings), With<Player>>,
) {
    for action in actions.read() {
        for (entity, bindings) in players.iter() {
            for handler in bindings.handlers_for(action.action, action.trigger) {
                commands_out.write(CharacterCommand {
                    entity,
                    handler,
                    value: action.value,
                });
            }
        }
    }
}

/// Лог при появлении bindings (один раз на entity)
pub fn log_new_bindings(query: Query<(Entity, &ActionBindings), Added<ActionBindings>>) {
    for (entity, bindings) in query.iter() {
        log(&format!(
            "Input bindings ready for {:?}: {} binding(s)",
            entity,
            bindings.len()
        ));
    }
}
