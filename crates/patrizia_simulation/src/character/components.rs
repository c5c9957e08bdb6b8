//! Character компоненты: маркеры контроля и attachments

use bevy::prelude::*;

/// Marker component для player-controlled entity
///
/// Акторы С этим компонентом получают `CharacterCommand` от dispatcher
/// (если у них есть `ActionBindings`). В single-player обычно один.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Marker: вражеский персонаж
///
/// То же тело и movement, что у игрока, но без bindings/камеры.
/// Поведения пока нет.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Enemy;

/// Имя сокета оружия на скелете персонажа
pub const WEAPON_SOCKET: &str = "WeaponSocket";

/// Локальное смещение сокета оружия от центра капсулы (правая рука)
pub const WEAPON_SOCKET_OFFSET: Vec3 = Vec3::new(30.0, 10.0, -15.0);

/// Оружие, прикреплённое child'ом к сокету персонажа
///
/// Коллизии у оружия нет: это чисто визуальный attachment.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct WeaponAttachment {
    /// Сокет на host (например "WeaponSocket")
    pub socket: String,
    pub collision_enabled: bool,
}

impl WeaponAttachment {
    pub fn on_socket(socket: impl Into<String>) -> Self {
        Self {
            socket: socket.into(),
            collision_enabled: false,
        }
    }
}

impl Default for WeaponAttachment {
    fn default() -> Self {
        Self::on_socket(WEAPON_SOCKET)
    }
}

/// Handles заспавненного игрока
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerCharacter {
    pub body: Entity,
    pub camera: Entity,
    pub weapon: Entity,
}
