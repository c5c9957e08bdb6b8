//! Keyboard/mouse → ActionEvent
//!
//! Раскладка:
//! - WASD — Move (Triggered каждый кадр, пока ось не нулевая)
//! - мышь — Look (yaw/pitch в градусах)
//! - C / LeftCtrl — Crouch (Started на нажатие, Completed на отпускание)
//! - ЛКМ — выстрел из WeaponSocket

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use patrizia_simulation::{
    ActionEvent, ActionValue, InputAction, Player, SpawnProjectile, TriggerEvent, ViewOrientation,
    WeaponAttachment,
};

/// Градусы поворота на пиксель движения мыши
const MOUSE_SENSITIVITY: f32 = 0.15;

const CROUCH_KEYS: [KeyCode; 2] = [KeyCode::KeyC, KeyCode::ControlLeft];

pub struct KeyboardMouseInputPlugin;

impl Plugin for KeyboardMouseInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, grab_cursor);
        app.add_systems(
            Update,
            (move_actions, look_actions, crouch_actions, fire_actions)
                .before(patrizia_simulation::GameplaySet::Spawn),
        );
    }
}

fn grab_cursor(mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    window.cursor_options.grab_mode = CursorGrabMode::Locked;
    window.cursor_options.visible = false;
}

fn move_actions(keyboard: Res<ButtonInput<KeyCode>>, mut actions: EventWriter<ActionEvent>) {
    let axis = |positive: KeyCode, negative: KeyCode| {
        keyboard.pressed(positive) as i32 as f32 - keyboard.pressed(negative) as i32 as f32
    };
    // x = вперёд/назад, y = strafe
    let value = ActionValue::Axis2D(Vec2::new(
        axis(KeyCode::KeyW, KeyCode::KeyS),
        axis(KeyCode::KeyD, KeyCode::KeyA),
    ));

    if value.is_active() {
        actions.write(ActionEvent {
            action: InputAction::Move,
            trigger: TriggerEvent::Triggered,
            value,
        });
    }
}

fn look_actions(mut motion: EventReader<MouseMotion>, mut actions: EventWriter<ActionEvent>) {
    let delta: Vec2 = motion.read().map(|m| m.delta).sum();
    if delta == Vec2::ZERO {
        return;
    }

    // Экран: +y вниз, pitch: + вверх
    let value = Vec2::new(delta.x, -delta.y) * MOUSE_SENSITIVITY;
    actions.write(ActionEvent::axis(InputAction::Look, value));
}

fn crouch_actions(keyboard: Res<ButtonInput<KeyCode>>, mut actions: EventWriter<ActionEvent>) {
    if keyboard.any_just_pressed(CROUCH_KEYS) {
        actions.write(ActionEvent::started(InputAction::Crouch));
    }
    if keyboard.any_just_released(CROUCH_KEYS) && !keyboard.any_pressed(CROUCH_KEYS) {
        actions.write(ActionEvent::completed(InputAction::Crouch));
    }
}

fn fire_actions(
    mouse: Res<ButtonInput<MouseButton>>,
    players: Query<&ViewOrientation, With<Player>>,
    weapons: Query<(&GlobalTransform, &ChildOf), With<WeaponAttachment>>,
    mut spawns: EventWriter<SpawnProjectile>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    for (socket, child_of) in weapons.iter() {
        let Ok(view) = players.get(child_of.parent()) else {
            continue;
        };
        spawns.write(SpawnProjectile {
            transform: Transform::from_translation(socket.translation())
                .with_rotation(view.to_quat()),
            config: None,
        });
    }
}
