//! Headless симуляция Patrizia Adventure
//!
//! Скриптованный input: игрок бежит, крутит камерой, приседает;
//! каждые 100 кадров — выстрел из оружия.

use std::time::Duration;

use bevy::prelude::*;
use patrizia_simulation::character::WEAPON_SOCKET_OFFSET;
use patrizia_simulation::config::DEFAULT_CONFIG_PATH;
use patrizia_simulation::{
    create_stepped_app_with_config, log, log_info, spawn_enemy_character, spawn_player_character,
    ActionEvent, CharacterMovement, CrouchState, GameplayConfig, InputAction, Projectile,
    SpawnProjectile, ViewOrientation,
};

const FRAMES: usize = 600;

fn scripted_actions(frame: usize) -> Vec<ActionEvent> {
    let mut actions = vec![ActionEvent::axis(InputAction::Move, Vec2::new(1.0, 0.3))];

    if frame % 4 == 0 {
        actions.push(ActionEvent::axis(InputAction::Look, Vec2::new(1.5, 0.0)));
    }
    match frame {
        200 => actions.push(ActionEvent::started(InputAction::Crouch)),
        350 => actions.push(ActionEvent::completed(InputAction::Crouch)),
        _ => {}
    }

    actions
}

fn main() {
    let config = GameplayConfig::load_or_default(DEFAULT_CONFIG_PATH);
    let mut app = create_stepped_app_with_config(Duration::from_millis(16), config.clone());

    log_info("Starting Patrizia headless simulation");

    let player = spawn_player_character(&mut app.world_mut().commands(), &config, Vec3::ZERO);
    spawn_enemy_character(
        &mut app.world_mut().commands(),
        &config,
        Vec3::new(800.0, 0.0, -400.0),
    );
    app.world_mut().flush();

    for frame in 0..FRAMES {
        for action in scripted_actions(frame) {
            app.world_mut().send_event(action);
        }

        if frame % 100 == 50 {
            let world = app.world();
            // MinimalPlugins без transform propagation: сокет считаем сами
            let muzzle = world
                .get::<Transform>(player.body)
                .map(|t| t.transform_point(WEAPON_SOCKET_OFFSET))
                .unwrap_or_default();
            let view = world
                .get::<ViewOrientation>(player.body)
                .copied()
                .unwrap_or_default();
            app.world_mut().send_event(SpawnProjectile {
                transform: Transform::from_translation(muzzle).with_rotation(view.to_quat()),
                config: None,
            });
        }

        app.update();

        if frame % 100 == 0 {
            let world = app.world_mut();
            let projectiles = world.query::<&Projectile>().iter(world).count();
            let world = app.world();
            let (Some(transform), Some(movement), Some(crouch)) = (
                world.get::<Transform>(player.body),
                world.get::<CharacterMovement>(player.body),
                world.get::<CrouchState>(player.body),
            ) else {
                continue;
            };
            log(&format!(
                "Frame {}: player at {:?}, speed {:.1}, {:?}, {} projectiles",
                frame,
                transform.translation,
                movement.horizontal_speed(),
                crouch,
                projectiles
            ));
        }
    }

    log_info("Simulation complete!");
}
