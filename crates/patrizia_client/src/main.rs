use bevy::prelude::*;
use patrizia_simulation::config::DEFAULT_CONFIG_PATH;
use patrizia_simulation::{spawn_enemy_character, spawn_player_character, GameplayConfig, SimulationPlugin};

mod camera;
mod input;
mod rendering;

use camera::CameraPlugin;
use input::KeyboardMouseInputPlugin;
use rendering::RenderingSyncPlugin;

fn main() {
    // Config до SimulationPlugin: plugin подхватит его вместо defaults
    let config = GameplayConfig::load_or_default(DEFAULT_CONFIG_PATH);

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Patrizia Adventure".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(config)
        // Simulation (headless ECS logic)
        .add_plugins(SimulationPlugin)
        // Keyboard/mouse → ActionEvent
        .add_plugins(KeyboardMouseInputPlugin)
        // Rendering sync (simulation → visuals)
        .add_plugins(RenderingSyncPlugin)
        // Camera3d на spring arm камере
        .add_plugins(CameraPlugin)
        .add_systems(Startup, setup_scene)
        .run();
}

/// Spawn ground plane, lights, player и один враг
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<GameplayConfig>,
) {
    // Ground plane (50x50m, units = cm)
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(2500.0)))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.3))),
        Transform::from_xyz(0.0, config.world.floor_height, 0.0),
    ));

    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4)),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.3,
        affects_lightmapped_meshes: false,
    });

    // Visuals и Camera3d навешиваются плагинами по Added<...>
    spawn_player_character(&mut commands, &config, Vec3::ZERO);
    spawn_enemy_character(&mut commands, &config, Vec3::new(600.0, 0.0, -800.0));
}
