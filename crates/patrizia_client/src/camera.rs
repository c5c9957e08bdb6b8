use bevy::prelude::*;
use patrizia_simulation::ViewCamera;

/// Рендер-камера на spring arm entity из симуляции
///
/// Transform ведёт `update_spring_arm_cameras`, здесь только Camera3d.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, attach_camera3d);
    }
}

fn attach_camera3d(mut commands: Commands, query: Query<Entity, Added<ViewCamera>>) {
    for entity in query.iter() {
        commands.entity(entity).insert((
            Camera3d::default(),
            // Units = cm: дальняя плоскость под масштаб уровня
            Projection::Perspective(PerspectiveProjection {
                far: 20_000.0,
                ..default()
            }),
        ));
    }
}
