use bevy::prelude::*;
use patrizia_simulation::{
    CharacterCapsule, CrouchChanged, Enemy, Player, Projectile, ProjectileTrail, WeaponAttachment,
};

/// Meshes на simulation entities
///
/// Визуал вешается прямо на sim entity (DefaultPlugins дают transform
/// propagation и рендер), отдельные visual entities не нужны.
pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                spawn_character_visuals,
                spawn_weapon_visuals,
                spawn_projectile_visuals,
                resize_crouched_capsules,
                draw_projectile_trails,
            )
                .after(patrizia_simulation::GameplaySet::Camera),
        );
    }
}

fn capsule_mesh(capsule: &CharacterCapsule) -> Capsule3d {
    // half_height capsule включает полусферу
    Capsule3d::new(capsule.radius, 2.0 * (capsule.half_height - capsule.radius).max(0.0))
}

fn spawn_character_visuals(
    mut commands: Commands,
    query: Query<(Entity, &CharacterCapsule, Has<Player>, Has<Enemy>), Added<CharacterCapsule>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, capsule, is_player, is_enemy) in query.iter() {
        let color = match (is_player, is_enemy) {
            (true, _) => Color::srgb(0.2, 0.2, 0.8), // Blue
            (_, true) => Color::srgb(0.8, 0.2, 0.2), // Red
            _ => Color::srgb(0.6, 0.6, 0.6),
        };

        commands.entity(entity).insert((
            Mesh3d(meshes.add(capsule_mesh(capsule))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color,
                ..default()
            })),
            Visibility::default(),
        ));
    }
}

fn spawn_weapon_visuals(
    mut commands: Commands,
    query: Query<Entity, Added<WeaponAttachment>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for entity in query.iter() {
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Cuboid::new(6.0, 8.0, 40.0))),
            MeshMaterial3d(materials.add(Color::srgb(0.15, 0.15, 0.15))),
        ));
    }
}

fn spawn_projectile_visuals(
    mut commands: Commands,
    query: Query<(Entity, &Projectile), Added<Projectile>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, projectile) in query.iter() {
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Sphere::new(projectile.config().collision_radius))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(1.0, 0.7, 0.2),
                emissive: LinearRgba::rgb(4.0, 2.0, 0.4),
                ..default()
            })),
            Visibility::default(),
        ));
    }
}

/// Crouch меняет половину высоты капсулы → новый mesh
fn resize_crouched_capsules(
    mut events: EventReader<CrouchChanged>,
    mut query: Query<(&CharacterCapsule, &mut Mesh3d)>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    for event in events.read() {
        if let Ok((capsule, mut mesh)) = query.get_mut(event.entity) {
            mesh.0 = meshes.add(capsule_mesh(capsule));
        }
    }
}

/// Trail рисуем gizmo-линией вдоль скорости (debug visualization)
fn draw_projectile_trails(
    trails: Query<(&GlobalTransform, &ProjectileTrail, &ChildOf)>,
    projectiles: Query<&patrizia_simulation::ProjectileMovement>,
    mut gizmos: Gizmos,
) {
    for (transform, trail, child_of) in trails.iter() {
        if !trail.looping {
            continue;
        }
        let Ok(movement) = projectiles.get(child_of.parent()) else {
            continue;
        };
        let head = transform.translation();
        let tail = head - movement.velocity * 0.05;
        gizmos.line(head, tail, Color::srgb(1.0, 0.8, 0.3));
    }
}
