//! Character movement integrator (host-сторона для movement intent)
//!
//! Архитектура:
//! - Locomotion добавляет вклады в `PendingMovementInput` (без нормализации)
//! - Здесь накопленный input забирается раз в кадр, clamp до длины 1,
//!   умножается на max speed (walk / crouched)
//! - Gravity + ground check по плоскому полу (`WorldSettings::floor_height`)
//! - Тело поворачивается к направлению движения (orient rotation to movement)
//!   или копирует yaw контроллера
//! - Rapier только для collider/groups, velocity интегрируем сами

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::collision;
use super::crouch::CrouchState;
use crate::config::{CharacterSettings, WorldSettings};
use crate::controller::{yaw_of, yaw_rotation, ViewOrientation};

/// Допуск ground check (units)
pub const GROUND_TOLERANCE: f32 = 0.5;

/// Порог "стоит на месте" для поворота тела (units/sec)
const MIN_TURN_SPEED: f32 = 1.0;

/// Параметры и состояние движения персонажа
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
#[require(PendingMovementInput, CrouchState, CharacterCapsule)]
pub struct CharacterMovement {
    pub max_walk_speed: f32,
    pub max_walk_speed_crouched: f32,
    /// deg/sec
    pub rotation_rate_yaw: f32,
    pub gravity_scale: f32,
    pub crouched_half_height: f32,
    pub can_crouch: bool,
    pub orient_rotation_to_movement: bool,
    pub use_controller_rotation_yaw: bool,
    pub velocity: Vec3,
    pub grounded: bool,
}

impl Default for CharacterMovement {
    fn default() -> Self {
        Self::from_settings(&CharacterSettings::default())
    }
}

impl CharacterMovement {
    pub fn from_settings(settings: &CharacterSettings) -> Self {
        Self {
            max_walk_speed: settings.max_walk_speed,
            max_walk_speed_crouched: settings.max_walk_speed_crouched,
            rotation_rate_yaw: settings.rotation_rate_yaw,
            gravity_scale: settings.gravity_scale,
            crouched_half_height: settings.crouched_half_height,
            can_crouch: settings.can_crouch,
            orient_rotation_to_movement: settings.orient_rotation_to_movement,
            use_controller_rotation_yaw: settings.use_controller_rotation_yaw,
            velocity: Vec3::ZERO,
            grounded: false,
        }
    }

    pub fn max_speed(&self, crouch: CrouchState) -> f32 {
        match crouch {
            CrouchState::Standing => self.max_walk_speed,
            CrouchState::Crouching => self.max_walk_speed_crouched,
        }
    }

    pub fn horizontal_speed(&self) -> f32 {
        Vec2::new(self.velocity.x, self.velocity.z).length()
    }
}

/// Капсула персонажа (half_height — от центра до верхушки/низа)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CharacterCapsule {
    pub radius: f32,
    pub half_height: f32,
    /// Высота стоя (для восстановления после crouch)
    pub standing_half_height: f32,
}

impl Default for CharacterCapsule {
    fn default() -> Self {
        let settings = CharacterSettings::default();
        Self::new(settings.capsule_radius, settings.capsule_half_height)
    }
}

impl CharacterCapsule {
    pub fn new(radius: f32, half_height: f32) -> Self {
        Self {
            radius,
            half_height,
            standing_half_height: half_height,
        }
    }

    /// Rapier capsule: half_height у Rapier — только цилиндрическая часть
    pub fn collider(&self) -> Collider {
        Collider::capsule_y((self.half_height - self.radius).max(0.0), self.radius)
    }

    pub fn feet(&self, transform: &Transform) -> f32 {
        transform.translation.y - self.half_height
    }
}

/// Накопленный movement intent за кадр (world space)
///
/// Сумма `direction * scale` всех вкладов; нормализация НЕ делается здесь.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct PendingMovementInput(pub Vec3);

impl PendingMovementInput {
    pub fn add(&mut self, direction: Vec3, scale: f32) {
        self.0 += direction * scale;
    }

    pub fn take(&mut self) -> Vec3 {
        std::mem::take(&mut self.0)
    }
}

/// Yaw (градусы), при котором тело смотрит вдоль горизонтальной части `direction`
pub fn movement_yaw(direction: Vec3) -> Option<f32> {
    let planar = Vec2::new(direction.x, direction.z);
    if planar.length_squared() < f32::EPSILON {
        return None;
    }
    Some(direction.x.atan2(-direction.z).to_degrees().rem_euclid(360.0))
}

/// Шаг yaw к target не больше `max_step` по кратчайшей дуге
pub fn step_yaw_towards(current: f32, target: f32, max_step: f32) -> f32 {
    let mut delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    (current + delta.clamp(-max_step, max_step)).rem_euclid(360.0)
}

/// Ground check по плоскому полу
pub fn ground_detection(
    world: Res<WorldSettings>,
    mut query: Query<(&Transform, &CharacterCapsule, &mut CharacterMovement)>,
) {
    for (transform, capsule, mut movement) in query.iter_mut() {
        let feet = capsule.feet(transform);
        movement.grounded =
            feet <= world.floor_height + GROUND_TOLERANCE && movement.velocity.y <= 0.0;
    }
}

/// Накопленный input → горизонтальная velocity
///
/// Input clamp до длины 1 (диагональ по скорости = ось),
/// дальше × max speed текущего crouch состояния. Y velocity не трогаем.
pub fn apply_movement_input(
    mut query: Query<(
        &mut CharacterMovement,
        &mut PendingMovementInput,
        &CrouchState,
    )>,
) {
    for (mut movement, mut pending, crouch) in query.iter_mut() {
        let input = pending.take();
        let planar = Vec3::new(input.x, 0.0, input.z).clamp_length_max(1.0);
        let speed = movement.max_speed(*crouch);

        movement.velocity.x = planar.x * speed;
        movement.velocity.z = planar.z * speed;
    }
}

pub fn apply_gravity(
    world: Res<WorldSettings>,
    time: Res<Time>,
    mut query: Query<&mut CharacterMovement>,
) {
    let delta = time.delta_secs();

    for mut movement in query.iter_mut() {
        if movement.grounded {
            movement.velocity.y = movement.velocity.y.max(0.0);
        } else {
            movement.velocity.y += world.gravity_y * movement.gravity_scale * delta;
        }
    }
}

/// Поворот тела: yaw контроллера, либо к направлению движения с rotation rate
pub fn orient_rotation_to_movement(
    time: Res<Time>,
    mut query: Query<(&CharacterMovement, &mut Transform, Option<&ViewOrientation>)>,
) {
    let delta = time.delta_secs();

    for (movement, mut transform, view) in query.iter_mut() {
        if movement.use_controller_rotation_yaw {
            if let Some(view) = view {
                transform.rotation = yaw_rotation(view.yaw);
            }
            continue;
        }

        if !movement.orient_rotation_to_movement || movement.horizontal_speed() < MIN_TURN_SPEED {
            continue;
        }

        let Some(target) = movement_yaw(movement.velocity) else {
            continue;
        };

        let current = yaw_of(transform.rotation);
        let next = step_yaw_towards(current, target, movement.rotation_rate_yaw * delta);
        transform.rotation = yaw_rotation(next);
    }
}

/// velocity → Transform, ступни не ниже пола
pub fn integrate_character_velocity(
    world: Res<WorldSettings>,
    time: Res<Time>,
    mut query: Query<(&mut CharacterMovement, &CharacterCapsule, &mut Transform)>,
) {
    let delta = time.delta_secs();

    for (mut movement, capsule, mut transform) in query.iter_mut() {
        transform.translation += movement.velocity * delta;

        let lowest = world.floor_height + capsule.half_height;
        if transform.translation.y < lowest {
            transform.translation.y = lowest;
            movement.velocity.y = movement.velocity.y.max(0.0);
        }
    }
}

/// Collider следует за капсулой (crouch меняет half_height)
pub fn sync_capsule_collider(
    mut query: Query<(&CharacterCapsule, &mut Collider), Changed<CharacterCapsule>>,
) {
    for (capsule, mut collider) in query.iter_mut() {
        *collider = capsule.collider();
    }
}

/// Компоненты тела персонажа (без input/camera)
///
/// - Transform
/// - CharacterMovement (+ required: PendingMovementInput, CrouchState, CharacterCapsule)
/// - Rapier: RigidBody + Collider (capsule) + groups
pub fn character_body_bundle(settings: &CharacterSettings, position: Vec3) -> impl Bundle {
    let capsule = CharacterCapsule::new(settings.capsule_radius, settings.capsule_half_height);
    (
        Transform::from_translation(position),
        CharacterMovement::from_settings(settings),
        capsule,
        RigidBody::KinematicPositionBased,
        capsule.collider(),
        collision::actor_groups(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_input_sums_without_normalizing() {
        let mut pending = PendingMovementInput::default();
        pending.add(Vec3::NEG_Z, 1.0);
        pending.add(Vec3::X, 1.0);

        let taken = pending.take();
        assert!((taken.length() - 2f32.sqrt()).abs() < 1e-5);
        assert_eq!(pending.0, Vec3::ZERO);
    }

    #[test]
    fn test_max_speed_by_crouch_state() {
        let movement = CharacterMovement::default();
        assert_eq!(movement.max_speed(CrouchState::Standing), 600.0);
        assert_eq!(movement.max_speed(CrouchState::Crouching), 300.0);
    }

    #[test]
    fn test_movement_yaw_matches_orientation_convention() {
        assert!((movement_yaw(Vec3::NEG_Z).unwrap() - 0.0).abs() < 1e-3);
        assert!((movement_yaw(Vec3::X).unwrap() - 90.0).abs() < 1e-3);
        assert!((movement_yaw(Vec3::Z).unwrap() - 180.0).abs() < 1e-3);
        assert!(movement_yaw(Vec3::Y).is_none());
    }

    #[test]
    fn test_step_yaw_takes_short_arc() {
        // 350 → 10: через 0, а не назад через 180
        let next = step_yaw_towards(350.0, 10.0, 5.0);
        assert!((next - 355.0).abs() < 1e-3, "next = {next}");

        // Шаг больше дуги → сразу в target
        let next = step_yaw_towards(80.0, 90.0, 45.0);
        assert!((next - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_capsule_collider_height() {
        let capsule = CharacterCapsule::new(34.0, 88.0);
        assert_eq!(capsule.standing_half_height, 88.0);
        let transform = Transform::from_xyz(0.0, 88.0, 0.0);
        assert_eq!(capsule.feet(&transform), 0.0);

        let rapier = capsule.collider();
        let shape = rapier.raw.as_capsule().unwrap();
        assert!((shape.half_height() - 54.0).abs() < 1e-4);
        assert_eq!(shape.radius, 34.0);
    }

    #[test]
    fn test_collider_follows_crouched_capsule() {
        use bevy::ecs::system::RunSystemOnce;

        let mut world = World::new();
        let mut capsule = CharacterCapsule::default();
        let e = world.spawn((capsule, capsule.collider())).id();

        capsule.half_height = 40.0;
        *world.get_mut::<CharacterCapsule>(e).unwrap() = capsule;
        world.run_system_once(sync_capsule_collider).unwrap();

        let collider = world.get::<Collider>(e).unwrap();
        let shape = collider.raw.as_capsule().unwrap();
        assert!((shape.half_height() - 6.0).abs() < 1e-4);
    }
}
