//! Collision profiles (Rapier groups)
//!
//! ## Слои:
//! - GROUP_1: World (статичная геометрия уровня)
//! - GROUP_2: Actors (капсулы персонажей)
//! - GROUP_3: Projectiles (сферы снарядов)
//!
//! Снаряды НЕ коллайдят друг с другом.
//! Оружие на сокете коллайдера не имеет вовсе (collision disabled).

use bevy_rapier3d::prelude::{CollisionGroups, Group};

pub const WORLD_GROUP: Group = Group::GROUP_1;
pub const ACTOR_GROUP: Group = Group::GROUP_2;
pub const PROJECTILE_GROUP: Group = Group::GROUP_3;

/// Actors: коллайдят с World + Actors + Projectiles
pub fn actor_groups() -> CollisionGroups {
    CollisionGroups::new(ACTOR_GROUP, WORLD_GROUP | ACTOR_GROUP | PROJECTILE_GROUP)
}

/// Profile "Projectile": коллайдит с World + Actors
pub fn projectile_groups() -> CollisionGroups {
    CollisionGroups::new(PROJECTILE_GROUP, WORLD_GROUP | ACTOR_GROUP)
}
