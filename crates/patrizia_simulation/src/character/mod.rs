//! Character domain — сборка персонажей из компонентов остальных доменов
//!
//! Содержит:
//! - Player / Enemy маркеры
//! - WeaponAttachment (оружие на сокете, без коллизии)
//! - spawn_player_character / spawn_enemy_character

pub mod components;
pub mod spawn;

pub use components::*;
pub use spawn::*;
