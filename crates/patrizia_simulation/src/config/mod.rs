//! Gameplay config (RON)
//!
//! Все параметры, которые в редакторе выставлялись бы на defaults персонажа
//! и снаряда. Каждое поле имеет default, так что файл может быть частичным.
//!
//! Ошибки загрузки — единственный error path симуляции: gameplay операции
//! (move/look/crouch, spawn снаряда) ошибок не имеют.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logger::{log_info, log_warning};
use crate::projectile::ProjectileConfig;

/// Путь по умолчанию (относительно рабочей директории)
pub const DEFAULT_CONFIG_PATH: &str = "assets/config/gameplay.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Параметры движения персонажа (host movement integrator)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterSettings {
    /// units/sec
    pub max_walk_speed: f32,
    /// units/sec
    pub max_walk_speed_crouched: f32,
    /// Скорость поворота тела к направлению движения (deg/sec)
    pub rotation_rate_yaw: f32,
    pub gravity_scale: f32,
    pub capsule_radius: f32,
    pub capsule_half_height: f32,
    pub crouched_half_height: f32,
    pub can_crouch: bool,
    pub orient_rotation_to_movement: bool,
    pub use_controller_rotation_yaw: bool,
}

impl Default for CharacterSettings {
    fn default() -> Self {
        Self {
            max_walk_speed: 600.0,
            max_walk_speed_crouched: 300.0,
            rotation_rate_yaw: 360.0,
            gravity_scale: 1.0,
            capsule_radius: 34.0,
            capsule_half_height: 88.0,
            crouched_half_height: 40.0,
            can_crouch: true,
            orient_rotation_to_movement: true,
            use_controller_rotation_yaw: false,
        }
    }
}

/// Spring arm + ограничения взгляда
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub arm_length: f32,
    /// Высота pivot над центром капсулы
    pub socket_height: f32,
    pub use_pawn_control_rotation: bool,
    pub view_pitch_min: f32,
    pub view_pitch_max: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            arm_length: 300.0,
            socket_height: 0.0,
            use_pawn_control_rotation: true,
            view_pitch_min: -89.9,
            view_pitch_max: 89.9,
        }
    }
}

/// Мировые константы
#[derive(Debug, Clone, Copy, PartialEq, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    /// Ускорение по оси Y, units/sec² (отрицательное = вниз)
    pub gravity_y: f32,
    pub floor_height: f32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            gravity_y: -980.0,
            floor_height: 0.0,
        }
    }
}

/// Весь gameplay config одним resource
#[derive(Debug, Clone, PartialEq, Default, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub character: CharacterSettings,
    pub camera: CameraSettings,
    pub projectile: ProjectileConfig,
    pub world: WorldSettings,
}

impl GameplayConfig {
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&source)
    }

    /// Load from file, fallback на defaults (с warning) при любой ошибке
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log_info(&format!("Gameplay config loaded from {}", path.display()));
                config
            }
            Err(e) => {
                log_warning(&format!("{e}, using default gameplay config"));
                Self::default()
            }
        }
    }

    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.character;
        if c.max_walk_speed < 0.0 || c.max_walk_speed_crouched < 0.0 {
            return Err(ConfigError::Invalid("walk speeds must be >= 0".into()));
        }
        if c.capsule_radius <= 0.0 || c.capsule_half_height <= 0.0 {
            return Err(ConfigError::Invalid("capsule dimensions must be > 0".into()));
        }
        // Капсула не короче своей сферы: иначе crouch утопит её в пол
        if c.crouched_half_height < c.capsule_radius
            || c.crouched_half_height > c.capsule_half_height
        {
            return Err(ConfigError::Invalid(format!(
                "crouched_half_height {} must be in [{}, {}]",
                c.crouched_half_height, c.capsule_radius, c.capsule_half_height
            )));
        }
        if self.camera.view_pitch_min > self.camera.view_pitch_max {
            return Err(ConfigError::Invalid(format!(
                "view pitch limits inverted: {} > {}",
                self.camera.view_pitch_min, self.camera.view_pitch_max
            )));
        }
        if self.projectile.collision_radius <= 0.0 {
            return Err(ConfigError::Invalid("projectile collision_radius must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ron_gives_defaults() {
        let config = GameplayConfig::from_ron_str("()").unwrap();
        assert_eq!(config, GameplayConfig::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config =
            GameplayConfig::from_ron_str("(projectile: (initial_speed: 3000.0))").unwrap();

        assert_eq!(config.projectile.initial_speed, 3000.0);
        assert_eq!(config.projectile.collision_radius, 5.0);
        assert_eq!(config.projectile.gravity_scale, 0.0);
        assert_eq!(config.character, CharacterSettings::default());
    }

    #[test]
    fn test_invalid_crouch_height_rejected() {
        let result = GameplayConfig::from_ron_str(
            "(character: (capsule_half_height: 50.0, crouched_half_height: 60.0))",
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_crouch_height_below_radius_rejected() {
        let result = GameplayConfig::from_ron_str(
            "(character: (capsule_radius: 34.0, capsule_half_height: 88.0, crouched_half_height: 20.0))",
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        // Ровно радиус: сфера касается пола, это допустимо
        let config = GameplayConfig::from_ron_str(
            "(character: (capsule_radius: 34.0, capsule_half_height: 88.0, crouched_half_height: 34.0))",
        );
        assert!(config.is_ok());
    }

    #[test]
    fn test_world_gravity_is_along_y() {
        let config = GameplayConfig::from_ron_str("(world: (gravity_y: -500.0))").unwrap();
        assert_eq!(config.world.gravity_y, -500.0);
        assert_eq!(config.world.floor_height, 0.0);
    }

    #[test]
    fn test_inverted_pitch_limits_rejected() {
        let result =
            GameplayConfig::from_ron_str("(camera: (view_pitch_min: 10.0, view_pitch_max: -10.0))");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let result = GameplayConfig::from_ron_str("(character: 12");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error_and_fallback() {
        let path = "definitely/not/here/gameplay.ron";
        assert!(matches!(GameplayConfig::load(path), Err(ConfigError::Io { .. })));
        assert_eq!(GameplayConfig::load_or_default(path), GameplayConfig::default());
    }

    #[test]
    fn test_serialized_default_parses_back() {
        let text = GameplayConfig::default().to_ron_string().unwrap();
        let parsed = GameplayConfig::from_ron_str(&text).unwrap();
        assert_eq!(parsed, GameplayConfig::default());
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets/config/gameplay.ron");
        assert_eq!(GameplayConfig::load(path).unwrap(), GameplayConfig::default());
    }
}
