//! Controller компоненты: накопитель look input и ограничения взгляда

use bevy::prelude::*;

/// Накопитель look input за кадр
///
/// Чистая сумма: `add(x, y)` → yaw += x, pitch += y.
/// Без smoothing/clamp/sensitivity (sensitivity — настройка action source).
/// Сбрасывается в `apply_rotation_input` после применения к `ViewOrientation`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct RotationInput {
    pub yaw: f32,
    pub pitch: f32,
}

impl RotationInput {
    pub fn add_yaw(&mut self, value: f32) {
        self.yaw += value;
    }

    pub fn add_pitch(&mut self, value: f32) {
        self.pitch += value;
    }

    pub fn is_zero(&self) -> bool {
        self.yaw == 0.0 && self.pitch == 0.0
    }

    /// Забрать накопленное и обнулить
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

/// Ограничения pitch (градусы), применяются host-слоем, не look операцией
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ViewPitchLimits {
    pub min: f32,
    pub max: f32,
}

impl Default for ViewPitchLimits {
    fn default() -> Self {
        Self {
            min: -89.9,
            max: 89.9,
        }
    }
}

impl ViewPitchLimits {
    pub fn clamp(&self, pitch: f32) -> f32 {
        pitch.clamp(self.min, self.max)
    }
}
