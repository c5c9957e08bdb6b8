//! View orientation (control rotation) персонажа
//!
//! Углы в градусах:
//! - yaw > 0 → поворот вправо
//! - pitch > 0 → взгляд вверх
//! - roll > 0 → правое "крыло" вниз
//!
//! Мировые оси Bevy: +Y вверх, -Z вперёд, +X вправо.
//! yaw = 0 смотрит в -Z, yaw = 90 смотрит в +X.

use bevy::prelude::*;

/// Текущая ориентация камеры/контроллера — система отсчёта для movement input
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct ViewOrientation {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl ViewOrientation {
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Планарная ориентация: pitch обнулён, yaw/roll без изменений
    pub fn flattened(self) -> Self {
        Self { pitch: 0.0, ..self }
    }

    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            -self.yaw.to_radians(),
            self.pitch.to_radians(),
            -self.roll.to_radians(),
        )
    }

    pub fn forward(self) -> Vec3 {
        self.rotate_vector(Vec3::NEG_Z)
    }

    /// World-right (+X), повёрнутый этой ориентацией
    pub fn right(self) -> Vec3 {
        self.rotate_vector(Vec3::X)
    }

    pub fn rotate_vector(self, v: Vec3) -> Vec3 {
        self.to_quat() * v
    }

    /// Yaw в [0, 360)
    pub fn with_wrapped_yaw(self) -> Self {
        Self {
            yaw: self.yaw.rem_euclid(360.0),
            ..self
        }
    }
}

/// Yaw (градусы) из rotation тела: обратное к `ViewOrientation::to_quat` по Y
pub fn yaw_of(rotation: Quat) -> f32 {
    let (y, _, _) = rotation.to_euler(EulerRot::YXZ);
    (-y.to_degrees()).rem_euclid(360.0)
}

/// Rotation тела по yaw (градусы)
pub fn yaw_rotation(yaw: f32) -> Quat {
    Quat::from_rotation_y(-yaw.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_zero_orientation_axes() {
        let o = ViewOrientation::default();
        assert!(o.forward().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(o.right().abs_diff_eq(Vec3::X, EPS));
    }

    #[test]
    fn test_yaw_90_faces_right() {
        let o = ViewOrientation::new(0.0, 90.0, 0.0);
        assert!(o.forward().abs_diff_eq(Vec3::X, EPS), "forward = {:?}", o.forward());
        assert!(o.right().abs_diff_eq(Vec3::Z, EPS), "right = {:?}", o.right());
    }

    #[test]
    fn test_positive_pitch_looks_up() {
        let o = ViewOrientation::new(45.0, 0.0, 0.0);
        assert!(o.forward().y > 0.7);
    }

    #[test]
    fn test_flattened_zeroes_pitch_only() {
        let o = ViewOrientation::new(30.0, 123.0, 7.0).flattened();
        assert_eq!(o.pitch, 0.0);
        assert_eq!(o.yaw, 123.0);
        assert_eq!(o.roll, 7.0);
    }

    #[test]
    fn test_yaw_roundtrip_through_quat() {
        for yaw in [0.0, 45.0, 90.0, 179.0, 270.0, 359.0] {
            let back = yaw_of(yaw_rotation(yaw));
            let diff = (back - yaw).abs();
            assert!(diff < 1e-3 || (diff - 360.0).abs() < 1e-3, "{yaw} -> {back}");
        }
    }

    #[test]
    fn test_wrapped_yaw() {
        assert_eq!(ViewOrientation::new(0.0, -90.0, 0.0).with_wrapped_yaw().yaw, 270.0);
        assert_eq!(ViewOrientation::new(0.0, 450.0, 0.0).with_wrapped_yaw().yaw, 90.0);
    }
}
