//! Locomotion input mapping: 2D axis → movement/look относительно взгляда
//!
//! Move:
//! 1. Ориентация взгляда → flattened (pitch = 0), движение планарное
//! 2. forward = flattened.forward(), вес x
//! 3. right = world-right, повёрнутый flattened, вес y
//!
//! Диагональ (1, 1) НЕ нормализуется: два независимых вклада, суммарная
//! длина √2. Ограничение скорости — забота movement integrator.
//!
//! Look: yaw += x, pitch += y, без smoothing/clamp/sensitivity.

use bevy::prelude::*;

use crate::controller::{RotationInput, ViewOrientation};

/// (forward_amount, right_amount) одного input sample
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub struct MovementIntent {
    pub forward_amount: f32,
    pub right_amount: f32,
}

impl MovementIntent {
    /// Move axis sample: x = вперёд/назад, y = strafe
    pub fn from_axis(axis: Vec2) -> Self {
        Self {
            forward_amount: axis.x,
            right_amount: axis.y,
        }
    }
}

/// Вклад в movement integrator: unit direction × scale
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct MovementContribution {
    pub direction: Vec3,
    pub scale: f32,
}

impl MovementContribution {
    pub fn vector(&self) -> Vec3 {
        self.direction * self.scale
    }
}

/// Базис движения (forward, right) для ориентации взгляда
pub fn movement_basis(orientation: ViewOrientation) -> (Vec3, Vec3) {
    let flat = orientation.flattened();
    (flat.forward(), flat.right())
}

/// Move операция: [forward вклад, right вклад]
pub fn map_move(orientation: ViewOrientation, axis: Vec2) -> [MovementContribution; 2] {
    let intent = MovementIntent::from_axis(axis);
    let (forward, right) = movement_basis(orientation);

    [
        MovementContribution {
            direction: forward,
            scale: intent.forward_amount,
        },
        MovementContribution {
            direction: right,
            scale: intent.right_amount,
        },
    ]
}

/// Look операция: прибавляет sample к накопителю
pub fn map_look(accumulator: &mut RotationInput, axis: Vec2) {
    accumulator.add_yaw(axis.x);
    accumulator.add_pitch(axis.y);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn orientation_grid() -> Vec<ViewOrientation> {
        let mut out = Vec::new();
        for yaw in [-270.0, -45.0, 0.0, 33.0, 90.0, 180.0, 271.5, 720.0] {
            for pitch in [-89.0, -30.0, 0.0, 15.0, 60.0, 89.9] {
                for roll in [0.0, 10.0] {
                    out.push(ViewOrientation::new(pitch, yaw, roll));
                }
            }
        }
        out
    }

    #[test]
    fn test_basis_is_orthogonal_for_all_orientations() {
        for o in orientation_grid() {
            let (forward, right) = movement_basis(o);
            assert!(forward.dot(right).abs() < EPS, "{o:?}: f·r = {}", forward.dot(right));
            assert!((forward.length() - 1.0).abs() < EPS);
            assert!((right.length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_forward_is_planar_regardless_of_pitch() {
        for o in orientation_grid().into_iter().filter(|o| o.roll == 0.0) {
            let (forward, right) = movement_basis(o);
            assert!(forward.y.abs() < EPS, "{o:?}: forward = {forward:?}");
            assert!(right.y.abs() < EPS, "{o:?}: right = {right:?}");
        }
    }

    #[test]
    fn test_contributions_carry_raw_weights() {
        let axes = [-1.0, -0.5, 0.0, 0.25, 1.0];
        for o in orientation_grid() {
            for &x in &axes {
                for &y in &axes {
                    let [f, r] = map_move(o, Vec2::new(x, y));
                    assert_eq!(f.scale, x);
                    assert_eq!(r.scale, y);
                    assert!(f.direction.dot(r.direction).abs() < EPS);
                }
            }
        }
    }

    #[test]
    fn test_pitch_does_not_leak_into_forward() {
        // yaw=90, pitch=30, move (1, 0) → forward как у yaw=90 pitch=0
        let pitched = ViewOrientation::new(30.0, 90.0, 0.0);
        let level = ViewOrientation::new(0.0, 90.0, 0.0);

        let [f, _] = map_move(pitched, Vec2::new(1.0, 0.0));

        assert!(f.direction.abs_diff_eq(level.forward(), EPS));
        assert!(f.direction.abs_diff_eq(Vec3::X, EPS));
        assert_eq!(f.scale, 1.0);
    }

    #[test]
    fn test_diagonal_is_not_renormalized() {
        let [f, r] = map_move(ViewOrientation::default(), Vec2::new(1.0, 1.0));
        let total = f.vector() + r.vector();
        assert!((total.length() - 2f32.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_strafe_right_at_zero_yaw() {
        let [f, r] = map_move(ViewOrientation::default(), Vec2::new(0.0, 1.0));
        assert_eq!(f.scale, 0.0);
        assert!(r.vector().abs_diff_eq(Vec3::X, EPS));
    }

    #[test]
    fn test_look_is_additive_and_order_independent() {
        let samples = [Vec2::new(1.5, -0.25), Vec2::new(-3.0, 2.0), Vec2::new(0.5, 0.5)];

        let mut forward_order = RotationInput::default();
        for s in samples {
            map_look(&mut forward_order, s);
        }

        let mut reverse_order = RotationInput::default();
        for s in samples.iter().rev() {
            map_look(&mut reverse_order, *s);
        }

        assert_eq!(forward_order.yaw, 1.5 - 3.0 + 0.5);
        assert_eq!(forward_order.pitch, -0.25 + 2.0 + 0.5);
        assert!((forward_order.yaw - reverse_order.yaw).abs() < EPS);
        assert!((forward_order.pitch - reverse_order.pitch).abs() < EPS);
    }

    #[test]
    fn test_look_has_no_clamp() {
        let mut acc = RotationInput::default();
        map_look(&mut acc, Vec2::new(1000.0, 500.0));
        assert_eq!(acc.yaw, 1000.0);
        assert_eq!(acc.pitch, 500.0);
    }
}
