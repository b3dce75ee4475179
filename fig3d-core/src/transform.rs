/// Model transform helpers
use nalgebra::{Matrix3, Matrix4, Unit, Vector3};

/// Transform builder for figure placement and per-tick motion.
///
/// Rotation and translation compose on the right, so they act in the
/// figure's local frame and the placement translation stays put.
pub struct Transform;

impl Transform {
    /// Translation-only transform used as a figure's starting placement
    pub fn placement(translation: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new_translation(translation)
    }

    /// Rotate `model` in place by `angle` radians about `axis`
    pub fn rotate(model: &mut Matrix4<f32>, angle: f32, axis: &Unit<Vector3<f32>>) {
        if angle == 0.0 {
            return;
        }
        *model *= Matrix4::from_axis_angle(axis, angle);
    }

    /// Translate `model` in place along its local axes
    pub fn translate(model: &mut Matrix4<f32>, offset: &Vector3<f32>) {
        *model *= Matrix4::new_translation(offset);
    }

    /// World-space translation carried by `model`
    pub fn translation(model: &Matrix4<f32>) -> Vector3<f32> {
        Vector3::new(model[(0, 3)], model[(1, 3)], model[(2, 3)])
    }

    /// True when the linear part is orthonormal with positive determinant
    /// and the bottom row is untouched.
    pub fn is_rigid(model: &Matrix4<f32>, epsilon: f32) -> bool {
        let linear: Matrix3<f32> = model.fixed_view::<3, 3>(0, 0).into_owned();
        let orthonormal = (linear.transpose() * linear - Matrix3::identity()).norm() < epsilon;
        let bottom = model.fixed_view::<1, 4>(3, 0);
        let affine = (bottom[0].abs() + bottom[1].abs() + bottom[2].abs()) < epsilon
            && (bottom[3] - 1.0).abs() < epsilon;

        orthonormal && affine && linear.determinant() > 0.0
    }
}
