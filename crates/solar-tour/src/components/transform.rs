use glam::{EulerRot, Mat4, Quat, Vec3};

/// Position, Euler orientation (XYZ order, radians) and scale of a node.
///
/// Orientation is kept as Euler angles rather than a quaternion because
/// the render loop accumulates spin on one axis and tests read it back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Local-to-world matrix (translate · rotate · scale).
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.orientation(), self.translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn identity_by_default() {
        assert_eq!(Transform::default().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn matrix_applies_scale_then_rotation_then_translation() {
        let t = Transform::new()
            .with_translation(Vec3::new(1.0, 0.0, 0.0))
            .with_rotation(Vec3::new(0.0, FRAC_PI_2, 0.0))
            .with_scale(Vec3::splat(2.0));
        let p = t.matrix().transform_point3(Vec3::X);
        // X scaled to 2, yawed 90 degrees onto -Z, then shifted by +X.
        assert!((p - Vec3::new(1.0, 0.0, -2.0)).length() < 1e-5, "{:?}", p);
    }

    #[test]
    fn zero_scale_collapses_points() {
        let t = Transform::new().with_scale(Vec3::ZERO);
        assert_eq!(t.matrix().transform_point3(Vec3::new(3.0, 4.0, 5.0)), Vec3::ZERO);
    }
}
