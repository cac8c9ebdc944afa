use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Perspective camera looking at a fixed target.
///
/// The projection matrix is cached and only rebuilt when the aspect ratio
/// or clip planes change, so repeated resizes to the same size are free.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
    projection: Mat4,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    /// Eye position, padded to 16 bytes.
    pub eye: [f32; 4],
}

impl PerspectiveCamera {
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            fov_degrees,
            aspect,
            near,
            far,
            position: Vec3::new(0.0, 0.0, 1.0),
            target: Vec3::ZERO,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection();
        camera
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Change the aspect ratio. Returns `true` if it actually changed.
    pub fn set_aspect(&mut self, aspect: f32) -> bool {
        if aspect == self.aspect {
            return false;
        }
        self.aspect = aspect;
        self.update_projection();
        true
    }

    /// Rebuild the cached projection from the current parameters.
    pub fn update_projection(&mut self) {
        self.projection =
            Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Distance from the camera to its target.
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Move along the current view direction to `distance` from the target.
    /// A camera sitting on its target is placed on +Z.
    pub fn set_distance(&mut self, distance: f32) {
        let dir = (self.position - self.target).try_normalize().unwrap_or(Vec3::Z);
        self.position = self.target + dir * distance;
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array_2d(),
            projection: self.projection.to_cols_array_2d(),
            eye: self.position.extend(1.0).to_array(),
        }
    }
}
