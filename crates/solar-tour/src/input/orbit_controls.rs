//! Orbit camera: drag to rotate around the target, wheel to zoom,
//! inertial damping, optional auto-rotation.
//!
//! Like the browser control it stands in for, the controller keeps no
//! copy of the camera position. Each `update` reads the camera's offset
//! from the target as spherical coordinates, applies the pending deltas
//! and writes the position back, so anything else that moves the camera
//! (the viewport binder switching to the mobile distance) is picked up.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::queue::InputEvent;
use crate::bodies::ControlsConfig;
use crate::renderer::camera::PerspectiveCamera;

/// Fraction of the pending rotation applied per update.
pub const DAMPING_FACTOR: f32 = 0.05;

/// Per-notch zoom factor.
const ZOOM_SCALE: f32 = 0.95;

/// Keeps the camera off the poles.
const POLE_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_zoom: bool,
    pub auto_rotate: bool,
    /// Auto-rotation speed; 2.0 is one turn every 30 s at 60 updates/s.
    pub auto_rotate_speed: f32,
    pub rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Pending azimuth change, radians.
    delta_theta: f32,
    /// Pending polar change, radians.
    delta_phi: f32,
    /// Pending radius multiplier.
    scale: f32,
    /// Last pointer position while dragging.
    drag: Option<(f32, f32)>,
}

impl OrbitControls {
    pub fn new(config: &ControlsConfig) -> Self {
        Self {
            target: Vec3::ZERO,
            enable_zoom: config.enable_zoom,
            auto_rotate: config.auto_rotate,
            auto_rotate_speed: 2.0,
            rotate_speed: 1.0,
            min_distance: 0.01,
            max_distance: f32::INFINITY,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            drag: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Feed one pointer event. `viewport_height` converts pixel deltas to
    /// angles: dragging the full height turns the camera once around.
    pub fn handle(&mut self, event: InputEvent, viewport_height: f32) {
        match event {
            InputEvent::PointerDown { x, y } => self.drag = Some((x, y)),
            InputEvent::PointerUp { .. } => self.drag = None,
            InputEvent::PointerMove { x, y } => {
                let Some((last_x, last_y)) = self.drag else {
                    return;
                };
                let height = viewport_height.max(1.0);
                self.delta_theta -= TAU * (x - last_x) / height * self.rotate_speed;
                self.delta_phi -= TAU * (y - last_y) / height * self.rotate_speed;
                self.drag = Some((x, y));
            }
            InputEvent::Wheel { delta_y } => {
                if !self.enable_zoom || delta_y == 0.0 {
                    return;
                }
                if delta_y < 0.0 {
                    self.scale *= ZOOM_SCALE;
                } else {
                    self.scale /= ZOOM_SCALE;
                }
            }
        }
    }

    fn auto_rotate_angle(&self) -> f32 {
        TAU / 60.0 / 60.0 * self.auto_rotate_speed
    }

    /// Integrate one step. Returns `true` if the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let offset = camera.position - self.target;
        let mut radius = offset.length();
        let (mut theta, mut phi) = if radius > 0.0 {
            (offset.x.atan2(offset.z), (offset.y / radius).clamp(-1.0, 1.0).acos())
        } else {
            (0.0, PI / 2.0)
        };

        if self.auto_rotate && self.drag.is_none() {
            self.delta_theta -= self.auto_rotate_angle();
        }

        theta += self.delta_theta * DAMPING_FACTOR;
        phi += self.delta_phi * DAMPING_FACTOR;
        phi = phi.clamp(POLE_EPSILON, PI - POLE_EPSILON);
        radius = (radius * self.scale).clamp(self.min_distance, self.max_distance);

        let new_offset = Vec3::new(
            radius * phi.sin() * theta.sin(),
            radius * phi.cos(),
            radius * phi.sin() * theta.cos(),
        );
        let position = self.target + new_offset;
        let moved = position.distance_squared(camera.position) > 1e-10;
        camera.position = position;
        camera.target = self.target;

        self.delta_theta *= 1.0 - DAMPING_FACTOR;
        self.delta_phi *= 1.0 - DAMPING_FACTOR;
        self.scale = 1.0;

        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(auto_rotate: bool) -> (OrbitControls, PerspectiveCamera) {
        let controls = OrbitControls::new(&ControlsConfig {
            enable_zoom: true,
            auto_rotate,
        });
        let mut camera = PerspectiveCamera::new(45.0, 1.0, 0.01, 100.0);
        camera.position = Vec3::new(0.0, 0.0, 20.0);
        (controls, camera)
    }

    #[test]
    fn idle_controls_leave_camera_alone() {
        let (mut controls, mut camera) = setup(false);
        assert!(!controls.update(&mut camera));
        assert!((camera.position - Vec3::new(0.0, 0.0, 20.0)).length() < 1e-4);
    }

    #[test]
    fn drag_rotates_with_inertia() {
        let (mut controls, mut camera) = setup(false);
        controls.handle(InputEvent::PointerDown { x: 100.0, y: 100.0 }, 800.0);
        controls.handle(InputEvent::PointerMove { x: 200.0, y: 100.0 }, 800.0);
        controls.handle(InputEvent::PointerUp { x: 200.0, y: 100.0 }, 800.0);

        assert!(controls.update(&mut camera));
        let first = camera.position;
        // keeps drifting after release, but less each step
        assert!(controls.update(&mut camera));
        let second = camera.position;
        assert!(first.distance(Vec3::new(0.0, 0.0, 20.0)) > second.distance(first));
        assert!((camera.distance() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn move_without_press_is_ignored() {
        let (mut controls, mut camera) = setup(false);
        controls.handle(InputEvent::PointerMove { x: 500.0, y: 500.0 }, 800.0);
        assert!(!controls.update(&mut camera));
    }

    #[test]
    fn wheel_up_zooms_in() {
        let (mut controls, mut camera) = setup(false);
        controls.handle(InputEvent::Wheel { delta_y: -100.0 }, 800.0);
        controls.update(&mut camera);
        assert!((camera.distance() - 20.0 * ZOOM_SCALE).abs() < 1e-3);
        // zoom is not damped: the next update leaves the radius alone
        controls.update(&mut camera);
        assert!((camera.distance() - 20.0 * ZOOM_SCALE).abs() < 1e-3);
    }

    #[test]
    fn wheel_ignored_when_zoom_disabled() {
        let (mut controls, mut camera) = setup(false);
        controls.enable_zoom = false;
        controls.handle(InputEvent::Wheel { delta_y: 100.0 }, 800.0);
        controls.update(&mut camera);
        assert!((camera.distance() - 20.0).abs() < 1e-4);
    }

    #[test]
    fn auto_rotate_orbits_at_constant_height() {
        let (mut controls, mut camera) = setup(true);
        for _ in 0..120 {
            controls.update(&mut camera);
        }
        assert!(camera.position.x.abs() > 0.01);
        assert!(camera.position.y.abs() < 1e-3);
        assert!((camera.distance() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn polar_angle_stays_off_the_pole() {
        let (mut controls, mut camera) = setup(false);
        controls.handle(InputEvent::PointerDown { x: 0.0, y: 0.0 }, 100.0);
        controls.handle(InputEvent::PointerMove { x: 0.0, y: 10_000.0 }, 100.0);
        for _ in 0..200 {
            controls.update(&mut camera);
        }
        assert!(camera.position.is_finite());
        assert!((camera.distance() - 20.0).abs() < 1e-2);
    }
}
