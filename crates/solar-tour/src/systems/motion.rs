//! Per-tick scene mutation: spin, orbits, label tracking.
//!
//! One call is one tick. Speeds are per tick, not per second, so a tick
//! rate change speeds the scene up; that matches how the tour has always
//! animated.

use std::f32::consts::TAU;

use crate::core::scene::{orbit_position, SceneHandle};

/// Turn the primary by its configured spin.
pub fn spin_primary(scene: &mut SceneHandle) {
    scene.primary.transform.rotation.y += scene.spin;
}

/// Advance every moon along its orbit and carry its label with it.
pub fn advance_moons(scene: &mut SceneHandle) {
    for moon in &mut scene.moons {
        moon.angle = (moon.angle + moon.orbit_speed).rem_euclid(TAU);
        moon.mesh.transform.translation = orbit_position(moon.orbit_radius, moon.angle);
        moon.mesh.transform.rotation.y += moon.spin;
        if let Some(label) = &mut moon.label {
            label.track(moon.mesh.transform.translation);
        }
    }
}

/// Keep the body label at its offset from the primary.
pub fn track_body_label(scene: &mut SceneHandle) {
    let anchor = scene.primary.transform.translation;
    if let Some(label) = &mut scene.label {
        label.track(anchor);
    }
}

/// Steps (a) to (c) of a tick, in order.
pub fn step(scene: &mut SceneHandle) {
    spin_primary(scene);
    advance_moons(scene);
    track_body_label(scene);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{BodyConfig, BodyId};
    use crate::config::TourConfig;
    use crate::systems::builder;
    use glam::Vec3;

    fn scene(id: BodyId) -> SceneHandle {
        builder::build(BodyConfig::for_body(id), &TourConfig::default(), 1280.0)
    }

    #[test]
    fn spin_accumulates() {
        let mut mars = scene(BodyId::Mars);
        for _ in 0..10 {
            step(&mut mars);
        }
        assert!((mars.primary.transform.rotation.y - 0.02).abs() < 1e-6);
        assert!((mars.moons[1].mesh.transform.rotation.y - 0.08).abs() < 1e-6);
    }

    #[test]
    fn moon_stays_on_its_orbit() {
        let mut earth = scene(BodyId::Earth);
        for _ in 0..500 {
            step(&mut earth);
        }
        let moon = &earth.moons[0];
        assert!((moon.mesh.transform.translation.length() - 10.0).abs() < 1e-3);
        assert!(moon.mesh.transform.translation.y.abs() < 1e-6);
        assert!((moon.angle - 2.5).abs() < 1e-3);
    }

    #[test]
    fn angle_wraps_into_range() {
        let mut earth = scene(BodyId::Earth);
        earth.moons[0].angle = TAU - 0.001;
        step(&mut earth);
        let angle = earth.moons[0].angle;
        assert!((0.0..TAU).contains(&angle));
        assert!((angle - 0.004).abs() < 1e-5);
    }

    #[test]
    fn stationary_model_keeps_position() {
        let mut intro = scene(BodyId::Intro);
        step(&mut intro);
        assert_eq!(intro.primary.transform.translation, Vec3::new(0.0, 5.0, 0.0));
        assert!((intro.primary.transform.rotation.y - (std::f32::consts::FRAC_PI_2 + 0.01)).abs() < 1e-6);
    }
}
