//! Scene construction.
//!
//! `build` is deterministic: the same body and viewport width always give
//! the same graph. Nothing is loaded here; meshes start untextured and the
//! labels absent, and every visible node starts at zero scale so the
//! entrance tween can grow it.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::bodies::{BodyConfig, LightConfig, PrimaryShape};
use crate::components::light::Light;
use crate::components::mesh::{Color, Material, Mesh};
use crate::components::transform::Transform;
use crate::config::TourConfig;
use crate::core::scene::{orbit_position, MoonNode, SceneHandle, SceneNode};
use crate::extensions::tween::{Tween, TweenState};
use crate::renderer::camera::PerspectiveCamera;

const MOON_SEGMENTS: u32 = 64;

fn hidden() -> Transform {
    Transform::new().with_scale(Vec3::ZERO)
}

pub fn light_from(config: &LightConfig) -> Light {
    match *config {
        LightConfig::Point {
            color,
            intensity,
            distance,
            decay,
            position,
        } => Light::point(color, intensity, distance, decay, position),
        LightConfig::Directional {
            color,
            intensity,
            position,
            ambient,
        } => Light::directional(color, intensity, position, ambient),
    }
}

/// Construct the scene graph of `body` for a viewport `window_width`
/// logical pixels wide.
pub fn build(body: &BodyConfig, tour: &TourConfig, window_width: f32) -> SceneHandle {
    let tag = body.name.to_lowercase();

    let primary = match &body.shape {
        PrimaryShape::Sphere { radius, segments } => {
            Mesh::sphere(*radius, *segments, Material::untextured(body.fallback_color))
                .with_tag(tag)
                .with_transform(hidden())
        }
        PrimaryShape::Model { position, yaw, .. } => {
            Mesh::model(Material::untextured(Color::WHITE))
                .with_tag(tag)
                .with_transform(
                    hidden()
                        .with_translation(*position)
                        .with_rotation(Vec3::new(0.0, *yaw, 0.0)),
                )
        }
    };

    let ring = body.ring.as_ref().map(|ring| {
        Mesh::ring(
            ring.inner,
            ring.outer,
            ring.segments,
            Material::untextured(body.fallback_color),
        )
        .with_tag("ring")
        .with_transform(hidden().with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0)))
    });

    let moons = body
        .moons
        .iter()
        .map(|moon| MoonNode {
            mesh: Mesh::sphere(moon.radius, MOON_SEGMENTS, Material::untextured(moon.fallback_color))
                .with_tag(moon.name.to_lowercase())
                .with_transform(hidden().with_translation(orbit_position(moon.orbit_radius, 0.0))),
            orbit_radius: moon.orbit_radius,
            orbit_speed: moon.orbit_speed,
            spin: moon.spin,
            angle: 0.0,
            label_config: moon.label.clone(),
            label: None,
        })
        .collect();

    let cam = &body.camera;
    let mut camera = PerspectiveCamera::new(cam.fov_degrees, 1.0, cam.near, cam.far);
    camera.position = Vec3::new(0.0, 0.0, cam.distance_for(window_width, tour.mobile_breakpoint));

    SceneHandle {
        body: body.id,
        primary,
        spin: body.spin,
        ring,
        moons,
        light: light_from(&body.light),
        camera,
        label_config: body.label.clone(),
        label: None,
    }
}

/// Entrance animation: the primary and its moons grow from nothing,
/// then the ring follows.
pub fn entrance(scene: &SceneHandle, tour: &TourConfig) -> TweenState {
    let mut tweens = TweenState::new();
    let grow = || Tween::scale_uniform(0.0, 1.0, tour.entrance_duration, tour.entrance_easing);

    tweens.add(SceneNode::Primary, grow());
    for i in 0..scene.moons.len() {
        tweens.add(SceneNode::Moon(i), grow());
    }
    if scene.ring.is_some() {
        tweens.add(SceneNode::Ring, grow().with_delay(tour.entrance_duration));
    }
    tweens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{BodyId, CameraConfig};
    use crate::components::light::LightKind;

    fn build_body(id: BodyId, width: f32) -> SceneHandle {
        build(BodyConfig::for_body(id), &TourConfig::default(), width)
    }

    #[test]
    fn earth_graph_shape() {
        let earth = build_body(BodyId::Earth, 1280.0);
        assert_eq!(earth.moons.len(), 1);
        assert!(earth.ring.is_none());
        assert_eq!(earth.primary.transform.translation, Vec3::ZERO);
        assert_eq!(earth.moons[0].mesh.transform.translation, Vec3::new(10.0, 0.0, 0.0));
        assert!(earth.label.is_none());
        assert_eq!(earth.camera.position, Vec3::new(0.0, 0.0, 20.0));
    }

    #[test]
    fn everything_starts_at_zero_scale() {
        let saturn = build_body(BodyId::Saturn, 1280.0);
        for mesh in saturn.meshes() {
            assert_eq!(mesh.transform.scale, Vec3::ZERO, "{}", mesh.tag);
        }
    }

    #[test]
    fn ring_lies_flat() {
        let saturn = build_body(BodyId::Saturn, 1280.0);
        let ring = saturn.ring.unwrap();
        assert_eq!(ring.transform.rotation.x, FRAC_PI_2);
        assert!(ring.material.double_sided);
    }

    #[test]
    fn mobile_camera_below_breakpoint() {
        assert_eq!(build_body(BodyId::Earth, 767.0).camera.position.z, 40.0);
        assert_eq!(build_body(BodyId::Earth, 768.0).camera.position.z, 20.0);
        // bodies without a mobile distance ignore the width
        assert_eq!(build_body(BodyId::Neptune, 320.0).camera.position.z, 15.0);
    }

    #[test]
    fn camera_planes_from_config() {
        let sun = build_body(BodyId::Sun, 1280.0);
        assert_eq!(sun.camera.far, 1000.0);
        assert_eq!(sun.camera.fov_degrees, 45.0);
        let CameraConfig { near, .. } = BodyConfig::for_body(BodyId::Sun).camera;
        assert_eq!(sun.camera.near, near);
    }

    #[test]
    fn intro_places_model() {
        let intro = build_body(BodyId::Intro, 1280.0);
        assert_eq!(intro.primary.transform.translation, Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(intro.primary.transform.rotation.y, FRAC_PI_2);
        assert!(matches!(intro.light.kind, LightKind::Directional));
        assert_eq!(intro.light.ambient, 1.0);
    }

    #[test]
    fn entrance_sequences_ring_after_planet() {
        let tour = TourConfig::default();
        let mut saturn = build_body(BodyId::Saturn, 1280.0);
        let mut tweens = entrance(&saturn, &tour);
        assert_eq!(tweens.len(), 2);

        tweens.tick(tour.entrance_duration, &mut saturn);
        assert_eq!(saturn.primary.transform.scale, Vec3::ONE);
        assert_eq!(saturn.ring.as_ref().unwrap().transform.scale, Vec3::ZERO);

        tweens.tick(tour.entrance_duration, &mut saturn);
        assert_eq!(saturn.ring.as_ref().unwrap().transform.scale, Vec3::ONE);
        assert!(tweens.is_empty());
    }

    #[test]
    fn entrance_grows_moons_with_planet() {
        let tour = TourConfig::default();
        let mars = build_body(BodyId::Mars, 1280.0);
        assert_eq!(entrance(&mars, &tour).len(), 3);
    }
}
