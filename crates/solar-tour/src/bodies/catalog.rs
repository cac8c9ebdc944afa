use std::f32::consts::FRAC_PI_2;
use std::sync::OnceLock;

use glam::Vec3;

use super::{
    BodyConfig, BodyId, CameraConfig, ControlsConfig, LabelConfig, LightConfig, MoonConfig,
    PrimaryShape, RingConfig,
};
use crate::components::mesh::Color;

const SPHERE_SEGMENTS: u32 = 64;
const RING_SEGMENTS: u32 = 64;

/// Reference self-rotation speed; slower bodies scale it by their
/// rotation period relative to Earth's day.
const BASE_SPIN: f32 = 0.005;

/// All bodies, indexed by `BodyId::index`. Built on first use.
pub fn catalog() -> &'static [BodyConfig] {
    static CATALOG: OnceLock<Vec<BodyConfig>> = OnceLock::new();
    CATALOG.get_or_init(|| BodyId::ALL.iter().map(|&id| build(id)).collect())
}

fn label(text: &str, size: f32, depth: f32, offset: Vec3) -> Option<LabelConfig> {
    Some(LabelConfig {
        text: text.to_string(),
        size,
        depth,
        offset,
    })
}

fn default_light() -> LightConfig {
    LightConfig::Point {
        color: Color::WHITE,
        intensity: 70.0,
        distance: 100.0,
        decay: 1.7,
        position: Vec3::new(10.0, 10.0, 10.0),
    }
}

/// Light sitting at the center of the body (self-lit bodies).
fn central_light() -> LightConfig {
    LightConfig::Point {
        color: Color::WHITE,
        intensity: 70.0,
        distance: 100.0,
        decay: 1.7,
        position: Vec3::ZERO,
    }
}

fn camera(distance: f32, mobile_distance: Option<f32>) -> CameraConfig {
    CameraConfig {
        distance,
        mobile_distance,
        fov_degrees: 45.0,
        near: 0.01,
        far: 100.0,
    }
}

const CONTROLS: ControlsConfig = ControlsConfig {
    enable_zoom: true,
    auto_rotate: false,
};

/// A sphere body with the common defaults; callers adjust the rest.
fn sphere(id: BodyId, radius: f32, surface: &str, fallback: u32, spin: f32) -> BodyConfig {
    BodyConfig {
        id,
        name: id.name().to_string(),
        shape: PrimaryShape::Sphere {
            radius,
            segments: SPHERE_SEGMENTS,
        },
        surface: Some(surface.to_string()),
        fallback_color: Color::from_hex(fallback),
        spin,
        ring: None,
        moons: Vec::new(),
        label: None,
        light: default_light(),
        camera: camera(20.0, None),
        controls: CONTROLS,
    }
}

fn build(id: BodyId) -> BodyConfig {
    match id {
        BodyId::Intro => BodyConfig {
            id,
            name: id.name().to_string(),
            shape: PrimaryShape::Model {
                path: "/le-solar-systme-v4.glb".to_string(),
                position: Vec3::new(0.0, 5.0, 0.0),
                yaw: FRAC_PI_2,
            },
            surface: None,
            fallback_color: Color::WHITE,
            spin: 0.01,
            ring: None,
            moons: Vec::new(),
            label: None,
            light: LightConfig::Directional {
                color: Color::WHITE,
                intensity: 1.0,
                position: Vec3::new(25.0, 25.0, 25.0),
                ambient: 1.0,
            },
            camera: camera(55.0, None),
            controls: ControlsConfig {
                enable_zoom: false,
                auto_rotate: false,
            },
        },

        BodyId::Sun => BodyConfig {
            label: label("Sun", 1.0, 0.1, Vec3::new(12.0, 0.0, 0.0)),
            light: central_light(),
            camera: CameraConfig {
                far: 1000.0,
                ..camera(30.0, Some(90.0))
            },
            ..sphere(id, 10.0, "/sunmap.jpg", 0xffb300, 0.002)
        },

        BodyId::Mercury => BodyConfig {
            label: label("Mercury", 0.2, 0.1, Vec3::new(2.0, 0.0, 0.0)),
            light: central_light(),
            camera: camera(10.0, None),
            ..sphere(id, 1.5, "/mercurymap.jpg", 0x9e9e9e, 0.004)
        },

        BodyId::Venus => BodyConfig {
            label: label("Venus", 0.5, 0.1, Vec3::new(6.0, 0.0, 0.0)),
            camera: camera(25.0, None),
            ..sphere(id, 4.0, "/venusmap.jpg", 0xe6c27a, BASE_SPIN / 2.64)
        },

        BodyId::Earth => BodyConfig {
            moons: vec![MoonConfig {
                name: "Moon".to_string(),
                radius: 0.4,
                texture: "/moonmap2k.jpg".to_string(),
                fallback_color: Color::from_hex(0xbdbdbd),
                orbit_radius: 10.0,
                orbit_speed: 0.005,
                spin: 0.0,
                label: label("Moon", 0.1, 0.01, Vec3::new(0.0, 0.7, 0.0)),
            }],
            label: label("Earth", 0.7, 0.01, Vec3::new(0.0, 4.0, 0.0)),
            camera: camera(20.0, Some(40.0)),
            controls: ControlsConfig {
                enable_zoom: true,
                auto_rotate: true,
            },
            ..sphere(id, 3.5, "/earthmap1k.jpg", 0x2a6bd1, BASE_SPIN)
        },

        BodyId::Mars => BodyConfig {
            moons: vec![
                MoonConfig {
                    name: "Phobos".to_string(),
                    radius: 0.5,
                    texture: "/phobosbump.jpg".to_string(),
                    fallback_color: Color::from_hex(0x8d7b6a),
                    orbit_radius: 6.0,
                    orbit_speed: 0.005,
                    spin: 0.005,
                    label: label("Phobos", 0.2, 0.05, Vec3::new(0.0, 0.7, 0.0)),
                },
                MoonConfig {
                    name: "Deimos".to_string(),
                    radius: 0.3,
                    texture: "/deimosbump.jpg".to_string(),
                    fallback_color: Color::from_hex(0xa39384),
                    orbit_radius: 8.0,
                    orbit_speed: 0.008,
                    spin: 0.008,
                    label: label("Deimos", 0.2, 0.05, Vec3::new(0.0, 0.4, 0.0)),
                },
            ],
            label: label("Mars", 0.7, 0.1, Vec3::new(0.0, 5.0, 0.0)),
            camera: camera(25.0, None),
            ..sphere(id, 4.0, "/mars_1k_color.jpg", 0xc1440e, 0.002)
        },

        BodyId::Jupiter => BodyConfig {
            label: label("Jupiter", 0.5, 0.1, Vec3::new(7.0, 0.0, 0.0)),
            camera: camera(20.0, Some(60.0)),
            ..sphere(id, 6.0, "/jupiter2_4k.jpg", 0xd8ca9d, 0.002)
        },

        BodyId::Saturn => BodyConfig {
            ring: Some(RingConfig {
                inner: 5.0,
                outer: 6.0,
                segments: RING_SEGMENTS,
                texture: "/saturnringcolor.jpg".to_string(),
            }),
            label: label("Saturn", 0.5, 0.01, Vec3::new(4.5, 0.0, 0.0)),
            light: LightConfig::Point {
                color: Color::WHITE,
                intensity: 70.0,
                distance: 100.0,
                decay: 1.0,
                position: Vec3::new(10.0, 10.0, 10.0),
            },
            camera: camera(15.0, Some(40.0)),
            ..sphere(id, 4.0, "/saturnmap.jpg", 0xead6b8, BASE_SPIN / 10.5)
        },

        BodyId::Uranus => BodyConfig {
            ring: Some(RingConfig {
                inner: 4.0,
                outer: 4.5,
                segments: RING_SEGMENTS,
                texture: "/uranusringcolour.jpg".to_string(),
            }),
            label: label("Uranus", 0.4, 0.1, Vec3::new(3.5, 3.5, 0.0)),
            camera: camera(15.0, Some(35.0)),
            ..sphere(id, 3.5, "/uranusmap.jpg", 0x9fe3e8, BASE_SPIN / 17.24)
        },

        BodyId::Neptune => BodyConfig {
            label: label("Neptune", 0.5, 0.1, Vec3::new(4.3, 0.0, 0.0)),
            camera: camera(15.0, None),
            ..sphere(id, 3.8, "/neptunemap.jpg", 0x3f54ba, BASE_SPIN / 16.11)
        },

        BodyId::Pluto => BodyConfig {
            shape: PrimaryShape::Sphere {
                radius: 0.1,
                segments: 32,
            },
            label: label("Pluto", 0.02, 0.001, Vec3::new(0.15, 0.0, 0.0)),
            light: central_light(),
            camera: camera(1.5, None),
            ..sphere(id, 0.1, "/plutomap2k.jpg", 0xc2a98a, BASE_SPIN)
        },
    }
}
